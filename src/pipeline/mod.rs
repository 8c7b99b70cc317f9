pub mod package;
pub mod report;
