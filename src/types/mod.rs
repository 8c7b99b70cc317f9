pub mod message;
pub mod workout;
