use std::path::PathBuf;

use crate::pipeline::report::{FailurePolicy, ReportOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub packages_file: Option<PathBuf>,
    pub on_error: FailurePolicy,
    pub parallel: bool,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for missing
    /// or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let packages_file = lookup("FITNESS_PACKAGES_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let on_error = lookup("FITNESS_ON_ERROR")
            .and_then(|s| FailurePolicy::from_str(s.trim()))
            .unwrap_or_default();

        let parallel = lookup("FITNESS_PARALLEL")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        let output = lookup("FITNESS_OUTPUT")
            .and_then(|s| OutputFormat::from_str(s.trim()))
            .unwrap_or_default();

        Self {
            packages_file,
            on_error,
            parallel,
            output,
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            on_error: self.on_error,
            parallel: self.parallel,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
