use rayon::prelude::*;

use crate::config::OutputFormat;
use crate::error::{AppError, TrainingError};
use crate::pipeline::package::read_package;
use crate::types::message::InfoMessage;
use crate::types::workout::Package;

/// What to do with a package that cannot be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing package.
    #[default]
    Abort,
    /// Log the failure and carry on with the rest of the batch.
    Skip,
}

impl FailurePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Some(FailurePolicy::Abort),
            "skip" => Some(FailurePolicy::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub on_error: FailurePolicy,
    pub parallel: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub messages: Vec<InfoMessage>,
    pub skipped: usize,
}

impl Report {
    /// Text output is one summary line per workout; JSON is an array of
    /// summaries.
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        match format {
            OutputFormat::Text => Ok(self
                .messages
                .iter()
                .map(InfoMessage::get_message)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(&self.messages)
                .map_err(|e| AppError::Output(e.to_string())),
        }
    }
}

pub fn summarize(package: &Package) -> Result<InfoMessage, TrainingError> {
    let workout = read_package(&package.code, &package.values)?;
    let info = workout.show_training_info()?;
    tracing::debug!(
        "{} package: {:.3} km at {:.3} km/h",
        package.code,
        info.distance,
        info.speed
    );
    Ok(info)
}

/// Summarizes every package, keeping input order.
pub fn process(packages: &[Package], options: &ReportOptions) -> Result<Report, TrainingError> {
    let results: Vec<Result<InfoMessage, TrainingError>> = if options.parallel {
        packages.par_iter().map(summarize).collect()
    } else {
        packages.iter().map(summarize).collect()
    };

    let mut report = Report {
        messages: Vec::with_capacity(results.len()),
        skipped: 0,
    };

    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(info) => report.messages.push(info),
            Err(err) => match options.on_error {
                FailurePolicy::Abort => {
                    tracing::error!("Package #{} failed: {}", idx, err);
                    return Err(err);
                }
                FailurePolicy::Skip => {
                    tracing::warn!("Skipping package #{}: {}", idx, err);
                    report.skipped += 1;
                }
            },
        }
    }

    tracing::info!(
        "Processed {} packages ({} summarized, {} skipped)",
        packages.len(),
        report.messages.len(),
        report.skipped
    );

    Ok(report)
}
