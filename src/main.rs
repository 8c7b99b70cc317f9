use std::process::ExitCode;

use fitness_tracker::config::Config;
use fitness_tracker::error::AppError;
use fitness_tracker::pipeline::{package, report};
use fitness_tracker::types::workout::Package;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitness_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let packages = match &config.packages_file {
        Some(path) => package::load_packages(path)?,
        None => Package::samples(),
    };

    let report = report::process(&packages, &config.report_options())?;

    let output = report.render(config.output)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
