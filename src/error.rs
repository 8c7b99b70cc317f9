#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("Unknown workout code: {0}")]
    UnknownWorkoutCode(String),
    #[error("{workout} expects {expected} values, got {actual}")]
    ArgumentArityMismatch {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Calorie calculation is not implemented for {0}")]
    NotImplementedCalculation(&'static str),
    #[error("Zero duration in {0} workout")]
    DivisionByZero(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read packages file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid packages file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Training(#[from] TrainingError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Failed to encode report: {0}")]
    Output(String),
}
