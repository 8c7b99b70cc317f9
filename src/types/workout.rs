use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutType {
    Run,
    Wlk,
    Swm,
}

impl WorkoutType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutType::Run),
            "WLK" => Some(WorkoutType::Wlk),
            "SWM" => Some(WorkoutType::Swm),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            WorkoutType::Run => "RUN",
            WorkoutType::Wlk => "WLK",
            WorkoutType::Swm => "SWM",
        }
    }

    /// Name printed as the training type in the summary line.
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Run => "Running",
            WorkoutType::Wlk => "SportsWalking",
            WorkoutType::Swm => "Swimming",
        }
    }

    /// Number of positional sensor values the workout is built from.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutType::Run => 3,
            WorkoutType::Wlk => 4,
            WorkoutType::Swm => 5,
        }
    }
}

/// One raw sensor reading: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    /// Readings the tracker ships with when no packages file is configured.
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", [15000.0, 1.0, 75.0]),
            Self::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
