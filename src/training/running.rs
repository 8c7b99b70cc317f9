use super::{check_arity, Training, TrainingData, MIN_IN_H, M_IN_KM};
use crate::error::TrainingError;
use crate::types::workout::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub data: TrainingData,
}

impl Running {
    const LEN_STEP: f64 = 0.65;
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
        }
    }

    /// Builds from `[action, duration, weight]`.
    pub fn from_values(values: &[f64]) -> Result<Self, TrainingError> {
        let kind = WorkoutType::Run;
        check_arity(kind.name(), kind.arity(), values)?;
        Ok(Self {
            data: TrainingData::from_leading(values),
        })
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Run.name()
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let speed = self.mean_speed()?;
        let per_minute = (Self::CALORIES_SPEED_MULTIPLIER * speed - Self::CALORIES_SPEED_SHIFT)
            * self.data.weight
            / M_IN_KM;
        Ok(per_minute * self.data.duration * MIN_IN_H)
    }
}
