use super::{check_arity, Training, TrainingData, MIN_IN_H};
use crate::error::TrainingError;
use crate::types::workout::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub data: TrainingData,
    /// Centimeters.
    pub height: f64,
}

impl SportsWalking {
    const LEN_STEP: f64 = 0.65;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            height,
        }
    }

    /// Builds from `[action, duration, weight, height]`.
    pub fn from_values(values: &[f64]) -> Result<Self, TrainingError> {
        let kind = WorkoutType::Wlk;
        check_arity(kind.name(), kind.arity(), values)?;
        Ok(Self {
            data: TrainingData::from_leading(values),
            height: values[3],
        })
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Wlk.name()
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let speed = self.mean_speed()?;
        if self.height == 0.0 {
            return Err(TrainingError::DivisionByZero(self.training_type()));
        }
        // Whole number of speed^2 / height units, the fraction is dropped.
        let speed_height_ratio = (speed.powi(2) / self.height).floor();
        let per_minute = Self::CALORIES_WEIGHT_MULTIPLIER * self.data.weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.data.weight;
        Ok(per_minute * self.data.duration * MIN_IN_H)
    }
}
