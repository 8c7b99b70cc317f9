use super::{check_arity, per_hour, Training, TrainingData, M_IN_KM};
use crate::error::TrainingError;
use crate::types::workout::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub data: TrainingData,
    /// Meters.
    pub length_pool: f64,
    pub count_pool: f64,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    /// Builds from `[action, duration, weight, length_pool, count_pool]`.
    pub fn from_values(values: &[f64]) -> Result<Self, TrainingError> {
        let kind = WorkoutType::Swm;
        check_arity(kind.name(), kind.arity(), values)?;
        Ok(Self {
            data: TrainingData::from_leading(values),
            length_pool: values[3],
            count_pool: values[4],
        })
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Swm.name()
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Speed over the laps swum, not over the stroke distance.
    fn mean_speed(&self) -> Result<f64, TrainingError> {
        let pool_km = self.length_pool * self.count_pool / M_IN_KM;
        per_hour(pool_km, self.data.duration, self.training_type())
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let speed = self.mean_speed()?;
        Ok((speed + Self::CALORIES_SPEED_SHIFT) * Self::CALORIES_WEIGHT_MULTIPLIER * self.data.weight)
    }
}
