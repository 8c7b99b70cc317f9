//! Workout calculators.
//!
//! Every workout shares the step-based distance and the distance-over-time
//! speed; each variant brings its own calorie formula. Swimming also replaces
//! the speed with one derived from pool laps.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::TrainingError;
use crate::types::message::InfoMessage;
use crate::types::workout::WorkoutType;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes.
    pub action: f64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingData {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Takes the leading `[action, duration, weight]` values. The caller checks
    /// the length beforehand.
    fn from_leading(values: &[f64]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

pub trait Training {
    fn data(&self) -> &TrainingData;

    fn training_type(&self) -> &'static str;

    /// Meters covered per action.
    fn len_step(&self) -> f64;

    /// Kilometers.
    fn distance(&self) -> f64 {
        self.data().action * self.len_step() / M_IN_KM
    }

    /// Kilometers per hour.
    fn mean_speed(&self) -> Result<f64, TrainingError> {
        per_hour(self.distance(), self.data().duration, self.training_type())
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::NotImplementedCalculation(self.training_type()))
    }

    fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.data().duration,
            distance: self.distance(),
            speed: self.mean_speed()?,
            calories: self.spent_calories()?,
        })
    }
}

/// Workout without a calorie model of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTraining {
    pub data: TrainingData,
}

impl BaseTraining {
    const LEN_STEP: f64 = 0.65;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
        }
    }
}

impl Training for BaseTraining {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }
}

/// A workout resolved from its type code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => WorkoutType::Run,
            Workout::SportsWalking(_) => WorkoutType::Wlk,
            Workout::Swimming(_) => WorkoutType::Swm,
        }
    }

    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }

    pub fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        self.as_training().show_training_info()
    }
}

pub(crate) fn check_arity(
    workout: &'static str,
    expected: usize,
    values: &[f64],
) -> Result<(), TrainingError> {
    if values.len() != expected {
        return Err(TrainingError::ArgumentArityMismatch {
            workout,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

pub(crate) fn per_hour(
    distance_km: f64,
    duration: f64,
    workout: &'static str,
) -> Result<f64, TrainingError> {
    if duration == 0.0 {
        return Err(TrainingError::DivisionByZero(workout));
    }
    Ok(distance_km / duration)
}
