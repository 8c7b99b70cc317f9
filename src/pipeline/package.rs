use std::path::Path;

use crate::error::{LoadError, TrainingError};
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::workout::{Package, WorkoutType};

/// Resolves a workout code and builds the matching calculator from its
/// positional values.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, TrainingError> {
    let kind = WorkoutType::from_code(code)
        .ok_or_else(|| TrainingError::UnknownWorkoutCode(code.to_string()))?;

    let workout = match kind {
        WorkoutType::Run => Workout::Running(Running::from_values(values)?),
        WorkoutType::Wlk => Workout::SportsWalking(SportsWalking::from_values(values)?),
        WorkoutType::Swm => Workout::Swimming(Swimming::from_values(values)?),
    };

    Ok(workout)
}

pub fn parse_packages(bytes: &[u8]) -> Result<Vec<Package>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn load_packages(path: &Path) -> Result<Vec<Package>, LoadError> {
    let bytes = std::fs::read(path)?;
    let packages = parse_packages(&bytes)?;
    tracing::info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
