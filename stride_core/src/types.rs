//! Core domain types for the Stride fitness system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout variants and their raw sensor readings
//! - Derived workout reports
//!
//! Workouts are built through the validating constructors; readings that
//! would make the formulas divide by zero (or produce negative figures)
//! are rejected up front with [`Error::InvalidInput`].

use crate::{Error, Result};
use serde::Serialize;

// ============================================================================
// Workout Variants
// ============================================================================

/// Variant-specific readings for the three supported workout types
///
/// The base workout on its own is not a thing that can exist; every
/// workout carries exactly one of these.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    SportsWalking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_laps: u32 },
}

impl WorkoutKind {
    /// Display name of the variant, as embedded in summaries
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking { .. } => "SportsWalking",
            WorkoutKind::Swimming { .. } => "Swimming",
        }
    }
}

// ============================================================================
// Workout (raw readings)
// ============================================================================

/// Immutable raw sensor readings for a single workout
///
/// `action_count` is the step or stroke count reported by the sensor.
/// Construct through [`Workout::running`], [`Workout::sports_walking`] or
/// [`Workout::swimming`]; the constructors enforce the preconditions the
/// metric formulas rely on.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Workout {
    pub(crate) action_count: u32,
    pub(crate) duration_hours: f64,
    pub(crate) weight_kg: f64,
    pub(crate) kind: WorkoutKind,
}

impl Workout {
    /// Build a running workout from raw readings
    pub fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        validate_common(duration_hours, weight_kg)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: WorkoutKind::Running,
        })
    }

    /// Build a sports-walking workout from raw readings
    ///
    /// Requires the athlete's height; the walking calorie formula divides
    /// by it.
    pub fn sports_walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        validate_common(duration_hours, weight_kg)?;
        validate_positive("height_cm", height_cm)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: WorkoutKind::SportsWalking { height_cm },
        })
    }

    /// Build a swimming workout from raw readings
    ///
    /// Requires the pool length and the number of laps swum; swimming
    /// distance comes from the pool, not the stroke count.
    pub fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self> {
        validate_common(duration_hours, weight_kg)?;
        validate_positive("pool_length_m", pool_length_m)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: WorkoutKind::Swimming {
                pool_length_m,
                pool_laps,
            },
        })
    }

    /// The variant-specific readings carried by this workout
    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    /// Duration of the workout in hours (always positive)
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }
}

/// Check the readings shared by every variant
fn validate_common(duration_hours: f64, weight_kg: f64) -> Result<()> {
    validate_positive("duration_hours", duration_hours)?;
    validate_positive("weight_kg", weight_kg)?;
    Ok(())
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    // `!(value > 0.0)` also rejects NaN
    if !(value > 0.0) {
        return Err(Error::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}

// ============================================================================
// Workout Report
// ============================================================================

/// Derived metrics for one workout, ready for formatting
///
/// Created once per computation and never mutated; the summary formatter
/// is its only consumer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WorkoutReport {
    pub workout_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
