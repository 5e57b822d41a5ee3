//! Metrics calculator for the three workout variants.
//!
//! This module derives distance, mean speed and calorie expenditure from
//! the raw readings:
//! - Running and sports walking measure distance by step count
//! - Swimming measures distance by pool length and lap count
//! - Each variant has its own calorie formula
//!
//! All operations are pure functions of the workout value; calling them
//! twice yields bit-identical results.

use crate::{Workout, WorkoutKind, WorkoutReport};

/// Stride length assumed per step for running and walking, in meters
const STEP_LENGTH_M: f64 = 0.65;

/// Meters per kilometer
const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
const MINUTES_PER_HOUR: f64 = 60.0;

// Calorie coefficients, per variant
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_OFFSET: f64 = 20.0;
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWIM_SPEED_OFFSET: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

impl Workout {
    /// Distance covered during the workout, in kilometers
    ///
    /// Step-based variants multiply the action count by the assumed
    /// stride length; swimming uses the pool dimensions instead.
    pub fn distance_km(&self) -> f64 {
        match &self.kind {
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => {
                f64::from(self.action_count) * STEP_LENGTH_M / M_IN_KM
            }
            WorkoutKind::Swimming {
                pool_length_m,
                pool_laps,
            } => pool_length_m * f64::from(*pool_laps) / M_IN_KM,
        }
    }

    /// Mean speed over the workout, in km/h
    pub fn mean_speed_kmh(&self) -> f64 {
        // duration_hours > 0 is guaranteed by the constructors
        self.distance_km() / self.duration_hours
    }

    /// Calorie expenditure for the workout, in kcal
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();

        match &self.kind {
            WorkoutKind::Running => {
                let duration_minutes = self.duration_hours * MINUTES_PER_HOUR;
                (RUN_SPEED_FACTOR * speed - RUN_SPEED_OFFSET) * self.weight_kg / M_IN_KM
                    * duration_minutes
            }
            WorkoutKind::SportsWalking { height_cm } => {
                let duration_minutes = self.duration_hours * MINUTES_PER_HOUR;
                // The squared-speed term uses floor division by height
                let speed_height_term = (speed * speed / height_cm).floor();
                (WALK_WEIGHT_FACTOR * self.weight_kg
                    + speed_height_term * WALK_SPEED_HEIGHT_FACTOR * self.weight_kg)
                    * duration_minutes
            }
            WorkoutKind::Swimming { .. } => {
                (speed + SWIM_SPEED_OFFSET) * SWIM_WEIGHT_FACTOR * self.weight_kg
            }
        }
    }

    /// Derive the full report for this workout
    ///
    /// Computes distance and mean speed before calories, since the
    /// running and swimming calorie formulas depend on the speed.
    pub fn report(&self) -> WorkoutReport {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories_kcal = self.calories_kcal();

        tracing::debug!(
            "Computed {} report: {:.3} km at {:.3} km/h",
            self.kind.name(),
            distance_km,
            mean_speed_kmh
        );

        WorkoutReport {
            workout_name: self.kind.name().to_string(),
            duration_hours: self.duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }
}
