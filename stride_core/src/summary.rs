//! Human-readable summary formatting for workout reports.

use crate::WorkoutReport;

impl WorkoutReport {
    /// Render the fixed summary line for this report
    ///
    /// Every numeric field is formatted to exactly three decimal places
    /// (fixed-point, round half to even). Never fails for reports built
    /// by the metrics calculator.
    pub fn summary(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}
