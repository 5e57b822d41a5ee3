//! Dispatch from sensor packet codes to workout variants.
//!
//! Sensor packets arrive as a short workout-type code plus an ordered
//! list of numeric readings. This module looks the code up, unpacks the
//! positional readings and hands them to the matching `Workout`
//! constructor. The core library never sees a packet.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stride_core::{Error, Result, Workout};

/// Variant selector used by the dispatch table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VariantCode {
    Running,
    SportsWalking,
    Swimming,
}

/// Workout-type codes as emitted by the sensor firmware
static DISPATCH: Lazy<HashMap<&'static str, VariantCode>> = Lazy::new(|| {
    HashMap::from([
        ("RUN", VariantCode::Running),
        ("WLK", VariantCode::SportsWalking),
        ("SWM", VariantCode::Swimming),
    ])
});

/// One raw packet from the sensor feed
///
/// Serialized as a single JSON object per line, e.g.
/// `{"workout_type": "SWM", "readings": [720, 1, 80, 25, 40]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorPacket {
    pub workout_type: String,
    pub readings: Vec<f64>,
}

impl SensorPacket {
    /// Decode this packet into a validated workout
    pub fn decode(&self) -> Result<Workout> {
        decode_packet(&self.workout_type, &self.readings)
    }
}

/// Decode a workout-type code and positional readings into a workout
///
/// Reading order matches the sensor feed: action count, duration in
/// hours, weight in kg, then the variant-specific readings (height for
/// walking; pool length and lap count for swimming).
pub fn decode_packet(code: &str, readings: &[f64]) -> Result<Workout> {
    let variant = DISPATCH
        .get(code)
        .copied()
        .ok_or_else(|| Error::UnknownWorkoutCode(code.to_string()))?;

    tracing::debug!("Decoding {} packet with {} readings", code, readings.len());

    match variant {
        VariantCode::Running => Workout::running(
            count_reading(readings, 0, "action_count")?,
            reading(readings, 1, "duration_hours")?,
            reading(readings, 2, "weight_kg")?,
        ),
        VariantCode::SportsWalking => Workout::sports_walking(
            count_reading(readings, 0, "action_count")?,
            reading(readings, 1, "duration_hours")?,
            reading(readings, 2, "weight_kg")?,
            reading(readings, 3, "height_cm")?,
        ),
        VariantCode::Swimming => Workout::swimming(
            count_reading(readings, 0, "action_count")?,
            reading(readings, 1, "duration_hours")?,
            reading(readings, 2, "weight_kg")?,
            reading(readings, 3, "pool_length_m")?,
            count_reading(readings, 4, "pool_laps")?,
        ),
    }
}

/// Fetch one positional reading, failing if the packet is too short
fn reading(readings: &[f64], index: usize, field: &str) -> Result<f64> {
    readings
        .get(index)
        .copied()
        .ok_or_else(|| Error::MissingParameter(format!("{} (reading {})", field, index)))
}

/// Fetch a reading that must be a non-negative whole number
fn count_reading(readings: &[f64], index: usize, field: &str) -> Result<u32> {
    let value = reading(readings, index, field)?;
    if !(value >= 0.0) || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidInput(format!(
            "{} must be a non-negative whole number, got {}",
            field, value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::WorkoutKind;

    #[test]
    fn test_decode_running_packet() {
        let workout = decode_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.kind(), &WorkoutKind::Running);
    }

    #[test]
    fn test_decode_walking_packet() {
        let workout = decode_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(workout.kind(), &WorkoutKind::SportsWalking { height_cm: 180.0 });
    }

    #[test]
    fn test_decode_swimming_packet() {
        let workout = decode_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout.kind(),
            &WorkoutKind::Swimming {
                pool_length_m: 25.0,
                pool_laps: 40
            }
        );
    }

    #[test]
    fn test_unknown_code_rejected() {
        let result = decode_packet("ROW", &[1000.0, 1.0, 75.0]);
        assert!(matches!(result, Err(Error::UnknownWorkoutCode(code)) if code == "ROW"));
    }

    #[test]
    fn test_short_swimming_packet_rejected() {
        // Swimming without pool dimensions fails at construction time
        let result = decode_packet("SWM", &[720.0, 1.0, 80.0]);
        assert!(matches!(result, Err(Error::MissingParameter(_))));
    }

    #[test]
    fn test_short_walking_packet_rejected() {
        let result = decode_packet("WLK", &[9000.0, 1.0, 75.0]);
        assert!(matches!(result, Err(Error::MissingParameter(_))));
    }

    #[test]
    fn test_fractional_action_count_rejected() {
        let result = decode_packet("RUN", &[15000.5, 1.0, 75.0]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_negative_action_count_rejected() {
        let result = decode_packet("RUN", &[-1.0, 1.0, 75.0]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_duration_surfaces_from_constructor() {
        let result = decode_packet("RUN", &[15000.0, 0.0, 75.0]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_packet_json_roundtrip() {
        let json = r#"{"workout_type": "SWM", "readings": [720, 1, 80, 25, 40]}"#;
        let packet: SensorPacket = serde_json::from_str(json).unwrap();

        assert_eq!(packet.workout_type, "SWM");
        assert_eq!(packet.readings.len(), 5);
        assert!(packet.decode().is_ok());
    }
}
