//! Caller-side input validation
//!
//! The prediction core assumes its inputs already satisfy these constraints;
//! the form layer (or the CLI here) runs this check before invoking it.

use crate::data::types::PredictionInput;
use crate::error::{Error, Result};

/// Latest accepted departure time; 24.00 and above is rejected.
pub const MAX_TIME_OF_DAY: f64 = 23.99;

/// Check a full input against the field constraints.
///
/// Returns the first violation found, with a per-field message.
pub fn validate_input(input: &PredictionInput) -> Result<()> {
    if input.clinic.trim().is_empty() {
        return Err(Error::InvalidInput("The clinic name is required.".to_string()));
    }
    if !input.time_of_day.is_finite() || input.time_of_day < 0.0 {
        return Err(Error::InvalidInput(
            "The departure time cannot be less than 0.".to_string(),
        ));
    }
    if input.time_of_day > MAX_TIME_OF_DAY {
        return Err(Error::InvalidInput(
            "The departure time cannot be 24 or more.".to_string(),
        ));
    }
    if !input.temperature.is_finite() {
        return Err(Error::InvalidInput(
            "The temperature must be a finite number.".to_string(),
        ));
    }
    if !input.distance.is_finite() || input.distance <= 0.0 {
        return Err(Error::InvalidInput(
            "The distance must be a positive number.".to_string(),
        ));
    }
    if !input.traffic_volume.is_finite() || input.traffic_volume < 0.0 {
        return Err(Error::InvalidInput(
            "The traffic volume cannot be negative.".to_string(),
        ));
    }
    Ok(())
}
