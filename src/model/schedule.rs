//! Departure-hour recommendation
//!
//! Scans a fixed set of candidate departure hours, predicts the delivery time
//! for each, and keeps the hour with the lowest prediction. The scan is a
//! plain sequential loop over ten candidates; nothing here warrants caching
//! or parallel evaluation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::types::BaseInput;
use crate::error::{Error, Result};
use crate::model::regression::DeliveryModel;

/// Earliest candidate departure hour (7 AM)
pub const FIRST_HOUR: u32 = 7;
/// Latest candidate departure hour (4 PM), inclusive
pub const LAST_HOUR: u32 = 16;

/// The recommended departure hour and its predicted delivery time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Best departure time, drawn from the candidate set
    pub best_time_of_day: f64,
    /// Predicted delivery time at that hour, in minutes
    pub best_predicted_time: f64,
}

/// The candidate departure hours, 7.00 through 16.00 inclusive,
/// as two-decimal values in increasing order
pub fn candidate_hours() -> Vec<f64> {
    (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| (f64::from(hour) * 100.0).round() / 100.0)
        .collect()
}

/// Find the departure hour with the lowest predicted delivery time.
///
/// Candidates are evaluated in increasing-hour order, and only a strictly
/// lower prediction replaces the running minimum, so the earliest hour wins
/// ties. Fails only if no candidate yields a prediction.
pub fn find_best_departure_time(model: &DeliveryModel, base: &BaseInput) -> Result<Recommendation> {
    let mut best: Option<Recommendation> = None;

    for time_of_day in candidate_hours() {
        let input = base.with_time_of_day(time_of_day);
        let predicted = match model.predict(&input) {
            Ok(minutes) => minutes,
            Err(err) => {
                debug!(time_of_day, %err, "candidate hour failed to evaluate");
                continue;
            }
        };

        let replace = match &best {
            None => true,
            Some(current) => predicted < current.best_predicted_time,
        };
        if replace {
            best = Some(Recommendation {
                best_time_of_day: time_of_day,
                best_predicted_time: predicted,
            });
        }
    }

    best.ok_or(Error::NoOptimalHour)
}
