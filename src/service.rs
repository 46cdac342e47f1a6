//! Outcome-style entry points for the caller layer
//!
//! The form layer (here: the CLI) works with plain value-or-message results
//! rather than `Result`: a failed operation yields `None` plus a
//! human-readable message, never a fault. These wrappers also surface the
//! high-traffic advisory the caller shows alongside a successful prediction.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::data::types::{BaseInput, PredictionInput};
use crate::model::regression::DeliveryModel;
use crate::model::schedule;

/// Traffic volume (veh/hr) at or above which an advisory is raised
pub const HIGH_TRAFFIC_THRESHOLD: f64 = 500.0;

/// Result of a single prediction, as consumed by the caller layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Predicted delivery time in minutes, `None` on failure
    pub predicted_time: Option<f64>,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a departure-hour recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTimeOutcome {
    /// Recommended departure hour, `None` on failure
    pub best_time_of_day: Option<f64>,
    /// Predicted delivery time at that hour, `None` on failure
    pub best_predicted_time: Option<f64>,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Predict the delivery time for one input
pub fn calculate_prediction(input: &PredictionInput) -> PredictionOutcome {
    let model = DeliveryModel::new();
    match model.predict(input) {
        Ok(minutes) => PredictionOutcome {
            predicted_time: Some(minutes),
            error: None,
        },
        Err(err) => {
            error!(%err, "error calculating prediction");
            PredictionOutcome {
                predicted_time: None,
                error: Some("Failed to calculate prediction.".to_string()),
            }
        }
    }
}

/// Recommend the best departure hour for a base input
pub fn find_best_departure_time(base: &BaseInput) -> BestTimeOutcome {
    let model = DeliveryModel::new();
    match schedule::find_best_departure_time(&model, base) {
        Ok(rec) => BestTimeOutcome {
            best_time_of_day: Some(rec.best_time_of_day),
            best_predicted_time: Some(rec.best_predicted_time),
            error: None,
        },
        Err(err) => {
            error!(%err, "error finding best departure time");
            BestTimeOutcome {
                best_time_of_day: None,
                best_predicted_time: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Advisory message for unusually high traffic volume, if warranted
pub fn traffic_advisory(traffic_volume: f64) -> Option<String> {
    if traffic_volume >= HIGH_TRAFFIC_THRESHOLD {
        Some(format!(
            "The entered traffic volume ({traffic_volume} veh/hr) is considerably high. \
             This could significantly impact the delivery time."
        ))
    } else {
        None
    }
}
