//! Core data types for delivery predictions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Known clinic names, kept for suggestions and autocomplete.
///
/// This is not a closed set: any non-empty clinic label is accepted.
pub const KNOWN_CLINICS: [&str; 5] = [
    "CLINICA DE LA MUJER CARTAGENA SAS",
    "CENTRO MEDICO CRECER LTDA",
    "CARTAGENA PLASTIC & RECONSTRUCTIVE SURGERY INSTITUTE S.A.S",
    "PROMOTORA NEUROCIENCIAS S.A.S",
    "CLINICA CARTAGENA DEL MAR S.A.S",
];

/// Delivery zone (locality), a closed set of three categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "1")]
    Locality1,
    #[serde(rename = "2")]
    Locality2,
    #[serde(rename = "3")]
    Locality3,
}

impl Zone {
    /// Numeric code used by the regression formula
    pub fn code(&self) -> u8 {
        match self {
            Zone::Locality1 => 1,
            Zone::Locality2 => 2,
            Zone::Locality3 => 3,
        }
    }
}

impl std::str::FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Zone::Locality1),
            "2" => Ok(Zone::Locality2),
            "3" => Ok(Zone::Locality3),
            other => Err(Error::UnknownZone(other.to_string())),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Locality {}", self.code())
    }
}

/// One complete set of inputs for a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Clinic label, carried through but not used by the current formula
    pub clinic: String,
    /// Departure time as hours since midnight; fractional part is minutes/60
    pub time_of_day: f64,
    /// Delivery zone
    pub zone: Zone,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Distance in kilometers, strictly positive
    pub distance: f64,
    /// Traffic volume in vehicles per hour, non-negative
    pub traffic_volume: f64,
}

/// Prediction inputs without a departure time, used by the departure-hour
/// search to build one candidate input per hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseInput {
    pub clinic: String,
    pub zone: Zone,
    pub temperature: f64,
    pub distance: f64,
    pub traffic_volume: f64,
}

impl BaseInput {
    /// Build a full input by attaching a departure time
    pub fn with_time_of_day(&self, time_of_day: f64) -> PredictionInput {
        PredictionInput {
            clinic: self.clinic.clone(),
            time_of_day,
            zone: self.zone,
            temperature: self.temperature,
            distance: self.distance,
            traffic_volume: self.traffic_volume,
        }
    }
}

impl From<PredictionInput> for BaseInput {
    fn from(input: PredictionInput) -> Self {
        Self {
            clinic: input.clinic,
            zone: input.zone,
            temperature: input.temperature,
            distance: input.distance,
            traffic_volume: input.traffic_volume,
        }
    }
}

/// A stored prediction: the inputs plus the computed result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Identifier, unique within a history instance
    pub id: u64,
    /// The inputs the prediction was made from
    pub input: PredictionInput,
    /// Predicted delivery time in raw minutes
    pub predicted_time: f64,
    /// When the record was created
    pub timestamp: DateTime<Utc>,
}
