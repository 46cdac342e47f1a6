//! Fixed-coefficient regression model for delivery time
//!
//! The coefficients come from a linear regression fitted offline on historical
//! delivery data; this module only evaluates the formula. The clinic label is
//! accepted but has no coefficient yet, so it does not affect the result.

use tracing::debug;

use crate::data::types::PredictionInput;
use crate::error::{Error, Result};

/// Intercept term
pub const INTERCEPT: f64 = 13.2784;
/// Coefficient on departure time (hours since midnight)
pub const COEF_TIME_OF_DAY: f64 = 0.171288;
/// Coefficient on the numeric zone code (subtracted)
pub const COEF_ZONE: f64 = 5.80274;
/// Coefficient on temperature (degrees Celsius)
pub const COEF_TEMPERATURE: f64 = 0.189407;
/// Coefficient on distance (kilometers)
pub const COEF_DISTANCE: f64 = 0.6362;
/// Coefficient on traffic volume (vehicles per hour)
pub const COEF_TRAFFIC: f64 = 0.0077271;

/// Delivery time predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryModel;

impl DeliveryModel {
    pub fn new() -> Self {
        Self
    }

    /// Predict delivery time in minutes for one input.
    ///
    /// The raw formula value is clamped at zero: no delivery can take
    /// negative time. Deterministic; identical inputs give identical output.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64> {
        let zone_code = f64::from(input.zone.code());

        let raw = INTERCEPT
            + COEF_TIME_OF_DAY * input.time_of_day
            - COEF_ZONE * zone_code
            + COEF_TEMPERATURE * input.temperature
            + COEF_DISTANCE * input.distance
            + COEF_TRAFFIC * input.traffic_volume;

        if !raw.is_finite() {
            return Err(Error::Computation);
        }

        let minutes = raw.max(0.0);
        debug!(
            time_of_day = input.time_of_day,
            zone = zone_code,
            raw,
            minutes,
            "evaluated delivery formula"
        );
        Ok(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::Zone;

    fn input(time_of_day: f64, zone: Zone) -> PredictionInput {
        PredictionInput {
            clinic: "CLINICA DE LA MUJER CARTAGENA SAS".to_string(),
            time_of_day,
            zone,
            temperature: 30.0,
            distance: 5.0,
            traffic_volume: 200.0,
        }
    }

    #[test]
    fn matches_known_formula_value() {
        // 13.2784 + 1.71288 - 5.80274 + 5.68221 + 3.181 + 1.54542 = 19.59717
        let model = DeliveryModel::new();
        let minutes = model.predict(&input(10.0, Zone::Locality1)).unwrap();
        assert!((minutes - 19.59717).abs() < 1e-6);
    }

    #[test]
    fn clamps_negative_values_to_zero() {
        let model = DeliveryModel::new();
        let mut frozen = input(7.0, Zone::Locality3);
        frozen.temperature = -100.0;
        frozen.distance = 0.1;
        frozen.traffic_volume = 0.0;
        // Raw formula value is far below zero here
        let minutes = model.predict(&frozen).unwrap();
        assert_eq!(minutes, 0.0);
    }

    #[test]
    fn never_negative_across_zones() {
        let model = DeliveryModel::new();
        for zone in [Zone::Locality1, Zone::Locality2, Zone::Locality3] {
            for hour in 0..24 {
                let minutes = model.predict(&input(hour as f64, zone)).unwrap();
                assert!(minutes >= 0.0);
            }
        }
    }

    #[test]
    fn deterministic_bit_identical() {
        let model = DeliveryModel::new();
        let i = input(13.37, Zone::Locality2);
        let a = model.predict(&i).unwrap();
        let b = model.predict(&i).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn clinic_has_no_effect() {
        let model = DeliveryModel::new();
        let mut a = input(9.0, Zone::Locality1);
        let mut b = a.clone();
        a.clinic = "CENTRO MEDICO CRECER LTDA".to_string();
        b.clinic = "PROMOTORA NEUROCIENCIAS S.A.S".to_string();
        assert_eq!(
            model.predict(&a).unwrap().to_bits(),
            model.predict(&b).unwrap().to_bits()
        );
    }

    #[test]
    fn increases_with_departure_time() {
        let model = DeliveryModel::new();
        let mut last = f64::NEG_INFINITY;
        for hour in 7..=16 {
            let minutes = model.predict(&input(hour as f64, Zone::Locality1)).unwrap();
            assert!(minutes > last);
            last = minutes;
        }
    }

    #[test]
    fn rejects_non_finite_result() {
        let model = DeliveryModel::new();
        let mut i = input(9.0, Zone::Locality1);
        i.temperature = f64::NAN;
        assert!(model.predict(&i).is_err());
    }
}
