//! # Delivery Oracle
//!
//! A library for estimating delivery times of medical-supply orders and
//! recommending the best departure hour.
//!
//! The estimate comes from a fixed linear regression over five inputs
//! (departure time, delivery zone, temperature, distance, traffic volume);
//! the recommendation scans the candidate departure hours 7 AM through 4 PM
//! and keeps the one with the lowest predicted delivery time.
//!
//! ## Modules
//!
//! - [`data`] - Input types, validation, and the bounded prediction history
//! - [`model`] - The regression predictor and the departure-hour search
//! - [`service`] - Outcome-style entry points for caller layers
//! - [`format`] - Display formatting for durations and clock times
//! - [`error`] - Crate error types
//!
//! ## Example
//!
//! ```rust
//! use delivery_oracle::{DeliveryModel, PredictionInput, Zone};
//! use delivery_oracle::model::find_best_departure_time;
//!
//! let input = PredictionInput {
//!     clinic: "CENTRO MEDICO CRECER LTDA".to_string(),
//!     time_of_day: 10.0,
//!     zone: Zone::Locality1,
//!     temperature: 30.0,
//!     distance: 5.0,
//!     traffic_volume: 200.0,
//! };
//!
//! let model = DeliveryModel::new();
//! let minutes = model.predict(&input).unwrap();
//! assert!(minutes > 0.0);
//!
//! let recommendation = find_best_departure_time(&model, &input.into()).unwrap();
//! assert_eq!(recommendation.best_time_of_day, 7.0);
//! ```

pub mod data;
pub mod error;
pub mod format;
pub mod model;
pub mod service;

// Re-exports for convenience
pub use data::history::PredictionHistory;
pub use data::types::{BaseInput, PredictionInput, PredictionRecord, Zone, KNOWN_CLINICS};
pub use data::validate::validate_input;
pub use error::{Error, Result};
pub use model::regression::DeliveryModel;
pub use model::schedule::Recommendation;
pub use service::{BestTimeOutcome, PredictionOutcome};
