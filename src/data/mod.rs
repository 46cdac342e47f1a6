//! Data types, validation, and prediction history

pub mod history;
pub mod types;
pub mod validate;

pub use history::PredictionHistory;
pub use types::{BaseInput, PredictionInput, PredictionRecord, Zone, KNOWN_CLINICS};
pub use validate::validate_input;
