//! Error types for the delivery prediction library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected by validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown delivery zone code
    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    /// Arithmetic produced an unusable value
    #[error("Failed to calculate prediction.")]
    Computation,

    /// The departure-hour search produced no usable candidate
    #[error("No optimal departure hour could be found with the provided data. Try other parameters.")]
    NoOptimalHour,
}
