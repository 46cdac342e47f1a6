//! Prediction model and departure-hour search

pub mod regression;
pub mod schedule;

pub use regression::DeliveryModel;
pub use schedule::{candidate_hours, find_best_departure_time, Recommendation};
