//! Bounded history of recent predictions
//!
//! The prediction core never touches this; it is owned by the caller layer,
//! which appends a record after each successful prediction. Only the most
//! recent entries are kept, newest first.

use chrono::Utc;

use crate::data::types::{PredictionInput, PredictionRecord};

/// Default number of records retained
pub const DEFAULT_CAPACITY: usize = 10;

/// In-memory list of recent predictions, newest first
#[derive(Debug, Clone)]
pub struct PredictionHistory {
    records: Vec<PredictionRecord>,
    capacity: usize,
    next_id: u64,
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PredictionHistory {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// A capacity of zero is raised to one: the history always retains at
    /// least the most recent prediction.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Record a successful prediction, returning the stored entry.
    ///
    /// The newest record is placed first; the oldest is dropped once the
    /// capacity is exceeded.
    pub fn push(&mut self, input: PredictionInput, predicted_time: f64) -> &PredictionRecord {
        let record = PredictionRecord {
            id: self.next_id,
            input,
            predicted_time,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
        &self.records[0]
    }

    /// Recent records, newest first
    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records; ids keep advancing
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::Zone;

    fn input(time_of_day: f64) -> PredictionInput {
        PredictionInput {
            clinic: "PROMOTORA NEUROCIENCIAS S.A.S".to_string(),
            time_of_day,
            zone: Zone::Locality1,
            temperature: 30.0,
            distance: 5.0,
            traffic_volume: 200.0,
        }
    }

    #[test]
    fn newest_first() {
        let mut history = PredictionHistory::default();
        history.push(input(7.0), 10.0);
        history.push(input(8.0), 11.0);
        history.push(input(9.0), 12.0);

        let times: Vec<f64> = history.records().iter().map(|r| r.input.time_of_day).collect();
        assert_eq!(times, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut history = PredictionHistory::default();
        for i in 0..15 {
            history.push(input(i as f64), i as f64);
        }
        assert_eq!(history.len(), DEFAULT_CAPACITY);
        // The five oldest entries were dropped
        assert_eq!(history.records()[0].input.time_of_day, 14.0);
        assert_eq!(history.records()[9].input.time_of_day, 5.0);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut history = PredictionHistory::new(3);
        for i in 0..6 {
            history.push(input(i as f64), 1.0);
        }
        let ids: Vec<u64> = history.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut history = PredictionHistory::new(0);
        let record = history.push(input(7.0), 10.0);
        assert_eq!(record.input.time_of_day, 7.0);
        history.push(input(8.0), 11.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].input.time_of_day, 8.0);
    }

    #[test]
    fn clear_keeps_id_sequence() {
        let mut history = PredictionHistory::default();
        history.push(input(7.0), 10.0);
        history.clear();
        assert!(history.is_empty());
        let record = history.push(input(8.0), 11.0);
        assert_eq!(record.id, 1);
    }
}
