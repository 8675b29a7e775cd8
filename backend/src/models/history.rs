//! Rolling sepsis-risk history
//!
//! Samples are appended in time order and the window never holds more than
//! [`MAX_HISTORY_LEN`] entries; the oldest sample is evicted first.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

/// Samples retained per patient
pub const MAX_HISTORY_LEN: usize = 25;

/// One point on the risk trend line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub score: f64,
}

/// FIFO window of [`HistoricalData`]
///
/// # Example
/// ```
/// use icu_risk_sim::models::history::{HistoricalData, RiskHistory, MAX_HISTORY_LEN};
///
/// let mut history = RiskHistory::new();
/// for t in 0..30 {
///     history.push(HistoricalData { timestamp: t, score: 50.0 });
/// }
/// assert_eq!(history.len(), MAX_HISTORY_LEN);
/// assert_eq!(history.first().map(|s| s.timestamp), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RiskHistory {
    samples: VecDeque<HistoricalData>,
}

impl RiskHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_HISTORY_LEN + 1),
        }
    }

    /// Append a sample, evicting the oldest once the window is full
    pub fn push(&mut self, sample: HistoricalData) {
        self.samples.push_back(sample);
        while self.samples.len() > MAX_HISTORY_LEN {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&HistoricalData> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&HistoricalData> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoricalData> {
        self.samples.iter()
    }

    /// Timestamps never decrease from oldest to newest
    pub fn is_time_ordered(&self) -> bool {
        self.samples
            .iter()
            .zip(self.samples.iter().skip(1))
            .all(|(a, b)| a.timestamp <= b.timestamp)
    }
}

impl FromIterator<HistoricalData> for RiskHistory {
    fn from_iter<I: IntoIterator<Item = HistoricalData>>(iter: I) -> Self {
        let mut history = RiskHistory::new();
        for sample in iter {
            history.push(sample);
        }
        history
    }
}

/// Deserialized samples are ordered by timestamp and pushed through the
/// window, so only the newest [`MAX_HISTORY_LEN`] survive.
impl<'de> Deserialize<'de> for RiskHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut samples = Vec::<HistoricalData>::deserialize(deserializer)?;
        samples.sort_by_key(|s| s.timestamp);
        Ok(samples.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_keeps_newest() {
        let history: RiskHistory = (0..26)
            .map(|t| HistoricalData {
                timestamp: t,
                score: t as f64,
            })
            .collect();

        assert_eq!(history.len(), MAX_HISTORY_LEN);
        assert_eq!(history.first().map(|s| s.timestamp), Some(1));
        assert_eq!(history.last().map(|s| s.timestamp), Some(25));
        assert!(history.is_time_ordered());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut history = RiskHistory::new();
        history.push(HistoricalData {
            timestamp: 1,
            score: 42.0,
        });
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"timestamp":1,"score":42.0}]"#);
    }

    #[test]
    fn test_deserialize_caps_window() {
        let samples: Vec<HistoricalData> = (0..30)
            .map(|t| HistoricalData {
                timestamp: t,
                score: 50.0,
            })
            .collect();
        let json = serde_json::to_string(&samples).unwrap();

        let history: RiskHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), MAX_HISTORY_LEN);
        assert_eq!(history.first().map(|s| s.timestamp), Some(5));
        assert_eq!(history.last().map(|s| s.timestamp), Some(29));
    }

    #[test]
    fn test_deserialize_restores_time_order() {
        let json = r#"[{"timestamp":3,"score":1.0},{"timestamp":1,"score":2.0},{"timestamp":2,"score":3.0}]"#;

        let history: RiskHistory = serde_json::from_str(json).unwrap();
        assert!(history.is_time_ordered());
        assert_eq!(history.first().map(|s| s.score), Some(2.0));
        assert_eq!(history.last().map(|s| s.timestamp), Some(3));
    }
}
