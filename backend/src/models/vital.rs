//! Vital sign measurements
//!
//! A vital sign carries its reference ranges and a trend computed against the
//! previous reading.

use serde::{Deserialize, Serialize};

/// Relative change below which a reading counts as stable
pub const STABLE_CHANGE_FRACTION: f64 = 0.05;

/// Direction of the most recent change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Stable,
    Increasing,
    Decreasing,
}

impl Trend {
    /// Trend from `previous` to `current`
    ///
    /// Stable when `|current - previous| < 0.05 * previous`, otherwise the
    /// sign of the change decides. An unchanged reading is always stable,
    /// including a reading stuck at zero. Below zero the band is negative, so
    /// any change to a negative reading is increasing or decreasing.
    ///
    /// # Example
    /// ```
    /// use icu_risk_sim::Trend;
    ///
    /// assert_eq!(Trend::between(100.0, 100.02), Trend::Stable);
    /// assert_eq!(Trend::between(100.0, 106.0), Trend::Increasing);
    /// assert_eq!(Trend::between(100.0, 94.0), Trend::Decreasing);
    /// ```
    pub fn between(previous: f64, current: f64) -> Self {
        let difference = current - previous;
        if difference == 0.0 || difference.abs() < STABLE_CHANGE_FRACTION * previous {
            Trend::Stable
        } else if difference > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }
}

/// Inclusive normal range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

/// Critical thresholds; either side may be absent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriticalRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Where a reading sits relative to its ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Critical,
    Warning,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSign {
    /// Stable catalog key, e.g. `heart_rate`
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub normal_range: NormalRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_range: Option<CriticalRange>,
    pub trend: Trend,
    /// Epoch milliseconds
    pub last_updated: i64,
}

impl VitalSign {
    /// Value beyond either critical threshold
    pub fn is_critical(&self) -> bool {
        match self.critical_range {
            None => false,
            Some(range) => {
                range.min.is_some_and(|min| self.value < min)
                    || range.max.is_some_and(|max| self.value > max)
            }
        }
    }

    /// Critical, outside the normal range (warning), or normal
    pub fn status(&self) -> VitalStatus {
        if self.is_critical() {
            VitalStatus::Critical
        } else if self.value < self.normal_range.min || self.value > self.normal_range.max {
            VitalStatus::Warning
        } else {
            VitalStatus::Normal
        }
    }

    /// Replace the reading, recomputing trend against the old value
    pub fn record(&mut self, value: f64, now_ms: i64) {
        let previous = self.value;
        self.value = value;
        self.trend = Trend::between(previous, value);
        self.last_updated = now_ms;
    }
}

/// Round to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lactate(value: f64) -> VitalSign {
        VitalSign {
            id: "lactate".to_string(),
            name: "Lactate".to_string(),
            value,
            unit: "mmol/L".to_string(),
            normal_range: NormalRange { min: 0.5, max: 2.0 },
            critical_range: Some(CriticalRange {
                min: None,
                max: Some(4.0),
            }),
            trend: Trend::Stable,
            last_updated: 0,
        }
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(lactate(1.0).status(), VitalStatus::Normal);
        assert_eq!(lactate(3.0).status(), VitalStatus::Warning);
        assert_eq!(lactate(4.5).status(), VitalStatus::Critical);
        // Missing lower critical bound never triggers
        assert_eq!(lactate(0.1).status(), VitalStatus::Warning);
    }

    #[test]
    fn test_record_sets_trend_and_timestamp() {
        let mut vital = lactate(2.0);
        vital.record(2.5, 42);
        assert_eq!(vital.trend, Trend::Increasing);
        assert_eq!(vital.last_updated, 42);
    }

    #[test]
    fn test_unchanged_zero_is_stable() {
        assert_eq!(Trend::between(0.0, 0.0), Trend::Stable);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(36.84), 36.8);
        assert_eq!(round_one_decimal(36.85000001), 36.9);
    }

    #[test]
    fn test_negative_previous_never_stable_on_change() {
        assert_eq!(Trend::between(-2.0, -2.01), Trend::Decreasing);
        assert_eq!(Trend::between(-2.0, -1.99), Trend::Increasing);
        assert_eq!(Trend::between(-2.0, -2.0), Trend::Stable);
    }
}
