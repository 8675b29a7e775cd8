//! Sepsis screening indicators

use serde::{Deserialize, Serialize};

/// Indicator reading: a present/absent flag or a measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Flag(bool),
    Measure(f64),
}

/// A named sepsis criterion
///
/// `critical` is not derived from `value`; the simulation samples it on its
/// own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SepsisIndicator {
    pub name: String,
    pub value: IndicatorValue,
    pub description: String,
    pub critical: bool,
}

/// Number of indicators currently flagged critical
pub fn critical_count(indicators: &[SepsisIndicator]) -> usize {
    indicators.iter().filter(|i| i.critical).count()
}
