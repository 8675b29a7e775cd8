//! Risk classification and composite scoring
//!
//! The single [`RiskLevel::from_score`] mapping is shared by the composite
//! score and the sepsis score. All scores live on the closed interval
//! [0, 100] and are clamped after every mutation.

use serde::{Deserialize, Serialize};

/// Score at or above which a patient is high risk
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;

/// Score at or above which a patient is medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 40.0;

/// Upper bound of every score
pub const MAX_SCORE: f64 = 100.0;

/// Coarse risk band derived from a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a score: high at >= 70, medium at >= 40, low otherwise.
    ///
    /// # Example
    /// ```
    /// use icu_risk_sim::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
    /// assert_eq!(RiskLevel::from_score(69.5), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(39.0), RiskLevel::Low);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Clamp a fractional score to [0, 100]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE)
}

/// Clamp an integer score to [0, 100]
pub fn clamp_int_score(score: i32) -> u8 {
    score.clamp(0, MAX_SCORE as i32) as u8
}

/// One weighted contributor to the composite risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    /// Stable catalog key, e.g. `infection_risk`
    pub id: String,
    pub name: String,
    /// Fixed at definition time
    pub weight: f64,
    /// 0-100
    pub score: u8,
    pub description: String,
}

/// Composite score: `round(Σ score·weight / Σ weight)`
///
/// An empty factor set, or one whose weights sum to zero, scores 0.
/// Terms are summed in a canonical order so the result does not depend on
/// the order of `factors`.
///
/// # Example
/// ```
/// use icu_risk_sim::models::risk::{weighted_risk_score, RiskFactor};
///
/// let only = RiskFactor {
///     id: "x".into(),
///     name: "X".into(),
///     weight: 1.0,
///     score: 100,
///     description: String::new(),
/// };
/// assert_eq!(weighted_risk_score(&[only]), 100);
/// assert_eq!(weighted_risk_score(&[]), 0);
/// ```
pub fn weighted_risk_score(factors: &[RiskFactor]) -> u8 {
    let mut terms: Vec<(f64, f64)> = factors
        .iter()
        .map(|f| (f.weight, f64::from(f.score)))
        .collect();
    terms.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let total_weight: f64 = terms.iter().map(|(w, _)| w).sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted_sum: f64 = terms.iter().map(|(w, s)| w * s).sum();
    clamp_score((weighted_sum / total_weight).round()) as u8
}
