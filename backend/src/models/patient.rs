//! Patient aggregate
//!
//! A patient owns its vitals, risk factors, medications, procedures, sepsis
//! indicators and risk history. Three fields are derived and must be kept in
//! step with their inputs:
//!
//! - `current_risk_score` = weighted average of `risk_factors`
//! - `risk_level` = [`RiskLevel::from_score`] of `current_risk_score`
//! - `sepsis_risk`, tracked independently and clamped to [0, 100]

use crate::models::history::{RiskHistory, MAX_HISTORY_LEN};
use crate::models::risk::{weighted_risk_score, RiskFactor, RiskLevel, MAX_SCORE};
use crate::models::sepsis::{critical_count, SepsisIndicator};
use crate::models::vital::VitalSign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub route: String,
    /// Epoch milliseconds
    pub start_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcedureStatus {
    Scheduled,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: String,
    pub name: String,
    /// Epoch milliseconds
    pub date: i64,
    pub status: ProcedureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub room: String,
    pub bed: String,
    /// Epoch milliseconds
    pub admission_date: i64,
    pub diagnosis: String,
    pub attending_physician: String,
    pub current_risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub vital_signs: Vec<VitalSign>,
    pub medications: Vec<Medication>,
    pub procedures: Vec<Procedure>,
    pub sepsis_indicators: Vec<SepsisIndicator>,
    /// 0-100, independent of `current_risk_score`
    pub sepsis_risk: f64,
    pub historical_data: RiskHistory,
    /// Epoch milliseconds
    pub last_updated: i64,
}

impl Patient {
    /// Recompute `current_risk_score` and `risk_level` from the risk factors
    pub fn refresh_risk_score(&mut self) {
        self.current_risk_score = weighted_risk_score(&self.risk_factors);
        self.risk_level = RiskLevel::from_score(f64::from(self.current_risk_score));
    }

    /// Risk band of the sepsis score
    pub fn sepsis_risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.sepsis_risk)
    }

    /// Score of the factor with the given catalog key
    pub fn factor_score(&self, factor_id: &str) -> Option<u8> {
        self.risk_factors
            .iter()
            .find(|f| f.id == factor_id)
            .map(|f| f.score)
    }

    pub fn critical_indicator_count(&self) -> usize {
        critical_count(&self.sepsis_indicators)
    }

    /// Vitals beyond a critical threshold
    pub fn critical_vitals(&self) -> Vec<&VitalSign> {
        self.vital_signs.iter().filter(|v| v.is_critical()).collect()
    }

    /// Every derived-field invariant holds
    ///
    /// Used by debug assertions in the update path and by tests.
    pub fn invariants_hold(&self) -> bool {
        let score_in_range = f64::from(self.current_risk_score) <= MAX_SCORE;
        let sepsis_in_range = (0.0..=MAX_SCORE).contains(&self.sepsis_risk);
        let level_matches =
            self.risk_level == RiskLevel::from_score(f64::from(self.current_risk_score));
        let factors_in_range = self
            .risk_factors
            .iter()
            .all(|f| f64::from(f.score) <= MAX_SCORE);
        let history_ok =
            self.historical_data.len() <= MAX_HISTORY_LEN && self.historical_data.is_time_ordered();

        score_in_range && sepsis_in_range && level_matches && factors_in_range && history_ok
    }
}
