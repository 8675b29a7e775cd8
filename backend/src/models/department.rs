//! Per-unit aggregate risk

use serde::{Deserialize, Serialize};

/// Sepsis-risk summary for one ICU unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRisk {
    pub department: String,
    /// Rounded mean sepsis risk of the unit's patients
    pub average_risk_score: u8,
    pub patients_count: usize,
    /// Patients with sepsis risk >= 70
    pub high_risk_count: usize,
}
