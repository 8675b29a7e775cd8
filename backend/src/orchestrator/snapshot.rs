//! Snapshots handed to the host
//!
//! A [`Snapshot`] is an owned copy of the roster and department breakdown at
//! one tick. Hosts may keep, serialize or diff snapshots freely; nothing they
//! do flows back into the engine.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same seed + config + tick count gives the same digest
//! - **Isolation**: snapshots never alias engine state

use crate::models::department::DepartmentRisk;
use crate::models::patient::Patient;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while exporting a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Roster and department breakdown at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Ticks elapsed when the snapshot was taken (0 = freshly seeded)
    pub tick: usize,
    /// Simulated epoch milliseconds of the snapshot
    pub timestamp_ms: i64,
    pub patients: Vec<Patient>,
    pub department_risks: Vec<DepartmentRisk>,
}

impl Snapshot {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 digest of the patient roster
    pub fn digest(&self) -> Result<String, SnapshotError> {
        roster_digest(&self.patients)
    }

    /// Patients at or above `threshold` sepsis risk
    pub fn high_sepsis_risk_patients(&self, threshold: f64) -> impl Iterator<Item = &Patient> {
        self.patients
            .iter()
            .filter(move |p| p.sepsis_risk >= threshold)
    }
}

/// SHA-256 hex digest of the canonical JSON of `patients`
///
/// Department breakdowns are excluded because unit assignment is redrawn on
/// every aggregation.
pub fn roster_digest(patients: &[Patient]) -> Result<String, SnapshotError> {
    let json = serde_json::to_string(patients)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_digest_is_stable() {
        let a = roster_digest(&[]).unwrap();
        let b = roster_digest(&[]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let snapshot = Snapshot {
            tick: 3,
            timestamp_ms: 30_000,
            patients: vec![],
            department_risks: vec![DepartmentRisk {
                department: "Neuro ICU".to_string(),
                average_risk_score: 55,
                patients_count: 2,
                high_risk_count: 1,
            }],
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"timestampMs\": 30000"));
        assert!(json.contains("\"departmentRisks\""));
        assert!(json.contains("\"averageRiskScore\": 55"));
    }
}
