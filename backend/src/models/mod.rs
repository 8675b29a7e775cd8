//! Domain model for the ICU ward
//!
//! Shape and invariants only; generation and update live in
//! [`crate::generation`] and [`crate::orchestrator`].

pub mod department;
pub mod history;
pub mod patient;
pub mod risk;
pub mod sepsis;
pub mod vital;

// Re-exports
pub use department::DepartmentRisk;
pub use history::{HistoricalData, RiskHistory, MAX_HISTORY_LEN};
pub use patient::{Gender, Medication, Patient, Procedure, ProcedureStatus};
pub use risk::{clamp_int_score, clamp_score, weighted_risk_score, RiskFactor, RiskLevel};
pub use sepsis::{IndicatorValue, SepsisIndicator};
pub use vital::{CriticalRange, NormalRange, Trend, VitalSign, VitalStatus};
