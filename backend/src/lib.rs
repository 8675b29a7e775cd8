//! ICU Risk Simulator Core - Rust Engine
//!
//! Synthetic ICU ward with periodic, deterministic updates: mock vitals,
//! weighted composite risk scores, a sepsis-specific risk score, and
//! per-unit aggregates.
//!
//! # Architecture
//!
//! - **core**: Simulated time
//! - **rng**: Injectable, deterministic random number generation
//! - **models**: Domain types (Patient, VitalSign, RiskFactor, ...)
//! - **catalog**: Fixed names, diagnoses and templates
//! - **generation**: Initial roster builder
//! - **orchestrator**: Engine, update step and snapshots
//! - **aggregation**: Department risk breakdown
//! - **monitor**: Dashboard metrics and alerting for hosts
//!
//! # Critical Invariants
//!
//! 1. Every score stays within [0, 100]
//! 2. `risk_level` always matches the composite score
//! 3. Risk history never exceeds 25 samples
//! 4. All randomness flows through a `RandomSource`

// Module declarations
pub mod aggregation;
pub mod catalog;
pub mod core;
pub mod generation;
pub mod models;
pub mod monitor;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::SimClock;
pub use models::{
    department::DepartmentRisk,
    history::{HistoricalData, RiskHistory},
    patient::{Gender, Medication, Patient, Procedure, ProcedureStatus},
    risk::{RiskFactor, RiskLevel},
    sepsis::{IndicatorValue, SepsisIndicator},
    vital::{Trend, VitalSign, VitalStatus},
};
pub use monitor::{Alert, AlertMonitor, DashboardMetrics, MonitorReport};
pub use orchestrator::{
    RiskEngine, SimulationConfig, SimulationError, Snapshot, SnapshotError, UpdateRates,
};
pub use rng::{RandomSource, RngManager};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn icu_risk_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyRiskEngine>()?;
    Ok(())
}
