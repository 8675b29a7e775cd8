//! Orchestrator - ward simulation loop
//!
//! See `engine.rs` for the engine, `update.rs` for the per-patient step and
//! `snapshot.rs` for what a tick hands back.

pub mod engine;
pub mod snapshot;
pub mod update;

// Re-export main types for convenience
pub use engine::{
    RiskEngine, SimulationConfig, SimulationError, UpdateRates, DEFAULT_TICK_INTERVAL_MS,
};
pub use snapshot::{roster_digest, Snapshot, SnapshotError};
pub use update::{next_sepsis_risk, update_patient};
