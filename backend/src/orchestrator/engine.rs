//! Risk Engine - ward simulation loop
//!
//! Owns the roster and the department breakdown, and advances both one step
//! at a time:
//!
//! ```text
//! Seed (once):
//! 1. Generate one patient per roster name
//! 2. Aggregate departments
//!
//! For each tick t:
//! 1. Advance simulated time
//! 2. Update each patient with probability `patient_update`
//! 3. Redraw unit assignment and re-aggregate departments
//! 4. Return an owned snapshot
//! ```
//!
//! # Example
//!
//! ```rust
//! use icu_risk_sim::{RiskEngine, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     rng_seed: 12345,
//!     ..SimulationConfig::default()
//! };
//!
//! let mut engine = RiskEngine::new(config).unwrap();
//! assert_eq!(engine.get_patients().len(), 12);
//!
//! for _ in 0..10 {
//!     let snapshot = engine.tick();
//!     assert!(snapshot.patients.iter().all(|p| p.sepsis_risk <= 100.0));
//! }
//! ```

use crate::aggregation::calculate_department_risks;
use crate::core::time::SimClock;
use crate::generation::PatientGenerator;
use crate::models::department::DepartmentRisk;
use crate::models::patient::Patient;
use crate::models::risk::HIGH_RISK_THRESHOLD;
use crate::orchestrator::snapshot::{roster_digest, Snapshot, SnapshotError};
use crate::orchestrator::update::update_patient;
use crate::rng::{RandomSource, RngManager};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

// ============================================================================
// Configuration Types
// ============================================================================

/// Default simulated time between ticks (10 seconds)
pub const DEFAULT_TICK_INTERVAL_MS: i64 = 10_000;

/// Complete engine configuration
///
/// # Fields
///
/// * `rng_seed` - Seed for deterministic random number generation
/// * `start_time_ms` - Simulated epoch milliseconds at tick 0
/// * `tick_interval_ms` - Simulated time advanced by each tick
/// * `rates` - Probabilities driving the update step
/// * `roster` - Patient names; `None` uses the catalog roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rng_seed: u64,
    pub start_time_ms: i64,
    pub tick_interval_ms: i64,
    pub rates: UpdateRates,
    pub roster: Option<Vec<String>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            start_time_ms: 0,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            rates: UpdateRates::default(),
            roster: None,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.tick_interval_ms <= 0 {
            return Err(SimulationError::InvalidConfig(
                "tick_interval_ms must be > 0".to_string(),
            ));
        }

        self.rates.validate()?;

        if let Some(roster) = &self.roster {
            if let Some(blank) = roster.iter().position(|name| name.trim().is_empty()) {
                return Err(SimulationError::InvalidConfig(format!(
                    "roster entry {} has an empty name",
                    blank
                )));
            }
        }

        Ok(())
    }
}

/// Probabilities used by the update step
///
/// Every value must lie in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRates {
    /// Chance a patient is updated on a tick
    pub patient_update: f64,

    /// Chance each vital sign drifts
    pub vital_change: f64,

    /// Chance each risk factor score moves
    pub factor_change: f64,

    /// Chance each sepsis indicator has its critical flag redrawn
    pub indicator_resample: f64,

    /// Chance a redrawn critical flag comes up true
    pub indicator_critical: f64,
}

impl Default for UpdateRates {
    fn default() -> Self {
        Self {
            patient_update: 0.5,
            vital_change: 0.4,
            factor_change: 0.3,
            indicator_resample: 0.2,
            indicator_critical: 0.5,
        }
    }
}

impl UpdateRates {
    fn validate(&self) -> Result<(), SimulationError> {
        let named = [
            ("patient_update", self.patient_update),
            ("vital_change", self.vital_change),
            ("factor_change", self.factor_change),
            ("indicator_resample", self.indicator_resample),
            ("indicator_critical", self.indicator_critical),
        ];

        for (name, p) in named {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }

        Ok(())
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),
}

// ============================================================================
// Engine
// ============================================================================

/// Owns the ward and advances it tick by tick
///
/// The engine is the only writer of its roster. Every accessor hands out
/// owned copies, so hosts can hold on to them across ticks.
///
/// # Determinism
///
/// All randomness goes through `rng`. With the default [`RngManager`], the
/// same config produces identical rosters, ticks and timestamps.
pub struct RiskEngine<R: RandomSource = RngManager> {
    patients: Vec<Patient>,
    department_risks: Vec<DepartmentRisk>,
    clock: SimClock,
    rng: R,
    rates: UpdateRates,
}

impl RiskEngine<RngManager> {
    /// Create and seed an engine from configuration
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` if validation fails.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let rng = RngManager::new(config.rng_seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> RiskEngine<R> {
    /// Create and seed an engine drawing from `rng`
    ///
    /// `config.rng_seed` is ignored; the supplied source decides every
    /// outcome.
    pub fn with_rng(config: SimulationConfig, mut rng: R) -> Result<Self, SimulationError> {
        config.validate()?;

        let generator = match config.roster {
            Some(names) => PatientGenerator::new(names),
            None => PatientGenerator::with_default_roster(),
        };

        let clock = SimClock::new(config.start_time_ms, config.tick_interval_ms);
        let patients = generator.generate_roster(clock.now_ms(), &mut rng);
        let department_risks = calculate_department_risks(&patients, &mut rng);

        info!(
            patients = patients.len(),
            seed = config.rng_seed,
            "ward seeded"
        );

        Ok(Self {
            patients,
            department_risks,
            clock,
            rng,
            rates: config.rates,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Copy of the current roster
    pub fn get_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    /// Copy of one patient, if present
    pub fn get_patient(&self, id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    /// Copy of one patient, or `PatientNotFound`
    pub fn require_patient(&self, id: &str) -> Result<Patient, SimulationError> {
        self.get_patient(id)
            .ok_or_else(|| SimulationError::PatientNotFound(id.to_string()))
    }

    /// Fresh department breakdown
    ///
    /// Unit assignment is redrawn on every call, so two calls without a tick
    /// in between may disagree. The result also replaces
    /// [`last_department_risks`](Self::last_department_risks).
    pub fn get_department_risks(&mut self) -> Vec<DepartmentRisk> {
        self.department_risks = calculate_department_risks(&self.patients, &mut self.rng);
        self.department_risks.clone()
    }

    /// Breakdown from the most recent aggregation, without redrawing
    pub fn last_department_risks(&self) -> &[DepartmentRisk] {
        &self.department_risks
    }

    /// Ticks elapsed since seeding
    pub fn current_tick(&self) -> usize {
        self.clock.current_tick()
    }

    /// Current simulated time in epoch milliseconds
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn rates(&self) -> &UpdateRates {
        &self.rates
    }

    /// Current state without advancing time or redrawing units
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.clock.current_tick(),
            timestamp_ms: self.clock.now_ms(),
            patients: self.patients.clone(),
            department_risks: self.department_risks.clone(),
        }
    }

    /// SHA-256 digest of the current roster
    pub fn state_digest(&self) -> Result<String, SnapshotError> {
        roster_digest(&self.patients)
    }

    // ========================================================================
    // Tick Loop Implementation
    // ========================================================================

    /// Advance the ward by one step
    ///
    /// Each patient is independently updated with probability
    /// `rates.patient_update` and otherwise carried over unchanged. Departments
    /// are then re-aggregated under a fresh unit assignment.
    pub fn tick(&mut self) -> Snapshot {
        self.clock.advance();
        let now_ms = self.clock.now_ms();
        let tick = self.clock.current_tick();

        let mut num_updated = 0;
        let mut next = Vec::with_capacity(self.patients.len());

        for patient in &self.patients {
            if self.rng.chance(self.rates.patient_update) {
                let updated = update_patient(patient, &self.rates, now_ms, &mut self.rng);
                trace!(
                    tick,
                    patient_id = %updated.id,
                    old_sepsis_risk = patient.sepsis_risk,
                    new_sepsis_risk = updated.sepsis_risk,
                    "patient updated"
                );
                next.push(updated);
                num_updated += 1;
            } else {
                next.push(patient.clone());
            }
        }

        self.patients = next;
        self.department_risks = calculate_department_risks(&self.patients, &mut self.rng);

        let high_risk = self
            .patients
            .iter()
            .filter(|p| p.sepsis_risk >= HIGH_RISK_THRESHOLD)
            .count();
        debug!(tick, updated = num_updated, high_risk, "tick complete");

        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_interval() {
        let config = SimulationConfig {
            tick_interval_ms: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            RiskEngine::new(config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_probability_above_one() {
        let config = SimulationConfig {
            rates: UpdateRates {
                vital_change: 1.5,
                ..UpdateRates::default()
            },
            ..SimulationConfig::default()
        };
        let err = RiskEngine::new(config).err().unwrap();
        assert!(err.to_string().contains("vital_change"));
    }

    #[test]
    fn test_rejects_blank_roster_name() {
        let config = SimulationConfig {
            roster: Some(vec!["Ada Lovelace".to_string(), "  ".to_string()]),
            ..SimulationConfig::default()
        };
        assert!(RiskEngine::new(config).is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"rng_seed": 7, "rates": {"patient_update": 1.0}}"#).unwrap();
        assert_eq!(config.rng_seed, 7);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.rates.patient_update, 1.0);
        assert_eq!(config.rates.vital_change, 0.4);
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut engine = RiskEngine::new(SimulationConfig {
            start_time_ms: 1_000,
            ..SimulationConfig::default()
        })
        .unwrap();

        let snapshot = engine.tick();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.timestamp_ms, 1_000 + DEFAULT_TICK_INTERVAL_MS);
    }
}
