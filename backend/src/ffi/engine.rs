//! PyO3 wrapper for RiskEngine

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use super::types::{parse_simulation_config, to_json};
use crate::orchestrator::{RiskEngine, SimulationError};

/// Python wrapper for the Rust engine
///
/// # Example (from Python)
///
/// ```python
/// import json
/// from icu_risk_sim import RiskEngine
///
/// engine = RiskEngine(seed=12345)
/// patients = json.loads(engine.get_patients())
/// snapshot = json.loads(engine.tick())
/// print(snapshot["tick"], len(snapshot["patients"]))
/// ```
#[pyclass(name = "RiskEngine")]
pub struct PyRiskEngine {
    inner: RiskEngine,
}

#[pymethods]
impl PyRiskEngine {
    /// Create and seed an engine
    ///
    /// `config_json` is an optional JSON `SimulationConfig`; `seed`, when
    /// given, overrides its `rng_seed`.
    #[new]
    #[pyo3(signature = (seed=None, config_json=None))]
    fn new(seed: Option<u64>, config_json: Option<&str>) -> PyResult<Self> {
        let mut config = parse_simulation_config(config_json)?;
        if let Some(seed) = seed {
            config.rng_seed = seed;
        }

        let inner = RiskEngine::new(config)
            .map_err(|e| PyValueError::new_err(format!("Failed to create engine: {}", e)))?;

        Ok(PyRiskEngine { inner })
    }

    /// Current roster as a JSON array
    fn get_patients(&self) -> PyResult<String> {
        to_json(&self.inner.get_patients())
    }

    /// Fresh department breakdown as a JSON array
    fn get_department_risks(&mut self) -> PyResult<String> {
        to_json(&self.inner.get_department_risks())
    }

    /// One patient as a JSON object
    ///
    /// Raises KeyError if no patient has this id.
    fn get_patient(&self, id: &str) -> PyResult<String> {
        match self.inner.require_patient(id) {
            Ok(patient) => to_json(&patient),
            Err(SimulationError::PatientNotFound(id)) => Err(PyKeyError::new_err(id)),
            Err(e) => Err(PyRuntimeError::new_err(e.to_string())),
        }
    }

    /// Advance one tick and return the snapshot as a JSON object
    fn tick(&mut self) -> PyResult<String> {
        to_json(&self.inner.tick())
    }

    fn current_tick(&self) -> usize {
        self.inner.current_tick()
    }

    /// SHA-256 digest of the roster
    fn state_digest(&self) -> PyResult<String> {
        self.inner
            .state_digest()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}
