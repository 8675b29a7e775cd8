//! Conversion helpers for the FFI boundary

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

use crate::orchestrator::SimulationConfig;

/// Parse an optional JSON config, falling back to defaults
///
/// # Errors
/// Returns PyValueError if the JSON does not describe a `SimulationConfig`.
pub fn parse_simulation_config(config_json: Option<&str>) -> PyResult<SimulationConfig> {
    match config_json {
        None => Ok(SimulationConfig::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| PyValueError::new_err(format!("Invalid config JSON: {}", e))),
    }
}

/// Serialize any engine value to JSON text
pub fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("Serialization failed: {}", e)))
}
