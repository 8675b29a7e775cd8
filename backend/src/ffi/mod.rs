//! Python bindings (feature `pyo3`)
//!
//! The boundary is JSON text in both directions: configs arrive as JSON and
//! every snapshot leaves as JSON, so Python callers get plain dicts from
//! `json.loads` without per-type conversion code.

pub mod engine;
pub mod types;
