//! Dashboard metrics and alerting over successive snapshots
//!
//! Nothing here feeds back into the engine. A host observes each snapshot it
//! receives and gets back the headline metrics plus any alerts raised by
//! comparing against the previous observation.
//!
//! # Alert Types
//!
//! - **HighRiskCountIncreased**: more patients at/above the threshold than
//!   at the previous observation
//! - **CriticalIndicators**: a patient at/above the threshold has at least
//!   one critical sepsis indicator
//!
//! # Example
//!
//! ```rust
//! use icu_risk_sim::monitor::AlertMonitor;
//! use icu_risk_sim::{RiskEngine, SimulationConfig};
//!
//! let mut engine = RiskEngine::new(SimulationConfig::default()).unwrap();
//! let mut monitor = AlertMonitor::new(70.0).unwrap();
//!
//! monitor.observe(&engine.snapshot());
//! let report = monitor.observe(&engine.tick());
//! for alert in &report.alerts {
//!     println!("tick {}: {}", alert.tick(), alert);
//! }
//! ```

use crate::models::patient::Patient;
use crate::models::risk::{HIGH_RISK_THRESHOLD, MAX_SCORE};
use crate::orchestrator::{SimulationError, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline ward metrics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Patients with sepsis risk >= threshold
    pub high_sepsis_risk_count: usize,
    /// Rounded mean sepsis risk; 0 for an empty ward
    pub avg_sepsis_risk: u8,
    /// Current rounded mean minus previous unrounded mean; 0 without history
    pub sepsis_risk_trend: f64,
}

impl DashboardMetrics {
    pub fn compute(patients: &[Patient], previous: Option<&[Patient]>, threshold: f64) -> Self {
        let high_sepsis_risk_count = patients
            .iter()
            .filter(|p| p.sepsis_risk >= threshold)
            .count();

        let avg_sepsis_risk = mean_sepsis_risk(patients)
            .map(|mean| mean.round().clamp(0.0, MAX_SCORE) as u8)
            .unwrap_or(0);

        let sepsis_risk_trend = match (previous.and_then(mean_sepsis_risk), patients.is_empty()) {
            (Some(prev_mean), false) => f64::from(avg_sepsis_risk) - prev_mean,
            _ => 0.0,
        };

        Self {
            high_sepsis_risk_count,
            avg_sepsis_risk,
            sepsis_risk_trend,
        }
    }
}

fn mean_sepsis_risk(patients: &[Patient]) -> Option<f64> {
    if patients.is_empty() {
        return None;
    }
    let total: f64 = patients.iter().map(|p| p.sepsis_risk).sum();
    Some(total / patients.len() as f64)
}

/// Alert raised by the monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    /// Number of high sepsis risk patients rose since the last observation
    HighRiskCountIncreased {
        tick: usize,
        previous: usize,
        count: usize,
    },

    /// High sepsis risk patient with critical indicators
    CriticalIndicators {
        tick: usize,
        patient_id: String,
        patient_name: String,
        critical_count: usize,
    },
}

impl Alert {
    pub fn tick(&self) -> usize {
        match self {
            Alert::HighRiskCountIncreased { tick, .. } => *tick,
            Alert::CriticalIndicators { tick, .. } => *tick,
        }
    }

    /// Short headline for display
    pub fn title(&self) -> String {
        match self {
            Alert::HighRiskCountIncreased { .. } => "Sepsis Risk Alert".to_string(),
            Alert::CriticalIndicators { patient_name, .. } => {
                format!("Sepsis Alert: {}", patient_name)
            }
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::HighRiskCountIncreased { count, .. } => write!(
                f,
                "{}: number of high sepsis risk patients increased to {}",
                self.title(),
                count
            ),
            Alert::CriticalIndicators { critical_count, .. } => write!(
                f,
                "{}: {} critical sepsis indicators detected",
                self.title(),
                critical_count
            ),
        }
    }
}

/// Metrics and alerts for one observed snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorReport {
    pub tick: usize,
    pub metrics: DashboardMetrics,
    pub alerts: Vec<Alert>,
}

/// Compares successive snapshots against a sepsis-risk threshold
pub struct AlertMonitor {
    threshold: f64,
    previous: Option<Vec<Patient>>,
    last_high_count: Option<usize>,
}

impl AlertMonitor {
    /// Monitor with the given threshold
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` unless `threshold` is within
    /// [0, 100].
    pub fn new(threshold: f64) -> Result<Self, SimulationError> {
        if !(0.0..=MAX_SCORE).contains(&threshold) {
            return Err(SimulationError::InvalidConfig(format!(
                "alert threshold must be within [0, 100], got {}",
                threshold
            )));
        }

        Ok(Self {
            threshold,
            previous: None,
            last_high_count: None,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Change the threshold; the baseline count is kept
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), SimulationError> {
        let validated = Self::new(threshold)?;
        self.threshold = validated.threshold;
        Ok(())
    }

    /// Observe a snapshot
    ///
    /// The first observation sets the baseline and never raises a count
    /// alert; critical-indicator alerts are raised on every observation.
    pub fn observe(&mut self, snapshot: &Snapshot) -> MonitorReport {
        let metrics =
            DashboardMetrics::compute(&snapshot.patients, self.previous.as_deref(), self.threshold);

        let mut alerts = Vec::new();

        if let Some(previous) = self.last_high_count {
            if metrics.high_sepsis_risk_count > previous {
                alerts.push(Alert::HighRiskCountIncreased {
                    tick: snapshot.tick,
                    previous,
                    count: metrics.high_sepsis_risk_count,
                });
            }
        }

        for patient in snapshot.high_sepsis_risk_patients(self.threshold) {
            let critical_count = patient.critical_indicator_count();
            if critical_count > 0 {
                alerts.push(Alert::CriticalIndicators {
                    tick: snapshot.tick,
                    patient_id: patient.id.clone(),
                    patient_name: patient.name.clone(),
                    critical_count,
                });
            }
        }

        self.last_high_count = Some(metrics.high_sepsis_risk_count);
        self.previous = Some(snapshot.patients.clone());

        MonitorReport {
            tick: snapshot.tick,
            metrics,
            alerts,
        }
    }
}

impl Default for AlertMonitor {
    fn default() -> Self {
        Self {
            threshold: HIGH_RISK_THRESHOLD,
            previous: None,
            last_high_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(AlertMonitor::new(-1.0).is_err());
        assert!(AlertMonitor::new(100.5).is_err());
        assert!(AlertMonitor::new(0.0).is_ok());
    }

    #[test]
    fn test_empty_ward_metrics() {
        let metrics = DashboardMetrics::compute(&[], None, 70.0);
        assert_eq!(metrics, DashboardMetrics::default());
    }

    #[test]
    fn test_set_threshold_validates() {
        let mut monitor = AlertMonitor::default();
        assert!(monitor.set_threshold(150.0).is_err());
        assert_eq!(monitor.threshold(), 70.0);
        monitor.set_threshold(50.0).unwrap();
        assert_eq!(monitor.threshold(), 50.0);
    }
}
