//! End-to-end engine scenarios
//!
//! Seed → tick → snapshot, plus exact update outcomes under scripted random
//! sources.

use icu_risk_sim::models::history::{HistoricalData, RiskHistory, MAX_HISTORY_LEN};
use icu_risk_sim::models::vital::NormalRange;
use icu_risk_sim::orchestrator::{next_sepsis_risk, update_patient, DEFAULT_TICK_INTERVAL_MS};
use icu_risk_sim::{
    Gender, IndicatorValue, Patient, RandomSource, RiskEngine, RiskFactor, RiskLevel,
    SepsisIndicator, SimulationConfig, SimulationError, Trend, UpdateRates, VitalSign,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Replays a fixed list of draws, cycling when exhausted
struct ScriptedRng {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }

    fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Source that always returns the same value
struct ConstRng(f64);

impl RandomSource for ConstRng {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

fn create_test_engine_with_seed(seed: u64) -> RiskEngine {
    let config = SimulationConfig {
        rng_seed: seed,
        start_time_ms: 1_700_000_000_000,
        ..SimulationConfig::default()
    };
    RiskEngine::new(config).expect("Failed to create test engine")
}

fn indicator(name: &str, critical: bool) -> SepsisIndicator {
    SepsisIndicator {
        name: name.to_string(),
        value: IndicatorValue::Flag(true),
        description: String::new(),
        critical,
    }
}

/// One heart-rate vital, one infection factor, two quiet indicators
fn create_test_patient(sepsis_risk: f64) -> Patient {
    let mut patient = Patient {
        id: "patient-1".to_string(),
        name: "Test Patient".to_string(),
        age: 50,
        gender: Gender::Other,
        room: "1A".to_string(),
        bed: "1".to_string(),
        admission_date: 0,
        diagnosis: "Pneumonia".to_string(),
        attending_physician: "Dr. Kim".to_string(),
        current_risk_score: 0,
        risk_level: RiskLevel::Low,
        risk_factors: vec![RiskFactor {
            id: "infection_risk".to_string(),
            name: "Infection Risk".to_string(),
            weight: 1.0,
            score: 50,
            description: String::new(),
        }],
        vital_signs: vec![VitalSign {
            id: "heart_rate".to_string(),
            name: "Heart Rate".to_string(),
            value: 100.0,
            unit: "bpm".to_string(),
            normal_range: NormalRange {
                min: 60.0,
                max: 100.0,
            },
            critical_range: None,
            trend: Trend::Increasing,
            last_updated: 0,
        }],
        medications: vec![],
        procedures: vec![],
        sepsis_indicators: vec![indicator("Fever", false), indicator("Coagulopathy", false)],
        sepsis_risk,
        historical_data: RiskHistory::new(),
        last_updated: 0,
    };
    patient.refresh_risk_score();
    patient
}

// ============================================================================
// Seeded Scenarios
// ============================================================================

#[test]
fn test_seeded_roster_shape() {
    let engine = create_test_engine_with_seed(42);
    let patients = engine.get_patients();

    assert_eq!(patients.len(), 12);
    assert!(patients.iter().all(|p| p.vital_signs.len() == 9));
    assert!(patients.iter().all(|p| p.risk_factors.len() == 6));
}

#[test]
fn test_hundred_ticks_keep_invariants() {
    let mut engine = create_test_engine_with_seed(42);

    for _ in 0..100 {
        let snapshot = engine.tick();
        assert_eq!(snapshot.patients.len(), 12);

        for p in &snapshot.patients {
            assert!(
                (0.0..=100.0).contains(&p.sepsis_risk),
                "{} sepsis risk {}",
                p.id,
                p.sepsis_risk
            );
            assert!(p.current_risk_score <= 100);
            assert_eq!(p.risk_level, RiskLevel::from_score(f64::from(p.current_risk_score)));
            assert!(p.historical_data.len() <= MAX_HISTORY_LEN);
            assert!(p.historical_data.is_time_ordered());
        }
    }

    assert_eq!(engine.current_tick(), 100);
}

#[test]
fn test_snapshot_reads_are_value_equal() {
    let mut engine = create_test_engine_with_seed(7);
    engine.tick();

    let first = engine.get_patients();
    let second = engine.get_patients();
    assert_eq!(first, second);
}

#[test]
fn test_snapshot_is_detached_from_engine() {
    let mut engine = create_test_engine_with_seed(7);
    let mut copy = engine.get_patients();
    copy[0].sepsis_risk = -50.0;
    copy.clear();

    assert_eq!(engine.get_patients().len(), 12);
    let snapshot = engine.tick();
    assert!(snapshot.patients.iter().all(|p| p.sepsis_risk >= 0.0));
}

#[test]
fn test_get_patient_by_id() {
    let engine = create_test_engine_with_seed(3);

    let patient = engine.get_patient("patient-5").expect("patient-5 exists");
    assert_eq!(patient.name, "James Jones");
    assert!(engine.get_patient("patient-13").is_none());
    assert_eq!(
        engine.require_patient("nobody"),
        Err(SimulationError::PatientNotFound("nobody".to_string()))
    );
}

#[test]
fn test_same_seed_same_digest() {
    let mut a = create_test_engine_with_seed(12345);
    let mut b = create_test_engine_with_seed(12345);

    for _ in 0..20 {
        a.tick();
        b.tick();
    }

    assert_eq!(a.state_digest().unwrap(), b.state_digest().unwrap());
}

#[test]
fn test_different_seeds_different_digest() {
    let a = create_test_engine_with_seed(1);
    let b = create_test_engine_with_seed(2);
    assert_ne!(a.state_digest().unwrap(), b.state_digest().unwrap());
}

#[test]
fn test_tick_timestamps_follow_interval() {
    let mut engine = create_test_engine_with_seed(11);
    let start = engine.now_ms();

    let snapshot = engine.tick();
    assert_eq!(snapshot.timestamp_ms, start + DEFAULT_TICK_INTERVAL_MS);

    for p in &snapshot.patients {
        assert!(p.last_updated == start || p.last_updated == snapshot.timestamp_ms);
    }
}

#[test]
fn test_updated_patients_append_history_sample() {
    let config = SimulationConfig {
        rates: UpdateRates {
            patient_update: 1.0,
            ..UpdateRates::default()
        },
        ..SimulationConfig::default()
    };
    let mut engine = RiskEngine::new(config).unwrap();

    let snapshot = engine.tick();
    for p in &snapshot.patients {
        let last = p.historical_data.last().unwrap();
        assert_eq!(last.timestamp, snapshot.timestamp_ms);
        assert_eq!(last.score, p.sepsis_risk);
        assert_eq!(p.historical_data.len(), MAX_HISTORY_LEN);
    }
}

#[test]
fn test_zero_update_rate_freezes_patients() {
    let config = SimulationConfig {
        rates: UpdateRates {
            patient_update: 0.0,
            ..UpdateRates::default()
        },
        ..SimulationConfig::default()
    };
    let mut engine = RiskEngine::new(config).unwrap();
    let before = engine.get_patients();

    for _ in 0..10 {
        engine.tick();
    }

    assert_eq!(engine.get_patients(), before);
}

#[test]
fn test_empty_roster_is_graceful() {
    let config = SimulationConfig {
        roster: Some(Vec::new()),
        ..SimulationConfig::default()
    };
    let mut engine = RiskEngine::new(config).unwrap();

    assert!(engine.get_patients().is_empty());
    assert!(engine.get_department_risks().is_empty());

    let snapshot = engine.tick();
    assert!(snapshot.patients.is_empty());
    assert!(snapshot.department_risks.is_empty());
}

// ============================================================================
// Exact Update Outcomes
// ============================================================================

#[test]
fn test_update_patient_exact_outcome() {
    let patient = create_test_patient(60.0);
    let mut rng = ScriptedRng::new(vec![
        0.1,  // heart rate changes
        0.2,  // direction: up
        0.5,  // magnitude: 0.5 * 5.0 = 2.5
        0.1,  // infection factor changes
        0.1,  // direction: up
        0.99, // magnitude: 5
        0.1,  // first indicator resampled
        0.1,  // ... to critical
        0.1,  // second indicator resampled
        0.1,  // ... to critical
    ]);

    let updated = update_patient(&patient, &UpdateRates::default(), 5_000, &mut rng);
    assert_eq!(rng.consumed(), 10);

    let hr = &updated.vital_signs[0];
    assert_eq!(hr.value, 102.5);
    assert_eq!(hr.trend, Trend::Stable);
    assert_eq!(hr.last_updated, 5_000);

    assert_eq!(updated.risk_factors[0].score, 55);
    assert_eq!(updated.current_risk_score, 55);
    assert_eq!(updated.risk_level, RiskLevel::Medium);

    // 60 + 0.5 * (55 - 50) + 5 * (2 - 0)
    assert_eq!(updated.sepsis_risk, 72.5);
    assert_eq!(updated.sepsis_risk_level(), RiskLevel::High);

    assert_eq!(
        updated.historical_data.last(),
        Some(&HistoricalData {
            timestamp: 5_000,
            score: 72.5
        })
    );
    assert_eq!(updated.last_updated, 5_000);

    // Input untouched
    assert_eq!(patient.sepsis_risk, 60.0);
    assert!(patient.historical_data.is_empty());
}

#[test]
fn test_update_without_changes_only_appends_history() {
    let patient = create_test_patient(33.0);
    let mut rng = ConstRng(0.99);

    let updated = update_patient(&patient, &UpdateRates::default(), 9_000, &mut rng);

    assert_eq!(updated.vital_signs, patient.vital_signs);
    assert_eq!(updated.risk_factors, patient.risk_factors);
    assert_eq!(updated.sepsis_indicators, patient.sepsis_indicators);
    assert_eq!(updated.sepsis_risk, 33.0);
    assert_eq!(updated.historical_data.len(), 1);
    assert_eq!(updated.last_updated, 9_000);
}

#[test]
fn test_sepsis_risk_clamps_at_upper_bound() {
    let patient = create_test_patient(98.0);
    let mut after = patient.clone();
    after.sepsis_indicators.iter_mut().for_each(|i| i.critical = true);

    assert_eq!(next_sepsis_risk(&patient, &after), 100.0);
}

#[test]
fn test_sepsis_risk_clamps_at_lower_bound() {
    let mut patient = create_test_patient(3.0);
    patient.sepsis_indicators.iter_mut().for_each(|i| i.critical = true);

    let mut after = patient.clone();
    after.sepsis_indicators.iter_mut().for_each(|i| i.critical = false);
    after.risk_factors[0].score = 40;

    // 3 - 5 - 10 → clamped
    assert_eq!(next_sepsis_risk(&patient, &after), 0.0);
}

#[test]
fn test_sepsis_risk_ignores_missing_infection_factor() {
    let mut patient = create_test_patient(50.0);
    patient.risk_factors[0].id = "organ_failure".to_string();

    let mut after = patient.clone();
    after.risk_factors[0].score = 100;
    after.sepsis_indicators[0].critical = true;

    assert_eq!(next_sepsis_risk(&patient, &after), 55.0);
}

#[test]
fn test_history_window_evicts_oldest() {
    let mut patient = create_test_patient(50.0);
    for t in 0..MAX_HISTORY_LEN as i64 {
        patient.historical_data.push(HistoricalData {
            timestamp: t,
            score: 50.0,
        });
    }

    let updated = update_patient(&patient, &UpdateRates::default(), 1_000, &mut ConstRng(0.99));

    assert_eq!(updated.historical_data.len(), MAX_HISTORY_LEN);
    assert_eq!(updated.historical_data.first().map(|s| s.timestamp), Some(1));
    assert_eq!(updated.historical_data.last().map(|s| s.timestamp), Some(1_000));
}

#[test]
fn test_constant_source_engine_tick_exact() {
    // 0.0: every patient and every item changes, deltas take their minimum
    let mut engine = RiskEngine::with_rng(SimulationConfig::default(), ConstRng(0.0)).unwrap();
    let seeded = engine.get_patients();
    assert!(seeded.iter().all(|p| p.sepsis_risk == 25.0));

    let snapshot = engine.tick();

    for (before, after) in seeded.iter().zip(&snapshot.patients) {
        // Zero-magnitude drift keeps the value and reads as stable
        for (v0, v1) in before.vital_signs.iter().zip(&after.vital_signs) {
            assert_eq!(v0.value, v1.value);
            assert_eq!(v1.trend, Trend::Stable);
        }

        assert!(after.risk_factors.iter().all(|f| f.score == 11));
        assert_eq!(after.current_risk_score, 11);

        // 25 + 0.5 * (11 - 10); critical flags were already all set
        assert_eq!(after.sepsis_risk, 25.5);
        assert_eq!(after.historical_data.len(), MAX_HISTORY_LEN);
        assert_eq!(after.historical_data.last().map(|s| s.score), Some(25.5));
    }

    assert_eq!(snapshot.department_risks.len(), 1);
    assert_eq!(snapshot.department_risks[0].department, "Medical ICU");
    assert_eq!(snapshot.department_risks[0].patients_count, 12);
    assert_eq!(snapshot.department_risks[0].average_risk_score, 26);
}
