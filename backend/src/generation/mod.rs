//! Roster generation
//!
//! Builds the synthetic ward at startup: one patient per roster name, each
//! with randomized demographics, vitals, risk factors, medications,
//! procedures, sepsis indicators and a 24-hour risk history. All draws come
//! from the supplied [`RandomSource`], so a seeded source always produces
//! the same ward.
//!
//! # Example
//!
//! ```
//! use icu_risk_sim::generation::PatientGenerator;
//! use icu_risk_sim::RngManager;
//!
//! let generator = PatientGenerator::with_default_roster();
//! let mut rng = RngManager::new(42);
//! let patients = generator.generate_roster(1_700_000_000_000, &mut rng);
//!
//! assert_eq!(patients.len(), 12);
//! assert!(patients.iter().all(|p| p.vital_signs.len() == 9));
//! ```

use crate::catalog::{
    DIAGNOSES, MEDICATION_TEMPLATES, PATIENT_NAMES, PHYSICIANS, PROCEDURE_NAMES,
    RISK_FACTOR_TEMPLATES, SEPSIS_INDICATOR_TEMPLATES, VITAL_TEMPLATES,
};
use crate::core::time::{DAY_MS, HOUR_MS, MINUTE_MS};
use crate::models::history::{HistoricalData, RiskHistory, MAX_HISTORY_LEN};
use crate::models::patient::{Gender, Medication, Patient, Procedure, ProcedureStatus};
use crate::models::risk::{
    clamp_score, weighted_risk_score, RiskFactor, RiskLevel, HIGH_RISK_THRESHOLD, MAX_SCORE,
};
use crate::models::sepsis::{IndicatorValue, SepsisIndicator};
use crate::models::vital::{round_one_decimal, Trend, VitalSign};
use crate::rng::RandomSource;

/// Chance a patient's sepsis risk is pushed above the composite score
const SEPSIS_ELEVATED_PROBABILITY: f64 = 0.3;

/// Chance a procedure has already been completed
const PROCEDURE_COMPLETED_PROBABILITY: f64 = 0.7;

/// Spread of history samples around the seeded sepsis risk
const HISTORY_SPREAD: f64 = 20.0;

/// Builds the initial patient roster
pub struct PatientGenerator {
    roster: Vec<String>,
}

impl PatientGenerator {
    pub fn new(roster: Vec<String>) -> Self {
        Self { roster }
    }

    /// Generator over the twelve catalog names
    pub fn with_default_roster() -> Self {
        Self::new(PATIENT_NAMES.iter().map(|n| n.to_string()).collect())
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// One patient per roster name, in roster order
    pub fn generate_roster<R: RandomSource>(&self, now_ms: i64, rng: &mut R) -> Vec<Patient> {
        self.roster
            .iter()
            .enumerate()
            .map(|(index, name)| self.generate_patient(index, name, now_ms, rng))
            .collect()
    }

    /// Synthesize the patient at roster position `index`
    pub fn generate_patient<R: RandomSource>(
        &self,
        index: usize,
        name: &str,
        now_ms: i64,
        rng: &mut R,
    ) -> Patient {
        let vital_signs = generate_vitals(now_ms, rng);
        let risk_factors = generate_risk_factors(rng);

        let current_risk_score = weighted_risk_score(&risk_factors);
        let sepsis_risk = seed_sepsis_risk(current_risk_score, rng);

        let medications = generate_medications(index, now_ms, rng);
        let procedures = generate_procedures(index, now_ms, rng);
        let sepsis_indicators = generate_sepsis_indicators(sepsis_risk, rng);
        let historical_data = generate_history(sepsis_risk, now_ms, rng);

        let age = rng.int_inclusive(18, 90) as u8;
        let gender = if rng.chance(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let room = room_label(rng.int_inclusive(1, 20));
        let bed = rng.int_inclusive(1, 4).to_string();
        let admission_date = now_ms - rng.int_inclusive(1, 14) * DAY_MS;
        let diagnosis = rng.pick(&DIAGNOSES).to_string();
        let attending_physician = rng.pick(&PHYSICIANS).to_string();

        Patient {
            id: format!("patient-{}", index + 1),
            name: name.to_string(),
            age,
            gender,
            room,
            bed,
            admission_date,
            diagnosis,
            attending_physician,
            current_risk_score,
            risk_level: RiskLevel::from_score(f64::from(current_risk_score)),
            risk_factors,
            vital_signs,
            medications,
            procedures,
            sepsis_indicators,
            sepsis_risk,
            historical_data,
            last_updated: now_ms,
        }
    }
}

impl Default for PatientGenerator {
    fn default() -> Self {
        Self::with_default_roster()
    }
}

/// Room label for room number `r`: floor `r / 4 + 1`, bay letter `A + r % 4`
pub fn room_label(room_number: i64) -> String {
    let floor = room_number / 4 + 1;
    let bay = (b'A' + (room_number % 4) as u8) as char;
    format!("{}{}", floor, bay)
}

fn generate_vitals<R: RandomSource>(now_ms: i64, rng: &mut R) -> Vec<VitalSign> {
    VITAL_TEMPLATES
        .iter()
        .map(|template| {
            let value = rng.uniform(
                template.normal_range.min * 0.7,
                template.normal_range.max * 1.2,
            );
            let trend = if rng.chance(0.5) {
                Trend::Stable
            } else if rng.chance(0.5) {
                Trend::Increasing
            } else {
                Trend::Decreasing
            };

            VitalSign {
                id: template.id.to_string(),
                name: template.name.to_string(),
                value: round_one_decimal(value),
                unit: template.unit.to_string(),
                normal_range: template.normal_range,
                critical_range: template.critical_range,
                trend,
                last_updated: now_ms - rng.int_inclusive(0, 15) * MINUTE_MS,
            }
        })
        .collect()
}

fn generate_risk_factors<R: RandomSource>(rng: &mut R) -> Vec<RiskFactor> {
    RISK_FACTOR_TEMPLATES
        .iter()
        .map(|template| RiskFactor {
            id: template.id.to_string(),
            name: template.name.to_string(),
            weight: template.weight,
            score: rng.int_inclusive(10, 100) as u8,
            description: template.description.to_string(),
        })
        .collect()
}

fn seed_sepsis_risk<R: RandomSource>(risk_score: u8, rng: &mut R) -> f64 {
    let base = f64::from(risk_score);
    if rng.chance(SEPSIS_ELEVATED_PROBABILITY) {
        (base + rng.int_inclusive(15, 30) as f64).min(MAX_SCORE)
    } else {
        clamp_score(base + rng.int_inclusive(-15, 15) as f64)
    }
}

fn generate_medications<R: RandomSource>(
    index: usize,
    now_ms: i64,
    rng: &mut R,
) -> Vec<Medication> {
    let count = rng.int_inclusive(1, 4);
    (0..count)
        .map(|i| {
            let template = rng.pick(&MEDICATION_TEMPLATES);
            Medication {
                id: format!("med-{}-{}", index, i),
                name: template.name.to_string(),
                dosage: rng.pick(template.dosages).to_string(),
                frequency: rng.pick(template.frequencies).to_string(),
                route: template.route.to_string(),
                start_date: now_ms - rng.int_inclusive(1, 7) * DAY_MS,
                end_date: None,
            }
        })
        .collect()
}

fn generate_procedures<R: RandomSource>(
    index: usize,
    now_ms: i64,
    rng: &mut R,
) -> Vec<Procedure> {
    let count = rng.int_inclusive(0, 3);
    (0..count)
        .map(|i| {
            let name = rng.pick(&PROCEDURE_NAMES).to_string();
            let date = now_ms - rng.int_inclusive(0, 10) * DAY_MS;
            let status = if rng.chance(PROCEDURE_COMPLETED_PROBABILITY) {
                ProcedureStatus::Completed
            } else if rng.chance(0.5) {
                ProcedureStatus::InProgress
            } else {
                ProcedureStatus::Scheduled
            };
            let notes = rng.chance(0.5).then(|| format!("Notes for {}", name));

            Procedure {
                id: format!("proc-{}-{}", index, i),
                name,
                date,
                status,
                notes,
            }
        })
        .collect()
}

/// 3-7 distinct indicators; high sepsis risk makes each one likelier critical
fn generate_sepsis_indicators<R: RandomSource>(
    sepsis_risk: f64,
    rng: &mut R,
) -> Vec<SepsisIndicator> {
    let count = rng.int_inclusive(3, 7) as usize;
    let mut order: Vec<usize> = (0..SEPSIS_INDICATOR_TEMPLATES.len()).collect();
    rng.shuffle(&mut order);

    let critical_probability = if sepsis_risk >= HIGH_RISK_THRESHOLD {
        0.7
    } else {
        0.2
    };

    order
        .into_iter()
        .take(count)
        .map(|template_idx| {
            let template = &SEPSIS_INDICATOR_TEMPLATES[template_idx];
            let critical = rng.chance(critical_probability);
            SepsisIndicator {
                name: template.name.to_string(),
                value: IndicatorValue::Flag(rng.chance(0.8)),
                description: template.description.to_string(),
                critical,
            }
        })
        .collect()
}

/// Hourly samples from 24 hours ago to now, scattered around `sepsis_risk`
fn generate_history<R: RandomSource>(sepsis_risk: f64, now_ms: i64, rng: &mut R) -> RiskHistory {
    let low = (sepsis_risk - HISTORY_SPREAD).max(0.0).ceil() as i64;
    let high = (sepsis_risk + HISTORY_SPREAD).min(MAX_SCORE).floor() as i64;
    let hours_back = MAX_HISTORY_LEN as i64 - 1;

    (0..=hours_back)
        .rev()
        .map(|hours_ago| HistoricalData {
            timestamp: now_ms - hours_ago * HOUR_MS,
            score: rng.int_inclusive(low, high) as f64,
        })
        .collect()
}
