//! Single-patient update step
//!
//! ```text
//! For one patient:
//! 1. Drift vitals (bounded delta, trend against the previous reading)
//! 2. Nudge risk factor scores by ±1..5
//! 3. Recompute composite score and risk level
//! 4. Resample critical flags on some sepsis indicators
//! 5. Move sepsis risk by the infection-factor delta and critical-count delta
//! 6. Append the new sepsis risk to the history window
//! 7. Stamp last_updated
//! ```

use crate::catalog::INFECTION_RISK_FACTOR;
use crate::models::patient::Patient;
use crate::models::risk::{clamp_int_score, clamp_score};
use crate::models::history::HistoricalData;
use crate::models::vital::round_one_decimal;
use crate::orchestrator::engine::UpdateRates;
use crate::rng::RandomSource;

/// Largest vital drift per update, as a fraction of the normal-range maximum
pub const VITAL_MAX_CHANGE_FRACTION: f64 = 0.05;

/// Sepsis risk points per point of infection-risk change
pub const INFECTION_DELTA_WEIGHT: f64 = 0.5;

/// Sepsis risk points per newly critical indicator
pub const CRITICAL_INDICATOR_WEIGHT: f64 = 5.0;

/// Return an updated copy of `patient`
///
/// The input is left untouched.
pub fn update_patient<R: RandomSource>(
    patient: &Patient,
    rates: &UpdateRates,
    now_ms: i64,
    rng: &mut R,
) -> Patient {
    let mut updated = patient.clone();

    for vital in &mut updated.vital_signs {
        if rng.chance(rates.vital_change) {
            let max_change = vital.normal_range.max * VITAL_MAX_CHANGE_FRACTION;
            let direction = rng.sign();
            let change = rng.uniform(0.0, max_change) * direction;
            let value = round_one_decimal(vital.value + change);
            vital.record(value, now_ms);
        }
    }

    for factor in &mut updated.risk_factors {
        if rng.chance(rates.factor_change) {
            let direction = if rng.chance(0.5) { 1 } else { -1 };
            let change = rng.int_inclusive(1, 5) as i32 * direction;
            factor.score = clamp_int_score(i32::from(factor.score) + change);
        }
    }

    updated.refresh_risk_score();

    for indicator in &mut updated.sepsis_indicators {
        if rng.chance(rates.indicator_resample) {
            indicator.critical = rng.chance(rates.indicator_critical);
        }
    }

    updated.sepsis_risk = next_sepsis_risk(patient, &updated);

    updated.historical_data.push(HistoricalData {
        timestamp: now_ms,
        score: updated.sepsis_risk,
    });
    updated.last_updated = now_ms;

    debug_assert!(
        updated.invariants_hold(),
        "patient {} violates score invariants after update",
        updated.id
    );

    updated
}

/// Sepsis risk after moving from `before` to `after`
///
/// Starts from the previous sepsis risk, adds half the change in the
/// infection-risk factor and five points per additional critical indicator,
/// then clamps to [0, 100]. A patient without an infection-risk factor only
/// moves with its indicators.
pub fn next_sepsis_risk(before: &Patient, after: &Patient) -> f64 {
    let mut risk = before.sepsis_risk;

    if let (Some(old), Some(new)) = (
        before.factor_score(INFECTION_RISK_FACTOR),
        after.factor_score(INFECTION_RISK_FACTOR),
    ) {
        risk += (f64::from(new) - f64::from(old)) * INFECTION_DELTA_WEIGHT;
    }

    let critical_delta =
        after.critical_indicator_count() as f64 - before.critical_indicator_count() as f64;
    risk += critical_delta * CRITICAL_INDICATOR_WEIGHT;

    clamp_score(risk)
}
