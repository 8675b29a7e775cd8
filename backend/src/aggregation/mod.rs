//! Department risk aggregation
//!
//! Every aggregation draws a fresh unit for each patient, then groups the
//! roster by unit. Unit membership is therefore not a stable property of a
//! patient: two consecutive aggregations over identical patients can produce
//! different breakdowns. Given a fixed assignment, grouping is deterministic
//! ([`aggregate_by_unit`]).

use crate::catalog::ICU_UNITS;
use crate::models::department::DepartmentRisk;
use crate::models::patient::Patient;
use crate::models::risk::HIGH_RISK_THRESHOLD;
use crate::rng::RandomSource;

/// Draw one unit per patient, uniformly from [`ICU_UNITS`]
pub fn assign_units<R: RandomSource>(patients: &[Patient], rng: &mut R) -> Vec<&'static str> {
    patients.iter().map(|_| *rng.pick(&ICU_UNITS)).collect()
}

/// Group patients by their assigned unit
///
/// `units[i]` is the unit of `patients[i]`; surplus entries on either side
/// are ignored. Units appear in order of first occurrence. Only units with
/// at least one patient are reported, so an empty roster yields an empty
/// list.
///
/// # Example
/// ```
/// use icu_risk_sim::aggregation::aggregate_by_unit;
///
/// assert!(aggregate_by_unit(&[], &[]).is_empty());
/// ```
pub fn aggregate_by_unit(patients: &[Patient], units: &[&str]) -> Vec<DepartmentRisk> {
    struct Accumulator<'a> {
        unit: &'a str,
        total: f64,
        count: usize,
        high_risk: usize,
    }

    let mut groups: Vec<Accumulator> = Vec::new();

    for (patient, unit) in patients.iter().zip(units.iter().copied()) {
        let idx = match groups.iter().position(|g| g.unit == unit) {
            Some(idx) => idx,
            None => {
                groups.push(Accumulator {
                    unit,
                    total: 0.0,
                    count: 0,
                    high_risk: 0,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        group.total += patient.sepsis_risk;
        group.count += 1;
        if patient.sepsis_risk >= HIGH_RISK_THRESHOLD {
            group.high_risk += 1;
        }
    }

    groups
        .into_iter()
        .map(|g| DepartmentRisk {
            department: g.unit.to_string(),
            average_risk_score: average_score(g.total, g.count),
            patients_count: g.count,
            high_risk_count: g.high_risk,
        })
        .collect()
}

/// Randomly assign units, then aggregate
pub fn calculate_department_risks<R: RandomSource>(
    patients: &[Patient],
    rng: &mut R,
) -> Vec<DepartmentRisk> {
    let units = assign_units(patients, rng);
    aggregate_by_unit(patients, &units)
}

fn average_score(total: f64, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    (total / count as f64).round().clamp(0.0, 100.0) as u8
}
