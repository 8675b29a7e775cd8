//! Fixed catalogs the generator draws from
//!
//! Names, diagnoses, physicians, ICU units and the templates for vitals, risk
//! factors, medications, procedures and sepsis indicators.

use crate::models::vital::{CriticalRange, NormalRange};

/// Default roster, one patient per name
pub static PATIENT_NAMES: [&str; 12] = [
    "John Smith",
    "Emma Johnson",
    "Michael Williams",
    "Sophia Brown",
    "James Jones",
    "Olivia Davis",
    "Robert Miller",
    "Ava Wilson",
    "William Moore",
    "Isabella Taylor",
    "David Anderson",
    "Mia Thomas",
];

pub static DIAGNOSES: [&str; 10] = [
    "Acute Respiratory Distress",
    "Post-Surgical Infection",
    "Pneumonia",
    "Urinary Tract Infection",
    "Cellulitis",
    "Post-Surgical Monitoring",
    "Multiple Trauma",
    "Stroke",
    "Diabetic Ketoacidosis",
    "Acute Renal Failure",
];

pub static PHYSICIANS: [&str; 10] = [
    "Dr. Roberts",
    "Dr. Chen",
    "Dr. Patel",
    "Dr. Nguyen",
    "Dr. Garcia",
    "Dr. Williams",
    "Dr. Johnson",
    "Dr. Lee",
    "Dr. Smith",
    "Dr. Kim",
];

pub static ICU_UNITS: [&str; 4] = ["Medical ICU", "Surgical ICU", "Cardiac ICU", "Neuro ICU"];

/// Catalog key of the factor that drives sepsis risk on update
pub const INFECTION_RISK_FACTOR: &str = "infection_risk";

pub struct VitalTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub normal_range: NormalRange,
    pub critical_range: Option<CriticalRange>,
}

pub struct RiskFactorTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub description: &'static str,
}

pub struct MedicationTemplate {
    pub name: &'static str,
    pub dosages: &'static [&'static str],
    pub frequencies: &'static [&'static str],
    pub route: &'static str,
}

pub struct SepsisIndicatorTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

const fn critical(min: Option<f64>, max: Option<f64>) -> Option<CriticalRange> {
    Some(CriticalRange { min, max })
}

pub static VITAL_TEMPLATES: [VitalTemplate; 9] = [
    VitalTemplate {
        id: "heart_rate",
        name: "Heart Rate",
        unit: "bpm",
        normal_range: NormalRange { min: 60.0, max: 100.0 },
        critical_range: critical(Some(40.0), Some(130.0)),
    },
    VitalTemplate {
        id: "blood_pressure_systolic",
        name: "Blood Pressure (Systolic)",
        unit: "mmHg",
        normal_range: NormalRange { min: 90.0, max: 120.0 },
        critical_range: critical(Some(70.0), Some(160.0)),
    },
    VitalTemplate {
        id: "blood_pressure_diastolic",
        name: "Blood Pressure (Diastolic)",
        unit: "mmHg",
        normal_range: NormalRange { min: 60.0, max: 80.0 },
        critical_range: critical(Some(40.0), Some(100.0)),
    },
    VitalTemplate {
        id: "respiratory_rate",
        name: "Respiratory Rate",
        unit: "bpm",
        normal_range: NormalRange { min: 12.0, max: 20.0 },
        critical_range: critical(Some(8.0), Some(30.0)),
    },
    VitalTemplate {
        id: "oxygen_saturation",
        name: "Oxygen Saturation",
        unit: "%",
        normal_range: NormalRange { min: 95.0, max: 100.0 },
        critical_range: critical(Some(90.0), None),
    },
    VitalTemplate {
        id: "temperature",
        name: "Temperature",
        unit: "°C",
        normal_range: NormalRange { min: 36.5, max: 37.5 },
        critical_range: critical(Some(35.0), Some(39.0)),
    },
    VitalTemplate {
        id: "gcs",
        name: "Glasgow Coma Scale",
        unit: "",
        normal_range: NormalRange { min: 15.0, max: 15.0 },
        critical_range: critical(Some(8.0), None),
    },
    VitalTemplate {
        id: "wbc_count",
        name: "WBC Count",
        unit: "x10⁹/L",
        normal_range: NormalRange { min: 4.0, max: 11.0 },
        critical_range: critical(Some(2.0), Some(20.0)),
    },
    VitalTemplate {
        id: "lactate",
        name: "Lactate",
        unit: "mmol/L",
        normal_range: NormalRange { min: 0.5, max: 2.0 },
        critical_range: critical(None, Some(4.0)),
    },
];

pub static RISK_FACTOR_TEMPLATES: [RiskFactorTemplate; 6] = [
    RiskFactorTemplate {
        id: "hemodynamic_instability",
        name: "Hemodynamic Instability",
        weight: 0.25,
        description: "Abnormal blood pressure, heart rate, or cardiac output",
    },
    RiskFactorTemplate {
        id: "respiratory_failure",
        name: "Respiratory Compromise",
        weight: 0.2,
        description: "Decreased oxygen levels or increased respiratory effort",
    },
    RiskFactorTemplate {
        id: INFECTION_RISK_FACTOR,
        name: "Infection Risk",
        weight: 0.25,
        description: "Elevated infection markers or signs of sepsis",
    },
    RiskFactorTemplate {
        id: "neurological_status",
        name: "Neurological Status",
        weight: 0.15,
        description: "Changes in consciousness, GCS, or pupillary response",
    },
    RiskFactorTemplate {
        id: "organ_failure",
        name: "Organ Failure",
        weight: 0.1,
        description: "Signs of compromised organ function",
    },
    RiskFactorTemplate {
        id: "medication_response",
        name: "Medication Response",
        weight: 0.05,
        description: "Response to current medication protocols",
    },
];

pub static MEDICATION_TEMPLATES: [MedicationTemplate; 7] = [
    MedicationTemplate {
        name: "Vancomycin",
        dosages: &["500mg", "1g", "1.5g"],
        frequencies: &["Q8H", "Q12H", "Q24H"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Piperacillin/Tazobactam",
        dosages: &["3.375g", "4.5g"],
        frequencies: &["Q6H", "Q8H"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Ceftriaxone",
        dosages: &["1g", "2g"],
        frequencies: &["Q12H", "Q24H"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Norepinephrine",
        dosages: &["0.1-0.5 mcg/kg/min", "0.5-1 mcg/kg/min"],
        frequencies: &["Continuous"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Propofol",
        dosages: &["25-75 mcg/kg/min"],
        frequencies: &["Continuous"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Fentanyl",
        dosages: &["25-100 mcg/hr"],
        frequencies: &["Continuous"],
        route: "IV",
    },
    MedicationTemplate {
        name: "Insulin",
        dosages: &["Variable"],
        frequencies: &["Continuous", "Sliding Scale"],
        route: "IV",
    },
];

pub static PROCEDURE_NAMES: [&str; 10] = [
    "Central Line Placement",
    "Endotracheal Intubation",
    "Mechanical Ventilation",
    "Arterial Line Placement",
    "Bronchoscopy",
    "Paracentesis",
    "Thoracentesis",
    "Lumbar Puncture",
    "Hemodialysis",
    "ECMO Initiation",
];

pub static SEPSIS_INDICATOR_TEMPLATES: [SepsisIndicatorTemplate; 13] = [
    SepsisIndicatorTemplate {
        name: "Fever > 38.3°C",
        description: "Elevated body temperature indicating infection",
    },
    SepsisIndicatorTemplate {
        name: "Hypothermia < 36°C",
        description: "Low body temperature can indicate severe infection",
    },
    SepsisIndicatorTemplate {
        name: "Tachycardia > 90 bpm",
        description: "Elevated heart rate is a common response to infection",
    },
    SepsisIndicatorTemplate {
        name: "Tachypnea > 20 breaths/min",
        description: "Increased respiratory rate can be due to sepsis",
    },
    SepsisIndicatorTemplate {
        name: "Altered Mental Status",
        description: "Changes in consciousness can indicate sepsis",
    },
    SepsisIndicatorTemplate {
        name: "Hyperglycemia > 140 mg/dL",
        description: "Elevated blood glucose without diabetes",
    },
    SepsisIndicatorTemplate {
        name: "Leukocytosis > 12,000/μL",
        description: "Elevated white blood cell count",
    },
    SepsisIndicatorTemplate {
        name: "Leukopenia < 4,000/μL",
        description: "Decreased white blood cell count",
    },
    SepsisIndicatorTemplate {
        name: "Hypotension < 90 mmHg",
        description: "Low blood pressure can indicate septic shock",
    },
    SepsisIndicatorTemplate {
        name: "Lactate > 2 mmol/L",
        description: "Elevated lactate is associated with tissue hypoperfusion",
    },
    SepsisIndicatorTemplate {
        name: "Oliguria < 0.5 mL/kg/hr",
        description: "Decreased urine output can indicate kidney injury",
    },
    SepsisIndicatorTemplate {
        name: "Thrombocytopenia < 100,000/μL",
        description: "Low platelet count can be due to sepsis",
    },
    SepsisIndicatorTemplate {
        name: "Coagulopathy",
        description: "Abnormal blood clotting is common in sepsis",
    },
];
