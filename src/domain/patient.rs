//! Patient record types for Alzheimer's disease risk prediction.
//!
//! The sixteen input fields, their valid ranges, and the column order the
//! model was trained on all live here. `FEATURE_ORDER` is the single
//! authority on ordering; `PatientRecord::to_vector` is the only place a
//! feature vector is assembled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature names in the exact column order the model was trained on.
///
/// The scaler and classifier are order-sensitive and column-name-unaware
/// once vectorized, so any deviation here silently corrupts predictions.
pub const FEATURE_ORDER: [&str; 16] = [
    "FunctionalAssessment",
    "ADL",
    "MemoryComplaints",
    "MMSE",
    "BehavioralProblems",
    "SleepQuality",
    "Age",
    "CholesterolHDL",
    "Hypertension",
    "FamilyHistoryAlzheimers",
    "CholesterolLDL",
    "CardiovascularDisease",
    "Diabetes",
    "BMI",
    "Disorientation",
    "CholesterolTriglycerides",
];

/// Valid numeric bounds for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Look up the declared range for a field name.
    #[must_use]
    pub fn of(name: &str) -> Option<Self> {
        FEATURE_RANGES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| *r)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared input ranges per field, in `FEATURE_ORDER` order.
///
/// Continuous bounds match the distribution the model was trained on.
pub const FEATURE_RANGES: [(&str, FeatureRange); 16] = [
    ("FunctionalAssessment", FeatureRange::new(0.000_459_594, 9.996_467_073)),
    ("ADL", FeatureRange::new(0.001_287_928, 9.999_747_122)),
    ("MemoryComplaints", FeatureRange::new(0.0, 1.0)),
    ("MMSE", FeatureRange::new(0.0, 30.0)),
    ("BehavioralProblems", FeatureRange::new(0.0, 1.0)),
    ("SleepQuality", FeatureRange::new(0.002_628_66, 9.999_840_317)),
    ("Age", FeatureRange::new(30.0, 100.0)),
    ("CholesterolHDL", FeatureRange::new(20.003_434_01, 100.980_324_08)),
    ("Hypertension", FeatureRange::new(0.0, 1.0)),
    ("FamilyHistoryAlzheimers", FeatureRange::new(0.0, 1.0)),
    ("CholesterolLDL", FeatureRange::new(50.0, 200.0)),
    ("CardiovascularDisease", FeatureRange::new(0.0, 1.0)),
    ("Diabetes", FeatureRange::new(0.0, 1.0)),
    ("BMI", FeatureRange::new(10.0, 50.0)),
    ("Disorientation", FeatureRange::new(0.0, 1.0)),
    ("CholesterolTriglycerides", FeatureRange::new(50.0, 400.0)),
];

/// Errors raised while constructing or validating a patient record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} must be 0 or 1")]
    NotBinary { field: &'static str, value: f64 },

    #[error("{field} = {value} must be a whole number")]
    NotInteger { field: &'static str, value: f64 },
}

/// One patient's sixteen self-reported indicators.
///
/// Created fresh per prediction request from form input; never persisted.
/// Continuous measures and binary-coded flags are `f64`; `age`, `mmse`,
/// `hypertension` and `disorientation` are collected as integers.
///
/// Field declaration order matches `FEATURE_ORDER`, but assembly is keyed
/// by name in `to_vector`, never by struct layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct PatientRecord {
    /// Ability to perform daily tasks (0 = cannot do at all, 10 = fully capable)
    pub functional_assessment: f64,

    /// Independence in activities of daily living (0 = dependent, 10 = independent)
    #[serde(rename = "ADL")]
    pub adl: f64,

    /// Self-noticed memory problems (0 = no, 1 = yes)
    pub memory_complaints: f64,

    /// Mini-Mental State Examination score (0 = low, 30 = high)
    #[serde(rename = "MMSE")]
    pub mmse: u32,

    /// Observed behavioral problems (0 = no, 1 = yes)
    pub behavioral_problems: f64,

    /// Sleep quality (0 = poor, 10 = excellent)
    pub sleep_quality: f64,

    /// Age in years (30-100)
    pub age: u32,

    /// HDL cholesterol level in mg/dL
    #[serde(rename = "CholesterolHDL")]
    pub cholesterol_hdl: f64,

    /// Diagnosed high blood pressure (0 = no, 1 = yes)
    pub hypertension: u8,

    /// Family history of Alzheimer's disease (0 = no, 1 = yes)
    pub family_history_alzheimers: f64,

    /// LDL cholesterol level in mg/dL
    #[serde(rename = "CholesterolLDL")]
    pub cholesterol_ldl: f64,

    /// Heart or blood circulation problems (0 = no, 1 = yes)
    pub cardiovascular_disease: f64,

    /// Diagnosed diabetes (0 = no, 1 = yes)
    pub diabetes: f64,

    /// Body Mass Index
    #[serde(rename = "BMI")]
    pub bmi: f64,

    /// Episodes of feeling lost or confused (0 = no, 1 = yes)
    pub disorientation: u8,

    /// Blood triglyceride level in mg/dL
    pub cholesterol_triglycerides: f64,
}

impl Default for PatientRecord {
    /// Form defaults presented to the patient before any input.
    fn default() -> Self {
        Self {
            functional_assessment: 5.0,
            adl: 5.0,
            memory_complaints: 0.0,
            mmse: 10,
            behavioral_problems: 0.0,
            sleep_quality: 7.0,
            age: 30,
            cholesterol_hdl: 50.0,
            hypertension: 0,
            family_history_alzheimers: 0.0,
            cholesterol_ldl: 100.0,
            cardiovascular_disease: 0.0,
            diabetes: 0.0,
            bmi: 25.0,
            disorientation: 0,
            cholesterol_triglycerides: 150.0,
        }
    }
}

impl PatientRecord {
    /// Number of input fields / model columns.
    pub const FIELD_COUNT: usize = FEATURE_ORDER.len();

    /// Assemble the feature vector in the exact order of `FEATURE_ORDER`.
    ///
    /// This is the only assembly site in the crate.
    #[must_use]
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.functional_assessment,
            self.adl,
            self.memory_complaints,
            f64::from(self.mmse),
            self.behavioral_problems,
            self.sleep_quality,
            f64::from(self.age),
            self.cholesterol_hdl,
            f64::from(self.hypertension),
            self.family_history_alzheimers,
            self.cholesterol_ldl,
            self.cardiovascular_disease,
            self.diabetes,
            self.bmi,
            f64::from(self.disorientation),
            self.cholesterol_triglycerides,
        ]
    }

    /// Build a record from a name/value mapping, keyed by canonical field
    /// name. Insertion order is irrelevant.
    ///
    /// # Errors
    /// Returns `MissingField` if any of the sixteen fields is absent,
    /// `UnknownField` for a name outside the contract, and
    /// `NotInteger`/`NotBinary` when an integer field carries a fractional
    /// or non-flag value.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in fields {
            match FEATURE_ORDER.iter().find(|&&canonical| canonical == name) {
                Some(&canonical) => {
                    map.insert(canonical, value);
                }
                None => return Err(RecordError::UnknownField(name.to_string())),
            }
        }

        let mut take =
            |name: &'static str| map.remove(name).ok_or(RecordError::MissingField(name));

        Ok(Self {
            functional_assessment: take("FunctionalAssessment")?,
            adl: take("ADL")?,
            memory_complaints: take("MemoryComplaints")?,
            mmse: int_field("MMSE", take("MMSE")?)?,
            behavioral_problems: take("BehavioralProblems")?,
            sleep_quality: take("SleepQuality")?,
            age: int_field("Age", take("Age")?)?,
            cholesterol_hdl: take("CholesterolHDL")?,
            hypertension: flag_field("Hypertension", take("Hypertension")?)?,
            family_history_alzheimers: take("FamilyHistoryAlzheimers")?,
            cholesterol_ldl: take("CholesterolLDL")?,
            cardiovascular_disease: take("CardiovascularDisease")?,
            diabetes: take("Diabetes")?,
            bmi: take("BMI")?,
            disorientation: flag_field("Disorientation", take("Disorientation")?)?,
            cholesterol_triglycerides: take("CholesterolTriglycerides")?,
        })
    }

    /// Validate every field against its declared range.
    ///
    /// Binary-coded flags must be exactly 0 or 1. The first violation is
    /// returned; a valid record passes untouched to the scaler.
    ///
    /// # Errors
    /// Returns `OutOfRange` or `NotBinary` for the offending field.
    pub fn validate(&self) -> Result<(), RecordError> {
        in_range("FunctionalAssessment", self.functional_assessment)?;
        in_range("ADL", self.adl)?;
        binary("MemoryComplaints", self.memory_complaints)?;
        in_range("MMSE", f64::from(self.mmse))?;
        binary("BehavioralProblems", self.behavioral_problems)?;
        in_range("SleepQuality", self.sleep_quality)?;
        in_range("Age", f64::from(self.age))?;
        in_range("CholesterolHDL", self.cholesterol_hdl)?;
        binary("Hypertension", f64::from(self.hypertension))?;
        binary("FamilyHistoryAlzheimers", self.family_history_alzheimers)?;
        in_range("CholesterolLDL", self.cholesterol_ldl)?;
        binary("CardiovascularDisease", self.cardiovascular_disease)?;
        binary("Diabetes", self.diabetes)?;
        in_range("BMI", self.bmi)?;
        binary("Disorientation", f64::from(self.disorientation))?;
        in_range("CholesterolTriglycerides", self.cholesterol_triglycerides)?;
        Ok(())
    }
}

fn in_range(field: &'static str, value: f64) -> Result<(), RecordError> {
    let range = FeatureRange::of(field)
        .ok_or_else(|| RecordError::UnknownField(field.to_string()))?;
    if range.contains(value) {
        Ok(())
    } else {
        Err(RecordError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn binary(field: &'static str, value: f64) -> Result<(), RecordError> {
    if value == 0.0 || value == 1.0 {
        Ok(())
    } else {
        Err(RecordError::NotBinary { field, value })
    }
}

fn int_field(field: &'static str, value: f64) -> Result<u32, RecordError> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(RecordError::NotInteger { field, value });
    }
    Ok(value as u32)
}

fn flag_field(field: &'static str, value: f64) -> Result<u8, RecordError> {
    if value == 0.0 {
        Ok(0)
    } else if value == 1.0 {
        Ok(1)
    } else {
        Err(RecordError::NotBinary { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_record() -> PatientRecord {
        PatientRecord {
            functional_assessment: 5.0,
            adl: 5.0,
            memory_complaints: 0.0,
            mmse: 10,
            behavioral_problems: 0.0,
            sleep_quality: 7.0,
            age: 65,
            cholesterol_hdl: 50.0,
            hypertension: 0,
            family_history_alzheimers: 0.0,
            cholesterol_ldl: 100.0,
            cardiovascular_disease: 0.0,
            diabetes: 0.0,
            bmi: 25.0,
            disorientation: 0,
            cholesterol_triglycerides: 150.0,
        }
    }

    fn example_fields() -> Vec<(&'static str, f64)> {
        vec![
            ("FunctionalAssessment", 5.0),
            ("ADL", 5.0),
            ("MemoryComplaints", 0.0),
            ("MMSE", 10.0),
            ("BehavioralProblems", 0.0),
            ("SleepQuality", 7.0),
            ("Age", 65.0),
            ("CholesterolHDL", 50.0),
            ("Hypertension", 0.0),
            ("FamilyHistoryAlzheimers", 0.0),
            ("CholesterolLDL", 100.0),
            ("CardiovascularDisease", 0.0),
            ("Diabetes", 0.0),
            ("BMI", 25.0),
            ("Disorientation", 0.0),
            ("CholesterolTriglycerides", 150.0),
        ]
    }

    #[test]
    fn test_vector_assembly_order() {
        let vec = example_record().to_vector();
        assert_eq!(
            vec,
            vec![
                5.0, 5.0, 0.0, 10.0, 0.0, 7.0, 65.0, 50.0, 0.0, 0.0, 100.0, 0.0, 0.0, 25.0,
                0.0, 150.0
            ]
        );
    }

    #[test]
    fn test_from_fields_is_insertion_order_independent() {
        let forward = PatientRecord::from_fields(example_fields()).expect("Should build");

        let mut reversed = example_fields();
        reversed.reverse();
        let backward = PatientRecord::from_fields(reversed).expect("Should build");

        assert_eq!(forward, backward);
        assert_eq!(forward.to_vector(), backward.to_vector());
    }

    #[test]
    fn test_from_fields_missing_field() {
        let fields: Vec<_> = example_fields()
            .into_iter()
            .filter(|(name, _)| *name != "BMI")
            .collect();

        let err = PatientRecord::from_fields(fields).expect_err("Should fail");
        assert_eq!(err, RecordError::MissingField("BMI"));
    }

    #[test]
    fn test_from_fields_unknown_field() {
        let mut fields = example_fields();
        fields.push(("CholesterolVLDL", 12.0));

        let err = PatientRecord::from_fields(fields).expect_err("Should fail");
        assert_eq!(err, RecordError::UnknownField("CholesterolVLDL".to_string()));
    }

    #[test]
    fn test_from_fields_rejects_fractional_age() {
        let fields: Vec<_> = example_fields()
            .into_iter()
            .map(|(name, v)| if name == "Age" { (name, 65.5) } else { (name, v) })
            .collect();

        let err = PatientRecord::from_fields(fields).expect_err("Should fail");
        assert!(matches!(err, RecordError::NotInteger { field: "Age", .. }));
    }

    #[test]
    fn test_validation() {
        assert!(example_record().validate().is_ok());

        let too_young = PatientRecord {
            age: 10,
            ..example_record()
        };
        assert!(matches!(
            too_young.validate().expect_err("Should fail"),
            RecordError::OutOfRange { field: "Age", .. }
        ));

        let half_flag = PatientRecord {
            memory_complaints: 0.5,
            ..example_record()
        };
        assert!(matches!(
            half_flag.validate().expect_err("Should fail"),
            RecordError::NotBinary {
                field: "MemoryComplaints",
                ..
            }
        ));
    }

    #[test]
    fn test_validation_rejects_nan() {
        let bad = PatientRecord {
            bmi: f64::NAN,
            ..example_record()
        };
        assert!(matches!(
            bad.validate().expect_err("Should fail"),
            RecordError::OutOfRange { field: "BMI", .. }
        ));
    }

    #[test]
    fn test_ranges_cover_every_feature() {
        assert_eq!(FEATURE_RANGES.len(), PatientRecord::FIELD_COUNT);
        for name in FEATURE_ORDER {
            let range = FeatureRange::of(name).expect("Range should exist");
            assert!(range.min < range.max, "{name} range is degenerate");
        }
    }

    #[test]
    fn test_default_record_is_valid() {
        assert!(PatientRecord::default().validate().is_ok());
    }
}
