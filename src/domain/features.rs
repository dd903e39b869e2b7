// ============================================================
// FEATURE VECTOR
// ============================================================
// The ordered numeric inputs the classifier is trained on

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{AppError, Result};

/// Number of features the classifier expects
pub const FEATURE_COUNT: usize = 8;

/// Feature names in the column order used for training and inference
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Label column of the training data
pub const OUTCOME_COLUMN: &str = "Outcome";

/// One row of classifier input, always in `FEATURE_NAMES` order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Build a vector from a JSON request body.
    ///
    /// Every feature must be present as a top-level key holding a JSON number.
    /// All offending fields are reported together.
    pub fn from_json(body: &Value) -> Result<Self> {
        let object = body.as_object().ok_or_else(|| {
            AppError::ValidationError("Request body must be a JSON object".to_string())
        })?;

        let mut values = [0.0; FEATURE_COUNT];
        let mut missing = Vec::new();
        let mut non_numeric = Vec::new();

        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            match object.get(name) {
                None | Some(Value::Null) => missing.push(name),
                Some(value) => match value.as_f64() {
                    Some(number) => *slot = number,
                    None => non_numeric.push(name),
                },
            }
        }

        if missing.is_empty() && non_numeric.is_empty() {
            return Ok(Self(values));
        }

        let mut problems = Vec::new();
        if !missing.is_empty() {
            problems.push(format!("missing fields: {}", missing.join(", ")));
        }
        if !non_numeric.is_empty() {
            problems.push(format!("non-numeric fields: {}", non_numeric.join(", ")));
        }
        Err(AppError::ValidationError(problems.join("; ")))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Look up a feature by column name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| self.0[idx])
    }

    pub fn glucose(&self) -> f64 {
        self.0[1]
    }

    pub fn blood_pressure(&self) -> f64 {
        self.0[2]
    }

    pub fn bmi(&self) -> f64 {
        self.0[5]
    }

    pub fn age(&self) -> f64 {
        self.0[7]
    }
}

/// Label produced by the classifier for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: i32,
}

impl Prediction {
    pub fn new(label: i32) -> Self {
        Self { prediction: label }
    }

    pub fn label(&self) -> i32 {
        self.prediction
    }

    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }
}
