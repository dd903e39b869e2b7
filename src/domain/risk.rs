// ============================================================
// RISK ASSESSMENT
// ============================================================
// Explanatory factors derived from the submitted measurements

use serde::{Deserialize, Serialize};

use super::features::{FeatureVector, Prediction};

const GLUCOSE_THRESHOLD: f64 = 140.0;
const BLOOD_PRESSURE_THRESHOLD: f64 = 130.0;
const OBESITY_BMI: f64 = 30.0;
const AGE_THRESHOLD: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Higher,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(text: &str, priority: Priority) -> Self {
        Self {
            text: text.to_string(),
            priority,
        }
    }
}

/// Prediction enriched with the measurements that drove concern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub prediction: i32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl RiskAssessment {
    pub fn evaluate(features: &FeatureVector, prediction: Prediction) -> Self {
        let mut risk_factors = Vec::new();
        let mut recommendations = Vec::new();

        let glucose = features.glucose();
        if glucose > GLUCOSE_THRESHOLD {
            risk_factors.push(format!("Elevated glucose level ({} mg/dL)", glucose));
            recommendations.push(Recommendation::new(
                "Your glucose levels are elevated. Consider consulting a doctor for an HbA1c test.",
                Priority::High,
            ));
        }

        let blood_pressure = features.blood_pressure();
        if blood_pressure > BLOOD_PRESSURE_THRESHOLD {
            risk_factors.push(format!("Elevated blood pressure ({} mmHg)", blood_pressure));
            recommendations.push(Recommendation::new(
                "Your blood pressure is above normal. Regular monitoring is recommended.",
                Priority::High,
            ));
        }

        let bmi = features.bmi();
        if bmi >= OBESITY_BMI {
            risk_factors.push(format!("High BMI ({}) indicating obesity", bmi));
            recommendations.push(Recommendation::new(
                "Weight loss of 5-10% can significantly reduce your diabetes risk.",
                Priority::Medium,
            ));
        }

        let age = features.age();
        if age > AGE_THRESHOLD {
            risk_factors.push(format!("Age ({}) increases diabetes risk", age));
        }

        let risk_level = if prediction.is_positive() {
            RiskLevel::Higher
        } else {
            RiskLevel::Lower
        };

        Self {
            prediction: prediction.label(),
            risk_level,
            risk_factors,
            recommendations,
        }
    }
}
