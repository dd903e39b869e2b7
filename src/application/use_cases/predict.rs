use crate::domain::classifier::Classifier;
use crate::domain::error::Result;
use crate::domain::features::{FeatureVector, Prediction};
use crate::domain::risk::RiskAssessment;
use serde_json::Value;
use std::sync::Arc;

pub struct PredictUseCase {
    classifier: Arc<dyn Classifier + Send + Sync>,
}

impl PredictUseCase {
    pub fn new(classifier: Arc<dyn Classifier + Send + Sync>) -> Self {
        Self { classifier }
    }

    /// Validate the request body and classify it
    pub fn execute(&self, body: &Value) -> Result<Prediction> {
        let features = FeatureVector::from_json(body)?;
        self.classifier.predict(&features)
    }

    pub fn assess(&self, body: &Value) -> Result<RiskAssessment> {
        let features = FeatureVector::from_json(body)?;
        let prediction = self.classifier.predict(&features)?;
        Ok(RiskAssessment::evaluate(&features, prediction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClassifier {
        calls: AtomicUsize,
    }

    impl Classifier for CountingClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Prediction::new((features.glucose() > 140.0) as i32))
        }
    }

    fn body(glucose: f64) -> Value {
        json!({
            "Pregnancies": 1, "Glucose": glucose, "BloodPressure": 70,
            "SkinThickness": 20, "Insulin": 85, "BMI": 31.0,
            "DiabetesPedigreeFunction": 0.5, "Age": 33
        })
    }

    #[test]
    fn test_execute_passes_features_to_classifier() {
        let classifier = Arc::new(CountingClassifier {
            calls: AtomicUsize::new(0),
        });
        let use_case = PredictUseCase::new(classifier.clone());

        assert_eq!(use_case.execute(&body(180.0)).unwrap().label(), 1);
        assert_eq!(use_case.execute(&body(100.0)).unwrap().label(), 0);
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalid_body_never_reaches_classifier() {
        let classifier = Arc::new(CountingClassifier {
            calls: AtomicUsize::new(0),
        });
        let use_case = PredictUseCase::new(classifier.clone());

        let err = use_case.execute(&json!({ "Glucose": 120 })).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_assess_includes_prediction_and_factors() {
        let use_case = PredictUseCase::new(Arc::new(CountingClassifier {
            calls: AtomicUsize::new(0),
        }));

        let assessment = use_case.assess(&body(180.0)).unwrap();
        assert_eq!(assessment.prediction, 1);
        assert_eq!(assessment.risk_factors.len(), 2);
    }
}
