use super::error::Result;
use super::features::{FeatureVector, Prediction};

/// A trained model that maps one feature vector to a label.
///
/// Implementations are loaded once and shared read-only across workers.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;
}
