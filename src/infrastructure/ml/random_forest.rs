use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::domain::classifier::Classifier;
use crate::domain::dataset::LabeledDataset;
use crate::domain::error::{AppError, Result};
use crate::domain::features::{FeatureVector, Prediction};

type Forest = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Random forest over the eight diabetes features.
///
/// Serialized as-is into the model artifact.
#[derive(Serialize, Deserialize)]
pub struct RandomForestModel {
    forest: Forest,
}

impl RandomForestModel {
    /// Fit with library-default hyperparameters; `seed` drives bootstrap
    /// sampling and feature selection so fits are reproducible.
    pub fn fit(dataset: &LabeledDataset, seed: u64) -> Result<Self> {
        if dataset.is_empty() {
            return Err(AppError::ValidationError(
                "Cannot fit a model on an empty dataset".to_string(),
            ));
        }

        let x = DenseMatrix::from_2d_vec(&dataset.features());
        let y = dataset.labels();
        let parameters = RandomForestClassifierParameters::default().with_seed(seed);

        let forest = RandomForestClassifier::fit(&x, &y, parameters)
            .map_err(|e| AppError::ModelError(format!("Failed to fit random forest: {}", e)))?;

        Ok(Self { forest })
    }

    /// Predict labels for every row of `dataset`, in row order
    pub fn predict_batch(&self, dataset: &LabeledDataset) -> Result<Vec<i32>> {
        if dataset.is_empty() {
            return Ok(Vec::new());
        }

        let x = DenseMatrix::from_2d_vec(&dataset.features());
        self.forest
            .predict(&x)
            .map_err(|e| AppError::ModelError(format!("Prediction failed: {}", e)))
    }

    /// Fraction of rows whose predicted label equals the recorded outcome
    pub fn accuracy(&self, dataset: &LabeledDataset) -> Result<f64> {
        if dataset.is_empty() {
            return Ok(0.0);
        }

        let predicted = self.predict_batch(dataset)?;
        let correct = predicted
            .iter()
            .zip(dataset.labels())
            .filter(|(pred, target)| **pred == *target)
            .count();

        Ok(correct as f64 / dataset.len() as f64)
    }
}

impl Classifier for RandomForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);
        let labels = self
            .forest
            .predict(&x)
            .map_err(|e| AppError::ModelError(format!("Prediction failed: {}", e)))?;

        labels
            .first()
            .copied()
            .map(Prediction::new)
            .ok_or_else(|| AppError::ModelError("Model returned no prediction".to_string()))
    }
}
