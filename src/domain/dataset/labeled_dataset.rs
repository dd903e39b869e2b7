use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::error::{AppError, Result};
use crate::domain::features::FeatureVector;

/// One complete training row: features plus the `Outcome` label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    pub features: FeatureVector,
    pub outcome: i32,
}

impl TrainingRecord {
    pub fn new(features: FeatureVector, outcome: i32) -> Self {
        Self { features, outcome }
    }
}

/// Ordered collection of training records.
///
/// Position in `records` is the row index; it is always sequential from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledDataset {
    records: Vec<TrainingRecord>,
}

impl LabeledDataset {
    pub fn new(records: Vec<TrainingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Append another dataset's rows after this one's
    pub fn concat(mut self, other: LabeledDataset) -> Self {
        self.records.extend(other.records);
        self
    }

    /// Feature matrix, one row per record
    pub fn features(&self) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|record| record.features.to_vec())
            .collect()
    }

    pub fn labels(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.outcome).collect()
    }

    /// Shuffle with a seeded RNG and hold out `ceil(test_size * n)` rows.
    ///
    /// Returns `(train, test)`. The same seed over the same rows always yields
    /// the same partition.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(AppError::ValidationError(format!(
                "test_size must be between 0 and 1 (exclusive), got {}",
                test_size
            )));
        }

        let total = self.records.len();
        let test_count = (test_size * total as f64).ceil() as usize;
        let train_count = total.saturating_sub(test_count);
        if test_count == 0 || train_count == 0 {
            return Err(AppError::ValidationError(format!(
                "Cannot split {} rows with test_size {}: one partition would be empty",
                total, test_size
            )));
        }

        let mut indices: Vec<usize> = (0..total).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (test_indices, train_indices) = indices.split_at(test_count);
        let pick = |slice: &[usize]| -> Self {
            Self::new(slice.iter().map(|&idx| self.records[idx]).collect())
        };

        Ok((pick(train_indices), pick(test_indices)))
    }
}
