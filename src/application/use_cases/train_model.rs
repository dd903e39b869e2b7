use std::path::PathBuf;

use serde::Serialize;

use crate::application::use_cases::dataset_merge::DatasetMergeUseCase;
use crate::domain::dataset::LabeledDataset;
use crate::domain::error::Result;
use crate::infrastructure::config::TrainingConfig;
use crate::infrastructure::ml::RandomForestModel;
use crate::infrastructure::model_store::ModelStore;

/// Outcome of one training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub merged_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub accuracy: f64,
    pub artifact_path: PathBuf,
    pub artifact_sha256: String,
}

pub struct TrainModelUseCase {
    config: TrainingConfig,
    merge: DatasetMergeUseCase,
    store: ModelStore,
}

impl TrainModelUseCase {
    pub fn new(config: TrainingConfig, merge: DatasetMergeUseCase, store: ModelStore) -> Self {
        Self {
            config,
            merge,
            store,
        }
    }

    /// Merge, split, fit, score and persist
    pub fn execute(&self) -> Result<TrainingReport> {
        let dataset = self
            .merge
            .execute(&self.config.primary_dataset, &self.config.secondary_dataset)?;

        let (model, split) = fit_and_score(&dataset, self.config.test_size, self.config.seed)?;

        let artifact_sha256 = self.store.save(&model)?;
        tracing::info!(
            artifact = %self.store.path().display(),
            sha256 = %artifact_sha256,
            "Saved model artifact"
        );

        Ok(TrainingReport {
            merged_rows: dataset.len(),
            train_rows: split.train_rows,
            test_rows: split.test_rows,
            accuracy: split.accuracy,
            artifact_path: self.store.path().to_path_buf(),
            artifact_sha256,
        })
    }
}

/// Row counts and held-out accuracy of one fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitScore {
    pub train_rows: usize,
    pub test_rows: usize,
    pub accuracy: f64,
}

/// Split `dataset`, fit a forest on the training part and score it on the
/// held-out part. Deterministic for a given `seed`.
pub fn fit_and_score(
    dataset: &LabeledDataset,
    test_size: f64,
    seed: u64,
) -> Result<(RandomForestModel, SplitScore)> {
    let (train, test) = dataset.train_test_split(test_size, seed)?;
    tracing::info!(
        train_rows = train.len(),
        test_rows = test.len(),
        seed,
        "Fitting random forest"
    );

    let model = RandomForestModel::fit(&train, seed)?;
    let accuracy = model.accuracy(&test)?;
    tracing::info!(accuracy, "Scored held-out split");

    Ok((
        model,
        SplitScore {
            train_rows: train.len(),
            test_rows: test.len(),
            accuracy,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::Classifier;
    use crate::domain::dataset::TrainingRecord;
    use crate::domain::features::FeatureVector;
    use std::fs;
    use uuid::Uuid;

    fn noisy_dataset(rows: usize) -> LabeledDataset {
        LabeledDataset::new(
            (0..rows)
                .map(|i| {
                    let glucose = 80.0 + ((i * 37) % 120) as f64;
                    let bmi = 20.0 + ((i * 13) % 25) as f64;
                    let outcome = (glucose + bmi * 2.0 > 180.0) as i32;
                    let outcome = if i % 9 == 0 { 1 - outcome } else { outcome };
                    TrainingRecord::new(
                        FeatureVector::new([
                            (i % 6) as f64,
                            glucose,
                            60.0 + (i % 20) as f64,
                            20.0,
                            (i % 50) as f64,
                            bmi,
                            0.3 + (i % 10) as f64 / 20.0,
                            21.0 + (i % 40) as f64,
                        ]),
                        outcome,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_fit_and_score_is_deterministic() {
        let data = noisy_dataset(80);
        let (_, first) = fit_and_score(&data, 0.2, 42).unwrap();
        let (_, second) = fit_and_score(&data, 0.2, 42).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.test_rows, 16);
        assert_eq!(first.train_rows, 64);
        assert!((0.0..=1.0).contains(&first.accuracy));
    }

    #[test]
    fn test_execute_writes_loadable_artifact() {
        let dir = std::env::temp_dir().join(format!("train-model-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();

        let header = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome";
        let secondary_header = "Pregnancies,GlucoseLevel,BloodPressure,SkinThickness,Insulin,BMI_Index,DiabetesPedigreeFunction,AgeYears,Outcome";
        let rows: Vec<String> = noisy_dataset(40)
            .records()
            .iter()
            .map(|record| {
                let mut cells: Vec<String> = record
                    .features
                    .as_slice()
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                cells.push(record.outcome.to_string());
                cells.join(",")
            })
            .collect();

        let primary = dir.join("pima_indians.csv");
        let secondary = dir.join("african_health.csv");
        fs::write(&primary, format!("{}\n{}\n", header, rows[..25].join("\n"))).unwrap();
        fs::write(&secondary, format!("{}\n{}\n", secondary_header, rows[25..].join("\n")))
            .unwrap();

        let config = TrainingConfig {
            primary_dataset: primary,
            secondary_dataset: secondary,
            test_size: 0.2,
            seed: 42,
        };
        let store = ModelStore::new(dir.join("model").join("diabetes_model.bin"));
        let use_case = TrainModelUseCase::new(config, DatasetMergeUseCase::default(), store.clone());

        let report = use_case.execute().unwrap();
        assert_eq!(report.merged_rows, 40);
        assert_eq!(report.test_rows, 8);
        assert_eq!(report.artifact_sha256.len(), 64);

        let model: RandomForestModel = store.load().unwrap();
        let label = model
            .predict(&FeatureVector::new([2.0, 120.0, 70.0, 20.0, 85.0, 28.5, 0.5, 33.0]))
            .unwrap()
            .label();
        assert!(label == 0 || label == 1);

        fs::remove_dir_all(&dir).ok();
    }
}
