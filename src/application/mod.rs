pub mod use_cases;

pub use use_cases::dataset_merge::DatasetMergeUseCase;
pub use use_cases::predict::PredictUseCase;
pub use use_cases::train_model::{TrainModelUseCase, TrainingReport};
