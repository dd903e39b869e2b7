// ============================================================
// DATASET DOMAIN LAYER
// ============================================================
// Training records, schema alignment and splitting
// No I/O

mod column_mapping;
mod labeled_dataset;
mod missing_values;

pub use column_mapping::{common_columns, ColumnMapping};
pub use labeled_dataset::{LabeledDataset, TrainingRecord};
pub use missing_values::is_missing;
