pub mod dataset_merge;
pub mod predict;
pub mod train_model;
