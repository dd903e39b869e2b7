pub mod classifier;
pub mod error;
pub mod features;
pub mod risk;

// Training data preprocessing
pub mod dataset;
