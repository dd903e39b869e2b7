use std::sync::Arc;

use tracing::info;

use crate::application::PredictUseCase;
use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ml::RandomForestModel;
use crate::infrastructure::model_store::ModelStore;

/// Load the model artifact once and wrap it for the request handlers.
///
/// Load failures are returned unlogged; the caller reports them.
pub fn build_predict_use_case(config: &AppConfig) -> Result<PredictUseCase> {
    let store = ModelStore::new(&config.model.artifact_path);
    let model: RandomForestModel = store.load()?;

    info!(artifact = %store.path().display(), "Loaded model artifact");
    Ok(PredictUseCase::new(Arc::new(model)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    #[test]
    fn test_missing_artifact_is_returned_to_caller() {
        let mut config = AppConfig::default();
        config.model.artifact_path = std::env::temp_dir()
            .join(uuid::Uuid::new_v4().to_string())
            .join("diabetes_model.bin");

        let err = build_predict_use_case(&config).err().unwrap();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
