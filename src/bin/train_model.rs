use diabetes_risk_lib::application::{DatasetMergeUseCase, TrainModelUseCase};
use diabetes_risk_lib::infrastructure::config::AppConfig;
use diabetes_risk_lib::infrastructure::model_store::ModelStore;

fn main() {
    diabetes_risk_lib::init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let store = ModelStore::new(&config.model.artifact_path);
    let use_case = TrainModelUseCase::new(config.training, DatasetMergeUseCase::default(), store);

    match use_case.execute() {
        Ok(report) => {
            println!("Accuracy: {}", report.accuracy);
            println!("Model saved to {}", report.artifact_path.display());
        }
        Err(err) => {
            tracing::error!(error = %err, "Training failed");
            std::process::exit(1);
        }
    }
}
