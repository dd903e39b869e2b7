use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Optional config file read from the working directory
pub const CONFIG_FILE: &str = "diabetes-risk.toml";

/// Prefix for environment overrides, e.g. `DIABETES_RISK_SERVER__PORT`
pub const ENV_PREFIX: &str = "DIABETES_RISK_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` allows any origin
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            cors_origin: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub artifact_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("model/diabetes_model.bin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub primary_dataset: PathBuf,
    pub secondary_dataset: PathBuf,
    /// Fraction of merged rows held out for scoring
    pub test_size: f64,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            primary_dataset: PathBuf::from("datasets/pima_indians.csv"),
            secondary_dataset: PathBuf::from("datasets/african_health.csv"),
            test_size: 0.2,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

impl AppConfig {
    /// Layered sources: defaults, then the TOML file, then the environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load `.env`, extract and validate the configuration
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config: AppConfig = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::ConfigError("server.port must be > 0".to_string()));
        }
        if !(self.training.test_size > 0.0 && self.training.test_size < 1.0) {
            return Err(AppError::ConfigError(
                "training.test_size must be between 0.0 and 1.0 (exclusive)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5001);
        assert_eq!(
            config.model.artifact_path,
            PathBuf::from("model/diabetes_model.bin")
        );
        assert_eq!(config.training.test_size, 0.2);
        assert_eq!(config.training.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [server]
                port = 9000
                cors_origin = "http://localhost:3000"

                [training]
                seed = 7
                "#,
            )?;
            jail.set_env("DIABETES_RISK_SERVER__PORT", "8080");

            let config: AppConfig = AppConfig::figment().extract()?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.server.cors_origin, "http://localhost:3000");
            assert_eq!(config.training.seed, 7);
            assert_eq!(config.training.test_size, 0.2);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_test_size() {
        Jail::expect_with(|jail| {
            jail.set_env("DIABETES_RISK_TRAINING__TEST_SIZE", "1.5");

            let err = AppConfig::load().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            Ok(())
        });
    }
}
