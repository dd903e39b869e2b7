use std::sync::Arc;

use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::bootstrap::build_predict_use_case;
use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load config and model, then serve until the server shuts down.
pub fn run() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    let predict_use_case = Arc::new(build_predict_use_case(&config)?);

    info!(
        host = %config.server.host,
        port = config.server.port,
        model = %config.model.artifact_path.display(),
        "Starting diabetes model server"
    );

    actix_web::rt::System::new().block_on(async move {
        let server = start_server(predict_use_case, &config.server).map_err(|e| {
            AppError::IoError(format!(
                "Failed to bind {}:{}: {}",
                config.server.host, config.server.port, e
            ))
        })?;
        server.await?;
        Ok::<(), AppError>(())
    })
}
