use crate::domain::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

fn io_err(msg: impl Into<String>) -> AppError {
    AppError::IoError(msg.into())
}

/// Single-file store for the trained model artifact.
///
/// The artifact is an opaque bincode blob with no version header. Saving
/// always replaces whatever is at `path`.
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and atomically write the model; returns the SHA-256 hex
    /// digest of the written bytes.
    pub fn save<M: Serialize>(&self, model: &M) -> Result<String> {
        let bytes = bincode::serialize(model)
            .map_err(|e| AppError::ModelError(format!("Failed to serialize model: {e}")))?;
        atomic_write_bytes(&self.path, &bytes)?;
        Ok(sha256_hex(&bytes))
    }

    pub fn load<M: DeserializeOwned>(&self) -> Result<M> {
        if !self.path.exists() {
            return Err(AppError::NotFound(format!(
                "model artifact {}",
                self.path.display()
            )));
        }

        let bytes = fs::read(&self.path)
            .map_err(|e| io_err(format!("Failed to read {}: {e}", self.path.display())))?;

        bincode::deserialize(&bytes).map_err(|e| {
            AppError::ModelError(format!(
                "Failed to deserialize model {}: {e}",
                self.path.display()
            ))
        })
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| io_err(format!("Failed to create dir {}: {e}", path.display())))?;
    Ok(())
}

pub fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let tmp_path = path.with_extension(format!("tmp-{}", Uuid::new_v4()));
    {
        let mut file = fs::File::create(&tmp_path).map_err(|e| {
            io_err(format!(
                "Failed to create temp file {}: {e}",
                tmp_path.display()
            ))
        })?;
        file.write_all(bytes).map_err(|e| {
            io_err(format!(
                "Failed to write temp file {}: {e}",
                tmp_path.display()
            ))
        })?;
        file.sync_all().ok();
    }

    // On Windows, rename cannot replace; move the old file away first.
    if path.exists() {
        let backup = path.with_extension(format!("bak-{}", Uuid::new_v4()));
        fs::rename(path, &backup).map_err(|e| {
            io_err(format!(
                "Failed to move existing file {} to {}: {e}",
                path.display(),
                backup.display()
            ))
        })?;

        fs::rename(&tmp_path, path).map_err(|e| {
            io_err(format!(
                "Failed to rename temp file {} to {}: {e}",
                tmp_path.display(),
                path.display()
            ))
        })?;

        let _ = fs::remove_file(&backup);
    } else {
        fs::rename(&tmp_path, path).map_err(|e| {
            io_err(format!(
                "Failed to rename temp file {} to {}: {e}",
                tmp_path.display(),
                path.display()
            ))
        })?;
    }

    Ok(())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
