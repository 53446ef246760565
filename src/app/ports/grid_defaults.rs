use std::path::PathBuf;

use colfit_domain::{GridDefaults, InvalidRange};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridDefaultsError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid grid defaults: {0}")]
    InvalidRange(#[from] InvalidRange),
    #[error("IO error: {0}")]
    IoError(String),
}

pub trait GridDefaultsSource: Send + Sync {
    /// Returns `GridDefaults::default()` when nothing has been stored yet.
    fn load(&self) -> Result<GridDefaults, GridDefaultsError>;

    fn save(&self, defaults: &GridDefaults) -> Result<(), GridDefaultsError>;

    fn storage_path(&self) -> PathBuf;
}
