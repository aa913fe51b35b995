use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading descriptors or writing generated units
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("Cannot derive a unit name from {0:?}")]
    InvalidUnitName(PathBuf),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
