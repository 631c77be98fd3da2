use std::path::PathBuf;

use thiserror::Error;

use crate::models::City;

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data file for {city} at {}", .path.display())]
    ResourceNotFound { city: City, path: PathBuf },

    #[error("Malformed data in {}: {message}", .path.display())]
    ResourceMalformed { path: PathBuf, message: String },

    #[error("Cannot compute {0} over an empty trip table")]
    EmptyFilterResult(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl BikeshareError {
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BikeshareError::ResourceMalformed {
            path: path.into(),
            message: message.into(),
        }
    }
}
