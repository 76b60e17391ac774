use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read coverage report {}: {source}", .path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write coverage data to {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No element matching `{selector}` found in coverage report")]
    MissingElement { selector: String },

    #[error("Element matching `{selector}` has no text")]
    EmptyPercentage { selector: String },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}
