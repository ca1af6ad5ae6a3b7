//! Error types for the eh-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and the GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Results error: {0}")]
    Results(String),

    #[error("Engine not found: {0}")]
    EngineNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for eh-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<eh_results::ResultsError> for AppError {
    fn from(err: eh_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<eh_core::CoreError> for AppError {
    fn from(err: eh_core::CoreError) -> Self {
        AppError::Config(err.to_string())
    }
}
