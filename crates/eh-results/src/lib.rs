//! eh-results: loading of the precomputed anomaly and prediction tables.

pub mod store;
pub mod types;

pub use store::{FleetData, FleetSummary, read_anomaly_csv, read_prediction_csv};
pub use types::*;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("Failed to read results file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed results file {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}
