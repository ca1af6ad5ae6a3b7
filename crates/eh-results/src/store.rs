//! Loaded result tables.

use crate::types::{AnomalyRecord, PredictionRecord};
use crate::{ResultsError, ResultsResult};
use eh_core::{Cycle, EngineId};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The two result tables, read once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct FleetData {
    anomalies: Vec<AnomalyRecord>,
    predictions: Vec<PredictionRecord>,
}

/// Row and engine counts of a loaded fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSummary {
    pub anomaly_rows: usize,
    pub prediction_rows: usize,
    pub anomaly_engines: usize,
    pub prediction_engines: usize,
    pub cycle_range: Option<(Cycle, Cycle)>,
}

impl FleetData {
    pub fn from_records(anomalies: Vec<AnomalyRecord>, predictions: Vec<PredictionRecord>) -> Self {
        Self {
            anomalies,
            predictions,
        }
    }

    /// Read both tables. Any failure aborts the whole load.
    pub fn load(anomaly_path: &Path, prediction_path: &Path) -> ResultsResult<Self> {
        let anomalies = read_table::<AnomalyRecord>(anomaly_path)?;
        tracing::info!(
            path = %anomaly_path.display(),
            rows = anomalies.len(),
            "loaded anomaly scores"
        );

        let predictions = read_table::<PredictionRecord>(prediction_path)?;
        tracing::info!(
            path = %prediction_path.display(),
            rows = predictions.len(),
            "loaded predictions"
        );

        Ok(Self {
            anomalies,
            predictions,
        })
    }

    pub fn anomalies(&self) -> &[AnomalyRecord] {
        &self.anomalies
    }

    pub fn predictions(&self) -> &[PredictionRecord] {
        &self.predictions
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty() && self.predictions.is_empty()
    }

    pub fn summary(&self) -> FleetSummary {
        let anomaly_engines: BTreeSet<&EngineId> =
            self.anomalies.iter().map(|r| &r.engine_id).collect();
        let prediction_engines: BTreeSet<&EngineId> =
            self.predictions.iter().map(|r| &r.engine_id).collect();

        let cycles = self
            .anomalies
            .iter()
            .map(|r| r.cycle)
            .chain(self.predictions.iter().map(|r| r.cycle));
        let cycle_range = cycles.fold(None, |range: Option<(Cycle, Cycle)>, c| match range {
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
            None => Some((c, c)),
        });

        FleetSummary {
            anomaly_rows: self.anomalies.len(),
            prediction_rows: self.predictions.len(),
            anomaly_engines: anomaly_engines.len(),
            prediction_engines: prediction_engines.len(),
            cycle_range,
        }
    }
}

/// Decode anomaly rows from CSV with a header row. Extra columns are ignored.
pub fn read_anomaly_csv<R: Read>(reader: R) -> Result<Vec<AnomalyRecord>, csv::Error> {
    decode(reader)
}

/// Decode prediction rows from CSV with a header row. Extra columns are ignored.
pub fn read_prediction_csv<R: Read>(reader: R) -> Result<Vec<PredictionRecord>, csv::Error> {
    decode(reader)
}

fn decode<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader.deserialize().collect()
}

fn read_table<T: DeserializeOwned>(path: &Path) -> ResultsResult<Vec<T>> {
    let file = File::open(path).map_err(|source| ResultsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    decode(BufReader::new(file)).map_err(|source| ResultsError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
