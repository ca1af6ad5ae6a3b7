//! Series extraction and CSV export for a single engine.

use eh_core::{Cycle, EngineId, Real};
use eh_results::FleetData;
use std::io::Write;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::query::{anomaly_slice, prediction_slice};
use crate::selection::engine_ids;

/// A plottable per-cycle column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    AnomalyScore,
    PredictedRul,
    TrueRul,
    FailProbability,
}

impl Variable {
    pub fn column(self) -> &'static str {
        match self {
            Variable::AnomalyScore => "anomaly_score",
            Variable::PredictedRul => "predicted_RUL",
            Variable::TrueRul => "true_RUL",
            Variable::FailProbability => "fail_probability",
        }
    }

    /// `(cycle, value)` pairs of one engine in cycle order.
    pub fn series(self, fleet: &FleetData, engine: &EngineId) -> Vec<(Cycle, Real)> {
        match self {
            Variable::AnomalyScore => anomaly_slice(fleet, engine)
                .into_iter()
                .map(|r| (r.cycle, r.anomaly_score))
                .collect(),
            Variable::PredictedRul => prediction_slice(fleet, engine)
                .into_iter()
                .map(|r| (r.cycle, r.predicted_rul))
                .collect(),
            Variable::TrueRul => prediction_slice(fleet, engine)
                .into_iter()
                .map(|r| (r.cycle, r.true_rul))
                .collect(),
            Variable::FailProbability => prediction_slice(fleet, engine)
                .into_iter()
                .map(|r| (r.cycle, r.fail_probability))
                .collect(),
        }
    }
}

impl FromStr for Variable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anomaly_score" | "anomaly" => Ok(Variable::AnomalyScore),
            "predicted_rul" | "rul" => Ok(Variable::PredictedRul),
            "true_rul" => Ok(Variable::TrueRul),
            "fail_probability" | "probability" => Ok(Variable::FailProbability),
            _ => Err(AppError::InvalidInput(format!("Unknown variable: {}", s))),
        }
    }
}

/// Write `cycle,<column>` rows for one engine and return the row count.
pub fn export_series<W: Write>(
    fleet: &FleetData,
    engine: &EngineId,
    variable: Variable,
    writer: W,
) -> AppResult<usize> {
    if !engine_ids(fleet).contains(engine) {
        return Err(AppError::EngineNotFound(engine.to_string()));
    }

    let series = variable.series(fleet, engine);
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["cycle", variable.column()])?;
    for (cycle, value) in &series {
        csv.write_record([cycle.to_string(), value.to_string()])?;
    }
    csv.flush()?;

    Ok(series.len())
}
