//! Record types of the two result tables.

use eh_core::{Cycle, EngineId, Real};
use serde::{Deserialize, Deserializer, Serialize};

/// One row of `anomaly_scores.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub engine_id: EngineId,
    pub cycle: Cycle,
    #[serde(deserialize_with = "blank_as_nan")]
    pub anomaly_score: Real,
}

/// One row of `results_df.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub engine_id: EngineId,
    pub cycle: Cycle,
    #[serde(rename = "predicted_RUL", deserialize_with = "blank_as_nan")]
    pub predicted_rul: Real,
    #[serde(rename = "true_RUL", deserialize_with = "blank_as_nan")]
    pub true_rul: Real,
    #[serde(deserialize_with = "blank_as_nan")]
    pub fail_probability: Real,
}

/// Empty numeric cells are missing values and decode as NaN.
fn blank_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Real, D::Error> {
    Ok(Option::<Real>::deserialize(deserializer)?.unwrap_or(Real::NAN))
}

/// Access to the key columns shared by both tables.
pub trait EngineRecord {
    fn engine_id(&self) -> &EngineId;
    fn cycle(&self) -> Cycle;
}

impl EngineRecord for AnomalyRecord {
    fn engine_id(&self) -> &EngineId {
        &self.engine_id
    }

    fn cycle(&self) -> Cycle {
        self.cycle
    }
}

impl EngineRecord for PredictionRecord {
    fn engine_id(&self) -> &EngineId {
        &self.engine_id
    }

    fn cycle(&self) -> Cycle {
        self.cycle
    }
}
