//! Engine and view selection.

use eh_core::EngineId;
use eh_results::FleetData;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The three fixed dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ViewMode {
    #[default]
    AnomalyDetection,
    FailurePrediction,
    CombinedHealth,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::AnomalyDetection,
        ViewMode::FailurePrediction,
        ViewMode::CombinedHealth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::AnomalyDetection => "Anomaly Detection",
            ViewMode::FailurePrediction => "Failure Prediction & RUL",
            ViewMode::CombinedHealth => "Combined Health View",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anomaly" | "anomaly-detection" => Ok(ViewMode::AnomalyDetection),
            "prediction" | "failure" | "rul" | "failure-prediction" => {
                Ok(ViewMode::FailurePrediction)
            }
            "combined" | "health" | "combined-health" => Ok(ViewMode::CombinedHealth),
            other => Err(AppError::InvalidInput(format!(
                "Unknown view mode: {} (expected anomaly, prediction or combined)",
                other
            ))),
        }
    }
}

/// Sorted union of the engine ids present in either table, without duplicates.
pub fn engine_ids(fleet: &FleetData) -> Vec<EngineId> {
    let ids: BTreeSet<&EngineId> = fleet
        .anomalies()
        .iter()
        .map(|r| &r.engine_id)
        .chain(fleet.predictions().iter().map(|r| &r.engine_id))
        .collect();
    ids.into_iter().cloned().collect()
}

/// Current UI inputs. Re-read on every interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub engine: EngineId,
    pub mode: ViewMode,
}

impl Selection {
    pub fn new(engine: impl Into<EngineId>, mode: ViewMode) -> Self {
        Self {
            engine: engine.into(),
            mode,
        }
    }

    /// First engine in sorted order with the first view, or `None` for an empty fleet.
    pub fn initial(fleet: &FleetData) -> Option<Self> {
        engine_ids(fleet)
            .into_iter()
            .next()
            .map(|engine| Self::new(engine, ViewMode::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eh_results::{AnomalyRecord, PredictionRecord};
    use proptest::prelude::*;

    fn anomaly(engine: &str, cycle: i64) -> AnomalyRecord {
        AnomalyRecord {
            engine_id: engine.into(),
            cycle,
            anomaly_score: 0.5,
        }
    }

    fn prediction(engine: &str, cycle: i64) -> PredictionRecord {
        PredictionRecord {
            engine_id: engine.into(),
            cycle,
            predicted_rul: 50.0,
            true_rul: 50.0,
            fail_probability: 0.1,
        }
    }

    #[test]
    fn engine_ids_are_sorted_union() {
        let fleet = FleetData::from_records(
            vec![anomaly("10", 1), anomaly("2", 1), anomaly("2", 2)],
            vec![prediction("2", 1), prediction("1", 1)],
        );
        let ids: Vec<String> = engine_ids(&fleet).iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "10"]);
    }

    #[test]
    fn initial_selection_uses_first_engine() {
        let fleet = FleetData::from_records(vec![anomaly("7", 1)], vec![prediction("3", 1)]);
        let selection = Selection::initial(&fleet).unwrap();
        assert_eq!(selection.engine, EngineId::from("3"));
        assert_eq!(selection.mode, ViewMode::AnomalyDetection);

        assert!(Selection::initial(&FleetData::default()).is_none());
    }

    #[test]
    fn view_mode_parses_cli_names() {
        assert_eq!("anomaly".parse::<ViewMode>().unwrap(), ViewMode::AnomalyDetection);
        assert_eq!("Prediction".parse::<ViewMode>().unwrap(), ViewMode::FailurePrediction);
        assert_eq!("combined".parse::<ViewMode>().unwrap(), ViewMode::CombinedHealth);
        assert!("heatmap".parse::<ViewMode>().is_err());
    }

    #[test]
    fn view_mode_labels() {
        let labels: Vec<&str> = ViewMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            [
                "Anomaly Detection",
                "Failure Prediction & RUL",
                "Combined Health View"
            ]
        );
    }

    fn arb_ids() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![(0u32..40).prop_map(|n| n.to_string()), "[A-E][0-9]"],
            0..24,
        )
    }

    proptest! {
        #[test]
        fn engine_union_is_sorted_and_covers_both_tables(
            anomaly_ids in arb_ids(),
            prediction_ids in arb_ids(),
        ) {
            let fleet = FleetData::from_records(
                anomaly_ids.iter().map(|id| anomaly(id, 1)).collect(),
                prediction_ids.iter().map(|id| prediction(id, 1)).collect(),
            );
            let ids = engine_ids(&fleet);

            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));

            let expected: BTreeSet<EngineId> = anomaly_ids
                .iter()
                .chain(prediction_ids.iter())
                .map(|id| EngineId::from(id.as_str()))
                .collect();
            prop_assert_eq!(ids, expected.into_iter().collect::<Vec<_>>());
        }
    }
}
