//! Overall engine status shown under the combined view.

use eh_results::{AnomalyRecord, PredictionRecord};
use serde::Serialize;

use crate::config::RenderSettings;
use crate::query::anomaly_threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLevel {
    Ok,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    fn new(level: StatusLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
        }
    }
}

pub const CRITICAL_MESSAGE: &str = "CRITICAL: High failure risk detected";
pub const ABNORMAL_MESSAGE: &str = "Abnormal behavior detected";
pub const NORMAL_MESSAGE: &str = "Engine operating normally";

/// Status from the latest rows of both cycle-sorted slices.
///
/// Without predictions there is no status, whatever the anomaly data says.
/// A critical failure probability takes precedence over an abnormal anomaly
/// score.
pub fn derive_status(
    predictions: &[&PredictionRecord],
    anomalies: &[&AnomalyRecord],
    settings: &RenderSettings,
) -> Option<Status> {
    let latest_prediction = predictions.last()?;

    if latest_prediction.fail_probability > settings.critical_fail_probability {
        return Some(Status::new(StatusLevel::Critical, CRITICAL_MESSAGE));
    }

    if let Some(latest_anomaly) = anomalies.last()
        && let Some(threshold) = anomaly_threshold(anomalies, settings.threshold)
        && latest_anomaly.anomaly_score < threshold
    {
        return Some(Status::new(StatusLevel::Warning, ABNORMAL_MESSAGE));
    }

    Some(Status::new(StatusLevel::Ok, NORMAL_MESSAGE))
}
