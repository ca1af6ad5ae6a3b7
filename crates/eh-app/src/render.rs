//! Pure render function: (tables, selection) -> view description.
//!
//! Frontends call [`render`] on every interaction and draw whatever it
//! returns; nothing here depends on a widget toolkit.

use eh_core::{EngineId, Real};
use eh_results::{AnomalyRecord, FleetData, PredictionRecord};
use serde::Serialize;

use crate::config::RenderSettings;
use crate::query::{anomaly_slice, anomaly_threshold, prediction_slice};
use crate::selection::{Selection, ViewMode};
use crate::status::{Status, StatusLevel, derive_status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesColor {
    /// Left to the frontend's palette.
    Auto,
    Blue,
    Green,
    Red,
}

/// Y axis a series is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// `[cycle, value]` pairs in cycle order.
    pub points: Vec<[Real; 2]>,
    pub color: SeriesColor,
    pub opacity: f32,
    pub axis: Axis,
}

/// Horizontal line across the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub name: String,
    pub y: Real,
    pub color: SeriesColor,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: String,
    pub x_label: String,
    pub y_label: Option<String>,
    /// Label of the right axis; `None` for single-axis charts.
    pub secondary_y_label: Option<String>,
    pub legend: bool,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Chart {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            x_label: "Cycle".to_string(),
            y_label: None,
            secondary_y_label: None,
            legend: true,
            series: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    pub fn series_on(&self, axis: Axis) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.axis == axis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// Inline message shown instead of a chart, e.g. when a slice is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: StatusLevel,
    pub message: String,
}

/// Everything a frontend needs to draw one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub engine: EngineId,
    pub mode: ViewMode,
    pub header: String,
    pub notices: Vec<Notice>,
    pub chart: Option<Chart>,
    pub subheader: Option<String>,
    pub metrics: Vec<Metric>,
    pub status: Option<Status>,
}

impl ViewModel {
    fn new(selection: &Selection, header: &str) -> Self {
        Self {
            engine: selection.engine.clone(),
            mode: selection.mode,
            header: header.to_string(),
            notices: Vec::new(),
            chart: None,
            subheader: None,
            metrics: Vec::new(),
            status: None,
        }
    }

    fn no_data(&mut self, message: &str) {
        self.notices.push(Notice {
            level: StatusLevel::Warning,
            message: message.to_string(),
        });
    }

    pub fn has_content(&self) -> bool {
        self.chart.is_some() || !self.notices.is_empty()
    }
}

pub const ANOMALY_THRESHOLD_LABEL: &str = "Anomaly Threshold";

/// Describe the view for `selection`. Recomputed from scratch on every call.
pub fn render(fleet: &FleetData, selection: &Selection, settings: &RenderSettings) -> ViewModel {
    tracing::debug!(engine = %selection.engine, mode = ?selection.mode, "rendering view");

    match selection.mode {
        ViewMode::AnomalyDetection => render_anomaly(fleet, selection, settings),
        ViewMode::FailurePrediction => render_prediction(fleet, selection),
        ViewMode::CombinedHealth => render_combined(fleet, selection, settings),
    }
}

fn render_anomaly(fleet: &FleetData, selection: &Selection, settings: &RenderSettings) -> ViewModel {
    let mut view = ViewModel::new(selection, "Anomaly Detection");
    let slice = anomaly_slice(fleet, &selection.engine);

    if slice.is_empty() {
        view.no_data("No anomaly data available for this engine.");
        return view;
    }

    let mut chart = Chart::new("anomaly_chart");
    chart.y_label = Some("Anomaly Score".to_string());
    chart.series.push(anomaly_series(&slice, SeriesColor::Auto, 1.0, Axis::Left));

    if let Some(threshold) = anomaly_threshold(&slice, settings.threshold) {
        chart.reference_lines.push(ReferenceLine {
            name: ANOMALY_THRESHOLD_LABEL.to_string(),
            y: threshold,
            color: SeriesColor::Red,
            dashed: true,
        });
    }

    view.chart = Some(chart);
    view
}

fn render_prediction(fleet: &FleetData, selection: &Selection) -> ViewModel {
    let mut view = ViewModel::new(selection, "Failure Prediction & RUL");
    let slice = prediction_slice(fleet, &selection.engine);

    let Some(latest) = slice.last() else {
        view.no_data("No prediction data available for this engine.");
        return view;
    };

    let mut chart = Chart::new("prediction_chart");
    chart.y_label = Some("RUL".to_string());
    chart.series.push(predicted_rul_series(&slice, Axis::Left));
    chart.series.push(Series {
        name: "True RUL".to_string(),
        points: slice
            .iter()
            .map(|r| [r.cycle as Real, r.true_rul])
            .collect(),
        color: SeriesColor::Green,
        opacity: 0.6,
        axis: Axis::Left,
    });
    view.chart = Some(chart);

    view.subheader = Some("Current Status".to_string());
    view.metrics = vec![
        Metric {
            label: "Predicted RUL".to_string(),
            value: format_rul(latest.predicted_rul),
        },
        Metric {
            label: "Failure Probability".to_string(),
            value: format_probability(latest.fail_probability),
        },
    ];
    view
}

fn render_combined(fleet: &FleetData, selection: &Selection, settings: &RenderSettings) -> ViewModel {
    let mut view = ViewModel::new(selection, "Combined Engine Health View");
    let anomalies = anomaly_slice(fleet, &selection.engine);
    let predictions = prediction_slice(fleet, &selection.engine);

    if anomalies.is_empty() && predictions.is_empty() {
        view.no_data("No data available for this engine.");
        return view;
    }

    let mut chart = Chart::new("combined_chart");
    chart.legend = false;
    if !predictions.is_empty() {
        chart.y_label = Some("RUL".to_string());
        chart.series.push(predicted_rul_series(&predictions, Axis::Left));
    }
    if !anomalies.is_empty() {
        chart.secondary_y_label = Some("Anomaly Score".to_string());
        chart.series.push(anomaly_series(&anomalies, SeriesColor::Red, 0.6, Axis::Right));
    }
    view.chart = Some(chart);

    if let Some(status) = derive_status(&predictions, &anomalies, settings) {
        view.subheader = Some("Overall Status".to_string());
        view.status = Some(status);
    }
    view
}

fn anomaly_series(slice: &[&AnomalyRecord], color: SeriesColor, opacity: f32, axis: Axis) -> Series {
    Series {
        name: "Anomaly Score".to_string(),
        points: slice
            .iter()
            .map(|r| [r.cycle as Real, r.anomaly_score])
            .collect(),
        color,
        opacity,
        axis,
    }
}

fn predicted_rul_series(slice: &[&PredictionRecord], axis: Axis) -> Series {
    Series {
        name: "Predicted RUL".to_string(),
        points: slice
            .iter()
            .map(|r| [r.cycle as Real, r.predicted_rul])
            .collect(),
        color: SeriesColor::Blue,
        opacity: 1.0,
        axis,
    }
}

/// Whole remaining cycles, truncated toward zero.
pub fn format_rul(predicted_rul: Real) -> String {
    if !predicted_rul.is_finite() {
        return format!("{} cycles", predicted_rul);
    }
    format!("{} cycles", predicted_rul.trunc() as i64)
}

pub fn format_probability(p: Real) -> String {
    format!("{:.2}", p)
}
