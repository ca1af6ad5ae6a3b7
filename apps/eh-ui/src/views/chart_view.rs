//! Line charts drawn with egui_plot.
//!
//! egui_plot shares one y scale between all axes, so a dual-axis chart draws
//! its right-axis series rescaled into the left-axis range and labels the
//! right axis with the inverse mapping.

use egui::Color32;
use egui_plot::{AxisHints, HLine, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints};
use eh_app::{Axis, Chart, Series, SeriesColor};

const CHART_HEIGHT: f32 = 360.0;

/// Affine map between the value ranges of the right and the left axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    left: (f64, f64),
    right: (f64, f64),
}

impl AxisMapping {
    /// `Some` only when the chart has series on both axes.
    pub fn for_chart(chart: &Chart) -> Option<Self> {
        let left = value_range(chart.series_on(Axis::Left))?;
        let right = value_range(chart.series_on(Axis::Right))?;
        Some(Self { left, right })
    }

    /// Right-axis value to plot coordinate.
    pub fn to_left(&self, value: f64) -> f64 {
        let (l0, l1) = self.left;
        let (r0, r1) = self.right;
        l0 + (value - r0) / span(r0, r1) * span(l0, l1)
    }

    /// Plot coordinate to right-axis value.
    pub fn to_right(&self, y: f64) -> f64 {
        let (l0, l1) = self.left;
        let (r0, r1) = self.right;
        r0 + (y - l0) / span(l0, l1) * span(r0, r1)
    }
}

fn span(lo: f64, hi: f64) -> f64 {
    let s = hi - lo;
    if s.abs() < f64::EPSILON { 1.0 } else { s }
}

fn value_range<'a>(series: impl Iterator<Item = &'a Series>) -> Option<(f64, f64)> {
    series
        .flat_map(|s| s.points.iter().map(|p| p[1]))
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            None => Some((v, v)),
        })
}

fn series_color(color: SeriesColor) -> Option<Color32> {
    match color {
        SeriesColor::Auto => None,
        SeriesColor::Blue => Some(Color32::from_rgb(31, 119, 180)),
        SeriesColor::Green => Some(Color32::from_rgb(44, 160, 44)),
        SeriesColor::Red => Some(Color32::from_rgb(214, 39, 40)),
    }
}

pub fn show_chart(ui: &mut egui::Ui, chart: &Chart) {
    let mapping = AxisMapping::for_chart(chart);
    let left_label = chart.y_label.clone().unwrap_or_default();
    let right_label = chart.secondary_y_label.clone().unwrap_or_default();
    let right_only = chart.series_on(Axis::Left).next().is_none() && chart.secondary_y_label.is_some();

    let y_axes = match mapping {
        Some(m) => vec![
            AxisHints::new_y().label(left_label),
            AxisHints::new_y()
                .label(right_label)
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format!("{:.2}", m.to_right(mark.value))),
        ],
        None if right_only => {
            vec![AxisHints::new_y().label(right_label).placement(HPlacement::Right)]
        }
        None => vec![AxisHints::new_y().label(left_label)],
    };

    let mut plot = Plot::new(chart.id.as_str())
        .height(CHART_HEIGHT)
        .x_axis_label(chart.x_label.clone())
        .custom_y_axes(y_axes);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let points: Vec<[f64; 2]> = match (series.axis, mapping) {
                (Axis::Right, Some(m)) => series
                    .points
                    .iter()
                    .map(|&[x, y]| [x, m.to_left(y)])
                    .collect(),
                _ => series.points.clone(),
            };

            let mut line = Line::new(PlotPoints::from(points)).name(&series.name);
            if let Some(color) = series_color(series.color) {
                line = line.color(color.gamma_multiply(series.opacity));
            }
            plot_ui.line(line);
        }

        for reference in &chart.reference_lines {
            let mut hline = HLine::new(reference.y).name(&reference.name);
            if let Some(color) = series_color(reference.color) {
                hline = hline.color(color);
            }
            if reference.dashed {
                hline = hline.style(LineStyle::dashed_loose());
            }
            plot_ui.hline(hline);
        }
    });
}
