use egui::{Color32, RichText};
use eh_app::{Metric, StatusLevel, ViewModel};

use super::show_chart;

/// Draw one rendered view: header, notices, chart, then metrics and status.
pub fn show_view(ui: &mut egui::Ui, view: &ViewModel) {
    ui.heading(&view.header);
    ui.separator();

    for notice in &view.notices {
        ui.colored_label(level_color(notice.level), &notice.message);
    }

    if let Some(chart) = &view.chart {
        show_chart(ui, chart);
    }

    if let Some(subheader) = &view.subheader {
        ui.add_space(8.0);
        ui.label(RichText::new(subheader).size(18.0).strong());
    }

    if !view.metrics.is_empty() {
        ui.horizontal(|ui| {
            for metric in &view.metrics {
                show_metric(ui, metric);
                ui.add_space(32.0);
            }
        });
    }

    if let Some(status) = &view.status {
        ui.group(|ui| {
            ui.colored_label(level_color(status.level), &status.message);
        });
    }
}

fn show_metric(ui: &mut egui::Ui, metric: &Metric) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&metric.label).small());
        ui.label(RichText::new(&metric.value).size(28.0));
    });
}

fn level_color(level: StatusLevel) -> Color32 {
    match level {
        StatusLevel::Ok => Color32::from_rgb(46, 160, 67),
        StatusLevel::Warning => Color32::from_rgb(214, 158, 46),
        StatusLevel::Critical => Color32::from_rgb(220, 53, 69),
    }
}
