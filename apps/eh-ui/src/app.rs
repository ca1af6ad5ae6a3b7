use crate::views;
use eh_app::{RenderSettings, Selection, ViewMode, engine_ids, render};
use eh_core::EngineId;
use eh_results::FleetData;

pub struct DashboardApp {
    fleet: FleetData,
    engine_ids: Vec<EngineId>,
    selection: Option<Selection>,
    settings: RenderSettings,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, fleet: FleetData, settings: RenderSettings) -> Self {
        let engine_ids = engine_ids(&fleet);
        let selection = Selection::initial(&fleet);
        tracing::info!(engines = engine_ids.len(), "dashboard ready");

        Self {
            fleet,
            engine_ids,
            selection,
            settings,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading("Predictive Maintenance Dashboard");
            ui.label(
                "Integrated anomaly detection, failure classification, \
                 and Remaining Useful Life (RUL) prediction.",
            );
        });

        egui::SidePanel::left("selectors")
            .default_width(220.0)
            .show(ctx, |ui| {
                let Some(selection) = self.selection.as_mut() else {
                    ui.label("No engines found in the result tables");
                    return;
                };

                ui.label("Select Engine ID");
                egui::ComboBox::from_id_salt("engine_selector")
                    .selected_text(selection.engine.to_string())
                    .show_ui(ui, |ui| {
                        for id in &self.engine_ids {
                            ui.selectable_value(&mut selection.engine, id.clone(), id.to_string());
                        }
                    });

                ui.separator();
                ui.label("Select View");
                for mode in ViewMode::ALL {
                    ui.radio_value(&mut selection.mode, mode, mode.label());
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(selection) = &self.selection {
                let view = render(&self.fleet, selection, &self.settings);
                views::show_view(ui, &view);
            }
        });
    }
}
