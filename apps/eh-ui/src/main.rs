#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::DashboardApp;
use clap::Parser;
use eh_app::DashboardConfig;
use eh_results::FleetData;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eh-ui")]
#[command(about = "Predictive maintenance dashboard", long_about = None)]
struct Args {
    /// Optional dashboard configuration YAML
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = DashboardConfig::load_or_default(args.config.as_deref())?;
    let settings = config.render_settings()?;

    // Without both tables there is nothing to show.
    let fleet = FleetData::load(&config.anomaly_path(), &config.prediction_path())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("Predictive Maintenance Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Predictive Maintenance Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, fleet, settings)))),
    )?;
    Ok(())
}
