use clap::{Parser, Subcommand};
use eh_app::{
    AppResult, DashboardConfig, Selection, StatusLevel, Variable, ViewMode, ViewModel, engine_ids,
    export_series, render,
};
use eh_core::EngineId;
use eh_results::FleetData;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "eh-cli")]
#[command(about = "Engine health CLI - anomaly and RUL result inspection", long_about = None)]
struct Cli {
    /// Dashboard configuration YAML (defaults to results/ in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable engine IDs
    Engines,
    /// Show row and engine counts of both tables
    Summary,
    /// Render one dashboard view as text
    View {
        /// Engine ID to display
        engine: String,
        /// View mode: anomaly, prediction or combined
        #[arg(short, long, default_value = "anomaly")]
        mode: ViewMode,
        /// Print the view description as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export one engine's series as CSV
    ExportSeries {
        /// Engine ID
        engine: String,
        /// Variable name (anomaly_score, predicted_rul, true_rul, fail_probability)
        variable: Variable,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    let fleet = FleetData::load(&config.anomaly_path(), &config.prediction_path())?;
    tracing::info!(engines = engine_ids(&fleet).len(), "fleet loaded");

    match cli.command {
        Commands::Engines => cmd_engines(&fleet),
        Commands::Summary => cmd_summary(&fleet),
        Commands::View { engine, mode, json } => cmd_view(&fleet, &config, engine, mode, json),
        Commands::ExportSeries {
            engine,
            variable,
            output,
        } => cmd_export_series(&fleet, engine, variable, output.as_deref()),
    }
}

fn cmd_engines(fleet: &FleetData) -> AppResult<()> {
    let ids = engine_ids(fleet);
    if ids.is_empty() {
        println!("No engines found");
    } else {
        for id in ids {
            println!("{}", id);
        }
    }
    Ok(())
}

fn cmd_summary(fleet: &FleetData) -> AppResult<()> {
    let summary = fleet.summary();
    println!(
        "Anomaly scores: {} rows, {} engines",
        summary.anomaly_rows, summary.anomaly_engines
    );
    println!(
        "Predictions:    {} rows, {} engines",
        summary.prediction_rows, summary.prediction_engines
    );
    println!("Selectable engines: {}", engine_ids(fleet).len());
    if let Some((first, last)) = summary.cycle_range {
        println!("Cycles: {}..={}", first, last);
    }
    Ok(())
}

fn cmd_view(
    fleet: &FleetData,
    config: &DashboardConfig,
    engine: String,
    mode: ViewMode,
    json: bool,
) -> AppResult<()> {
    let engine = known_engine(fleet, engine)?;
    let settings = config.render_settings()?;
    let view = render(fleet, &Selection::new(engine, mode), &settings);

    if json {
        let text = serde_json::to_string_pretty(&view)
            .map_err(|e| eh_app::AppError::InvalidInput(format!("Failed to encode view: {}", e)))?;
        println!("{}", text);
    } else {
        print_view(&view);
    }
    Ok(())
}

fn cmd_export_series(
    fleet: &FleetData,
    engine: String,
    variable: Variable,
    output: Option<&Path>,
) -> AppResult<()> {
    let engine = EngineId::from(engine);

    if let Some(path) = output {
        let file = std::fs::File::create(path)?;
        let rows = export_series(fleet, &engine, variable, file)?;
        tracing::info!(engine = %engine, rows, path = %path.display(), "exported series");
        println!("✓ Exported {} data points to {}", rows, path.display());
    } else {
        export_series(fleet, &engine, variable, std::io::stdout().lock())?;
    }
    Ok(())
}

fn known_engine(fleet: &FleetData, engine: String) -> AppResult<EngineId> {
    let engine = EngineId::from(engine);
    if engine_ids(fleet).contains(&engine) {
        Ok(engine)
    } else {
        Err(eh_app::AppError::EngineNotFound(engine.to_string()))
    }
}

fn print_view(view: &ViewModel) {
    println!("{} - engine {}", view.header, view.engine);

    for notice in &view.notices {
        println!("{} {}", level_marker(notice.level), notice.message);
    }

    if let Some(chart) = &view.chart {
        for series in &chart.series {
            let first = series.points.first().map(|p| p[0]);
            let last = series.points.last().map(|p| p[0]);
            match (first, last) {
                (Some(first), Some(last)) => println!(
                    "  {}: {} points, cycles {}..={}",
                    series.name,
                    series.points.len(),
                    first,
                    last
                ),
                _ => println!("  {}: no points", series.name),
            }
        }
        for line in &chart.reference_lines {
            println!("  {}: {:.4}", line.name, line.y);
        }
    }

    if let Some(subheader) = &view.subheader {
        println!("{}", subheader);
    }
    for metric in &view.metrics {
        println!("  {}: {}", metric.label, metric.value);
    }
    if let Some(status) = &view.status {
        println!("{} {}", level_marker(status.level), status.message);
    }
}

fn level_marker(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Ok => "✓",
        StatusLevel::Warning => "⚠",
        StatusLevel::Critical => "✗",
    }
}
