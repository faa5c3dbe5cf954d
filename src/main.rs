//! Stockdesk - role-based inventory desktop app.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use stockdesk as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Role-based inventory desktop app.
#[derive(Parser)]
#[command(name = "stockdesk")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    // Logging settings come from the config, so load it first.
    let (config, initial_error, first_run) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None, false),
        ConfigLoadResult::Missing => (AppConfig::default(), None, true),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string()), false),
    };

    let _log_guard = app::logging::init(&config.logging)?;

    tracing::info!("Stockdesk starting...");
    tracing::info!("Config path: {:?}", config_path);

    if first_run {
        tracing::info!("Config missing, writing defaults");
        if let Err(e) = config.save(&config_path) {
            tracing::warn!("Failed to write default config: {}", e);
        }
    }
    if let Some(e) = &initial_error {
        tracing::warn!("Config invalid: {}", e);
    }

    run_app(config, initial_error).map_err(|e| anyhow::anyhow!("UI error: {e}"))
}

/// Run the main application window.
fn run_app(config: AppConfig, initial_error: Option<String>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window.title)
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            let app = App::new(config, initial_error)?;
            Ok(Box::new(app))
        }),
    )
}
