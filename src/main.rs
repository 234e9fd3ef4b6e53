mod analysis;
mod app;
mod config;
mod error;
mod utils;

use analysis::AnalysisClient;
use app::InfraGuardApp;
use config::AppConfig;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::default();
    let client = AnalysisClient::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "InfraGuard AI",
        options,
        Box::new(move |cc| Box::new(InfraGuardApp::new(cc, config, client))),
    )?;

    Ok(())
}
