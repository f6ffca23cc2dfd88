mod app;
mod color;
mod config;
mod dashboard;
mod data;
mod error;
mod state;
mod ui;

use app::BikeDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_deployment();
    log::info!("Using data file {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let DashboardConfig {
        data_path,
        window_title,
        ..
    } = config;

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| {
            let state = AppState::new(data_path);
            Ok(Box::new(BikeDashboardApp::new(state)))
        }),
    )
}
