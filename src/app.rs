use eframe::egui;

use crate::color::WeatherColors;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BikeDashboardApp {
    pub state: AppState,
    colors: WeatherColors,
}

impl BikeDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            colors: WeatherColors::default(),
        }
    }
}

impl eframe::App for BikeDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: date range ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard_panel(ui, &mut self.state, &self.colors);
        });
    }
}
