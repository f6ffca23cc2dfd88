use chrono::NaiveDate;
use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::color::WeatherColors;
use crate::dashboard::{Section, INTRO, TITLE};
use crate::state::{AppState, RangeSelection};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – date range
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(current) = state.selection else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Date range");
    let (seed_start, seed_end) = current.seeds(state.dashboard.date_extent);

    let mut edited: RangeSelection = current;
    endpoint_picker(ui, "From", "start_date", &mut edited.start, seed_start);
    endpoint_picker(ui, "To", "end_date", &mut edited.end, seed_end);
    state.set_selection(edited);

    if let Some((min, max)) = state.dashboard.date_extent {
        ui.add_space(4.0);
        ui.label(RichText::new(format!("Data covers {min} to {max}")).weak());
    }
}

fn endpoint_picker(
    ui: &mut Ui,
    label: &str,
    id: &str,
    value: &mut Option<NaiveDate>,
    seed: Option<NaiveDate>,
) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        match value {
            Some(date) => {
                ui.add(DatePickerButton::new(date).id_salt(id));
                if ui.small_button("✕").on_hover_text("Clear").clicked() {
                    *value = None;
                }
            }
            None => match seed {
                Some(seed) => {
                    if ui.small_button("Pick…").clicked() {
                        *value = Some(seed);
                    }
                }
                None => {
                    ui.weak("not set");
                }
            },
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui.button("⟳ Reload").clicked() {
            state.rerun();
        }

        ui.separator();

        let dash = &state.dashboard;
        match dash.rows_in_range {
            Some(visible) => ui.label(format!(
                "{} records loaded, {visible} in range",
                dash.rows_loaded
            )),
            None => ui.label(format!("{} records loaded", dash.rows_loaded)),
        };

        if let Some(msg) = dash.errors().next() {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – stacked dashboard sections
// ---------------------------------------------------------------------------

/// Render the title, the raw-data toggle and every section of the last run.
pub fn dashboard_panel(ui: &mut Ui, state: &mut AppState, colors: &WeatherColors) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading(RichText::new(TITLE).size(26.0).strong());
            });
            ui.label(INTRO);

            let mut show_raw = state.show_raw;
            if ui.checkbox(&mut show_raw, "Show raw data").changed() {
                state.set_show_raw(show_raw);
            }
            ui.add_space(8.0);

            for section in &state.dashboard.sections {
                match section {
                    Section::Error(msg) => error_box(ui, msg),
                    Section::RawTable(raw) => table::raw_table(ui, raw),
                    Section::Chart(chart) => plot::chart(ui, chart, colors),
                    Section::Note(text) => {
                        ui.label(RichText::new(*text).italics());
                    }
                }
                ui.add_space(12.0);
            }
        });
}

fn error_box(ui: &mut Ui, msg: &str) {
    Frame::group(ui.style())
        .fill(Color32::from_rgb(0xFF, 0xEB, 0xEE))
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new(format!("Error: {msg}"))
                    .color(Color32::from_rgb(0xC6, 0x28, 0x28))
                    .strong(),
            );
        });
}
