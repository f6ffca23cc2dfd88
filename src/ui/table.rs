use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::labels::label_or_blank;
use crate::data::model::{Rental, RentalTable};

/// Decoded columns, in the order they are shown.
const COLUMNS: [&str; 9] = [
    "dteday",
    "season",
    "yr",
    "mnth",
    "hr",
    "weekday",
    "weathersit",
    "temp",
    "total_count",
];

const ROW_HEIGHT: f32 = 18.0;

/// Render the full normalized table, decoded columns first.
pub fn raw_table(ui: &mut Ui, table: &RentalTable) {
    ui.heading("Raw Data");
    if table.is_empty() {
        ui.label("The data file has no rows.");
        return;
    }

    let n_cols = COLUMNS.len() + table.extra_columns.len();
    let headers = COLUMNS
        .iter()
        .copied()
        .chain(table.extra_columns.iter().map(String::as_str));

    ui.push_id("raw_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .max_scroll_height(320.0)
            .columns(Column::auto().at_least(56.0), n_cols)
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for name in headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let rental = &table.rentals[row.index()];
                    for cell in row_cells(rental, &table.extra_columns) {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

/// Display strings for one row. Unknown codes and unreadable numbers show as
/// blank cells.
fn row_cells(r: &Rental, extra_columns: &[String]) -> Vec<String> {
    let mut cells = vec![
        r.date.format("%Y-%m-%d").to_string(),
        label_or_blank(r.season).to_string(),
        label_or_blank(r.year).to_string(),
        label_or_blank(r.month).to_string(),
        r.hour.to_string(),
        label_or_blank(r.weekday).to_string(),
        label_or_blank(r.weather).to_string(),
        r.temperature.map(|t| format!("{t:.4}")).unwrap_or_default(),
        r.total_count.map(|c| c.to_string()).unwrap_or_default(),
    ];
    cells.extend(
        extra_columns
            .iter()
            .map(|c| r.extra.get(c).cloned().unwrap_or_default()),
    );
    cells
}
