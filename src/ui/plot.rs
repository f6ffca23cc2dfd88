use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{RichText, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints, Points,
};

use crate::color::{blues, WeatherColors};
use crate::dashboard::{Chart, ChartLabels};
use crate::data::aggregate::{DailyTotal, HourlyMean, SeasonalMean, TemperaturePoint};
use crate::data::labels::{label_or_blank, Category, Weather};

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Chart panels (central panel)
// ---------------------------------------------------------------------------

/// Render one chart with its heading.
pub fn chart(ui: &mut Ui, chart: &Chart, colors: &WeatherColors) {
    let labels = chart.labels();
    ui.heading(labels.title);

    match chart {
        Chart::DailyLine { points, .. } => daily_line(ui, labels, points),
        Chart::HourlyBars { bars, .. } => hourly_bars(ui, labels, bars),
        Chart::TemperatureScatter {
            legend_title,
            points,
            ..
        } => temperature_scatter(ui, labels, legend_title, points, colors),
        Chart::SeasonalBars { bars, .. } => seasonal_bars(ui, labels, bars),
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn format_day(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn daily_line(ui: &mut Ui, labels: &ChartLabels, points: &[DailyTotal]) {
    let line_points: PlotPoints = points
        .iter()
        .map(|d| [day_number(d.date), d.total as f64])
        .collect();

    Plot::new("daily_totals")
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_label)
        .y_axis_label(labels.y_label)
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .label_formatter(|_name, value| format!("{}\n{:.0}", format_day(value.x), value.y))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(line_points).name(labels.y_label).width(1.5));
        });
}

fn hourly_bars(ui: &mut Ui, labels: &ChartLabels, hourly: &[HourlyMean]) {
    let (min, max) = hourly
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), h| {
            (lo.min(h.mean), hi.max(h.mean))
        });

    let bars: Vec<Bar> = hourly
        .iter()
        .map(|h| {
            Bar::new(f64::from(h.hour), h.mean)
                .name(format!("{:02}:00", h.hour))
                .fill(blues(h.mean, min, max))
        })
        .collect();

    Plot::new("hourly_means")
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_label)
        .y_axis_label(labels.y_label)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 3.0, 6.0]))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.8).name(labels.y_label));
        });
}

fn temperature_scatter(
    ui: &mut Ui,
    labels: &ChartLabels,
    legend_title: &str,
    points: &[TemperaturePoint],
    colors: &WeatherColors,
) {
    let mut series: BTreeMap<Option<Weather>, Vec<[f64; 2]>> = BTreeMap::new();
    for p in points {
        series
            .entry(p.weather)
            .or_default()
            .push([p.temperature, p.total_count as f64]);
    }

    Plot::new("temperature_scatter")
        .height(CHART_HEIGHT)
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(labels.x_label)
        .y_axis_label(labels.y_label)
        .include_x(0.0)
        .include_x(1.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (weather, pts) in series {
                plot_ui.points(
                    Points::new(PlotPoints::new(pts))
                        .radius(2.0)
                        .color(colors.color_for(weather))
                        .name(format!("{legend_title}: {}", label_or_blank(weather))),
                );
            }
        });
}

fn seasonal_bars(ui: &mut Ui, labels: &ChartLabels, seasonal: &[SeasonalMean]) {
    let names: Vec<&'static str> = seasonal.iter().map(|s| s.season.label()).collect();

    let bars: Vec<Bar> = seasonal
        .iter()
        .enumerate()
        .map(|(i, s)| Bar::new(i as f64, s.mean).name(s.season.label()))
        .collect();

    Plot::new("seasonal_means")
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_label)
        .y_axis_label(labels.y_label)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 2.0, 4.0]))
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            names.get(i as usize).map(|s| s.to_string()).unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.6).name(labels.y_label));
        });

    if seasonal.is_empty() {
        ui.label(RichText::new("No season data in the selected range.").weak());
    }
}
