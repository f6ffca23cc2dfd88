//! Presenter: one full pipeline run, from source file to a drawable dashboard.
//!
//! [`render`] is a pure function of its inputs. The UI calls it again whenever
//! the date selection or the raw-data toggle changes and draws whatever comes
//! back; nothing is carried over from the previous run.

use std::path::Path;

use chrono::NaiveDate;

use crate::data::aggregate::{
    daily_totals, hourly_means, seasonal_means, temperature_points, DailyTotal, HourlyMean,
    SeasonalMean, TemperaturePoint, WORKING_HOURS,
};
use crate::data::filter::{filter_by_date, DateRange};
use crate::data::loader::load_csv;
use crate::data::model::RentalTable;
use crate::data::normalize::normalize;

pub const TITLE: &str = "Bike Sharing Dashboard";
pub const INTRO: &str = "Interactive dashboard built on the Bike Sharing dataset.";

pub const HOURLY_NOTE: &str = "Note: the y axis shows the average number of rentals per \
working hour. A value of around 400 means that, on average, four hundred bikes were rented \
in that hour.";
pub const TEMPERATURE_NOTE: &str = "Note: temperature is a normalized value between 0 and 1, \
where 0 is very cold and 1 is very hot.";

// ---------------------------------------------------------------------------
// Dashboard output
// ---------------------------------------------------------------------------

/// Axis and title text for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Line of total rentals per day.
    DailyLine {
        labels: ChartLabels,
        points: Vec<DailyTotal>,
    },
    /// Bars of mean rentals per working hour, coloured by value.
    HourlyBars {
        labels: ChartLabels,
        bars: Vec<HourlyMean>,
    },
    /// Temperature against rentals, one series per weather label.
    TemperatureScatter {
        labels: ChartLabels,
        legend_title: &'static str,
        points: Vec<TemperaturePoint>,
    },
    /// Bars of mean rentals per season, least popular first.
    SeasonalBars {
        labels: ChartLabels,
        bars: Vec<SeasonalMean>,
    },
}

impl Chart {
    pub fn labels(&self) -> &ChartLabels {
        match self {
            Chart::DailyLine { labels, .. }
            | Chart::HourlyBars { labels, .. }
            | Chart::TemperatureScatter { labels, .. }
            | Chart::SeasonalBars { labels, .. } => labels,
        }
    }
}

/// One vertically stacked block of the dashboard, drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Error(String),
    RawTable(RentalTable),
    Chart(Chart),
    Note(&'static str),
}

/// Everything one run produces.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub sections: Vec<Section>,
    /// First and last date of the loaded data, used to seed the date picker.
    pub date_extent: Option<(NaiveDate, NaiveDate)>,
    pub rows_loaded: usize,
    /// Rows inside the selected range, `None` when no range was applied.
    pub rows_in_range: Option<usize>,
}

impl Dashboard {
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections.iter().filter_map(|s| match s {
            Section::Chart(c) => Some(c),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| match s {
            Section::Error(e) => Some(e.as_str()),
            _ => None,
        })
    }
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Run the whole pipeline once.
///
/// `selection` holds the endpoints currently picked in the date widget;
/// `None` means the widget has not been touched yet and defaults to the full
/// extent of the data.
pub fn render(source: &Path, selection: Option<&[NaiveDate]>, show_raw: bool) -> Dashboard {
    let mut dashboard = Dashboard::default();

    let table = match load_csv(source).and_then(normalize) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load data: {e}");
            dashboard.sections.push(Section::Error(e.to_string()));
            return dashboard;
        }
    };
    dashboard.date_extent = table.date_extent();
    dashboard.rows_loaded = table.len();

    let endpoints: Vec<NaiveDate> = match selection {
        Some(picked) => picked.to_vec(),
        None => dashboard
            .date_extent
            .map(|(min, max)| vec![min, max])
            .unwrap_or_default(),
    };
    log::debug!("Rendering {} with selection {endpoints:?}, raw={show_raw}", source.display());

    let range = DateRange::from_selection(&endpoints);

    if show_raw {
        dashboard.sections.push(Section::RawTable(table.clone()));
    }

    let range = match range {
        Ok(range) => range,
        Err(e) => {
            log::warn!("{e}");
            dashboard.sections.push(Section::Error(e.to_string()));
            return dashboard;
        }
    };

    let rows = filter_by_date(&table, range);
    log::debug!(
        "{} of {} rows between {} and {}",
        rows.len(),
        table.len(),
        range.start(),
        range.end()
    );
    dashboard.rows_in_range = Some(rows.len());

    dashboard.sections.extend([
        Section::Chart(Chart::DailyLine {
            labels: ChartLabels {
                title: "Rentals per Day",
                x_label: "Date",
                y_label: "Rentals",
            },
            points: daily_totals(&rows),
        }),
        Section::Chart(Chart::HourlyBars {
            labels: ChartLabels {
                title: "Average Rentals per Hour (Working Hours)",
                x_label: "Hour",
                y_label: "Average Rentals",
            },
            bars: hourly_means(&rows, WORKING_HOURS),
        }),
        Section::Note(HOURLY_NOTE),
        Section::Chart(Chart::TemperatureScatter {
            labels: ChartLabels {
                title: "Effect of Temperature on Rentals",
                x_label: "Temperature (normalized)",
                y_label: "Rentals",
            },
            legend_title: "Weather",
            points: temperature_points(&rows),
        }),
        Section::Note(TEMPERATURE_NOTE),
        Section::Chart(Chart::SeasonalBars {
            labels: ChartLabels {
                title: "Average Rentals by Season",
                x_label: "Season",
                y_label: "Average Rentals",
            },
            bars: seasonal_means(&rows),
        }),
    ]);

    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "dteday,season,yr,mnth,hr,weekday,weathersit,temp,total_count";

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn csv_file(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for r in rows {
            writeln!(file, "{r}").unwrap();
        }
        file
    }

    fn sample() -> tempfile::NamedTempFile {
        csv_file(&[
            "2011-01-01,1,0,1,8,6,1,0.24,10",
            "2011-01-01,1,0,1,9,6,2,0.22,20",
            "2011-01-02,1,0,1,,0,1,0.18,985",
            "2011-07-01,3,0,7,17,5,1,0.80,400",
        ])
    }

    #[test]
    fn missing_source_halts_before_aggregation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_data.csv");

        let dash = render(&path, None, true);
        assert_eq!(dash.sections.len(), 1);
        assert_eq!(dash.charts().count(), 0);
        let err = dash.errors().next().unwrap();
        assert!(err.contains(&path.display().to_string()));
        assert_eq!(dash.rows_in_range, None);
    }

    #[test]
    fn unparseable_dates_halt_the_run() {
        let file = csv_file(&["yesterday,1,0,1,8,6,1,0.24,10"]);
        let dash = render(file.path(), None, true);
        assert_eq!(dash.charts().count(), 0);
        assert!(dash.errors().next().unwrap().contains("yesterday"));
        assert!(!dash.sections.iter().any(|s| matches!(s, Section::RawTable(_))));
    }

    #[test]
    fn single_endpoint_emits_no_charts() {
        let file = sample();
        let picked = [day(2011, 1, 1)];
        let dash = render(file.path(), Some(&picked[..]), false);

        assert_eq!(dash.charts().count(), 0);
        assert_eq!(dash.errors().count(), 1);
        assert!(dash.errors().next().unwrap().contains("valid date range"));
        assert_eq!(dash.date_extent, Some((day(2011, 1, 1), day(2011, 7, 1))));
    }

    #[test]
    fn default_selection_covers_the_whole_table() {
        let file = sample();
        let dash = render(file.path(), None, false);

        assert_eq!(dash.rows_loaded, 4);
        assert_eq!(dash.rows_in_range, Some(4));
        assert_eq!(dash.errors().count(), 0);

        let titles: Vec<_> = dash.charts().map(|c| c.labels().title).collect();
        assert_eq!(
            titles,
            vec![
                "Rentals per Day",
                "Average Rentals per Hour (Working Hours)",
                "Effect of Temperature on Rentals",
                "Average Rentals by Season",
            ]
        );
        let notes = dash
            .sections
            .iter()
            .filter(|s| matches!(s, Section::Note(_)))
            .count();
        assert_eq!(notes, 2);
    }

    #[test]
    fn single_day_range_scenario() {
        let file = sample();
        let picked = [day(2011, 1, 1), day(2011, 1, 1)];
        let dash = render(file.path(), Some(&picked[..]), false);

        assert_eq!(dash.rows_in_range, Some(2));
        for chart in dash.charts() {
            match chart {
                Chart::DailyLine { points, .. } => {
                    assert_eq!(
                        points,
                        &vec![DailyTotal {
                            date: day(2011, 1, 1),
                            total: 30
                        }]
                    );
                }
                Chart::HourlyBars { bars, .. } => {
                    assert_eq!(
                        bars,
                        &vec![
                            HourlyMean { hour: 8, mean: 10.0 },
                            HourlyMean { hour: 9, mean: 20.0 }
                        ]
                    );
                }
                Chart::TemperatureScatter { points, .. } => assert_eq!(points.len(), 2),
                Chart::SeasonalBars { bars, .. } => {
                    assert_eq!(bars.len(), 1);
                    assert_eq!(bars[0].mean, 15.0);
                }
            }
        }
    }

    #[test]
    fn raw_table_precedes_charts_and_shows_everything() {
        let file = sample();
        let picked = [day(2011, 7, 1), day(2011, 7, 1)];
        let dash = render(file.path(), Some(&picked[..]), true);

        match &dash.sections[0] {
            Section::RawTable(table) => assert_eq!(table.len(), 4),
            other => panic!("expected raw table first, got {other:?}"),
        }
        assert_eq!(dash.charts().count(), 4);
    }

    #[test]
    fn raw_table_still_shown_when_range_is_incomplete() {
        let file = sample();
        let dash = render(file.path(), Some(&[][..]), true);
        assert!(matches!(dash.sections[0], Section::RawTable(_)));
        assert!(matches!(dash.sections[1], Section::Error(_)));
        assert_eq!(dash.charts().count(), 0);
    }

    #[test]
    fn empty_window_renders_empty_hourly_chart() {
        let file = sample();
        let picked = [day(2011, 1, 2), day(2011, 1, 2)];
        let dash = render(file.path(), Some(&picked[..]), false);

        let hourly = dash
            .charts()
            .find_map(|c| match c {
                Chart::HourlyBars { bars, .. } => Some(bars.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(hourly, 0);
        assert_eq!(dash.charts().count(), 4);
    }

    fn daily_total_for(dash: &Dashboard, date: NaiveDate) -> Option<u64> {
        dash.charts().find_map(|c| match c {
            Chart::DailyLine { points, .. } => {
                points.iter().find(|p| p.date == date).map(|p| p.total)
            }
            _ => None,
        })
    }

    #[test]
    fn blank_temperature_still_renders_every_chart() {
        let file = csv_file(&[
            "2011-01-01,1,0,1,8,6,1,0.24,10",
            "2011-01-01,1,0,1,9,6,1,,20",
        ]);
        let dash = render(file.path(), None, false);

        assert_eq!(dash.errors().count(), 0);
        assert_eq!(dash.charts().count(), 4);
        assert_eq!(daily_total_for(&dash, day(2011, 1, 1)), Some(30));
        let scatter = dash
            .charts()
            .find_map(|c| match c {
                Chart::TemperatureScatter { points, .. } => Some(points.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(scatter, 1);
    }

    #[test]
    fn blank_count_leaves_daily_sum_unchanged() {
        let file = csv_file(&[
            "2011-01-01,1,0,1,8,6,1,0.24,10",
            "2011-01-01,1,0,1,9,6,1,0.30,",
            "2011-01-01,1,0,1,10,6,1,0.32,5",
        ]);
        let dash = render(file.path(), None, false);

        assert_eq!(dash.errors().count(), 0);
        assert_eq!(dash.charts().count(), 4);
        assert_eq!(daily_total_for(&dash, day(2011, 1, 1)), Some(15));
    }

    #[test]
    fn out_of_range_hour_is_kept_but_not_charted_hourly() {
        let file = csv_file(&[
            "2011-01-01,1,0,1,8,6,1,0.24,10",
            "2011-01-01,1,0,1,24,6,1,0.22,20",
        ]);
        let dash = render(file.path(), None, false);

        assert_eq!(dash.errors().count(), 0);
        assert_eq!(dash.rows_in_range, Some(2));
        assert_eq!(dash.charts().count(), 4);
        assert_eq!(daily_total_for(&dash, day(2011, 1, 1)), Some(30));
        let hours: Vec<u8> = dash
            .charts()
            .find_map(|c| match c {
                Chart::HourlyBars { bars, .. } => Some(bars.iter().map(|b| b.hour).collect()),
                _ => None,
            })
            .unwrap();
        assert_eq!(hours, vec![8]);
    }
}
