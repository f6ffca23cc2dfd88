use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::error::{DashboardError, Result};

use super::labels::decode;
use super::model::{RawTable, Rental, RentalTable};

/// Source columns the dashboard interprets. Everything else is passed through.
const DATE: &str = "dteday";
const SEASON: &str = "season";
const WEATHER: &str = "weathersit";
const YEAR: &str = "yr";
const MONTH: &str = "mnth";
const WEEKDAY: &str = "weekday";
const HOUR: &str = "hr";
const TEMPERATURE: &str = "temp";
const TOTAL_COUNT: &str = "total_count";

const KNOWN_COLUMNS: [&str; 9] = [
    DATE,
    SEASON,
    WEATHER,
    YEAR,
    MONTH,
    WEEKDAY,
    HOUR,
    TEMPERATURE,
    TOTAL_COUNT,
];

/// Resolved header positions for one raw table.
struct Columns {
    date: usize,
    season: usize,
    weather: usize,
    year: usize,
    month: usize,
    weekday: usize,
    hour: usize,
    temperature: usize,
    total_count: usize,
    extra: Vec<(usize, String)>,
}

impl Columns {
    fn locate(raw: &RawTable) -> Result<Self> {
        let find = |column: &'static str| {
            raw.column(column).ok_or_else(|| DashboardError::MissingColumn {
                path: raw.path.clone(),
                column,
            })
        };

        let extra = raw
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !KNOWN_COLUMNS.contains(&h.as_str()))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(Columns {
            date: find(DATE)?,
            season: find(SEASON)?,
            weather: find(WEATHER)?,
            year: find(YEAR)?,
            month: find(MONTH)?,
            weekday: find(WEEKDAY)?,
            hour: find(HOUR)?,
            temperature: find(TEMPERATURE)?,
            total_count: find(TOTAL_COUNT)?,
            extra,
        })
    }
}

/// Turn raw rows into typed [`Rental`]s.
///
/// Dates must parse; an unparseable date fails the whole load. Every other
/// cell is decoded leniently: category codes outside the lookup tables and
/// unreadable temperatures or counts become `None`, and a blank hour becomes 0.
pub fn normalize(raw: RawTable) -> Result<RentalTable> {
    let cols = Columns::locate(&raw)?;

    let rentals = raw
        .records
        .iter()
        .enumerate()
        // Row numbers are 1-based and skip the header line.
        .map(|(i, record)| normalize_row(record, &cols, i + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(RentalTable {
        rentals,
        extra_columns: cols.extra.into_iter().map(|(_, name)| name).collect(),
    })
}

fn normalize_row(record: &StringRecord, cols: &Columns, row: usize) -> Result<Rental> {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

    let date = parse_date(cell(cols.date)).ok_or_else(|| DashboardError::InvalidDate {
        row,
        value: cell(cols.date).to_string(),
    })?;

    let extra = cols
        .extra
        .iter()
        .map(|(idx, name)| (name.clone(), record.get(*idx).unwrap_or("").to_string()))
        .collect::<BTreeMap<_, _>>();

    Ok(Rental {
        date,
        hour: parse_hour(cell(cols.hour)),
        season: decode(cell(cols.season)),
        weather: decode(cell(cols.weather)),
        year: decode(cell(cols.year)),
        month: decode(cell(cols.month)),
        weekday: decode(cell(cols.weekday)),
        temperature: parse_temperature(cell(cols.temperature)),
        total_count: parse_count(cell(cols.total_count)),
        extra,
    })
}

/// `YYYY-MM-DD`, optionally followed by a time of day which is dropped.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .ok()
}

/// Float-typed exports (`"8.0"`) are truncated. Values outside 0-23 are kept
/// as written; blank, NaN or non-numeric cells become 0.
fn parse_hour(s: &str) -> i64 {
    s.parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .map(|h| h.trunc() as i64)
        .unwrap_or(0)
}

fn parse_temperature(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|t| t.is_finite())
}

fn parse_count(s: &str) -> Option<u64> {
    if let Ok(n) = s.parse::<u64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then_some(f as u64)
}
