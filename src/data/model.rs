use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Month, NaiveDate, Weekday};
use csv::StringRecord;

use super::labels::{Season, Weather, Year};

// ---------------------------------------------------------------------------
// RawTable – the file as read, before any decoding
// ---------------------------------------------------------------------------

/// Source rows exactly as they appear in the CSV.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Where the rows were read from (kept for error messages).
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
}

impl RawTable {
    /// Index of a header by exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ---------------------------------------------------------------------------
// Rental – one normalized row
// ---------------------------------------------------------------------------

/// One rental observation after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    pub date: NaiveDate,
    /// Hour of day as written in the source, 0 when left blank.
    pub hour: i64,
    pub season: Option<Season>,
    pub weather: Option<Weather>,
    pub year: Option<Year>,
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
    /// Normalized temperature in [0, 1]; `None` when blank or unreadable.
    pub temperature: Option<f64>,
    /// `None` when blank or not a non-negative integer.
    pub total_count: Option<u64>,
    /// Columns the dashboard does not interpret, passed through verbatim.
    pub extra: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// RentalTable – the normalized dataset
// ---------------------------------------------------------------------------

/// The full normalized table. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalTable {
    pub rentals: Vec<Rental>,
    /// Names of the pass-through columns, in file order.
    pub extra_columns: Vec<String>,
}

impl RentalTable {
    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Earliest and latest date in the table.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rentals.iter().map(|r| r.date).min()?;
        let max = self.rentals.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}
