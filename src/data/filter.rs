use chrono::NaiveDate;

use crate::error::{DashboardError, Result};

use super::model::{Rental, RentalTable};

// ---------------------------------------------------------------------------
// DateRange – inclusive date bounds picked by the user
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` date range. Always `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DashboardError::ReversedRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Build a range from the endpoints currently picked in the date widget.
    ///
    /// Exactly two endpoints are required; a widget that is half-way through
    /// a selection yields [`DashboardError::IncompleteRange`].
    pub fn from_selection(endpoints: &[NaiveDate]) -> Result<Self> {
        match endpoints {
            [start, end] => DateRange::new(*start, *end),
            other => Err(DashboardError::IncompleteRange {
                picked: other.len(),
            }),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Rows whose date falls inside `range`, in table order.
pub fn filter_by_date(table: &RentalTable, range: DateRange) -> Vec<&Rental> {
    table
        .rentals
        .iter()
        .filter(|r| range.contains(r.date))
        .collect()
}
