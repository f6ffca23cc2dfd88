use std::path::PathBuf;

use chrono::NaiveDate;

use crate::dashboard::{render, Dashboard};

// ---------------------------------------------------------------------------
// Date range widget state
// ---------------------------------------------------------------------------

/// Endpoints picked so far in the date range widget.
///
/// Either end may be cleared, which leaves the widget mid-selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn full(min: NaiveDate, max: NaiveDate) -> Self {
        Self {
            start: Some(min),
            end: Some(max),
        }
    }

    /// Picked endpoints in start, end order.
    pub fn endpoints(&self) -> Vec<NaiveDate> {
        self.start.into_iter().chain(self.end).collect()
    }

    /// Dates a cleared start or end picker is re-seeded with: the data extent
    /// when known, otherwise the current endpoints.
    pub fn seeds(
        &self,
        extent: Option<(NaiveDate, NaiveDate)>,
    ) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match extent {
            Some((min, max)) => (Some(min), Some(max)),
            None => (self.start, self.end),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Fixed location of the source CSV.
    pub source: PathBuf,

    /// Date range widget; `None` until the first run reports the data extent.
    pub selection: Option<RangeSelection>,

    /// Whether the raw table is shown above the charts.
    pub show_raw: bool,

    /// Output of the most recent run.
    pub dashboard: Dashboard,
}

impl AppState {
    /// Run the pipeline once with default inputs and seed the date widget.
    pub fn new(source: PathBuf) -> Self {
        let mut state = Self {
            source,
            selection: None,
            show_raw: false,
            dashboard: Dashboard::default(),
        };
        state.rerun();
        state
    }

    /// Recompute the dashboard from the source file and current widgets.
    pub fn rerun(&mut self) {
        let endpoints = self.selection.map(|s| s.endpoints());
        self.dashboard = render(&self.source, endpoints.as_deref(), self.show_raw);

        if self.selection.is_none() {
            self.selection = self
                .dashboard
                .date_extent
                .map(|(min, max)| RangeSelection::full(min, max));
        }
    }

    /// Apply a new widget selection and rerun if anything changed.
    pub fn set_selection(&mut self, selection: RangeSelection) {
        if self.selection != Some(selection) {
            self.selection = Some(selection);
            self.rerun();
        }
    }

    pub fn set_show_raw(&mut self, show_raw: bool) {
        if self.show_raw != show_raw {
            self.show_raw = show_raw;
            self.rerun();
        }
    }
}
