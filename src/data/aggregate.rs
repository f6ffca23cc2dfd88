use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::NaiveDate;

use super::labels::{Season, Weather};
use super::model::Rental;

/// Hours shown on the hourly chart, inclusive on both ends.
pub const WORKING_HOURS: RangeInclusive<u8> = 7..=18;

// ---------------------------------------------------------------------------
// Aggregate rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyMean {
    pub hour: u8,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    pub temperature: f64,
    pub total_count: u64,
    pub weather: Option<Weather>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalMean {
    pub season: Season,
    pub mean: f64,
}

/// Running sum and count of the readable values in a group.
#[derive(Default, Clone, Copy)]
struct MeanAcc {
    sum: u64,
    n: u64,
}

impl MeanAcc {
    fn push(&mut self, value: Option<u64>) {
        if let Some(v) = value {
            self.sum += v;
            self.n += 1;
        }
    }

    /// `None` when every value in the group was unreadable.
    fn mean(self) -> Option<f64> {
        (self.n > 0).then(|| self.sum as f64 / self.n as f64)
    }
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// Sum of `total_count` per date, ascending by date.
///
/// Unreadable counts add nothing, but their date still gets a point.
pub fn daily_totals(rows: &[&Rental]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in rows {
        *by_date.entry(r.date).or_default() += r.total_count.unwrap_or(0);
    }
    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Mean `total_count` per hour for hours inside `window`, ascending by hour.
///
/// Empty when no row falls inside the window.
pub fn hourly_means(rows: &[&Rental], window: RangeInclusive<u8>) -> Vec<HourlyMean> {
    let mut by_hour: BTreeMap<u8, MeanAcc> = BTreeMap::new();
    for r in rows {
        let Some(hour) = u8::try_from(r.hour).ok().filter(|h| window.contains(h)) else {
            continue;
        };
        by_hour.entry(hour).or_default().push(r.total_count);
    }
    by_hour
        .into_iter()
        .filter_map(|(hour, acc)| Some(HourlyMean { hour, mean: acc.mean()? }))
        .collect()
}

/// One point per row, unaggregated. Rows missing either coordinate are skipped.
pub fn temperature_points(rows: &[&Rental]) -> Vec<TemperaturePoint> {
    rows.iter()
        .filter_map(|r| {
            Some(TemperaturePoint {
                temperature: r.temperature?,
                total_count: r.total_count?,
                weather: r.weather,
            })
        })
        .collect()
}

/// Mean `total_count` per season, least to most popular.
///
/// Rows with no season label are left out of the grouping.
pub fn seasonal_means(rows: &[&Rental]) -> Vec<SeasonalMean> {
    let mut by_season: BTreeMap<Season, MeanAcc> = BTreeMap::new();
    for r in rows {
        if let Some(season) = r.season {
            by_season.entry(season).or_default().push(r.total_count);
        }
    }
    let mut means: Vec<SeasonalMean> = by_season
        .into_iter()
        .filter_map(|(season, acc)| Some(SeasonalMean { season, mean: acc.mean()? }))
        .collect();
    // Stable: equal means keep season order.
    means.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(date: (i32, u32, u32), hour: i64, count: u64) -> Rental {
        Rental {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            hour,
            season: None,
            weather: None,
            year: None,
            month: None,
            weekday: None,
            temperature: Some(0.5),
            total_count: Some(count),
            extra: BTreeMap::new(),
        }
    }

    fn with_season(mut r: Rental, season: Season) -> Rental {
        r.season = Some(season);
        r
    }

    #[test]
    fn two_row_scenario() {
        let rows = [row((2011, 1, 1), 8, 10), row((2011, 1, 1), 9, 20)];
        let refs: Vec<&Rental> = rows.iter().collect();

        let daily = daily_totals(&refs);
        assert_eq!(
            daily,
            vec![DailyTotal {
                date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                total: 30
            }]
        );

        let hourly = hourly_means(&refs, WORKING_HOURS);
        assert_eq!(
            hourly,
            vec![
                HourlyMean { hour: 8, mean: 10.0 },
                HourlyMean { hour: 9, mean: 20.0 }
            ]
        );
    }

    #[test]
    fn daily_totals_conserve_the_sum() {
        let rows: Vec<Rental> = (0..60u64)
            .map(|i| row((2011, 2, 1 + (i % 7) as u32), (i % 24) as i64, i * 3 + 1))
            .collect();
        let refs: Vec<&Rental> = rows.iter().collect();

        let daily = daily_totals(&refs);
        let grouped: u64 = daily.iter().map(|d| d.total).sum();
        let direct: u64 = rows.iter().filter_map(|r| r.total_count).sum();
        assert_eq!(grouped, direct);
        assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn identical_values_give_that_mean() {
        let rows: Vec<Rental> = (0..24i64)
            .flat_map(|h| [row((2011, 5, 1), h, 42), row((2011, 5, 2), h, 42)])
            .collect();
        let refs: Vec<&Rental> = rows.iter().collect();

        let hourly = hourly_means(&refs, WORKING_HOURS);
        assert_eq!(hourly.len(), 12);
        assert_eq!(hourly.first().map(|h| h.hour), Some(7));
        assert_eq!(hourly.last().map(|h| h.hour), Some(18));
        assert!(hourly.iter().all(|h| h.mean == 42.0));
    }

    #[test]
    fn no_working_hour_rows_gives_empty_aggregate() {
        let rows = [
            row((2011, 1, 1), 0, 985),
            row((2011, 1, 2), 22, 10),
            row((2011, 1, 2), 24, 10),
            row((2011, 1, 2), -8, 10),
        ];
        let refs: Vec<&Rental> = rows.iter().collect();
        assert!(hourly_means(&refs, WORKING_HOURS).is_empty());
    }

    #[test]
    fn seasons_sorted_by_mean() {
        let rows = [
            with_season(row((2011, 1, 1), 0, 100), Season::Spring),
            with_season(row((2011, 1, 2), 0, 300), Season::Spring),
            with_season(row((2011, 7, 1), 0, 500), Season::Summer),
            with_season(row((2011, 10, 1), 0, 150), Season::Fall),
            with_season(row((2011, 12, 1), 0, 90), Season::Winter),
            row((2011, 12, 2), 0, 1),
        ];
        let refs: Vec<&Rental> = rows.iter().collect();

        let seasonal = seasonal_means(&refs);
        let order: Vec<Season> = seasonal.iter().map(|s| s.season).collect();
        assert_eq!(
            order,
            vec![Season::Winter, Season::Fall, Season::Spring, Season::Summer]
        );
        assert_eq!(seasonal[2].mean, 200.0);
        assert!(seasonal.windows(2).all(|w| w[0].mean <= w[1].mean));
    }

    #[test]
    fn scatter_passes_rows_through() {
        let mut r = row((2011, 3, 3), 12, 77);
        r.temperature = Some(0.81);
        r.weather = Some(Weather::Clear);
        let rows = [r];
        let refs: Vec<&Rental> = rows.iter().collect();
        assert_eq!(
            temperature_points(&refs),
            vec![TemperaturePoint {
                temperature: 0.81,
                total_count: 77,
                weather: Some(Weather::Clear)
            }]
        );
    }

    #[test]
    fn unreadable_counts_are_skipped() {
        let mut blank = row((2011, 1, 1), 8, 0);
        blank.total_count = None;
        let rows = [row((2011, 1, 1), 8, 10), blank, row((2011, 1, 1), 9, 20)];
        let refs: Vec<&Rental> = rows.iter().collect();

        assert_eq!(daily_totals(&refs)[0].total, 30);
        assert_eq!(
            hourly_means(&refs, WORKING_HOURS),
            vec![
                HourlyMean { hour: 8, mean: 10.0 },
                HourlyMean { hour: 9, mean: 20.0 }
            ]
        );
        assert_eq!(temperature_points(&refs).len(), 2);
    }

    #[test]
    fn group_of_only_unreadable_counts_is_dropped() {
        let mut blank = with_season(row((2011, 1, 1), 8, 0), Season::Spring);
        blank.total_count = None;
        let rows = [blank, with_season(row((2011, 7, 1), 9, 50), Season::Summer)];
        let refs: Vec<&Rental> = rows.iter().collect();

        let daily = daily_totals(&refs);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].total, 0);
        assert_eq!(hourly_means(&refs, WORKING_HOURS), vec![HourlyMean { hour: 9, mean: 50.0 }]);
        let seasons: Vec<Season> = seasonal_means(&refs).iter().map(|s| s.season).collect();
        assert_eq!(seasons, vec![Season::Summer]);
    }

    #[test]
    fn scatter_skips_rows_without_temperature() {
        let mut r = row((2011, 3, 3), 12, 77);
        r.temperature = None;
        let rows = [r, row((2011, 3, 3), 13, 5)];
        let refs: Vec<&Rental> = rows.iter().collect();
        let points = temperature_points(&refs);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total_count, 5);
    }
}
