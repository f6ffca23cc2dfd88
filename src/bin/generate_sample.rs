use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// One hourly row in the dashboard's input layout.
#[derive(Serialize)]
struct Row {
    instant: u32,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    hr: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    total_count: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Dataset season code: 1 spring, 2 summer, 3 fall, 4 winter.
fn season_code(date: NaiveDate) -> u8 {
    match (date.month(), date.day()) {
        (3, 21..=31) | (4 | 5, _) | (6, 1..=20) => 1,
        (6, _) | (7 | 8, _) | (9, 1..=22) => 2,
        (9, _) | (10 | 11, _) | (12, 1..=20) => 3,
        _ => 4,
    }
}

/// Relative demand by hour: commuter peaks at 8 and 17-18.
fn hour_profile(hr: u32, working: bool) -> f64 {
    let commute = |h: f64, peak: f64, width: f64| (-(h - peak).powi(2) / (2.0 * width * width)).exp();
    let h = f64::from(hr);
    if working {
        0.05 + 0.9 * commute(h, 8.0, 1.0) + commute(h, 17.5, 1.3) + 0.35 * commute(h, 12.5, 2.5)
    } else {
        0.05 + 0.8 * commute(h, 14.0, 3.5)
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("all_data.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let first = NaiveDate::from_ymd_opt(2011, 1, 1).context("invalid start date")?;
    let mut instant = 0u32;

    for offset in 0..731u64 {
        let date = first
            .checked_add_days(Days::new(offset))
            .context("date out of range")?;
        let weekday = date.weekday().num_days_from_sunday();
        let working = (1..=5).contains(&weekday);
        let year_growth = if date.year() == 2011 { 1.0 } else { 1.6 };

        // Seasonal temperature curve peaking in late July.
        let doy = f64::from(date.ordinal());
        let base_temp = 0.5 - 0.3 * (2.0 * std::f64::consts::PI * (doy + 10.0) / 365.0).cos();
        let weathersit: u8 = match rng.next_f64() {
            p if p < 0.62 => 1,
            p if p < 0.92 => 2,
            p if p < 0.995 => 3,
            _ => 4,
        };
        let weather_factor = [1.0, 0.85, 0.45, 0.2][weathersit as usize - 1];

        for hr in 0..24u32 {
            let temp = (base_temp + rng.gauss(0.0, 0.04)).clamp(0.02, 1.0);
            let demand = 420.0 * hour_profile(hr, working) * year_growth * weather_factor * (0.4 + temp);
            let total_count = (demand + rng.gauss(0.0, demand.sqrt())).max(1.0).round() as u64;

            instant += 1;
            writer
                .serialize(Row {
                    instant,
                    dteday: date.format("%Y-%m-%d").to_string(),
                    season: season_code(date),
                    yr: u8::from(date.year() == 2012),
                    mnth: date.month(),
                    hr,
                    holiday: 0,
                    weekday,
                    workingday: u8::from(working),
                    weathersit,
                    temp: (temp * 100.0).round() / 100.0,
                    total_count,
                })
                .context("writing row")?;
        }
    }

    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {instant} hourly rows to {}; place it next to the bike-dashboard binary",
        output_path.display()
    );
    Ok(())
}
