use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

use crate::data::labels::Weather;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Continuous "Blues" scale for bar values
// ---------------------------------------------------------------------------

/// Pale end of the blue scale.
const BLUES_LOW: (f32, f32, f32) = (0.871, 0.922, 0.969);
/// Dark end of the blue scale.
const BLUES_HIGH: (f32, f32, f32) = (0.031, 0.188, 0.420);

/// Colour for `value` on a light-to-dark blue ramp spanning `[min, max]`.
pub fn blues(value: f64, min: f64, max: f64) -> Color32 {
    let span = max - min;
    let t = if span.abs() < f64::EPSILON {
        1.0
    } else {
        ((value - min) / span).clamp(0.0, 1.0) as f32
    };
    let low: LinSrgb = Srgb::new(BLUES_LOW.0, BLUES_LOW.1, BLUES_LOW.2).into_linear();
    let high: LinSrgb = Srgb::new(BLUES_HIGH.0, BLUES_HIGH.1, BLUES_HIGH.2).into_linear();
    to_color32(Srgb::from_linear(low.mix(high, t)))
}

// ---------------------------------------------------------------------------
// Weather colours for the scatter legend
// ---------------------------------------------------------------------------

/// Fixed colour per weather condition, so legends match across runs.
#[derive(Debug, Clone)]
pub struct WeatherColors {
    mapping: BTreeMap<Weather, Color32>,
    default_color: Color32,
}

impl Default for WeatherColors {
    fn default() -> Self {
        let palette = generate_palette(Weather::ALL.len());
        WeatherColors {
            mapping: Weather::ALL.into_iter().zip(palette).collect(),
            default_color: Color32::GRAY,
        }
    }
}

impl WeatherColors {
    /// Unlabelled points are drawn grey.
    pub fn color_for(&self, weather: Option<Weather>) -> Color32 {
        weather
            .and_then(|w| self.mapping.get(&w).copied())
            .unwrap_or(self.default_color)
    }
}
