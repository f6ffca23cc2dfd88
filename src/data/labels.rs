use chrono::{Month, Weekday};

// ---------------------------------------------------------------------------
// Category – integer code ↔ descriptive label
// ---------------------------------------------------------------------------

/// A categorical column stored in the source file as a small integer code.
///
/// Decoding is a fixed lookup: codes outside the known set yield `None`,
/// which the dashboard shows as an empty label.
pub trait Category: Sized + Copy {
    fn from_code(code: i64) -> Option<Self>;
    fn label(self) -> &'static str;
}

/// Label for an optional category, empty when the code was not recognised.
pub fn label_or_blank<C: Category>(value: Option<C>) -> &'static str {
    value.map(Category::label).unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Category for Season {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weather {
    Clear,
    Mist,
    LightRainSnow,
    HeavyRainIce,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Mist,
        Weather::LightRainSnow,
        Weather::HeavyRainIce,
    ];
}

impl Category for Weather {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Weather::Clear),
            2 => Some(Weather::Mist),
            3 => Some(Weather::LightRainSnow),
            4 => Some(Weather::HeavyRainIce),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Mist => "Mist",
            Weather::LightRainSnow => "Light Rain/Snow",
            Weather::HeavyRainIce => "Heavy Rain/Ice",
        }
    }
}

/// Dataset year: code 0 is 2011, code 1 is 2012.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Y2011,
    Y2012,
}

impl Category for Year {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Year::Y2011),
            1 => Some(Year::Y2012),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Year::Y2011 => "2011",
            Year::Y2012 => "2012",
        }
    }
}

/// Months use the calendar numbering, 1 = January.
impl Category for Month {
    fn from_code(code: i64) -> Option<Self> {
        let code = u8::try_from(code).ok()?;
        Month::try_from(code).ok()
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

/// Weekday codes count from Sunday: 0 = Sunday, 6 = Saturday.
impl Category for Weekday {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }
}

/// Parse a raw category cell into its integer code.
///
/// Accepts `"3"` as well as the `"3.0"` form written by float-typed exports.
/// Anything else (blank, text, fractional) has no code.
pub fn parse_code(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Some(i);
    }
    let f = raw.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}

/// Decode a raw cell straight to its category.
pub fn decode<C: Category>(raw: &str) -> Option<C> {
    parse_code(raw).and_then(C::from_code)
}
