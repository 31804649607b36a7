//! Weather condition classification.
//!
//! Maps WMO numeric weather codes (as reported by the Open-Meteo API) to a
//! small fixed set of display labels.

use std::fmt;

/// Sky/precipitation condition, bucketed from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Drizzle,
    Rainy,
    Snowy,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    Unknown,
}

impl Condition {
    /// Classify a WMO weather code.
    ///
    /// Codes outside the documented ranges map to [`Condition::Unknown`].
    pub fn from_wmo(code: u16) -> Self {
        match code {
            0 => Condition::ClearSky,
            1..=3 => Condition::PartlyCloudy,
            45 | 48 => Condition::Foggy,
            51..=57 => Condition::Drizzle,
            61..=67 => Condition::Rainy,
            71..=77 => Condition::Snowy,
            80..=82 => Condition::RainShowers,
            85..=86 => Condition::SnowShowers,
            95..=99 => Condition::Thunderstorm,
            _ => Condition::Unknown,
        }
    }

    /// Returns the display label for this condition.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::ClearSky => "Clear Sky",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Foggy => "Foggy",
            Condition::Drizzle => "Drizzle",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::RainShowers => "Rain Showers",
            Condition::SnowShowers => "Snow Showers",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
