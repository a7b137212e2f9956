use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::condition::{ConditionCategory, classify};

/// What to look up: a free-form place name or exact coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Query(String),
    Coordinates { lat: f64, lon: f64 },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Query(q) => f.write_str(q),
            Location::Coordinates { lat, lon } => write!(f, "{lat:.4}, {lon:.4}"),
        }
    }
}

/// A geocoded place, as returned by location search and reverse lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn label(&self) -> String {
        match self.state.as_deref() {
            Some(state) if !state.is_empty() && state != self.name => {
                format!("{}, {}, {}", self.name, state, self.country)
            }
            _ => format!("{}, {}", self.name, self.country),
        }
    }

    pub fn location(&self) -> Location {
        Location::Coordinates { lat: self.lat, lon: self.lon }
    }
}

/// Observed conditions at a single place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub country: String,
    pub condition_code: i32,
    /// Provider's main condition text, e.g. "Rain".
    pub condition: String,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub observed_at: DateTime<Utc>,
    /// Seconds east of UTC for the observed place.
    pub utc_offset_secs: i32,
}

impl CurrentWeather {
    pub fn category(&self) -> ConditionCategory {
        classify(self.condition_code)
    }

    pub fn location_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// One 3-hourly forecast reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Epoch seconds.
    pub timestamp: i64,
    pub temperature: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_direction: Option<f64>,
    pub condition_code: i32,
    pub condition: String,
    pub description: String,
    /// 0.0 ..= 1.0
    pub precipitation_probability: Option<f64>,
}

impl WeatherSample {
    pub fn category(&self) -> ConditionCategory {
        classify(self.condition_code)
    }

    pub fn local_time(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        DateTime::from_timestamp(self.timestamp, 0).map(|utc| utc.with_timezone(&offset))
    }
}

/// Forecast payload for one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub country: String,
    pub utc_offset_secs: i32,
    pub samples: Vec<WeatherSample>,
}

impl Forecast {
    /// The place's UTC offset; out-of-range offsets fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(utc)
    }
}

pub(crate) fn utc() -> FixedOffset {
    Utc.fix()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub direction: Option<f64>,
}

/// Aggregated view of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Short weekday name, e.g. "Mon".
    pub day_label: String,
    pub date: NaiveDate,
    pub current_temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub condition_code: i32,
    pub description: String,
    pub humidity: u8,
    pub wind: Wind,
    pub precipitation_chance: f64,
}

impl DailySummary {
    pub fn category(&self) -> ConditionCategory {
        classify(self.condition_code)
    }
}

/// A single suggestion shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub text: &'static str,
}

impl Recommendation {
    pub const fn new(icon: &'static str, text: &'static str) -> Self {
        Self { icon, text }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}
