//! Groups 3-hourly forecast samples into per-day summaries.
//!
//! The most recent sample of a day wins for the "current" temperature, the
//! displayed condition, humidity and wind. Min/max start at the first
//! sample's temperature and then track later `temperature_min`/`temperature_max`.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, convert::TryFrom, fmt};

use crate::model::{DailySummary, Forecast, WeatherSample, Wind};

/// How many days of forecast to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeRange {
    ThreeDays,
    FiveDays,
    #[default]
    Week,
}

impl TimeRange {
    pub const fn days(&self) -> usize {
        match self {
            TimeRange::ThreeDays => 3,
            TimeRange::FiveDays => 5,
            TimeRange::Week => 7,
        }
    }

    pub const fn all() -> &'static [TimeRange] {
        &[TimeRange::ThreeDays, TimeRange::FiveDays, TimeRange::Week]
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Week => f.write_str("week"),
            other => write!(f, "{} days", other.days()),
        }
    }
}

impl TryFrom<u8> for TimeRange {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(TimeRange::ThreeDays),
            5 => Ok(TimeRange::FiveDays),
            7 => Ok(TimeRange::Week),
            _ => Err(anyhow::anyhow!(
                "Unsupported time range '{value}'. Supported ranges: 3, 5 or 7 days."
            )),
        }
    }
}

impl From<TimeRange> for u8 {
    fn from(range: TimeRange) -> Self {
        range.days() as u8
    }
}

/// Collapse samples into one summary per local calendar day, ascending by date.
///
/// `offset` is the forecast location's UTC offset; day boundaries follow the
/// place's own calendar. Samples whose timestamp cannot be represented are skipped.
pub fn aggregate(samples: &[WeatherSample], offset: FixedOffset) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for sample in samples {
        let Some(local) = sample.local_time(offset) else {
            tracing::warn!(timestamp = sample.timestamp, "skipping sample with out-of-range timestamp");
            continue;
        };
        let date = local.date_naive();

        days.entry(date)
            .and_modify(|day| merge_sample(day, sample))
            .or_insert_with(|| start_day(date, &local.format("%a").to_string(), sample));
    }

    tracing::debug!(samples = samples.len(), days = days.len(), "aggregated forecast");
    days.into_values().collect()
}

/// Keep the first `range.days()` summaries. Never reorders or fills gaps.
pub fn first_n(mut days: Vec<DailySummary>, range: TimeRange) -> Vec<DailySummary> {
    days.truncate(range.days());
    days
}

/// Aggregate an optional forecast and apply the time range in one step.
///
/// A missing forecast yields no days.
pub fn daily_forecast(forecast: Option<&Forecast>, range: TimeRange) -> Vec<DailySummary> {
    match forecast {
        Some(forecast) => first_n(aggregate(&forecast.samples, forecast.offset()), range),
        None => Vec::new(),
    }
}

fn start_day(date: NaiveDate, label: &str, sample: &WeatherSample) -> DailySummary {
    DailySummary {
        day_label: label.to_string(),
        date,
        current_temperature: sample.temperature,
        min_temperature: sample.temperature,
        max_temperature: sample.temperature,
        condition_code: sample.condition_code,
        description: sample.description.clone(),
        humidity: sample.humidity,
        wind: Wind { speed: sample.wind_speed, direction: sample.wind_direction },
        precipitation_chance: sample.precipitation_probability.unwrap_or(0.0),
    }
}

fn merge_sample(day: &mut DailySummary, sample: &WeatherSample) {
    day.max_temperature = day.max_temperature.max(sample.temperature_max);
    day.min_temperature = day.min_temperature.min(sample.temperature_min);
    day.current_temperature = sample.temperature;
    day.condition_code = sample.condition_code;
    day.description.clone_from(&sample.description);
    day.humidity = sample.humidity;
    day.wind = Wind { speed: sample.wind_speed, direction: sample.wind_direction };
    day.precipitation_chance = sample.precipitation_probability.unwrap_or(0.0);
}
