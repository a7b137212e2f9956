use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Coarse grouping of OpenWeather condition codes.
///
/// See <https://openweathermap.org/weather-conditions> for the numeric taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Clear,
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clouds,
}

impl ConditionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Clear => "clear",
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Drizzle => "drizzle",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Atmosphere => "atmosphere",
            ConditionCategory::Clouds => "clouds",
        }
    }

    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Clear,
            ConditionCategory::Thunderstorm,
            ConditionCategory::Drizzle,
            ConditionCategory::Rain,
            ConditionCategory::Snow,
            ConditionCategory::Atmosphere,
            ConditionCategory::Clouds,
        ]
    }

    /// Glyph used for forecast rows. Clear skies switch to a moon at night.
    pub fn icon(&self, hour: u32) -> &'static str {
        match self {
            ConditionCategory::Clear if !(6..18).contains(&hour) => "🌙",
            ConditionCategory::Clear => "☀️",
            ConditionCategory::Thunderstorm => "⛈️",
            ConditionCategory::Drizzle => "🌦️",
            ConditionCategory::Rain => "🌧️",
            ConditionCategory::Snow => "❄️",
            ConditionCategory::Atmosphere => "🌫️",
            ConditionCategory::Clouds => "☁️",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ConditionCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        ConditionCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| anyhow::anyhow!("Unknown condition category '{value}'."))
    }
}

/// Map a provider condition code to its category.
///
/// Total: codes outside the published ranges resolve to [`ConditionCategory::Clouds`].
pub fn classify(code: i32) -> ConditionCategory {
    match code {
        200..=299 => ConditionCategory::Thunderstorm,
        300..=399 => ConditionCategory::Drizzle,
        500..=599 => ConditionCategory::Rain,
        600..=699 => ConditionCategory::Snow,
        700..=799 => ConditionCategory::Atmosphere,
        800 => ConditionCategory::Clear,
        _ => ConditionCategory::Clouds,
    }
}

/// Drizzle and rain together, the grouping recommendation tables key on.
pub fn is_rain_like(code: i32) -> bool {
    (300..600).contains(&code)
}

/// Coarse grouping shared by themes, guidance and recommendations.
///
/// Everything in `300..600` reads as rain. Returns `None` for codes outside
/// every published range, which [`classify`] would otherwise report as clouds.
pub fn coarse(code: i32) -> Option<ConditionCategory> {
    if is_rain_like(code) {
        return Some(ConditionCategory::Rain);
    }

    match classify(code) {
        ConditionCategory::Clouds if code <= 800 => None,
        category => Some(category),
    }
}
