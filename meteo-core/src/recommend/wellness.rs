use super::{
    catalog::{COZY, HEAT, LIGHT_ACTIVITY, MILD_OUTDOORS, OUTDOORS, RAINY_DAY, STARGAZING, WINTER},
    is_night, round_half_up,
    rules::{Effect, Rule, evaluate},
};
use crate::{
    condition::{ConditionCategory, coarse},
    model::{CurrentWeather, Recommendation},
};

const MAX_ITEMS: usize = 3;

struct WellnessContext {
    temperature: f64,
    condition: String,
    hour: u32,
}

impl WellnessContext {
    fn rain(&self) -> bool {
        self.condition.contains("rain")
    }

    fn snow(&self) -> bool {
        !self.rain() && self.condition.contains("snow")
    }
}

type WellnessRule = Rule<WellnessContext>;

static RULES: &[WellnessRule] = &[
    WellnessRule::new("default", |_| true, Effect::Replace(OUTDOORS)),
    WellnessRule::new("cold", |c| c.temperature <= 5.0, Effect::Replace(COZY)),
    WellnessRule::new("cool", |c| c.temperature > 5.0 && c.temperature <= 15.0, Effect::Append(LIGHT_ACTIVITY)),
    WellnessRule::new("mild", |c| c.temperature > 15.0 && c.temperature <= 25.0, Effect::Append(MILD_OUTDOORS)),
    WellnessRule::new("hot", |c| c.temperature > 25.0, Effect::Replace(HEAT)),
    WellnessRule::new("rain", WellnessContext::rain, Effect::Replace(RAINY_DAY)),
    WellnessRule::new("snow", WellnessContext::snow, Effect::Replace(WINTER)),
    WellnessRule::new(
        "clear night",
        |c| !c.rain() && !c.snow() && c.condition.contains("clear") && is_night(c.hour),
        Effect::Append(STARGAZING),
    ),
];

/// Deterministic greeting suggestions.
///
/// `condition` is matched by substring, so both a category name ("rain") and
/// the provider's main condition text ("Rain") work. Temperature is rounded
/// to the nearest degree before banding. Always at most three entries.
pub fn recommend_wellness(temperature: f64, condition: &str, hour: u32) -> Vec<Recommendation> {
    let ctx = WellnessContext {
        temperature: round_half_up(temperature),
        condition: condition.to_lowercase(),
        hour,
    };

    let mut list = evaluate(RULES, &ctx);
    list.truncate(MAX_ITEMS);
    list
}

/// Category name the wellness rules see for a condition code.
///
/// Drizzle counts as rain; thunderstorms, haze and unknown codes are "other".
pub fn wellness_condition(code: i32) -> &'static str {
    match coarse(code) {
        Some(
            category @ (ConditionCategory::Clear
            | ConditionCategory::Rain
            | ConditionCategory::Snow
            | ConditionCategory::Clouds),
        ) => category.as_str(),
        _ => "other",
    }
}

/// [`recommend_wellness`] for an optional reading; no weather means no suggestions.
pub fn wellness_for(weather: Option<&CurrentWeather>, hour: u32) -> Vec<Recommendation> {
    weather
        .map(|w| recommend_wellness(w.temperature, wellness_condition(w.condition_code), hour))
        .unwrap_or_default()
}
