use rand::{Rng, seq::SliceRandom};

use super::{
    catalog::{
        BREEZY, INDOOR_ACTIVE, INDOOR_RELAXING, OUTDOOR_ACTIVE, OUTDOOR_ACTIVE_SHORT, OUTDOOR_RELAXING, SNOW,
        STARGAZING, WARM_RAIN, WATER,
    },
    is_night, round_half_up,
    rules::{Effect, Rule, evaluate},
};
use crate::model::{CurrentWeather, Recommendation};

const MAX_ITEMS: usize = 3;

/// Source of the final ordering of activity suggestions.
pub trait Shuffler {
    fn shuffle(&mut self, items: &mut [Recommendation]);
}

/// Uniform Fisher-Yates shuffle over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomShuffler<R>(pub R);

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, items: &mut [Recommendation]) {
        items.shuffle(&mut self.0);
    }
}

/// Shuffles with the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadShuffler;

impl Shuffler for ThreadShuffler {
    fn shuffle(&mut self, items: &mut [Recommendation]) {
        items.shuffle(&mut rand::thread_rng());
    }
}

/// Leaves rule order untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle(&mut self, _items: &mut [Recommendation]) {}
}

/// Signals feeding the activity rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityInput {
    pub temperature: f64,
    /// Provider's main condition text, e.g. "Clear" or "Rain".
    pub condition: String,
    pub wind_speed: f64,
    pub humidity: u8,
    pub hour: u32,
}

impl ActivityInput {
    pub fn from_current(weather: &CurrentWeather, hour: u32) -> Self {
        Self {
            temperature: weather.temperature,
            condition: weather.condition.clone(),
            wind_speed: weather.wind_speed,
            humidity: weather.humidity,
            hour,
        }
    }
}

struct ActivityContext {
    temperature: f64,
    condition: String,
    wind_speed: f64,
    humidity: u8,
    hour: u32,
}

impl ActivityContext {
    fn mentions(&self, word: &str) -> bool {
        self.condition.contains(word)
    }
}

fn strenuous(rec: &Recommendation) -> bool {
    let text = rec.text.to_lowercase();
    text.contains("run") || text.contains("workout")
}

type ActivityRule = Rule<ActivityContext>;

static RULES: &[ActivityRule] = &[
    ActivityRule::new("freezing", |c| c.temperature <= 0.0, Effect::Append(INDOOR_RELAXING)),
    ActivityRule::new("freezing snow", |c| c.temperature <= 0.0 && c.mentions("snow"), Effect::Append(SNOW)),
    ActivityRule::new("chilly", |c| c.temperature > 0.0 && c.temperature < 10.0, Effect::Append(INDOOR_ACTIVE)),
    ActivityRule::new(
        "chilly outdoors",
        |c| c.temperature > 0.0 && c.temperature < 10.0,
        Effect::Append(OUTDOOR_ACTIVE_SHORT),
    ),
    ActivityRule::new("mild", |c| c.temperature >= 10.0 && c.temperature <= 25.0, Effect::Append(OUTDOOR_ACTIVE)),
    ActivityRule::new("mild relaxing", |c| c.temperature >= 10.0 && c.temperature <= 25.0, Effect::Append(OUTDOOR_RELAXING)),
    ActivityRule::new("hot", |c| c.temperature > 25.0, Effect::Append(WATER)),
    ActivityRule::new(
        "hot cool hours",
        |c| c.temperature > 25.0 && (c.hour < 10 || c.hour > 17),
        Effect::Append(OUTDOOR_ACTIVE),
    ),
    ActivityRule::new("rain", |c| c.mentions("rain"), Effect::Replace(INDOOR_RELAXING)),
    ActivityRule::new("warm rain", |c| c.mentions("rain") && c.temperature > 20.0, Effect::Append(WARM_RAIN)),
    ActivityRule::new("clear night", |c| c.mentions("clear") && is_night(c.hour), Effect::Append(STARGAZING)),
    ActivityRule::new("clear", |c| c.mentions("clear"), Effect::Append(OUTDOOR_RELAXING)),
    ActivityRule::new("breezy", |c| c.wind_speed > 5.0 && c.wind_speed < 15.0, Effect::Append(BREEZY)),
    ActivityRule::new("humid", |c| c.humidity > 80, Effect::Filter(|rec| !strenuous(rec))),
];

/// Every activity the rules allow for `input`, before shuffling and capping.
pub fn eligible_activities(input: &ActivityInput) -> Vec<Recommendation> {
    let ctx = ActivityContext {
        temperature: round_half_up(input.temperature),
        condition: input.condition.to_lowercase(),
        wind_speed: input.wind_speed,
        humidity: input.humidity,
        hour: input.hour,
    };

    evaluate(RULES, &ctx)
}

/// Pick up to three activities, shuffled by `shuffler`.
///
/// The same activity can be eligible through more than one rule; duplicates
/// are kept so that doubly-favoured entries are more likely to be drawn.
pub fn recommend_activities_with<S: Shuffler + ?Sized>(
    input: &ActivityInput,
    shuffler: &mut S,
) -> Vec<Recommendation> {
    let mut list = eligible_activities(input);
    shuffler.shuffle(&mut list);
    list.truncate(MAX_ITEMS);
    list
}

/// Pick up to three activities using the thread-local random generator.
pub fn recommend_activities(
    temperature: f64,
    condition: &str,
    wind_speed: f64,
    humidity: u8,
    hour: u32,
) -> Vec<Recommendation> {
    let input = ActivityInput { temperature, condition: condition.to_string(), wind_speed, humidity, hour };
    recommend_activities_with(&input, &mut ThreadShuffler)
}

/// [`recommend_activities_with`] for an optional reading; no weather means no suggestions.
pub fn activities_for<S: Shuffler + ?Sized>(
    weather: Option<&CurrentWeather>,
    hour: u32,
    shuffler: &mut S,
) -> Vec<Recommendation> {
    weather
        .map(|w| recommend_activities_with(&ActivityInput::from_current(w, hour), shuffler))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn input(temperature: f64, condition: &str, wind_speed: f64, humidity: u8, hour: u32) -> ActivityInput {
        ActivityInput { temperature, condition: condition.into(), wind_speed, humidity, hour }
    }

    fn set(pools: &[&[Recommendation]]) -> HashSet<Recommendation> {
        pools.iter().flat_map(|p| p.iter().copied()).collect()
    }

    #[test]
    fn hot_clear_afternoon_draws_from_water_and_relaxing() {
        let allowed = set(&[WATER, OUTDOOR_RELAXING]);

        for _ in 0..50 {
            let recs = recommend_activities(28.0, "clear", 1.0, 50, 14);
            assert_eq!(recs.len(), 3);
            assert!(recs.iter().all(|r| allowed.contains(r)), "{recs:?}");
        }
    }

    #[test]
    fn eligible_list_keeps_rule_order() {
        let recs = eligible_activities(&input(28.0, "clear", 1.0, 50, 14));
        let expected: Vec<_> = WATER.iter().chain(OUTDOOR_RELAXING).copied().collect();
        assert_eq!(recs, expected);
    }

    #[test]
    fn keep_order_shuffler_makes_selection_deterministic() {
        let recs = recommend_activities_with(&input(28.0, "clear", 1.0, 50, 14), &mut KeepOrder);
        assert_eq!(recs, &WATER[..3]);
    }

    #[test]
    fn seeded_shuffle_is_repeatable() {
        let i = input(15.0, "clouds", 8.0, 40, 12);
        let a = recommend_activities_with(&i, &mut RandomShuffler(StdRng::seed_from_u64(7)));
        let b = recommend_activities_with(&i, &mut RandomShuffler(StdRng::seed_from_u64(7)));
        assert_eq!(a, b);
    }

    #[test]
    fn humid_weather_drops_running_and_workouts() {
        // Chilly: indoor-active (has a workout) plus the run entry.
        for _ in 0..50 {
            let recs = recommend_activities(5.0, "clouds", 1.0, 90, 12);
            assert!(recs.iter().all(|r| !strenuous(r)), "{recs:?}");
        }

        let eligible = eligible_activities(&input(5.0, "clouds", 1.0, 90, 12));
        assert_eq!(eligible.len(), INDOOR_ACTIVE.len() - 1 + OUTDOOR_ACTIVE_SHORT.len() - 1);
    }

    #[test]
    fn humidity_threshold_is_strict() {
        let eligible = eligible_activities(&input(5.0, "clouds", 1.0, 80, 12));
        assert!(eligible.iter().any(strenuous));
    }

    #[test]
    fn freezing_snow_adds_snow_pool() {
        let eligible = eligible_activities(&input(-3.0, "Snow", 1.0, 50, 12));
        assert_eq!(set(&[eligible.as_slice()]), set(&[INDOOR_RELAXING, SNOW]));

        let dry = eligible_activities(&input(-3.0, "Clouds", 1.0, 50, 12));
        assert_eq!(dry, INDOOR_RELAXING);
    }

    #[test]
    fn rain_replaces_everything_before_it() {
        let eligible = eligible_activities(&input(15.0, "Rain", 1.0, 50, 12));
        assert_eq!(eligible, INDOOR_RELAXING);

        let warm = eligible_activities(&input(22.0, "rain", 1.0, 50, 12));
        assert_eq!(warm.last(), Some(&WARM_RAIN[0]));
        assert_eq!(warm.len(), INDOOR_RELAXING.len() + 1);
    }

    #[test]
    fn rain_keeps_later_wind_rule() {
        let eligible = eligible_activities(&input(15.0, "rain", 8.0, 50, 12));
        assert!(eligible.ends_with(BREEZY));
    }

    #[test]
    fn hot_mornings_and_evenings_add_outdoor_active() {
        let morning = eligible_activities(&input(30.0, "clouds", 1.0, 50, 8));
        assert_eq!(set(&[morning.as_slice()]), set(&[WATER, OUTDOOR_ACTIVE]));

        let noon = eligible_activities(&input(30.0, "clouds", 1.0, 50, 12));
        assert_eq!(noon, WATER);

        let five_pm = eligible_activities(&input(30.0, "clouds", 1.0, 50, 17));
        assert_eq!(five_pm, WATER);
    }

    #[test]
    fn clear_night_adds_stargazing() {
        let eligible = eligible_activities(&input(15.0, "clear", 1.0, 50, 22));
        assert!(eligible.contains(&STARGAZING[0]));

        let day = eligible_activities(&input(15.0, "clear", 1.0, 50, 12));
        assert!(!day.contains(&STARGAZING[0]));
    }

    #[test]
    fn wind_band_is_exclusive() {
        for (speed, expected) in [(5.0, false), (5.1, true), (14.9, true), (15.0, false)] {
            let eligible = eligible_activities(&input(15.0, "clouds", speed, 50, 12));
            assert_eq!(eligible.ends_with(BREEZY), expected, "wind {speed}");
        }
    }

    #[test]
    fn result_never_exceeds_three() {
        let recs = recommend_activities(-5.0, "clouds", 1.0, 50, 12);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn missing_weather_yields_empty_list() {
        assert!(activities_for(None, 12, &mut ThreadShuffler).is_empty());
    }
}
