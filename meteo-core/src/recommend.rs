//! Rule-based suggestions derived from the current weather.
//!
//! Two independent policies:
//! - [`wellness`]: small deterministic catalog used next to the greeting.
//! - [`activity`]: broader catalog, shuffled before the top three are taken.
//!
//! Both return an empty list when there is no weather to work from.

pub mod activity;
pub mod catalog;
pub mod greeting;
pub mod guidance;
pub mod rules;
pub mod wellness;

pub use activity::{
    ActivityInput, KeepOrder, RandomShuffler, Shuffler, ThreadShuffler, activities_for, recommend_activities,
    recommend_activities_with,
};
pub use guidance::{Guidance, guidance_for};
pub use wellness::{recommend_wellness, wellness_for};

/// Late evening and small hours, when stargazing is on offer.
pub(crate) fn is_night(hour: u32) -> bool {
    hour >= 20 || hour <= 5
}

/// Round to the nearest whole degree, halves upward.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
