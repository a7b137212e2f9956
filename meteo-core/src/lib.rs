//! Core library for the `meteo` weather dashboard.
//!
//! This crate defines:
//! - Condition classification and theme selection
//! - Daily aggregation of 3-hourly forecasts
//! - Rule-based wellness and activity recommendations
//! - Configuration and the OpenWeather provider
//!
//! Everything outside `provider` and `config` is pure and synchronous.

pub mod aggregate;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod theme;

pub use aggregate::{TimeRange, aggregate, daily_forecast, first_n};
pub use condition::{ConditionCategory, classify};
pub use config::Config;
pub use error::ProviderError;
pub use model::{CurrentWeather, DailySummary, Forecast, Location, Place, Recommendation, WeatherSample, Wind};
pub use provider::{SampleWindow, WeatherProvider};
pub use recommend::{recommend_activities, recommend_wellness};
pub use theme::{Palette, ThemeMode, theme_for};
