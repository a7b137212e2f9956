use crate::{
    Config,
    error::ProviderError,
    model::{CurrentWeather, Forecast, Location, Place},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// How many 3-hourly forecast samples to request.
///
/// The free forecast endpoint returns at most five days (40 samples). "Load
/// more" grows the window eight samples (one day) at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow(u32);

impl SampleWindow {
    pub const STEP: u32 = 8;
    pub const MAX: u32 = 40;
    /// Window used when loading more before anything was fetched.
    pub const INITIAL: u32 = 24;

    pub fn new(count: u32) -> Self {
        Self(count.clamp(1, Self::MAX))
    }

    pub const fn full() -> Self {
        Self(Self::MAX)
    }

    /// The next window after `loaded` samples are already on screen.
    pub fn after(loaded: Option<usize>) -> Self {
        match loaded {
            Some(n) => Self::new(u32::try_from(n).unwrap_or(Self::MAX).saturating_add(Self::STEP)),
            None => Self::new(Self::INITIAL),
        }
    }

    pub fn more(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    pub fn is_exhausted(&self) -> bool {
        self.0 >= Self::MAX
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::full()
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &Location) -> Result<CurrentWeather, ProviderError>;

    async fn forecast(&self, location: &Location, window: SampleWindow) -> Result<Forecast, ProviderError>;

    /// Place suggestions for a partial name.
    async fn search(&self, query: &str) -> Result<Vec<Place>, ProviderError>;

    /// Nearest named place to a coordinate, if any (open ocean has none).
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<Place>, ProviderError>;
}

/// Construct the OpenWeather provider from config (or `OPENWEATHER_API_KEY`).
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    provider_for_key(config.resolve_api_key())
}

fn provider_for_key(api_key: Option<String>) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    let api_key = api_key.ok_or(ProviderError::MissingApiKey)?;
    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_clamped_to_provider_ceiling() {
        assert_eq!(SampleWindow::new(0).count(), 1);
        assert_eq!(SampleWindow::new(100).count(), 40);
        assert!(SampleWindow::full().is_exhausted());
    }

    #[test]
    fn load_more_grows_by_a_day() {
        assert_eq!(SampleWindow::after(None).count(), 24);
        assert_eq!(SampleWindow::after(Some(16)).count(), 24);
        assert_eq!(SampleWindow::after(Some(36)).count(), 40);
        assert_eq!(SampleWindow::new(8).more().more().count(), 24);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let key = Config::default().api_key_with_override(None);

        let err = provider_for_key(key).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
