use anyhow::{Context, anyhow};
use chrono::{FixedOffset, Offset, Timelike, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode, Select, Text};

use meteo_core::{
    Config, Forecast, Location, ProviderError, SampleWindow, ThemeMode, TimeRange, WeatherProvider, daily_forecast,
    provider::provider_from_config,
    recommend::{ThreadShuffler, activities_for, greeting::greeting, guidance_for, wellness_for},
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Weather dashboard with activity recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Fixed greeting suggestions.
    Wellness,
    /// Broader, shuffled activity ideas.
    Activities,
}

#[derive(Debug, clap::Args)]
pub struct PlaceArgs {
    /// Place name, e.g. "Tunis" or "Paris,FR". Falls back to the configured default.
    pub place: Option<String>,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl PlaceArgs {
    fn resolve(&self, config: &Config) -> anyhow::Result<Location> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Ok(Location::Coordinates { lat, lon });
        }

        self.place
            .clone()
            .or_else(|| config.default_location.clone())
            .map(Location::Query)
            .ok_or_else(|| {
                anyhow!(
                    "No place given and no default location configured.\n\
                     Hint: pass a place name, --lat/--lon, or run `meteo configure`."
                )
            })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the API key, default time range and theme.
    Configure,

    /// Current weather, greeting and recommendations.
    Now {
        #[command(flatten)]
        place: PlaceArgs,

        #[arg(long, value_enum, default_value_t = Policy::Wellness)]
        policy: Policy,

        /// Hour of day to evaluate for (defaults to the place's local hour).
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// Daily forecast summaries.
    Forecast {
        #[command(flatten)]
        place: PlaceArgs,

        /// Number of days to show: 3, 5 or 7.
        #[arg(long)]
        days: Option<u8>,
    },

    /// 3-hourly forecast strip.
    Hourly {
        #[command(flatten)]
        place: PlaceArgs,

        /// Load more samples, one day per step.
        #[arg(long, default_value_t = 0)]
        more: u32,
    },

    /// Suggest places matching a name.
    Search {
        query: String,
    },

    /// Resolve a coordinate to a place and show its weather.
    Pick {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        if let Command::Configure = self.command {
            return configure(&mut config);
        }

        let provider = provider_from_config(&config)?;

        match self.command {
            Command::Configure => Ok(()),
            Command::Now { place, policy, hour } => {
                let location = place.resolve(&config)?;
                show_now(provider.as_ref(), &config, &location, policy, hour).await
            }
            Command::Forecast { place, days } => {
                let location = place.resolve(&config)?;
                let range = match days {
                    Some(d) => TimeRange::try_from(d)?,
                    None => config.time_range,
                };
                show_forecast(provider.as_ref(), &config, &location, range).await
            }
            Command::Hourly { place, more } => {
                let location = place.resolve(&config)?;
                show_hourly(provider.as_ref(), &config, &location, more).await
            }
            Command::Search { query } => {
                let places = provider.search(&query).await?;
                render::places(&places);
                Ok(())
            }
            Command::Pick { lat, lon } => pick(provider.as_ref(), &config, lat, lon).await,
        }
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(key);

    let ranges = TimeRange::all().to_vec();
    let start = ranges.iter().position(|r| *r == config.time_range).unwrap_or(0);
    config.time_range = Select::new("Default forecast range:", ranges)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read time range")?;

    let modes = vec![ThemeMode::Light, ThemeMode::Dark];
    let start = modes.iter().position(|m| *m == config.theme_mode).unwrap_or(0);
    config.theme_mode = Select::new("Theme:", modes)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read theme mode")?;

    let default = config.default_location.clone().unwrap_or_default();
    let place = Text::new("Default location (empty for none):")
        .with_default(&default)
        .prompt()
        .context("Failed to read default location")?;
    config.default_location = Some(place.trim().to_string()).filter(|p| !p.is_empty());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn local_hour(utc_offset_secs: i32) -> u32 {
    let offset = FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset).hour()
}

async fn show_now(
    provider: &dyn WeatherProvider,
    config: &Config,
    location: &Location,
    policy: Policy,
    hour: Option<u32>,
) -> anyhow::Result<()> {
    let current = provider.current(location).await?;
    let hour = hour.unwrap_or_else(|| local_hour(current.utc_offset_secs));

    println!("{}", greeting(Some(&current), hour));
    render::current(&current, config.theme_mode, hour);

    let recs = match policy {
        Policy::Wellness => wellness_for(Some(&current), hour),
        Policy::Activities => activities_for(Some(&current), hour, &mut ThreadShuffler),
    };
    render::recommendations(&recs);

    if let Some(guidance) = guidance_for(Some(&current)) {
        render::guidance(&guidance);
    }

    Ok(())
}

async fn show_forecast(
    provider: &dyn WeatherProvider,
    config: &Config,
    location: &Location,
    range: TimeRange,
) -> anyhow::Result<()> {
    let (current, forecast) =
        tokio::try_join!(provider.current(location), provider.forecast(location, SampleWindow::full()))?;

    render::current(&current, config.theme_mode, local_hour(current.utc_offset_secs));

    let days = daily_forecast(Some(&forecast), range);
    tracing::debug!(samples = forecast.samples.len(), days = days.len(), %range, "forecast ready");
    render::forecast(&forecast.city, &days, range);

    Ok(())
}

/// Fetch the starting window, then grow it one day per `more` step from the
/// number of samples that actually arrived. Stops once a step gains nothing.
async fn load_hourly(
    provider: &dyn WeatherProvider,
    location: &Location,
    start: SampleWindow,
    more: u32,
) -> Result<(Forecast, SampleWindow), ProviderError> {
    let mut window = start;
    let mut forecast = provider.forecast(location, window).await?;

    for _ in 0..more {
        let next = SampleWindow::after(Some(forecast.samples.len()));
        if next.count() <= window.count() {
            break;
        }
        window = next;
        forecast = provider.forecast(location, window).await?;
    }

    Ok((forecast, window))
}

async fn show_hourly(
    provider: &dyn WeatherProvider,
    config: &Config,
    location: &Location,
    more: u32,
) -> anyhow::Result<()> {
    let (forecast, window) = load_hourly(provider, location, config.sample_window(), more).await?;
    tracing::debug!(samples = forecast.samples.len(), window = window.count(), "hourly forecast ready");

    render::hourly(&forecast);

    if !window.is_exhausted() {
        println!("(showing {} samples; pass --more to load another day)", window.count());
    }

    Ok(())
}

async fn pick(provider: &dyn WeatherProvider, config: &Config, lat: f64, lon: f64) -> anyhow::Result<()> {
    let location = Location::Coordinates { lat, lon };
    let (place, current) = tokio::try_join!(provider.reverse(lat, lon), provider.current(&location))?;

    let label = place.map(|p| p.label()).unwrap_or_else(|| "Unknown Location".to_string());
    println!("{label} ({location})");
    render::current(&current, config.theme_mode, local_hour(current.utc_offset_secs));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use meteo_core::{CurrentWeather, Place, WeatherSample};
    use std::sync::Mutex;

    /// Serves as many samples as requested, up to `available`.
    #[derive(Debug)]
    struct CountingProvider {
        available: usize,
        requested: Mutex<Vec<u32>>,
    }

    impl CountingProvider {
        fn new(available: usize) -> Self {
            Self { available, requested: Mutex::new(Vec::new()) }
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }
    }

    fn sample(i: usize) -> WeatherSample {
        WeatherSample {
            timestamp: 1_717_372_800 + i as i64 * 3 * 3600,
            temperature: 20.0,
            temperature_min: 19.0,
            temperature_max: 21.0,
            humidity: 50,
            wind_speed: 2.0,
            wind_direction: None,
            condition_code: 800,
            condition: "Clear".into(),
            description: "clear sky".into(),
            precipitation_probability: None,
        }
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn current(&self, _location: &Location) -> Result<CurrentWeather, ProviderError> {
            Err(ProviderError::Empty { endpoint: "current weather" })
        }

        async fn forecast(&self, _location: &Location, window: SampleWindow) -> Result<Forecast, ProviderError> {
            self.requested.lock().unwrap().push(window.count());
            let n = (window.count() as usize).min(self.available);
            Ok(Forecast {
                city: "Tunis".into(),
                country: "TN".into(),
                utc_offset_secs: 3600,
                samples: (0..n).map(sample).collect(),
            })
        }

        async fn search(&self, _query: &str) -> Result<Vec<Place>, ProviderError> {
            Ok(Vec::new())
        }

        async fn reverse(&self, _lat: f64, _lon: f64) -> Result<Option<Place>, ProviderError> {
            Ok(None)
        }
    }

    fn tunis() -> Location {
        Location::Query("Tunis".into())
    }

    #[tokio::test]
    async fn hourly_starts_with_the_configured_window() {
        let provider = CountingProvider::new(40);
        let (forecast, window) = load_hourly(&provider, &tunis(), Config::default().sample_window(), 0).await.unwrap();

        assert_eq!(provider.requested(), vec![24]);
        assert_eq!(forecast.samples.len(), 24);
        assert!(!window.is_exhausted());
    }

    #[tokio::test]
    async fn load_more_grows_a_day_per_step_up_to_the_ceiling() {
        let provider = CountingProvider::new(40);
        let (forecast, window) = load_hourly(&provider, &tunis(), SampleWindow::after(None), 5).await.unwrap();

        assert_eq!(provider.requested(), vec![24, 32, 40]);
        assert_eq!(forecast.samples.len(), 40);
        assert!(window.is_exhausted());
    }

    #[tokio::test]
    async fn load_more_stops_when_no_new_samples_arrive() {
        let provider = CountingProvider::new(20);
        let (forecast, window) = load_hourly(&provider, &tunis(), SampleWindow::after(None), 3).await.unwrap();

        assert_eq!(provider.requested(), vec![24, 28]);
        assert_eq!(forecast.samples.len(), 20);
        assert_eq!(window.count(), 28);
    }

    #[test]
    fn coordinates_take_precedence_over_names() {
        let place = PlaceArgs { place: Some("Tunis".into()), lat: Some(1.0), lon: Some(2.0) };
        let location = place.resolve(&Config::default()).unwrap();
        assert_eq!(location, Location::Coordinates { lat: 1.0, lon: 2.0 });
    }

    #[test]
    fn falls_back_to_default_location() {
        let mut config = Config::default();
        config.default_location = Some("Sousse".into());

        let place = PlaceArgs { place: None, lat: None, lon: None };
        assert_eq!(place.resolve(&config).unwrap(), Location::Query("Sousse".into()));
    }

    #[test]
    fn missing_place_is_an_error() {
        let place = PlaceArgs { place: None, lat: None, lon: None };
        let err = place.resolve(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("No place given"));
    }

    #[test]
    fn parses_now_with_policy() {
        let cli = Cli::try_parse_from(["meteo", "now", "Tunis", "--policy", "activities", "--hour", "21"]).unwrap();
        match cli.command {
            Command::Now { place, policy, hour } => {
                assert_eq!(place.place.as_deref(), Some("Tunis"));
                assert_eq!(policy, Policy::Activities);
                assert_eq!(hour, Some(21));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert!(Cli::try_parse_from(["meteo", "now", "Tunis", "--hour", "24"]).is_err());
    }

    #[test]
    fn more_belongs_to_the_hourly_view() {
        let cli = Cli::try_parse_from(["meteo", "hourly", "Tunis", "--more", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Hourly { more: 2, .. }));
        assert!(Cli::try_parse_from(["meteo", "forecast", "Tunis", "--more", "2"]).is_err());
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["meteo", "pick", "--lat", "-33.9", "--lon", "18.4"]).unwrap();
        assert!(matches!(cli.command, Command::Pick { lat, .. } if lat == -33.9));
    }
}
