use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{ProviderError, truncate_body},
    model::{CurrentWeather, Forecast, Location, Place, WeatherSample},
};

use super::{SampleWindow, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const SEARCH_LIMIT: u8 = 5;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint, %url, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Http { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Http { endpoint, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status { endpoint, status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|source| ProviderError::Parse { endpoint, source })
    }
}

fn location_params(location: &Location) -> Vec<(&'static str, String)> {
    match location {
        Location::Query(q) => vec![("q", q.clone())],
        Location::Coordinates { lat, lon } => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    humidity: u8,
    #[serde(default)]
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i32,
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    #[serde(default)]
    timezone: i32,
    #[serde(default)]
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    pop: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwPlace {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
    state: Option<String>,
}

impl From<OwPlace> for Place {
    fn from(p: OwPlace) -> Self {
        Place { name: p.name, country: p.country, state: p.state, lat: p.lat, lon: p.lon }
    }
}

impl OwForecastEntry {
    fn into_sample(self) -> Option<WeatherSample> {
        let weather = self.weather.into_iter().next()?;

        Some(WeatherSample {
            timestamp: self.dt,
            temperature: self.main.temp,
            temperature_min: self.main.temp_min.unwrap_or(self.main.temp),
            temperature_max: self.main.temp_max.unwrap_or(self.main.temp),
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            wind_direction: self.wind.deg,
            condition_code: weather.id,
            condition: weather.main,
            description: weather.description,
            precipitation_probability: self.pop,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &Location) -> Result<CurrentWeather, ProviderError> {
        let mut params = location_params(location);
        params.push(("units", "metric".to_string()));

        let parsed: OwCurrentResponse = self.get_json("current weather", "/data/2.5/weather", &params).await?;

        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(ProviderError::Empty { endpoint: "current weather" })?;

        let observed_at = DateTime::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

        tracing::info!(place = %parsed.name, code = weather.id, "fetched current weather");

        Ok(CurrentWeather {
            name: parsed.name,
            country: parsed.sys.country.unwrap_or_default(),
            condition_code: weather.id,
            condition: weather.main,
            description: weather.description,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            humidity: parsed.main.humidity,
            pressure: parsed.main.pressure,
            wind_speed: parsed.wind.speed,
            observed_at,
            utc_offset_secs: parsed.timezone,
        })
    }

    async fn forecast(&self, location: &Location, window: SampleWindow) -> Result<Forecast, ProviderError> {
        let mut params = location_params(location);
        params.push(("units", "metric".to_string()));
        params.push(("cnt", window.count().to_string()));

        let parsed: OwForecastResponse = self.get_json("forecast", "/data/2.5/forecast", &params).await?;

        let received = parsed.list.len();
        let samples: Vec<_> = parsed.list.into_iter().filter_map(OwForecastEntry::into_sample).collect();

        if samples.len() < received {
            tracing::warn!(dropped = received - samples.len(), "forecast entries without a condition were skipped");
        }
        tracing::debug!(city = %parsed.city.name, samples = samples.len(), "fetched forecast");

        Ok(Forecast {
            city: parsed.city.name,
            country: parsed.city.country,
            utc_offset_secs: parsed.city.timezone,
            samples,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Place>, ProviderError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let params = [("q", query.trim().to_string()), ("limit", SEARCH_LIMIT.to_string())];
        let places: Vec<OwPlace> = self.get_json("geocoding", "/geo/1.0/direct", &params).await?;

        Ok(places.into_iter().map(Place::from).collect())
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<Place>, ProviderError> {
        let params = [("lat", lat.to_string()), ("lon", lon.to_string()), ("limit", "1".to_string())];
        let places: Vec<OwPlace> = self.get_json("reverse geocoding", "/geo/1.0/reverse", &params).await?;

        let place = places.into_iter().next().map(Place::from);
        match &place {
            Some(p) => tracing::info!(place = %p.label(), "reverse geocoded"),
            None => tracing::debug!(lat, lon, "no place found for coordinates"),
        }

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn current_body() -> serde_json::Value {
        json!({
            "name": "Tunis",
            "dt": 1717416000,
            "timezone": 3600,
            "sys": { "country": "TN" },
            "main": { "temp": 27.4, "feels_like": 28.1, "humidity": 48, "pressure": 1012 },
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }],
            "wind": { "speed": 4.1, "deg": 90 }
        })
    }

    fn entry(dt: i64, temp: f64, id: i32) -> serde_json::Value {
        json!({
            "dt": dt,
            "main": { "temp": temp, "feels_like": temp, "temp_min": temp - 1.0, "temp_max": temp + 1.0, "humidity": 70, "pressure": 1010 },
            "weather": [{ "id": id, "main": "Rain", "description": "light rain" }],
            "wind": { "speed": 6.0, "deg": 200 },
            "pop": 0.4
        })
    }

    #[tokio::test]
    async fn current_weather_by_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Tunis"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        let current = provider.current(&Location::Query("Tunis".into())).await.unwrap();

        assert_eq!(current.location_name(), "Tunis, TN");
        assert_eq!(current.condition_code, 800);
        assert_eq!(current.condition, "Clear");
        assert_eq!(current.humidity, 48);
        assert_eq!(current.pressure, 1012);
        assert_eq!(current.utc_offset_secs, 3600);
        assert_eq!(current.observed_at.timestamp(), 1717416000);
    }

    #[tokio::test]
    async fn forecast_by_coordinates_requests_sample_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("lat", "36.8"))
            .and(query_param("lon", "10.18"))
            .and(query_param("cnt", "16"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "city": { "name": "Tunis", "country": "TN", "timezone": 3600 },
                "list": [
                    entry(1717372800, 20.0, 500),
                    entry(1717383600, 22.0, 501),
                    { "dt": 1717394400, "main": { "temp": 1.0, "humidity": 1 }, "weather": [], "wind": { "speed": 1.0 } }
                ]
            })))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        let location = Location::Coordinates { lat: 36.8, lon: 10.18 };
        let forecast = provider.forecast(&location, SampleWindow::new(16)).await.unwrap();

        assert_eq!(forecast.city, "Tunis");
        assert_eq!(forecast.utc_offset_secs, 3600);
        assert_eq!(forecast.samples.len(), 2);

        let first = &forecast.samples[0];
        assert_eq!(first.temperature_min, 19.0);
        assert_eq!(first.temperature_max, 21.0);
        assert_eq!(first.wind_direction, Some(200.0));
        assert_eq!(first.precipitation_probability, Some(0.4));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("BAD".into(), &server.uri());
        let err = provider.current(&Location::Query("Tunis".into())).await.unwrap_err();

        assert!(matches!(err, ProviderError::Status { .. }));
        assert!(err.to_string().contains("Invalid API key"));
        assert_eq!(err.user_message(), "The weather service rejected the API key.");
    }

    #[tokio::test]
    async fn current_without_condition_is_empty() {
        let server = MockServer::start().await;
        let mut body = current_body();
        body["weather"] = json!([]);
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        let err = provider.current(&Location::Query("Tunis".into())).await.unwrap_err();
        assert!(matches!(err, ProviderError::Empty { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"city\": 1}"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        let err = provider.forecast(&Location::Query("x".into()), SampleWindow::full()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[tokio::test]
    async fn search_returns_places() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Paris"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "Paris", "lat": 48.85, "lon": 2.35, "country": "FR", "state": "Ile-de-France" },
                { "name": "Paris", "lat": 33.66, "lon": -95.55, "country": "US", "state": "Texas" }
            ])))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        let places = provider.search("Paris").await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[1].label(), "Paris, Texas, US");
    }

    #[tokio::test]
    async fn blank_search_skips_the_request() {
        let provider = OpenWeatherProvider::with_base_url("KEY".into(), "http://127.0.0.1:9");
        assert!(provider.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reverse_over_ocean_finds_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), &server.uri());
        assert!(provider.reverse(0.0, -30.0).await.unwrap().is_none());
    }
}
