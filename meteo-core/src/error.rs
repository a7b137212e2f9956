use thiserror::Error;

/// Failures talking to the weather or geocoding service.
///
/// The recommendation and aggregation code never produces these; they stop at
/// the provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send request to OpenWeather ({endpoint}): {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("OpenWeather {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse OpenWeather {endpoint} JSON: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("OpenWeather {endpoint} response contained no data")]
    Empty { endpoint: &'static str },

    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `meteo configure` or set OPENWEATHER_API_KEY."
    )]
    MissingApiKey,
}

impl ProviderError {
    /// Short message suitable for an error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::Http { .. } => "Unable to reach the weather service. Check your connection.",
            ProviderError::Status { status, .. } if status.as_u16() == 401 => {
                "The weather service rejected the API key."
            }
            ProviderError::Status { status, .. } if status.as_u16() == 404 => "Location not found.",
            ProviderError::Status { .. } => "The weather service returned an error. Please try again later.",
            ProviderError::Parse { .. } | ProviderError::Empty { .. } => {
                "Unable to fetch weather data. Please try again later."
            }
            ProviderError::MissingApiKey => "No API key configured. Run `meteo configure` first.",
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
