use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::ForecastConfig;
use crate::model::{Coordinates, DailyForecast, Forecast};

use super::{ForecastError, ForecastProvider};

/// Daily fields requested from the API, comma-separated as Open-Meteo expects.
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode";

/// Daily rows are localized by the API itself via this query parameter.
const TIMEZONE: &str = "Europe/Warsaw";

/// Open-Meteo HTTP client. No credentials required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    config: ForecastConfig,
}

impl OpenMeteoProvider {
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn with_defaults() -> Result<Self, ForecastError> {
        Self::new(ForecastConfig::default())
    }
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weathercode: Vec<u16>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    daily: OmDaily,
}

/// Collapse the four index-aligned columns into day rows.
///
/// The shape is validated here instead of trusting indices downstream: the
/// arrays must have equal lengths and every `time` entry must be an ISO date.
fn daily_to_forecast(daily: OmDaily) -> Result<Forecast, ForecastError> {
    let len = daily.time.len();
    if daily.weathercode.len() != len
        || daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
        || daily.precipitation_sum.len() != len
    {
        return Err(ForecastError::Parse(
            "daily arrays have unequal lengths".to_string(),
        ));
    }

    let mut days = Vec::with_capacity(len);
    for i in 0..len {
        let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d")
            .map_err(|e| ForecastError::Parse(format!("invalid date '{}': {e}", daily.time[i])))?;

        days.push(DailyForecast {
            date,
            weather_code: daily.weathercode[i],
            temperature_max: daily.temperature_2m_max[i],
            temperature_min: daily.temperature_2m_min[i],
            precipitation_sum: daily.precipitation_sum[i],
        });
    }

    Ok(Forecast { days })
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    #[instrument(skip(self), fields(lat = %location.latitude, lon = %location.longitude))]
    async fn fetch_daily(&self, location: Coordinates) -> Result<Forecast, ForecastError> {
        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "fetching daily forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ForecastError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let parsed: OmForecastResponse = res
            .json()
            .await
            .map_err(|e| ForecastError::Parse(e.to_string()))?;

        daily_to_forecast(parsed.daily)
    }
}
