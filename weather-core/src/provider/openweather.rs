use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::DEFAULT_ENDPOINT,
    error::LookupError,
    model::{Observation, ObservationParts, Query},
};

use super::WeatherProvider;

/// Client for the OpenWeather current-weather endpoint, always in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    async fn fetch_current(&self, location: &str) -> Result<Observation, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::MissingApiKey);
        }

        debug!(location, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, location, "OpenWeather request failed");
            return Err(LookupError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_observation()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
    sea_level: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    sys: OwSys,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_observation(self) -> Result<Observation, LookupError> {
        let condition = self.weather.into_iter().next().ok_or(LookupError::NoCondition)?;

        Ok(Observation::new(ObservationParts {
            location_name: self.name,
            country_code: self.sys.country,
            description: condition.description,
            icon: condition.icon,
            temperature_c: self.main.temp,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            sea_level_hpa: self.main.sea_level,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            wind_speed_mps: self.wind.speed,
            wind_deg: self.wind.deg,
        }))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, query: &Query) -> Result<Observation, LookupError> {
        self.fetch_current(&query.location()).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
