use serde::{Deserialize, Serialize};

/// The city/country pair typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub city: String,
    pub country: String,
}

impl Query {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self { city: city.into(), country: country.into() }
    }

    /// Location parameter as the provider expects it: `city,country`.
    ///
    /// Empty fields are sent as-is, so an empty query becomes `","`.
    pub fn location(&self) -> String {
        format!("{},{}", self.city, self.country)
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.country.is_empty()
    }

    pub fn clear(&mut self) {
        self.city.clear();
        self.country.clear();
    }
}

/// Conditions reported by the provider for one location at request time.
///
/// Built once from a provider response and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    location_name: String,
    country_code: String,
    description: String,
    icon: String,
    temperature_c: f64,
    temp_min_c: f64,
    temp_max_c: f64,
    feels_like_c: f64,
    humidity_pct: u8,
    pressure_hpa: f64,
    sea_level_hpa: Option<f64>,
    sunrise: i64,
    sunset: i64,
    wind_speed_mps: f64,
    wind_deg: f64,
}

/// Field-by-field input for [`Observation::new`].
#[derive(Debug, Clone)]
pub struct ObservationParts {
    pub location_name: String,
    pub country_code: String,
    pub description: String,
    pub icon: String,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub sea_level_hpa: Option<f64>,
    pub sunrise: i64,
    pub sunset: i64,
    pub wind_speed_mps: f64,
    pub wind_deg: f64,
}

impl Observation {
    pub fn new(parts: ObservationParts) -> Self {
        Self {
            location_name: parts.location_name,
            country_code: parts.country_code,
            description: parts.description,
            icon: parts.icon,
            temperature_c: parts.temperature_c,
            temp_min_c: parts.temp_min_c,
            temp_max_c: parts.temp_max_c,
            feels_like_c: parts.feels_like_c,
            humidity_pct: parts.humidity_pct,
            pressure_hpa: parts.pressure_hpa,
            sea_level_hpa: parts.sea_level_hpa,
            sunrise: parts.sunrise,
            sunset: parts.sunset,
            wind_speed_mps: parts.wind_speed_mps,
            wind_deg: parts.wind_deg,
        }
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn temp_min_c(&self) -> f64 {
        self.temp_min_c
    }

    pub fn temp_max_c(&self) -> f64 {
        self.temp_max_c
    }

    pub fn feels_like_c(&self) -> f64 {
        self.feels_like_c
    }

    pub fn humidity_pct(&self) -> u8 {
        self.humidity_pct
    }

    pub fn pressure_hpa(&self) -> f64 {
        self.pressure_hpa
    }

    pub fn sea_level_hpa(&self) -> Option<f64> {
        self.sea_level_hpa
    }

    /// Sunrise as epoch seconds.
    pub fn sunrise(&self) -> i64 {
        self.sunrise
    }

    /// Sunset as epoch seconds.
    pub fn sunset(&self) -> i64 {
        self.sunset
    }

    pub fn wind_speed_mps(&self) -> f64 {
        self.wind_speed_mps
    }

    pub fn wind_deg(&self) -> f64 {
        self.wind_deg
    }
}

#[cfg(test)]
impl Observation {
    /// London on 2023-11-14, as the provider would report it.
    pub(crate) fn sample() -> Self {
        Self::new(ObservationParts {
            location_name: "London".into(),
            country_code: "GB".into(),
            description: "broken clouds".into(),
            icon: "04d".into(),
            temperature_c: 17.6,
            temp_min_c: 16.2,
            temp_max_c: 18.9,
            feels_like_c: 17.1,
            humidity_pct: 72,
            pressure_hpa: 1012.0,
            sea_level_hpa: Some(1012.0),
            sunrise: 1_700_000_000,
            sunset: 1_700_031_000,
            wind_speed_mps: 4.12,
            wind_deg: 250.0,
        })
    }
}
