use crate::{Config, LookupError, Observation, Query, provider::openweather::OpenWeatherProvider};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod openweather;

/// Source of observations for a query.
///
/// There is one real implementation, [`OpenWeatherProvider`]; the trait is the
/// seam [`WeatherLookup`](crate::WeatherLookup) is driven through.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &Query) -> Result<Observation, LookupError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    let provider = OpenWeatherProvider::new(api_key.to_owned())
        .with_endpoint(config.endpoint())
        .with_client(http);

    Ok(Box::new(provider))
}
