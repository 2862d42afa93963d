//! Core library for the `weatherlookup` form.
//!
//! This crate defines:
//! - The query/observation model
//! - The OpenWeather client behind the `WeatherProvider` seam
//! - The lookup state machine (submit, settle, what is on display)
//! - The render model for the weather table
//! - Configuration & credentials handling
//!
//! It is used by `weatherlookup-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use error::LookupError;
pub use lookup::{DisplayState, Phase, Settled, Ticket, WeatherLookup};
pub use model::{Observation, ObservationParts, Query};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
