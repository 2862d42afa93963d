use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

use weather_core::{
    Config, DisplayState, WeatherLookup, WeatherProvider, provider_from_config, render,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherlookup", version, about = "Look up current weather for a city")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// OpenWeather API key; takes precedence over the config file.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Current-weather endpoint URL; takes precedence over the config file.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an OpenWeather API key in the config file.
    Configure,

    /// Look up one city and print the result.
    Show {
        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        country: String,

        /// Print the observation as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Interactive form: prompt for city and country until cancelled.
    Form,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file_path()?,
        };
        let config = Config::load_from(&config_path)?;

        match self.command {
            Command::Configure => {
                configure(config, &config_path)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, country, json } => {
                let config = config.with_overrides(self.api_key, self.endpoint);
                let provider = provider_from_config(&config)?;
                show(provider.as_ref(), &config, city, country, json).await
            }
            Command::Form => {
                let config = config.with_overrides(self.api_key, self.endpoint);
                let provider = provider_from_config(&config)?;
                form(provider.as_ref(), &config).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn configure(mut config: Config, path: &std::path::Path) -> Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save_to(path)?;

    info!(path = %path.display(), "stored API key");
    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn show(
    provider: &dyn WeatherProvider,
    config: &Config,
    city: String,
    country: String,
    json: bool,
) -> Result<ExitCode> {
    let mut lookup = WeatherLookup::new();
    lookup.set_city(city);
    lookup.set_country(country);

    let state = lookup.submit(provider).await;
    match state {
        DisplayState::Observation(obs) if json => {
            println!("{}", serde_json::to_string_pretty(obs)?);
            Ok(ExitCode::SUCCESS)
        }
        DisplayState::Observation(_) => {
            print!("{}", render::render_display(state, config.icon_base_url(), &Local));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            print!("{}", render::render_display(state, config.icon_base_url(), &Local));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn form(provider: &dyn WeatherProvider, config: &Config) -> Result<()> {
    let mut lookup = WeatherLookup::new();
    println!("Weather App");
    println!("Enter Details (Esc to quit)");

    loop {
        let Some(city) = prompt_field("City", &lookup.query().city)? else {
            break;
        };
        let Some(country) = prompt_field("Country", &lookup.query().country)? else {
            break;
        };

        lookup.set_city(city);
        lookup.set_country(country);
        let state = lookup.submit(provider).await;

        println!();
        print!("{}", render::render_display(state, config.icon_base_url(), &Local));
        println!();
    }

    Ok(())
}

/// Prompt for one form field; `None` once the user cancels.
fn prompt_field(label: &str, initial: &str) -> Result<Option<String>> {
    match Text::new(&format!("{label}:"))
        .with_placeholder(label)
        .with_initial_value(initial)
        .prompt()
    {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read {label}")),
    }
}
