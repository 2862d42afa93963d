//! Turning an [`Observation`] into the rows of the weather table.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

use crate::{DisplayState, Observation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

/// Rows shown for an observation, in display order.
///
/// Sunrise and sunset are rendered as time of day in `tz`.
pub fn observation_rows<Tz>(obs: &Observation, icon_base_url: &str, tz: &Tz) -> Vec<Row>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let sea_level = obs
        .sea_level_hpa()
        .map(|v| format!("{v} hPa"))
        .unwrap_or_else(|| "-".to_string());

    vec![
        Row::new("City", format!("{}, {}", obs.location_name(), obs.country_code())),
        Row::new("Icon", icon_url(icon_base_url, obs.icon())),
        Row::new("Temperature", format_temperature(obs.temperature_c())),
        Row::new("Humidity", format!("{}%", obs.humidity_pct())),
        Row::new("Description", obs.description()),
        Row::new("Temp min", format!("{} °C", obs.temp_min_c())),
        Row::new("Feels like", format!("{} °C", obs.feels_like_c())),
        Row::new("Pressure", format!("{} hPa", obs.pressure_hpa())),
        Row::new("Sea level", sea_level),
        Row::new("Sunrise", format_clock(obs.sunrise(), tz)),
        Row::new("Sunset", format_clock(obs.sunset(), tz)),
        Row::new("Wind", format!("{} m/s", obs.wind_speed_mps())),
        Row::new("Degree", format!("{}°", obs.wind_deg())),
    ]
}

/// Image URL for a provider icon code, e.g. `04d`.
pub fn icon_url(base: &str, icon: &str) -> String {
    format!("{}/{icon}.png", base.trim_end_matches('/'))
}

/// Current temperature as a whole number of degrees, halves rounded up.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_half_up(celsius))
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Time of day (`h:mm:ss AM`) of an epoch-seconds instant in `tz`.
pub fn format_clock<Tz>(epoch_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    epoch_secs
        .checked_mul(1000)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(tz).format("%-I:%M:%S %p").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Lay rows out as a two-column table with the labels padded to one width.
pub fn render_table(rows: &[Row]) -> String {
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("{:<width$}  {}\n", row.label, row.value));
    }
    out
}

/// Text for whatever the form is showing; empty before the first submission.
pub fn render_display<Tz>(state: &DisplayState, icon_base_url: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match state {
        DisplayState::Empty => String::new(),
        DisplayState::Error(msg) => format!("{msg}\n"),
        DisplayState::Observation(obs) => {
            format!("Weather Details\n{}", render_table(&observation_rows(obs, icon_base_url, tz)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ICON_BASE_URL;
    use chrono::FixedOffset;

    fn value<'a>(rows: &'a [Row], label: &str) -> &'a str {
        &rows.iter().find(|r| r.label == label).expect("row present").value
    }

    #[test]
    fn temperature_rounds_to_nearest() {
        assert_eq!(format_temperature(17.6), "18°C");
        assert_eq!(format_temperature(17.4), "17°C");
        assert_eq!(format_temperature(17.5), "18°C");
        assert_eq!(format_temperature(-0.5), "0°C");
        assert_eq!(format_temperature(-3.7), "-4°C");
    }

    #[test]
    fn clock_is_deterministic_for_a_zone() {
        assert_eq!(format_clock(1_700_000_000, &Utc), "10:13:20 PM");

        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_clock(1_700_000_000, &cet), "11:13:20 PM");
    }

    #[test]
    fn clock_handles_morning_hours() {
        // 2023-11-15 07:03:20 UTC
        assert_eq!(format_clock(1_700_031_800, &Utc), "7:03:20 AM");
    }

    #[test]
    fn out_of_range_epoch_renders_placeholder() {
        assert_eq!(format_clock(i64::MAX, &Utc), "-");
    }

    #[test]
    fn icon_url_uses_base_and_code() {
        assert_eq!(
            icon_url(DEFAULT_ICON_BASE_URL, "04d"),
            "http://openweathermap.org/img/w/04d.png"
        );
        assert_eq!(icon_url("http://cdn.example/", "01n"), "http://cdn.example/01n.png");
    }

    #[test]
    fn rows_follow_fixed_order() {
        let rows = observation_rows(&Observation::sample(), DEFAULT_ICON_BASE_URL, &Utc);
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();

        assert_eq!(
            labels,
            [
                "City",
                "Icon",
                "Temperature",
                "Humidity",
                "Description",
                "Temp min",
                "Feels like",
                "Pressure",
                "Sea level",
                "Sunrise",
                "Sunset",
                "Wind",
                "Degree",
            ]
        );
    }

    #[test]
    fn rows_carry_observation_values() {
        let rows = observation_rows(&Observation::sample(), DEFAULT_ICON_BASE_URL, &Utc);

        assert_eq!(value(&rows, "City"), "London, GB");
        assert_eq!(value(&rows, "Icon"), "http://openweathermap.org/img/w/04d.png");
        assert_eq!(value(&rows, "Temperature"), "18°C");
        assert_eq!(value(&rows, "Humidity"), "72%");
        assert_eq!(value(&rows, "Description"), "broken clouds");
        assert_eq!(value(&rows, "Temp min"), "16.2 °C");
        assert_eq!(value(&rows, "Feels like"), "17.1 °C");
        assert_eq!(value(&rows, "Pressure"), "1012 hPa");
        assert_eq!(value(&rows, "Sea level"), "1012 hPa");
        assert_eq!(value(&rows, "Sunrise"), "10:13:20 PM");
        assert_eq!(value(&rows, "Wind"), "4.12 m/s");
        assert_eq!(value(&rows, "Degree"), "250°");
    }

    #[test]
    fn table_pads_labels() {
        let rows = vec![Row::new("City", "Oslo, NO"), Row::new("Temperature", "3°C")];

        assert_eq!(render_table(&rows), "City         Oslo, NO\nTemperature  3°C\n");
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render_display(&DisplayState::Empty, DEFAULT_ICON_BASE_URL, &Utc), "");
    }

    #[test]
    fn error_state_renders_message_only() {
        let out = render_display(
            &DisplayState::Error("Weather data not found".into()),
            DEFAULT_ICON_BASE_URL,
            &Utc,
        );

        assert_eq!(out, "Weather data not found\n");
    }

    #[test]
    fn observation_state_renders_table() {
        let state = DisplayState::Observation(Observation::sample());
        let out = render_display(&state, DEFAULT_ICON_BASE_URL, &Utc);

        assert!(out.starts_with("Weather Details\n"));
        assert!(out.contains("London, GB"));
        assert!(!out.contains("Weather data not found"));
    }
}
