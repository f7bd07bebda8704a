//! OpenWeather client (HTTP direct, no SDK).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OWM_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the OpenWeather `/weather` and `/forecast` endpoints.
///
/// Each call is one upstream GET; failures propagate, nothing is cached or
/// retried.
pub struct OwmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OwmClient {
    /// Create a client with the given API key (typically `OWM_API_KEY`).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: OWM_API_BASE.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Point the client at a different base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Current conditions for a city.
    pub async fn current(&self, city: &str, units: &str) -> Result<CurrentConditions> {
        let url = format!("{}/weather", self.base_url);
        let raw: OwmCurrent = self
            .http
            .get(&url)
            .query(&[("q", city), ("units", units), ("appid", &self.api_key)])
            .send()
            .await
            .context("OpenWeather request failed")?
            .error_for_status()
            .context("OpenWeather returned an error status")?
            .json()
            .await
            .context("Failed to decode OpenWeather response")?;

        Ok(CurrentConditions::from_owm(raw, units))
    }

    /// 3-hourly forecast for a city.
    pub async fn forecast(&self, city: &str, units: &str) -> Result<ForecastSummary> {
        let url = format!("{}/forecast", self.base_url);
        let raw: OwmForecast = self
            .http
            .get(&url)
            .query(&[("q", city), ("units", units), ("appid", &self.api_key)])
            .send()
            .await
            .context("OpenWeather request failed")?
            .error_for_status()
            .context("OpenWeather returned an error status")?
            .json()
            .await
            .context("Failed to decode OpenWeather response")?;

        Ok(ForecastSummary::from_owm(raw, units))
    }
}

// Raw OpenWeather payload shapes (only the fields we surface).

#[derive(Debug, Deserialize)]
pub struct OwmCurrent {
    pub name: String,
    pub main: OwmMain,
    #[serde(default)]
    pub weather: Vec<OwmWeather>,
    pub wind: OwmWind,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Deserialize)]
pub struct OwmWeather {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct OwmWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmForecast {
    pub city: OwmCity,
    #[serde(default)]
    pub list: Vec<OwmForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OwmCity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OwmForecastEntry {
    pub dt_txt: String,
    pub main: OwmMain,
    #[serde(default)]
    pub weather: Vec<OwmWeather>,
}

// Shaped responses served to clients.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub description: String,
    pub wind_speed: f64,
    pub units: String,
}

impl CurrentConditions {
    fn from_owm(raw: OwmCurrent, units: &str) -> Self {
        Self {
            city: raw.name,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            humidity: raw.main.humidity,
            description: raw
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_default(),
            wind_speed: raw.wind.speed,
            units: units.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub city: String,
    pub units: String,
    pub entries: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: String,
    pub temperature: f64,
    pub description: String,
}

impl ForecastSummary {
    fn from_owm(raw: OwmForecast, units: &str) -> Self {
        let entries = raw
            .list
            .into_iter()
            .map(|entry| ForecastEntry {
                timestamp: entry.dt_txt,
                temperature: entry.main.temp,
                description: entry
                    .weather
                    .first()
                    .map(|w| w.description.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            city: raw.city.name,
            units: units.to_string(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_conditions_shape_from_owm_payload() {
        let raw: OwmCurrent = serde_json::from_value(json!({
            "name": "Lisbon",
            "main": {"temp": 21.4, "feels_like": 20.9, "humidity": 64},
            "weather": [{"description": "few clouds"}, {"description": "ignored"}],
            "wind": {"speed": 5.2},
        }))
        .unwrap();

        let shaped = CurrentConditions::from_owm(raw, "metric");
        assert_eq!(shaped.city, "Lisbon");
        assert_eq!(shaped.temperature, 21.4);
        assert_eq!(shaped.description, "few clouds");
        assert_eq!(shaped.units, "metric");
    }

    #[test]
    fn missing_weather_array_yields_empty_description() {
        let raw: OwmCurrent = serde_json::from_value(json!({
            "name": "Oslo",
            "main": {"temp": -3.0, "feels_like": -8.5, "humidity": 80},
            "wind": {"speed": 2.0},
        }))
        .unwrap();

        let shaped = CurrentConditions::from_owm(raw, "metric");
        assert_eq!(shaped.description, "");
    }

    #[test]
    fn forecast_summary_keeps_entry_order() {
        let raw: OwmForecast = serde_json::from_value(json!({
            "city": {"name": "Porto"},
            "list": [
                {"dt_txt": "2026-01-01 12:00:00", "main": {"temp": 14.0, "feels_like": 13.0, "humidity": 70}, "weather": [{"description": "light rain"}]},
                {"dt_txt": "2026-01-01 15:00:00", "main": {"temp": 15.5, "feels_like": 15.0, "humidity": 66}, "weather": [{"description": "overcast clouds"}]},
            ],
        }))
        .unwrap();

        let shaped = ForecastSummary::from_owm(raw, "metric");
        assert_eq!(shaped.city, "Porto");
        assert_eq!(shaped.entries.len(), 2);
        assert_eq!(shaped.entries[0].timestamp, "2026-01-01 12:00:00");
        assert_eq!(shaped.entries[1].description, "overcast clouds");
    }
}
