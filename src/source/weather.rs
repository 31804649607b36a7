//! Outdoor weather via the Open-Meteo forecast API.
//!
//! One HTTP GET per poll, bounded by a strict request timeout. The async
//! reqwest client is driven to completion on a private current-thread tokio
//! runtime, so the scheduler sees an ordinary blocking call.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::data::{Condition, Sample, WeatherReading};
use crate::source::{Source, SourceError, SourceId};

const ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The `current` block of a forecast response.
#[derive(Debug, Clone, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u16,
}

/// Wire format of the forecast response, reduced to the fields we use.
#[derive(Debug, Clone, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

impl ForecastResponse {
    /// A response without a `current` block carries nothing usable.
    fn into_sample(self) -> Result<Sample, SourceError> {
        let current = self
            .current
            .ok_or_else(|| SourceError::Parse("no current block in response".into()))?;
        Ok(Sample::Weather(WeatherReading {
            temperature_c: current.temperature_2m,
            humidity_pct: current.relative_humidity_2m,
            wind_kph: current.wind_speed_10m,
            condition: Condition::from_wmo(current.weather_code),
        }))
    }
}

/// Outdoor weather source for a fixed location.
pub struct OpenMeteoSource {
    rt: tokio::runtime::Runtime,
    client: Client,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoSource {
    /// Create a source polling the forecast for the given coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            rt,
            client,
            latitude,
            longitude,
        })
    }
}

impl Source for OpenMeteoSource {
    fn id(&self) -> SourceId {
        SourceId::OutdoorWeather
    }

    fn fetch(&mut self) -> Result<Sample, SourceError> {
        let request = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
            ])
            .query(&[
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code",
                ),
                ("temperature_unit", "celsius"),
                ("wind_speed_unit", "kmh"),
            ]);

        let response: ForecastResponse = self.rt.block_on(async {
            request
                .send()
                .await?
                .error_for_status()?
                .json::<ForecastResponse>()
                .await
        })?;

        response.into_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shape of a real Open-Meteo response, trimmed to one decode's worth.
    const FIXTURE: &str = r#"{
        "latitude": 52.42,
        "longitude": 10.78,
        "current_units": {
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "wind_speed_10m": "km/h",
            "weather_code": "wmo code"
        },
        "current": {
            "time": "2025-11-02T14:30",
            "temperature_2m": 8.4,
            "relative_humidity_2m": 81.0,
            "wind_speed_10m": 14.3,
            "weather_code": 61
        }
    }"#;

    #[test]
    fn test_decodes_current_block() {
        let response: ForecastResponse = serde_json::from_str(FIXTURE).unwrap();
        let Sample::Weather(reading) = response.into_sample().unwrap() else {
            panic!("expected a weather sample");
        };
        assert_eq!(reading.temperature_c, 8.4);
        assert_eq!(reading.humidity_pct, 81.0);
        assert_eq!(reading.wind_kph, 14.3);
        assert_eq!(reading.condition, Condition::Rainy);
    }

    #[test]
    fn test_missing_current_block_is_a_parse_error() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"latitude": 52.42, "longitude": 10.78}"#).unwrap();
        match response.into_sample() {
            Err(SourceError::Parse(msg)) => assert!(msg.contains("current")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_weather_code_still_decodes() {
        let json = r#"{
            "current": {
                "temperature_2m": 1.0,
                "relative_humidity_2m": 50.0,
                "wind_speed_10m": 0.0,
                "weather_code": 42
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let Sample::Weather(reading) = response.into_sample().unwrap() else {
            panic!("expected a weather sample");
        };
        assert_eq!(reading.condition, Condition::Unknown);
    }
}
