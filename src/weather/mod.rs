pub mod error;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;

use crate::config::Config;
use crate::models::{Coordinates, WeatherReport};
use crate::weather::types::{CurrentWeatherResponse, GeoResponseItem};

pub use error::{GeoError, LookupError, WeatherError};

const GEO_PATH: &str = "/geo/1.0/direct";
const WEATHER_PATH: &str = "/data/2.5/weather";
const ICON_URL_TEMPLATE: &str = "http://openweathermap.org/img/wn/{icon}@4x.png";

/// гПа → мм рт.ст. с отбрасыванием дробной части
pub fn convert_pressure(hpa: f64) -> i64 {
    (hpa * 0.75) as i64
}

/// Местное время как HH:MM по UTC-часам, сдвинутым на смещение часового пояса
pub fn format_time(epoch_seconds: i64, timezone_offset: i64) -> String {
    epoch_seconds
        .checked_add(timezone_offset)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "00:00".to_string())
}

pub fn icon_url(icon: &str) -> String {
    ICON_URL_TEMPLATE.replace("{icon}", icon)
}

/// Источник погоды для диалога: город → готовый отчет
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError>;
}

#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Self::with_base_url(
            &config.owm_api_key,
            &config.owm_base_url,
            config.request_timeout,
        )
    }

    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn geocode(&self, city: &str) -> Result<Coordinates, GeoError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, GEO_PATH))
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeoError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoError::Provider(format!("status {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|e| GeoError::Provider(e.to_string()))?;
        let items = serde_json::from_str::<Vec<GeoResponseItem>>(&text)
            .map_err(|e| GeoError::Provider(e.to_string()))?;

        let first = items.into_iter().next().ok_or(GeoError::NotFound)?;
        log::debug!(
            "📍 '{}' resolved to {:?}/{:?} ({}, {})",
            city,
            first.name,
            first.country,
            first.lat,
            first.lon
        );

        Ok(Coordinates {
            lat: first.lat,
            lon: first.lon,
        })
    }

    pub async fn fetch_weather(&self, coordinates: Coordinates) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, WEATHER_PATH))
            .query(&[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Provider(format!("status {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|e| WeatherError::Provider(e.to_string()))?;
        let body = serde_json::from_str::<CurrentWeatherResponse>(&text)
            .map_err(|e| WeatherError::Provider(e.to_string()))?;

        Ok(build_report(coordinates, body))
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let coordinates = self.geocode(city).await?;
        let report = self.fetch_weather(coordinates).await?;
        Ok(report)
    }
}

fn build_report(coordinates: Coordinates, body: CurrentWeatherResponse) -> WeatherReport {
    let icon = body
        .weather
        .first()
        .and_then(|w| w.icon.clone())
        .unwrap_or_default();

    let main = body.main.unwrap_or_default();
    let sys = body.sys.unwrap_or_default();

    WeatherReport {
        coordinates,
        temperature: main.temp,
        pressure_mmhg: convert_pressure(main.pressure.unwrap_or(0.0)),
        wind_speed: body.wind.and_then(|w| w.speed),
        icon,
        sunrise: sys.sunrise.unwrap_or(0),
        sunset: sys.sunset.unwrap_or(0),
        timezone_offset: body.timezone.unwrap_or(0),
    }
}
