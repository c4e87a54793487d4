use std::env;
use std::time::Duration;

use thiserror::Error;

const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
const OWM_API_KEY_ENV: &str = "OWM_API_KEY";
const OWM_BASE_URL_ENV: &str = "OWM_BASE_URL";
const OWM_TIMEOUT_ENV: &str = "OWM_TIMEOUT_SECS";

pub const DEFAULT_OWM_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid number of seconds: {value}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_token: String,
    pub owm_api_key: String,
    pub owm_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Сборка конфигурации из произвольного источника переменных
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let telegram_token = required(TELEGRAM_TOKEN_ENV)?;
        let owm_api_key = required(OWM_API_KEY_ENV)?;

        let owm_base_url = lookup(OWM_BASE_URL_ENV)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OWM_BASE_URL.to_string());

        let request_timeout = match lookup(OWM_TIMEOUT_ENV) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout {
                        name: OWM_TIMEOUT_ENV,
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            telegram_token,
            owm_api_key,
            owm_base_url,
            request_timeout,
        })
    }
}
