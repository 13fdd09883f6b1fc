//! Environment-driven configuration.

use std::time::Duration;

use thiserror::Error;

use ruralmarket_observability::LogFormat;

use crate::app::AppSettings;

pub const BIND_ADDR_VAR: &str = "LISTING_BIND_ADDR";
pub const GENERATION_DELAY_VAR: &str = "LISTING_GENERATION_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "LISTING_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Matches the progress animation length shown by the form.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
    /// Cosmetic wait before a listing is returned; zero disables it.
    pub generation_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            generation_delay: DEFAULT_GENERATION_DELAY,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read from the process environment.
    ///
    /// Bad values fall back to defaults and are returned alongside the config
    /// so they can be logged once tracing is up.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut problems = Vec::new();

        let bind_addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.bind_addr);

        let generation_delay = match lookup(GENERATION_DELAY_VAR) {
            None => defaults.generation_delay,
            Some(raw) => parse_delay(&raw).unwrap_or_else(|e| {
                problems.push(e);
                defaults.generation_delay
            }),
        };

        let log_format = lookup(LOG_FORMAT_VAR)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(defaults.log_format);

        let config = Self {
            bind_addr,
            generation_delay,
            log_format,
        };
        (config, problems)
    }

    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            generation_delay: self.generation_delay,
        }
    }
}

pub fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay {
            var: GENERATION_DELAY_VAR,
            value: raw.to_string(),
        })
}
