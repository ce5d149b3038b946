use std::{str::FromStr, time::Duration};

use crate::{
    services::cta_client::cta_service::CtaServiceConfig,
    types::{notification::FetchRequest, stop::StopConfig},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPDATE_INTERVAL_MS: u64 = 60_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    pub cta: CtaServiceConfig,
    /// Time between poll cycles.
    pub update_interval: Duration,
    /// The trigger payload the poller sends every cycle.
    pub fetch: FetchRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = CtaServiceConfig::default();

        let stops: Vec<StopConfig> = match lookup("CTA_STOPS") {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidValue {
                name: "CTA_STOPS",
                message: e.to_string(),
            })?,
            None => Vec::new(),
        };

        let update_interval_ms = parse_or(
            &lookup,
            "CTA_UPDATE_INTERVAL_MS",
            DEFAULT_UPDATE_INTERVAL_MS,
        )?;
        if update_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                name: "CTA_UPDATE_INTERVAL_MS",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            cta: CtaServiceConfig {
                train_host: lookup("CTA_TRAIN_HOST").unwrap_or(defaults.train_host),
                bus_host: lookup("CTA_BUS_HOST").unwrap_or(defaults.bus_host),
                timeout: Duration::from_millis(parse_or(
                    &lookup,
                    "CTA_REQUEST_TIMEOUT_MS",
                    DEFAULT_REQUEST_TIMEOUT_MS,
                )?),
            },
            update_interval: Duration::from_millis(update_interval_ms),
            fetch: FetchRequest {
                train_api_key: lookup("CTA_TRAIN_API_KEY"),
                bus_api_key: lookup("CTA_BUS_API_KEY"),
                stops,
                max_results_train: parse_or(
                    &lookup,
                    "CTA_MAX_RESULTS_TRAIN",
                    FetchRequest::default_max_results(),
                )?,
                max_results_bus: parse_or(
                    &lookup,
                    "CTA_MAX_RESULTS_BUS",
                    FetchRequest::default_max_results(),
                )?,
            },
        })
    }
}

fn parse_or<L, T>(lookup: &L, name: &'static str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
