use crate::engine::DEFAULT_REFRESH_SECS;
use crate::ledger::solana::DEFAULT_RPC_URL;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rpc_url: String,
    pub wallet_address: Option<String>,
    pub reconcile_interval: Duration,
    pub rpc_timeout: Duration,
    pub refresh_secs: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            wallet_address: None,
            reconcile_interval: Duration::ZERO,
            rpc_timeout: Duration::from_millis(10_000),
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let port = match env_map.get("PORT") {
            Some(s) => s.parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?,
            None => defaults.port,
        };

        let rpc_url = env_map
            .get("SOLANA_RPC_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.rpc_url);
        if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "SOLANA_RPC_URL".to_string(),
                format!("must be an http(s) URL, got {}", rpc_url),
            ));
        }

        let wallet_address = env_map
            .get("WALLET_ADDRESS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let reconcile_interval = match env_map.get("RECONCILE_INTERVAL_SECS") {
            Some(s) => Duration::from_secs(s.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RECONCILE_INTERVAL_SECS".to_string(),
                    "must be a non-negative integer".to_string(),
                )
            })?),
            None => defaults.reconcile_interval,
        };

        let rpc_timeout = match env_map.get("RPC_TIMEOUT_MS") {
            Some(s) => match s.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "RPC_TIMEOUT_MS".to_string(),
                        "must be a positive integer".to_string(),
                    ))
                }
            },
            None => defaults.rpc_timeout,
        };

        let refresh_secs = match env_map.get("OVERLAY_REFRESH_SECS") {
            Some(s) => s.parse::<u32>().map_err(|_| {
                ConfigError::InvalidValue(
                    "OVERLAY_REFRESH_SECS".to_string(),
                    "must be a non-negative integer".to_string(),
                )
            })?,
            None => defaults.refresh_secs,
        };

        Ok(Config {
            port,
            rpc_url,
            wallet_address,
            reconcile_interval,
            rpc_timeout,
            refresh_secs,
        })
    }
}
