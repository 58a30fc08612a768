//! Configuration loading and representation.
//!
//! Everything comes from environment variables:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ORDERFLOW_BIND_ADDR` | `0.0.0.0:8080` | API listen address |
//! | `ORDERFLOW_LOG_FORMAT` | `json` | `json` or `pretty` |
//!
//! `RUST_LOG` is read separately by the observability crate.

use std::net::SocketAddr;

use thiserror::Error;

use orderflow_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "ORDERFLOW_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ORDERFLOW_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be \"json\" or \"pretty\", got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key → value lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let log_format: LogFormat = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse().map_err(|value| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                value,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
