//! Server configuration.
//!
//! Defaults, overridden by `GRADER_*` environment variables, overridden in
//! turn by whatever the caller sets on the returned struct (CLI flags).

use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;

pub const HOST_ENV: &str = "GRADER_HOST";
pub const PORT_ENV: &str = "GRADER_PORT";
pub const MAX_BODY_BYTES_ENV: &str = "GRADER_MAX_BODY_BYTES";

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Cannot resolve address {0}")]
    Unresolvable(String),
}

/// Configuration for the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV) {
            if host.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: HOST_ENV,
                    value: host,
                });
            }
            config.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.port = parse_var(PORT_ENV, port)?;
        }

        if let Some(limit) = lookup(MAX_BODY_BYTES_ENV) {
            config.max_body_bytes = parse_var(MAX_BODY_BYTES_ENV, limit)?;
        }

        Ok(config)
    }

    /// Resolve `host:port` to a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let authority = format!("{}:{}", self.host, self.port);
        authority
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::Unresolvable(authority))
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}
