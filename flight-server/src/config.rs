//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "FLIGHT_SERVER_ADDR";
/// Environment variable for the snapshot TTL in seconds.
pub const SNAPSHOT_TTL_VAR: &str = "FLIGHT_SERVER_SNAPSHOT_TTL_SECS";
/// Environment variable for the snapshot capacity.
pub const MAX_SNAPSHOTS_VAR: &str = "FLIGHT_SERVER_MAX_SNAPSHOTS";

/// Error returned when a configuration value can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the flight results server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// How long a registered search stays available
    pub snapshot_ttl_secs: u64,

    /// Maximum number of registered searches held at once
    pub max_snapshots: u64,
}

impl ServerConfig {
    /// Create a new config.
    pub fn new(bind_addr: SocketAddr, snapshot_ttl_secs: u64, max_snapshots: u64) -> Self {
        Self {
            bind_addr,
            snapshot_ttl_secs,
            max_snapshots,
        }
    }

    /// Read the config from the process environment.
    ///
    /// Unset variables take their defaults; set but malformed ones are an
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_var(&lookup, ADDR_VAR)?.unwrap_or(defaults.bind_addr),
            snapshot_ttl_secs: parse_var(&lookup, SNAPSHOT_TTL_VAR)?
                .unwrap_or(defaults.snapshot_ttl_secs),
            max_snapshots: parse_var(&lookup, MAX_SNAPSHOTS_VAR)?
                .unwrap_or(defaults.max_snapshots),
        })
    }

    /// Get the snapshot TTL as a Duration.
    pub fn snapshot_ttl(&self) -> Duration {
        Duration::from_secs(self.snapshot_ttl_secs)
    }

    /// Settings for the snapshot store.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.snapshot_ttl(),
            max_capacity: self.max_snapshots,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            snapshot_ttl_secs: 300,
            max_snapshots: 1000,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}
