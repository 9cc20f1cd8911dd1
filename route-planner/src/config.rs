//! Server configuration.
//!
//! Every setting has a default and can be overridden from the environment:
//!
//! | variable                          | default          |
//! |-----------------------------------|------------------|
//! | `ROUTE_PLANNER_DATA_DIR`          | crate's `data/`  |
//! | `ROUTE_PLANNER_ADDR`              | `127.0.0.1:3000` |
//! | `ROUTE_PLANNER_SESSION_TTL_SECS`  | `1800`           |
//! | `ROUTE_PLANNER_SESSION_CAPACITY`  | `10000`          |
//!
//! The default data directory is the `data/` folder bundled with the crate,
//! so the server finds it whatever the working directory. Relative
//! overrides are resolved against the working directory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::CatalogFiles;
use crate::sessions::SessionConfig;

pub const DATA_DIR_VAR: &str = "ROUTE_PLANNER_DATA_DIR";
pub const ADDR_VAR: &str = "ROUTE_PLANNER_ADDR";
pub const SESSION_TTL_VAR: &str = "ROUTE_PLANNER_SESSION_TTL_SECS";
pub const SESSION_CAPACITY_VAR: &str = "ROUTE_PLANNER_SESSION_CAPACITY";

/// Reference data shipped alongside the crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the reference CSV files.
    pub data_dir: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Booking session store settings.
    pub sessions: SessionConfig,

    /// File names inside `data_dir`.
    pub files: CatalogFiles,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(BUNDLED_DATA_DIR),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            sessions: SessionConfig::default(),
            files: CatalogFiles::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(addr) = parse_var(&lookup, ADDR_VAR)? {
            config.addr = addr;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, SESSION_TTL_VAR)? {
            config.sessions.ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = parse_var(&lookup, SESSION_CAPACITY_VAR)? {
            config.sessions.max_capacity = capacity;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<T>();
    parsed.map(Some).map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.sessions.ttl, Duration::from_secs(1800));
        assert_eq!(config.sessions.max_capacity, 10_000);
        assert_eq!(config.data_dir, PathBuf::from(BUNDLED_DATA_DIR));
    }

    #[test]
    fn default_data_dir_is_absolute_and_bundled() {
        let config = ServerConfig::default();
        assert!(config.data_dir.is_absolute());
        assert!(config.data_dir.join(&config.files.locations).is_file());
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/srv/routes"),
            (ADDR_VAR, "0.0.0.0:8080"),
            (SESSION_TTL_VAR, "60"),
            (SESSION_CAPACITY_VAR, " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/routes"));
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.sessions.ttl, Duration::from_secs(60));
        assert_eq!(config.sessions.max_capacity, 25);
    }

    #[test]
    fn bad_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(err.var, ADDR_VAR);
        assert_eq!(err.value, "localhost");

        let err = ServerConfig::from_lookup(lookup(&[(SESSION_TTL_VAR, "-5")])).unwrap_err();
        assert_eq!(err.var, SESSION_TTL_VAR);
        assert!(err.to_string().starts_with("invalid value \"-5\" for ROUTE_PLANNER_SESSION_TTL_SECS"));
    }
}
