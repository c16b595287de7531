//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TRIP_PLANNER_ADDR";

/// Environment variable holding the timetable CSV path.
pub const TIMETABLE_VAR: &str = "TRIP_PLANNER_TIMETABLE";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is empty")]
    EmptyPath { var: &'static str },
}

/// Configuration for the trip planner server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub addr: SocketAddr,

    /// Path of the timetable CSV loaded at startup.
    pub timetable_path: PathBuf,
}

impl AppConfig {
    pub fn new(addr: SocketAddr, timetable_path: impl Into<PathBuf>) -> Self {
        Self {
            addr,
            timetable_path: timetable_path.into(),
        }
    }

    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value,
                })?;
        }

        if let Some(value) = lookup(TIMETABLE_VAR) {
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::EmptyPath { var: TIMETABLE_VAR });
            }
            config.timetable_path = PathBuf::from(value);
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            timetable_path: PathBuf::from("data/eu_rail_network.csv"),
        }
    }
}
