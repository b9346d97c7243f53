//! # Runtime Configuration
//!
//! Settings are read from environment variables; anything unset falls back to its
//! default. Logging verbosity is not configured here, it follows `RUST_LOG` (see
//! [`setup_tracing`](crate::lifecycle::setup_tracing)).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `INVENTORY_CHANNEL_CAPACITY` | `32` | Request buffer of the product actor |
//! | `INVENTORY_MENU_DELAY_MS` | `0` | Pause before the menu is printed |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "INVENTORY_CHANNEL_CAPACITY";
pub const MENU_DELAY_VAR: &str = "INVENTORY_MENU_DELAY_MS";

/// Errors raised while reading the configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Capacity of the product actor's request channel. Always at least 1.
    pub channel_capacity: usize,
    /// How long the console waits before printing the menu.
    pub menu_delay: Duration,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            menu_delay: Duration::ZERO,
        }
    }
}

impl InventoryConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let channel_capacity =
            parse_var(&lookup, CHANNEL_CAPACITY_VAR)?.unwrap_or(defaults.channel_capacity);
        if channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: CHANNEL_CAPACITY_VAR,
                value: channel_capacity.to_string(),
            });
        }

        let menu_delay = parse_var::<u64, _>(&lookup, MENU_DELAY_VAR)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.menu_delay);

        Ok(Self {
            channel_capacity,
            menu_delay,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
