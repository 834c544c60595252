//! Process configuration from environment variables.
//!
//! Unset variables fall back to defaults; invalid values are logged and also
//! fall back, so a typo never keeps the assistant from starting.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use storefront_observability::LogFormat;

pub const PORT_VAR: &str = "STOREFRONT_PORT";
pub const CATALOG_URL_VAR: &str = "STOREFRONT_CATALOG_URL";
pub const TYPING_DELAY_VAR: &str = "STOREFRONT_TYPING_DELAY_MS";
pub const CATALOG_TIMEOUT_VAR: &str = "STOREFRONT_CATALOG_TIMEOUT_MS";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TYPING_DELAY_MS: u64 = 400;
pub const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the product service; `None` serves the built-in seed catalog.
    pub catalog_url: Option<String>,
    /// Upper bound on one remote catalog fetch.
    pub catalog_timeout: Duration,
    /// Pause before a chat reply is returned.
    pub typing_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_url: None,
            catalog_timeout: Duration::from_millis(DEFAULT_CATALOG_TIMEOUT_MS),
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: try_load(PORT_VAR, lookup(PORT_VAR), defaults.port),
            catalog_url: lookup(CATALOG_URL_VAR)
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            catalog_timeout: Duration::from_millis(try_load(
                CATALOG_TIMEOUT_VAR,
                lookup(CATALOG_TIMEOUT_VAR),
                DEFAULT_CATALOG_TIMEOUT_MS,
            )),
            typing_delay: Duration::from_millis(try_load(
                TYPING_DELAY_VAR,
                lookup(TYPING_DELAY_VAR),
                DEFAULT_TYPING_DELAY_MS,
            )),
            log_format: try_load(LOG_FORMAT_VAR, lookup(LOG_FORMAT_VAR), defaults.log_format),
        }
    }
}

/// Log format for bootstrapping the subscriber, before anything can be logged.
pub fn log_format_from_env() -> LogFormat {
    std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

fn try_load<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        tracing::debug!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        tracing::warn!("invalid {key} value {raw:?}: {e}; using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(config(&[]).port, 5000);
        assert_eq!(config(&[]).typing_delay, Duration::from_millis(400));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            (PORT_VAR, "8081"),
            (CATALOG_URL_VAR, " http://shop.local "),
            (TYPING_DELAY_VAR, "0"),
            (CATALOG_TIMEOUT_VAR, "2500"),
            (LOG_FORMAT_VAR, "pretty"),
        ]);
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.catalog_url.as_deref(), Some("http://shop.local"));
        assert_eq!(cfg.typing_delay, Duration::ZERO);
        assert_eq!(cfg.catalog_timeout, Duration::from_millis(2500));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config(&[
            (PORT_VAR, "not-a-port"),
            (TYPING_DELAY_VAR, "-5"),
            (CATALOG_TIMEOUT_VAR, "soon"),
            (LOG_FORMAT_VAR, "xml"),
        ]);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn blank_catalog_url_means_seed_catalog() {
        assert_eq!(config(&[(CATALOG_URL_VAR, "  ")]).catalog_url, None);
    }
}
