//! Driver configuration, read from the environment.

use std::path::PathBuf;

use chrono::Weekday;
use stockroom_observability::LogFormat;
use thiserror::Error;

pub const CAPACITY_VAR: &str = "STOCKROOM_CAPACITY";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const MIRROR_FILE_VAR: &str = "STOCKROOM_MIRROR_FILE";
pub const MIRROR_WEEKDAY_VAR: &str = "STOCKROOM_MIRROR_WEEKDAY";

const DEFAULT_CAPACITY: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Warehouse capacity for the session.
    pub capacity: u32,
    pub log_format: LogFormat,
    /// Also append display lines to this file.
    pub mirror_file: Option<PathBuf>,
    /// Restrict the file mirror to one day of the week.
    pub mirror_weekday: Option<Weekday>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_format: LogFormat::default(),
            mirror_file: None,
            mirror_weekday: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank keys fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(CAPACITY_VAR) {
            let capacity = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid(CAPACITY_VAR, e.to_string()))?;
            if capacity == 0 {
                return Err(ConfigError::invalid(CAPACITY_VAR, "must be positive"));
            }
            config.capacity = capacity;
        }

        if let Some(raw) = get(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|e: String| ConfigError::invalid(LOG_FORMAT_VAR, e))?;
        }

        config.mirror_file = get(MIRROR_FILE_VAR).map(PathBuf::from);

        if let Some(raw) = get(MIRROR_WEEKDAY_VAR) {
            let day = raw
                .trim()
                .parse::<Weekday>()
                .map_err(|_| ConfigError::invalid(MIRROR_WEEKDAY_VAR, format!("unknown weekday {raw:?}")))?;
            config.mirror_weekday = Some(day);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.capacity, 20);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_every_variable() {
        let config = DemoConfig::from_lookup(lookup(&[
            (CAPACITY_VAR, "50"),
            (LOG_FORMAT_VAR, "pretty"),
            (MIRROR_FILE_VAR, "/tmp/stock.log"),
            (MIRROR_WEEKDAY_VAR, "Fri"),
        ]))
        .unwrap();

        assert_eq!(config.capacity, 50);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.mirror_file, Some(PathBuf::from("/tmp/stock.log")));
        assert_eq!(config.mirror_weekday, Some(Weekday::Fri));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[(CAPACITY_VAR, "  "), (MIRROR_FILE_VAR, "")])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn capacity_is_trimmed_and_parsed() {
        let config = DemoConfig::from_lookup(lookup(&[(CAPACITY_VAR, " 35 ")])).unwrap();
        assert_eq!(config.capacity, 35);
    }

    #[test]
    fn rejects_bad_capacity() {
        let err = DemoConfig::from_lookup(lookup(&[(CAPACITY_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: CAPACITY_VAR, .. }));

        let err = DemoConfig::from_lookup(lookup(&[(CAPACITY_VAR, "-3")])).unwrap_err();
        assert!(err.to_string().starts_with("STOCKROOM_CAPACITY is invalid"));
    }

    #[test]
    fn rejects_unknown_format_and_weekday() {
        let err = DemoConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: LOG_FORMAT_VAR, .. }));

        let err = DemoConfig::from_lookup(lookup(&[(MIRROR_WEEKDAY_VAR, "Caturday")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: MIRROR_WEEKDAY_VAR, .. }));
    }
}
