//! Configuration loading and typed config structures for the Tamago pet.
//!
//! The optional configuration file is `tamago-config.yaml` next to the
//! binary. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader, and semantic validation. Every field has a default,
//! so an empty document (or no file at all) yields the stock pet.

use std::path::Path;

use serde::Deserialize;
use tamago_pet::{DecayConfig, PetError};
use tracing::warn;

/// Environment variable that overrides `time.tick_interval_ms`.
pub const TICK_INTERVAL_ENV: &str = "TAMAGO_TICK_INTERVAL_MS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but makes no sense.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },

    /// The decay section is invalid.
    #[error("invalid decay configuration: {source}")]
    Decay {
        /// The underlying validation error.
        #[from]
        source: PetError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `tamago-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Tick cadence and day length.
    #[serde(default)]
    pub time: TimeConfig,

    /// Attribute decay rates and neglect thresholds.
    #[serde(default)]
    pub decay: DecayConfig,

    /// Notification, cue and event log settings.
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `TAMAGO_TICK_INTERVAL_MS` overrides `time.tick_interval_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(TICK_INTERVAL_ENV) {
            match val.trim().parse::<u64>() {
                Ok(ms) => self.time.tick_interval_ms = ms,
                Err(e) => warn!(
                    variable = TICK_INTERVAL_ENV,
                    value = %val,
                    error = %e,
                    "Ignoring unparseable environment override"
                ),
            }
        }
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero intervals or capacities and
    /// [`ConfigError::Decay`] for bad decay rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time.tick_interval_ms == 0 {
            return Err(invalid("time.tick_interval_ms must be at least 1"));
        }
        if self.time.day_period_ms == 0 {
            return Err(invalid("time.day_period_ms must be at least 1"));
        }
        if self.feedback.event_log_capacity == 0 {
            return Err(invalid("feedback.event_log_capacity must be at least 1"));
        }
        self.decay.validate()?;
        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.to_owned(),
    }
}

/// Tick cadence and day length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// Real milliseconds between driver ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Simulated milliseconds between day/night flips.
    #[serde(default = "default_day_period_ms")]
    pub day_period_ms: u64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            day_period_ms: default_day_period_ms(),
        }
    }
}

impl TimeConfig {
    /// Day period as fractional milliseconds.
    #[allow(clippy::cast_precision_loss)]
    pub const fn day_period(&self) -> f64 {
        self.day_period_ms as f64
    }
}

/// Transient feedback and event log settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackConfig {
    /// How long a visual cue stays active.
    #[serde(default = "default_cue_duration_ms")]
    pub cue_duration_ms: u64,

    /// How long a notification stays visible.
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    /// Number of event log entries retained.
    #[serde(default = "default_event_log_capacity")]
    pub event_log_capacity: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            cue_duration_ms: default_cue_duration_ms(),
            notification_duration_ms: default_notification_duration_ms(),
            event_log_capacity: default_event_log_capacity(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for log lines.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

const fn default_tick_interval_ms() -> u64 {
    1000
}

const fn default_day_period_ms() -> u64 {
    300_000
}

const fn default_cue_duration_ms() -> u64 {
    600
}

const fn default_notification_duration_ms() -> u64 {
    2000
}

const fn default_event_log_capacity() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.time.tick_interval_ms, 1000);
        assert_eq!(config.time.day_period_ms, 300_000);
        assert_eq!(config.feedback.cue_duration_ms, 600);
        assert_eq!(config.feedback.notification_duration_ms, 2000);
        assert_eq!(config.feedback.event_log_capacity, 5);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.decay.max_step_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
time:
  tick_interval_ms: 250
  day_period_ms: 60000

decay:
  hunger_rate: 0.002
  hunger_penalty:
    threshold: 10.0
    rate: 0.002
  max_step_ms: 1000.0

feedback:
  cue_duration_ms: 400
  notification_duration_ms: 1500
  event_log_capacity: 8

logging:
  level: debug
  format: json
";
        let mut config: SimulationConfig = serde_yml::from_str(yaml).unwrap();
        config.apply_overrides_from(|_| None);

        assert_eq!(config.time.tick_interval_ms, 250);
        assert_eq!(config.time.day_period_ms, 60_000);
        assert!((config.decay.hunger_rate - 0.002).abs() < f64::EPSILON);
        assert!((config.decay.hunger_penalty.threshold - 10.0).abs() < f64::EPSILON);
        assert!(
            config
                .decay
                .max_step_ms
                .is_some_and(|step| (step - 1000.0).abs() < f64::EPSILON)
        );
        assert!((config.decay.happiness_rate - 0.0005).abs() < f64::EPSILON);
        assert_eq!(config.feedback.cue_duration_ms, 400);
        assert_eq!(config.feedback.event_log_capacity, 8);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_empty_sections_uses_defaults() {
        let config = SimulationConfig::parse("time: {}\n").unwrap();
        assert_eq!(config.feedback, FeedbackConfig::default());
        assert_eq!(config.decay, DecayConfig::default());
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let result = SimulationConfig::parse("time: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_override_replaces_tick_interval() {
        let mut config = SimulationConfig::default();
        config.apply_overrides_from(|key| (key == TICK_INTERVAL_ENV).then(|| "50".to_owned()));
        assert_eq!(config.time.tick_interval_ms, 50);
    }

    #[test]
    fn unparseable_env_override_is_ignored() {
        let mut config = SimulationConfig::default();
        config.apply_overrides_from(|_| Some("soon".to_owned()));
        assert_eq!(config.time.tick_interval_ms, 1000);
    }

    #[test]
    fn validate_rejects_zero_values() {
        let mut config = SimulationConfig::default();
        config.time.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = SimulationConfig::default();
        config.feedback.event_log_capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = SimulationConfig::default();
        config.time.day_period_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_surfaces_decay_errors() {
        let mut config = SimulationConfig::default();
        config.decay.energy_rate = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Decay { .. })));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let result = SimulationConfig::from_file(Path::new("/nonexistent/tamago-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
