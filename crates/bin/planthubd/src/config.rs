//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `planthub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use planthub_adapter_mqtt::MqttConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MQTT broker and topics.
    pub mqtt: MqttConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Reconciliation loop settings.
    pub reconciler: ReconcilerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Reconciliation loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Seconds between two cycles.
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `planthub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("planthub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PLANTHUB_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = lookup("PLANTHUB_MQTT_HOST") {
            self.mqtt.broker_host = val;
        }
        if let Some(port) = lookup("PLANTHUB_MQTT_PORT").and_then(|val| val.parse().ok()) {
            self.mqtt.broker_port = port;
        }
        if let Some(val) = lookup("PLANTHUB_MQTT_USERNAME") {
            self.mqtt.username = Some(val);
        }
        if let Some(val) = lookup("PLANTHUB_MQTT_PASSWORD") {
            self.mqtt.password = Some(val);
        }
        if let Some(secs) = lookup("PLANTHUB_INTERVAL_SECS").and_then(|val| val.parse().ok()) {
            self.reconciler.interval_secs = secs;
        }
        if let Some(val) = lookup("PLANTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reconciler.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "reconciler interval must be non-zero".to_string(),
            ));
        }
        if self.mqtt.broker_port == 0 {
            return Err(ConfigError::Validation(
                "MQTT broker port must be non-zero".to_string(),
            ));
        }
        if self.mqtt.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "MQTT channel capacity must be non-zero".to_string(),
            ));
        }
        if self.mqtt.sensor_topic == self.mqtt.command_topic {
            return Err(ConfigError::Validation(
                "sensor and command topics must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Return the reconciliation period.
    #[must_use]
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.reconciler.interval_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:planthub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "planthubd=info,planthub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
