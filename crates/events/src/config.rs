//! Notification channel configuration.
//!
//! Each channel gets an optional JSON object of options that is merged over
//! the provider's defaults and handed to the channel unchanged. For the
//! broadcast channel this is the `notification.channels.broadcast` block.

use std::collections::HashMap;

use herald_core::channels::CHANNEL_BROADCAST;
use herald_core::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Environment variable holding the broadcast channel options as a JSON
/// object.
pub const BROADCAST_CONFIG_ENV: &str = "NOTIFICATION_CHANNELS_BROADCAST";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid JSON in {key}: {source}")]
    Json {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{key} must be a JSON object")]
    NotAnObject { key: &'static str },
}

/// Per-channel notification options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub channels: HashMap<String, Payload>,
}

impl NotificationConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                          | Required | Default |
    /// |-----------------------------------|----------|---------|
    /// | `NOTIFICATION_CHANNELS_BROADCAST` | no       | `{}`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(BROADCAST_CONFIG_ENV) {
            let options = parse_object(BROADCAST_CONFIG_ENV, &raw)?;
            config.channels.insert(CHANNEL_BROADCAST.to_string(), options);
        }
        Ok(config)
    }

    /// Build from a `{"channels": {"broadcast": {...}}}` document.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|source| ConfigError::Json {
            key: "notification",
            source,
        })
    }

    pub fn with_channel(mut self, name: impl Into<String>, options: Payload) -> Self {
        self.channels.insert(name.into(), options);
        self
    }

    /// Options for `name`, empty when the channel is not configured.
    pub fn channel(&self, name: &str) -> Payload {
        self.channels.get(name).cloned().unwrap_or_default()
    }
}

fn parse_object(key: &'static str, raw: &str) -> Result<Payload, ConfigError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| ConfigError::Json { key, source })?;
    match value {
        Value::Object(options) => Ok(options),
        _ => Err(ConfigError::NotAnObject { key }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
