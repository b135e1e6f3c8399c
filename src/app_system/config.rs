use std::env;

use super::AppError;

const CHANNEL_BUFFER_VAR: &str = "ORDER_SYSTEM_CHANNEL_BUFFER";
const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Runtime settings for [`super::OrderSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of each resource actor's request channel.
    pub channel_buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl SystemConfig {
    /// Reads settings from the process environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(AppError::Config(format!(
                        "{CHANNEL_BUFFER_VAR} must be a positive integer, got {raw:?}"
                    )))
                }
            };
        }
        Ok(config)
    }
}
