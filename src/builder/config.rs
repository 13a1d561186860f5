//! Session configuration.

use crate::builder::error::BuildError;
use crate::core::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Tunable session settings.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use stonepaper::builder::SessionConfig;
///
/// let config = SessionConfig::from_json(r#"{ "history_capacity": 10 }"#).unwrap();
/// assert_eq!(config.history_capacity, 10);
///
/// let config = SessionConfig::from_json("{}").unwrap();
/// assert_eq!(config.history_capacity, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of recent rounds kept in history
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Parse a config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the session cannot run with.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}
