//! Tunables for the board interaction engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dead-zone is negative or not finite.
    #[error("touch dead-zone must be a finite, non-negative distance, got {0}")]
    InvalidDeadZone(f64),
}

/// Configuration for drag handling.
///
/// # Examples
///
/// ```
/// use planboard::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(config.card_hints);
///
/// let plain = BoardConfig::without_card_hints();
/// assert!(!plain.card_hints);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Distance a touch must travel along either axis, in device-independent
    /// pixels, before it counts as a drag rather than a tap.
    pub touch_dead_zone: f64,
    /// Whether pointer drags resolve the above/below insertion hint over
    /// cards.
    pub card_hints: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            touch_dead_zone: 10.0,
            card_hints: true,
        }
    }
}

impl BoardConfig {
    /// Configuration that never computes card insertion hints.
    #[must_use]
    pub fn without_card_hints() -> Self {
        Self {
            card_hints: false,
            ..Default::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or
    /// [`ConfigError::InvalidDeadZone`] for an unusable dead-zone.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeadZone`] when the dead-zone is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.touch_dead_zone.is_finite() || self.touch_dead_zone < 0.0 {
            return Err(ConfigError::InvalidDeadZone(self.touch_dead_zone));
        }
        Ok(())
    }
}
