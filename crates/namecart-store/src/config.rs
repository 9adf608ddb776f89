//! # Store Configuration
//!
//! Host-supplied configuration for [`crate::store::CartStore`]. Immutable
//! for the store's lifetime; the store never writes it back.

use serde::{Deserialize, Serialize};

use namecart_core::DEFAULT_REQUIRED_COUNT;

use crate::error::{StoreError, StoreResult};

/// Configuration for a cart store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Target cart size: the number of domain names the user is assembling
    /// toward. Drives the purchase gates and the default auto-select count.
    #[serde(default = "default_required_count")]
    pub required_count: usize,

    /// When true, `add` rejects once the cart holds `required_count`
    /// entries. Off by default: overfilling is allowed and only the
    /// purchase gates react.
    #[serde(default)]
    pub enforce_required_count: bool,
}

fn default_required_count() -> usize {
    DEFAULT_REQUIRED_COUNT
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            required_count: DEFAULT_REQUIRED_COUNT,
            enforce_required_count: false,
        }
    }
}

impl StoreConfig {
    /// Checks the configuration is usable.
    ///
    /// ## Rules
    /// - `required_count` must be at least 1: a cart assembled toward zero
    ///   names has no meaningful purchase gate
    pub fn validate(&self) -> StoreResult<()> {
        if self.required_count == 0 {
            return Err(StoreError::InvalidConfig(
                "required_count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StoreConfig::default();
        assert_eq!(config.required_count, DEFAULT_REQUIRED_COUNT);
        assert!(!config.enforce_required_count);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_required_count_rejected() {
        let config = StoreConfig {
            required_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.required_count, DEFAULT_REQUIRED_COUNT);
        assert!(!config.enforce_required_count);

        let config: StoreConfig =
            serde_json::from_str(r#"{"requiredCount": 5, "enforceRequiredCount": true}"#).unwrap();
        assert_eq!(config.required_count, 5);
        assert!(config.enforce_required_count);
    }
}
