//! Codec settings.
//!
//! ```rust
//! use geospark_shape::CodecConfig;
//!
//! let config = CodecConfig::from_json(r#"{"require_end_marker": true}"#)?;
//! assert!(config.require_end_marker);
//! # Ok::<(), geospark_shape::ShapeError>(())
//! ```
use crate::error::{Result, ShapeError};
use serde::{Deserialize, Serialize};

/// Configuration for [`Codec`](crate::record::Codec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Bytes preallocated for each serialized record
    #[serde(default = "CodecConfig::default_initial_capacity")]
    pub initial_capacity: usize,

    /// Reject records whose end marker byte is present but wrong
    #[serde(default)]
    pub require_end_marker: bool,
}

impl CodecConfig {
    const fn default_initial_capacity() -> usize {
        64
    }

    /// Set the per-record preallocation.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Initial capacity must be greater than zero");

        if capacity > 16 * 1024 * 1024 {
            log::warn!(
                "Initial capacity of {} bytes is very large; every serialized record reserves it.",
                capacity
            );
        }

        self.initial_capacity = capacity;
        self
    }

    /// Turn strict end-marker checking on or off.
    pub fn with_require_end_marker(mut self, require: bool) -> Self {
        self.require_end_marker = require;
        self
    }

    /// Check invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ShapeError::Config(
                "Initial capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a TOML configuration.
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: CodecConfig =
            toml::from_str(toml_str).map_err(|e| ShapeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::default_initial_capacity(),
            require_end_marker: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.initial_capacity, 64);
        assert!(!config.require_end_marker);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CodecConfig::default()
            .with_initial_capacity(256)
            .with_require_end_marker(true);
        let json = config.to_json().unwrap();
        assert_eq!(CodecConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = CodecConfig::from_json(r#"{"initial_capacity": 0}"#).unwrap_err();
        assert!(matches!(err, ShapeError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = CodecConfig::from_json(r#"{"strict": true}"#).unwrap_err();
        assert!(matches!(err, ShapeError::Json(_)));
    }

    #[test]
    #[should_panic(expected = "Initial capacity must be greater than zero")]
    fn test_builder_rejects_zero_capacity() {
        let _ = CodecConfig::default().with_initial_capacity(0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let config = CodecConfig::from_toml("require_end_marker = true").unwrap();
        assert!(config.require_end_marker);
        assert_eq!(config.initial_capacity, 64);
    }
}
