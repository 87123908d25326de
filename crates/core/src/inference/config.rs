//! Configuration for type inference and entity assembly

use serde::{Deserialize, Serialize};

/// Hard ceiling on the number of display properties an entity exposes
pub const MAX_DISPLAY_PROPERTIES: usize = 5;

/// Configuration for type inference and entity assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Detect date/time and UUID string subtypes
    pub detect_formats: bool,

    /// Record the sample value of scalar properties
    pub collect_samples: bool,

    /// Maximum number of display properties per entity (0 - 5)
    pub max_display_properties: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            detect_formats: true,
            collect_samples: true,
            max_display_properties: MAX_DISPLAY_PROPERTIES,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// Display cap with the ceiling applied, for configs built without the builder
    pub fn display_limit(&self) -> usize {
        self.max_display_properties.min(MAX_DISPLAY_PROPERTIES)
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Enable or disable date/time and UUID detection
    pub fn detect_formats(mut self, detect: bool) -> Self {
        self.config.detect_formats = detect;
        self
    }

    /// Enable or disable sample value collection
    pub fn collect_samples(mut self, collect: bool) -> Self {
        self.config.collect_samples = collect;
        self
    }

    /// Set the display property cap
    pub fn max_display_properties(mut self, max: usize) -> Self {
        self.config.max_display_properties = max.min(MAX_DISPLAY_PROPERTIES);
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert!(config.detect_formats);
        assert!(config.collect_samples);
        assert_eq!(config.max_display_properties, 5);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .detect_formats(false)
            .collect_samples(false)
            .max_display_properties(3)
            .build();

        assert!(!config.detect_formats);
        assert!(!config.collect_samples);
        assert_eq!(config.max_display_properties, 3);
    }

    #[test]
    fn test_display_cap_clamping() {
        let config = InferenceConfig::builder()
            .max_display_properties(12) // Should clamp to 5
            .build();
        assert_eq!(config.max_display_properties, 5);

        let unclamped = InferenceConfig {
            max_display_properties: 40,
            ..InferenceConfig::default()
        };
        assert_eq!(unclamped.display_limit(), 5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: InferenceConfig =
            serde_json::from_str(r#"{"detectFormats": false}"#).unwrap();
        assert!(!config.detect_formats);
        assert!(config.collect_samples);
        assert_eq!(config.max_display_properties, 5);
    }
}
