//! Configuration for content item processing

use crate::error::{ApiError, Result};
use gazette_core::{ExcerptOptions, SnippetOptions, TruncateBy};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Attribute used for entity mentions in rendered regions
    pub const MENTION_CATEGORY: &str = "class";
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) excerpt: ExcerptOptions,
    pub(crate) snippet: SnippetOptions,
    pub(crate) mention_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excerpt: ExcerptOptions::default(),
            snippet: SnippetOptions::default(),
            mention_category: defaults::MENTION_CATEGORY.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Excerpt settings
    pub fn excerpt(&self) -> &ExcerptOptions {
        &self.excerpt
    }

    /// Snippet settings
    pub fn snippet(&self) -> &SnippetOptions {
        &self.snippet
    }

    /// Attribute used for entity mentions
    pub fn mention_category(&self) -> &str {
        &self.mention_category
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.excerpt.truncate_length == 0 {
            return Err(ApiError::Configuration(
                "excerpt truncate_length must be greater than 0".into(),
            ));
        }

        if self.excerpt.max_length == 0 {
            return Err(ApiError::Configuration(
                "excerpt max_length must be greater than 0".into(),
            ));
        }

        if self.snippet.min_distance > self.snippet.distance {
            return Err(ApiError::Configuration(format!(
                "snippet min_distance ({}) must not exceed distance ({})",
                self.snippet.min_distance, self.snippet.distance
            )));
        }

        if self.snippet.category.is_empty() || self.mention_category.is_empty() {
            return Err(ApiError::Configuration(
                "markup categories must not be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate excerpts by words or characters
    pub fn truncate_by(mut self, unit: TruncateBy) -> Self {
        self.config.excerpt.truncate_by = unit;
        self
    }

    /// Number of units kept in excerpts
    pub fn truncate_length(mut self, length: usize) -> Self {
        self.config.excerpt.truncate_length = length;
        self
    }

    /// Character cap for word-truncated excerpts
    pub fn max_length(mut self, length: usize) -> Self {
        self.config.excerpt.max_length = length;
        self
    }

    /// Marker appended to truncated excerpts
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.excerpt.suffix = suffix.into();
        self
    }

    /// Snippet window expansion and minimum kept context, in characters
    pub fn snippet_distance(mut self, distance: usize, min_distance: usize) -> Self {
        self.config.snippet.distance = distance;
        self.config.snippet.min_distance = min_distance;
        self
    }

    /// Attribute used for highlighted matches in snippets
    pub fn snippet_category(mut self, category: impl Into<String>) -> Self {
        self.config.snippet.category = category.into();
        self
    }

    /// Attribute used for entity mentions in regions
    pub fn mention_category(mut self, category: impl Into<String>) -> Self {
        self.config.mention_category = category.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
