//! Content item API for Gazette text rendering
//!
//! This crate turns the text-side data of a stored content item (plain text,
//! line and region breaks, page region boxes, entity mention offsets) into the
//! rendered regions and excerpt served to clients.

#![warn(missing_docs)]

pub mod config;
pub mod dpf;
pub mod dto;
pub mod error;
pub mod regions;

use error::Result;
use gazette_core::{context_snippets, excerpt, Span};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dpf::{parse_dpf, WeightedEntity};
pub use dto::{ContentItemInput, ContentItemView, Coordinates, MentionGroup, PageRegions, Region};
pub use error::ApiError;
pub use regions::merge_regions;

/// Main entry point for content item rendering
///
/// A processor holds only its validated configuration and can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ContentItemProcessor {
    config: Config,
}

impl ContentItemProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the input, merge its regions and build its excerpt
    pub fn process(&self, input: ContentItemInput) -> Result<ContentItemView> {
        input.validate()?;

        let regions = merge_regions(&input, self.config.mention_category())?;
        let excerpt_options = match input.title.as_deref() {
            Some(title) => self.config.excerpt().excluding_title(title),
            None => self.config.excerpt().clone(),
        };
        let excerpt = excerpt(&input.content, &excerpt_options);

        Ok(ContentItemView {
            id: input.id,
            excerpt,
            regions,
        })
    }

    /// Decode a JSON content item and process it
    pub fn process_json(&self, json: &str) -> Result<ContentItemView> {
        let input: ContentItemInput = serde_json::from_str(json)?;
        self.process(input)
    }

    /// Snippets around each of `matches` in `content`, highlighted as `annotation_id`
    pub fn snippets(&self, content: &str, matches: &[Span], annotation_id: &str) -> Vec<String> {
        context_snippets(content, matches, annotation_id, self.config.snippet())
    }
}
