//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Fewer page region coordinates than text regions; the stored item is corrupt
    #[error(
        "content item {item_id}: {regions} text regions but only {coordinates} region coordinates"
    )]
    RegionMismatch {
        /// Content item id
        item_id: String,
        /// Text regions built from region breaks
        regions: usize,
        /// Region boxes found on the pages
        coordinates: usize,
    },

    /// Offsets or encoded values that do not fit the content
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON decoding error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML configuration decoding error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
