//! Data Transfer Objects for content items
//!
//! These mirror the JSON values handed over by the storage layer (camelCase
//! keys) and the regions handed back to clients.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page box as `[x, y, width, height]`
pub type Coordinates = [u32; 4];

/// Region boxes of one page, in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRegions {
    /// Page id
    pub page_id: String,
    /// Region boxes on the page
    #[serde(default)]
    pub coordinates: Vec<Coordinates>,
}

/// Mention offsets of one entity category.
///
/// On the wire this is a single-key map: `{"person": [[start, length], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<(usize, usize)>>",
    into = "BTreeMap<String, Vec<(usize, usize)>>"
)]
pub struct MentionGroup {
    /// Entity category, used as the annotation id
    pub category: String,
    /// `(start, length)` pairs in characters
    pub spans: Vec<(usize, usize)>,
}

impl MentionGroup {
    /// Creates a mention group
    pub fn new(category: impl Into<String>, spans: Vec<(usize, usize)>) -> Self {
        Self {
            category: category.into(),
            spans,
        }
    }
}

impl TryFrom<BTreeMap<String, Vec<(usize, usize)>>> for MentionGroup {
    type Error = String;

    fn try_from(map: BTreeMap<String, Vec<(usize, usize)>>) -> std::result::Result<Self, String> {
        if map.len() != 1 {
            return Err(format!(
                "mention group must have exactly one category, found {}",
                map.len()
            ));
        }
        let (category, spans) = map
            .into_iter()
            .next()
            .ok_or_else(|| "empty mention group".to_string())?;
        Ok(Self { category, spans })
    }
}

impl From<MentionGroup> for BTreeMap<String, Vec<(usize, usize)>> {
    fn from(group: MentionGroup) -> Self {
        BTreeMap::from([(group.category, group.spans)])
    }
}

/// Text-side data of a content item as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemInput {
    /// Content item id
    pub id: String,
    /// Title, dropped from the start of the excerpt
    #[serde(default)]
    pub title: Option<String>,
    /// Plain OCR text
    #[serde(default)]
    pub content: String,
    /// Line start offsets
    #[serde(default)]
    pub line_breaks: Vec<usize>,
    /// Region start offsets
    #[serde(default)]
    pub region_breaks: Vec<usize>,
    /// Region boxes per page, in reading order
    #[serde(default)]
    pub page_regions: Vec<PageRegions>,
    /// Entity mentions grouped by category
    #[serde(default)]
    pub mentions: Vec<MentionGroup>,
}

impl ContentItemInput {
    /// Creates an input holding only text
    pub fn from_text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Checks that every offset fits the content.
    ///
    /// Breaks must be strictly increasing and within the content; mentions
    /// must end within the content.
    pub fn validate(&self) -> Result<()> {
        let len = self.content.chars().count();

        check_breaks(&self.line_breaks, len, "line breaks")?;
        check_breaks(&self.region_breaks, len, "region breaks")?;

        for group in &self.mentions {
            for &(start, length) in &group.spans {
                let end = start.checked_add(length).filter(|&end| end <= len);
                if end.is_none() {
                    return Err(ApiError::InvalidInput(format!(
                        "{} mention ({start}, {length}) is past the end of the content ({len} characters)",
                        group.category
                    )));
                }
            }
        }

        Ok(())
    }
}

fn check_breaks(offsets: &[usize], len: usize, what: &str) -> Result<()> {
    if let Some(pair) = offsets.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(ApiError::InvalidInput(format!(
            "{what} are not strictly increasing: {} comes before {}",
            pair[0], pair[1]
        )));
    }
    match offsets.last() {
        Some(&last) if last > len => Err(ApiError::InvalidInput(format!(
            "{what} end at {last}, past the end of the content ({len} characters)"
        ))),
        _ => Ok(()),
    }
}

/// Physical page area tied to a slice of rendered text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Page the box sits on
    pub page_id: String,
    /// The region box
    pub coordinates: Vec<Coordinates>,
    /// Rendered markup of the region, absent when no text was merged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_text: Option<String>,
    /// Rendered markup of each line of the region
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// True when no text chunk was merged into the region
    pub is_empty: bool,
}

impl Region {
    /// Region without text
    pub fn bare(page_id: impl Into<String>, coordinates: Vec<Coordinates>) -> Self {
        Self {
            page_id: page_id.into(),
            coordinates,
            rendered_text: None,
            lines: Vec::new(),
            is_empty: true,
        }
    }
}

/// Enriched view of a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemView {
    /// Content item id
    pub id: String,
    /// Escaped, truncated plain text
    pub excerpt: String,
    /// Rendered regions in reading order
    pub regions: Vec<Region>,
}
