//! Region/mention merge
//!
//! Combines the per-page region boxes of a content item with its text, line
//! breaks, region breaks and entity mentions into rendered [`Region`]s.

use crate::dto::{ContentItemInput, Coordinates, MentionGroup, PageRegions, Region};
use crate::error::{ApiError, Result};
use gazette_core::{annotate_all, group_hierarchy, slice_at_splitpoints, Annotation, Group, Span};
use tracing::{debug, warn};

/// One physical region box and the page it sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRecord<'a> {
    /// Page the box sits on
    pub page_id: &'a str,
    /// The box itself
    pub coordinates: Coordinates,
}

impl RegionRecord<'_> {
    fn into_bare(self) -> Region {
        Region::bare(self.page_id, vec![self.coordinates])
    }

    fn into_region(self, group: &Group) -> Region {
        Region {
            page_id: self.page_id.to_string(),
            coordinates: vec![self.coordinates],
            rendered_text: Some(group.render().collect()),
            lines: group
                .children
                .iter()
                .map(|line| line.render().collect())
                .collect(),
            is_empty: group.chunk_count() == 0,
        }
    }
}

/// Flattens page records into one record per region box, in page order
pub fn flatten_page_regions(pages: &[PageRegions]) -> Vec<RegionRecord<'_>> {
    pages
        .iter()
        .flat_map(|page| {
            page.coordinates.iter().map(move |&coordinates| RegionRecord {
                page_id: page.page_id.as_str(),
                coordinates,
            })
        })
        .collect()
}

/// Annotations for every mention, tagged with the mention category as id
pub fn mention_annotations<'a>(
    mentions: &'a [MentionGroup],
    category: &'a str,
) -> impl Iterator<Item = Annotation> + 'a {
    mentions.iter().flat_map(move |group| {
        group.spans.iter().map(move |&(start, length)| {
            Annotation::new(
                group.category.as_str(),
                Span::from_start_len(start, length),
                category,
            )
        })
    })
}

/// Builds the rendered regions of a content item.
///
/// Lines are grouped by region breaks and paired in order with the flattened
/// region boxes. Boxes left over after the last text region are kept without
/// text. Without boxes or without content, every box becomes a bare region.
///
/// # Errors
///
/// [`ApiError::RegionMismatch`] when there are fewer boxes than text regions.
pub fn merge_regions(item: &ContentItemInput, mention_category: &str) -> Result<Vec<Region>> {
    let mut records = flatten_page_regions(&item.page_regions);

    if records.is_empty() || item.content.is_empty() {
        debug!(
            item_id = %item.id,
            records = records.len(),
            "no text to merge, returning bare regions"
        );
        return Ok(records.into_iter().map(RegionRecord::into_bare).collect());
    }

    let lines = slice_at_splitpoints(&item.content, &item.line_breaks, 0);
    let lines = annotate_all(lines, mention_annotations(&item.mentions, mention_category));
    let groups = group_hierarchy(lines, &item.region_breaks, &[]);

    if records.len() < groups.len() {
        warn!(
            item_id = %item.id,
            regions = groups.len(),
            coordinates = records.len(),
            "content item has more text regions than region boxes"
        );
        return Err(ApiError::RegionMismatch {
            item_id: item.id.clone(),
            regions: groups.len(),
            coordinates: records.len(),
        });
    }

    let unmatched = records.split_off(groups.len());
    let mut regions: Vec<Region> = records
        .into_iter()
        .zip(&groups)
        .map(|(record, group)| record.into_region(group))
        .collect();
    regions.extend(unmatched.into_iter().map(RegionRecord::into_bare));

    debug!(
        item_id = %item.id,
        regions = regions.len(),
        text_regions = groups.len(),
        "merged regions"
    );
    Ok(regions)
}
