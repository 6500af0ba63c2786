//! Context snippets around a match
//!
//! A snippet is a short window of text around a span, trimmed to word
//! boundaries, with the span itself rendered as an annotated fragment.

use crate::domain::{annotate, render, slice_at_splitpoints, Annotation, Node, Span};
use serde::{Deserialize, Serialize};

/// Default snippet settings
pub mod defaults {
    /// Characters added on each side of the match
    pub const DISTANCE: usize = 25;

    /// Characters always kept on each side of the match
    pub const MIN_DISTANCE: usize = 10;

    /// Attribute used for the highlighted match
    pub const CATEGORY: &str = "class";
}

/// Snippet settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetOptions {
    /// Characters of context taken on each side of the match
    pub distance: usize,
    /// Context never trimmed away when snapping to word boundaries
    pub min_distance: usize,
    /// Attribute of the highlighting `<span>`
    pub category: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            distance: defaults::DISTANCE,
            min_distance: defaults::MIN_DISTANCE,
            category: defaults::CATEGORY.to_string(),
        }
    }
}

/// Renders the text around `span` with the span tagged as `annotation_id`
pub fn context_snippet(
    text: &str,
    span: Span,
    annotation_id: &str,
    options: &SnippetOptions,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let window = snippet_window(&chars, span, options);

    let mut chunks = slice_at_splitpoints(text, &[window.left, window.right], 0);
    let window_chunk = chunks.swap_remove(1);
    let annotated = annotate(
        vec![window_chunk],
        Annotation::new(annotation_id, span, options.category.as_str()),
    );

    let nodes: Vec<Node> = annotated.into_iter().map(Node::Leaf).collect();
    render(&nodes).collect()
}

/// One snippet per match, in the order given
pub fn context_snippets(
    text: &str,
    matches: &[Span],
    annotation_id: &str,
    options: &SnippetOptions,
) -> Vec<String> {
    matches
        .iter()
        .map(|&span| context_snippet(text, span, annotation_id, options))
        .collect()
}

/// Expands `span` by `distance` and snaps both edges to word boundaries.
///
/// Each edge is snapped independently and never moves closer than
/// `min_distance` to the span. Edges clamped to the text bounds stay put.
pub(crate) fn snippet_window(chars: &[char], span: Span, options: &SnippetOptions) -> Span {
    let len = chars.len();
    let mut left = span.left.saturating_sub(options.distance);
    let mut right = (span.right + options.distance).min(len);

    if left > 0 {
        let limit = span.left.saturating_sub(options.min_distance);
        if let Some(separator) = (left..limit).find(|&i| !is_word_char(chars[i])) {
            left = separator + 1;
        }
    }

    if right < len {
        let limit = (span.right + options.min_distance).min(right);
        if let Some(separator) = (limit..right).rev().find(|&i| !is_word_char(chars[i])) {
            right = separator;
        }
    }

    Span::new(left, right)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
