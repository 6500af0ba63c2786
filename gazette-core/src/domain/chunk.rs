//! Text chunks and the annotations attached to them

use super::span::Span;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Most chunks carry zero, one or two annotations
pub type Annotations = SmallVec<[Annotation; 2]>;

/// A reference from a text range to an external entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identifier emitted in rendered markup (entity id, mention class, ...)
    pub id: String,
    /// Annotated range, absolute in the reference string
    pub span: Span,
    /// Markup attribute name used when rendering (`ref`, `class`, `match`, ...)
    pub category: String,
}

impl Annotation {
    /// Creates a new annotation
    pub fn new(id: impl Into<String>, span: Span, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            span,
            category: category.into(),
        }
    }
}

/// A contiguous slice of the reference string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Text of the slice; holds exactly `span.len()` characters
    pub text: String,
    /// Absolute position of the slice
    pub span: Span,
    /// Annotations in the order they were applied
    #[serde(default)]
    pub annotations: Annotations,
    /// Category of the most recently applied annotation
    #[serde(default)]
    pub category: Option<String>,
}

impl Chunk {
    /// Creates an unannotated chunk
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        debug_assert_eq!(
            text.chars().count(),
            span.len(),
            "chunk text length does not match its span"
        );
        Self {
            text,
            span,
            annotations: SmallVec::new(),
            category: None,
        }
    }

    /// Left offset
    pub fn left(&self) -> usize {
        self.span.left
    }

    /// Right offset
    pub fn right(&self) -> usize {
        self.span.right
    }

    /// Returns true if at least one annotation was applied
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Attaches `annotation` if it overlaps this chunk.
    ///
    /// Returns whether the annotation was attached.
    pub fn annotate(&mut self, annotation: &Annotation) -> bool {
        if !self.span.overlaps(&annotation.span) {
            return false;
        }
        self.annotations.push(annotation.clone());
        self.category = Some(annotation.category.clone());
        true
    }

    /// Annotations overlapping `span`, in application order
    pub fn annotations_over(&self, span: Span) -> impl Iterator<Item = &Annotation> + '_ {
        self.annotations.iter().filter(move |a| a.span.overlaps(&span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_only_overlapping() {
        let mut chunk = Chunk::new("DEF", Span::new(3, 6));

        assert!(!chunk.annotate(&Annotation::new("a", Span::new(0, 3), "ref")));
        assert!(!chunk.is_annotated());
        assert_eq!(chunk.category, None);

        assert!(chunk.annotate(&Annotation::new("b", Span::new(2, 4), "ref")));
        assert!(chunk.annotate(&Annotation::new("c", Span::new(5, 9), "class")));
        assert_eq!(chunk.annotations.len(), 2);
        assert_eq!(chunk.category.as_deref(), Some("class"));
    }

    #[test]
    fn test_annotate_does_not_deduplicate() {
        let mut chunk = Chunk::new("abc", Span::new(0, 3));
        let annotation = Annotation::new("x", Span::new(0, 3), "ref");
        chunk.annotate(&annotation);
        chunk.annotate(&annotation);
        assert_eq!(chunk.annotations.len(), 2);
    }

    #[test]
    fn test_annotations_over_subspan() {
        let mut chunk = Chunk::new("abcdef", Span::new(10, 16));
        chunk.annotate(&Annotation::new("x", Span::new(8, 12), "ref"));
        chunk.annotate(&Annotation::new("y", Span::new(14, 20), "ref"));

        let ids: Vec<_> = chunk
            .annotations_over(Span::new(10, 12))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["x"]);

        let ids: Vec<_> = chunk
            .annotations_over(Span::new(12, 14))
            .map(|a| a.id.as_str())
            .collect();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_multibyte_chunk_length() {
        let chunk = Chunk::new("Zürich", Span::new(0, 6));
        assert_eq!(chunk.span.len(), 6);
        assert_eq!(chunk.text.len(), 7);
    }
}
