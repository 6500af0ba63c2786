//! Overlap annotator
//!
//! Annotating moves the chunk list in and hands the annotated list back, so a
//! list is never annotated while another tree still refers to it.

use super::chunk::{Annotation, Chunk};
use super::span::Span;

/// Attaches `annotation` to every chunk whose span overlaps it.
///
/// Repeated calls accumulate annotations; nothing is deduplicated. Each
/// touched chunk takes the annotation's category as its render attribute.
pub fn annotate(mut chunks: Vec<Chunk>, annotation: Annotation) -> Vec<Chunk> {
    for chunk in chunks.iter_mut() {
        chunk.annotate(&annotation);
    }
    chunks
}

/// Same as [`annotate`], building the annotation from its parts
pub fn annotate_span(
    chunks: Vec<Chunk>,
    id: impl Into<String>,
    span: Span,
    category: impl Into<String>,
) -> Vec<Chunk> {
    annotate(chunks, Annotation::new(id, span, category))
}

/// Applies every annotation of `annotations` in order
pub fn annotate_all<I>(chunks: Vec<Chunk>, annotations: I) -> Vec<Chunk>
where
    I: IntoIterator<Item = Annotation>,
{
    annotations.into_iter().fold(chunks, annotate)
}
