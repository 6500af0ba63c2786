//! Text segmentation and annotation engine for OCR'd newspaper content
//!
//! Given a flat text and independent sets of character offsets (line breaks,
//! region breaks, entity mentions), this crate rebuilds a hierarchical view of
//! the text and renders it back as a flat sequence of fragments in which
//! overlapping annotations are reconciled into `<span>` markup.
//!
//! # Architecture
//!
//! - **Domain layer**: spans, the splitpoint slicer, the overlap annotator,
//!   the hierarchical grouper and the span-reconciling renderer
//! - **Application layer**: excerpts and context snippets built on top
//!
//! # Example
//!
//! ```rust
//! use gazette_core::{annotate_span, render_to_string, slice_at_splitpoints, Node, Span};
//!
//! let text = "Lindsay Watson arrived.";
//! let chunks = slice_at_splitpoints(text, &[], 0);
//! let chunks = annotate_span(chunks, "lindsay-watson", Span::new(0, 14), "ref");
//! let nodes: Vec<Node> = chunks.into_iter().map(Node::Leaf).collect();
//!
//! assert_eq!(
//!     render_to_string(&nodes),
//!     "<span ref=\"lindsay-watson\">Lindsay Watson</span> arrived."
//! );
//! ```

pub mod application;
pub mod domain;

pub use application::{
    context_snippet, context_snippets, excerpt, ExcerptOptions, SnippetOptions, TruncateBy,
};
pub use domain::*;
