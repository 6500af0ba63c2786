//! Domain layer: offset arithmetic, slicing, annotation, grouping and rendering
//!
//! Everything here is a pure transformation over freshly built chunk trees.
//! Callers are expected to pass sorted offsets that lie within the text.

pub mod annotate;
pub mod chunk;
pub mod render;
pub mod slicer;
pub mod span;
pub mod tree;

pub use annotate::{annotate, annotate_all, annotate_span};
pub use chunk::{Annotation, Annotations, Chunk};
pub use render::{render, render_chunk, render_to_string, Fragments};
pub use slicer::slice_at_splitpoints;
pub use span::{overlaps, Span};
pub use tree::{group_hierarchy, group_once, Group, Node};
