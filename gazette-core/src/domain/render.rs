//! Span-reconciling renderer
//!
//! Flattens a chunk hierarchy into a left-to-right sequence of fragments.
//! Annotated chunks are re-sliced wherever an annotation starts or ends inside
//! them, so that each emitted piece carries exactly the ids of the annotations
//! covering it.

use super::chunk::{Annotation, Chunk};
use super::slicer::slice_at_splitpoints;
use super::tree::{Group, Node};
use std::slice;
use std::vec;

/// Lazy fragment sequence produced by [`render`].
///
/// The traversal keeps an explicit stack of child iterators, so nesting depth
/// never grows the call stack. The sequence is consumed once.
#[derive(Debug)]
pub struct Fragments<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
    pending: vec::IntoIter<String>,
}

impl Iterator for Fragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(fragment) = self.pending.next() {
                return Some(fragment);
            }
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Leaf(chunk)) => self.pending = render_chunk(chunk).into_iter(),
                Some(Node::Branch(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Renders `nodes` in document order
pub fn render(nodes: &[Node]) -> Fragments<'_> {
    Fragments {
        stack: vec![nodes.iter()],
        pending: Vec::new().into_iter(),
    }
}

/// Renders `nodes` and concatenates the fragments
pub fn render_to_string(nodes: &[Node]) -> String {
    render(nodes).collect()
}

impl Node {
    /// Renders this node and its subtree
    pub fn render(&self) -> Fragments<'_> {
        render(slice::from_ref(self))
    }
}

impl Group {
    /// Renders the group's children in order
    pub fn render(&self) -> Fragments<'_> {
        render(&self.children)
    }
}

/// Renders a single chunk into its fragments.
///
/// An unannotated or empty chunk is returned as is. Otherwise the chunk is cut at every
/// annotation edge falling inside it and each piece covered by at least one
/// annotation is wrapped in a `<span>` whose attribute is the chunk category
/// and whose value lists the covering ids in application order.
pub fn render_chunk(chunk: &Chunk) -> Vec<String> {
    let Some(attribute) = chunk
        .category
        .as_deref()
        .filter(|_| chunk.is_annotated() && !chunk.text.is_empty())
    else {
        return vec![chunk.text.clone()];
    };

    let mut boundaries: Vec<usize> = chunk
        .annotations
        .iter()
        .flat_map(|annotation| {
            let right = (annotation.span.right < chunk.right()).then_some(annotation.span.right);
            let left = chunk
                .span
                .strictly_contains(annotation.span.left)
                .then_some(annotation.span.left);
            right.into_iter().chain(left)
        })
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    if boundaries.is_empty() {
        let ids = join_ids(chunk.annotations.iter());
        return vec![tag(attribute, &ids, &chunk.text)];
    }

    slice_at_splitpoints(&chunk.text, &boundaries, chunk.left())
        .into_iter()
        .map(|piece| {
            let ids = join_ids(chunk.annotations_over(piece.span));
            if ids.is_empty() {
                piece.text
            } else {
                tag(attribute, &ids, &piece.text)
            }
        })
        .collect()
}

fn join_ids<'a>(annotations: impl Iterator<Item = &'a Annotation>) -> String {
    annotations
        .map(|annotation| annotation.id.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn tag(attribute: &str, ids: &str, text: &str) -> String {
    format!("<span {attribute}=\"{ids}\">{text}</span>")
}
