//! Chunk hierarchy and the grouper that builds it
//!
//! A flat run of chunks (usually lines) is partitioned into groups by a list
//! of offsets (usually region breaks), and the groups can be partitioned again
//! by further offset lists to add nesting levels.

use super::chunk::Chunk;
use serde::Serialize;
use tracing::trace;

/// A node of the hierarchy: a leaf chunk or a group of nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A slice of the text
    Leaf(Chunk),
    /// A nested group
    Branch(Group),
}

impl Node {
    /// Right offset of the node's last character
    pub fn right(&self) -> usize {
        match self {
            Node::Leaf(chunk) => chunk.right(),
            Node::Branch(group) => group.right_bound,
        }
    }

    /// Number of leaf chunks below (and including) this node
    pub fn chunk_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(group) => group.chunk_count(),
        }
    }
}

impl From<Chunk> for Node {
    fn from(chunk: Chunk) -> Self {
        Node::Leaf(chunk)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Branch(group)
    }
}

/// An ordered group of nodes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Group {
    /// Child nodes in document order
    pub children: Vec<Node>,
    /// Right offset of the last descendant chunk. An empty group keeps the
    /// offset at which it was closed.
    pub right_bound: usize,
}

impl Group {
    fn closed_at(children: Vec<Node>, fallback: usize) -> Self {
        let right_bound = children.last().map_or(fallback, Node::right);
        Self {
            children,
            right_bound,
        }
    }

    /// Returns true if the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaf chunks in the subtree
    pub fn chunk_count(&self) -> usize {
        self.children.iter().map(Node::chunk_count).sum()
    }

    /// Leaf chunks of the subtree in document order
    pub fn chunks(&self) -> Vec<&Chunk> {
        let mut leaves = Vec::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(chunk) => leaves.push(chunk),
                Node::Branch(group) => stack.extend(group.children.iter().rev()),
            }
        }
        leaves
    }
}

/// Partitions `nodes` into groups at `splitpoints`.
///
/// Walking left to right, the current group is closed each time a node ends
/// past the current splitpoint, so every splitpoint closes exactly one group
/// (possibly empty). Nodes after the last splitpoint form a trailing group.
/// Without splitpoints all nodes end up in a single group.
pub fn group_once(nodes: Vec<Node>, splitpoints: &[usize]) -> Vec<Group> {
    if splitpoints.is_empty() {
        return vec![Group::closed_at(nodes, 0)];
    }

    let mut groups = Vec::with_capacity(splitpoints.len() + 1);
    let mut current = Vec::new();
    let mut pending = splitpoints.iter().copied().peekable();

    for node in nodes {
        while let Some(point) = pending.next_if(|&point| node.right() > point) {
            groups.push(Group::closed_at(std::mem::take(&mut current), point));
        }
        current.push(node);
    }
    if !current.is_empty() {
        let fallback = current.last().map_or(0, Node::right);
        groups.push(Group::closed_at(current, fallback));
    }

    groups
}

/// Groups `chunks` by `first`, then regroups each resulting level by every
/// list of `rest` in order, adding one nesting level per list.
pub fn group_hierarchy(chunks: Vec<Chunk>, first: &[usize], rest: &[&[usize]]) -> Vec<Group> {
    let leaves = chunks.into_iter().map(Node::Leaf).collect();
    let mut groups = group_once(leaves, first);
    trace!(groups = groups.len(), "grouped chunks at first level");

    for (level, splitpoints) in rest.iter().enumerate() {
        let nodes = groups.into_iter().map(Node::Branch).collect();
        groups = group_once(nodes, splitpoints);
        trace!(level = level + 2, groups = groups.len(), "regrouped level");
    }

    groups
}
