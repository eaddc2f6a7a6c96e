//! # Flat Node Arena
//!
//! Index-based view over a loaded checklist tree. Nodes live in one flat
//! `Vec`; parent-to-children relationships are index lists, pre-sorted by
//! the ascending-`order` stable rule; a name map resolves visibility
//! condition references across branches.
//!
//! Conditions reference fields by *name*, anywhere in the schema, so a
//! nested-owning-pointer representation would force traversal code to chase
//! references across sibling subtrees. The arena keeps traversal recursive
//! over plain `usize` indices instead; the borrowed tree is read-only for
//! the lifetime of the arena, matching the signing-session contract.

use std::collections::BTreeMap;

use paraph_core::FieldName;

use crate::item::{sorted_children, Checklist, ChecklistItem};

/// One arena slot.
#[derive(Debug)]
struct Node<'a> {
    item: &'a ChecklistItem,
    /// Children in render order; empty for leaves.
    children: Vec<usize>,
}

/// Flat, render-ordered index over a checklist tree.
///
/// Built once per loaded checklist and reused for every evaluation pass of
/// the session. Construction is linear in tree size apart from the sibling
/// sort.
#[derive(Debug)]
pub struct ChecklistArena<'a> {
    nodes: Vec<Node<'a>>,
    /// Top-level nodes in render order.
    roots: Vec<usize>,
    /// First node index for each field name; presence is what resolution
    /// cares about.
    names: BTreeMap<&'a FieldName, usize>,
}

impl<'a> ChecklistArena<'a> {
    /// Index a checklist tree.
    pub fn build(checklist: &'a Checklist) -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            names: BTreeMap::new(),
        };
        arena.roots = arena.push_level(&checklist.items);
        arena
    }

    /// Recursively push one sibling level, returning its render-ordered
    /// indices.
    fn push_level(&mut self, items: &'a [ChecklistItem]) -> Vec<usize> {
        let mut indices = Vec::with_capacity(items.len());
        for item in sorted_children(items) {
            let index = self.nodes.len();
            self.nodes.push(Node {
                item,
                children: Vec::new(),
            });
            if let Some(name) = &item.name {
                self.names.entry(name).or_insert(index);
            }
            if let Some(children) = item.control.items() {
                let child_indices = self.push_level(children);
                self.nodes[index].children = child_indices;
            }
            indices.push(index);
        }
        indices
    }

    /// Top-level node indices in render order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Child indices of a node in render order; empty for leaves.
    pub fn children(&self, index: usize) -> &[usize] {
        &self.nodes[index].children
    }

    /// The item stored at an index.
    pub fn item(&self, index: usize) -> &'a ChecklistItem {
        self.nodes[index].item
    }

    /// Whether a condition's `field_name` resolves to any field in the
    /// schema. Unresolved references fail closed.
    pub fn resolves(&self, name: &FieldName) -> bool {
        self.names.contains_key(name)
    }

    /// Total number of nodes, groups included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaf fields; groups never count themselves.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| !node.item.is_group())
            .count()
    }

    /// Leaf node indices in render order: depth-first, each sibling level
    /// in ascending-`order` stable order, groups descended into but never
    /// yielded.
    pub fn leaves_in_render_order(&self) -> Vec<usize> {
        let mut leaves = Vec::new();
        self.collect_leaves(&self.roots, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, indices: &[usize], out: &mut Vec<usize>) {
        for &index in indices {
            if self.nodes[index].item.is_group() {
                self.collect_leaves(&self.nodes[index].children, out);
            } else {
                out.push(index);
            }
        }
    }
}
