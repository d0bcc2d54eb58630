//! Owned binary tree
//!
//! Two construction modes:
//! - ordered: repeated BST insertion (strictly less goes left, ties go right)
//! - unordered: median split over the input sequence, shape only
//!
//! The tree owns its root; every other node is owned by its parent.
//! Queries, renderings and mutators live in sibling modules as further
//! `impl` blocks on [`Tree`].

pub(crate) mod node;
mod traversal;

pub use traversal::Paths;

pub(crate) use node::{Link, Node};

use std::cmp::Ordering;
use std::fmt;

use crate::TreeError;

/// Binary tree with a display label
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Tree<T> {
    /// Root node (absent when empty)
    pub(crate) root: Link<T>,

    /// Display label, independent of structure
    pub(crate) name: String,
}

impl<T> Tree<T> {
    /// Create an empty tree
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: None,
            name: name.into(),
        }
    }

    /// Build a shape-only tree by median split over `items`
    ///
    /// The middle element becomes the root and each half recurses. No
    /// ordering is assumed: placement reflects sequence position only.
    pub fn unordered(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            root: Node::build_median(items),
            name: name.into(),
        }
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display label
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the tree has no root
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    /// Discard every node
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Elements in standard in-order (left, self, right)
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        traversal::in_order(&self.root, &mut out);
        out
    }

    /// Lazily enumerate root-to-leaf chains, leftmost first
    ///
    /// Requires a non-empty tree.
    pub fn paths(&self) -> Result<Paths<'_, T>, TreeError>
    where
        T: fmt::Display,
    {
        self.root
            .as_deref()
            .map(Paths::new)
            .ok_or(TreeError::EmptyTree { operation: "paths" })
    }
}

impl<T: Ord> Tree<T> {
    /// Build a BST by inserting `items` in sequence order
    pub fn ordered(name: impl Into<String>, items: impl IntoIterator<Item = T>) -> Self {
        let mut tree = Self::new(name);
        for item in items {
            tree.insert(item);
        }
        tree
    }

    /// Ordered insertion; duplicates are kept and routed right
    pub fn insert(&mut self, value: T) {
        self.root = Self::insert_node(self.root.take(), value);
    }

    fn insert_node(node: Link<T>, value: T) -> Link<T> {
        match node {
            None => Some(Box::new(Node::leaf(value))),
            Some(mut n) => {
                match value.cmp(&n.element) {
                    Ordering::Less => n.left = Self::insert_node(n.left.take(), value),
                    Ordering::Equal | Ordering::Greater => {
                        n.right = Self::insert_node(n.right.take(), value)
                    }
                }
                Some(n)
            }
        }
    }
}

impl<T: Ord + fmt::Display> Tree<T> {
    /// Rebuild the unique tree with the given in-order and pre-order listings
    ///
    /// Elements must be unique. Each pre-order element is located in the
    /// in-order window it belongs to; the window left of it becomes the left
    /// subtree and the window right of it the right subtree.
    pub fn from_traversals(
        name: impl Into<String>,
        in_order: Vec<T>,
        pre_order: Vec<T>,
    ) -> Result<Self, TreeError> {
        if in_order.len() != pre_order.len() {
            return Err(TreeError::TraversalLengthMismatch {
                in_order: in_order.len(),
                pre_order: pre_order.len(),
            });
        }

        let mut pre = pre_order.into_iter();
        let root = Self::build_from_traversals(&mut pre, &in_order)?;
        Ok(Self {
            root,
            name: name.into(),
        })
    }

    fn build_from_traversals(
        pre: &mut std::vec::IntoIter<T>,
        window: &[T],
    ) -> Result<Link<T>, TreeError> {
        if window.is_empty() {
            return Ok(None);
        }

        let element = pre
            .next()
            .ok_or_else(|| TreeError::TraversalMismatch("pre-order exhausted".to_string()))?;
        let split = window
            .iter()
            .position(|candidate| candidate.cmp(&element) == Ordering::Equal)
            .ok_or_else(|| TreeError::TraversalMismatch(element.to_string()))?;

        let left = Self::build_from_traversals(pre, &window[..split])?;
        let right = Self::build_from_traversals(pre, &window[split + 1..])?;
        Ok(Some(Box::new(Node {
            element,
            left,
            right,
        })))
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_insertion_sorts() {
        let tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        assert_eq!(tree.in_order(), vec![&1, &3, &4, &5, &8]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_duplicates_route_right() {
        let tree = Tree::ordered("dup", [5, 5, 5]);
        let root = tree.root.as_ref().expect("root");

        assert!(root.left.is_none());
        let right = root.right.as_ref().expect("first duplicate");
        assert!(right.left.is_none());
        assert!(right.right.is_some());
    }

    #[test]
    fn test_unordered_keeps_sequence_shape() {
        let tree = Tree::unordered("u", vec![9, 1, 7, 3, 5]);
        // Median split of positions, not values
        assert_eq!(tree.root.as_ref().map(|n| n.element), Some(7));
        assert_eq!(tree.in_order(), vec![&9, &1, &7, &3, &5]);
    }

    #[test]
    fn test_rename_keeps_structure() {
        let mut tree = Tree::ordered("before", [2, 1, 3]);
        tree.set_name("after");
        assert_eq!(tree.name(), "after");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_paths_on_empty_is_error() {
        let tree: Tree<i32> = Tree::new("empty");
        assert!(matches!(
            tree.paths(),
            Err(TreeError::EmptyTree { operation: "paths" })
        ));
    }

    #[test]
    fn test_from_traversals() {
        let tree = Tree::from_traversals("rebuilt", vec![1, 3, 4, 5, 8], vec![5, 3, 1, 4, 8])
            .expect("consistent traversals");
        assert_eq!(tree, Tree::ordered("rebuilt", [5, 3, 8, 1, 4]));
    }

    #[test]
    fn test_from_traversals_length_mismatch() {
        let err = Tree::from_traversals("bad", vec![1, 2], vec![1]).unwrap_err();
        assert!(matches!(
            err,
            TreeError::TraversalLengthMismatch {
                in_order: 2,
                pre_order: 1
            }
        ));
    }

    #[test]
    fn test_from_traversals_unknown_element() {
        let err = Tree::from_traversals("bad", vec![1, 2, 3], vec![2, 9, 3]).unwrap_err();
        assert!(matches!(err, TreeError::TraversalMismatch(ref e) if e == "9"));
    }
}
