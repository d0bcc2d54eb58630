//! In-place structural mutators
//!
//! Subtrees are detached by taking their owning slot; dropping the
//! detached `Box` discards every node below it.
//!
//! - mirror: swap children everywhere
//! - prune_by_sum: drop subtrees with no root-to-leaf path reaching a sum
//! - restrict_to_range: BST range filter, replacing out-of-range nodes
//! - rebalance: drain, sort, median-split rebuild

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::query;
use crate::tree::{Link, Node, Tree};
use crate::TreeError;

impl<T> Tree<T> {
    /// Swap left and right children at every node
    ///
    /// Applying it twice restores the original structure.
    pub fn mirror(&mut self) {
        mirror(&mut self.root);
        debug!(tree = %self.name, "mirrored");
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Remove every root-to-leaf path whose element sum never reaches `threshold`
    ///
    /// Elements are read through their integer textual form. A subtree is
    /// kept whole once its prefix sum meets the threshold; otherwise it is
    /// kept only if some child subtree is. If no path qualifies the tree
    /// becomes empty.
    ///
    /// Every element is checked before anything is removed: a
    /// non-integer element fails with [`TreeError::NonNumericElement`] and
    /// leaves the tree untouched.
    pub fn prune_by_sum(&mut self, threshold: i64) -> Result<(), TreeError> {
        validate_weights(&self.root)?;

        let before = Node::size(&self.root);
        let kept = prune(&mut self.root, 0, threshold)?;
        debug!(
            tree = %self.name,
            threshold,
            kept,
            removed = before - Node::size(&self.root),
            "pruned by path sum"
        );
        Ok(())
    }
}

impl<T: Ord> Tree<T> {
    /// Keep only elements within `low..=high`
    ///
    /// Assumes BST ordering. A node below `low` is replaced by its
    /// restricted right subtree (its left subtree is dropped); a node above
    /// `high` by its restricted left subtree. The root is replaced the same
    /// way. On a tree without BST ordering the result is well-formed but
    /// otherwise unspecified.
    pub fn restrict_to_range(&mut self, low: &T, high: &T) -> Result<(), TreeError> {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree {
                operation: "restrict_to_range",
            });
        }

        let before = Node::size(&self.root);
        self.root = restrict(self.root.take(), low, high);
        debug!(
            tree = %self.name,
            removed = before - Node::size(&self.root),
            "restricted to range"
        );
        Ok(())
    }

    /// Rebuild as a height-balanced BST holding the same elements
    ///
    /// All nodes are consumed; elements are sorted (stable, so equal
    /// elements keep their in-order sequence) and placed by median split.
    pub fn rebalance(&mut self) {
        let mut elements = Vec::with_capacity(Node::size(&self.root));
        Node::drain_into(self.root.take(), &mut elements);
        elements.sort();

        let count = elements.len();
        self.root = Node::build_median(elements);
        debug!(
            tree = %self.name,
            count,
            height = query::height(&self.root),
            "rebalanced"
        );
    }
}

fn mirror<T>(node: &mut Link<T>) {
    if let Some(n) = node {
        std::mem::swap(&mut n.left, &mut n.right);
        mirror(&mut n.left);
        mirror(&mut n.right);
    }
}

/// Integer projection of an element's textual form
fn weight<T: fmt::Display>(element: &T) -> Result<i64, TreeError> {
    let text = element.to_string();
    text.parse::<i64>()
        .map_err(|_| TreeError::NonNumericElement(text))
}

fn validate_weights<T: fmt::Display>(node: &Link<T>) -> Result<(), TreeError> {
    if let Some(n) = node {
        weight(&n.element)?;
        validate_weights(&n.left)?;
        validate_weights(&n.right)?;
    }
    Ok(())
}

/// Returns whether the subtree in `slot` is keepable, detaching it if not.
fn prune<T: fmt::Display>(slot: &mut Link<T>, sum: i64, threshold: i64) -> Result<bool, TreeError> {
    let Some(n) = slot.as_mut() else {
        return Ok(false);
    };

    let prefix = sum.saturating_add(weight(&n.element)?);
    if prefix >= threshold {
        return Ok(true);
    }

    let keep_left = prune(&mut n.left, prefix, threshold)?;
    let keep_right = prune(&mut n.right, prefix, threshold)?;
    if keep_left || keep_right {
        return Ok(true);
    }

    trace!(element = %n.element, prefix, "detaching subtree below threshold");
    *slot = None;
    Ok(false)
}

fn restrict<T: Ord>(node: Link<T>, low: &T, high: &T) -> Link<T> {
    let mut n = node?;
    match (n.element.cmp(low), n.element.cmp(high)) {
        (Ordering::Less, _) => restrict(n.right.take(), low, high),
        (_, Ordering::Greater) => restrict(n.left.take(), low, high),
        _ => {
            n.left = restrict(n.left.take(), low, high);
            n.right = restrict(n.right.take(), low, high);
            Some(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_reverses_in_order() {
        let mut tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        tree.mirror();
        assert_eq!(tree.in_order(), vec![&8, &5, &4, &3, &1]);
        tree.mirror();
        assert_eq!(tree, Tree::ordered("t", [5, 3, 8, 1, 4]));
    }

    #[test]
    fn test_prune_keeps_qualifying_paths() {
        // Paths: 5-3-1 (9), 5-3-4 (12), 5-8 (13)
        let mut tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        tree.prune_by_sum(10).expect("integer elements");
        assert_eq!(tree.in_order(), vec![&3, &4, &5, &8]);
    }

    #[test]
    fn test_prune_keeps_whole_subtree_once_threshold_met() {
        // 5 + 8 already reaches 13, so 8's children survive regardless
        let mut tree = Tree::ordered("t", [5, 8, 6, 9]);
        tree.prune_by_sum(13).expect("integer elements");
        assert_eq!(tree.in_order(), vec![&5, &6, &8, &9]);
    }

    #[test]
    fn test_prune_everything() {
        let mut tree = Tree::ordered("t", [1, 2, 0]);
        tree.prune_by_sum(10).expect("integer elements");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_prune_rejects_non_numeric_without_mutating() {
        let mut tree = Tree::ordered("words", ["7", "x", "9"]);
        let err = tree.prune_by_sum(100).unwrap_err();
        assert_eq!(err, TreeError::NonNumericElement("x".to_string()));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_restrict_replaces_root() {
        let mut tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        tree.restrict_to_range(&6, &10).expect("non-empty");
        assert_eq!(tree.in_order(), vec![&8]);

        let mut tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        tree.restrict_to_range(&0, &3).expect("non-empty");
        assert_eq!(tree.in_order(), vec![&1, &3]);
    }

    #[test]
    fn test_restrict_empty_is_error() {
        let mut tree: Tree<i32> = Tree::new("e");
        assert_eq!(
            tree.restrict_to_range(&0, &1),
            Err(TreeError::EmptyTree {
                operation: "restrict_to_range"
            })
        );
    }

    #[test]
    fn test_rebalance_chain() {
        let mut tree = Tree::ordered("chain", 1..=7);
        assert_eq!(tree.height(), 6);
        tree.rebalance();
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7]);
    }

    #[test]
    fn test_rebalance_empty() {
        let mut tree: Tree<i32> = Tree::new("e");
        tree.rebalance();
        assert!(tree.is_empty());
    }
}
