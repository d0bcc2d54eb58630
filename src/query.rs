//! Structural queries
//!
//! All read-only. Membership scans both subtrees unconditionally, so it
//! is correct for unordered trees as well as BSTs.

use std::cmp::Ordering;

use crate::tree::{Link, Tree};

impl<T> Tree<T> {
    /// Edges on the longest root-to-leaf path
    ///
    /// -1 for an empty tree, 0 for a single node.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Element at maximum depth, leftmost branch preferred
    pub fn deepest_element(&self) -> Option<&T> {
        let target = usize::try_from(self.height()).ok()?;
        deepest(&self.root, target)
    }

    /// Number of nodes at exactly `level` (root is level 0)
    pub fn count_at_level(&self, level: i32) -> usize {
        match usize::try_from(level) {
            Ok(level) => count_at_level(&self.root, level),
            Err(_) => 0,
        }
    }

    /// Number of nodes without children
    pub fn leaf_count(&self) -> usize {
        leaf_count(&self.root)
    }
}

impl<T: Ord> Tree<T> {
    /// Whether any element compares equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        contains(&self.root, value)
    }
}

pub(crate) fn height<T>(node: &Link<T>) -> i32 {
    match node {
        None => -1,
        Some(n) => 1 + height(&n.left).max(height(&n.right)),
    }
}

fn deepest<T>(node: &Link<T>, remaining: usize) -> Option<&T> {
    let n = node.as_deref()?;
    if remaining == 0 {
        return Some(&n.element);
    }
    deepest(&n.left, remaining - 1).or_else(|| deepest(&n.right, remaining - 1))
}

fn count_at_level<T>(node: &Link<T>, remaining: usize) -> usize {
    match node {
        None => 0,
        Some(_) if remaining == 0 => 1,
        Some(n) => count_at_level(&n.left, remaining - 1) + count_at_level(&n.right, remaining - 1),
    }
}

fn leaf_count<T>(node: &Link<T>) -> usize {
    match node {
        None => 0,
        Some(n) if n.is_leaf() => 1,
        Some(n) => leaf_count(&n.left) + leaf_count(&n.right),
    }
}

pub(crate) fn contains<T: Ord>(node: &Link<T>, value: &T) -> bool {
    match node {
        None => false,
        Some(n) => {
            n.element.cmp(value) == Ordering::Equal
                || contains(&n.left, value)
                || contains(&n.right, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height() {
        assert_eq!(Tree::<i32>::new("e").height(), -1);
        assert_eq!(Tree::ordered("one", [1]).height(), 0);
        assert_eq!(Tree::ordered("t", [5, 3, 8, 1, 4]).height(), 2);
        assert_eq!(Tree::ordered("chain", 1..=6).height(), 5);
    }

    #[test]
    fn test_deepest_prefers_left() {
        // 5 -> 3 -> {1, 4}, 8 -> 9: depth 2 holds 1, 4 and 9
        let tree = Tree::ordered("t", [5, 3, 8, 1, 4, 9]);
        assert_eq!(tree.deepest_element(), Some(&1));

        // only the right branch reaches depth 2
        let tree = Tree::ordered("t", [5, 3, 8, 9]);
        assert_eq!(tree.deepest_element(), Some(&9));

        assert_eq!(Tree::<i32>::new("e").deepest_element(), None);
    }

    #[test]
    fn test_count_at_level() {
        let tree = Tree::ordered("t", [5, 3, 8, 1, 4]);
        assert_eq!(tree.count_at_level(0), 1);
        assert_eq!(tree.count_at_level(1), 2);
        assert_eq!(tree.count_at_level(2), 2);
        assert_eq!(tree.count_at_level(3), 0);
        assert_eq!(tree.count_at_level(-1), 0);
    }

    #[test]
    fn test_contains_searches_unordered_tree() {
        // Not a BST: a BST-guided search for 1 would go left of 7 and miss
        let tree = Tree::unordered("u", vec![9, 8, 7, 1, 2]);
        assert!(tree.contains(&1));
        assert!(tree.contains(&9));
        assert!(!tree.contains(&3));
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(Tree::ordered("t", [5, 3, 8, 1, 4]).leaf_count(), 3);
        assert_eq!(Tree::<i32>::new("e").leaf_count(), 0);
    }
}
