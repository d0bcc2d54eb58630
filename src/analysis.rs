//! Analytical queries over arbitrary binary trees
//!
//! Neither operation assumes the tree is BST-ordered.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::query;
use crate::tree::{Link, Tree};

/// Ancestor result when a target is not in the tree
pub const NONE: &str = "none";

impl<T: Ord + fmt::Display> Tree<T> {
    /// Display form of the lowest node from which both `a` and `b` are reachable
    ///
    /// Returns `a` itself when `a == b`, and [`NONE`] when either target is
    /// missing. When one target is an ancestor of the other, that ancestor
    /// is the answer.
    pub fn least_common_ancestor(&self, a: &T, b: &T) -> String {
        if a.cmp(b) == Ordering::Equal {
            return a.to_string();
        }
        if !self.contains(a) || !self.contains(b) {
            return NONE.to_string();
        }

        let mut link = &self.root;
        while let Some(node) = link.as_deref() {
            trace!(at = %node.element, "ancestor descent");
            let below = [&node.left, &node.right]
                .into_iter()
                .find(|child| query::contains(child, a) && query::contains(child, b));
            match below {
                Some(child) => link = child,
                None => return node.element.to_string(),
            }
        }
        NONE.to_string()
    }
}

impl<T: Ord> Tree<T> {
    /// Count nodes whose induced subtree is BST-ordered
    ///
    /// A node is ordered when an existing left child is not greater than
    /// it, an existing right child is not less, and both child subtrees are
    /// ordered. Leaves always count. A fully ordered tree of n nodes yields
    /// n: the whole tree is counted once, through its root.
    pub fn count_embedded_bsts(&self) -> usize {
        embedded(&self.root).1
    }

    /// Whether the whole tree satisfies the local BST ordering rule
    pub fn is_bst(&self) -> bool {
        embedded(&self.root).0
    }
}

/// Post-order pass returning (subtree ordered, ordered subtrees within)
fn embedded<T: Ord>(node: &Link<T>) -> (bool, usize) {
    let Some(n) = node else {
        return (true, 0);
    };

    let (left_ordered, left_count) = embedded(&n.left);
    let (right_ordered, right_count) = embedded(&n.right);

    let ordered = left_ordered
        && right_ordered
        && n.left.as_ref().map_or(true, |l| l.element <= n.element)
        && n.right.as_ref().map_or(true, |r| r.element >= n.element);

    (ordered, left_count + right_count + usize::from(ordered))
}
