//! # Binary tree toolkit
//!
//! A generic owned binary tree with two construction modes and a suite of
//! recursive structural algorithms.
//!
//! ## Construction
//!
//! 1. **Ordered**: repeated BST insertion, strictly-less left, ties right
//! 2. **Unordered**: median split over a sequence, shape only
//! 3. **Traversals**: rebuild from in-order + pre-order listings
//!
//! ## Operations
//!
//! - Queries: height, deepest element, per-level counts, membership, paths
//! - Mutators: mirror, prune by path sum, restrict to range, rebalance
//! - Analysis: least common ancestor, embedded BST count
//!
//! ## Usage Example
//!
//! ```
//! use treelab::Tree;
//!
//! let mut tree = Tree::ordered("demo", [5, 3, 8, 1, 4]);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.least_common_ancestor(&1, &4), "3");
//!
//! tree.restrict_to_range(&3, &8)?;
//! assert_eq!(tree.render_flat(), "demo 3 4 5 8");
//! # Ok::<(), treelab::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree;     // Owned nodes, construction, traversal
pub mod render;   // Indented and flat display strings
pub mod query;    // Height, depth and membership queries
pub mod mutate;   // In-place structural transformations
pub mod analysis; // Ancestor lookup and embedded BST counting

// Re-exports for convenience
pub use tree::{Paths, Tree};
pub use render::RenderConfig;
pub use analysis::NONE;

use thiserror::Error;

/// Errors raised by tree operations
///
/// Absent ancestor targets are not errors; see [`NONE`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Operation requires a non-empty tree
    #[error("{operation} requires a non-empty tree")]
    EmptyTree {
        /// Name of the operation that was refused
        operation: &'static str,
    },

    /// Element has no integer textual form
    #[error("element {0:?} is not an integer")]
    NonNumericElement(String),

    /// Traversal listings differ in length
    #[error("in-order has {in_order} elements but pre-order has {pre_order}")]
    TraversalLengthMismatch {
        /// Length of the in-order listing
        in_order: usize,
        /// Length of the pre-order listing
        pre_order: usize,
    },

    /// Pre-order element missing from its in-order window
    #[error("traversals disagree at element {0}")]
    TraversalMismatch(String),
}
