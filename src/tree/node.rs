//! Owned tree node
//!
//! Each node owns its children exclusively through `Box`, so detaching
//! an `Option<Box<Node<T>>>` drops the whole subtree with it.
//!
//! Median-split construction over a slice `[low, high]`:
//!   mid = ⌊(low + high) / 2⌋
//!   Left child:  [low, mid - 1]
//!   Right child: [mid + 1, high]

use std::fmt;

/// Child slot: absent, or an exclusively owned subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Single tree vertex
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Build a subtree by median split over `items`.
    ///
    /// The element at the midpoint becomes the subtree root; the halves on
    /// either side recurse. Height is ⌈log2(n + 1)⌉ − 1 for n items.
    pub(crate) fn build_median(items: Vec<T>) -> Link<T> {
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let len = slots.len();
        Self::build_range(&mut slots, 0, len)
    }

    // Half-open range [low, high): mid = ⌊(low + (high - 1)) / 2⌋ matches the
    // inclusive form above.
    fn build_range(slots: &mut [Option<T>], low: usize, high: usize) -> Link<T> {
        if low >= high {
            return None;
        }
        let mid = (low + high - 1) / 2;
        let element = slots[mid].take()?;
        let left = Self::build_range(slots, low, mid);
        let right = Self::build_range(slots, mid + 1, high);
        Some(Box::new(Node {
            element,
            left,
            right,
        }))
    }

    /// Number of nodes in this subtree.
    pub(crate) fn size(node: &Link<T>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::size(&n.left) + Self::size(&n.right),
        }
    }

    /// Move every element out of the subtree, consuming its nodes.
    pub(crate) fn drain_into(node: Link<T>, out: &mut Vec<T>) {
        if let Some(n) = node {
            let Node {
                element,
                left,
                right,
            } = *n;
            Self::drain_into(left, out);
            out.push(element);
            Self::drain_into(right, out);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)
    }
}
