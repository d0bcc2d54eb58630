//! Read-only traversals
//!
//! Root-to-leaf path enumeration runs on an explicit stack so that
//! deep, degenerate trees do not exhaust the call stack.
//! Stack depth: O(height) frames, one chain entry per level.

use std::fmt;

use super::node::{Link, Node};

/// Pending visit: a node and its depth below the root
#[derive(Debug)]
struct Frame<'a, T> {
    node: &'a Node<T>,
    depth: usize,
}

/// Lazy iterator over root-to-leaf chains, leftmost leaf first
///
/// Each item is the space-separated display form of every element from
/// the root down to one leaf.
#[derive(Debug)]
pub struct Paths<'a, T> {
    /// Nodes still to visit (right sibling pushed under left)
    stack: Vec<Frame<'a, T>>,

    /// Elements on the path to the node being visited
    chain: Vec<&'a T>,
}

impl<'a, T> Paths<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            stack: vec![Frame {
                node: root,
                depth: 0,
            }],
            chain: Vec::new(),
        }
    }

    /// Number of pending frames
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T: fmt::Display> Iterator for Paths<'a, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(Frame { node, depth }) = self.stack.pop() {
            self.chain.truncate(depth);
            self.chain.push(&node.element);

            if node.is_leaf() {
                let rendered: Vec<String> = self.chain.iter().map(|e| e.to_string()).collect();
                return Some(rendered.join(" "));
            }

            if let Some(right) = node.right.as_deref() {
                self.stack.push(Frame {
                    node: right,
                    depth: depth + 1,
                });
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push(Frame {
                    node: left,
                    depth: depth + 1,
                });
            }
        }
        None
    }
}

/// Collect references in standard left, self, right order.
pub(crate) fn in_order<'a, T>(node: &'a Link<T>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        in_order(&n.left, out);
        out.push(&n.element);
        in_order(&n.right, out);
    }
}
