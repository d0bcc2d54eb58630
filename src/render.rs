//! Display strings
//!
//! Two renderings, both read-only and O(n):
//! - tree: name line, then one node per line in right, self, left order,
//!   indented once per depth level (rotated sideways view)
//! - flat: name followed by the in-order listing on one line

use std::fmt::{self, Write as _};

use crate::tree::{Link, Tree};

/// Formatting parameters for rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix added once per depth level in the tree rendering
    pub indent: String,

    /// Separator between elements in the flat rendering
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Configuration with a custom indent width (in spaces)
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
            ..Self::default()
        }
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Multi-line sideways rendering with the default configuration
    pub fn render_tree(&self) -> String {
        self.render_tree_with(&RenderConfig::default())
    }

    /// Multi-line sideways rendering
    ///
    /// Empty trees render as `"<name> Empty tree"`.
    pub fn render_tree_with(&self, config: &RenderConfig) -> String {
        if self.root.is_none() {
            return self.empty_marker();
        }

        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        render_sideways(&self.root, 0, config, &mut out);
        out
    }

    /// Single-line in-order rendering with the default configuration
    pub fn render_flat(&self) -> String {
        self.render_flat_with(&RenderConfig::default())
    }

    /// Single-line in-order rendering prefixed by the name
    pub fn render_flat_with(&self, config: &RenderConfig) -> String {
        if self.root.is_none() {
            return self.empty_marker();
        }

        let mut out = self.name.clone();
        for element in self.in_order() {
            out.push_str(&config.separator);
            // Writing to a String cannot fail
            let _ = write!(out, "{element}");
        }
        out
    }

    fn empty_marker(&self) -> String {
        format!("{} Empty tree", self.name)
    }
}

fn render_sideways<T: fmt::Display>(
    node: &Link<T>,
    depth: usize,
    config: &RenderConfig,
    out: &mut String,
) {
    if let Some(n) = node {
        render_sideways(&n.right, depth + 1, config, out);
        for _ in 0..depth {
            out.push_str(&config.indent);
        }
        let _ = writeln!(out, "{}", n.element);
        render_sideways(&n.left, depth + 1, config, out);
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_tree())
    }
}
