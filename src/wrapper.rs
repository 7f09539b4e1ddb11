//! The parsed form of one path: its normalized text and command nodes.

use crate::node::{CommandNode, PathNode};
use crate::render::{self, METHOD_SIZE_THRESHOLD};

/// Normalized path text paired with the nodes parsed from it.
///
/// Built by [`crate::parse::parse`] or by [`PathWrapper::map_nodes`]; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PathWrapper {
    normalized_path: String,
    nodes: Vec<CommandNode>,
    minified: bool,
}

impl PathWrapper {
    pub(crate) fn new(normalized_path: String, nodes: Vec<CommandNode>, minified: bool) -> Self {
        Self {
            normalized_path,
            nodes,
            minified,
        }
    }

    pub fn normalized_path(&self) -> &str {
        &self.normalized_path
    }

    pub fn nodes(&self) -> &[CommandNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<CommandNode> {
        self.nodes
    }

    pub fn minified(&self) -> bool {
        self.minified
    }

    /// New wrapper with every node replaced by `f(node)`.
    pub fn map_nodes(&self, f: impl FnMut(&CommandNode) -> CommandNode) -> PathWrapper {
        PathWrapper {
            normalized_path: self.normalized_path.clone(),
            nodes: self.nodes.iter().map(f).collect(),
            minified: self.minified,
        }
    }

    /// Rendered node calls, one after another, with continuation lines
    /// shifted by `indent`.
    pub fn render_nodes(&self, indent: usize) -> String {
        let separator = format!("\n{}", " ".repeat(indent));
        self.nodes
            .iter()
            .map(|node| {
                render::indent_continuation(&node.render(), indent)
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Nodes wrapped in a `header { ... }` block, preceded by the normalized
    /// path as a comment in full mode.
    pub fn render_block(&self, header: &str, indent: usize) -> String {
        let mut out = String::new();
        if !self.minified {
            out.push_str("// ");
            out.push_str(&self.normalized_path);
            out.push('\n');
        }
        out.push_str(header);
        out.push_str(" {\n");
        if !self.nodes.is_empty() {
            out.push_str(&" ".repeat(indent));
            out.push_str(&self.render_nodes(indent));
            out.push('\n');
        }
        out.push('}');
        out
    }

    pub fn approximate_byte_size(&self) -> usize {
        self.nodes.iter().map(|n| n.approximate_byte_size()).sum()
    }

    /// Whether the rendered calls could overflow a single JVM method.
    pub fn exceeds_method_size_threshold(&self) -> bool {
        self.approximate_byte_size() > METHOD_SIZE_THRESHOLD
    }
}
