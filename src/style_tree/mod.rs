//! Per-widget style-tree nodes and the table that assembles them.
//!
//! A node is a plain `fn(&ColorScheme) -> T` where `T: Serialize`. Nodes are
//! registered under the widget name the renderer looks up, using
//! [`style_nodes!`](crate::style_nodes).

pub mod command_palette;

#[cfg(test)]
mod test_node_properties;

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::theme::ColorScheme;

pub use command_palette::{
    CommandPaletteStyle, KeystrokeActiveStyle, KeystrokeStyle, command_palette,
};

pub type NodeFn = fn(&ColorScheme) -> Result<Value, StyleError>;

#[derive(Clone, Copy, Debug)]
pub struct NodeEntry {
    pub name: &'static str,
    pub build: NodeFn,
}

pub fn serialize_node<T: Serialize>(style: &T) -> Result<Value, StyleError> {
    Ok(serde_json::to_value(style)?)
}

#[macro_export]
macro_rules! style_nodes {
    ($vis:vis static $registry:ident = { $($name:literal => $node:path),* $(,)? };) => {
        $vis static $registry: &[$crate::style_tree::NodeEntry] = &[
            $(
                $crate::style_tree::NodeEntry {
                    name: $name,
                    build: |scheme| $crate::style_tree::serialize_node(&$node(scheme)),
                },
            )*
        ];
    };
}

style_nodes! {
    pub static BUILTIN_NODES = {
        "commandPalette" => command_palette::command_palette,
    };
}

/// Evaluates registered nodes against one shared scheme.
///
/// Names are expected to be unique; when a table repeats one, the later entry
/// wins in both [`StyleTree::node`] and [`StyleTree::build`].
#[derive(Clone, Debug)]
pub struct StyleTree {
    scheme: Arc<ColorScheme>,
    nodes: &'static [NodeEntry],
}

impl StyleTree {
    pub fn new(scheme: impl Into<Arc<ColorScheme>>) -> Self {
        Self {
            scheme: scheme.into(),
            nodes: BUILTIN_NODES,
        }
    }

    pub fn with_nodes(mut self, nodes: &'static [NodeEntry]) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn node_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes.iter().map(|entry| entry.name)
    }

    pub fn node(&self, name: &str) -> Result<Value, StyleError> {
        let entry = self
            .nodes
            .iter()
            .rev()
            .find(|entry| entry.name == name)
            .ok_or_else(|| StyleError::UnknownNode(name.to_string()))?;
        (entry.build)(&self.scheme)
    }

    pub fn build(&self) -> Result<Map<String, Value>, StyleError> {
        tracing::debug!(
            scheme = %self.scheme.name,
            nodes = self.nodes.len(),
            "building style tree"
        );
        let mut tree = Map::new();
        for entry in self.nodes {
            tracing::trace!(node = entry.name, "resolving style node");
            tree.insert(entry.name.to_string(), (entry.build)(&self.scheme)?);
        }
        tracing::debug!(scheme = %self.scheme.name, nodes = tree.len(), "style tree built");
        Ok(tree)
    }

    pub fn to_json_pretty(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(&self.build()?)?)
    }
}
