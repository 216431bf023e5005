pub mod error;
pub mod prelude;
pub mod style;
pub mod style_tree;
pub mod theme;
pub mod tokens;

pub use error::StyleError;
pub use style_tree::{BUILTIN_NODES, NodeEntry, StyleTree, command_palette};
pub use theme::{ColorScheme, SchemePatch};
