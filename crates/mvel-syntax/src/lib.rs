//! Shared syntax definitions for the MVEL frontend: token and node kinds,
//! the reserved-word and markup tables, and the owned syntax tree.
//!
//! The tree is built once per parse and handed out as an immutable value.
//! Every node carries a kind tag, a byte range, and the children it owns.

mod builder;
mod syntax_kind;
mod syntax_set;
mod tree;

/// Incremental builder for constructing a `SyntaxNode`.
pub use builder::Builder;
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Tree types and traversal.
pub use tree::{NodeOrToken, Preorder, SyntaxElement, SyntaxNode, SyntaxToken, WalkEvent};
