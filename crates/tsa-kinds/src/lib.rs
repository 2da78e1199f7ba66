//! TypeScript syntax kind codes and classification for tsa.
//!
//! This crate provides:
//! - `SyntaxKind` - The closed set of kind codes the query layer understands
//! - `classify` - Total predicates and display labels over raw kind codes
//!
//! Kind numbering belongs to the external parser (TypeScript 4.x as embedded by
//! the host). A different parser version may shift the numbers.

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod classify;
pub use classify::{UNKNOWN_TYPE, get_node_type, get_primitive_type_name};
