//! Typed TypeScript AST for tsa.
//!
//! The external parser produces an untyped tree (`tsa_common::DynamicNode`).
//! This crate turns it into typed records and answers questions about them:
//! - `schema` / `registry` - Static per-record field tables (the Schema Registry)
//! - `materialize` - Recursive, shape-checked decoding into typed records
//! - `nodes` - The record types themselves
//! - `node_access` - Kind-based classification on any record
//! - `queries` - JSDoc, JSX-return, method and modifier queries
//! - `source_file` - The root record and its import/member lookups
//!
//! Records are flat: one struct shape is reused for many syntactic forms, and
//! the `kind` field decides what a node actually is.

#[macro_use]
mod macros;

pub mod schema;
pub use schema::{FieldKind, FieldSpec, FieldValue, Record, ScalarKind, Schema};

pub mod materialize;
pub use materialize::{
    DecodeContext, DecodeError, FieldPath, MaterializeOptions, PathSegment, materialize,
    materialize_with,
};

pub mod node_access;
pub use node_access::HasKind;

pub mod nodes;
pub use nodes::*;

pub mod source_file;
pub use source_file::{SourceFile, TypeMembers};

pub mod registry;
pub use registry::{AnyRecord, RecordKind, lookup, materialize_any};

pub mod queries;
pub use queries::{QueryError, get_js_doc, has_method, returns_jsx_fragment};

pub use tsa_common::{DynamicNode, DynamicValue, Shape};
pub use tsa_kinds::SyntaxKind;

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
pub(crate) mod fixtures;
