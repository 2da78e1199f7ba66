//! tsa: a typed view of TypeScript syntax trees.
//!
//! An external TypeScript parser produces an untyped tree. tsa materializes it
//! into typed records and answers questions about it (JSDoc text, JSX returns,
//! class methods, import paths, interface members).
//!
//! Crate layout:
//! - `tsa_common` - Dynamic tree values and shared limits
//! - `tsa_kinds` - Syntax kind codes and classification
//! - `tsa_ast` - Records, schema registry, materializer and queries
//! - this crate - Parser seam, configuration, tracing setup

pub use tsa_ast::{
    AnyRecord, AstObject, Block, DecodeError, Element, Expression, FieldKind, FieldPath,
    FieldSpec, HasKind, HeritageClause, ImportClause, Initializer, LiteralType, MaterializeOptions,
    Member, ModuleSpecifier, NamedBindings, Parameter, Property, QueryError, Record, RecordKind,
    Schema, SourceFile, Statement, TypeMembers, TypeReference, get_js_doc, has_method, lookup,
    materialize, materialize_any, materialize_with, returns_jsx_fragment,
};
pub use tsa_common::{DynamicNode, DynamicValue, Shape};
pub use tsa_kinds::{SyntaxKind, UNKNOWN_TYPE, classify, get_node_type, get_primitive_type_name};

pub mod config;
pub use config::{TsaConfig, load_config, parse_config};

pub mod loader;
pub use loader::{SourceLoader, TypeScriptParser};

pub mod tracing_config;
