//! Common types for the tsa TypeScript AST materializer.
//!
//! This crate provides the input contract shared by every other tsa crate:
//! - Dynamic parse-tree values (`DynamicValue`, `DynamicNode`, `Shape`)
//! - Limits and thresholds

// Dynamic values - the untyped tree handed over by the external parser
pub mod value;
pub use value::{DynamicNode, DynamicValue, Shape};

// Centralized limits and thresholds
pub mod limits;
