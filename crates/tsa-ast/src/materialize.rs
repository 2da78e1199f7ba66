//! Materializer: decode a dynamic node into a typed record.
//!
//! Decoding walks the target record's schema, never the input map, so unknown
//! keys are ignored. A missing key, `undefined` or `null` leaves the field at
//! its zero value. A value of the wrong shape is fatal and reported with the
//! full field path.
//!
//! The target record is chosen by the caller, not by the node's `kind`: many
//! syntactic forms are decoded through the same record shape and the `kind`
//! field is interpreted afterwards by the query layer.

use crate::schema::{FieldKind, FieldValue, Record};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};
use tsa_common::limits::DECODE_PATH_INLINE_CAPACITY;
use tsa_common::{DynamicNode, DynamicValue, Shape};

/// Materializer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Maximum node nesting depth. `None` means unbounded: the decoder recurses
    /// as deep as the input goes.
    pub max_depth: Option<u32>,
}

impl MaterializeOptions {
    pub fn with_max_depth(max_depth: u32) -> MaterializeOptions {
        MaterializeOptions {
            max_depth: Some(max_depth),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

/// Location of a field inside the tree being decoded, e.g.
/// `SourceFile.statements[2].members[0].name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    pub root: &'static str,
    pub segments: Vec<PathSegment>,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A decode contract violation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecodeError {
    #[error("{path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: FieldPath,
        expected: FieldKind,
        found: Shape,
    },

    #[error("{path}: {value} is not a valid {target}")]
    NumberOutOfRange {
        path: FieldPath,
        value: f64,
        target: &'static str,
    },

    #[error("{path}: nesting exceeds the configured limit of {limit}")]
    DepthLimitExceeded { path: FieldPath, limit: u32 },
}

impl DecodeError {
    pub fn path(&self) -> &FieldPath {
        match self {
            DecodeError::ShapeMismatch { path, .. }
            | DecodeError::NumberOutOfRange { path, .. }
            | DecodeError::DepthLimitExceeded { path, .. } => path,
        }
    }
}

/// Per-call decoding state: the current field path and nesting depth.
pub struct DecodeContext<'o> {
    options: &'o MaterializeOptions,
    root: &'static str,
    path: SmallVec<[PathSegment; DECODE_PATH_INLINE_CAPACITY]>,
    depth: u32,
    nodes_decoded: usize,
}

impl<'o> DecodeContext<'o> {
    fn new(root: &'static str, options: &'o MaterializeOptions) -> DecodeContext<'o> {
        DecodeContext {
            options,
            root,
            path: SmallVec::new(),
            depth: 0,
            nodes_decoded: 0,
        }
    }

    /// Decode the field stored under `key`, or its zero value if the key
    /// carries no data.
    pub fn field<T: FieldValue>(
        &mut self,
        node: &DynamicNode,
        key: &'static str,
    ) -> Result<T, DecodeError> {
        let value = match node.get(key) {
            Some(value) if !value.is_nullish() => value,
            _ => return Ok(T::default()),
        };

        self.path.push(PathSegment::Field(key));
        let result = T::decode(value, self);
        self.path.pop();
        result
    }

    /// Decode a nested node one level deeper.
    pub fn child<T: Record>(&mut self, node: &DynamicNode) -> Result<T, DecodeError> {
        if let Some(limit) = self.options.max_depth
            && self.depth >= limit
        {
            return Err(DecodeError::DepthLimitExceeded {
                path: self.current_path(),
                limit,
            });
        }

        self.depth += 1;
        self.nodes_decoded += 1;
        let result = T::decode(node, self);
        self.depth -= 1;
        result
    }

    /// Decode one list element. Nullish elements keep their slot as a
    /// zero-valued record so the list length is preserved.
    pub fn element<T: Record>(
        &mut self,
        index: usize,
        item: &DynamicValue,
    ) -> Result<T, DecodeError> {
        self.path.push(PathSegment::Index(index));
        let result = match item {
            DynamicValue::Node(node) => self.child::<T>(node),
            item if item.is_nullish() => Ok(T::default()),
            item => Err(self.mismatch(FieldKind::Node(T::NAME), item.shape())),
        };
        self.path.pop();
        result
    }

    pub fn mismatch(&self, expected: FieldKind, found: Shape) -> DecodeError {
        DecodeError::ShapeMismatch {
            path: self.current_path(),
            expected,
            found,
        }
    }

    pub fn out_of_range(&self, value: f64, target: &'static str) -> DecodeError {
        DecodeError::NumberOutOfRange {
            path: self.current_path(),
            value,
            target,
        }
    }

    pub fn current_path(&self) -> FieldPath {
        FieldPath {
            root: self.root,
            segments: self.path.to_vec(),
        }
    }
}

/// Materialize `node` as record `T` with default options.
pub fn materialize<T: Record>(node: &DynamicNode) -> Result<T, DecodeError> {
    materialize_with(node, &MaterializeOptions::default())
}

/// Materialize `node` as record `T`.
pub fn materialize_with<T: Record>(
    node: &DynamicNode,
    options: &MaterializeOptions,
) -> Result<T, DecodeError> {
    let _span = tracing::debug_span!("materialize", record = T::NAME).entered();
    trace!(keys = node.len(), max_depth = ?options.max_depth, "decoding root node");

    let mut cx = DecodeContext::new(T::NAME, options);
    cx.nodes_decoded = 1;
    let result = T::decode(node, &mut cx);

    match &result {
        Ok(_) => debug!(nodes = cx.nodes_decoded, "materialized"),
        Err(err) => debug!(error = %err, "materialization failed"),
    }
    result
}

#[cfg(test)]
#[path = "../tests/materialize_tests.rs"]
mod tests;
