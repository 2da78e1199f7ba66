//! Schema Registry entries: static field tables for every record type.
//!
//! A record's schema is an ordered list of `(field name, field kind)` pairs.
//! Field names are the parser's property names; field kinds describe which
//! shape of dynamic value the field accepts. Schemas are generated by the
//! `ast_record!` macro from the record's Rust field types via [`FieldValue`].

use crate::materialize::{DecodeContext, DecodeError};
use std::fmt;
use tsa_common::{DynamicNode, DynamicValue};

/// Primitive field flavours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Boolean,
}

/// What shape of dynamic value a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Scalar(ScalarKind),
    String,
    /// A nested node decoded as the named record.
    Node(&'static str),
    /// An ordered list whose elements decode as the named record.
    List(&'static str),
}

impl FieldKind {
    /// The record a `Node` or `List` field refers to.
    pub const fn variant(self) -> Option<&'static str> {
        match self {
            FieldKind::Node(name) | FieldKind::List(name) => Some(name),
            FieldKind::Scalar(_) | FieldKind::String => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(ScalarKind::Integer) => f.write_str("integer"),
            FieldKind::Scalar(ScalarKind::Boolean) => f.write_str("boolean"),
            FieldKind::String => f.write_str("string"),
            FieldKind::Node(name) => write!(f, "node `{name}`"),
            FieldKind::List(name) => write!(f, "list of `{name}`"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> FieldSpec {
        FieldSpec { name, kind }
    }
}

/// The static field table of one record type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

/// A typed AST record that can be decoded from a dynamic node.
///
/// `Default` is the zero-valued record: what an empty input map decodes to.
pub trait Record: Default + Sized {
    const NAME: &'static str;

    fn schema() -> &'static Schema;

    /// Decode every schema field of `node`. Keys outside the schema are ignored
    /// and `kind` is never inspected.
    fn decode(node: &DynamicNode, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError>;
}

/// A Rust type usable as a record field.
///
/// `decode` is only called for values that carry data; missing keys,
/// `undefined` and `null` leave the field at `Default::default()`.
pub trait FieldValue: Default + Sized {
    const KIND: FieldKind;

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError>;
}

macro_rules! impl_integer_field {
    ($($target:ty),* $(,)?) => {
        $(impl FieldValue for $target {
            const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Integer);

            fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
                match value {
                    DynamicValue::Number(n)
                        if n.fract() == 0.0
                            && *n >= <$target>::MIN as f64
                            && *n <= <$target>::MAX as f64 =>
                    {
                        Ok(*n as $target)
                    }
                    DynamicValue::Number(n) => Err(cx.out_of_range(*n, stringify!($target))),
                    other => Err(cx.mismatch(Self::KIND, other.shape())),
                }
            }
        })*
    };
}

impl_integer_field!(u16, u32);

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Boolean);

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
        match value {
            DynamicValue::Bool(b) => Ok(*b),
            other => Err(cx.mismatch(Self::KIND, other.shape())),
        }
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
        match value {
            DynamicValue::String(s) => Ok(s.clone()),
            DynamicValue::Bool(b) => Ok(b.to_string()),
            DynamicValue::Number(n) => Ok(format_number(*n)),
            other => Err(cx.mismatch(Self::KIND, other.shape())),
        }
    }
}

impl FieldValue for Option<String> {
    const KIND: FieldKind = FieldKind::String;

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
        <String as FieldValue>::decode(value, cx).map(Some)
    }
}

impl<T: Record> FieldValue for Option<Box<T>> {
    const KIND: FieldKind = FieldKind::Node(T::NAME);

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
        match value {
            DynamicValue::Node(node) => cx.child::<T>(node).map(|record| Some(Box::new(record))),
            other => Err(cx.mismatch(Self::KIND, other.shape())),
        }
    }
}

impl<T: Record> FieldValue for Vec<T> {
    const KIND: FieldKind = FieldKind::List(T::NAME);

    fn decode(value: &DynamicValue, cx: &mut DecodeContext<'_>) -> Result<Self, DecodeError> {
        let DynamicValue::List(items) = value else {
            return Err(cx.mismatch(Self::KIND, value.shape()));
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            records.push(cx.element::<T>(index, item)?);
        }
        Ok(records)
    }
}

/// Stringify a number the way the JS engine would.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
#[path = "../tests/schema_tests.rs"]
mod tests;
