//! The Schema Registry: the closed set of record types.
//!
//! `RecordKind` names a record type at runtime, so a caller can pick the
//! decode target as a value (`materialize_any`) and inspect any schema.

use crate::materialize::{DecodeError, MaterializeOptions, materialize_with};
use crate::node_access::HasKind;
use crate::nodes::*;
use crate::schema::{Record, Schema};
use crate::source_file::SourceFile;
use tsa_common::DynamicNode;

macro_rules! record_registry {
    ($($variant:ident),* $(,)?) => {
        /// Record types known to the materializer.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum RecordKind {
            $($variant,)*
        }

        /// A record of any type, as produced by [`materialize_any`].
        #[derive(Clone, Debug)]
        pub enum AnyRecord {
            $($variant($variant),)*
        }

        impl RecordKind {
            pub const ALL: &'static [RecordKind] = &[$(RecordKind::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(RecordKind::$variant => <$variant as Record>::NAME,)*
                }
            }

            pub fn schema(self) -> &'static Schema {
                match self {
                    $(RecordKind::$variant => <$variant as Record>::schema(),)*
                }
            }
        }

        impl AnyRecord {
            pub fn record_kind(&self) -> RecordKind {
                match self {
                    $(AnyRecord::$variant(_) => RecordKind::$variant,)*
                }
            }
        }

        impl HasKind for AnyRecord {
            fn kind(&self) -> u16 {
                match self {
                    $(AnyRecord::$variant(record) => record.kind,)*
                }
            }
        }

        /// Materialize `node` as the record type selected by `target`.
        pub fn materialize_any(
            node: &DynamicNode,
            target: RecordKind,
            options: &MaterializeOptions,
        ) -> Result<AnyRecord, DecodeError> {
            Ok(match target {
                $(RecordKind::$variant => {
                    AnyRecord::$variant(materialize_with::<$variant>(node, options)?)
                })*
            })
        }
    };
}

record_registry! {
    SourceFile,
    Statement,
    Block,
    Member,
    Expression,
    Parameter,
    TypeReference,
    LiteralType,
    Property,
    Initializer,
    Element,
    HeritageClause,
    ModuleSpecifier,
    ImportClause,
    NamedBindings,
    AstObject,
}

impl RecordKind {
    pub fn from_name(name: &str) -> Option<RecordKind> {
        RecordKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// Schema of the record type called `name`.
pub fn lookup(name: &str) -> Option<&'static Schema> {
    RecordKind::from_name(name).map(RecordKind::schema)
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
