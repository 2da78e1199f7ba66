//! Declarative record definitions.
//!
//! `ast_record!` generates, from one field list, the record struct, its static
//! schema table and its decoder, so the three can never disagree. Every record
//! gets a leading `kind: u16` field. Fields listed under `memo` are runtime
//! state: they are not part of the schema, are never decoded, and are skipped
//! when serializing.

macro_rules! ast_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fty:ty = $key:literal
            ),* $(,)?
        }
        $(
            memo {
                $( $(#[$mmeta:meta])* $mfield:ident : $mty:ty ),* $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, ::serde::Serialize)]
        pub struct $name {
            pub kind: u16,
            $(
                $(#[$fmeta])*
                #[serde(rename = $key)]
                pub $field: $fty,
            )*
            $($(
                $(#[$mmeta])*
                #[serde(skip)]
                $mfield: $mty,
            )*)?
        }

        impl $crate::schema::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn schema() -> &'static $crate::schema::Schema {
                use $crate::schema::{FieldSpec, FieldValue, Schema};
                static SCHEMA: Schema = Schema {
                    name: stringify!($name),
                    fields: &[
                        FieldSpec::new("kind", <u16 as FieldValue>::KIND),
                        $( FieldSpec::new($key, <$fty as FieldValue>::KIND), )*
                    ],
                };
                &SCHEMA
            }

            fn decode(
                node: &::tsa_common::DynamicNode,
                cx: &mut $crate::materialize::DecodeContext<'_>,
            ) -> Result<Self, $crate::materialize::DecodeError> {
                Ok($name {
                    kind: cx.field(node, "kind")?,
                    $( $field: cx.field(node, $key)?, )*
                    $($( $mfield: Default::default(), )*)?
                })
            }
        }

        impl $crate::node_access::HasKind for $name {
            #[inline]
            fn kind(&self) -> u16 {
                self.kind
            }
        }
    };
}
