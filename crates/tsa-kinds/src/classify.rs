//! Kind classification.
//!
//! Every predicate here is a total function of the raw kind code: it answers
//! `true` for an exact match and `false` for anything else, including codes
//! that have no `SyntaxKind` variant.

use crate::SyntaxKind;

/// Sentinel returned by [`get_primitive_type_name`] for kinds that are not
/// primitive type keywords.
pub const UNKNOWN_TYPE: &str = "$unknown";

#[inline]
const fn is(kind: u16, expected: SyntaxKind) -> bool {
    kind == expected as u16
}

#[inline]
pub const fn is_return_statement(kind: u16) -> bool {
    is(kind, SyntaxKind::ReturnStatement)
}

#[inline]
pub const fn is_class_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::ClassDeclaration)
}

#[inline]
pub const fn is_interface_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::InterfaceDeclaration)
}

#[inline]
pub const fn is_function_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::FunctionDeclaration)
}

#[inline]
pub const fn is_import_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::ImportDeclaration)
}

#[inline]
pub const fn is_simple_method_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::SimpleMethod)
}

#[inline]
pub const fn is_arrow_method_declaration(kind: u16) -> bool {
    is(kind, SyntaxKind::ArrowMethod)
}

/// Either flavour of class method.
#[inline]
pub const fn is_method_declaration(kind: u16) -> bool {
    is_simple_method_declaration(kind) || is_arrow_method_declaration(kind)
}

#[inline]
pub const fn is_property_access_expression(kind: u16) -> bool {
    is(kind, SyntaxKind::PropertyAccessExpression)
}

#[inline]
pub const fn is_parenthesized_expression(kind: u16) -> bool {
    is(kind, SyntaxKind::ParenthesizedExpression)
}

#[inline]
pub const fn is_expression_with_type_arguments(kind: u16) -> bool {
    is(kind, SyntaxKind::ExpressionWithTypeArguments)
}

#[inline]
pub const fn is_heritage_clause(kind: u16) -> bool {
    is(kind, SyntaxKind::HeritageClause)
}

#[inline]
pub const fn is_union_type(kind: u16) -> bool {
    is(kind, SyntaxKind::UnionType)
}

#[inline]
pub const fn is_function_type(kind: u16) -> bool {
    is(kind, SyntaxKind::FunctionType)
}

/// A JSX element, with or without a closing tag.
#[inline]
pub const fn is_jsx_element(kind: u16) -> bool {
    is(kind, SyntaxKind::JsxElement) || is(kind, SyntaxKind::JsxSelfClosingElement)
}

#[inline]
pub const fn is_jsx_fragment(kind: u16) -> bool {
    is(kind, SyntaxKind::JsxFragment)
}

#[inline]
pub const fn is_export_keyword(kind: u16) -> bool {
    is(kind, SyntaxKind::ExportKeyword)
}

#[inline]
pub const fn is_default_keyword(kind: u16) -> bool {
    is(kind, SyntaxKind::DefaultKeyword)
}

/// Display label for the declaration kinds the query layer distinguishes.
pub const fn get_node_type(kind: u16) -> &'static str {
    match SyntaxKind::from_u16(kind) {
        Some(SyntaxKind::ClassDeclaration) => "ClassDeclaration",
        Some(SyntaxKind::FunctionDeclaration) => "FunctionDeclaration",
        Some(SyntaxKind::InterfaceDeclaration) => "InterfaceDeclaration",
        Some(SyntaxKind::ImportDeclaration) => "ImportDeclaration",
        _ => "Unknown",
    }
}

/// Canonical TypeScript name of a primitive type keyword.
///
/// Function types map to `"Function"`. Anything else yields [`UNKNOWN_TYPE`].
pub const fn get_primitive_type_name(kind: u16) -> &'static str {
    match SyntaxKind::from_u16(kind) {
        Some(SyntaxKind::NumberKeyword) => "number",
        Some(SyntaxKind::StringKeyword) => "string",
        Some(SyntaxKind::BooleanKeyword) => "boolean",
        Some(SyntaxKind::VoidKeyword) => "void",
        Some(SyntaxKind::FunctionType) => "Function",
        Some(SyntaxKind::AnyKeyword) => "any",
        Some(SyntaxKind::NullKeyword) => "null",
        Some(SyntaxKind::UndefinedKeyword) => "undefined",
        Some(SyntaxKind::NeverKeyword) => "never",
        _ => UNKNOWN_TYPE,
    }
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
