//! Kind-based classification on typed records.
//!
//! Which record type a node was decoded into says nothing about what the node
//! is; only its `kind` does. `HasKind` exposes the classifier on every record
//! so callers can write `statement.is_class_declaration()`.

use tsa_kinds::{SyntaxKind, classify};

pub trait HasKind {
    /// Raw kind code as produced by the parser.
    fn kind(&self) -> u16;

    #[inline]
    fn syntax_kind(&self) -> Option<SyntaxKind> {
        SyntaxKind::from_u16(self.kind())
    }

    /// "ClassDeclaration", "FunctionDeclaration", "InterfaceDeclaration",
    /// "ImportDeclaration" or "Unknown".
    #[inline]
    fn node_type(&self) -> &'static str {
        classify::get_node_type(self.kind())
    }

    /// Primitive type name for type nodes, `$unknown` otherwise.
    #[inline]
    fn primitive_type_name(&self) -> &'static str {
        classify::get_primitive_type_name(self.kind())
    }

    #[inline]
    fn is_return_statement(&self) -> bool {
        classify::is_return_statement(self.kind())
    }

    #[inline]
    fn is_class_declaration(&self) -> bool {
        classify::is_class_declaration(self.kind())
    }

    #[inline]
    fn is_interface_declaration(&self) -> bool {
        classify::is_interface_declaration(self.kind())
    }

    #[inline]
    fn is_function_declaration(&self) -> bool {
        classify::is_function_declaration(self.kind())
    }

    #[inline]
    fn is_import_declaration(&self) -> bool {
        classify::is_import_declaration(self.kind())
    }

    #[inline]
    fn is_method_declaration(&self) -> bool {
        classify::is_method_declaration(self.kind())
    }

    #[inline]
    fn is_simple_method_declaration(&self) -> bool {
        classify::is_simple_method_declaration(self.kind())
    }

    #[inline]
    fn is_arrow_method_declaration(&self) -> bool {
        classify::is_arrow_method_declaration(self.kind())
    }

    #[inline]
    fn is_property_access_expression(&self) -> bool {
        classify::is_property_access_expression(self.kind())
    }

    #[inline]
    fn is_parenthesized_expression(&self) -> bool {
        classify::is_parenthesized_expression(self.kind())
    }

    #[inline]
    fn is_expression_with_type_arguments(&self) -> bool {
        classify::is_expression_with_type_arguments(self.kind())
    }

    #[inline]
    fn is_heritage_clause(&self) -> bool {
        classify::is_heritage_clause(self.kind())
    }

    #[inline]
    fn is_union_type(&self) -> bool {
        classify::is_union_type(self.kind())
    }

    #[inline]
    fn is_function_type(&self) -> bool {
        classify::is_function_type(self.kind())
    }

    #[inline]
    fn is_jsx_element(&self) -> bool {
        classify::is_jsx_element(self.kind())
    }

    #[inline]
    fn is_jsx_fragment(&self) -> bool {
        classify::is_jsx_fragment(self.kind())
    }
}
