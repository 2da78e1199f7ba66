//! Queries over typed records: JSDoc text, JSX returns, methods, modifiers.
//!
//! All queries are total. Missing data yields an empty string, `false` or
//! `None`; the one exception is [`Statement::class_name`], which refuses
//! statements that are not class declarations.

use crate::node_access::HasKind;
use crate::nodes::*;
use std::fmt;
use thiserror::Error;
use tsa_kinds::classify;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("expected a class declaration, found {node_type} (kind {kind})")]
    NotAClass { kind: u16, node_type: &'static str },
}

/// Join JSDoc comments.
///
/// A single comment is returned verbatim. Several comments are each followed
/// by a newline, the last one included.
pub fn get_js_doc(js_doc: &[AstObject]) -> String {
    match js_doc {
        [] => String::new(),
        [only] => only.comment.clone().unwrap_or_default(),
        docs => {
            let mut builder = String::with_capacity(1024);
            for doc in docs {
                builder.push_str(doc.comment.as_deref().unwrap_or_default());
                builder.push('\n');
            }
            builder
        }
    }
}

/// Whether `statement` is a class with a method called `method_name`.
///
/// Non-class statements answer `false`.
pub fn has_method(statement: &Statement, method_name: &str) -> bool {
    if !statement.is_class_declaration() {
        return false;
    }

    statement
        .members
        .iter()
        .any(|member| member.is_method_declaration() && member.name_text() == Some(method_name))
}

/// Whether any top-level statement of `body` returns JSX, looking through
/// any number of wrapping parentheses.
pub fn returns_jsx_fragment(body: &Block) -> bool {
    body.statements
        .iter()
        .any(|statement| statement.is_return_statement() && is_jsx(statement.expression.as_deref()))
}

fn is_jsx(mut expression: Option<&Expression>) -> bool {
    while let Some(expr) = expression {
        if expr.is_jsx_element() || expr.is_jsx_fragment() {
            return true;
        }
        if !expr.is_parenthesized_expression() {
            return false;
        }
        expression = expr.expression.as_deref();
    }
    false
}

impl AstObject {
    /// Identifier text as the parser escaped it.
    pub fn escaped_text(&self) -> Option<&str> {
        self.escaped_text.as_deref()
    }

    /// Source text, falling back to the escaped identifier text.
    pub fn display_text(&self) -> Option<&str> {
        self.text.as_deref().or(self.escaped_text.as_deref())
    }
}

impl Expression {
    /// `Foo` for an identifier, `a.b.Foo` for a property access.
    pub fn qualified_name(&self) -> Option<String> {
        if self.is_property_access_expression() {
            let object = self.expression.as_deref()?.qualified_name()?;
            let name = self.name.as_deref()?.escaped_text()?;
            return Some(format!("{object}.{name}"));
        }
        self.escaped_text.clone().or_else(|| self.text.clone())
    }
}

impl Block {
    pub fn returns_jsx_fragment(&self) -> bool {
        returns_jsx_fragment(self)
    }
}

impl Statement {
    pub fn name_text(&self) -> Option<&str> {
        self.name.as_deref().and_then(AstObject::escaped_text)
    }

    /// Name of a class declaration; `Ok(None)` for an anonymous class.
    pub fn class_name(&self) -> Result<Option<&str>, QueryError> {
        if !self.is_class_declaration() {
            return Err(QueryError::NotAClass {
                kind: self.kind,
                node_type: self.node_type(),
            });
        }
        Ok(self.name_text())
    }

    pub fn has_method(&self, method_name: &str) -> bool {
        has_method(self, method_name)
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name_text() == Some(name))
    }

    pub fn has_export_modifier(&self) -> bool {
        self.modifiers
            .iter()
            .any(|m| classify::is_export_keyword(m.kind))
    }

    pub fn has_default_modifier(&self) -> bool {
        self.modifiers
            .iter()
            .any(|m| classify::is_default_keyword(m.kind))
    }

    pub fn has_heritage_clauses(&self) -> bool {
        !self.heritage_clauses.is_empty()
    }

    /// Base type names listed in `extends` / `implements` clauses, in order.
    pub fn heritage_type_names(&self) -> Vec<String> {
        self.heritage_clauses
            .iter()
            .flat_map(|clause| &clause.types)
            .filter_map(|ty| match ty.expression.as_deref() {
                Some(expr) => expr.qualified_name(),
                None => ty.type_name_text().map(str::to_string),
            })
            .collect()
    }

    pub fn js_doc(&self) -> String {
        get_js_doc(&self.js_doc)
    }

    /// Whether a function declaration's body returns JSX.
    pub fn returns_jsx_fragment(&self) -> bool {
        self.body.as_deref().is_some_and(returns_jsx_fragment)
    }
}

impl Member {
    pub fn name_text(&self) -> Option<&str> {
        self.name.as_deref().and_then(AstObject::escaped_text)
    }

    pub fn is_method(&self) -> bool {
        self.is_method_declaration()
    }

    /// Declared with `?`.
    pub fn is_optional(&self) -> bool {
        self.question_token.is_some()
    }

    pub fn js_doc(&self) -> String {
        get_js_doc(&self.js_doc)
    }

    /// Display label of the member's declared type, if it has one.
    pub fn type_label(&self) -> Option<String> {
        self.type_.as_deref().map(TypeReference::label)
    }

    /// Whether the method body (or the arrow function assigned to the
    /// property) returns JSX.
    pub fn returns_jsx_fragment(&self) -> bool {
        let body = self
            .body
            .as_deref()
            .or_else(|| self.initializer.as_deref().and_then(|i| i.body.as_deref()));
        body.is_some_and(returns_jsx_fragment)
    }
}

impl TypeReference {
    pub fn type_name_text(&self) -> Option<&str> {
        self.type_name.as_deref().and_then(AstObject::escaped_text)
    }

    /// `Foo` for a type reference, `a | b` for a union, the primitive name for
    /// keyword types and `$unknown` for anything else.
    pub fn label(&self) -> String {
        if let Some(name) = self.type_name_text() {
            return name.to_string();
        }
        if self.is_union_type() {
            return self
                .types
                .iter()
                .map(LiteralType::label)
                .collect::<Vec<_>>()
                .join(" | ");
        }
        self.primitive_type_name().to_string()
    }
}

impl LiteralType {
    pub fn label(&self) -> String {
        if let Some(text) = self.literal.as_deref().and_then(AstObject::display_text) {
            return text.to_string();
        }
        if let Some(name) = self.type_name.as_deref().and_then(AstObject::escaped_text) {
            return name.to_string();
        }
        self.primitive_type_name().to_string()
    }
}

impl fmt::Display for AstObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.display_text(), self.comment.as_deref()) {
            (Some(text), _) => write!(f, "[Kind: {}; Text: {}]", self.kind, text),
            (None, Some(comment)) => write!(f, "[Kind: {}; Comment: {}]", self.kind, comment),
            (None, None) => write!(f, "[Kind: {}]", self.kind),
        }
    }
}

/// Write an optional child the way `Display` renders a missing one.
struct OptionalName<'a>(Option<&'a AstObject>);

impl fmt::Display for OptionalName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(name) => name.fmt(f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = OptionalName(self.name.as_deref());
        write!(f, "[Member: {}; Kind: {}]", name, self.kind)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = OptionalName(self.name.as_deref());
        write!(f, "[Element: {}; Kind: {}]", name, self.kind)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = OptionalName(self.name.as_deref());
        write!(f, "[Property: {}; Kind: {}]", name, self.kind)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.node_type())
    }
}

#[cfg(test)]
#[path = "../tests/queries_tests.rs"]
mod tests;
