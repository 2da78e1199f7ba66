//! Typed AST records.
//!
//! Each record is a flat bag of optional fields named after the parser's own
//! properties. A record shape is shared by every syntactic form that decodes
//! through it (a `Statement` may be a class, an interface, an import or a plain
//! statement), so a field that means nothing for a given `kind` simply stays
//! empty. See `node_access::HasKind` for interpreting `kind`.
//!
//! `SourceFile` lives in `source_file` because it carries the import memo.

ast_record! {
    /// Leaf node: identifiers, literals, tokens, modifiers and JSDoc comments.
    pub struct AstObject {
        text: Option<String> = "text",
        escaped_text: Option<String> = "escapedText",
        comment: Option<String> = "comment",
        has_extended_unicode_escape: bool = "hasExtendedUnicodeEscape",
    }
}

ast_record! {
    /// Generic expression. Parenthesized expressions wrap their operand in
    /// `expression`; property accesses carry the accessed `name`.
    pub struct Expression {
        expression: Option<Box<Expression>> = "expression",
        name: Option<Box<AstObject>> = "name",
        text: Option<String> = "text",
        escaped_text: Option<String> = "escapedText",
    }
}

ast_record! {
    /// A function or method body.
    pub struct Block {
        statements: Vec<Statement> = "statements",
    }
}

ast_record! {
    /// Top-level or body construct: class, interface, function and import
    /// declarations, and plain statements.
    pub struct Statement {
        name: Option<Box<AstObject>> = "name",
        body: Option<Box<Block>> = "body",
        expression: Option<Box<Expression>> = "expression",
        module_specifier: Option<Box<ModuleSpecifier>> = "moduleSpecifier",
        import_clause: Option<Box<ImportClause>> = "importClause",
        heritage_clauses: Vec<HeritageClause> = "heritageClauses",
        modifiers: Vec<AstObject> = "modifiers",
        members: Vec<Member> = "members",
        parameters: Vec<Parameter> = "parameters",
        js_doc: Vec<AstObject> = "jsDoc",
    }
}

ast_record! {
    /// Class or interface member.
    pub struct Member {
        name: Option<Box<AstObject>> = "name",
        type_: Option<Box<TypeReference>> = "type",
        question_token: Option<Box<AstObject>> = "questionToken",
        js_doc: Vec<AstObject> = "jsDoc",
        modifiers: Vec<AstObject> = "modifiers",
        initializer: Option<Box<Initializer>> = "initializer",
        parameters: Vec<Parameter> = "parameters",
        body: Option<Box<Block>> = "body",
    }
}

ast_record! {
    pub struct Parameter {
        name: Option<Box<AstObject>> = "name",
        type_: Option<Box<TypeReference>> = "type",
        question_token: Option<Box<AstObject>> = "questionToken",
    }
}

ast_record! {
    /// Type annotation. Function types list their `parameters` and return
    /// `type`; union types list their members in `types`; heritage clause
    /// entries name their base type through `expression`.
    pub struct TypeReference {
        type_name: Option<Box<AstObject>> = "typeName",
        type_: Option<Box<AstObject>> = "type",
        types: Vec<LiteralType> = "types",
        parameters: Vec<Parameter> = "parameters",
        expression: Option<Box<Expression>> = "expression",
    }
}

ast_record! {
    /// Member of a union type.
    pub struct LiteralType {
        literal: Option<Box<AstObject>> = "literal",
        type_name: Option<Box<AstObject>> = "typeName",
    }
}

ast_record! {
    /// Object literal property.
    pub struct Property {
        name: Option<Box<AstObject>> = "name",
        initializer: Option<Box<AstObject>> = "initializer",
    }
}

ast_record! {
    /// Member initializer: an object literal, a literal value or an arrow
    /// function.
    pub struct Initializer {
        properties: Vec<Property> = "properties",
        text: Option<String> = "text",
        body: Option<Box<Block>> = "body",
    }
}

ast_record! {
    /// Import or export specifier. `name` is the local binding; `propertyName`
    /// is the original name when the specifier is aliased.
    pub struct Element {
        name: Option<Box<AstObject>> = "name",
        property_name: Option<Box<AstObject>> = "propertyName",
    }
}

ast_record! {
    /// `extends` / `implements` clause.
    pub struct HeritageClause {
        types: Vec<TypeReference> = "types",
    }
}

ast_record! {
    pub struct ModuleSpecifier {
        text: String = "text",
    }
}

ast_record! {
    /// `Foo, { Bar }` in `import Foo, { Bar } from "lib"`.
    pub struct ImportClause {
        name: Option<Box<AstObject>> = "name",
        named_bindings: Option<Box<NamedBindings>> = "namedBindings",
    }
}

ast_record! {
    /// Either a namespace import (`* as ns`, which sets `name`) or a list of
    /// named imports (`elements`).
    pub struct NamedBindings {
        name: Option<Box<AstObject>> = "name",
        elements: Vec<Element> = "elements",
    }
}
