//! Kind codes recognised by the classifier.
//!
//! Only the kinds the query layer actually inspects are listed. Every other
//! code is still carried verbatim on the typed records as a `u16`; it just has
//! no `SyntaxKind` variant.

/// Syntax kinds, numbered as the external parser numbers them.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    Unknown = 0,

    // Modifier keywords
    DefaultKeyword = 87,
    ExportKeyword = 92,

    // Primitive type keywords
    VoidKeyword = 113,
    AnyKeyword = 128,
    BooleanKeyword = 131,
    NeverKeyword = 141,
    NumberKeyword = 144,
    StringKeyword = 147,
    UndefinedKeyword = 150,

    // Class members
    /// A class property initialised with an arrow function (`render = () => ...`).
    ArrowMethod = 164,
    /// A plain method (`render() { ... }`).
    SimpleMethod = 166,

    // Type nodes
    FunctionType = 175,
    UnionType = 183,
    /// `null` in a type position.
    NullKeyword = 192,

    // Expressions
    PropertyAccessExpression = 198,
    ParenthesizedExpression = 208,
    ExpressionWithTypeArguments = 224,

    // Statements and declarations
    ReturnStatement = 243,
    FunctionDeclaration = 252,
    ClassDeclaration = 253,
    InterfaceDeclaration = 254,
    ImportDeclaration = 262,

    // JSX
    JsxElement = 274,
    JsxSelfClosingElement = 275,
    JsxFragment = 278,

    // Clauses
    HeritageClause = 287,
}

impl SyntaxKind {
    /// Every variant, in numeric order.
    pub const ALL: [SyntaxKind; 27] = [
        SyntaxKind::Unknown,
        SyntaxKind::DefaultKeyword,
        SyntaxKind::ExportKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::AnyKeyword,
        SyntaxKind::BooleanKeyword,
        SyntaxKind::NeverKeyword,
        SyntaxKind::NumberKeyword,
        SyntaxKind::StringKeyword,
        SyntaxKind::UndefinedKeyword,
        SyntaxKind::ArrowMethod,
        SyntaxKind::SimpleMethod,
        SyntaxKind::FunctionType,
        SyntaxKind::UnionType,
        SyntaxKind::NullKeyword,
        SyntaxKind::PropertyAccessExpression,
        SyntaxKind::ParenthesizedExpression,
        SyntaxKind::ExpressionWithTypeArguments,
        SyntaxKind::ReturnStatement,
        SyntaxKind::FunctionDeclaration,
        SyntaxKind::ClassDeclaration,
        SyntaxKind::InterfaceDeclaration,
        SyntaxKind::ImportDeclaration,
        SyntaxKind::JsxElement,
        SyntaxKind::JsxSelfClosingElement,
        SyntaxKind::JsxFragment,
        SyntaxKind::HeritageClause,
    ];

    /// Map a raw kind code onto a known variant.
    pub const fn from_u16(kind: u16) -> Option<SyntaxKind> {
        Some(match kind {
            0 => SyntaxKind::Unknown,
            87 => SyntaxKind::DefaultKeyword,
            92 => SyntaxKind::ExportKeyword,
            113 => SyntaxKind::VoidKeyword,
            128 => SyntaxKind::AnyKeyword,
            131 => SyntaxKind::BooleanKeyword,
            141 => SyntaxKind::NeverKeyword,
            144 => SyntaxKind::NumberKeyword,
            147 => SyntaxKind::StringKeyword,
            150 => SyntaxKind::UndefinedKeyword,
            164 => SyntaxKind::ArrowMethod,
            166 => SyntaxKind::SimpleMethod,
            175 => SyntaxKind::FunctionType,
            183 => SyntaxKind::UnionType,
            192 => SyntaxKind::NullKeyword,
            198 => SyntaxKind::PropertyAccessExpression,
            208 => SyntaxKind::ParenthesizedExpression,
            224 => SyntaxKind::ExpressionWithTypeArguments,
            243 => SyntaxKind::ReturnStatement,
            252 => SyntaxKind::FunctionDeclaration,
            253 => SyntaxKind::ClassDeclaration,
            254 => SyntaxKind::InterfaceDeclaration,
            262 => SyntaxKind::ImportDeclaration,
            274 => SyntaxKind::JsxElement,
            275 => SyntaxKind::JsxSelfClosingElement,
            278 => SyntaxKind::JsxFragment,
            287 => SyntaxKind::HeritageClause,
            _ => return None,
        })
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}
