use super::*;
use crate::fixtures::*;
use crate::materialize::materialize;
use serde_json::{Value, json};

fn statement(value: Value) -> Statement {
    materialize(&dynamic(value)).unwrap()
}

fn member(value: Value) -> Member {
    materialize(&dynamic(value)).unwrap()
}

fn block(value: Value) -> Block {
    materialize(&dynamic(value)).unwrap()
}

fn doc(comment: Option<&str>) -> AstObject {
    AstObject {
        kind: 315,
        comment: comment.map(str::to_string),
        ..AstObject::default()
    }
}

fn return_of(expression: Value) -> Value {
    json!({ "kind": 243, "expression": expression })
}

#[test]
fn test_js_doc_empty() {
    assert_eq!(get_js_doc(&[]), "");
}

#[test]
fn test_js_doc_single_comment_is_verbatim() {
    assert_eq!(get_js_doc(&[doc(Some("Renders a button"))]), "Renders a button");
    assert_eq!(get_js_doc(&[doc(None)]), "");
}

#[test]
fn test_js_doc_multiple_comments_each_end_with_newline() {
    let docs = [doc(Some("first")), doc(None), doc(Some("third"))];
    assert_eq!(get_js_doc(&docs), "first\n\nthird\n");
}

#[test]
fn test_returns_jsx_through_parentheses() {
    // return (<Foo/>);
    let body = block(json!({
        "kind": 231,
        "statements": [return_of(json!({
            "kind": 208,
            "expression": { "kind": 275 },
        }))],
    }));
    assert!(body.returns_jsx_fragment());

    let nested = block(json!({
        "statements": [return_of(json!({
            "kind": 208,
            "expression": { "kind": 208, "expression": { "kind": 278 } },
        }))],
    }));
    assert!(returns_jsx_fragment(&nested));
}

#[test]
fn test_returns_jsx_element_and_fragment() {
    for kind in [274, 275, 278] {
        let body = block(json!({ "statements": [return_of(json!({ "kind": kind }))] }));
        assert!(body.returns_jsx_fragment(), "kind {kind}");
    }
}

#[test]
fn test_non_jsx_returns() {
    // return 5;
    let number = block(json!({ "statements": [return_of(json!({ "kind": 8, "text": "5" }))] }));
    assert!(!number.returns_jsx_fragment());

    // return;
    let bare = block(json!({ "statements": [{ "kind": 243 }] }));
    assert!(!bare.returns_jsx_fragment());

    // return ();  with nothing inside the parentheses
    let empty_parens = block(json!({ "statements": [return_of(json!({ "kind": 208 }))] }));
    assert!(!empty_parens.returns_jsx_fragment());

    // JSX in an expression statement is not a return.
    let not_return = block(json!({ "statements": [{ "kind": 234, "expression": { "kind": 274 } }] }));
    assert!(!not_return.returns_jsx_fragment());

    assert!(!Block::default().returns_jsx_fragment());
}

#[test]
fn test_function_declaration_returns_jsx() {
    let function = statement(json!({
        "kind": 252,
        "name": ident("App"),
        "body": { "statements": [return_of(json!({ "kind": 274 }))] },
    }));
    assert!(function.is_function_declaration());
    assert!(function.returns_jsx_fragment());

    let no_body = statement(json!({ "kind": 252, "name": ident("declared") }));
    assert!(!no_body.returns_jsx_fragment());
}

#[test]
fn test_has_method_on_class() {
    let class = statement(class_decl(
        "Button",
        vec![
            method("render"),
            json!({ "kind": 164, "name": ident("onClick") }),
            property_signature("label"),
        ],
    ));

    assert!(has_method(&class, "render"));
    assert!(class.has_method("onClick"));
    assert!(!class.has_method("label"));
    assert!(!class.has_method("missing"));
}

#[test]
fn test_has_method_is_false_for_non_classes() {
    let interface = statement(interface_decl("Props", vec![method("render")]));
    assert!(!interface.has_method("render"));
    assert!(!has_method(&Statement::default(), "render"));
}

#[test]
fn test_class_name() {
    let class = statement(class_decl("Button", vec![]));
    assert_eq!(class.class_name(), Ok(Some("Button")));

    let anonymous = statement(json!({ "kind": 253 }));
    assert_eq!(anonymous.class_name(), Ok(None));

    let interface = statement(interface_decl("Props", vec![]));
    assert_eq!(
        interface.class_name(),
        Err(QueryError::NotAClass {
            kind: 254,
            node_type: "InterfaceDeclaration",
        })
    );
    assert_eq!(
        interface.class_name().unwrap_err().to_string(),
        "expected a class declaration, found InterfaceDeclaration (kind 254)"
    );
}

#[test]
fn test_export_and_default_modifiers() {
    let exported = statement(json!({
        "kind": 253,
        "modifiers": [{ "kind": 92 }, { "kind": 87 }],
    }));
    assert!(exported.has_export_modifier());
    assert!(exported.has_default_modifier());

    let named_export = statement(json!({ "kind": 254, "modifiers": [{ "kind": 92 }] }));
    assert!(named_export.has_export_modifier());
    assert!(!named_export.has_default_modifier());

    assert!(!Statement::default().has_export_modifier());
}

#[test]
fn test_heritage_type_names() {
    let class = statement(json!({
        "kind": 253,
        "name": ident("Button"),
        "heritageClauses": [
            {
                "kind": 287,
                "types": [{
                    "kind": 224,
                    "expression": {
                        "kind": 198,
                        "expression": { "kind": 78, "escapedText": "React" },
                        "name": ident("Component"),
                    },
                }],
            },
            {
                "kind": 287,
                "types": [
                    { "kind": 224, "expression": { "kind": 78, "escapedText": "Clickable" } },
                    { "kind": 174, "typeName": ident("Focusable") },
                ],
            },
        ],
    }));

    assert!(class.has_heritage_clauses());
    assert_eq!(
        class.heritage_type_names(),
        vec!["React.Component", "Clickable", "Focusable"]
    );
    assert!(Statement::default().heritage_type_names().is_empty());
}

#[test]
fn test_member_type_labels() {
    let reference = member(json!({
        "kind": 163,
        "name": ident("theme"),
        "type": { "kind": 174, "typeName": ident("Theme") },
    }));
    assert_eq!(reference.type_label().as_deref(), Some("Theme"));

    let keyword = member(json!({
        "kind": 163,
        "name": ident("label"),
        "questionToken": { "kind": 57 },
        "type": { "kind": 147 },
    }));
    assert_eq!(keyword.type_label().as_deref(), Some("string"));
    assert!(keyword.is_optional());

    let union = member(json!({
        "kind": 163,
        "name": ident("size"),
        "type": {
            "kind": 183,
            "types": [
                { "kind": 192, "literal": { "kind": 10, "text": "small" } },
                { "kind": 192, "literal": { "kind": 10, "text": "large" } },
                { "kind": 150 },
            ],
        },
    }));
    assert_eq!(union.type_label().as_deref(), Some("small | large | undefined"));
    assert!(!union.is_optional());

    let untyped = member(json!({ "kind": 163, "name": ident("x") }));
    assert_eq!(untyped.type_label(), None);

    let other = member(json!({ "kind": 163, "type": { "kind": 1 } }));
    assert_eq!(other.type_label().as_deref(), Some(tsa_kinds::UNKNOWN_TYPE));
}

#[test]
fn test_member_returns_jsx() {
    let render = member(json!({
        "kind": 166,
        "name": ident("render"),
        "body": { "statements": [return_of(json!({ "kind": 274 }))] },
    }));
    assert!(render.is_method());
    assert!(render.returns_jsx_fragment());

    // renderIcon = () => { return <Icon/>; }
    let arrow = member(json!({
        "kind": 164,
        "name": ident("renderIcon"),
        "initializer": {
            "kind": 210,
            "body": { "statements": [return_of(json!({ "kind": 275 }))] },
        },
    }));
    assert!(arrow.returns_jsx_fragment());

    let plain = member(json!({ "kind": 166, "name": ident("noop"), "body": {} }));
    assert!(!plain.returns_jsx_fragment());
}

#[test]
fn test_member_js_doc_and_lookup() {
    let class = statement(class_decl(
        "Button",
        vec![json!({
            "kind": 166,
            "name": ident("render"),
            "jsDoc": [{ "kind": 315, "comment": "Draws the button" }],
        })],
    ));

    let render = class.find_member("render").unwrap();
    assert_eq!(render.js_doc(), "Draws the button");
    assert!(class.find_member("missing").is_none());
    assert_eq!(class.js_doc(), "");
}

#[test]
fn test_qualified_name() {
    let expression: Expression = materialize(&dynamic(json!({
        "kind": 198,
        "expression": {
            "kind": 198,
            "expression": { "kind": 78, "escapedText": "a" },
            "name": ident("b"),
        },
        "name": ident("C"),
    })))
    .unwrap();
    assert_eq!(expression.qualified_name().as_deref(), Some("a.b.C"));
    assert_eq!(Expression::default().qualified_name(), None);
}

#[test]
fn test_display_formats() {
    let text = AstObject {
        kind: 78,
        escaped_text: Some("render".to_string()),
        ..AstObject::default()
    };
    assert_eq!(text.to_string(), "[Kind: 78; Text: render]");
    assert_eq!(doc(Some("hi")).to_string(), "[Kind: 315; Comment: hi]");
    assert_eq!(AstObject::default().to_string(), "[Kind: 0]");

    let render = member(method("render"));
    assert_eq!(render.to_string(), "[Member: [Kind: 78; Text: render]; Kind: 166]");
    assert_eq!(Member::default().to_string(), "[Member: null; Kind: 0]");

    assert_eq!(Element::default().to_string(), "[Element: null; Kind: 0]");
    assert_eq!(Property::default().to_string(), "[Property: null; Kind: 0]");

    let class = statement(class_decl("Button", vec![]));
    assert_eq!(class.to_string(), "[ClassDeclaration]");
    assert_eq!(Statement::default().to_string(), "[Unknown]");
}
