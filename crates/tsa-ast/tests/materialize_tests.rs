use super::*;
use crate::fixtures::*;
use crate::nodes::{AstObject, Expression, ModuleSpecifier, Statement};
use crate::source_file::SourceFile;
use serde_json::json;
use tsa_common::limits::RECOMMENDED_MAX_NODE_DEPTH;
use tsa_common::{DynamicNode, DynamicValue};

fn decode<T: Record>(value: serde_json::Value) -> Result<T, DecodeError> {
    materialize(&dynamic(value))
}

/// `depth` expressions, each wrapping the next through `expression`.
fn expression_chain(depth: usize) -> DynamicNode {
    let mut node = DynamicNode::new().with("kind", 78).with("escapedText", "x");
    for _ in 1..depth {
        node = DynamicNode::new().with("kind", 208).with("expression", node);
    }
    node
}

#[test]
fn test_empty_node_decodes_to_zero_record() {
    let statement: Statement = materialize(&DynamicNode::new()).unwrap();
    assert_eq!(statement.kind, 0);
    assert!(statement.name.is_none());
    assert!(statement.members.is_empty());
    assert!(statement.heritage_clauses.is_empty());

    let specifier: ModuleSpecifier = materialize(&DynamicNode::new()).unwrap();
    assert_eq!(specifier.text, "");
}

#[test]
fn test_populated_fields_are_decoded() {
    let statement: Statement = decode(class_decl(
        "Button",
        vec![method("render"), property_signature("label")],
    ))
    .unwrap();

    assert_eq!(statement.kind, 253);
    assert_eq!(statement.name_text(), Some("Button"));
    assert_eq!(statement.members.len(), 2);
    assert_eq!(statement.members[0].kind, 166);
    assert_eq!(statement.members[0].name_text(), Some("render"));
    assert_eq!(statement.members[1].kind, 163);
}

#[test]
fn test_nullish_fields_and_unknown_keys_are_ignored() {
    let statement: Statement = decode(json!({
        "kind": 253,
        "name": null,
        "members": null,
        "pos": 12,
        "end": 240,
        "flags": { "anything": true },
    }))
    .unwrap();

    assert_eq!(statement.kind, 253);
    assert!(statement.name.is_none());
    assert!(statement.members.is_empty());

    let mut node = DynamicNode::new().with("kind", 254);
    node.insert("name", DynamicValue::Undefined);
    let statement: Statement = materialize(&node).unwrap();
    assert!(statement.name.is_none());
}

#[test]
fn test_kind_is_not_validated_against_target() {
    // An import declaration decodes happily as an Expression.
    let expression: Expression = decode(import_decl(Some("Foo"), &[], "lib")).unwrap();
    assert_eq!(expression.kind, 262);
    assert!(expression.expression.is_none());
}

#[test]
fn test_list_field_with_wrong_shape_reports_path() {
    let err = decode::<Statement>(json!({ "kind": 253, "members": 5 })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Statement.members: expected list of `Member`, found number"
    );
    assert!(matches!(
        err,
        DecodeError::ShapeMismatch {
            expected: FieldKind::List("Member"),
            found: Shape::Number,
            ..
        }
    ));
}

#[test]
fn test_nested_mismatch_reports_full_path() {
    let err = decode::<SourceFile>(source_file_json(vec![
        class_decl("A", vec![]),
        json!({
            "kind": 253,
            "members": [method("ok"), { "kind": 166, "name": "render" }],
        }),
    ]))
    .unwrap_err();

    assert_eq!(
        err.path().to_string(),
        "SourceFile.statements[1].members[1].name"
    );
    assert_eq!(
        err.to_string(),
        "SourceFile.statements[1].members[1].name: expected node `AstObject`, found string"
    );
}

#[test]
fn test_primitive_list_element_is_rejected() {
    let err = decode::<SourceFile>(json!({ "kind": 300, "statements": [true] })).unwrap_err();
    assert_eq!(err.path().to_string(), "SourceFile.statements[0]");
    assert_eq!(
        err.to_string(),
        "SourceFile.statements[0]: expected node `Statement`, found boolean"
    );
}

#[test]
fn test_nullish_list_elements_keep_their_slot() {
    let file: SourceFile = decode(json!({
        "kind": 300,
        "statements": [null, class_decl("A", vec![])],
    }))
    .unwrap();

    assert_eq!(file.statements.len(), 2);
    assert_eq!(file.statements[0].kind, 0);
    assert_eq!(file.statements[1].name_text(), Some("A"));
}

#[test]
fn test_integer_fields_must_be_integral_and_in_range() {
    let err = decode::<AstObject>(json!({ "kind": 1.5 })).unwrap_err();
    assert_eq!(err.to_string(), "AstObject.kind: 1.5 is not a valid u16");

    let err = decode::<AstObject>(json!({ "kind": 70000 })).unwrap_err();
    assert!(matches!(err, DecodeError::NumberOutOfRange { target: "u16", .. }));

    let err = decode::<AstObject>(json!({ "kind": -1 })).unwrap_err();
    assert!(matches!(err, DecodeError::NumberOutOfRange { .. }));

    let err = decode::<AstObject>(json!({ "kind": "253" })).unwrap_err();
    assert_eq!(err.to_string(), "AstObject.kind: expected integer, found string");
}

#[test]
fn test_string_fields_stringify_primitives() {
    let object: AstObject = decode(json!({ "kind": 8, "text": 42 })).unwrap();
    assert_eq!(object.text.as_deref(), Some("42"));

    let object: AstObject = decode(json!({ "kind": 8, "text": true })).unwrap();
    assert_eq!(object.text.as_deref(), Some("true"));

    let err = decode::<AstObject>(json!({ "text": { "kind": 1 } })).unwrap_err();
    assert_eq!(err.to_string(), "AstObject.text: expected string, found node");

    let err = decode::<ModuleSpecifier>(json!({ "text": ["lib"] })).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ShapeMismatch {
            expected: FieldKind::String,
            found: Shape::List,
            ..
        }
    ));
}

#[test]
fn test_boolean_fields_reject_other_shapes() {
    let object: AstObject = decode(json!({ "hasExtendedUnicodeEscape": true })).unwrap();
    assert!(object.has_extended_unicode_escape);

    let err = decode::<AstObject>(json!({ "hasExtendedUnicodeEscape": 1 })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "AstObject.hasExtendedUnicodeEscape: expected boolean, found number"
    );
}

#[test]
fn test_depth_limit_is_enforced() {
    let options = MaterializeOptions::with_max_depth(3);

    let ok: Expression = materialize_with(&expression_chain(4), &options).unwrap();
    assert_eq!(ok.kind, 208);

    let err = materialize_with::<Expression>(&expression_chain(5), &options).unwrap_err();
    assert_eq!(
        err.path().to_string(),
        "Expression.expression.expression.expression.expression"
    );
    assert!(matches!(err, DecodeError::DepthLimitExceeded { limit: 3, .. }));
}

#[test]
fn test_unbounded_depth_by_default() {
    let mut expression: Expression = materialize(&expression_chain(200)).unwrap();

    let mut depth = 1;
    while let Some(inner) = expression.expression.take() {
        expression = *inner;
        depth += 1;
    }
    assert_eq!(depth, 200);
    assert_eq!(expression.escaped_text.as_deref(), Some("x"));

    let recommended = MaterializeOptions::with_max_depth(RECOMMENDED_MAX_NODE_DEPTH);
    assert!(materialize_with::<Expression>(&expression_chain(200), &recommended).is_ok());
}

#[test]
fn test_field_path_display() {
    let path = FieldPath {
        root: "SourceFile",
        segments: vec![
            PathSegment::Field("statements"),
            PathSegment::Index(3),
            PathSegment::Field("name"),
        ],
    };
    assert_eq!(path.to_string(), "SourceFile.statements[3].name");

    let root_only = FieldPath {
        root: "Block",
        segments: Vec::new(),
    };
    assert_eq!(root_only.to_string(), "Block");
}
