// tests/unit_analysis.rs
use declscan_core::analysis::{analyze, analyze_with, Node, TypeCollector};
use declscan_core::config::RuleConfig;
use declscan_core::error::ScanError;
use declscan_core::types::{DeclKind, Report};

fn class_with(children: Vec<Node>) -> Node {
    children
        .into_iter()
        .fold(Node::class("Sample"), Node::with_child)
}

#[test]
fn test_reports_follow_declaration_order() {
    let root = class_with(vec![
        Node::method("first", "void").with_range(2, 4),
        Node::field("int", &["a"]).with_range(5, 5),
        Node::method("second", "void").with_range(6, 8),
        Node::field("int", &["b"]).with_range(9, 9),
    ]);
    let store = analyze(&&root).unwrap();

    let methods: Vec<_> = store.methods().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["first", "second"]);
    let lines: Vec<_> = store.all(DeclKind::Field).iter().map(Report::line).collect();
    assert_eq!(lines, vec![Some(5), Some(9)]);
}

#[test]
fn test_documented_flag() {
    let root = class_with(vec![
        Node::field("int", &["a"]).with_doc("/** a */"),
        Node::field("int", &["b"]),
        Node::method("m", "void").with_doc("/** m */"),
        Node::method("n", "void"),
    ]);
    let store = analyze(&&root).unwrap();
    let documented: Vec<_> = store.all(DeclKind::Field).iter().map(Report::documented).collect();
    assert_eq!(documented, vec![true, false]);
    let documented: Vec<_> = store.all(DeclKind::Method).iter().map(Report::documented).collect();
    assert_eq!(documented, vec![true, false]);
}

#[test]
fn test_size_for_lines_ten_to_fourteen() {
    let root = class_with(vec![Node::method("m", "void")
        .with_range(10, 14)
        .with_body(Node::other(vec![]))]);
    let store = analyze(&&root).unwrap();
    let m = store.methods().next().unwrap();
    assert_eq!((m.start_line, m.size), (Some(10), Some(5)));
}

#[test]
fn test_bodiless_method_is_unused_even_without_parameters() {
    let root = class_with(vec![Node::method("m", "void")]);
    let store = analyze(&&root).unwrap();
    assert!(store.methods().next().unwrap().unused_parameter);
}

#[test]
fn test_missing_variable_type_aborts_pass() {
    let mut broken = Node::method("m", "void");
    broken.type_name = None;
    let root = class_with(vec![Node::field("int", &["a"]), broken]);
    let err = analyze(&&root).unwrap_err();
    assert!(matches!(err, ScanError::MalformedTree { missing: "return type", .. }));
}

#[test]
fn test_observer_sees_nested_types() {
    let root = Node::other(vec![class_with(vec![Node::class("Inner")])]);
    let mut types = TypeCollector::default();
    analyze_with(&&root, &RuleConfig::default(), &mut types).unwrap();
    let seen: Vec<_> = types.types.iter().map(|t| (t.name.as_str(), t.nested)).collect();
    assert_eq!(seen, vec![("Sample", false), ("Inner", true)]);
}
