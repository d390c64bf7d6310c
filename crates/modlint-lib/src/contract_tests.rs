use modlint_core::{InMemoryImportGraph, Violation};

use crate::contract::{Contract, RuleSet};

/// A shared-package rule pair: a module may
/// import within its own package subtree, and `shared` packages are
/// importable by anything under the shared package's parent.
const SHARED_PACKAGE_RULES: [&str; 2] = [
    "[**parent].* -> [parent].**",
    "[**?shared_parent].shared.** <- [shared_parent].**",
];

fn scenario_modules() -> InMemoryImportGraph {
    let mut graph = InMemoryImportGraph::new();
    for module in [
        "root",
        "root.shared",
        "root.shared.A",
        "root.foo",
        "root.foo.B",
        "root.foo.F",
        "root.foo.shared",
        "root.foo.shared.C",
        "root.foo.foobar",
        "root.foo.foobar.D",
        "root.bar",
        "root.bar.E",
    ] {
        graph.add_module(module);
    }
    graph
}

fn contract() -> Contract {
    Contract::parse("root", SHARED_PACKAGE_RULES).unwrap()
}

#[test]
fn shared_package_scenario_legal() {
    let mut graph = scenario_modules();
    graph.add_import("root.foo.B", "root.foo.foobar.D");
    graph.add_import("root.foo.B", "root.shared.A");
    graph.add_import("root.foo.B", "root.foo.F");
    graph.add_import("root.foo.foobar.D", "root.foo.shared.C");
    graph.add_import("root.foo.foobar.D", "root.shared.A");

    let result = contract().check(&graph).unwrap();
    assert!(result.kept, "unexpected violations: {:?}", result.violations);
}

#[test]
fn shared_package_scenario_illegal() {
    let mut graph = scenario_modules();
    graph.add_import("root.foo.B", "root.bar.E");
    graph.add_import("root.shared.A", "root.foo.shared.C");
    graph.add_import("root.foo.B", "root.foo.F");
    graph.add_import("root.foo.foobar.D", "root.foo.B");
    graph.add_import("root.foo.foobar.D", "root.bar.E");

    let result = contract().check(&graph).unwrap();
    assert!(!result.kept);
    assert_eq!(
        result.violations,
        vec![
            Violation::new("root.foo.B", "root.bar.E"),
            Violation::new("root.foo.foobar.D", "root.bar.E"),
            Violation::new("root.foo.foobar.D", "root.foo.B"),
            Violation::new("root.shared.A", "root.foo.shared.C"),
        ]
    );
}

#[test]
fn rule_order_never_changes_the_verdict() {
    let reversed = Contract::parse(
        "root",
        [SHARED_PACKAGE_RULES[1], SHARED_PACKAGE_RULES[0]],
    )
    .unwrap();

    let mut graph = scenario_modules();
    graph.add_import("root.foo.B", "root.bar.E");
    graph.add_import("root.foo.B", "root.foo.F");
    graph.add_import("root.foo.foobar.D", "root.foo.shared.C");

    let forward_result = contract().check(&graph).unwrap();
    let reversed_result = reversed.check(&graph).unwrap();
    assert_eq!(forward_result, reversed_result);
    assert_eq!(
        forward_result.violations,
        vec![Violation::new("root.foo.B", "root.bar.E")]
    );
}

#[test]
fn violation_order_is_independent_of_insertion_order() {
    let mut a = InMemoryImportGraph::new();
    a.add_import("root.x.one", "root.y.target");
    a.add_import("root.x.two", "root.y.target");
    a.add_import("root.x.one", "root.z.other");

    let mut b = InMemoryImportGraph::new();
    b.add_import("root.x.one", "root.z.other");
    b.add_import("root.x.two", "root.y.target");
    b.add_import("root.x.one", "root.y.target");

    let contract = Contract::parse("root", ["[**parent].* -> [parent].**"]).unwrap();
    let result_a = contract.check(&a).unwrap();
    let result_b = contract.check(&b).unwrap();
    assert_eq!(result_a.violations, result_b.violations);
    assert_eq!(
        result_a.violations,
        vec![
            Violation::new("root.x.one", "root.y.target"),
            Violation::new("root.x.two", "root.y.target"),
            Violation::new("root.x.one", "root.z.other"),
        ]
    );
}

#[test]
fn importers_outside_the_root_are_not_checked() {
    let mut graph = scenario_modules();
    graph.add_import("external.tool", "root.foo.B");

    let result = contract().check(&graph).unwrap();
    assert!(result.kept);
}

#[test]
fn imports_of_modules_outside_the_root_are_not_checked() {
    let mut graph = scenario_modules();
    graph.add_import("root.foo.B", "external.tool");

    let result = contract().check(&graph).unwrap();
    assert!(result.kept);
}

#[test]
fn empty_rule_set_flags_every_edge() {
    let mut graph = InMemoryImportGraph::new();
    graph.add_import("root.a", "root.b");

    let contract = Contract::new("root", RuleSet::default());
    let result = contract.check(&graph).unwrap();
    assert_eq!(result.violations, vec![Violation::new("root.a", "root.b")]);
}

#[test]
fn empty_graph_passes() {
    let graph = InMemoryImportGraph::new();
    let result = contract().check(&graph).unwrap();
    assert!(result.kept);
    assert!(result.violations.is_empty());
}

#[test]
fn ruleset_parse_fails_fast_on_malformed_line() {
    let err = RuleSet::parse(["[**p].* -> [p].**", "no arrow here"]).unwrap_err();
    assert!(matches!(
        err,
        modlint_compiler::ExpressionError::MissingArrow { .. }
    ));
}

#[test]
fn result_serializes_for_reporting() {
    let mut graph = InMemoryImportGraph::new();
    graph.add_import("root.foo.a", "root.bar.b");

    let contract = Contract::new("root", RuleSet::default());
    let result = contract.check(&graph).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kept"], false);
    assert_eq!(json["violations"][0]["importer"], "root.foo.a");
}
