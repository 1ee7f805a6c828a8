use linkorder::prelude::*;

fn fan_graph() -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    graph
        .insert_dependencies("app", ["parser", "codegen"])
        .insert_dependencies("parser", ["lexer", "ast"])
        .insert_dependencies("codegen", ["ast", "target"])
        .insert_edge("lexer", "util")
        .insert_edge("ast", "util")
        .insert_node("docs");
    graph
}

fn assert_valid_order(graph: &DependencyGraph, order: &BuildOrder) {
    // The order is a permutation of the node set.
    let mut expected: Vec<&str> = graph.node_names().collect();
    let mut actual: Vec<&str> = order.iter().collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(expected, actual);

    // Every node appears after everything it depends on.
    let position = |name: &str| {
        order
            .iter()
            .position(|n| n == name)
            .expect("name missing from order")
    };
    for dependent in graph.node_names() {
        for dependency in graph.dependencies(dependent).unwrap() {
            assert!(
                position(dependency) < position(dependent),
                "{} must come before {}",
                dependency,
                dependent
            );
        }
    }
}

#[test]
fn fan_graph_order_is_valid() {
    let graph = fan_graph();
    let order = graph.compute_order().unwrap();
    assert_valid_order(&graph, &order);
}

#[test]
fn order_is_deterministic_across_calls() {
    let graph = fan_graph();
    let first = graph.compute_order().unwrap();
    let second = graph.compute_order().unwrap();
    assert_eq!(first, second);
}

#[test]
fn compute_order_does_not_mutate_the_graph() {
    let mut graph = fan_graph();
    let nodes_before = graph.n_nodes();
    let edges_before = graph.n_edges();

    graph.compute_order().unwrap();

    assert_eq!(graph.n_nodes(), nodes_before);
    assert_eq!(graph.n_edges(), edges_before);
    assert_eq!(graph.dependencies("parser").unwrap(), vec!["ast", "lexer"]);
}

#[test]
fn duplicate_insertions_change_nothing() {
    let mut graph = fan_graph();
    let order_before = graph.compute_order().unwrap().to_string();
    let nodes_before = graph.n_nodes();
    let edges_before = graph.n_edges();

    graph
        .insert_node("app")
        .insert_edge("app", "parser")
        .insert_dependencies("parser", ["lexer", "ast"]);

    assert_eq!(graph.n_nodes(), nodes_before);
    assert_eq!(graph.n_edges(), edges_before);
    assert_eq!(graph.compute_order().unwrap().to_string(), order_before);
}

#[test]
fn isolated_node_is_immediately_eligible() {
    let mut graph = DependencyGraph::new();
    graph.insert_node("standalone");
    graph.insert_edge("a", "b");
    let order = graph.compute_order().unwrap();
    assert_eq!(order.as_slice(), ["standalone", "b", "a"]);
}

#[test]
fn cycle_reports_no_partial_order() {
    let mut graph = fan_graph();
    // Close a cycle through the existing chain app -> parser -> lexer.
    graph.insert_edge("lexer", "app");
    assert_eq!(graph.compute_order(), Err(GraphHasCycle));
}

#[test]
fn cycle_error_message_mentions_the_cycle() {
    let message = GraphHasCycle.to_string();
    assert!(message.contains("cycle"));
}

#[test]
fn long_chain_orders_back_to_front() {
    let mut graph = DependencyGraph::new();
    for i in 0..100 {
        graph.insert_edge(format!("file{}", i), format!("file{}", i + 1));
    }
    let order = graph.compute_order().unwrap();
    assert_eq!(order.len(), 101);
    assert_eq!(order.iter().next(), Some("file100"));
    assert_eq!(order.iter().last(), Some("file0"));
    assert_valid_order(&graph, &order);
}
