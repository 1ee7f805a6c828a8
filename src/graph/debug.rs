use string_interner::Symbol;

use super::DependencyGraph;

const DEFAULT_MAX_PRINT_SIZE: usize = 15;
const MAX_PRINTED_EDGES: usize = 10;

/// First `MAX_PRINTED_EDGES` (dependent, dependency) pairs, dependents in
/// insertion order and each node's dependencies sorted, so the output is
/// reproducible.
fn printable_edges(graph: &DependencyGraph) -> Vec<(&str, &str)> {
    let mut edges = Vec::new();
    'outer: for &node in &graph.nodes {
        let mut dependencies: Vec<&str> = graph.deps[node.to_usize()]
            .iter()
            .map(|&dep| graph.resolve(dep))
            .collect();
        dependencies.sort_unstable();
        for dependency in dependencies {
            edges.push((graph.resolve(node), dependency));
            if edges.len() == MAX_PRINTED_EDGES {
                break 'outer;
            }
        }
    }
    edges
}

impl std::fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges = printable_edges(self);
        let width = edges
            .iter()
            .flat_map(|&(dependent, dependency)| [dependent.len(), dependency.len()])
            .fold(DEFAULT_MAX_PRINT_SIZE, usize::max);

        writeln!(f, "# of nodes: {}", self.n_nodes())?;
        writeln!(f, "# of edges: {}", self.n_edges)?;
        writeln!(f)?;
        writeln!(
            f,
            "| {:^width$} | {:^width$} |",
            "Dependent",
            "Dependency",
            width = width
        )?;
        writeln!(f, "| {:-<width$} | {:-<width$} |", "", "", width = width)?;
        for (dependent, dependency) in &edges {
            writeln!(
                f,
                "| {:width$.width$} | {:width$.width$} |",
                dependent,
                dependency,
                width = width
            )?;
        }

        if self.n_edges > MAX_PRINTED_EDGES {
            writeln!(f, "Omitted {} edges", self.n_edges - MAX_PRINTED_EDGES)?;
        }

        Ok(())
    }
}
