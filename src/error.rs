#[derive(Debug, PartialEq, Eq)]
pub struct GraphHasCycle;

impl std::fmt::Display for GraphHasCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to compute a compilation order, dependency graph has at least one cycle"
        )
    }
}

impl std::error::Error for GraphHasCycle {}
