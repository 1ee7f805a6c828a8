use fxhash::FxHashSet;
use string_interner::{DefaultStringInterner, DefaultSymbol, Symbol};

mod debug;
mod order;

pub use order::BuildOrder;

pub(crate) type Sym = DefaultSymbol;

/// A directed graph of named source files and their dependencies.
///
/// Nodes are unique by name and keep their insertion order, which makes
/// [`DependencyGraph::compute_order`] deterministic when several files are
/// simultaneously eligible.
#[derive(Clone)]
pub struct DependencyGraph {
    pub(crate) interner: DefaultStringInterner,
    /// Nodes in insertion order, one per interned name.
    pub(crate) nodes: Vec<Sym>,
    /// `deps[sym]` holds the names that node depends on. Note the inversion
    /// relative to the usual adjacency convention: an entry `b` in `a`'s set
    /// records the dependency edge b -> a, i.e. `b` must be compiled before
    /// `a`. "No incoming edges" is then exactly "this set is empty".
    pub(crate) deps: Vec<FxHashSet<Sym>>,
    pub(crate) n_edges: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        DependencyGraph {
            interner: DefaultStringInterner::new(),
            nodes: Vec::new(),
            deps: Vec::new(),
            n_edges: 0,
        }
    }

    /// Interns `name`, creating its node on first sight.
    fn get_or_insert(&mut self, name: &str) -> Sym {
        let sym = self.interner.get_or_intern(name);
        if sym.to_usize() == self.nodes.len() {
            self.nodes.push(sym);
            self.deps.push(FxHashSet::default());
        }
        sym
    }

    pub(crate) fn resolve(&self, sym: Sym) -> &str {
        self.interner
            .resolve(sym)
            .expect("symbol was interned by this graph")
    }

    /// Adds a node with no dependencies. No-op if the name already exists.
    pub fn insert_node(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.get_or_insert(name.as_ref());
        self
    }

    /// Records that `dependent` depends on `dependency`, creating either node
    /// if absent. Inserting the same pair twice has no additional effect.
    pub fn insert_edge(
        &mut self,
        dependent: impl AsRef<str>,
        dependency: impl AsRef<str>,
    ) -> &mut Self {
        let dependent = self.get_or_insert(dependent.as_ref());
        let dependency = self.get_or_insert(dependency.as_ref());
        if self.deps[dependent.to_usize()].insert(dependency) {
            self.n_edges += 1;
        }
        self
    }

    /// Records one edge per dependency in `dependencies`.
    pub fn insert_dependencies(
        &mut self,
        dependent: impl AsRef<str>,
        dependencies: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> &mut Self {
        let dependent = dependent.as_ref();
        for dependency in dependencies {
            self.insert_edge(dependent, dependency.as_ref());
        }
        self
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct (dependent, dependency) pairs.
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.interner.get(name.as_ref()).is_some()
    }

    /// True if the edge `dependency -> dependent` has been recorded.
    pub fn depends_on(&self, dependent: impl AsRef<str>, dependency: impl AsRef<str>) -> bool {
        let (dependent, dependency) = match (
            self.interner.get(dependent.as_ref()),
            self.interner.get(dependency.as_ref()),
        ) {
            (Some(dependent), Some(dependency)) => (dependent, dependency),
            _ => return false,
        };
        self.deps[dependent.to_usize()].contains(&dependency)
    }

    /// Names `name` depends on, sorted. `None` if the node does not exist.
    pub fn dependencies(&self, name: impl AsRef<str>) -> Option<Vec<&str>> {
        let sym = self.interner.get(name.as_ref())?;
        let mut names: Vec<&str> = self.deps[sym.to_usize()]
            .iter()
            .map(|&dep| self.resolve(dep))
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// Names that depend on `name`, in insertion order. `None` if the node
    /// does not exist.
    pub fn dependents(&self, name: impl AsRef<str>) -> Option<Vec<&str>> {
        let sym = self.interner.get(name.as_ref())?;
        Some(
            self.nodes
                .iter()
                .filter(|&&node| self.deps[node.to_usize()].contains(&sym))
                .map(|&node| self.resolve(node))
                .collect(),
        )
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|&node| self.resolve(node))
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
