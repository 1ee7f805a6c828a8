use fxhash::FxHashSet;
use string_interner::Symbol;

use super::{DependencyGraph, Sym};
use crate::error::GraphHasCycle;

/// A valid compilation order: every name appears after everything it depends
/// on. Borrows the names from the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOrder<'g> {
    names: Vec<&'g str>,
}

impl<'g> BuildOrder<'g> {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[&'g str] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.names.iter().copied()
    }
}

impl<'g> IntoIterator for BuildOrder<'g> {
    type Item = &'g str;
    type IntoIter = std::vec::IntoIter<&'g str>;
    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl std::fmt::Display for BuildOrder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl DependencyGraph {
    /// Computes a total compilation order via Kahn's algorithm, peeling off
    /// nodes with no unsatisfied dependencies one at a time.
    ///
    /// Each round scans the remaining nodes in insertion order and takes the
    /// first eligible one, so ties always resolve the same way. If a round
    /// finds no eligible node the remaining edges contain a cycle and no
    /// partial order is returned. The graph itself is left untouched; the
    /// algorithm works on its own copy of the adjacency data.
    pub fn compute_order(&self) -> Result<BuildOrder<'_>, GraphHasCycle> {
        let mut remaining: Vec<Sym> = self.nodes.clone();
        let mut pending: Vec<FxHashSet<Sym>> = self.deps.clone();
        let mut names = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let eligible = remaining
                .iter()
                .position(|&node| pending[node.to_usize()].is_empty());

            let node = match eligible {
                Some(pos) => remaining.remove(pos),
                None => return Err(GraphHasCycle),
            };

            names.push(self.resolve(node));

            // The emitted node satisfies this dependency for everyone else.
            // A self-loop never reaches this point: the node keeps itself in
            // its own pending set and stays ineligible.
            for &other in &remaining {
                pending[other.to_usize()].remove(&node);
            }
        }

        Ok(BuildOrder { names })
    }
}
