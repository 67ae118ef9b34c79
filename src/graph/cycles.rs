//! Elementary cycle enumeration for credibility multigraphs.
//!
//! Cycles are first found at vertex level (parallel edges collapsed): the
//! graph is split into strongly connected components with Tarjan's algorithm
//! and each component is searched by backtracking, rooting every cycle at its
//! lowest-indexed vertex so it is reported exactly once. Each vertex cycle is
//! then expanded into one walk per combination of parallel edges.

use std::collections::HashSet;

use petgraph::Direction;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::stable_graph::NodeIndex;

use super::{CredibilityGraph, Label, Vertex, Walk};

impl<N: Vertex, L: Label> CredibilityGraph<N, L> {
    /// True when the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(self.inner())
    }

    /// Every elementary cycle at vertex level, closed: `[v0, v1, ..., v0]`.
    pub fn simple_cycles(&self) -> Vec<Vec<N>> {
        let graph = self.inner();
        let mut cycles = Vec::new();

        for mut component in tarjan_scc(graph) {
            if component.len() < 2 {
                continue;
            }
            component.sort();
            for (i, &root) in component.iter().enumerate() {
                let allowed: HashSet<NodeIndex> = component[i..].iter().copied().collect();
                let mut path = vec![root];
                let mut on_path = HashSet::from([root]);
                self.search_cycles(root, root, &allowed, &mut path, &mut on_path, &mut cycles);
            }
        }

        cycles
            .into_iter()
            .map(|indices| {
                indices
                    .into_iter()
                    .filter_map(|idx| graph.node_weight(idx).cloned())
                    .collect()
            })
            .collect()
    }

    fn search_cycles(
        &self,
        root: NodeIndex,
        at: NodeIndex,
        allowed: &HashSet<NodeIndex>,
        path: &mut Vec<NodeIndex>,
        on_path: &mut HashSet<NodeIndex>,
        cycles: &mut Vec<Vec<NodeIndex>>,
    ) {
        let mut successors: Vec<NodeIndex> = self
            .inner()
            .neighbors_directed(at, Direction::Outgoing)
            .collect();
        successors.sort();
        successors.dedup();

        for next in successors {
            if next == root {
                let mut cycle = path.clone();
                cycle.push(root);
                cycles.push(cycle);
            } else if allowed.contains(&next) && on_path.insert(next) {
                path.push(next);
                self.search_cycles(root, next, allowed, path, on_path, cycles);
                path.pop();
                on_path.remove(&next);
            }
        }
    }

    /// Expand a vertex sequence into every walk realizing it, one per
    /// combination of parallel edges along the steps.
    ///
    /// A single vertex yields the zero-length walk at that vertex; a step with
    /// no edge yields nothing.
    pub fn build_walks(&self, vertices: &[N]) -> Vec<Walk<N, L>> {
        let Some(first) = vertices.first() else {
            return vec![];
        };
        if vertices.len() == 1 {
            return vec![Walk::singleton(first.clone())];
        }

        let suffixes = self.build_walks(&vertices[1..]);
        self.edges_between(first, &vertices[1])
            .into_iter()
            .flat_map(|step| {
                suffixes
                    .iter()
                    .map(move |rest| Walk::prepend(step.clone(), rest))
            })
            .collect()
    }

    /// All minimal cycles as edge walks, parallel edges expanded.
    pub fn cycle_walks(&self) -> HashSet<Walk<N, L>> {
        self.simple_cycles()
            .iter()
            .flat_map(|cycle| self.build_walks(cycle))
            .collect()
    }
}
