//! Reachability: the credibility partial order induced by the graph.
//!
//! Two query modes are kept apart. Existence queries ([`CredibilityGraph::is_reachable`])
//! run a single DFS and are what expansion uses to guard acyclicity.
//! Enumeration ([`CredibilityGraph::all_paths`]) lists every simple path and is
//! what extremal-set computation needs; it is exponential in the worst case.

use std::collections::HashSet;

use petgraph::Direction;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{Dfs, EdgeRef};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

use super::{CredibilityGraph, CredibilityObject, Label, Vertex, Walk};

/// Outcome of comparing two vertices under the transitive closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Less,
    More,
    Incomparable,
}

impl<N: Vertex, L: Label> CredibilityGraph<N, L> {
    /// True iff a directed path of length >= 1 leads from `source` to `target`.
    ///
    /// Absent vertices are simply unreachable.
    pub fn is_reachable(&self, source: &N, target: &N) -> bool {
        let (Some(src), Some(dst)) = (self.index_of(source), self.index_of(target)) else {
            return false;
        };
        let graph = self.inner();
        // Seed the DFS with the successors so that `src` itself is only
        // discovered again through a real cycle.
        let mut dfs = Dfs::empty(graph);
        dfs.stack
            .extend(graph.neighbors_directed(src, Direction::Outgoing));
        while let Some(node) = dfs.next(graph) {
            if node == dst {
                return true;
            }
        }
        false
    }

    /// `a` is less credible than `b`.
    pub fn is_less(&self, a: &N, b: &N) -> bool {
        self.is_reachable(a, b)
    }

    /// Three-way comparison. Mutual reachability means the graph is cyclic
    /// and is reported as [`GraphError::Inconsistent`].
    pub fn compare(&self, a: &N, b: &N) -> Result<Comparison, GraphError> {
        match (self.is_reachable(a, b), self.is_reachable(b, a)) {
            (true, false) => Ok(Comparison::Less),
            (false, true) => Ok(Comparison::More),
            (false, false) => Ok(Comparison::Incomparable),
            (true, true) => Err(GraphError::Inconsistent {
                left: format!("{a:?}"),
                right: format!("{b:?}"),
            }),
        }
    }

    /// Every simple directed path from `source` to `target`, capped at
    /// `|E|` edges.
    pub fn all_paths(&self, source: &N, target: &N) -> Vec<Walk<N, L>> {
        self.all_paths_within(source, target, self.edge_count())
    }

    /// Every simple directed path from `source` to `target` with at most
    /// `max_len` edges. Parallel edges yield distinct paths.
    ///
    /// When `source == target` the result is the set of cycles through it.
    pub fn all_paths_within(&self, source: &N, target: &N, max_len: usize) -> Vec<Walk<N, L>> {
        let (Some(src), Some(dst)) = (self.index_of(source), self.index_of(target)) else {
            return vec![];
        };
        let mut paths = Vec::new();
        let mut on_path = HashSet::from([src]);
        let mut prefix = Vec::new();
        self.collect_paths(src, dst, max_len, &mut on_path, &mut prefix, &mut paths);
        paths
    }

    fn collect_paths(
        &self,
        at: NodeIndex,
        target: NodeIndex,
        max_len: usize,
        on_path: &mut HashSet<NodeIndex>,
        prefix: &mut Vec<CredibilityObject<N, L>>,
        paths: &mut Vec<Walk<N, L>>,
    ) {
        if prefix.len() >= max_len {
            return;
        }
        let graph = self.inner();
        for edge in graph.edges_directed(at, Direction::Outgoing) {
            let next = edge.target();
            prefix.push(edge.weight().clone());
            if next == target {
                if let Some(walk) = Walk::from_edges(prefix.clone()) {
                    paths.push(walk);
                }
            } else if on_path.insert(next) {
                self.collect_paths(next, target, max_len, on_path, prefix, paths);
                on_path.remove(&next);
            }
            prefix.pop();
        }
    }
}
