//! The credibility partial order as a Rust ordering.
//!
//! [`Ranked`] pairs a vertex with its graph so the standard comparison
//! operators apply: `a < b` iff `b` is reachable from `a`, and unrelated
//! vertices compare as `None`. The operators assume an acyclic graph; use
//! [`Ranked::try_cmp`] where the graph may hold a cycle.
//! [`credibility_ranks`] flattens the order into layers, rank 0 being the
//! least credible.

use std::cmp::Ordering;
use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;

use crate::error::GraphError;
use crate::graph::{Comparison, CredibilityGraph, Label, Vertex};

/// A vertex viewed through the credibility order of a graph.
///
/// `PartialOrd` is only meaningful on acyclic graphs: two vertices on a
/// common cycle compare as `None`, which hides the inconsistency.
/// [`Ranked::try_cmp`] reports it as [`GraphError::Inconsistent`].
pub struct Ranked<'g, N, L> {
    vertex: &'g N,
    graph: &'g CredibilityGraph<N, L>,
}

impl<'g, N: Vertex, L: Label> Ranked<'g, N, L> {
    pub fn new(vertex: &'g N, graph: &'g CredibilityGraph<N, L>) -> Self {
        Self { vertex, graph }
    }

    pub fn vertex(&self) -> &'g N {
        self.vertex
    }

    /// Compare against `other`, failing when the two vertices reach each
    /// other.
    pub fn try_cmp(&self, other: &Self) -> Result<Comparison, GraphError> {
        self.graph.compare(self.vertex, other.vertex)
    }
}

impl<N, L> Clone for Ranked<'_, N, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, L> Copy for Ranked<'_, N, L> {}

impl<N: Vertex, L: Label> PartialEq for Ranked<'_, N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl<N: Vertex, L: Label> PartialOrd for Ranked<'_, N, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.vertex == other.vertex {
            return Some(Ordering::Equal);
        }
        match (
            self.graph.is_reachable(self.vertex, other.vertex),
            self.graph.is_reachable(other.vertex, self.vertex),
        ) {
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
            (true, true) => {
                tracing::warn!(
                    left = ?self.vertex,
                    right = ?other.vertex,
                    "vertices on a common cycle are unordered"
                );
                None
            }
        }
    }
}

/// Longest-path rank of every vertex: sources get 0, every other vertex one
/// more than its highest-ranked predecessor.
pub fn credibility_ranks<N: Vertex, L: Label>(
    graph: &CredibilityGraph<N, L>,
) -> Result<HashMap<N, usize>, GraphError> {
    let inner = graph.inner();
    let order = toposort(inner, None).map_err(|cycle| GraphError::Cyclic {
        vertex: inner
            .node_weight(cycle.node_id())
            .map(|v| format!("{v:?}"))
            .unwrap_or_default(),
    })?;

    let mut ranks = HashMap::with_capacity(order.len());
    for idx in order {
        let rank = inner
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|pred| ranks.get(&pred).map(|r| r + 1))
            .max()
            .unwrap_or(0);
        ranks.insert(idx, rank);
    }

    Ok(ranks
        .into_iter()
        .filter_map(|(idx, rank)| inner.node_weight(idx).map(|v| (v.clone(), rank)))
        .collect())
}

/// Vertices grouped by rank, least credible layer first. Each layer keeps
/// insertion order.
pub fn rank_layers<N: Vertex, L: Label>(
    graph: &CredibilityGraph<N, L>,
) -> Result<Vec<Vec<N>>, GraphError> {
    let ranks = credibility_ranks(graph)?;
    let depth = ranks.values().copied().max().map_or(0, |max| max + 1);
    let mut layers = vec![Vec::new(); depth];
    for vertex in graph.vertices() {
        if let Some(&rank) = ranks.get(vertex) {
            layers[rank].push(vertex.clone());
        }
    }
    Ok(layers)
}
