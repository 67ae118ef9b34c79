//! Graph store: a directed multigraph of credibility objects.
//!
//! Uses a `petgraph` stable graph so edge and vertex removal never shifts the
//! indices of survivors, plus a `HashMap` from vertex value to `NodeIndex` for
//! O(1) lookups.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use super::{CredibilityObject, Label, Vertex};

/// Directed multigraph over vertices `N` with credibility-object edges.
///
/// Parallel edges between the same pair are allowed when their reporters
/// differ. A structurally equal object is the same edge, so adding it twice
/// is refused. Self-loops are refused.
#[derive(Clone)]
pub struct CredibilityGraph<N, L> {
    graph: StableDiGraph<N, CredibilityObject<N, L>>,
    node_index: HashMap<N, NodeIndex>,
}

impl<N: Vertex, L: Label> CredibilityGraph<N, L> {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build a graph by inserting every object as-is, without any
    /// consistency check. Duplicates and self-loops are skipped.
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = CredibilityObject<N, L>>,
    {
        let mut graph = Self::new();
        for obj in objects {
            graph.add_edge(obj);
        }
        graph
    }

    fn ensure_node(&mut self, vertex: &N) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.node_index.insert(vertex.clone(), idx);
        idx
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: N) -> bool {
        if self.node_index.contains_key(&vertex) {
            return false;
        }
        self.ensure_node(&vertex);
        true
    }

    /// Add an edge, creating missing endpoints first.
    ///
    /// Returns `false` (graph unchanged) for self-loops and for objects that
    /// are already present.
    pub fn add_edge(&mut self, obj: CredibilityObject<N, L>) -> bool {
        if obj.source == obj.target || self.contains_edge(&obj) {
            return false;
        }
        let src = self.ensure_node(&obj.source);
        let dst = self.ensure_node(&obj.target);
        self.graph.add_edge(src, dst, obj);
        true
    }

    fn find_edge(&self, obj: &CredibilityObject<N, L>) -> Option<EdgeIndex> {
        let src = self.index_of(&obj.source)?;
        self.graph
            .edges_directed(src, Direction::Outgoing)
            .find(|e| e.weight() == obj)
            .map(|e| e.id())
    }

    pub fn contains_edge(&self, obj: &CredibilityObject<N, L>) -> bool {
        self.find_edge(obj).is_some()
    }

    /// Remove one edge. Endpoints stay in the graph.
    pub fn remove_edge(&mut self, obj: &CredibilityObject<N, L>) -> bool {
        match self.find_edge(obj) {
            Some(idx) => self.graph.remove_edge(idx).is_some(),
            None => false,
        }
    }

    /// Remove every edge in `objects`. Returns how many were present.
    pub fn remove_edges<'a, I>(&mut self, objects: I) -> usize
    where
        I: IntoIterator<Item = &'a CredibilityObject<N, L>>,
        N: 'a,
        L: 'a,
    {
        objects
            .into_iter()
            .filter(|obj| self.remove_edge(obj))
            .count()
    }

    /// Remove a vertex together with all incident edges.
    pub fn remove_vertex(&mut self, vertex: &N) -> bool {
        match self.node_index.remove(vertex) {
            Some(idx) => self.graph.remove_node(idx).is_some(),
            None => false,
        }
    }

    pub fn contains_vertex(&self, vertex: &N) -> bool {
        self.node_index.contains_key(vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &CredibilityObject<N, L>> + '_ {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_weight(idx))
    }

    /// Owned snapshot of the edge set.
    pub fn edge_set(&self) -> HashSet<CredibilityObject<N, L>> {
        self.edges().cloned().collect()
    }

    /// Owned snapshot of the vertex set.
    pub fn vertex_set(&self) -> HashSet<N> {
        self.vertices().cloned().collect()
    }

    /// All parallel edges from `source` to `target`.
    pub fn edges_between(&self, source: &N, target: &N) -> Vec<&CredibilityObject<N, L>> {
        let (Some(src), Some(dst)) = (self.index_of(source), self.index_of(target)) else {
            return vec![];
        };
        self.graph
            .edges_directed(src, Direction::Outgoing)
            .filter(|e| e.target() == dst)
            .map(|e| e.weight())
            .collect()
    }

    /// All edges leaving `vertex`.
    pub fn outgoing(&self, vertex: &N) -> Vec<&CredibilityObject<N, L>> {
        match self.index_of(vertex) {
            Some(idx) => self
                .graph
                .edges_directed(idx, Direction::Outgoing)
                .map(|e| e.weight())
                .collect(),
            None => vec![],
        }
    }

    /// All edges entering `vertex`.
    pub fn incoming(&self, vertex: &N) -> Vec<&CredibilityObject<N, L>> {
        match self.index_of(vertex) {
            Some(idx) => self
                .graph
                .edges_directed(idx, Direction::Incoming)
                .map(|e| e.weight())
                .collect(),
            None => vec![],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn index_of(&self, vertex: &N) -> Option<NodeIndex> {
        self.node_index.get(vertex).copied()
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<N, CredibilityObject<N, L>> {
        &self.graph
    }
}

impl<N: Vertex, L: Label> Default for CredibilityGraph<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Vertex, L: Label> PartialEq for CredibilityGraph<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_set() == other.vertex_set() && self.edge_set() == other.edge_set()
    }
}

impl<N: Vertex, L: Label> Eq for CredibilityGraph<N, L> {}

impl<N: Vertex, L: Label> fmt::Debug for CredibilityGraph<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredibilityGraph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
