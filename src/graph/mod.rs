//! Credibility graphs: directed multigraphs of credibility claims.
//!
//! A [`CredibilityObject`] `(source, target, reporter)` states that `source` is
//! less credible than `target`, as reported by `reporter`. The graph's
//! reachability relation is the induced credibility partial order.
//!
//! - **Store** ([`CredibilityGraph`]): `petgraph` stable graph plus a vertex index
//! - **Reachability** ([`reach`]): existence queries and full path enumeration
//! - **Cycles** ([`cycles`]): elementary cycles expanded over parallel edges

pub mod cycles;
pub mod reach;
pub mod store;

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use reach::Comparison;
pub use store::CredibilityGraph;

/// Bounds required of vertex values. Vertices carry no payload; identity is by value.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// Bounds required of reporter labels.
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// A claim that `source` is less credible than `target`, attributed to `reporter`.
///
/// Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredibilityObject<N, L> {
    /// The less credible vertex.
    pub source: N,
    /// The more credible vertex.
    pub target: N,
    /// Who made the claim.
    pub reporter: L,
}

impl<N, L> CredibilityObject<N, L> {
    pub fn new(source: N, target: N, reporter: L) -> Self {
        Self {
            source,
            target,
            reporter,
        }
    }
}

impl<N: fmt::Display, L: fmt::Display> fmt::Display for CredibilityObject<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.reporter, self.source, self.target)
    }
}

/// A directed walk: a start vertex followed by a chain of edges where each
/// edge's target is the next edge's source.
///
/// Paths and cycles are both walks; a zero-length walk only has a start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Walk<N, L> {
    start: N,
    edges: Vec<CredibilityObject<N, L>>,
}

impl<N: Vertex, L: Label> Walk<N, L> {
    /// A zero-length walk sitting at `vertex`.
    pub fn singleton(vertex: N) -> Self {
        Self {
            start: vertex,
            edges: Vec::new(),
        }
    }

    /// Build a walk from a non-empty edge chain. Returns `None` when the chain
    /// is empty or not connected end to start.
    pub fn from_edges(edges: Vec<CredibilityObject<N, L>>) -> Option<Self> {
        let start = edges.first()?.source.clone();
        let connected = edges.windows(2).all(|w| w[0].target == w[1].source);
        connected.then_some(Self { start, edges })
    }

    /// Prepend a single step to `rest`. The caller guarantees
    /// `step.target == rest.start()`.
    pub(crate) fn prepend(step: CredibilityObject<N, L>, rest: &Walk<N, L>) -> Self {
        let mut edges = Vec::with_capacity(rest.edges.len() + 1);
        let start = step.source.clone();
        edges.push(step);
        edges.extend(rest.edges.iter().cloned());
        Self { start, edges }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// The last vertex of the walk (the start for a zero-length walk).
    pub fn end(&self) -> &N {
        self.edges.last().map(|e| &e.target).unwrap_or(&self.start)
    }

    pub fn edges(&self) -> &[CredibilityObject<N, L>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<CredibilityObject<N, L>> {
        self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All visited vertices in order, start included.
    pub fn vertices(&self) -> Vec<&N> {
        std::iter::once(&self.start)
            .chain(self.edges.iter().map(|e| &e.target))
            .collect()
    }

    /// True when the walk has at least one edge and ends where it started.
    pub fn is_closed(&self) -> bool {
        !self.edges.is_empty() && self.end() == &self.start
    }
}
