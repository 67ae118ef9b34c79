//! Credibility policies: what makes one reporter less credible than another.
//!
//! The algorithms in [`crate::extremes`] and [`crate::kb`] never look at
//! reporters directly; they ask a [`Credibility`] strategy. Three policies
//! ship with the crate:
//!
//! - [`Reachability`]: reporters are vertices of the same credibility graph and
//!   are ordered by reachability
//! - [`AccuracyTable`]: reporters are ordered by `correct - incorrect` counters
//!   recorded for each of them
//! - [`NumericOrder`]: labels are numbers and are compared with `<`

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::{CredibilityGraph, Label, Vertex};

/// Strict "less credible than" relation between two reporters.
///
/// `graph` is the credibility structure to judge against. It is usually the
/// knowledge base's own graph, but merge passes the pre-merge snapshot.
/// Implementations must be irreflexive and antisymmetric on acyclic graphs.
pub trait Credibility<N, L> {
    fn is_less_credible(&self, a: &L, b: &L, graph: &CredibilityGraph<N, L>) -> bool;
}

/// Reporters are vertices; `a` is less credible than `b` iff `b` is reachable from `a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reachability;

impl<N: Vertex> Credibility<N, N> for Reachability {
    fn is_less_credible(&self, a: &N, b: &N, graph: &CredibilityGraph<N, N>) -> bool {
        graph.is_less(a, b)
    }
}

/// Labels are compared with their own `<`. Equal or unordered labels are incomparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericOrder;

impl<N, L: PartialOrd> Credibility<N, L> for NumericOrder {
    fn is_less_credible(&self, a: &L, b: &L, _graph: &CredibilityGraph<N, L>) -> bool {
        a < b
    }
}

/// Wraps a plain comparison function as a policy.
#[derive(Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<N, L, F> Credibility<N, L> for FromFn<F>
where
    F: Fn(&L, &L) -> bool,
{
    fn is_less_credible(&self, a: &L, b: &L, _graph: &CredibilityGraph<N, L>) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}

// ---------------------------------------------------------------------------
// Past accuracy
// ---------------------------------------------------------------------------

/// How often a reporter's claims turned out right or wrong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastAccuracy {
    pub correct: u32,
    pub incorrect: u32,
}

impl PastAccuracy {
    pub fn new(correct: u32, incorrect: u32) -> Self {
        Self { correct, incorrect }
    }

    /// Net accuracy, `correct - incorrect`.
    pub fn score(&self) -> i64 {
        i64::from(self.correct) - i64::from(self.incorrect)
    }
}

/// Per-reporter accuracy records owned by one knowledge base.
///
/// Reporters without a record score 0. Reading never inserts.
#[derive(Debug, Clone)]
pub struct AccuracyTable<L> {
    records: HashMap<L, PastAccuracy>,
}

impl<L: Label> AccuracyTable<L> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn store_correct(&mut self, reporter: L) {
        self.records.entry(reporter).or_default().correct += 1;
    }

    pub fn store_incorrect(&mut self, reporter: L) {
        self.records.entry(reporter).or_default().incorrect += 1;
    }

    /// Overwrite the record of `reporter`.
    pub fn set(&mut self, reporter: L, accuracy: PastAccuracy) {
        self.records.insert(reporter, accuracy);
    }

    pub fn get(&self, reporter: &L) -> PastAccuracy {
        self.records.get(reporter).copied().unwrap_or_default()
    }

    pub fn score(&self, reporter: &L) -> i64 {
        self.get(reporter).score()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<L: Label> PartialEq for AccuracyTable<L> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<L: Label> Eq for AccuracyTable<L> {}

impl<L: Label> Default for AccuracyTable<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> FromIterator<(L, PastAccuracy)> for AccuracyTable<L> {
    fn from_iter<I: IntoIterator<Item = (L, PastAccuracy)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<N, L: Label> Credibility<N, L> for AccuracyTable<L> {
    fn is_less_credible(&self, a: &L, b: &L, _graph: &CredibilityGraph<N, L>) -> bool {
        self.score(a) < self.score(b)
    }
}

// ---------------------------------------------------------------------------
// Similarity labels
// ---------------------------------------------------------------------------

/// A floating-point similarity score used as an edge label.
///
/// Equality and hashing go through the bit pattern (after folding `-0.0`
/// into `0.0`) so scores can live in hash sets; ordering is the usual float
/// order, with NaN incomparable to everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Similarity(pub f64);

impl Similarity {
    fn bits(self) -> u64 {
        if self.0 == 0.0 { 0.0f64.to_bits() } else { self.0.to_bits() }
    }
}

impl PartialEq for Similarity {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Similarity {}

impl Hash for Similarity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl PartialOrd for Similarity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            return Some(std::cmp::Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Similarity {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Similarity)
    }
}

impl From<f64> for Similarity {
    fn from(value: f64) -> Self {
        Similarity(value)
    }
}
