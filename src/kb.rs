//! Knowledge bases: belief revision over one owned credibility graph.
//!
//! A [`KnowledgeBase`] owns a [`CredibilityGraph`] and a [`Credibility`] policy.
//! Every committed state is acyclic as long as edges only enter through
//! [`KnowledgeBase::expansion`] or [`KnowledgeBase::merge`]:
//!
//! - **Expansion** adds a claim unless the opposite order is already derivable
//! - **Contraction** cuts every path between two vertices at its least credible edges
//! - **Prioritized revision** contracts the opposite order, then expands
//! - **Non-prioritized revision** only does so when the new reporter beats
//!   every reporter currently holding up the opposite order
//! - **Merge** unions another graph in and breaks each new cycle at its least
//!   credible edges, judged against the pre-merge state

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::credibility::{AccuracyTable, Credibility, NumericOrder, PastAccuracy, Reachability, Similarity};
use crate::error::{CredResult, GraphError};
use crate::extremes::{Extreme, ExtremeResolver};
use crate::graph::{Comparison, CredibilityGraph, CredibilityObject, Label, Vertex, Walk};
use crate::parse::parse_objects;

/// Reporters are vertices of the same graph and are ranked by reachability.
pub type ReporterKb<N = String> = KnowledgeBase<N, N, Reachability>;

/// Reporters are ranked by their recorded past accuracy.
pub type AccuracyKb<N, L> = KnowledgeBase<N, L, AccuracyTable<L>>;

/// Edges carry similarity scores compared numerically.
pub type SimilarityKb<N> = KnowledgeBase<N, Similarity, NumericOrder>;

// ---------------------------------------------------------------------------
// Merge report
// ---------------------------------------------------------------------------

/// Result of merging another graph into a knowledge base.
#[derive(Debug, Clone)]
pub struct MergeReport<N, L> {
    /// Edges of the other graph that were not already present.
    pub added: usize,
    /// Cycle walks found after the union.
    pub cycles: usize,
    /// Edges removed to break those cycles.
    pub removed: HashSet<CredibilityObject<N, L>>,
}

impl<N: Vertex, L: Label> PartialEq for MergeReport<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.added == other.added && self.cycles == other.cycles && self.removed == other.removed
    }
}

impl<N: Vertex, L: Label> Eq for MergeReport<N, L> {}

// ---------------------------------------------------------------------------
// Knowledge base
// ---------------------------------------------------------------------------

/// A credibility graph plus the policy used to rank its reporters.
#[derive(Clone)]
pub struct KnowledgeBase<N, L, C> {
    graph: CredibilityGraph<N, L>,
    credibility: C,
    path_limit: Option<usize>,
}

impl<N, L, C> KnowledgeBase<N, L, C>
where
    N: Vertex,
    L: Label,
    C: Credibility<N, L>,
{
    /// An empty knowledge base.
    pub fn new(credibility: C) -> Self {
        Self::from_graph(CredibilityGraph::new(), credibility)
    }

    /// Adopt `graph` as-is. No acyclicity filtering is applied, so the
    /// caller is responsible for handing over a consistent graph (or merging
    /// it into one).
    pub fn from_graph(graph: CredibilityGraph<N, L>, credibility: C) -> Self {
        Self {
            graph,
            credibility,
            path_limit: None,
        }
    }

    /// Build by expanding `objects` in order.
    ///
    /// Construction is order-sensitive: a claim contradicting earlier ones is
    /// dropped, so the same claims in another order can yield another graph.
    pub fn from_objects<I>(objects: I, credibility: C) -> Self
    where
        I: IntoIterator<Item = CredibilityObject<N, L>>,
    {
        let mut kb = Self::new(credibility);
        for obj in objects {
            if !kb.expansion(obj.clone()) {
                tracing::debug!(?obj, "dropping claim that contradicts earlier claims");
            }
        }
        kb
    }

    /// Parse `(source, target, reporter), ...` text and expand the triples in
    /// textual order.
    pub fn parse(text: &str, credibility: C) -> CredResult<Self>
    where
        N: FromStr,
        N::Err: fmt::Display,
        L: FromStr,
        L::Err: fmt::Display,
    {
        let objects = parse_objects(text)?;
        Ok(Self::from_objects(objects, credibility))
    }

    /// Cap the paths listed by [`KnowledgeBase::all_paths`] at `max_len`
    /// edges. Extremes, reliability and every revision operation still
    /// enumerate up to the edge count.
    pub fn with_path_limit(mut self, max_len: usize) -> Self {
        self.path_limit = Some(max_len);
        self
    }

    pub fn graph(&self) -> &CredibilityGraph<N, L> {
        &self.graph
    }

    pub fn credibility(&self) -> &C {
        &self.credibility
    }

    pub fn credibility_mut(&mut self) -> &mut C {
        &mut self.credibility
    }

    /// Deep copy. Mutating the copy never affects `self`.
    pub fn copy(&self) -> Self
    where
        C: Clone,
    {
        self.clone()
    }

    // -- queries ------------------------------------------------------------

    pub fn is_less(&self, a: &N, b: &N) -> bool {
        self.graph.is_less(a, b)
    }

    pub fn compare(&self, a: &N, b: &N) -> Result<Comparison, GraphError> {
        let result = self.graph.compare(a, b);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "comparison hit an inconsistent graph");
        }
        result
    }

    /// Every simple path from `source` to `target`, within the path limit
    /// when one is set.
    pub fn all_paths(&self, source: &N, target: &N) -> Vec<Walk<N, L>> {
        let max_len = self.path_limit.unwrap_or_else(|| self.graph.edge_count());
        self.graph.all_paths_within(source, target, max_len)
    }

    /// Is reporter `a` less credible than reporter `b` under this base's policy?
    pub fn is_less_credible(&self, a: &L, b: &L) -> bool {
        self.credibility.is_less_credible(a, b, &self.graph)
    }

    fn resolver(&self) -> ExtremeResolver<'_, N, L, C> {
        ExtremeResolver::new(&self.credibility, &self.graph)
    }

    /// Extremal subset of an arbitrary collection of objects.
    pub fn extremes<'o, I>(&self, objects: I, extreme: Extreme) -> HashSet<CredibilityObject<N, L>>
    where
        I: IntoIterator<Item = &'o CredibilityObject<N, L>>,
        N: 'o,
        L: 'o,
    {
        self.resolver().extremes(objects, extreme)
    }

    /// Union of the per-path extremes over every path from `source` to `target`.
    pub fn extremes_between(
        &self,
        source: &N,
        target: &N,
        extreme: Extreme,
    ) -> HashSet<CredibilityObject<N, L>> {
        let paths = self.graph.all_paths(source, target);
        self.resolver().extremes_on_paths(&paths, extreme)
    }

    /// Most credible reporters among the least credible edges on every path
    /// from `source` to `target`. Empty when no path exists.
    pub fn reliability(&self, source: &N, target: &N) -> HashSet<L> {
        let weakest = self.extremes_between(source, target, Extreme::Min);
        self.extremes(&weakest, Extreme::Max)
            .into_iter()
            .map(|obj| obj.reporter)
            .collect()
    }

    // -- revision -----------------------------------------------------------

    /// Add `obj` unless `obj.target` already reaches `obj.source`.
    ///
    /// Returns `false` with the graph unchanged when the claim is refused.
    /// Self-loops are always refused. Re-adding a held claim returns `true`
    /// without changing the graph: the belief is already accepted, so this
    /// does not report whether an edge was inserted.
    pub fn expansion(&mut self, obj: CredibilityObject<N, L>) -> bool {
        if obj.source == obj.target || self.graph.is_reachable(&obj.target, &obj.source) {
            tracing::debug!(?obj, "expansion refused");
            return false;
        }
        if !self.graph.add_edge(obj.clone()) {
            return self.graph.contains_edge(&obj);
        }
        tracing::debug!(?obj, "expansion accepted");
        true
    }

    /// Remove the least credible edges of every path from `source` to
    /// `target`. Returns exactly the removed set (empty when no path exists).
    pub fn contraction(&mut self, source: &N, target: &N) -> HashSet<CredibilityObject<N, L>> {
        let removed = self.extremes_between(source, target, Extreme::Min);
        self.graph.remove_edges(&removed);
        tracing::debug!(removed = removed.len(), "contraction");
        removed
    }

    /// Destroy the opposite order, then expand.
    pub fn prioritized_revision(&mut self, obj: CredibilityObject<N, L>) -> bool {
        self.contraction(&obj.target, &obj.source);
        self.expansion(obj)
    }

    /// Revise only if `obj.reporter` is more credible than every reporter
    /// behind the opposite order. Returns `false` with the graph unchanged
    /// otherwise.
    pub fn non_prioritized_revision(&mut self, obj: CredibilityObject<N, L>) -> bool {
        let opposing = self.reliability(&obj.target, &obj.source);
        if opposing.is_empty() {
            return self.expansion(obj);
        }
        if opposing
            .iter()
            .all(|reporter| self.is_less_credible(reporter, &obj.reporter))
        {
            self.prioritized_revision(obj)
        } else {
            tracing::debug!(?obj, opposing = opposing.len(), "non-prioritized revision refused");
            false
        }
    }

    // -- merge --------------------------------------------------------------

    /// Merge another knowledge base into this one. The other base's policy
    /// is ignored; cycles are resolved with this base's policy.
    pub fn merge<C2>(&mut self, other: &KnowledgeBase<N, L, C2>) -> MergeReport<N, L> {
        self.merge_graph(&other.graph)
    }

    /// Union `other` into this graph and break every resulting cycle at its
    /// least credible edges, ranked against the graph as it was before the
    /// union.
    pub fn merge_graph(&mut self, other: &CredibilityGraph<N, L>) -> MergeReport<N, L> {
        let old = self.graph.clone();

        for vertex in other.vertices() {
            self.graph.add_vertex(vertex.clone());
        }
        let added = other
            .edges()
            .filter(|obj| self.graph.add_edge((*obj).clone()))
            .count();

        let cycles = self.graph.cycle_walks();
        let resolver = ExtremeResolver::new(&self.credibility, &old);
        let removed: HashSet<CredibilityObject<N, L>> = cycles
            .iter()
            .flat_map(|cycle| resolver.extremes(cycle.edges(), Extreme::Min))
            .collect();
        self.graph.remove_edges(&removed);

        tracing::debug!(added, cycles = cycles.len(), removed = removed.len(), "merge");
        MergeReport {
            added,
            cycles: cycles.len(),
            removed,
        }
    }
}

impl<N: Vertex, L: Label, C: Credibility<N, L> + Default> Default for KnowledgeBase<N, L, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<N: Vertex, L: Label, C> fmt::Debug for KnowledgeBase<N, L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnowledgeBase")
            .field("graph", &self.graph)
            .field("path_limit", &self.path_limit)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Accuracy records
// ---------------------------------------------------------------------------

impl<N: Vertex, L: Label> KnowledgeBase<N, L, AccuracyTable<L>> {
    /// Record a correct claim by `reporter`.
    pub fn store_correct(&mut self, reporter: L) {
        self.credibility.store_correct(reporter);
    }

    /// Record an incorrect claim by `reporter`.
    pub fn store_incorrect(&mut self, reporter: L) {
        self.credibility.store_incorrect(reporter);
    }

    pub fn set_accuracy(&mut self, reporter: L, accuracy: PastAccuracy) {
        self.credibility.set(reporter, accuracy);
    }

    pub fn past_accuracy(&self, reporter: &L) -> PastAccuracy {
        self.credibility.get(reporter)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    type Obj = CredibilityObject<String, String>;

    fn co(s: &str, t: &str, r: &str) -> Obj {
        CredibilityObject::new(s.into(), t.into(), r.into())
    }

    fn kb(text: &str) -> ReporterKb {
        ReporterKb::parse(text, Reachability).unwrap()
    }

    fn edges(objects: &[Obj]) -> HashSet<Obj> {
        objects.iter().cloned().collect()
    }

    const EXAMPLE: &str = "(B,F1,F2),(F1,F2,F3),(F2,F3,B),(A1,A2,F1),(A1,A3,F1),(A2,A4,B),(A2,A4,F3),(A3,A4,F2)";

    const LARGE: &str = "(H,I,F),(H,L,D),(H,J,G),(I,L,G),(J,L,E),(J,L,F),(J,K,D),(J,K,E),(K,L,D),\
                         (D,E,G),(D,F,E),(E,G,F),(F,G,D)";

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn parse_empty_text() {
        let kb = kb("");
        assert!(kb.graph().is_empty());
    }

    #[test]
    fn extremes_between_min_and_max() {
        let kb = kb(EXAMPLE);
        assert_eq!(kb.all_paths(&s("A1"), &s("A4")).len(), 3);
        assert_eq!(
            kb.extremes_between(&s("A1"), &s("A4"), Extreme::Min),
            edges(&[co("A1", "A2", "F1"), co("A2", "A4", "B"), co("A1", "A3", "F1")])
        );
        assert_eq!(
            kb.extremes_between(&s("A1"), &s("A4"), Extreme::Max),
            edges(&[co("A1", "A2", "F1"), co("A2", "A4", "F3"), co("A3", "A4", "F2")])
        );
    }

    #[test]
    fn minimal_sources_keep_incomparable_reporters() {
        let kb = kb("(4,5,A),(1,5,A),(2,5,A),(3,5,A),(4,5,A),(A,B,1),(A,C,5),(B,D,4),(C,D,3)");
        assert_eq!(
            kb.extremes_between(&s("A"), &s("D"), Extreme::Min),
            edges(&[co("A", "B", "1"), co("B", "D", "4"), co("C", "D", "3")])
        );
    }

    #[test]
    fn contraction_cuts_every_path() {
        let mut kb = kb(EXAMPLE);
        let expected = kb.extremes_between(&s("A1"), &s("A4"), Extreme::Min);
        let removed = kb.contraction(&s("A1"), &s("A4"));
        assert_eq!(removed, expected);
        assert_eq!(kb.graph().edge_count(), 5);
        assert!(kb.all_paths(&s("A1"), &s("A4")).is_empty());
        assert!(!kb.is_less(&s("A1"), &s("A4")));
    }

    #[test]
    fn contraction_without_path_is_noop() {
        let mut kb = kb(EXAMPLE);
        let before = kb.graph().clone();
        assert!(kb.contraction(&s("A4"), &s("A1")).is_empty());
        assert_eq!(kb.graph(), &before);
    }

    #[test]
    fn reliability_is_strongest_weakest_link() {
        let kb = kb(EXAMPLE);
        assert_eq!(kb.reliability(&s("A1"), &s("A4")), HashSet::from([s("F1")]));
        assert!(kb.reliability(&s("A4"), &s("A1")).is_empty());
    }

    #[test]
    fn expansion_refuses_reverse_path() {
        let mut kb = kb(EXAMPLE);
        let before = kb.graph().clone();
        assert!(!kb.expansion(co("A4", "A1", "F3")));
        assert_eq!(kb.graph(), &before);
    }

    #[test]
    fn expansion_refuses_self_loop() {
        let mut kb = kb(EXAMPLE);
        assert!(!kb.expansion(co("A1", "A1", "F3")));
        assert_eq!(kb.graph().edge_count(), 8);
    }

    #[test]
    fn expansion_of_held_claim_is_noop() {
        let mut kb = kb(EXAMPLE);
        assert!(kb.expansion(co("A1", "A2", "F1")));
        assert_eq!(kb.graph().edge_count(), 8);
    }

    #[test]
    fn text_construction_drops_contradicting_triples() {
        let kb = kb("(A,B,X),(B,A,Y)");
        assert_eq!(kb.graph().edge_set(), edges(&[co("A", "B", "X")]));

        let reversed: ReporterKb = ReporterKb::parse("(B,A,Y),(A,B,X)", Reachability).unwrap();
        assert_eq!(reversed.graph().edge_set(), edges(&[co("B", "A", "Y")]));
    }

    #[test]
    fn non_prioritized_rejected_by_stronger_reporter() {
        let mut kb = kb(EXAMPLE);
        let before = kb.graph().clone();
        assert!(!kb.non_prioritized_revision(co("A4", "A1", "B")));
        assert_eq!(kb.graph(), &before);
    }

    #[test]
    fn non_prioritized_accepted_by_more_credible_reporter() {
        let mut kb = kb(EXAMPLE);
        assert!(kb.non_prioritized_revision(co("A4", "A1", "F3")));
        assert_eq!(
            kb.graph().edge_set(),
            edges(&[
                co("A2", "A4", "F3"),
                co("A4", "A1", "F3"),
                co("A3", "A4", "F2"),
                co("B", "F1", "F2"),
                co("F1", "F2", "F3"),
                co("F2", "F3", "B"),
            ])
        );
    }

    #[test]
    fn non_prioritized_without_opposition_is_expansion() {
        let mut kb = kb(EXAMPLE);
        assert!(kb.non_prioritized_revision(co("A4", "F3", "B")));
        assert_eq!(kb.graph().edge_count(), 9);
    }

    #[test]
    fn non_prioritized_on_larger_graph() {
        let mut kb = kb(LARGE);
        assert!(kb.non_prioritized_revision(co("L", "H", "G")));
        assert_eq!(
            kb.graph().edge_set(),
            edges(&[
                co("F", "G", "D"),
                co("J", "K", "E"),
                co("D", "F", "E"),
                co("E", "G", "F"),
                co("H", "J", "G"),
                co("I", "L", "G"),
                co("D", "E", "G"),
                co("L", "H", "G"),
            ])
        );
    }

    #[test]
    fn prioritized_revision_against_existing_order() {
        let mut kb = kb(EXAMPLE);
        assert!(kb.prioritized_revision(co("A4", "A1", "F3")));
        assert_eq!(kb.graph().edge_count(), 6);
        assert_eq!(kb.all_paths(&s("A2"), &s("A1")).len(), 1);
    }

    #[test]
    fn prioritized_revision_along_existing_order() {
        let mut kb = kb(EXAMPLE);
        assert!(kb.prioritized_revision(co("A1", "A4", "F3")));
        assert_eq!(kb.graph().edge_count(), 9);
        assert_eq!(kb.all_paths(&s("A1"), &s("A4")).len(), 4);
    }

    #[test]
    fn merge_breaks_cycle_at_least_credible_edge() {
        let mut this = kb("(A,B,R1),(R1,R2,R3)");
        let other = kb("(B,A,R2)");
        let report = this.merge(&other);

        assert_eq!(report.added, 1);
        assert_eq!(report.cycles, 1);
        assert_eq!(report.removed, edges(&[co("A", "B", "R1")]));
        assert_eq!(
            this.graph().edge_set(),
            edges(&[co("B", "A", "R2"), co("R1", "R2", "R3")])
        );
        assert!(this.graph().is_acyclic());
    }

    #[test]
    fn merge_incomparable_reporters_drop_whole_cycle() {
        let mut this = kb("(A,B,X)");
        let other = kb("(B,A,Y)");
        let report = this.merge(&other);
        assert_eq!(report.removed.len(), 2);
        assert_eq!(this.graph().edge_count(), 0);
        assert!(this.graph().contains_vertex(&s("A")));
    }

    #[test]
    fn merge_reports_compare_by_value() {
        let mut left = kb("(A,B,X)");
        let mut right = kb("(A,B,X)");
        let other = kb("(B,A,Y)");
        assert_eq!(left.merge(&other), right.merge(&other));
        assert_ne!(left.merge(&kb("(C,D,Z)")), MergeReport {
            added: 0,
            cycles: 0,
            removed: HashSet::new(),
        });
    }

    #[test]
    fn merge_of_disjoint_bases_is_union() {
        let mut this = kb("(A,B,X)");
        let other = kb("(C,D,Y)");
        let report = this.merge(&other);
        assert!(report.removed.is_empty());
        assert_eq!(this.graph().edge_count(), 2);
    }

    #[test]
    fn merge_of_random_acyclic_bases_is_acyclic() {
        let mut rng = StdRng::seed_from_u64(42);
        let names: Vec<String> = (0..6).map(|i| format!("V{i}")).collect();
        let random_kb = |rng: &mut StdRng| {
            let objects: Vec<Obj> = (0..8)
                .map(|_| {
                    let pick = |rng: &mut StdRng| names[rng.gen_range(0..names.len())].clone();
                    CredibilityObject::new(pick(rng), pick(rng), pick(rng))
                })
                .collect();
            ReporterKb::from_objects(objects, Reachability)
        };

        for _ in 0..10 {
            let mut this = random_kb(&mut rng);
            let other = random_kb(&mut rng);
            assert!(this.graph().is_acyclic());
            assert!(other.graph().is_acyclic());
            this.merge(&other);
            assert!(this.graph().is_acyclic());
            assert!(this.graph().simple_cycles().is_empty());
        }
    }

    #[test]
    fn copy_is_isolated() {
        let original = kb(EXAMPLE);
        let mut copy = original.copy();
        copy.contraction(&s("A1"), &s("A4"));
        assert_eq!(original.graph().edge_count(), 8);
        assert_eq!(copy.graph().edge_count(), 5);

        let mut original = original;
        original.expansion(co("X", "Y", "Z"));
        assert!(!copy.graph().contains_vertex(&s("X")));
    }

    #[test]
    fn expansion_sequence_stays_consistent() {
        let mut kb = ReporterKb::<String>::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..40 {
            let a = format!("N{}", rng.gen_range(0..7));
            let b = format!("N{}", rng.gen_range(0..7));
            kb.expansion(CredibilityObject::new(a, b, s("R")));
        }
        let vertices: Vec<String> = kb.graph().vertices().cloned().collect();
        for a in &vertices {
            for b in &vertices {
                assert!(kb.compare(a, b).is_ok());
            }
        }
    }

    #[test]
    fn path_limit_only_caps_listing() {
        let kb = kb(EXAMPLE).with_path_limit(1);
        assert!(kb.all_paths(&s("A1"), &s("A4")).is_empty());
        assert_eq!(kb.extremes_between(&s("A1"), &s("A4"), Extreme::Min).len(), 3);
        assert_eq!(kb.reliability(&s("A1"), &s("A4")), HashSet::from([s("F1")]));
    }

    #[test]
    fn path_limit_does_not_weaken_contraction() {
        let mut kb = kb("(A,B,X),(A,C,Y),(C,B,Y)").with_path_limit(1);
        let removed = kb.contraction(&s("A"), &s("B"));
        assert_eq!(removed.len(), 3);
        assert!(!kb.is_less(&s("A"), &s("B")));
    }

    #[test]
    fn path_limit_does_not_split_prioritized_revision() {
        let mut kb = kb("(A,B,X),(A,C,Y),(C,B,Y)").with_path_limit(1);
        assert!(kb.prioritized_revision(co("B", "A", "Z")));
        assert_eq!(kb.graph().edge_set(), edges(&[co("B", "A", "Z")]));
        assert!(kb.graph().is_acyclic());
    }

    // -- numeric accuracy --------------------------------------------------

    const NUMERIC: &str = "(11,12,1),(11,13,1),(12,14,0),(12,14,3),(13,14,2)";

    fn accuracy_kb() -> AccuracyKb<i64, i64> {
        let mut kb = AccuracyKb::parse(NUMERIC, AccuracyTable::new()).unwrap();
        kb.set_accuracy(0, PastAccuracy::new(0, 3));
        kb.set_accuracy(1, PastAccuracy::new(1, 2));
        kb.set_accuracy(2, PastAccuracy::new(2, 1));
        kb.set_accuracy(3, PastAccuracy::new(3, 0));
        kb
    }

    fn nco(s: i64, t: i64, r: i64) -> CredibilityObject<i64, i64> {
        CredibilityObject::new(s, t, r)
    }

    #[test]
    fn accuracy_extremes() {
        let kb = accuracy_kb();
        assert_eq!(
            kb.extremes_between(&11, &14, Extreme::Min),
            HashSet::from([nco(11, 12, 1), nco(12, 14, 0), nco(11, 13, 1)])
        );
        assert_eq!(
            kb.extremes_between(&11, &14, Extreme::Max),
            HashSet::from([nco(11, 12, 1), nco(12, 14, 3), nco(13, 14, 2)])
        );
        assert_eq!(kb.reliability(&11, &14), HashSet::from([1]));
    }

    #[test]
    fn accuracy_contraction() {
        let mut kb = accuracy_kb();
        kb.contraction(&11, &14);
        assert_eq!(kb.graph().edge_count(), 2);
        assert!(!kb.is_less(&11, &14));
    }

    #[test]
    fn accuracy_non_prioritized_revision() {
        let mut accepted = accuracy_kb();
        assert!(accepted.non_prioritized_revision(nco(14, 11, 3)));
        assert_eq!(
            accepted.graph().edge_set(),
            HashSet::from([nco(12, 14, 3), nco(14, 11, 3), nco(13, 14, 2)])
        );

        let mut rejected = accuracy_kb();
        assert!(!rejected.non_prioritized_revision(nco(14, 11, 0)));
        assert_eq!(rejected.graph().edge_count(), 5);
    }

    #[test]
    fn accuracy_records_are_per_instance() {
        let mut a = accuracy_kb();
        let b = a.copy();
        a.store_correct(0);
        a.store_correct(0);
        assert_eq!(a.past_accuracy(&0), PastAccuracy::new(2, 3));
        assert_eq!(b.past_accuracy(&0), PastAccuracy::new(0, 3));
        a.store_incorrect(9);
        assert_eq!(a.past_accuracy(&9).score(), -1);
    }

    // -- similarity ---------------------------------------------------------

    #[test]
    fn similarity_reliability() {
        let kb = SimilarityKb::<i64>::parse("(1,2,0.5),(2,3,0.9),(1,3,0.1)", NumericOrder).unwrap();
        assert_eq!(kb.reliability(&1, &3), HashSet::from([Similarity(0.5)]));
        assert_eq!(
            kb.extremes_between(&1, &3, Extreme::Min),
            HashSet::from([
                CredibilityObject::new(1, 2, Similarity(0.5)),
                CredibilityObject::new(1, 3, Similarity(0.1)),
            ])
        );
    }
}
