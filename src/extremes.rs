//! Extremal sets: the least or most credible objects of a collection.
//!
//! Credibility is a partial order, so an extreme is a *set*: every object
//! whose reporter is not beaten by any other reporter in the collection.
//! Objects whose reporters are mutually incomparable are all retained.
//!
//! Two formulations are provided and agree whenever the policy is a strict
//! partial order:
//!
//! - [`ExtremeResolver::extremes`] folds candidates one at a time into the
//!   accumulated extreme set (the canonical one, usable on streams)
//! - [`ExtremeResolver::extremes_pairwise`] starts from the whole collection and
//!   drops the loser of every comparable pair

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::credibility::Credibility;
use crate::graph::{CredibilityGraph, CredibilityObject, Label, Vertex, Walk};

/// Which end of the credibility order to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extreme {
    /// Least credible.
    Min,
    /// Most credible.
    Max,
}

/// How an accumulated element relates to a new candidate.
#[derive(Debug, Clone, Copy)]
struct Standing {
    /// The candidate is more extreme than this element.
    beaten: bool,
    /// This element is more extreme than the candidate.
    beats: bool,
}

impl Standing {
    fn incomparable(self) -> bool {
        !self.beaten && !self.beats
    }
}

/// Computes extremal sets against one credibility policy and one graph.
pub struct ExtremeResolver<'a, N, L, C> {
    credibility: &'a C,
    graph: &'a CredibilityGraph<N, L>,
}

impl<'a, N, L, C> ExtremeResolver<'a, N, L, C>
where
    N: Vertex,
    L: Label,
    C: Credibility<N, L>,
{
    pub fn new(credibility: &'a C, graph: &'a CredibilityGraph<N, L>) -> Self {
        Self { credibility, graph }
    }

    fn less(&self, a: &L, b: &L) -> bool {
        self.credibility.is_less_credible(a, b, self.graph)
    }

    /// Is `a` strictly more extreme than `b` in the given direction?
    fn more_extreme(&self, a: &L, b: &L, extreme: Extreme) -> bool {
        match extreme {
            Extreme::Max => self.less(b, a),
            Extreme::Min => self.less(a, b),
        }
    }

    /// Extremal subset of `objects`, folded one candidate at a time.
    ///
    /// An empty collection yields the empty set.
    pub fn extremes<'o, I>(&self, objects: I, extreme: Extreme) -> HashSet<CredibilityObject<N, L>>
    where
        I: IntoIterator<Item = &'o CredibilityObject<N, L>>,
        N: 'o,
        L: 'o,
    {
        objects
            .into_iter()
            .fold(HashSet::new(), |acc, candidate| self.fold_step(acc, candidate, extreme))
    }

    /// Merge one `candidate` into the accumulated extreme set `acc`:
    ///
    /// - more extreme than everything in `acc`: `{candidate}`
    /// - less extreme than everything in `acc`: `acc`
    /// - incomparable to everything in `acc`: `acc + candidate`
    /// - otherwise, if nothing in `acc` beats it: the incomparable elements plus
    ///   `candidate`; if something beats it: `acc`
    pub fn fold_step(
        &self,
        acc: HashSet<CredibilityObject<N, L>>,
        candidate: &CredibilityObject<N, L>,
        extreme: Extreme,
    ) -> HashSet<CredibilityObject<N, L>> {
        if acc.is_empty() {
            return HashSet::from([candidate.clone()]);
        }

        let standings: Vec<(&CredibilityObject<N, L>, Standing)> = acc
            .iter()
            .map(|existing| {
                let standing = Standing {
                    beaten: self.more_extreme(&candidate.reporter, &existing.reporter, extreme),
                    beats: self.more_extreme(&existing.reporter, &candidate.reporter, extreme),
                };
                (existing, standing)
            })
            .collect();

        if standings.iter().all(|(_, s)| s.beaten && !s.beats) {
            return HashSet::from([candidate.clone()]);
        }
        if standings.iter().all(|(_, s)| s.beats && !s.beaten) {
            return acc;
        }
        if standings.iter().all(|(_, s)| s.incomparable()) {
            let mut acc = acc;
            acc.insert(candidate.clone());
            return acc;
        }
        if standings.iter().any(|(_, s)| s.beats) {
            return acc;
        }

        let mut kept: HashSet<CredibilityObject<N, L>> = standings
            .into_iter()
            .filter(|(_, s)| s.incomparable())
            .map(|(obj, _)| obj.clone())
            .collect();
        kept.insert(candidate.clone());
        kept
    }

    /// Extremal subset of `objects` by pairwise elimination.
    pub fn extremes_pairwise<'o, I>(
        &self,
        objects: I,
        extreme: Extreme,
    ) -> HashSet<CredibilityObject<N, L>>
    where
        I: IntoIterator<Item = &'o CredibilityObject<N, L>>,
        N: 'o,
        L: 'o,
    {
        let objects: Vec<&CredibilityObject<N, L>> = objects.into_iter().collect();
        let mut kept: HashSet<CredibilityObject<N, L>> =
            objects.iter().map(|&obj| obj.clone()).collect();

        for &one in &objects {
            for &two in &objects {
                if one.reporter == two.reporter {
                    continue;
                }
                if self.more_extreme(&one.reporter, &two.reporter, extreme) {
                    kept.remove(two);
                } else if self.more_extreme(&two.reporter, &one.reporter, extreme) {
                    kept.remove(one);
                }
            }
        }

        kept
    }

    /// Union of the per-path extremes of every walk in `paths`.
    pub fn extremes_on_paths(
        &self,
        paths: &[Walk<N, L>],
        extreme: Extreme,
    ) -> HashSet<CredibilityObject<N, L>> {
        paths
            .iter()
            .flat_map(|path| self.extremes(path.edges(), extreme))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::*;
    use crate::credibility::{AccuracyTable, PastAccuracy, Reachability};

    type Obj = CredibilityObject<&'static str, &'static str>;

    fn co(s: &'static str, t: &'static str, r: &'static str) -> Obj {
        CredibilityObject::new(s, t, r)
    }

    /// A < B < C < D and A < E < F; the two branches are incomparable.
    fn chain() -> CredibilityGraph<&'static str, &'static str> {
        CredibilityGraph::from_objects(vec![
            co("A", "B", "X"),
            co("B", "C", "Y"),
            co("C", "D", "Z"),
            co("A", "E", "W"),
            co("E", "F", "U"),
        ])
    }

    #[test]
    fn fold_into_empty() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let candidate = co("A", "B", "X");
        assert_eq!(
            r.fold_step(HashSet::new(), &candidate, Extreme::Max),
            HashSet::from([candidate])
        );
    }

    #[test]
    fn fold_candidate_beats_all() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "C")]);
        let candidate = co("2", "3", "D");
        assert_eq!(
            r.fold_step(current, &candidate, Extreme::Max),
            HashSet::from([candidate])
        );
    }

    #[test]
    fn fold_candidate_loses_to_all() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "D")]);
        let candidate = co("2", "3", "C");
        assert_eq!(r.fold_step(current.clone(), &candidate, Extreme::Max), current);
    }

    #[test]
    fn fold_candidate_incomparable_to_all() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "D")]);
        let candidate = co("2", "3", "E");
        let mut expected = current.clone();
        expected.insert(candidate.clone());
        assert_eq!(r.fold_step(current, &candidate, Extreme::Max), expected);
    }

    #[test]
    fn fold_candidate_beats_some_incomparable_to_rest() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "D"), co("4", "47", "E")]);
        let candidate = co("2", "3", "F");
        assert_eq!(
            r.fold_step(current, &candidate, Extreme::Max),
            HashSet::from([candidate, co("1", "4", "D")])
        );
    }

    #[test]
    fn fold_candidate_loses_to_some_incomparable_to_rest() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "D"), co("4", "47", "F")]);
        let candidate = co("2", "3", "E");
        assert_eq!(r.fold_step(current.clone(), &candidate, Extreme::Max), current);
    }

    #[test]
    fn fold_candidate_beats_several_keeps_incomparable() {
        // A < D, B < D, E < A, E < B, E < C; C is incomparable to D.
        let g = CredibilityGraph::from_objects(vec![
            co("A", "D", "Y"),
            co("B", "D", "Y"),
            co("E", "A", "Y"),
            co("E", "B", "Y"),
            co("E", "C", "Y"),
        ]);
        let r = ExtremeResolver::new(&Reachability, &g);
        let current = HashSet::from([co("1", "4", "A"), co("4", "7", "B"), co("4", "8", "C")]);
        let candidate = co("2", "3", "D");
        assert_eq!(
            r.fold_step(current, &candidate, Extreme::Max),
            HashSet::from([co("4", "8", "C"), candidate])
        );
    }

    fn collection() -> (CredibilityGraph<&'static str, &'static str>, Vec<Obj>) {
        let g = CredibilityGraph::from_objects(vec![
            co("A", "D", "Y"),
            co("B", "D", "Y"),
            co("E", "A", "Y"),
            co("E", "B", "Y"),
            co("E", "C", "Y"),
        ]);
        let objects = vec![
            co("1", "2", "A"),
            co("3", "4", "B"),
            co("5", "6", "C"),
            co("7", "8", "D"),
            co("9", "0", "E"),
        ];
        (g, objects)
    }

    #[test]
    fn extremes_of_collection() {
        let (g, objects) = collection();
        let r = ExtremeResolver::new(&Reachability, &g);
        assert_eq!(
            r.extremes(&objects, Extreme::Max),
            HashSet::from([co("7", "8", "D"), co("5", "6", "C")])
        );
        assert_eq!(
            r.extremes(&objects, Extreme::Min),
            HashSet::from([co("9", "0", "E")])
        );
    }

    #[test]
    fn extremes_of_empty_collection() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let empty: Vec<Obj> = vec![];
        assert!(r.extremes(&empty, Extreme::Min).is_empty());
        assert!(r.extremes_pairwise(&empty, Extreme::Max).is_empty());
    }

    #[test]
    fn same_reporter_objects_are_all_retained() {
        let g = chain();
        let r = ExtremeResolver::new(&Reachability, &g);
        let objects = vec![co("1", "2", "X"), co("3", "4", "X")];
        assert_eq!(r.extremes(&objects, Extreme::Min).len(), 2);
        assert_eq!(r.extremes_pairwise(&objects, Extreme::Min).len(), 2);
    }

    #[test]
    fn formulations_agree_and_ignore_order() {
        let (g, mut objects) = collection();
        let r = ExtremeResolver::new(&Reachability, &g);
        let expected_max = r.extremes_pairwise(&objects, Extreme::Max);
        let expected_min = r.extremes_pairwise(&objects, Extreme::Min);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            objects.shuffle(&mut rng);
            assert_eq!(r.extremes(&objects, Extreme::Max), expected_max);
            assert_eq!(r.extremes(&objects, Extreme::Min), expected_min);
            assert_eq!(r.extremes_pairwise(&objects, Extreme::Max), expected_max);
        }
    }

    #[test]
    fn accuracy_policy_extremes() {
        let g: CredibilityGraph<i64, i64> = CredibilityGraph::new();
        let table: AccuracyTable<i64> = [(5, PastAccuracy::new(0, 5)), (4, PastAccuracy::new(1, 0))]
            .into_iter()
            .collect();
        let r = ExtremeResolver::new(&table, &g);
        let objects = vec![
            CredibilityObject::new(11, 12, 1),
            CredibilityObject::new(13, 14, 2),
            CredibilityObject::new(17, 18, 4),
            CredibilityObject::new(19, 10, 5),
        ];
        assert_eq!(
            r.extremes(&objects, Extreme::Max),
            HashSet::from([CredibilityObject::new(17, 18, 4)])
        );
        assert_eq!(
            r.extremes(&objects, Extreme::Min),
            HashSet::from([CredibilityObject::new(19, 10, 5)])
        );
    }
}
