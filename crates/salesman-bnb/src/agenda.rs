// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Agenda (Depth-Bucketed Frontier)
//!
//! The frontier of states awaiting expansion. States are bucketed by the
//! length of their partial tour; each bucket is a min-heap on the bound.
//! Selection always drains the deepest non-empty bucket first and takes
//! the smallest bound within it, which drives the search towards complete
//! tours quickly while still preferring promising branches.
//!
//! Buckets live in a `BTreeMap`, so the deepest bucket is found in
//! `O(log d)` without scanning. Empty buckets are removed and their heaps
//! kept for reuse. Ties on the bound are broken first-in first-out.

use crate::state::State;
use salesman_core::num::numeric::SolverNumeric;
use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};

/// A heap entry ordered so that `BinaryHeap` pops the smallest bound first.
#[derive(Debug, Clone)]
struct AgendaEntry<T> {
    bound: T,
    sequence: u64,
    state: State<T>,
}

impl<T> PartialEq for AgendaEntry<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for AgendaEntry<T> where T: SolverNumeric {}

impl<T> PartialOrd for AgendaEntry<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for AgendaEntry<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller bound and earlier insertion compare greater.
        other
            .bound
            .partial_cmp(&self.bound)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// The depth-bucketed frontier of pending states.
#[derive(Debug, Clone)]
pub struct Agenda<T> {
    buckets: BTreeMap<usize, BinaryHeap<AgendaEntry<T>>>,
    spare_heaps: Vec<BinaryHeap<AgendaEntry<T>>>,
    len: usize,
    next_sequence: u64,
}

impl<T> Default for Agenda<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Agenda<T>
where
    T: SolverNumeric,
{
    /// Creates an empty agenda.
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            spare_heaps: Vec::new(),
            len: 0,
            next_sequence: 0,
        }
    }

    /// Returns the number of pending states.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of non-empty depth buckets.
    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the deepest populated depth, if any.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    /// Inserts `state` into the bucket for its depth.
    pub fn insert(&mut self, state: State<T>) {
        let entry = AgendaEntry {
            bound: state.bound(),
            sequence: self.next_sequence,
            state,
        };
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.len += 1;

        let spare_heaps = &mut self.spare_heaps;
        self.buckets
            .entry(entry.state.depth())
            .or_insert_with(|| spare_heaps.pop().unwrap_or_default())
            .push(entry);
    }

    /// Returns the smallest-bound state of the deepest bucket without removing it.
    #[inline]
    pub fn peek_best(&self) -> Option<&State<T>> {
        self.buckets
            .values()
            .next_back()
            .and_then(|heap| heap.peek())
            .map(|entry| &entry.state)
    }

    /// Removes and returns the smallest-bound state of the deepest bucket.
    #[inline]
    pub fn pop_best(&mut self) -> Option<State<T>> {
        let depth = self.max_depth()?;
        self.pop_from(depth)
    }

    /// Returns the smallest-bound state at `depth`, falling back to the
    /// deepest bucket when `depth` has no pending states.
    #[inline]
    pub fn peek_at_depth(&self, depth: usize) -> Option<&State<T>> {
        match self.buckets.get(&depth).and_then(|heap| heap.peek()) {
            Some(entry) => Some(&entry.state),
            None => self.peek_best(),
        }
    }

    /// Removes the smallest-bound state at `depth`, falling back to the
    /// deepest bucket when `depth` has no pending states.
    #[inline]
    pub fn pop_at_depth(&mut self, depth: usize) -> Option<State<T>> {
        if self.buckets.contains_key(&depth) {
            self.pop_from(depth)
        } else {
            self.pop_best()
        }
    }

    fn pop_from(&mut self, depth: usize) -> Option<State<T>> {
        let heap = self.buckets.get_mut(&depth)?;
        let entry = heap.pop()?;
        if heap.is_empty() {
            if let Some(heap) = self.buckets.remove(&depth) {
                self.spare_heaps.push(heap);
            }
        }
        self.len -= 1;
        Some(entry.state)
    }

    /// Drops every pending state whose bound is not strictly below `upper_bound`,
    /// calling `on_prune` for each. Returns the number of dropped states.
    pub fn prune_dominated<F>(&mut self, upper_bound: T, mut on_prune: F) -> usize
    where
        F: FnMut(&State<T>),
    {
        let mut pruned = 0;
        for heap in self.buckets.values_mut() {
            heap.retain(|entry| {
                if entry.bound < upper_bound {
                    true
                } else {
                    on_prune(&entry.state);
                    pruned += 1;
                    false
                }
            });
        }

        let emptied = self
            .buckets
            .iter()
            .filter(|(_, heap)| heap.is_empty())
            .map(|(&depth, _)| depth)
            .collect::<Vec<_>>();
        for depth in emptied {
            if let Some(heap) = self.buckets.remove(&depth) {
                self.spare_heaps.push(heap);
            }
        }

        self.len -= pruned;
        pruned
    }

    /// Drops every pending state. Allocated heaps are kept for reuse.
    pub fn clear(&mut self) {
        while let Some((_, mut heap)) = self.buckets.pop_first() {
            heap.clear();
            self.spare_heaps.push(heap);
        }
        self.len = 0;
        self.next_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix::ReducedCostMatrix, state::State};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// Builds a root state (depth 1) with `bound` as its bound.
    fn root_with_bound(bound: f64) -> State<f64> {
        // A 2-city matrix whose reduction equals `bound`.
        State::from_matrix(ReducedCostMatrix::from_fn(2, |i, _| {
            if i == 0 { bound } else { 0.0 }
        }))
    }

    /// Builds a state at `depth` (2 or more) whose bound is `extra` plus the root bound.
    fn state_at_depth(depth: usize, extra: f64) -> State<f64> {
        let n = depth + 1;
        let mut state = State::from_matrix(ReducedCostMatrix::from_fn(n, |i, j| {
            if i == 0 && j == 1 {
                extra
            } else if j == i + 1 || (i == n - 1 && j == 0) {
                0.0
            } else {
                100.0
            }
        }));
        while state.depth() < depth {
            state = state
                .successors()
                .into_iter()
                .min_by(|a, b| a.bound().partial_cmp(&b.bound()).unwrap())
                .unwrap();
        }
        state
    }

    #[test]
    fn test_empty_agenda() {
        let mut agenda = Agenda::<f64>::new();
        assert!(agenda.is_empty());
        assert_eq!(agenda.len(), 0);
        assert!(agenda.peek_best().is_none());
        assert!(agenda.pop_best().is_none());
        assert!(agenda.pop_at_depth(3).is_none());
        assert_eq!(agenda.max_depth(), None);
    }

    #[test]
    fn test_min_bound_within_bucket() {
        let mut agenda = Agenda::new();
        agenda.insert(root_with_bound(5.0));
        agenda.insert(root_with_bound(2.0));
        agenda.insert(root_with_bound(9.0));
        assert_eq!(agenda.len(), 3);
        assert_eq!(agenda.num_buckets(), 1);

        assert_eq!(agenda.peek_best().map(|s| s.bound()), Some(2.0));
        let popped = (0..3)
            .filter_map(|_| agenda.pop_best())
            .map(|s| s.bound())
            .collect::<Vec<_>>();
        assert_eq!(popped, vec![2.0, 5.0, 9.0]);
        assert!(agenda.is_empty());
        assert_eq!(agenda.num_buckets(), 0);
    }

    #[test]
    fn test_deepest_bucket_wins_over_bound() {
        let mut agenda = Agenda::new();
        agenda.insert(root_with_bound(0.0));
        agenda.insert(state_at_depth(3, 50.0));
        agenda.insert(state_at_depth(2, 1.0));

        assert_eq!(agenda.max_depth(), Some(3));
        assert_eq!(agenda.pop_best().map(|s| s.depth()), Some(3));
        assert_eq!(agenda.pop_best().map(|s| s.depth()), Some(2));
        assert_eq!(agenda.pop_best().map(|s| s.depth()), Some(1));
        assert!(agenda.pop_best().is_none());
    }

    #[test]
    fn test_ties_are_first_in_first_out() {
        let mut agenda = Agenda::new();
        let first = state_at_depth(3, 1.0);
        let second = state_at_depth(3, 1.0);
        assert_eq!(first.bound(), second.bound());

        agenda.insert(first);
        agenda.insert(second);
        agenda.insert(state_at_depth(3, 7.0));
        // Equal bounds come back in insertion order; both before the worse one.
        assert_eq!(agenda.pop_best().map(|s| s.bound()), Some(agenda_bound(1.0)));
        assert_eq!(agenda.pop_best().map(|s| s.bound()), Some(agenda_bound(1.0)));
        assert_eq!(agenda.len(), 1);
    }

    fn agenda_bound(extra: f64) -> f64 {
        state_at_depth(3, extra).bound()
    }

    #[test]
    fn test_pop_at_depth_falls_back_to_deepest() {
        let mut agenda = Agenda::new();
        agenda.insert(root_with_bound(4.0));
        agenda.insert(state_at_depth(2, 0.0));

        assert_eq!(agenda.peek_at_depth(1).map(|s| s.depth()), Some(1));
        assert_eq!(agenda.pop_at_depth(1).map(|s| s.bound()), Some(4.0));
        // Depth 1 is now missing, so depth 2 is used.
        assert_eq!(agenda.peek_at_depth(1).map(|s| s.depth()), Some(2));
        assert_eq!(agenda.pop_at_depth(7).map(|s| s.depth()), Some(2));
        assert!(agenda.is_empty());
    }

    #[test]
    fn test_prune_dominated_drops_stale_states() {
        let mut agenda = Agenda::new();
        agenda.insert(root_with_bound(1.0));
        agenda.insert(root_with_bound(6.0));
        agenda.insert(state_at_depth(2, 5.0));
        agenda.insert(state_at_depth(3, 8.0));

        let mut seen = Vec::new();
        let pruned = agenda.prune_dominated(5.0, |state| seen.push(state.bound()));
        assert_eq!(pruned, 3);
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, vec![5.0, 6.0, 8.0]);

        assert_eq!(agenda.len(), 1);
        assert_eq!(agenda.num_buckets(), 1);
        assert_eq!(agenda.max_depth(), Some(1));
        assert_eq!(agenda.pop_best().map(|s| s.bound()), Some(1.0));
    }

    #[test]
    fn test_clear_resets_and_allows_reuse() {
        let mut agenda = Agenda::new();
        agenda.insert(root_with_bound(1.0));
        agenda.insert(state_at_depth(2, 1.0));
        agenda.clear();
        assert!(agenda.is_empty());
        assert_eq!(agenda.num_buckets(), 0);
        assert!(agenda.peek_best().is_none());

        agenda.insert(root_with_bound(3.0));
        assert_eq!(agenda.pop_best().map(|s| s.bound()), Some(3.0));
    }

    #[test]
    fn test_random_inserts_pop_in_depth_then_bound_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut agenda = Agenda::new();
        let mut expected = Vec::new();
        for _ in 0..60 {
            let depth = rng.gen_range(1..=4);
            let state = if depth == 1 {
                root_with_bound(rng.gen_range(0.0..10.0))
            } else {
                state_at_depth(depth, rng.gen_range(0.0..10.0))
            };
            expected.push((state.depth(), state.bound()));
            agenda.insert(state);
        }

        // Deepest first, then ascending bound.
        expected.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.partial_cmp(&b.1).unwrap()));
        let mut popped = Vec::new();
        while let Some(state) = agenda.pop_best() {
            popped.push((state.depth(), state.bound()));
        }
        assert_eq!(popped, expected);
    }
}
