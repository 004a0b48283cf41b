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

//! Branch-and-bound search states.
//!
//! A `State` is a partial tour that starts at the tour origin, together with
//! its own reduced cost matrix and the accumulated lower bound. States are
//! immutable once built: `successors` clones the parent for every allowed
//! outgoing edge and applies the branch to the copy, so parent and child
//! never share matrix storage.
//!
//! States work on local indices `0..n`. The `CityOrder` maps a local index
//! back to the model's `CityIndex`; local 0 is always the tour origin.

use crate::matrix::ReducedCostMatrix;
use fixedbitset::FixedBitSet;
use salesman_core::num::{finite::is_forbidden, numeric::SolverNumeric};
use salesman_model::{index::CityIndex, model::Model};

/// The city order shared by all states of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityOrder {
    cities: Vec<CityIndex>,
}

impl CityOrder {
    /// Creates an order from a tour guess; its first city becomes the origin.
    #[inline]
    pub fn new(cities: Vec<CityIndex>) -> Self {
        Self { cities }
    }

    /// Creates the order `0, 1, ..., num_cities - 1`.
    #[inline]
    pub fn identity(num_cities: usize) -> Self {
        Self::new((0..num_cities).map(CityIndex::new).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the model city at local position `local`.
    #[inline]
    pub fn city(&self, local: usize) -> CityIndex {
        debug_assert!(
            local < self.cities.len(),
            "called `CityOrder::city` with local index out of bounds: the len is {} but the index is {}",
            self.cities.len(),
            local
        );

        self.cities[local]
    }

    #[inline]
    pub fn cities(&self) -> &[CityIndex] {
        &self.cities
    }
}

/// A partial tour with its reduced cost matrix and lower bound.
#[derive(Debug, Clone)]
pub struct State<T> {
    tour: Vec<usize>,
    visited: FixedBitSet,
    bound: T,
    matrix: ReducedCostMatrix<T>,
}

impl<T> State<T>
where
    T: SolverNumeric,
{
    /// Builds the root state: the tour holds only the origin and the bound
    /// is the reduction of the full cost matrix.
    pub fn root(model: &Model<T>, order: &CityOrder) -> Self {
        let matrix = ReducedCostMatrix::from_model(model, order.cities());
        Self::from_matrix(matrix)
    }

    /// Builds a root state over an explicit matrix of local costs.
    pub fn from_matrix(mut matrix: ReducedCostMatrix<T>) -> Self {
        let num_cities = matrix.num_cities();
        let bound = matrix.reduce();

        let mut visited = FixedBitSet::with_capacity(num_cities);
        let mut tour = Vec::with_capacity(num_cities);
        if num_cities > 0 {
            visited.insert(0);
            tour.push(0);
        }

        Self {
            tour,
            visited,
            bound,
            matrix,
        }
    }

    /// Returns the lower bound on every completion of this partial tour.
    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }

    /// Returns the number of cities on the partial tour.
    #[inline]
    pub fn depth(&self) -> usize {
        self.tour.len()
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.matrix.num_cities()
    }

    /// Returns `true` if the tour visits every city.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.matrix.num_cities()
    }

    /// Returns the local index of the last city on the tour.
    #[inline]
    pub fn last_city(&self) -> Option<usize> {
        self.tour.last().copied()
    }

    /// Returns `true` if local city `city` is on the tour.
    #[inline]
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited.contains(city)
    }

    /// Returns the partial tour as local indices.
    #[inline]
    pub fn local_tour(&self) -> &[usize] {
        &self.tour
    }

    /// Maps the partial tour back to model cities.
    #[inline]
    pub fn tour(&self, order: &CityOrder) -> Vec<CityIndex> {
        self.tour.iter().map(|&local| order.city(local)).collect()
    }

    #[inline]
    pub fn matrix(&self) -> &ReducedCostMatrix<T> {
        &self.matrix
    }

    /// Returns one child per allowed edge out of the last city, in local index order.
    /// A dead end (every outgoing edge forbidden) has no successors.
    pub fn successors(&self) -> Vec<State<T>> {
        let Some(last) = self.last_city() else {
            return Vec::new();
        };
        if self.is_complete() {
            return Vec::new();
        }

        self.matrix
            .row(last)
            .iter()
            .enumerate()
            .filter(|&(_, &cost)| !is_forbidden(cost))
            .map(|(next, _)| self.extend(next))
            .collect()
    }

    /// Returns the child that travels from the last city to `next`.
    fn extend(&self, next: usize) -> State<T> {
        debug_assert!(
            !self.visited.contains(next),
            "called `State::extend` with a visited city: {}",
            next
        );

        let mut child = self.clone();
        // The root always holds the origin, so `last` exists.
        let last = self.tour[self.tour.len() - 1];

        child.bound = child.bound + child.matrix.get(last, next);
        child.tour.push(next);
        child.visited.insert(next);
        child.matrix.exclude_row(last);
        child.matrix.exclude_column(next);

        if child.is_complete() {
            // Only `next -> origin` remains; the final reduction adds it.
            if is_forbidden(child.matrix.get(next, 0)) {
                child.bound = T::infinity();
            }
        } else {
            for &city in &child.tour {
                child.matrix.exclude_edge(next, city);
            }
        }

        child.bound = child.bound + child.matrix.reduce();
        child
    }
}

impl<T> std::fmt::Display for State<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "State(bound: {}, tour: {:?})", self.bound, self.tour)
    }
}
