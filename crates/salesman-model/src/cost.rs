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

//! Travel cost between two cities.
//!
//! A `CostModel` is a pure function of two city ids: it holds no mutable
//! state and must answer identically on every call. It is only consulted
//! while building a `Model`; the search never calls it again and works on
//! its own matrices instead.
//!
//! `+inf` declares an edge unusable. Self-loops are always treated as
//! forbidden by the model, whatever the cost model says.
//!
//! Implementations
//! - `EuclideanCost<T>`: straight-line distance between `City<T>` points.
//! - `MatrixCost<T>`: an explicit row-major `n × n` matrix.
//! - `FnCost<F>`: adapts any `Fn(CityIndex, CityIndex) -> T` closure.

use crate::{city::City, index::CityIndex};
use salesman_core::num::numeric::SolverNumeric;

/// Supplies the travel cost between two cities.
pub trait CostModel<T>
where
    T: SolverNumeric,
{
    /// Returns the number of cities this cost model covers.
    fn num_cities(&self) -> usize;
    /// Returns the cost of travelling from `from` to `to`
    /// (non-negative, or `+inf` if the edge is forbidden).
    fn cost(&self, from: CityIndex, to: CityIndex) -> T;
}

/// Euclidean distances between cities in the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct EuclideanCost<T> {
    cities: Vec<City<T>>,
}

impl<T> EuclideanCost<T>
where
    T: SolverNumeric,
{
    /// Creates a new Euclidean cost model over `cities`.
    #[inline]
    pub fn new(cities: Vec<City<T>>) -> Self {
        Self { cities }
    }

    /// Returns the cities this cost model is defined over.
    #[inline]
    pub fn cities(&self) -> &[City<T>] {
        &self.cities
    }

    /// Consumes the cost model and returns its cities.
    #[inline]
    pub fn into_cities(self) -> Vec<City<T>> {
        self.cities
    }
}

impl<T> CostModel<T> for EuclideanCost<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn num_cities(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    fn cost(&self, from: CityIndex, to: CityIndex) -> T {
        self.cities[from.get()].distance_to(&self.cities[to.get()])
    }
}

/// An explicit cost matrix, stored row-major (`costs[from * n + to]`).
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixCost<T> {
    num_cities: usize,
    costs: Vec<T>,
}

impl<T> MatrixCost<T>
where
    T: SolverNumeric,
{
    /// Creates a new matrix cost model.
    ///
    /// # Panics
    ///
    /// Panics if `costs.len() != num_cities * num_cities`.
    pub fn new(num_cities: usize, costs: Vec<T>) -> Self {
        assert_eq!(
            costs.len(),
            num_cities * num_cities,
            "called `MatrixCost::new` with a matrix of {} entries for {} cities",
            costs.len(),
            num_cities
        );
        Self { num_cities, costs }
    }

    /// Creates a matrix cost model from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let num_cities = rows.len();
        let costs: Vec<T> = rows.into_iter().flatten().collect();
        Self::new(num_cities, costs)
    }
}

impl<T> CostModel<T> for MatrixCost<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline]
    fn cost(&self, from: CityIndex, to: CityIndex) -> T {
        self.costs[from.get() * self.num_cities + to.get()]
    }
}

/// A cost model backed by a closure.
#[derive(Clone)]
pub struct FnCost<F> {
    num_cities: usize,
    cost_fn: F,
}

impl<F> FnCost<F> {
    /// Creates a new closure-backed cost model over `num_cities` cities.
    #[inline]
    pub fn new(num_cities: usize, cost_fn: F) -> Self {
        Self {
            num_cities,
            cost_fn,
        }
    }
}

impl<T, F> CostModel<T> for FnCost<F>
where
    T: SolverNumeric,
    F: Fn(CityIndex, CityIndex) -> T,
{
    #[inline]
    fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline]
    fn cost(&self, from: CityIndex, to: CityIndex) -> T {
        (self.cost_fn)(from, to)
    }
}

impl<F> std::fmt::Debug for FnCost<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FnCost(num_cities: {})", self.num_cities)
    }
}
