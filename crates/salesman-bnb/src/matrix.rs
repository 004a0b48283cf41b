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

//! # Reduced Cost Matrix
//!
//! A dense, row-major `n x n` matrix of edge costs owned by a single search
//! state. `+inf` marks a forbidden edge: the diagonal, edges leaving a city
//! that already has a successor, edges entering a city that already has a
//! predecessor, and edges that would close a sub-cycle.
//!
//! `reduce` subtracts the smallest finite entry from every row and then
//! from every column, returning the total subtracted. Any tour uses exactly
//! one entry per open row and column, so that total is a valid lower bound
//! on the remaining cost. Rows and columns without a finite entry are
//! skipped; infinities are never subtracted from each other.

use salesman_core::num::{
    finite::{is_forbidden, min_finite},
    numeric::SolverNumeric,
};
use salesman_model::{index::CityIndex, model::Model};

/// A square cost matrix with row and column reduction.
#[derive(Clone, PartialEq)]
pub struct ReducedCostMatrix<T> {
    num_cities: usize,
    costs: Vec<T>,
}

impl<T> ReducedCostMatrix<T>
where
    T: SolverNumeric,
{
    /// Creates a matrix with `cost(i, j)` for every off-diagonal entry
    /// and `+inf` on the diagonal.
    pub fn from_fn<F>(num_cities: usize, mut cost: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut costs = Vec::with_capacity(num_cities * num_cities);
        for row in 0..num_cities {
            for column in 0..num_cities {
                if row == column {
                    costs.push(T::infinity());
                } else {
                    costs.push(cost(row, column));
                }
            }
        }
        Self { num_cities, costs }
    }

    /// Creates a matrix over `order`: entry `(i, j)` is the model cost
    /// from `order[i]` to `order[j]`.
    #[inline]
    pub fn from_model(model: &Model<T>, order: &[CityIndex]) -> Self {
        debug_assert_eq!(
            order.len(),
            model.num_cities(),
            "called `ReducedCostMatrix::from_model` with an order of {} cities for a model of {} cities",
            order.len(),
            model.num_cities()
        );

        Self::from_fn(order.len(), |row, column| {
            model.cost(order[row], order[column])
        })
    }

    /// Returns the side length of the matrix.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline(always)]
    fn flat_index(&self, row: usize, column: usize) -> usize {
        debug_assert!(
            row < self.num_cities,
            "called `ReducedCostMatrix::flat_index` with row out of bounds: the len is {} but the index is {}",
            self.num_cities,
            row
        );
        debug_assert!(
            column < self.num_cities,
            "called `ReducedCostMatrix::flat_index` with column out of bounds: the len is {} but the index is {}",
            self.num_cities,
            column
        );

        row * self.num_cities + column
    }

    /// Returns the reduced cost of the edge `row -> column`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> T {
        self.costs[self.flat_index(row, column)]
    }

    /// Overwrites the reduced cost of the edge `row -> column`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, cost: T) {
        let index = self.flat_index(row, column);
        self.costs[index] = cost;
    }

    /// Returns the entries of `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.flat_index(row, 0);
        &self.costs[start..start + self.num_cities]
    }

    /// Forbids the edge `row -> column`.
    #[inline]
    pub fn exclude_edge(&mut self, row: usize, column: usize) {
        self.set(row, column, T::infinity());
    }

    /// Forbids every edge leaving `row`.
    #[inline]
    pub fn exclude_row(&mut self, row: usize) {
        let start = self.flat_index(row, 0);
        self.costs[start..start + self.num_cities].fill(T::infinity());
    }

    /// Forbids every edge entering `column`.
    #[inline]
    pub fn exclude_column(&mut self, column: usize) {
        let start = self.flat_index(0, column);
        for cost in self.costs[start..].iter_mut().step_by(self.num_cities) {
            *cost = T::infinity();
        }
    }

    /// Returns `true` if every edge leaving `row` is forbidden.
    #[inline]
    pub fn is_row_excluded(&self, row: usize) -> bool {
        self.row(row).iter().all(|&cost| is_forbidden(cost))
    }

    /// Returns `true` if every edge entering `column` is forbidden.
    #[inline]
    pub fn is_column_excluded(&self, column: usize) -> bool {
        self.column(column).all(is_forbidden)
    }

    /// Returns `true` if every entry of the matrix is forbidden.
    #[inline]
    pub fn is_fully_excluded(&self) -> bool {
        self.costs.iter().all(|&cost| is_forbidden(cost))
    }

    #[inline]
    fn column(&self, column: usize) -> impl Iterator<Item = T> + '_ {
        let start = self.flat_index(0, column);
        self.costs[start..].iter().step_by(self.num_cities).copied()
    }

    /// Reduces every row, then every column, so that each one with a finite
    /// entry has a minimum of zero. Returns the total amount subtracted.
    pub fn reduce(&mut self) -> T {
        let n = self.num_cities;
        let mut total = T::zero();

        for row in 0..n {
            let start = row * n;
            let entries = &mut self.costs[start..start + n];
            if let Some(minimum) = min_finite(entries.iter().copied()) {
                if minimum > T::zero() {
                    for cost in entries.iter_mut().filter(|cost| !is_forbidden(**cost)) {
                        *cost = *cost - minimum;
                    }
                    total = total + minimum;
                }
            }
        }

        for column in 0..n {
            if let Some(minimum) = min_finite(self.column(column)) {
                if minimum > T::zero() {
                    for cost in self.costs[column..]
                        .iter_mut()
                        .step_by(n)
                        .filter(|cost| !is_forbidden(**cost))
                    {
                        *cost = *cost - minimum;
                    }
                    total = total + minimum;
                }
            }
        }

        total
    }
}

impl<T> std::fmt::Debug for ReducedCostMatrix<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducedCostMatrix")
            .field("num_cities", &self.num_cities)
            .field("costs", &self.costs)
            .finish()
    }
}

impl<T> std::fmt::Display for ReducedCostMatrix<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.num_cities {
            for (column, cost) in self.row(row).iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                if is_forbidden(*cost) {
                    write!(f, "{:>8}", "inf")?;
                } else {
                    write!(f, "{:>8.3}", cost)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
