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

//! # Incumbent (Best Solution So Far)
//!
//! Holds the cheapest complete tour discovered during a search. The
//! incumbent's cost is the upper bound used for pruning: any partial tour
//! whose lower bound is not strictly below it can never lead to a better tour.
//!
//! The search always starts from a seeded tour, so an incumbent is never
//! empty. A seed that uses a forbidden edge carries an infinite objective,
//! which prunes nothing until the first finite tour is installed.
//!
//! ## Usage
//!
//! ```rust
//! use salesman_model::{index::CityIndex, solution::Solution};
//! use salesman_search::incumbent::Incumbent;
//!
//! let route = |r: &[usize]| r.iter().copied().map(CityIndex::new).collect::<Vec<_>>();
//! let mut incumbent = Incumbent::new(Solution::new(10.0, route(&[0, 1, 2])));
//!
//! assert!(!incumbent.try_install(Solution::new(10.0, route(&[0, 2, 1]))));
//! assert!(incumbent.try_install(Solution::new(8.0, route(&[0, 2, 1]))));
//! assert_eq!(incumbent.upper_bound(), 8.0);
//! ```

use salesman_core::num::numeric::SolverNumeric;
use salesman_model::solution::Solution;

/// The best solution so far together with how often it has been replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<T> {
    solution: Solution<T>,
    improvements: u64,
}

impl<T> Incumbent<T>
where
    T: SolverNumeric,
{
    /// Creates a new incumbent seeded with `solution`.
    #[inline]
    pub fn new(solution: Solution<T>) -> Self {
        Self {
            solution,
            improvements: 0,
        }
    }

    /// Returns the objective of the current incumbent.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.solution.objective_value()
    }

    /// Returns `true` if the incumbent uses no forbidden edge.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.solution.is_finite()
    }

    /// Returns the current incumbent solution.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// Consumes the incumbent and returns its solution.
    #[inline]
    pub fn into_solution(self) -> Solution<T> {
        self.solution
    }

    /// Returns how many candidates replaced the seed.
    #[inline]
    pub fn improvements(&self) -> u64 {
        self.improvements
    }

    /// Attempts to install `candidate` as the new incumbent.
    /// Returns `true` if it was strictly cheaper and got installed.
    #[inline]
    pub fn try_install(&mut self, candidate: Solution<T>) -> bool {
        // NaN compares false and is therefore never installed.
        if candidate.objective_value() < self.upper_bound() {
            self.solution = candidate;
            self.improvements = self.improvements.saturating_add(1);
            return true;
        }
        false
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(upper_bound: {})", self.upper_bound())
    }
}
