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

//! # Tour Construction
//!
//! Heuristics that build a complete tour before exact search starts. The
//! tour they return seeds the incumbent and fixes the city order used by
//! the branch-and-bound matrix, so any valid permutation works; better
//! tours simply prune more from the start.
//!
//! - `farthest_insertion`: farthest insertion with least-detour placement.
//! - `nearest_neighbor`: greedy walk to the cheapest unvisited city.
//! - `index_order`: cities in index order, the fallback of last resort.

pub mod farthest_insertion;
pub mod index_order;
pub mod nearest_neighbor;

pub use farthest_insertion::FarthestInsertion;
pub use index_order::IndexOrder;
pub use nearest_neighbor::NearestNeighbor;

use salesman_core::num::numeric::SolverNumeric;
use salesman_model::{index::CityIndex, model::Model};

/// Builds a complete tour for a model.
pub trait TourConstructor<T>
where
    T: SolverNumeric,
{
    /// Returns the name of the constructor.
    fn name(&self) -> &str;

    /// Returns a tour visiting every city of `model` exactly once.
    fn construct(&mut self, model: &Model<T>) -> Vec<CityIndex>;
}

impl<T> std::fmt::Debug for dyn TourConstructor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TourConstructor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TourConstructor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TourConstructor({})", self.name())
    }
}
