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

use crate::{index::CityIndex, model::Model};
use salesman_core::num::numeric::SolverNumeric;

/// A complete tour through every city of a model.
///
/// The route lists each city once, starting at the tour origin; the edge
/// from the last city back to the first is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    /// The total cost of the tour, wrap-around edge included.
    objective_value: T,
    /// The cities in visiting order.
    route: Vec<CityIndex>,
}

impl<T> Solution<T>
where
    T: SolverNumeric,
{
    /// Constructs a new `Solution` from a precomputed objective.
    #[inline]
    pub fn new(objective_value: T, route: Vec<CityIndex>) -> Self {
        Self {
            objective_value,
            route,
        }
    }

    /// Constructs a new `Solution`, computing the objective from `model`.
    #[inline]
    pub fn from_route(model: &Model<T>, route: Vec<CityIndex>) -> Self {
        let objective_value = model.route_cost(&route);
        Self::new(objective_value, route)
    }

    /// Returns the total cost of this tour.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    /// Returns the cities in visiting order.
    #[inline]
    pub fn route(&self) -> &[CityIndex] {
        &self.route
    }

    /// Consumes the solution and returns its route.
    #[inline]
    pub fn into_route(self) -> Vec<CityIndex> {
        self.route
    }

    /// Returns the number of cities on the route.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the objective is finite, i.e. the tour uses no forbidden edge.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.objective_value.is_finite()
    }

    /// Returns `true` if the route is a permutation of `0..num_cities`.
    pub fn is_complete_tour(&self, num_cities: usize) -> bool {
        if self.route.len() != num_cities {
            return false;
        }

        let mut seen = vec![false; num_cities];
        for city in &self.route {
            match seen.get_mut(city.get()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Solution(objective: {}, route: [", self.objective_value)?;
        for (position, city) in self.route.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", city.get())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{city::City, model::ModelBuilder};

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn route(indices: &[usize]) -> Vec<CityIndex> {
        indices.iter().copied().map(ci).collect()
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let sol = Solution::new(12.5_f64, route(&[0, 2, 1]));
        assert_eq!(sol.objective_value(), 12.5);
        assert_eq!(sol.num_cities(), 3);
        assert_eq!(sol.route(), &route(&[0, 2, 1])[..]);
        assert!(sol.is_finite());
        assert_eq!(sol.clone().into_route(), route(&[0, 2, 1]));
    }

    #[test]
    fn test_from_route_recomputes_cost() {
        let model = ModelBuilder::from_cities(vec![
            City::new(0.0_f64, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ])
        .build()
        .unwrap();
        let sol = Solution::from_route(&model, route(&[0, 1, 2, 3]));
        assert_eq!(sol.objective_value(), 4.0);
    }

    #[test]
    fn test_is_complete_tour() {
        assert!(Solution::new(0.0_f64, route(&[2, 0, 1])).is_complete_tour(3));
        assert!(!Solution::new(0.0_f64, route(&[0, 1])).is_complete_tour(3));
        assert!(!Solution::new(0.0_f64, route(&[0, 1, 1])).is_complete_tour(3));
        assert!(!Solution::new(0.0_f64, route(&[0, 1, 3])).is_complete_tour(3));
    }

    #[test]
    fn test_infinite_objective_is_not_finite() {
        let sol = Solution::new(f64::INFINITY, route(&[0, 1]));
        assert!(!sol.is_finite());
    }

    #[test]
    fn test_display() {
        let sol = Solution::new(4.0_f64, route(&[0, 3, 2, 1]));
        assert_eq!(format!("{}", sol), "Solution(objective: 4, route: [0, 3, 2, 1])");
    }
}
