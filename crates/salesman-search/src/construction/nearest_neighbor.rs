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

use crate::construction::TourConstructor;
use salesman_core::num::numeric::SolverNumeric;
use salesman_model::{index::CityIndex, model::Model};

/// A nearest-neighbour tour constructor.
///
/// Starting at city 0, the tour repeatedly moves to the cheapest unvisited
/// city. Ties go to the lower index. When every remaining edge is forbidden
/// the walk still continues with the lowest unvisited index, so the result
/// is always a permutation.
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbor {
    visited: Vec<bool>,
}

impl NearestNeighbor {
    #[inline]
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
        }
    }

    /// Creates a constructor with buffers sized for `num_cities`.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            visited: Vec::with_capacity(num_cities),
        }
    }
}

impl<T> TourConstructor<T> for NearestNeighbor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "NearestNeighbor"
    }

    fn construct(&mut self, model: &Model<T>) -> Vec<CityIndex> {
        let num_cities = model.num_cities();
        let mut tour = Vec::with_capacity(num_cities);
        if num_cities == 0 {
            return tour;
        }

        self.visited.clear();
        self.visited.resize(num_cities, false);

        let mut current = 0;
        self.visited[current] = true;
        tour.push(CityIndex::new(current));

        while tour.len() < num_cities {
            let mut best: Option<(usize, T)> = None;
            for next in 0..num_cities {
                if self.visited[next] {
                    continue;
                }
                let cost = model.cost(CityIndex::new(current), CityIndex::new(next));
                match best {
                    Some((_, best_cost)) if best_cost <= cost => {}
                    _ => best = Some((next, cost)),
                }
            }

            // The loop condition guarantees at least one unvisited city.
            let Some((next, _)) = best else { break };
            self.visited[next] = true;
            tour.push(CityIndex::new(next));
            current = next;
        }

        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesman_model::{city::City, model::ModelBuilder};

    fn indices(tour: &[CityIndex]) -> Vec<usize> {
        tour.iter().map(|c| c.get()).collect()
    }

    #[test]
    fn test_walks_to_cheapest_city() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(1.0, 0.0),
            City::new(5.0, 0.0),
        ];
        let model = ModelBuilder::from_cities(cities).build().unwrap();
        let tour = NearestNeighbor::new().construct(&model);
        assert_eq!(indices(&tour), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_forbidden_edges_still_yield_permutation() {
        let model = ModelBuilder::<f64>::new(5).build().unwrap();
        let tour = NearestNeighbor::preallocated(5).construct(&model);
        assert_eq!(indices(&tour), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reuse_across_models() {
        let mut constructor = NearestNeighbor::new();
        let small = ModelBuilder::<f64>::new(2).build().unwrap();
        let large = ModelBuilder::<f64>::new(6).build().unwrap();
        assert_eq!(constructor.construct(&large).len(), 6);
        assert_eq!(indices(&constructor.construct(&small)), vec![0, 1]);
    }
}
