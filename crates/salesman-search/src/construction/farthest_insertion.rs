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

//! Farthest insertion.
//!
//! The tour starts with city 0 and the city farthest from it. Each round
//! selects the uninserted city whose cheapest connection from the partial
//! tour is the most expensive, then inserts it between the neighbours
//! `i -> j` that minimise the detour `c(i, r) + c(r, j) - c(i, j)`.
//!
//! Inserting the far-away cities first fixes the outline of the tour early,
//! and the nearby cities are filled in along it. On Euclidean instances
//! this is usually within a few percent of optimal.

use crate::construction::TourConstructor;
use salesman_core::num::{finite::is_forbidden, numeric::SolverNumeric};
use salesman_model::{index::CityIndex, model::Model};

/// Returns the cost of inserting `r` between `i` and `j`.
///
/// Forbidden edges never produce NaN: replacing a forbidden `i -> j` with
/// two allowed edges is `-inf`, and any detour over a forbidden edge is `+inf`.
#[inline]
fn detour<T>(model: &Model<T>, i: CityIndex, r: CityIndex, j: CityIndex) -> T
where
    T: SolverNumeric,
{
    let into = model.cost(i, r);
    let out_of = model.cost(r, j);
    if is_forbidden(into) || is_forbidden(out_of) {
        return T::infinity();
    }

    let replaced = model.cost(i, j);
    if is_forbidden(replaced) {
        return T::neg_infinity();
    }

    into + out_of - replaced
}

/// A farthest-insertion tour constructor.
#[derive(Debug, Clone, Default)]
pub struct FarthestInsertion<T> {
    /// Cheapest cost from any tour city to each city; `None` once inserted.
    distance_to_tour: Vec<Option<T>>,
}

impl<T> FarthestInsertion<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            distance_to_tour: Vec::new(),
        }
    }

    /// Creates a constructor with buffers sized for `num_cities`.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            distance_to_tour: Vec::with_capacity(num_cities),
        }
    }

    /// Marks `city` as inserted and tightens the distances of all others.
    #[inline]
    fn absorb(&mut self, model: &Model<T>, city: usize) {
        self.distance_to_tour[city] = None;
        for (other, slot) in self.distance_to_tour.iter_mut().enumerate() {
            if let Some(distance) = slot {
                let cost = model.cost(CityIndex::new(city), CityIndex::new(other));
                if cost < *distance {
                    *distance = cost;
                }
            }
        }
    }

    /// Returns the uninserted city farthest from the tour, lowest index on ties.
    #[inline]
    fn farthest(&self) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;
        for (city, slot) in self.distance_to_tour.iter().enumerate() {
            if let Some(distance) = *slot {
                match best {
                    Some((_, best_distance)) if best_distance >= distance => {}
                    _ => best = Some((city, distance)),
                }
            }
        }
        best.map(|(city, _)| city)
    }
}

/// Returns the position after which `city` is inserted with the least detour.
#[inline]
fn cheapest_position<T>(model: &Model<T>, tour: &[CityIndex], city: CityIndex) -> usize
where
    T: SolverNumeric,
{
    let mut best: Option<(usize, T)> = None;
    for position in 0..tour.len() {
        let i = tour[position];
        let j = tour[(position + 1) % tour.len()];
        let cost = detour(model, i, city, j);
        match best {
            Some((_, best_cost)) if best_cost <= cost => {}
            _ => best = Some((position, cost)),
        }
    }
    best.map_or(0, |(position, _)| position)
}

impl<T> TourConstructor<T> for FarthestInsertion<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "FarthestInsertion"
    }

    fn construct(&mut self, model: &Model<T>) -> Vec<CityIndex> {
        let num_cities = model.num_cities();
        let mut tour = Vec::with_capacity(num_cities);
        if num_cities == 0 {
            return tour;
        }

        self.distance_to_tour.clear();
        self.distance_to_tour.resize(num_cities, Some(T::infinity()));

        tour.push(CityIndex::new(0));
        self.absorb(model, 0);

        while let Some(city) = self.farthest() {
            let position = cheapest_position(model, &tour, CityIndex::new(city));
            tour.insert(position + 1, CityIndex::new(city));
            self.absorb(model, city);
        }

        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use salesman_model::{city::City, model::ModelBuilder};

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn indices(tour: &[CityIndex]) -> Vec<usize> {
        tour.iter().map(|c| c.get()).collect()
    }

    fn is_permutation(tour: &[CityIndex], n: usize) -> bool {
        let mut sorted = indices(tour);
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_detour_with_forbidden_edges() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_cost(ci(0), ci(1), 2.0);
        builder.set_cost(ci(1), ci(2), 3.0);
        let model = builder.build().unwrap();

        // 0 -> 2 is forbidden, routing through 1 repairs it.
        assert_eq!(detour(&model, ci(0), ci(1), ci(2)), f64::NEG_INFINITY);
        // 2 -> 1 is forbidden.
        assert_eq!(detour(&model, ci(2), ci(1), ci(0)), f64::INFINITY);
    }

    #[test]
    fn test_detour_finite() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0), City::new(6.0, 0.0)];
        let model = ModelBuilder::from_cities(cities).build().unwrap();
        assert_eq!(detour(&model, ci(0), ci(1), ci(2)), 4.0);
    }

    #[test]
    fn test_starts_with_origin_and_farthest_city() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(9.0, 0.0),
        ];
        let model = ModelBuilder::from_cities(cities).build().unwrap();
        let tour = FarthestInsertion::new().construct(&model);
        assert_eq!(indices(&tour), vec![0, 1, 2]);
    }

    #[test]
    fn test_square_is_optimal() {
        let cities = vec![
            City::<f64>::new(0.0, 0.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
            City::new(0.0, 1.0),
        ];
        let model = ModelBuilder::from_cities(cities).build().unwrap();
        let tour = FarthestInsertion::new().construct(&model);
        assert!(is_permutation(&tour, 4));
        assert!((model.route_cost(&tour) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_fully_forbidden_model_still_yields_permutation() {
        let model = ModelBuilder::<f64>::new(6).build().unwrap();
        let tour = FarthestInsertion::preallocated(6).construct(&model);
        assert!(is_permutation(&tour, 6));
        assert_eq!(tour[0], ci(0));
    }

    #[test]
    fn test_random_instances_yield_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut constructor = FarthestInsertion::new();
        for n in 2..12 {
            let cities = (0..n)
                .map(|_| {
                    City::<f64>::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
                })
                .collect();
            let model = ModelBuilder::from_cities(cities).build().unwrap();
            let tour = constructor.construct(&model);
            assert!(is_permutation(&tour, n));
            assert!(model.route_cost(&tour).is_finite());
        }
    }
}
