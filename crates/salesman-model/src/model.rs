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

use crate::{
    city::City,
    cost::{CostModel, EuclideanCost},
    index::CityIndex,
};
use salesman_core::num::{finite::add_or_forbidden, numeric::SolverNumeric};

#[inline(always)]
fn flatten_index(num_cities: usize, from: CityIndex, to: CityIndex) -> usize {
    from.get() * num_cities + to.get()
}

/// The error type for model construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A tour needs at least two cities.
    TooFewCities {
        /// The number of cities that was supplied.
        num_cities: usize,
    },
    /// A cost entry is negative, which breaks the reduction invariants.
    NegativeCost {
        /// The origin of the offending edge.
        from: CityIndex,
        /// The destination of the offending edge.
        to: CityIndex,
    },
    /// A cost entry is NaN.
    NaNCost {
        /// The origin of the offending edge.
        from: CityIndex,
        /// The destination of the offending edge.
        to: CityIndex,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewCities { num_cities } => {
                write!(f, "A tour needs at least 2 cities, got {}", num_cities)
            }
            Self::NegativeCost { from, to } => {
                write!(f, "Negative travel cost from {} to {}", from, to)
            }
            Self::NaNCost { from, to } => write!(f, "NaN travel cost from {} to {}", from, to),
        }
    }
}

impl std::error::Error for ModelError {}

/// The immutable problem instance: `n` cities and the travel cost between
/// every ordered pair of them.
///
/// - `costs[from * n + to]` is the travel cost, `+inf` if the edge is forbidden.
///   The diagonal is always `+inf`.
/// - `cities` holds coordinates when the model was built from points, and is
///   empty when the costs were supplied externally (cities are then opaque ids).
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated `Model`.
#[derive(Clone)]
pub struct Model<T> {
    num_cities: usize,
    costs: Vec<T>,
    cities: Vec<City<T>>,
}

impl<T> Model<T>
where
    T: SolverNumeric,
{
    /// Returns the number of cities in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use salesman_model::model::ModelBuilder;
    /// let model = ModelBuilder::<f64>::new(3).build().unwrap();
    /// assert_eq!(model.num_cities(), 3);
    /// ```
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns the travel cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> T {
        debug_assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `Model::cost` with city index out of bounds: the len is {} but the indices are {} and {}",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.costs[flatten_index(self.num_cities, from, to)]
    }

    /// Returns the full row-major cost matrix.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the coordinates of `index`, if the model was built from points.
    #[inline]
    pub fn city(&self, index: CityIndex) -> Option<&City<T>> {
        self.cities.get(index.get())
    }

    /// Returns `true` if the model carries city coordinates.
    #[inline]
    pub fn has_coordinates(&self) -> bool {
        !self.cities.is_empty()
    }

    /// Returns an iterator over all city indices in ascending order.
    #[inline]
    pub fn city_indices(&self) -> impl Iterator<Item = CityIndex> + '_ {
        (0..self.num_cities).map(CityIndex::new)
    }

    /// Returns `true` if `cost(i, j) == cost(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.num_cities).all(|i| {
            (i + 1..self.num_cities).all(|j| {
                self.costs[i * self.num_cities + j] == self.costs[j * self.num_cities + i]
            })
        })
    }

    /// Returns the cost of `route` as a closed tour: the sum of the costs
    /// of consecutive cities plus the edge from the last city back to the first.
    ///
    /// Routes with fewer than two cities cost zero. The result is `+inf` if
    /// any edge of the route is forbidden.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use salesman_model::{city::City, index::CityIndex, model::ModelBuilder};
    /// let model = ModelBuilder::from_cities(vec![
    ///     City::new(0.0, 0.0),
    ///     City::new(3.0, 0.0),
    ///     City::new(3.0, 4.0),
    /// ])
    /// .build()
    /// .unwrap();
    /// let route: Vec<CityIndex> = (0..3).map(CityIndex::new).collect();
    /// assert_eq!(model.route_cost(&route), 12.0);
    /// ```
    pub fn route_cost(&self, route: &[CityIndex]) -> T {
        if route.len() < 2 {
            return T::zero();
        }

        let mut total = T::zero();
        for pair in route.windows(2) {
            total = add_or_forbidden(total, self.cost(pair[0], pair[1]));
        }
        add_or_forbidden(total, self.cost(route[route.len() - 1], route[0]))
    }

    /// Formats `route` as a list of coordinates, `[[x,y],[x,y],...]`.
    /// Returns `None` if the model carries no coordinates.
    pub fn format_route(&self, route: &[CityIndex]) -> Option<String> {
        if !self.has_coordinates() {
            return None;
        }

        let parts = route
            .iter()
            .map(|index| self.city(*index).map(|c| c.to_string()))
            .collect::<Option<Vec<_>>>()?;
        Some(format!("[{}]", parts.join(",")))
    }
}

impl<T> std::fmt::Debug for Model<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("num_cities", &self.num_cities)
            .field("costs", &self.costs)
            .field("cities", &self.cities)
            .finish()
    }
}

impl<T> std::fmt::Display for Model<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_cities: {}, coordinates: {})",
            self.num_cities,
            !self.cities.is_empty()
        )
    }
}

/// Mutable builder for `Model`.
///
/// # Defaults
///
/// | Field | Default Value | Semantics |
/// | :--- | :--- | :--- |
/// | `costs` | `+inf` | **Disconnected.** Edges must be added explicitly. |
/// | diagonal | `+inf` | Self-loops are never allowed, whatever is set. |
///
/// Building from points (`from_cities`) or from a `CostModel`
/// (`from_cost_model`) fills every entry.
#[derive(Clone)]
pub struct ModelBuilder<T> {
    num_cities: usize,
    costs: Vec<T>,
    cities: Vec<City<T>>,
}

impl<T> ModelBuilder<T>
where
    T: SolverNumeric,
{
    /// Creates a new builder for `num_cities` cities with every edge forbidden.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use salesman_model::{index::CityIndex, model::ModelBuilder};
    /// let mut builder = ModelBuilder::<f64>::new(2);
    /// builder.set_symmetric_cost(CityIndex::new(0), CityIndex::new(1), 7.0);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.cost(CityIndex::new(1), CityIndex::new(0)), 7.0);
    /// ```
    pub fn new(num_cities: usize) -> Self {
        Self {
            num_cities,
            costs: vec![T::infinity(); num_cities * num_cities],
            cities: Vec::new(),
        }
    }

    /// Creates a builder whose costs are the Euclidean distances between `cities`.
    pub fn from_cities(cities: Vec<City<T>>) -> Self {
        let cost_model = EuclideanCost::new(cities);
        let mut builder = Self::from_cost_model(&cost_model);
        builder.cities = cost_model.into_cities();
        builder
    }

    /// Creates a builder by querying `cost_model` once for every ordered pair of cities.
    pub fn from_cost_model<C>(cost_model: &C) -> Self
    where
        C: CostModel<T>,
    {
        let num_cities = cost_model.num_cities();
        let mut builder = Self::new(num_cities);
        for from in 0..num_cities {
            for to in 0..num_cities {
                if from != to {
                    let (from, to) = (CityIndex::new(from), CityIndex::new(to));
                    builder.set_cost(from, to, cost_model.cost(from, to));
                }
            }
        }
        builder
    }

    /// Returns the number of cities.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Sets the travel cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set_cost(&mut self, from: CityIndex, to: CityIndex, cost: T) -> &mut Self {
        assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `ModelBuilder::set_cost` with city index out of bounds: the len is {} but the indices are {} and {}",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.costs[flatten_index(self.num_cities, from, to)] = cost;
        self
    }

    /// Sets the travel cost in both directions between `a` and `b`.
    #[inline]
    pub fn set_symmetric_cost(&mut self, a: CityIndex, b: CityIndex, cost: T) -> &mut Self {
        self.set_cost(a, b, cost);
        self.set_cost(b, a, cost)
    }

    /// Validates the builder and produces an immutable `Model`.
    ///
    /// # Errors
    ///
    /// - `ModelError::TooFewCities` if there are fewer than two cities.
    /// - `ModelError::NaNCost` / `ModelError::NegativeCost` for the first
    ///   offending off-diagonal entry in row-major order.
    pub fn build(mut self) -> Result<Model<T>, ModelError> {
        let n = self.num_cities;
        if n < 2 {
            return Err(ModelError::TooFewCities { num_cities: n });
        }

        for from in 0..n {
            for to in 0..n {
                let index = from * n + to;
                if from == to {
                    self.costs[index] = T::infinity();
                    continue;
                }

                let cost = self.costs[index];
                let (from, to) = (CityIndex::new(from), CityIndex::new(to));
                if cost.is_nan() {
                    return Err(ModelError::NaNCost { from, to });
                }
                if cost < T::zero() {
                    return Err(ModelError::NegativeCost { from, to });
                }
            }
        }

        Ok(Model {
            num_cities: n,
            costs: self.costs,
            cities: self.cities,
        })
    }
}

impl<T> std::fmt::Debug for ModelBuilder<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBuilder")
            .field("num_cities", &self.num_cities)
            .field("costs", &self.costs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{FnCost, MatrixCost};

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn square() -> Model<f64> {
        ModelBuilder::from_cities(vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ])
        .build()
        .expect("square is a valid model")
    }

    #[test]
    fn test_new_builder_is_disconnected() {
        let model = ModelBuilder::<f64>::new(3).build().unwrap();
        for from in model.city_indices() {
            for to in model.city_indices() {
                assert!(model.cost(from, to).is_infinite());
            }
        }
    }

    #[test]
    fn test_from_cities_fills_euclidean_costs_and_infinite_diagonal() {
        let model = square();
        assert_eq!(model.num_cities(), 4);
        assert!(model.has_coordinates());
        assert_eq!(model.cost(ci(0), ci(1)), 1.0);
        assert!((model.cost(ci(0), ci(2)) - 2.0_f64.sqrt()).abs() < 1e-12);
        for i in model.city_indices() {
            assert!(model.cost(i, i).is_infinite());
        }
        assert!(model.is_symmetric());
    }

    #[test]
    fn test_from_cost_model_overrides_diagonal() {
        let cost = FnCost::new(3, |_: CityIndex, _: CityIndex| 1.0_f64);
        let model = ModelBuilder::from_cost_model(&cost).build().unwrap();
        assert!(!model.has_coordinates());
        assert!(model.cost(ci(2), ci(2)).is_infinite());
        assert_eq!(model.cost(ci(2), ci(0)), 1.0);
    }

    #[test]
    fn test_asymmetric_matrix_is_accepted() {
        let cost = MatrixCost::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![2.0, 0.0, 1.0],
            vec![1.0, 5.0, 0.0],
        ]);
        let model = ModelBuilder::from_cost_model(&cost).build().unwrap();
        assert!(!model.is_symmetric());
        assert_eq!(model.cost(ci(1), ci(0)), 2.0);
    }

    #[test]
    fn test_build_rejects_too_few_cities() {
        assert_eq!(
            ModelBuilder::<f64>::new(1).build().unwrap_err(),
            ModelError::TooFewCities { num_cities: 1 }
        );
        assert_eq!(
            ModelBuilder::<f64>::new(0).build().unwrap_err(),
            ModelError::TooFewCities { num_cities: 0 }
        );
    }

    #[test]
    fn test_build_rejects_negative_cost() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_cost(ci(1), ci(2), -0.5);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelError::NegativeCost {
                from: ci(1),
                to: ci(2)
            }
        );
        assert_eq!(
            err.to_string(),
            "Negative travel cost from CityIndex(1) to CityIndex(2)"
        );
    }

    #[test]
    fn test_build_rejects_nan_cost() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_cost(ci(0), ci(1), f64::NAN);
        assert!(matches!(
            builder.build(),
            Err(ModelError::NaNCost { .. })
        ));
    }

    #[test]
    fn test_negative_diagonal_is_ignored() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_cost(ci(0), ci(0), -1.0);
        builder.set_symmetric_cost(ci(0), ci(1), 1.0);
        let model = builder.build().unwrap();
        assert!(model.cost(ci(0), ci(0)).is_infinite());
    }

    #[test]
    #[should_panic(expected = "called `ModelBuilder::set_cost` with city index out of bounds")]
    fn test_set_cost_out_of_bounds_panics() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_cost(ci(0), ci(2), 1.0);
    }

    #[test]
    fn test_route_cost_includes_wraparound() {
        let model = square();
        let route = vec![ci(0), ci(1), ci(2), ci(3)];
        assert_eq!(model.route_cost(&route), 4.0);

        let crossing = vec![ci(0), ci(2), ci(1), ci(3)];
        let expected = 2.0 + 2.0 * 2.0_f64.sqrt();
        assert!((model.route_cost(&crossing) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_route_cost_degenerate_and_forbidden() {
        let model = square();
        assert_eq!(model.route_cost(&[]), 0.0);
        assert_eq!(model.route_cost(&[ci(2)]), 0.0);

        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_symmetric_cost(ci(0), ci(1), 1.0);
        builder.set_symmetric_cost(ci(1), ci(2), 1.0);
        let model = builder.build().unwrap();
        assert!(model.route_cost(&[ci(0), ci(1), ci(2)]).is_infinite());
    }

    #[test]
    fn test_format_route() {
        let model = square();
        assert_eq!(
            model.format_route(&[ci(0), ci(1)]).as_deref(),
            Some("[[0,0],[1,0]]")
        );

        let opaque = ModelBuilder::<f64>::new(2).build().unwrap();
        assert!(opaque.format_route(&[ci(0), ci(1)]).is_none());
    }

    #[test]
    fn test_costs_are_row_major() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder
            .set_cost(ci(0), ci(1), 1.0)
            .set_cost(ci(1), ci(2), 5.0)
            .set_cost(ci(2), ci(0), 7.0);
        let model = builder.build().unwrap();

        let costs = model.costs();
        assert_eq!(costs.len(), 9);
        assert_eq!(costs[1], 1.0);
        assert_eq!(costs[5], 5.0);
        assert_eq!(costs[6], 7.0);
        for from in model.city_indices() {
            for to in model.city_indices() {
                assert_eq!(costs[from.get() * 3 + to.get()], model.cost(from, to));
            }
            assert!(costs[from.get() * 4].is_infinite());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", square()),
            "Model(num_cities: 4, coordinates: true)"
        );
    }
}
