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

//! Branch-and-bound solver for the travelling salesman problem.
//!
//! `BnbSolver` runs a best-first search over partial tours bounded by
//! reduced cost matrices. A tour constructor seeds the incumbent and fixes
//! the city order; the root state holds only the tour origin. Each outer
//! iteration takes the cheapest state of the deepest agenda bucket, expands
//! it and queues every child whose bound still beats the incumbent.
//! Complete children replace the incumbent when they are strictly cheaper,
//! and every queued state they dominate is dropped at once, so every state
//! left in the agenda has a bound strictly below the incumbent.
//!
//! The search stops when the agenda runs empty or its best bound meets the
//! incumbent (both prove optimality), when the time budget runs out, or
//! when a monitor asks it to terminate. The clock is read once per outer
//! iteration and once per child, so an expansion never overruns the budget
//! by more than one successor set.
//!
//! The solver keeps its agenda between solves; it is cleared after every
//! run so its allocations are reused.

use crate::{
    agenda::Agenda,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    result::BnbSolverOutcome,
    state::{CityOrder, State},
    stats::BnbSolverStatistics,
};
use log::{debug, warn};
use salesman_core::num::numeric::SolverNumeric;
use salesman_model::{index::CityIndex, model::Model, solution::Solution};
use salesman_search::{
    construction::{IndexOrder, TourConstructor},
    incumbent::Incumbent,
    monitor::command::SearchCommand,
};
use std::time::{Duration, Instant};

const TIME_LIMIT_REASON: &str = "Time limit reached";

/// A best-first branch-and-bound solver over reduced cost matrices.
#[derive(Debug, Clone)]
pub struct BnbSolver<T>
where
    T: SolverNumeric,
{
    agenda: Agenda<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverNumeric,
{
    /// Create a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            agenda: Agenda::new(),
        }
    }

    /// Solve `model` within `time_limit`, seeding the incumbent with the
    /// tour built by `constructor`.
    #[inline]
    pub fn solve<C, S>(
        &mut self,
        model: &Model<T>,
        time_limit: Duration,
        constructor: &mut C,
        monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        C: TourConstructor<T> + ?Sized,
        S: TreeSearchMonitor<T>,
    {
        let route = constructor.construct(model);
        debug!(
            "Seeding with {} on {} cities",
            constructor.name(),
            model.num_cities()
        );
        self.solve_with_initial_tour(model, time_limit, route, monitor)
    }

    /// Solve `model` within `time_limit`, seeding the incumbent with `initial_tour`.
    ///
    /// The initial tour also fixes the city order; its first city is the
    /// origin of every partial tour. A route that is not a permutation of the
    /// model's cities is replaced by the index order.
    pub fn solve_with_initial_tour<S>(
        &mut self,
        model: &Model<T>,
        time_limit: Duration,
        initial_tour: Vec<CityIndex>,
        mut monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        S: TreeSearchMonitor<T>,
    {
        let start_time = Instant::now();
        let seed = validated_seed(model, initial_tour);

        let session =
            BnbSolverSearchSession::new(self, model, &mut monitor, seed, start_time, time_limit);
        let res = session.run();
        self.reset();
        res
    }

    /// Reset the internal state of the solver.
    ///
    /// # Note
    ///
    /// This does not deallocate the agenda, but only drops its states.
    #[inline]
    fn reset(&mut self) {
        self.agenda.clear();
    }
}

/// Returns the seed solution for `route`, or for the index order if
/// `route` does not visit every city exactly once.
fn validated_seed<T>(model: &Model<T>, route: Vec<CityIndex>) -> Solution<T>
where
    T: SolverNumeric,
{
    let seed = Solution::from_route(model, route);
    if seed.is_complete_tour(model.num_cities()) {
        return seed;
    }

    warn!(
        "Initial tour with {} cities is not a tour of all {} cities; falling back to index order",
        seed.num_cities(),
        model.num_cities()
    );
    Solution::from_route(model, IndexOrder::new().construct(model))
}

/// How the outer loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionEnd {
    Proven,
    Aborted(String),
}

/// A search session for the branch-and-bound solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, T, S>
where
    T: SolverNumeric,
{
    solver: &'a mut BnbSolver<T>,
    model: &'a Model<T>,
    monitor: &'a mut S,
    order: CityOrder,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics<T>,
    start_time: Instant,
    deadline: Option<Instant>,
}

impl<'a, T, S> std::fmt::Debug for BnbSolverSearchSession<'a, T, S>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("model", &self.model)
            .field("order", &self.order)
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> BnbSolverSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: TreeSearchMonitor<T>,
{
    /// Create a new search session.
    #[inline]
    fn new(
        solver: &'a mut BnbSolver<T>,
        model: &'a Model<T>,
        monitor: &'a mut S,
        seed: Solution<T>,
        start_time: Instant,
        time_limit: Duration,
    ) -> Self {
        let order = CityOrder::new(seed.route().to_vec());
        let mut stats = BnbSolverStatistics::default();
        stats.set_initial_upper_bound(seed.objective_value());

        Self {
            solver,
            model,
            monitor,
            order,
            incumbent: Incumbent::new(seed),
            stats,
            start_time,
            // Budgets too large to represent never expire.
            deadline: start_time.checked_add(time_limit),
        }
    }

    #[inline(always)]
    fn time_exhausted(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// Run the search session.
    fn run(mut self) -> BnbSolverOutcome<T> {
        let root = State::root(self.model, &self.order);
        self.stats.set_root_lower_bound(root.bound());
        debug!(
            "Root lower bound {}, initial upper bound {}",
            root.bound(),
            self.incumbent.upper_bound()
        );

        self.solver.agenda.insert(root);
        self.stats.on_agenda_size(self.solver.agenda.len());
        self.monitor.on_enter_search(self.model, &self.stats);

        let end = loop {
            let upper_bound = self.incumbent.upper_bound();
            match self.solver.agenda.peek_best() {
                None => break SessionEnd::Proven,
                Some(best) if best.bound() == upper_bound => break SessionEnd::Proven,
                Some(_) => {}
            }

            if self.time_exhausted() {
                break SessionEnd::Aborted(TIME_LIMIT_REASON.to_string());
            }

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break SessionEnd::Aborted(msg);
            }

            let Some(state) = self.solver.agenda.pop_best() else {
                break SessionEnd::Proven;
            };

            if !self.expand(state) {
                break SessionEnd::Aborted(TIME_LIMIT_REASON.to_string());
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(end)
    }

    /// Expands `state` and processes its children.
    /// Returns `false` if the time budget ran out part way through.
    fn expand(&mut self, state: State<T>) -> bool {
        if !(state.bound() < self.incumbent.upper_bound()) {
            self.stats.on_pruning_on_pop();
            self.monitor
                .on_prune(&state, PruneReason::StaleBound, &self.stats);
            return true;
        }

        self.stats.on_node_expanded();
        self.stats.on_depth_update(state.depth() as u64);
        self.monitor.on_expand(&state, &self.stats);

        let children = state.successors();
        self.stats.on_successors_generated(children.len());
        self.monitor
            .on_successors_generated(&state, children.len(), &self.stats);

        for child in children {
            if self.time_exhausted() {
                return false;
            }

            // NaN bounds compare false and are pruned as well.
            if !(child.bound() < self.incumbent.upper_bound()) {
                self.stats.on_pruning_on_child();
                self.monitor
                    .on_prune(&child, PruneReason::BoundDominated, &self.stats);
                continue;
            }

            if child.is_complete() {
                self.handle_complete_tour(&child);
            } else {
                self.solver.agenda.insert(child);
                self.stats.on_agenda_size(self.solver.agenda.len());
            }
        }

        true
    }

    /// Installs the tour of `state` if it beats the incumbent and drops
    /// every queued state the new incumbent dominates.
    fn handle_complete_tour(&mut self, state: &State<T>) {
        let candidate = Solution::from_route(self.model, state.tour(&self.order));
        if !self.incumbent.try_install(candidate) {
            self.stats.on_pruning_on_child();
            self.monitor
                .on_prune(state, PruneReason::BoundDominated, &self.stats);
            return;
        }

        self.stats.on_solution_found();
        let upper_bound = self.incumbent.upper_bound();
        debug!(
            "Improved incumbent to {} after {} expanded nodes",
            upper_bound, self.stats.nodes_expanded
        );
        self.monitor
            .on_solution_found(self.incumbent.solution(), &self.stats);

        let monitor = &mut *self.monitor;
        let stats = &self.stats;
        let pruned = self.solver.agenda.prune_dominated(upper_bound, |stale| {
            monitor.on_prune(stale, PruneReason::StaleBound, stats)
        });
        self.stats.on_pruning_on_improvement(pruned);
    }

    /// Finalize the solver result based on the incumbent
    /// and the way the search ended.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize_result(self, end: SessionEnd) -> BnbSolverOutcome<T> {
        let solution = self.incumbent.into_solution();
        debug!(
            "Search ended ({:?}) with objective {} after {:.2?}",
            end,
            solution.objective_value(),
            self.stats.time_total
        );

        match end {
            SessionEnd::Proven => BnbSolverOutcome::proven(solution, self.stats),
            SessionEnd::Aborted(msg) => BnbSolverOutcome::aborted(solution, msg, self.stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{
        composite::CompositeTreeSearchMonitor, interrupt::InterruptMonitor,
        no_op::NoOperationMonitor, solution::SolutionLimitMonitor,
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use salesman_model::{city::City, model::ModelBuilder};
    use salesman_search::{
        construction::{FarthestInsertion, NearestNeighbor},
        result::{SolverResult, TerminationReason},
    };
    use std::sync::atomic::AtomicBool;

    const EPS: f64 = 1e-9;
    const GENEROUS: Duration = Duration::from_secs(60);

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn square() -> Model<f64> {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ];
        ModelBuilder::from_cities(cities).build().unwrap()
    }

    fn random_model(rng: &mut StdRng, n: usize) -> Model<f64> {
        let cities = (0..n)
            .map(|_| City::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        ModelBuilder::from_cities(cities).build().unwrap()
    }

    /// Cheapest tour by enumerating every permutation that starts at city 0.
    fn brute_force(model: &Model<f64>) -> f64 {
        fn recurse(model: &Model<f64>, route: &mut Vec<CityIndex>, used: &mut [bool], best: &mut f64) {
            if route.len() == used.len() {
                *best = best.min(model.route_cost(route));
                return;
            }
            for next in 1..used.len() {
                if !used[next] {
                    used[next] = true;
                    route.push(ci(next));
                    recurse(model, route, used, best);
                    route.pop();
                    used[next] = false;
                }
            }
        }

        let mut used = vec![false; model.num_cities()];
        used[0] = true;
        let mut best = f64::INFINITY;
        recurse(model, &mut vec![ci(0)], &mut used, &mut best);
        best
    }

    fn assert_valid_tour(model: &Model<f64>, solution: &Solution<f64>) {
        assert!(solution.is_complete_tour(model.num_cities()));
        let recomputed = model.route_cost(solution.route());
        assert!((solution.objective_value() - recomputed).abs() < EPS);
    }

    #[test]
    fn test_square_is_solved_to_optimality() {
        let model = square();
        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut FarthestInsertion::new(),
            NoOperationMonitor::new(),
        );

        let solution = outcome.result().unwrap_optimal();
        assert!((solution.objective_value() - 4.0).abs() < EPS);
        assert_valid_tour(&model, solution);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_square_from_crossing_seed_improves() {
        let model = square();
        let mut solver = BnbSolver::new();
        // 0 -> 2 -> 1 -> 3 crosses both diagonals.
        let outcome = solver.solve_with_initial_tour(
            &model,
            GENEROUS,
            vec![ci(0), ci(2), ci(1), ci(3)],
            NoOperationMonitor::new(),
        );

        let stats = outcome.statistics();
        assert!((stats.initial_upper_bound - (2.0 + 2.0 * 2f64.sqrt())).abs() < EPS);
        assert!(stats.solutions_found >= 1);
        let solution = outcome.result().unwrap_optimal();
        assert!((solution.objective_value() - 4.0).abs() < EPS);
        assert_valid_tour(&model, solution);
    }

    #[test]
    fn test_two_cities_return_without_branching() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_symmetric_cost(ci(0), ci(1), 2.5);
        let model = builder.build().unwrap();

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut NearestNeighbor::new(),
            NoOperationMonitor::new(),
        );

        assert_eq!(outcome.result().unwrap_optimal().objective_value(), 5.0);
        assert_eq!(outcome.statistics().nodes_expanded, 0);
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut solver = BnbSolver::new();

        for n in 3..=8 {
            for _ in 0..3 {
                let model = random_model(&mut rng, n);
                let expected = brute_force(&model);
                let outcome = solver.solve(
                    &model,
                    GENEROUS,
                    &mut IndexOrder::new(),
                    NoOperationMonitor::new(),
                );
                let solution = outcome.result().unwrap_optimal();
                assert!(
                    (solution.objective_value() - expected).abs() < 1e-7,
                    "n = {}: got {}, expected {}",
                    n,
                    solution.objective_value(),
                    expected
                );
                assert_valid_tour(&model, solution);
            }
        }
    }

    #[test]
    fn test_asymmetric_costs_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut solver = BnbSolver::new();
        for _ in 0..5 {
            let n = 6;
            let mut builder = ModelBuilder::<f64>::new(n);
            for from in 0..n {
                for to in 0..n {
                    if from != to {
                        builder.set_cost(ci(from), ci(to), rng.gen_range(1.0..20.0));
                    }
                }
            }
            let model = builder.build().unwrap();
            let expected = brute_force(&model);

            let outcome = solver.solve(
                &model,
                GENEROUS,
                &mut NearestNeighbor::new(),
                NoOperationMonitor::new(),
            );
            let solution = outcome.result().unwrap_optimal();
            assert!((solution.objective_value() - expected).abs() < 1e-7);
        }
    }

    #[test]
    fn test_zero_budget_returns_seed() {
        let mut rng = StdRng::seed_from_u64(5);
        let model = random_model(&mut rng, 9);
        let identity = (0..9).map(ci).collect::<Vec<_>>();
        let seed_cost = model.route_cost(&identity);

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            Duration::ZERO,
            &mut IndexOrder::new(),
            NoOperationMonitor::new(),
        );

        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "Time limit reached"),
            other => panic!("expected a timeout, got {:?}", other),
        }
        let solution = outcome.result().unwrap_feasible();
        assert_eq!(solution.objective_value(), seed_cost);
        assert_eq!(solution.route(), identity.as_slice());
        assert_eq!(outcome.statistics().nodes_expanded, 0);
    }

    #[test]
    fn test_unreachable_city_is_routed_around() {
        // 0 -> 2 is forbidden, every other edge costs 1.
        let mut builder = ModelBuilder::<f64>::new(4);
        for from in 0..4 {
            for to in 0..4 {
                if from != to && !(from == 0 && to == 2) {
                    builder.set_cost(ci(from), ci(to), 1.0);
                }
            }
        }
        let model = builder.build().unwrap();

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut FarthestInsertion::new(),
            NoOperationMonitor::new(),
        );
        let solution = outcome.result().unwrap_optimal();
        assert_eq!(solution.objective_value(), 4.0);
        assert_valid_tour(&model, solution);
    }

    #[test]
    fn test_disconnected_model_is_infeasible() {
        // City 3 can be left but never entered.
        let mut builder = ModelBuilder::<f64>::new(4);
        for from in 0..4 {
            for to in 0..3 {
                if from != to {
                    builder.set_cost(ci(from), ci(to), 1.0);
                }
            }
        }
        let model = builder.build().unwrap();

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut FarthestInsertion::new(),
            NoOperationMonitor::new(),
        );
        assert_eq!(outcome.result(), &SolverResult::Infeasible);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
    }

    #[test]
    fn test_invalid_initial_tour_falls_back_to_index_order() {
        let model = square();
        let mut solver = BnbSolver::new();
        let outcome = solver.solve_with_initial_tour(
            &model,
            GENEROUS,
            vec![ci(0), ci(0), ci(1)],
            NoOperationMonitor::new(),
        );
        // Index order around the square is already the perimeter.
        assert_eq!(outcome.statistics().initial_upper_bound, 4.0);
        assert!(outcome.result().is_optimal());
    }

    struct RecordingMonitor<'r> {
        objectives: &'r std::cell::RefCell<Vec<f64>>,
        stale_prunes: &'r std::cell::Cell<u64>,
    }

    impl<'r> TreeSearchMonitor<f64> for RecordingMonitor<'r> {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }
        fn on_enter_search(&mut self, _model: &Model<f64>, stats: &BnbSolverStatistics<f64>) {
            self.objectives.borrow_mut().push(stats.initial_upper_bound);
        }
        fn on_exit_search(&mut self, _stats: &BnbSolverStatistics<f64>) {}
        fn on_expand(&mut self, _state: &State<f64>, _stats: &BnbSolverStatistics<f64>) {}
        fn on_successors_generated(
            &mut self,
            _state: &State<f64>,
            _count: usize,
            _stats: &BnbSolverStatistics<f64>,
        ) {
        }
        fn on_prune(
            &mut self,
            _state: &State<f64>,
            reason: PruneReason,
            _stats: &BnbSolverStatistics<f64>,
        ) {
            if reason == PruneReason::StaleBound {
                self.stale_prunes.set(self.stale_prunes.get() + 1);
            }
        }
        fn on_solution_found(&mut self, solution: &Solution<f64>, _stats: &BnbSolverStatistics<f64>) {
            self.objectives.borrow_mut().push(solution.objective_value());
        }
    }

    #[test]
    fn test_incumbent_is_monotonic_and_statistics_agree() {
        let mut rng = StdRng::seed_from_u64(17);
        let model = random_model(&mut rng, 9);
        let objectives = std::cell::RefCell::new(Vec::new());
        let stale_prunes = std::cell::Cell::new(0);

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut IndexOrder::new(),
            RecordingMonitor {
                objectives: &objectives,
                stale_prunes: &stale_prunes,
            },
        );

        let objectives = objectives.into_inner();
        assert!(objectives.windows(2).all(|w| w[1] < w[0]));
        let stats = outcome.statistics();
        assert_eq!(stats.solutions_found as usize, objectives.len() - 1);
        assert_eq!(
            stats.prunings_on_pop + stats.prunings_on_improvement,
            stale_prunes.get()
        );
        assert_eq!(
            outcome.result().unwrap_optimal().objective_value(),
            *objectives.last().unwrap()
        );
        assert!(stats.root_lower_bound <= *objectives.last().unwrap() + EPS);
        assert!(stats.max_depth as usize <= model.num_cities());
    }

    #[test]
    fn test_interrupt_aborts_with_seed() {
        let mut rng = StdRng::seed_from_u64(8);
        let model = random_model(&mut rng, 10);
        let flag = AtomicBool::new(true);

        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            &mut FarthestInsertion::new(),
            InterruptMonitor::new(&flag),
        );

        // The root bound can only match the seed if the seed is optimal.
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => {
                assert_eq!(reason, "Interrupt signal received");
                assert!(outcome.result().is_feasible());
            }
            TerminationReason::OptimalityProven => assert!(outcome.result().is_optimal()),
            other => panic!("unexpected termination {:?}", other),
        }
        assert_eq!(outcome.statistics().nodes_expanded, 0);
    }

    #[test]
    fn test_solution_limit_stops_after_first_improvement() {
        let model = square();
        let mut monitor = CompositeTreeSearchMonitor::new();
        monitor.add_monitor(SolutionLimitMonitor::new(1));
        monitor.add_monitor(NoOperationMonitor::new());

        let mut solver = BnbSolver::new();
        let outcome = solver.solve_with_initial_tour(
            &model,
            GENEROUS,
            vec![ci(0), ci(2), ci(1), ci(3)],
            monitor,
        );

        let stats = outcome.statistics();
        assert!(stats.solutions_found <= 1);
        assert!(outcome.result().has_solution());
        if let TerminationReason::Aborted(reason) = outcome.termination_reason() {
            assert_eq!(reason, "Solution limit reached");
            assert_eq!(stats.solutions_found, 1);
        }
    }

    #[test]
    fn test_solver_is_reusable_across_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut solver = BnbSolver::new();
        for n in [7, 3, 5] {
            let model = random_model(&mut rng, n);
            let outcome = solver.solve(
                &model,
                GENEROUS,
                &mut FarthestInsertion::new(),
                NoOperationMonitor::new(),
            );
            assert!((outcome.result().unwrap_optimal().objective_value() - brute_force(&model)).abs() < 1e-7);
            assert!(solver.agenda.is_empty());
        }
    }

    #[test]
    fn test_boxed_constructor() {
        let model = square();
        let mut constructor: Box<dyn TourConstructor<f64>> = Box::new(NearestNeighbor::new());
        let mut solver = BnbSolver::new();
        let outcome = solver.solve(
            &model,
            GENEROUS,
            constructor.as_mut(),
            NoOperationMonitor::new(),
        );
        assert!(outcome.result().is_optimal());
    }
}
