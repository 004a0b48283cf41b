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

//! Periodic progress reporting for tree search.
//!
//! `LogTreeSearchMonitor` writes a table of search progress through the
//! `log` facade at `info` level: a header when the search starts, a row at
//! most once per `log_interval`, a row for every improving tour, and a
//! summary on exit. The clock is only read when the expanded-node counter
//! matches `clock_check_mask`, keeping the hot path cheap.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::State,
    stats::BnbSolverStatistics,
};
use ::log::info;
use salesman_core::num::numeric::SolverNumeric;
use salesman_model::{model::Model, solution::Solution};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_objective: Option<T>,
    lines_logged: u64,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_objective: None,
            lines_logged: 0,
        }
    }

    /// Returns the number of progress rows written so far.
    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    /// Returns the best objective seen by this monitor.
    #[inline]
    pub fn best_objective(&self) -> Option<T> {
        self.best_objective
    }

    #[inline(always)]
    fn log_header(&self) {
        info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<14} | {:<12} | {:<10}",
            "Elapsed", "Nodes", "Depth", "Best Solution", "Current Bound", "Agenda Peak", "Pruned"
        );
        info!("{}", "-".repeat(99));
    }

    #[inline(always)]
    fn log_line(&mut self, depth: usize, bound: Option<T>, stats: &BnbSolverStatistics<T>) {
        let now = Instant::now();
        let elapsed_field = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());

        let best_field = match self.best_objective {
            Some(objective) if objective.is_finite() => format!("{:.4}", objective),
            _ => "Inf".to_string(),
        };
        let bound_field = match bound {
            Some(bound) => format!("{:.4}", bound),
            None => "-".to_string(),
        };

        info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<14} | {:<12} | {:<10}",
            elapsed_field,
            stats.nodes_expanded,
            depth,
            best_field,
            bound_field,
            stats.max_agenda_size,
            stats.prunings()
        );

        self.last_log_time = now;
        self.lines_logged = self.lines_logged.saturating_add(1);
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, model: &Model<T>, statistics: &BnbSolverStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_objective = Some(statistics.initial_upper_bound);
        self.lines_logged = 0;
        info!(
            "Searching {} cities (root bound: {}, seed tour: {})",
            model.num_cities(),
            statistics.root_lower_bound,
            statistics.initial_upper_bound
        );
        self.log_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        info!("{}", "-".repeat(99));
        info!(
            "Search finished after {} nodes in {:.2?} ({} improving tours)",
            statistics.nodes_expanded, statistics.time_total, statistics.solutions_found
        );
    }

    fn on_expand(&mut self, state: &State<T>, statistics: &BnbSolverStatistics<T>) {
        if (statistics.nodes_expanded & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state.depth(), Some(state.bound()), statistics);
        }
    }

    fn on_successors_generated(
        &mut self,
        _state: &State<T>,
        _count: usize,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_prune(
        &mut self,
        _state: &State<T>,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_solution_found(&mut self, solution: &Solution<T>, statistics: &BnbSolverStatistics<T>) {
        self.best_objective = Some(solution.objective_value());
        self.log_line(solution.num_cities(), None, statistics);
    }
}
