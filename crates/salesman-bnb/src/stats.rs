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

use salesman_core::num::numeric::SolverNumeric;
use std::time::Duration;

/// Statistics collected during one branch-and-bound solve.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbSolverStatistics<T> {
    /// States popped from the agenda and expanded.
    pub nodes_expanded: u64,
    /// Child states produced by expansions.
    pub successors_generated: u64,
    /// Expanded states that produced no child.
    pub dead_ends: u64,
    /// States discarded on pop because the incumbent improved after they were queued.
    pub prunings_on_pop: u64,
    /// Children discarded because their bound did not beat the incumbent.
    pub prunings_on_child: u64,
    /// Queued states dropped because an improved incumbent dominated them.
    pub prunings_on_improvement: u64,
    /// Complete tours that improved the incumbent.
    pub solutions_found: u64,
    /// The longest partial tour expanded.
    pub max_depth: u64,
    /// The largest number of states pending at once.
    pub max_agenda_size: u64,
    /// The bound of the root state. Used to report the optimality gap.
    pub root_lower_bound: T,
    /// The cost of the seeded tour.
    pub initial_upper_bound: T,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl<T> Default for BnbSolverStatistics<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self {
            nodes_expanded: 0,
            successors_generated: 0,
            dead_ends: 0,
            prunings_on_pop: 0,
            prunings_on_child: 0,
            prunings_on_improvement: 0,
            solutions_found: 0,
            max_depth: 0,
            max_agenda_size: 0,
            root_lower_bound: T::zero(),
            initial_upper_bound: T::infinity(),
            time_total: Duration::ZERO,
        }
    }
}

impl<T> BnbSolverStatistics<T> {
    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_successors_generated(&mut self, count: usize) {
        self.successors_generated = self.successors_generated.saturating_add(count as u64);
        if count == 0 {
            self.dead_ends = self.dead_ends.saturating_add(1);
        }
    }

    #[inline]
    pub fn on_pruning_on_pop(&mut self) {
        self.prunings_on_pop = self.prunings_on_pop.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_on_child(&mut self) {
        self.prunings_on_child = self.prunings_on_child.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_on_improvement(&mut self, count: usize) {
        self.prunings_on_improvement = self
            .prunings_on_improvement
            .saturating_add(count as u64);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_agenda_size(&mut self, size: usize) {
        self.max_agenda_size = self.max_agenda_size.max(size as u64);
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: T) {
        self.root_lower_bound = bound;
    }

    #[inline]
    pub fn set_initial_upper_bound(&mut self, bound: T) {
        self.initial_upper_bound = bound;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the total number of pruned states.
    #[inline]
    pub fn prunings(&self) -> u64 {
        self.prunings_on_pop
            .saturating_add(self.prunings_on_child)
            .saturating_add(self.prunings_on_improvement)
    }
}

impl<T> std::fmt::Display for BnbSolverStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Salesman-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Successors generated: {}", self.successors_generated)?;
        writeln!(f, "  Dead ends:            {}", self.dead_ends)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Max agenda size:      {}", self.max_agenda_size)?;
        writeln!(f, "  Prunings (on pop):    {}", self.prunings_on_pop)?;
        writeln!(f, "  Prunings (on child):  {}", self.prunings_on_child)?;
        writeln!(f, "  Prunings (improved):  {}", self.prunings_on_improvement)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Root Lower Bound:     {}", self.root_lower_bound)?;
        writeln!(f, "  Initial Upper Bound:  {}", self.initial_upper_bound)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BnbSolverStatistics;
    use std::time::Duration;

    #[test]
    fn test_default() {
        let stats = BnbSolverStatistics::<f64>::default();
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.root_lower_bound, 0.0);
        assert_eq!(stats.initial_upper_bound, f64::INFINITY);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters() {
        let mut stats = BnbSolverStatistics::<f64>::default();
        stats.on_node_expanded();
        stats.on_successors_generated(3);
        stats.on_successors_generated(0);
        stats.on_pruning_on_pop();
        stats.on_pruning_on_child();
        stats.on_pruning_on_child();
        stats.on_pruning_on_improvement(4);
        stats.on_depth_update(4);
        stats.on_depth_update(2);
        stats.on_agenda_size(7);
        stats.on_agenda_size(5);

        assert_eq!(stats.nodes_expanded, 1);
        assert_eq!(stats.successors_generated, 3);
        assert_eq!(stats.dead_ends, 1);
        assert_eq!(stats.prunings(), 7);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.max_agenda_size, 7);
    }

    #[test]
    fn test_saturating_counters() {
        let mut stats = BnbSolverStatistics::<f64> {
            nodes_expanded: u64::MAX,
            ..Default::default()
        };
        stats.on_node_expanded();
        assert_eq!(stats.nodes_expanded, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let mut stats = BnbSolverStatistics::<f64>::default();
        stats.set_root_lower_bound(3.5);
        let rendered = stats.to_string();
        assert!(rendered.starts_with("Salesman-BnB Solver Statistics:"));
        assert!(rendered.contains("Root Lower Bound:     3.5"));
        assert!(rendered.contains("Initial Upper Bound:  inf"));
    }
}
