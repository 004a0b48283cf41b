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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan‑out monitor that forwards every
//! event to its children. This lets you mix logging, interrupts and
//! early‑stopping without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short‑circuits on the first non‑`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::State,
    stats::BnbSolverStatistics,
};
use salesman_core::num::numeric::SolverNumeric;
use salesman_model::{model::Model, solution::Solution};
use salesman_search::monitor::command::SearchCommand;

/// A tree search monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeTreeSearchMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, model: &Model<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(model, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics<T>) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_expand(&mut self, state: &State<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_expand(state, statistics);
        }
    }

    #[inline(always)]
    fn on_successors_generated(
        &mut self,
        state: &State<T>,
        count: usize,
        statistics: &BnbSolverStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_successors_generated(state, count, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        state: &State<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_prune(state, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, solution: &Solution<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(solution, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use salesman_model::model::ModelBuilder;

    struct CountingMonitor<'c> {
        events: &'c std::cell::Cell<u32>,
        command: SearchCommand,
    }

    impl<'c> TreeSearchMonitor<f64> for CountingMonitor<'c> {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_search(&mut self, _model: &Model<f64>, _statistics: &BnbSolverStatistics<f64>) {
            self.events.set(self.events.get() + 1);
        }
        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics<f64>) {
            self.events.set(self.events.get() + 1);
        }
        fn search_command(&mut self, _statistics: &BnbSolverStatistics<f64>) -> SearchCommand {
            self.events.set(self.events.get() + 100);
            self.command.clone()
        }
        fn on_expand(&mut self, _state: &State<f64>, _statistics: &BnbSolverStatistics<f64>) {}
        fn on_successors_generated(
            &mut self,
            _state: &State<f64>,
            _count: usize,
            _statistics: &BnbSolverStatistics<f64>,
        ) {
        }
        fn on_prune(
            &mut self,
            _state: &State<f64>,
            _reason: PruneReason,
            _statistics: &BnbSolverStatistics<f64>,
        ) {
        }
        fn on_solution_found(
            &mut self,
            _solution: &Solution<f64>,
            _statistics: &BnbSolverStatistics<f64>,
        ) {
        }
    }

    #[test]
    fn test_fans_out_lifecycle_events() {
        let first = std::cell::Cell::new(0);
        let second = std::cell::Cell::new(0);
        let mut composite = CompositeTreeSearchMonitor::with_capacity(3);
        composite.add_monitor(CountingMonitor {
            events: &first,
            command: SearchCommand::Continue,
        });
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor_boxed(Box::new(CountingMonitor {
            events: &second,
            command: SearchCommand::Continue,
        }));
        assert_eq!(composite.len(), 3);

        let model = ModelBuilder::<f64>::new(2).build().unwrap();
        let stats = BnbSolverStatistics::default();
        composite.on_enter_search(&model, &stats);
        composite.on_exit_search(&stats);
        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_first_terminate_wins() {
        let first = std::cell::Cell::new(0);
        let second = std::cell::Cell::new(0);
        let mut composite: CompositeTreeSearchMonitor<'_, f64> = [
            Box::new(CountingMonitor {
                events: &first,
                command: SearchCommand::Terminate("first".to_string()),
            }) as Box<dyn TreeSearchMonitor<f64> + '_>,
            Box::new(CountingMonitor {
                events: &second,
                command: SearchCommand::Terminate("second".to_string()),
            }),
        ]
        .into_iter()
        .collect();

        let stats = BnbSolverStatistics::default();
        assert_eq!(
            composite.search_command(&stats),
            SearchCommand::Terminate("first".to_string())
        );
        // The second monitor is never asked.
        assert_eq!(first.get(), 100);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeTreeSearchMonitor::<f64>::new();
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&BnbSolverStatistics::default()),
            SearchCommand::Continue
        );
        composite.clear();
        assert_eq!(composite.monitors().len(), 0);
    }
}
