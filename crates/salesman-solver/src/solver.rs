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

//! # Configurable Tour Solver
//!
//! A thin facade over `BnbSolver` that bundles the time budget, the seeding
//! strategy and the optional stop conditions into one reusable object.
//!
//! ## Highlights
//!
//! - Builder pattern:
//!   - `SolverBuilder` configures the time limit (default 60 seconds), the
//!     tour constructor (default farthest insertion), an external interrupt
//!     flag, a solution limit and periodic progress logging.
//! - Monitors:
//!   - Each `solve` assembles a `CompositeTreeSearchMonitor` from the
//!     configured interrupt, solution-limit and logging monitors.
//! - Reuse:
//!   - The inner `BnbSolver` keeps its agenda allocation between runs.
//!
//! ## Usage
//!
//! ```rust
//! use salesman_model::{city::City, model::ModelBuilder};
//! use salesman_solver::solver::SolverBuilder;
//! use std::time::Duration;
//!
//! let model = ModelBuilder::from_cities(vec![
//!     City::new(0.0, 0.0),
//!     City::new(1.0, 0.0),
//!     City::new(1.0, 1.0),
//!     City::new(0.0, 1.0),
//! ])
//! .build()
//! .unwrap();
//!
//! let mut solver = SolverBuilder::<f64>::new()
//!     .with_time_limit(Duration::from_secs(5))
//!     .build();
//!
//! let outcome = solver.solve(&model);
//! assert!(outcome.result().is_optimal());
//! ```

use log::debug;
use salesman_bnb::{
    bnb::BnbSolver,
    monitor::{
        composite::CompositeTreeSearchMonitor, interrupt::InterruptMonitor,
        log::LogTreeSearchMonitor, solution::SolutionLimitMonitor,
    },
    result::BnbSolverOutcome,
};
use salesman_core::num::numeric::SolverNumeric;
use salesman_model::model::Model;
use salesman_search::construction::{FarthestInsertion, TourConstructor};
use std::{sync::atomic::AtomicBool, time::Duration};

/// Time budget used when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Number of events between clock reads of the logging monitor, as a mask.
const LOG_CLOCK_CHECK_MASK: u64 = 4095;

pub struct Solver<'a, T>
where
    T: SolverNumeric,
{
    bnb: BnbSolver<T>,
    constructor: Box<dyn TourConstructor<T> + 'a>,
    interrupt: Option<&'a AtomicBool>,
    solution_limit: Option<u64>,
    log_interval: Option<Duration>,
    time_limit: Duration,
}

impl<'a, T> Solver<'a, T>
where
    T: SolverNumeric + 'a,
{
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    #[inline]
    pub fn has_solution_limit(&self) -> bool {
        self.solution_limit.is_some()
    }

    #[inline]
    pub fn log_interval(&self) -> Option<Duration> {
        self.log_interval
    }

    #[inline]
    pub fn has_interrupt(&self) -> bool {
        self.interrupt.is_some()
    }

    /// Returns the name of the configured tour constructor.
    #[inline]
    pub fn constructor_name(&self) -> &str {
        self.constructor.name()
    }

    /// Replace the time budget for subsequent runs.
    #[inline]
    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.time_limit = time_limit;
    }

    fn build_monitor(&self) -> CompositeTreeSearchMonitor<'a, T> {
        let mut monitor = CompositeTreeSearchMonitor::with_capacity(3);
        if let Some(flag) = self.interrupt {
            monitor.add_monitor(InterruptMonitor::new(flag));
        }
        if let Some(limit) = self.solution_limit {
            monitor.add_monitor(SolutionLimitMonitor::new(limit));
        }
        if let Some(interval) = self.log_interval {
            monitor.add_monitor(LogTreeSearchMonitor::new(interval, LOG_CLOCK_CHECK_MASK));
        }
        monitor
    }

    /// Run the search on `model` with the configured budget and seed.
    pub fn solve(&mut self, model: &Model<T>) -> BnbSolverOutcome<T> {
        let monitor = self.build_monitor();
        debug!(
            "Solving {} cities with {} monitor(s) and a budget of {:?}",
            model.num_cities(),
            monitor.len(),
            self.time_limit
        );
        self.bnb
            .solve(model, self.time_limit, self.constructor.as_mut(), monitor)
    }
}

impl<'a, T> std::fmt::Debug for Solver<'a, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("constructor", &self.constructor.name())
            .field("time_limit", &self.time_limit)
            .field("solution_limit", &self.solution_limit)
            .field("log_interval", &self.log_interval)
            .field("interrupt", &self.interrupt.is_some())
            .finish()
    }
}

pub struct SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    constructor: Option<Box<dyn TourConstructor<T> + 'a>>,
    interrupt: Option<&'a AtomicBool>,
    solution_limit: Option<u64>,
    log_interval: Option<Duration>,
    time_limit: Duration,
}

impl<'a, T> Default for SolverBuilder<'a, T>
where
    T: SolverNumeric + 'a,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: SolverNumeric + 'a,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            constructor: None,
            interrupt: None,
            solution_limit: None,
            log_interval: None,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Seed the incumbent with tours built by `constructor`.
    #[inline]
    pub fn with_constructor(mut self, constructor: Box<dyn TourConstructor<T> + 'a>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Stop the search once `flag` is set.
    #[inline]
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Log progress at most once per `interval`.
    #[inline]
    pub fn with_logging(mut self, interval: Duration) -> Self {
        self.log_interval = Some(interval);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a, T> {
        let constructor = self
            .constructor
            .unwrap_or_else(|| Box::new(FarthestInsertion::<T>::new()));
        Solver {
            bnb: BnbSolver::new(),
            constructor,
            interrupt: self.interrupt,
            solution_limit: self.solution_limit,
            log_interval: self.log_interval,
            time_limit: self.time_limit,
        }
    }
}
