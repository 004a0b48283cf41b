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
use salesman_model::solution::Solution;

#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<T> {
    /// We have proven that no tour with a finite cost exists.
    Infeasible,
    /// We have found a tour and proven that no cheaper tour exists.
    Optimal(Solution<T>),
    /// We have found a tour, but not proven its optimality.
    Feasible(Solution<T>),
    /// The solver terminated without a finite-cost tour and
    /// without proving infeasibility.
    Unknown,
}

impl<T> SolverResult<T>
where
    T: SolverNumeric,
{
    /// Returns the solution, if any.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    /// Consumes the result and returns the solution, if any.
    #[inline]
    pub fn into_solution(self) -> Option<Solution<T>> {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.solution().is_some()
    }

    /// Returns the optimal solution.
    ///
    /// # Panics
    ///
    /// Panics if the result is not `Optimal`.
    #[inline]
    pub fn unwrap_optimal(&self) -> &Solution<T> {
        match self {
            SolverResult::Optimal(solution) => solution,
            other => panic!(
                "called `SolverResult::unwrap_optimal()` on a `{}` value",
                other.kind()
            ),
        }
    }

    /// Returns the feasible (not proven optimal) solution.
    ///
    /// # Panics
    ///
    /// Panics if the result is not `Feasible`.
    #[inline]
    pub fn unwrap_feasible(&self) -> &Solution<T> {
        match self {
            SolverResult::Feasible(solution) => solution,
            other => panic!(
                "called `SolverResult::unwrap_feasible()` on a `{}` value",
                other.kind()
            ),
        }
    }

    #[inline]
    fn kind(&self) -> &'static str {
        match self {
            SolverResult::Infeasible => "Infeasible",
            SolverResult::Optimal(_) => "Optimal",
            SolverResult::Feasible(_) => "Feasible",
            SolverResult::Unknown => "Unknown",
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(objective={})", solution.objective_value())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(objective={})", solution.objective_value())
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier was exhausted, or its best bound met the incumbent.
    OptimalityProven,
    /// The frontier was exhausted without any finite-cost tour.
    InfeasibilityProven,
    /// The solver aborted due to a search limit (time budget, interrupt, etc.).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}
