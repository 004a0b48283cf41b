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

//! Salesman‑BnB: branch‑and‑bound for the travelling salesman problem
//!
//! Exact, time-bounded search over partial tours. Each state owns a reduced
//! cost matrix whose reductions give an admissible lower bound; the agenda
//! always expands the cheapest state of the deepest bucket so complete tours
//! (and with them incumbent improvements) appear early.
//!
//! Core flow
//! - Provide a `salesman_model::Model<T>`.
//! - Choose a `salesman_search::construction::TourConstructor` for the seed tour.
//! - Optionally add monitors for logging, interrupts or solution limits.
//! - Run `bnb::BnbSolver` with a time budget.
//!
//! Module map
//! - `agenda`: depth-bucketed, bound-ordered frontier.
//! - `bnb`: the solver engine and session orchestration.
//! - `matrix`: reduced cost matrices and their reduction.
//! - `monitor`: tree‑search monitors (log, composite, interrupt, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `state`: partial tours and successor generation.
//! - `stats`: lightweight counters/timing.

pub mod agenda;
pub mod bnb;
pub mod matrix;
pub mod monitor;
pub mod result;
pub mod state;
pub mod stats;
