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

//! # Salesman Model
//!
//! **The domain model for the salesman branch-and-bound solver.**
//!
//! This crate is the data interchange layer between the caller (who owns city
//! generation, geometry, and presentation) and the search crates.
//!
//! ## Architecture
//!
//! * **`index`**: the strongly typed `CityIndex`.
//! * **`city`**: immutable 2-D city coordinates with Euclidean distance.
//! * **`cost`**: the `CostModel` interface plus Euclidean, matrix, and closure backed implementations.
//! * **`model`**: the validated, immutable `Model` and its `ModelBuilder`.
//! * **`solution`**: a complete tour together with its cost.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: city ids are `CityIndex`, never bare `usize`.
//! 2.  **Flat Layout**: the cost matrix is a single row-major vector.
//! 3.  **Fail-Fast**: `ModelBuilder::build` rejects instances the search
//!     cannot reason about (fewer than two cities, negative or NaN costs).

pub mod city;
pub mod cost;
pub mod index;
pub mod model;
pub mod solution;
