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

/// A city in the plane. Cities are immutable once created and are referenced
/// by `CityIndex` everywhere else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City<T> {
    x: T,
    y: T,
}

impl<T> City<T>
where
    T: SolverNumeric,
{
    /// Creates a new city at `(x, y)`.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &City<T>) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl<T> std::fmt::Display for City<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let c = City::new(0.25_f64, 0.75);
        assert_eq!(c.x(), 0.25);
        assert_eq!(c.y(), 0.75);
    }

    #[test]
    fn test_distance_is_symmetric_and_euclidean() {
        let a = City::new(0.0_f64, 0.0);
        let b = City::new(3.0_f64, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_display() {
        let c = City::new(1.0_f64, 0.5);
        assert_eq!(format!("{}", c), "[1,0.5]");
    }
}
