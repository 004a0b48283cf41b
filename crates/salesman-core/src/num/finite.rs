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

//! Helpers for cost values where `+inf` means "forbidden".
//!
//! The reduced cost matrix and the tour construction heuristics both scan
//! rows and columns that may be partially or fully forbidden. These helpers
//! keep that logic in one place so no caller ever subtracts infinities
//! (which would produce NaN).

use crate::num::numeric::SolverNumeric;

/// Returns `true` if `value` marks a forbidden edge.
#[inline(always)]
pub fn is_forbidden<T>(value: T) -> bool
where
    T: SolverNumeric,
{
    value == T::infinity()
}

/// Returns the smallest finite value produced by `iter`,
/// or `None` if every value is forbidden (or the iterator is empty).
///
/// # Examples
///
/// ```rust
/// # use salesman_core::num::finite::min_finite;
/// let row = [f64::INFINITY, 4.0, 2.5, f64::INFINITY];
/// assert_eq!(min_finite(row.iter().copied()), Some(2.5));
/// assert_eq!(min_finite([f64::INFINITY; 3].into_iter()), None);
/// ```
#[inline]
pub fn min_finite<T, I>(iter: I) -> Option<T>
where
    T: SolverNumeric,
    I: IntoIterator<Item = T>,
{
    iter.into_iter()
        .filter(|value| !is_forbidden(*value))
        .fold(None, |acc, value| match acc {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        })
}

/// Adds `rhs` to `lhs`, short-circuiting to `+inf` if either side is forbidden.
#[inline(always)]
pub fn add_or_forbidden<T>(lhs: T, rhs: T) -> T
where
    T: SolverNumeric,
{
    if is_forbidden(lhs) || is_forbidden(rhs) {
        T::infinity()
    } else {
        lhs + rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_forbidden() {
        assert!(is_forbidden(f64::INFINITY));
        assert!(!is_forbidden(0.0_f64));
        assert!(!is_forbidden(f64::MAX));
    }

    #[test]
    fn test_min_finite_skips_infinity() {
        let values = [f64::INFINITY, 3.0, 1.0, 2.0];
        assert_eq!(min_finite(values), Some(1.0));
    }

    #[test]
    fn test_min_finite_all_forbidden_or_empty() {
        assert_eq!(min_finite([f64::INFINITY, f64::INFINITY]), None);
        assert_eq!(min_finite(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_min_finite_keeps_zero() {
        assert_eq!(min_finite([5.0_f32, 0.0, 7.0]), Some(0.0));
    }

    #[test]
    fn test_add_or_forbidden() {
        assert_eq!(add_or_forbidden(1.0, 2.0), 3.0);
        assert!(is_forbidden(add_or_forbidden(f64::INFINITY, 2.0)));
        assert!(is_forbidden(add_or_forbidden(2.0, f64::INFINITY)));
    }
}
