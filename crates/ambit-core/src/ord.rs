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

//! # Ordering Capability
//!
//! An injectable total order. Interval operations take a `Comparer<T>`
//! instead of relying solely on `T: Ord`, so callers can order elements by
//! domain-specific rules, give floating-point types a total order, or pass
//! a plain closure.

use num_traits::Float;
use std::cmp::Ordering;

/// A total order over `T` supplied by the caller.
///
/// Implementations must behave like a total order: `compare` must be
/// antisymmetric and transitive, and `compare(a, a)` must be
/// `Ordering::Equal` for every `a`.
///
/// # Examples
///
/// ```rust
/// # use ambit_core::ord::{Comparer, NaturalOrder};
/// # use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
/// ```
pub trait Comparer<T> {
    /// Compares two elements, returning their relative order.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The intrinsic ordering of `T`.
///
/// This is the comparer used by the comparer-less convenience methods on
/// `Interval<T>` when `T: Ord`.
///
/// # Examples
///
/// ```rust
/// # use ambit_core::ord::{Comparer, NaturalOrder};
/// # use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&-3_i64, &7), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparer<T> for NaturalOrder
where
    T: Ord,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// A total order for floating-point types.
///
/// Floats only implement `PartialOrd` because of NaN. `FloatOrder` closes
/// the gap: NaN orders before every number and equal to itself, and all
/// other values compare by their numeric order, infinities included. This
/// never panics for any input.
///
/// # Examples
///
/// ```rust
/// # use ambit_core::ord::{Comparer, FloatOrder};
/// # use std::cmp::Ordering;
///
/// assert_eq!(FloatOrder.compare(&1.5, &2.0), Ordering::Less);
/// assert_eq!(FloatOrder.compare(&f64::NEG_INFINITY, &0.0), Ordering::Less);
/// assert_eq!(FloatOrder.compare(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
/// assert_eq!(FloatOrder.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl<T> Comparer<T> for FloatOrder
where
    T: Float,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        match lhs.partial_cmp(rhs) {
            Some(ordering) => ordering,
            // partial_cmp only fails when at least one side is NaN.
            None => match (lhs.is_nan(), rhs.is_nan()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            },
        }
    }
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_float_order_numbers() {
        assert_eq!(FloatOrder.compare(&1.0, &2.0), Ordering::Less);
        assert_eq!(FloatOrder.compare(&2.0, &2.0), Ordering::Equal);
        assert_eq!(FloatOrder.compare(&f64::INFINITY, &f64::MAX), Ordering::Greater);
        assert_eq!(FloatOrder.compare(&f64::NEG_INFINITY, &f64::MIN), Ordering::Less);
    }

    #[test]
    fn test_float_order_nan() {
        // NaN sorts before everything, including negative infinity.
        assert_eq!(FloatOrder.compare(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(FloatOrder.compare(&0.0, &f64::NAN), Ordering::Greater);
        assert_eq!(FloatOrder.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparer() {
        let reverse = |lhs: &i32, rhs: &i32| rhs.cmp(lhs);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }
}
