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

use crate::ord::{Comparer, NaturalOrder};
use std::cmp::Ordering;

/// The error type for interval union and intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// An operand failed the validity check (`minimum` exceeds `maximum`).
    InvalidState,
    /// Union was attempted on two intervals that are neither nested nor
    /// share a bound value, so no single interval covers both.
    NonContiguous,
    /// Intersection was attempted on two intervals with no shared point.
    NonOverlapping,
}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState => {
                write!(f, "Operation requires valid intervals (minimum must not exceed maximum)")
            }
            Self::NonContiguous => {
                write!(f, "Union of disjoint intervals that share no bound value")
            }
            Self::NonOverlapping => {
                write!(f, "Intersection of intervals that share no point")
            }
        }
    }
}

impl std::error::Error for IntervalError {}

/// A closed interval `[minimum, maximum]` over an ordered element type.
///
/// `Interval` is an immutable value type: every mutation-like operation
/// returns a new instance. Construction never validates the bound order;
/// an interval may hold `minimum > maximum` and only reports that through
/// [`is_valid_by`](Interval::is_valid_by). Operations that require
/// validity (union, intersection) check it themselves and fail with
/// [`IntervalError::InvalidState`] instead of panicking.
///
/// Ordering is injected per call through a [`Comparer<T>`]. For types with
/// an intrinsic order, the comparer-less convenience methods use
/// [`NaturalOrder`].
///
/// # Examples
///
/// ```rust
/// # use ambit_core::interval::Interval;
///
/// let hours = Interval::new(9, 17);
/// assert!(hours.is_valid());
/// assert!(hours.contains_value(&12));
/// assert!(!hours.contains_value(&20));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    minimum: T,
    maximum: T,
}

impl<T> Interval<T> {
    /// Creates a new interval from its bounds.
    ///
    /// This never fails and never checks that `minimum` actually precedes
    /// `maximum`; use [`is_valid_by`](Interval::is_valid_by) to test that
    /// on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let iv = Interval::new(-15, 15);
    /// assert_eq!(*iv.minimum(), -15);
    /// assert_eq!(*iv.maximum(), 15);
    ///
    /// // Inverted bounds are representable, just not valid.
    /// let inverted = Interval::new(15, -15);
    /// assert!(!inverted.is_valid());
    /// ```
    #[inline]
    pub const fn new(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    /// Creates a degenerate interval holding `value` as both bounds.
    ///
    /// A degenerate interval is always valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let iv = Interval::point(3);
    /// assert_eq!(*iv.minimum(), 3);
    /// assert_eq!(*iv.maximum(), 3);
    /// assert!(iv.is_valid());
    /// ```
    #[inline]
    pub fn point(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            minimum: value.clone(),
            maximum: value,
        }
    }

    /// Creates the empty interval, holding the element type's default
    /// value as both bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let iv: Interval<i32> = Interval::empty();
    /// assert_eq!(*iv.minimum(), 0);
    /// assert_eq!(*iv.maximum(), 0);
    /// ```
    #[inline]
    pub fn empty() -> Self
    where
        T: Default,
    {
        Self {
            minimum: T::default(),
            maximum: T::default(),
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn minimum(&self) -> &T {
        &self.minimum
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn maximum(&self) -> &T {
        &self.maximum
    }

    /// Consumes the interval and returns its bounds as a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let (minimum, maximum) = Interval::new(1, 9).into_bounds();
    /// assert_eq!(minimum, 1);
    /// assert_eq!(maximum, 9);
    /// ```
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.minimum, self.maximum)
    }

    /// Returns a new interval with the lower bound replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10).with_minimum(-5);
    /// assert_eq!(iv, Interval::new(-5, 10));
    /// ```
    #[inline]
    pub fn with_minimum(self, minimum: T) -> Self {
        Self { minimum, ..self }
    }

    /// Returns a new interval with the upper bound replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10).with_maximum(20);
    /// assert_eq!(iv, Interval::new(0, 20));
    /// ```
    #[inline]
    pub fn with_maximum(self, maximum: T) -> Self {
        Self { maximum, ..self }
    }

    /// Returns `true` if the bounds are ordered under `comparer`, i.e.
    /// `minimum <= maximum`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    /// # use ambit_core::ord::FloatOrder;
    ///
    /// assert!(Interval::new(-1.5, 1.5).is_valid_by(&FloatOrder));
    /// assert!(!Interval::new(1.5, -1.5).is_valid_by(&FloatOrder));
    /// ```
    #[inline]
    pub fn is_valid_by<C>(&self, comparer: &C) -> bool
    where
        C: Comparer<T>,
    {
        comparer.compare(&self.minimum, &self.maximum) != Ordering::Greater
    }

    /// Returns `true` if `value` lies inside the interval, bounds
    /// included.
    ///
    /// This does not require `self` to be valid. An inverted interval
    /// simply contains nothing; the query never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    /// # use ambit_core::ord::FloatOrder;
    ///
    /// let iv = Interval::new(-1.0, 1.0);
    /// assert!(iv.contains_value_by(&-1.0, &FloatOrder));
    /// assert!(iv.contains_value_by(&0.25, &FloatOrder));
    /// assert!(!iv.contains_value_by(&1.1, &FloatOrder));
    /// ```
    #[inline]
    pub fn contains_value_by<C>(&self, value: &T, comparer: &C) -> bool
    where
        C: Comparer<T>,
    {
        comparer.compare(&self.minimum, value) != Ordering::Greater
            && comparer.compare(value, &self.maximum) != Ordering::Greater
    }

    /// Returns `true` if both of this interval's bounds lie inside
    /// `outer`.
    ///
    /// Both intervals must be valid for this to hold; an invalid interval
    /// is inside nothing and contains nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    /// # use ambit_core::ord::NaturalOrder;
    ///
    /// let inner = Interval::new(2, 8);
    /// let outer = Interval::new(0, 10);
    /// assert!(inner.is_inside_range_by(&outer, &NaturalOrder));
    /// assert!(!outer.is_inside_range_by(&inner, &NaturalOrder));
    /// ```
    #[inline]
    pub fn is_inside_range_by<C>(&self, outer: &Self, comparer: &C) -> bool
    where
        C: Comparer<T>,
    {
        self.is_valid_by(comparer)
            && outer.is_valid_by(comparer)
            && outer.contains_value_by(&self.minimum, comparer)
            && outer.contains_value_by(&self.maximum, comparer)
    }

    /// Returns `true` if both of `inner`'s bounds lie inside this
    /// interval.
    ///
    /// The mirror of [`is_inside_range_by`](Interval::is_inside_range_by).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    /// # use ambit_core::ord::NaturalOrder;
    ///
    /// let outer = Interval::new(0, 10);
    /// assert!(outer.contains_range_by(&Interval::new(2, 8), &NaturalOrder));
    /// assert!(!outer.contains_range_by(&Interval::new(5, 15), &NaturalOrder));
    /// ```
    #[inline]
    pub fn contains_range_by<C>(&self, inner: &Self, comparer: &C) -> bool
    where
        C: Comparer<T>,
    {
        self.is_valid_by(comparer)
            && inner.is_valid_by(comparer)
            && self.contains_value_by(&inner.minimum, comparer)
            && self.contains_value_by(&inner.maximum, comparer)
    }

    /// Computes the union of two intervals.
    ///
    /// Fails with [`IntervalError::InvalidState`] if either operand is
    /// invalid. If one operand lies inside the other, the containing
    /// operand itself is returned, not a reassembled copy of its bounds.
    /// Otherwise the operands must share at least one bound value exactly
    /// (minimum/minimum, minimum/maximum, maximum/maximum, or
    /// maximum/minimum); the result then spans from the smaller minimum to
    /// the larger maximum. Two disjoint intervals that share no bound
    /// cannot be covered by a single interval and fail with
    /// [`IntervalError::NonContiguous`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::{Interval, IntervalError};
    /// # use ambit_core::ord::NaturalOrder;
    ///
    /// let a = Interval::new(-15, 15);
    /// let b = Interval::new(-16, 15);
    /// assert_eq!(a.union_by(&b, &NaturalOrder), Ok(b));
    ///
    /// let gap = Interval::new(20, 30);
    /// assert_eq!(a.union_by(&gap, &NaturalOrder), Err(IntervalError::NonContiguous));
    /// ```
    pub fn union_by<C>(&self, other: &Self, comparer: &C) -> Result<Self, IntervalError>
    where
        T: Clone,
        C: Comparer<T>,
    {
        if !self.is_valid_by(comparer) || !other.is_valid_by(comparer) {
            return Err(IntervalError::InvalidState);
        }

        if self.contains_range_by(other, comparer) {
            return Ok(self.clone());
        }
        if other.contains_range_by(self, comparer) {
            return Ok(other.clone());
        }

        let touching = comparer.compare(&self.minimum, &other.minimum) == Ordering::Equal
            || comparer.compare(&self.minimum, &other.maximum) == Ordering::Equal
            || comparer.compare(&self.maximum, &other.maximum) == Ordering::Equal
            || comparer.compare(&self.maximum, &other.minimum) == Ordering::Equal;
        if !touching {
            return Err(IntervalError::NonContiguous);
        }

        let minimum = if comparer.compare(&self.minimum, &other.minimum) == Ordering::Greater {
            other.minimum.clone()
        } else {
            self.minimum.clone()
        };
        let maximum = if comparer.compare(&self.maximum, &other.maximum) == Ordering::Less {
            other.maximum.clone()
        } else {
            self.maximum.clone()
        };
        Ok(Self::new(minimum, maximum))
    }

    /// Computes the intersection of two intervals.
    ///
    /// Fails with [`IntervalError::InvalidState`] if either operand is
    /// invalid and with [`IntervalError::NonOverlapping`] if no bound of
    /// either operand lies inside the other. The result takes `other`'s
    /// bound wherever `self` contains it and `self`'s own bound otherwise,
    /// so in nested cases the bound values of the inner operand survive
    /// verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::{Interval, IntervalError};
    /// # use ambit_core::ord::NaturalOrder;
    ///
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(5, 15);
    /// assert_eq!(a.intersect_by(&b, &NaturalOrder), Ok(Interval::new(5, 10)));
    ///
    /// let gap = Interval::new(20, 30);
    /// assert_eq!(a.intersect_by(&gap, &NaturalOrder), Err(IntervalError::NonOverlapping));
    /// ```
    pub fn intersect_by<C>(&self, other: &Self, comparer: &C) -> Result<Self, IntervalError>
    where
        T: Clone,
        C: Comparer<T>,
    {
        if !self.is_valid_by(comparer) || !other.is_valid_by(comparer) {
            return Err(IntervalError::InvalidState);
        }

        let minimum_inside = self.contains_value_by(&other.minimum, comparer);
        let maximum_inside = self.contains_value_by(&other.maximum, comparer);
        let overlapping = minimum_inside
            || maximum_inside
            || other.contains_value_by(&self.minimum, comparer)
            || other.contains_value_by(&self.maximum, comparer);
        if !overlapping {
            return Err(IntervalError::NonOverlapping);
        }

        let minimum = if minimum_inside {
            other.minimum.clone()
        } else {
            self.minimum.clone()
        };
        let maximum = if maximum_inside {
            other.maximum.clone()
        } else {
            self.maximum.clone()
        };
        Ok(Self::new(minimum, maximum))
    }
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// [`is_valid_by`](Interval::is_valid_by) under the natural order.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid_by(&NaturalOrder)
    }

    /// [`contains_value_by`](Interval::contains_value_by) under the
    /// natural order.
    #[inline]
    pub fn contains_value(&self, value: &T) -> bool {
        self.contains_value_by(value, &NaturalOrder)
    }

    /// [`is_inside_range_by`](Interval::is_inside_range_by) under the
    /// natural order.
    #[inline]
    pub fn is_inside_range(&self, outer: &Self) -> bool {
        self.is_inside_range_by(outer, &NaturalOrder)
    }

    /// [`contains_range_by`](Interval::contains_range_by) under the
    /// natural order.
    #[inline]
    pub fn contains_range(&self, inner: &Self) -> bool {
        self.contains_range_by(inner, &NaturalOrder)
    }

    /// [`union_by`](Interval::union_by) under the natural order.
    #[inline]
    pub fn union(&self, other: &Self) -> Result<Self, IntervalError>
    where
        T: Clone,
    {
        self.union_by(other, &NaturalOrder)
    }

    /// [`intersect_by`](Interval::intersect_by) under the natural order.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Result<Self, IntervalError>
    where
        T: Clone,
    {
        self.intersect_by(other, &NaturalOrder)
    }
}

impl<T> Default for Interval<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)
    }
}

impl<T> From<(T, T)> for Interval<T> {
    #[inline]
    fn from(bounds: (T, T)) -> Self {
        Self::new(bounds.0, bounds.1)
    }
}
