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

//! # Interval Converter
//!
//! Maps between an [`Interval<T>`] and its culture-formatted textual form.
//! The text is exactly two delimited fields, each converted through the
//! element type's own [`TextValue`] capability with the same culture.
//!
//! Parsing is deliberately permissive about the result: the bounds are
//! assembled as given and never validated, so an inverted interval in the
//! input survives as an inverted interval value.

use crate::culture::Culture;
use crate::fields;
use crate::value::{TextParseError, TextValue};
use ambit_core::interval::Interval;
use std::marker::PhantomData;

/// The error type for interval parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalParseError {
    /// The input did not split into exactly two fields.
    MalformedInput {
        /// The number of fields the input actually split into.
        fields: usize,
    },
    /// An element failed its own textual conversion. The underlying
    /// error is carried unchanged.
    Element(TextParseError),
}

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput { fields } => {
                write!(f, "Expected exactly 2 delimited fields, found {fields}")
            }
            Self::Element(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IntervalParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedInput { .. } => None,
            Self::Element(e) => Some(e),
        }
    }
}

impl From<TextParseError> for IntervalParseError {
    #[inline]
    fn from(e: TextParseError) -> Self {
        Self::Element(e)
    }
}

/// A two-way converter between `Interval<T>` and delimited text.
///
/// The textual form is the two bounds' [`TextValue`] representations
/// separated by the culture's list separator and a space, e.g.
/// `"-15, 15"` under the invariant culture or `"-15; 15"` under a
/// semicolon convention.
///
/// # Examples
///
/// ```rust
/// # use ambit_core::interval::Interval;
/// # use ambit_text::convert::IntervalConverter;
/// # use ambit_text::culture::Culture;
///
/// let converter = IntervalConverter::<i32>::new();
/// let culture = Culture::invariant();
///
/// let interval = converter.parse("-15, 15", &culture).unwrap().unwrap();
/// assert_eq!(interval, Interval::new(-15, 15));
/// assert_eq!(converter.format(&interval, &culture), "-15, 15");
/// ```
pub struct IntervalConverter<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> IntervalConverter<T> {
    /// Creates a new converter for intervals over `T`.
    #[inline]
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for IntervalConverter<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntervalConverter<T>
where
    T: TextValue,
{
    /// Parses an interval from its textual form under `culture`.
    ///
    /// Input that is empty after trimming denotes an absent interval and
    /// yields `Ok(None)`; it is neither an error nor the empty interval.
    /// Anything else must split into exactly two fields on the culture's
    /// list separator or the parse fails with
    /// [`IntervalParseError::MalformedInput`]. Element conversion
    /// failures are propagated unchanged. The bound order of the result
    /// is not validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_text::convert::IntervalConverter;
    /// # use ambit_text::culture::Culture;
    ///
    /// let converter = IntervalConverter::<i32>::new();
    /// let culture = Culture::invariant();
    ///
    /// assert!(converter.parse("   ", &culture).unwrap().is_none());
    /// assert!(converter.parse("1, 2, 3", &culture).is_err());
    /// ```
    pub fn parse(
        &self,
        text: &str,
        culture: &Culture,
    ) -> Result<Option<Interval<T>>, IntervalParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let parts = fields::split(text, culture.list_separator());
        if parts.len() != 2 {
            return Err(IntervalParseError::MalformedInput {
                fields: parts.len(),
            });
        }

        let minimum = T::parse_text(&parts[0], culture)?;
        let maximum = T::parse_text(&parts[1], culture)?;
        Ok(Some(Interval::new(minimum, maximum)))
    }

    /// Formats an interval under `culture`.
    ///
    /// The two bounds' textual forms are joined with the culture's list
    /// separator followed by a space. This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit_core::interval::Interval;
    /// # use ambit_text::convert::IntervalConverter;
    /// # use ambit_text::culture::Culture;
    ///
    /// let converter = IntervalConverter::<f64>::new();
    /// let semicolon = Culture::new(";", ',');
    ///
    /// let text = converter.format(&Interval::new(3.5, 7.25), &semicolon);
    /// assert_eq!(text, "3,5; 7,25");
    /// ```
    pub fn format(&self, interval: &Interval<T>, culture: &Culture) -> String {
        format!(
            "{}{} {}",
            interval.minimum().format_text(culture),
            culture.list_separator(),
            interval.maximum().format_text(culture)
        )
    }
}
