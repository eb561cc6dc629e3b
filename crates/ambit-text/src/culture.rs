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

/// The formatting conventions a piece of text was written in.
///
/// A `Culture` is a plain value carrying the two conventions the
/// conversions in this crate depend on: the token separating list fields
/// and the character separating the integer and fractional parts of a
/// number. There is no locale database and no ambient process-wide
/// culture; callers construct the conventions they need and thread them
/// through every call. The [`Default`] implementation is the invariant
/// culture.
///
/// # Examples
///
/// ```rust
/// # use ambit_text::culture::Culture;
///
/// let invariant = Culture::invariant();
/// assert_eq!(invariant.list_separator(), ",");
/// assert_eq!(invariant.decimal_separator(), '.');
///
/// // Conventions used by e.g. Swedish or German text.
/// let semicolon = Culture::new(";", ',');
/// assert_eq!(semicolon.list_separator(), ";");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    list_separator: String,
    decimal_separator: char,
}

impl Culture {
    /// The invariant culture: fields separated by `","`, decimals by
    /// `'.'`.
    #[inline]
    pub fn invariant() -> Self {
        Self {
            list_separator: String::from(","),
            decimal_separator: '.',
        }
    }

    /// Creates a culture with the given conventions.
    ///
    /// The list separator may span several characters. An empty list
    /// separator is accepted; the field codec then treats the whole input
    /// as a single field.
    #[inline]
    pub fn new(list_separator: impl Into<String>, decimal_separator: char) -> Self {
        Self {
            list_separator: list_separator.into(),
            decimal_separator,
        }
    }

    /// Returns the token separating fields in a list.
    #[inline]
    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }

    /// Returns the character separating the integer and fractional parts
    /// of a number.
    #[inline]
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for Culture {
    #[inline]
    fn default() -> Self {
        Self::invariant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant() {
        let culture = Culture::invariant();
        assert_eq!(culture.list_separator(), ",");
        assert_eq!(culture.decimal_separator(), '.');
    }

    #[test]
    fn test_default_is_invariant() {
        assert_eq!(Culture::default(), Culture::invariant());
    }

    #[test]
    fn test_custom_conventions() {
        let culture = Culture::new("; ", ',');
        assert_eq!(culture.list_separator(), "; ");
        assert_eq!(culture.decimal_separator(), ',');
    }
}
