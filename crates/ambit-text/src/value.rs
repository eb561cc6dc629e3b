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

//! # Element Text Conversion
//!
//! The capability that gives an element type a culture-aware textual
//! form. Conversions are supplied explicitly per type rather than looked
//! up through any runtime registry; a converter that is generic over its
//! element requires `T: TextValue` and nothing else.

use crate::culture::Culture;
use crate::fields;

/// Details about a failed element conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParseError {
    /// The string token that failed to parse.
    token: String,
    /// The name of the type the token was parsed into.
    type_name: &'static str,
}

impl TextParseError {
    /// Creates a new error for `token` failing to parse as `type_name`.
    #[inline]
    pub fn new(token: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            token: token.into(),
            type_name,
        }
    }

    /// Returns the token that failed to parse.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the name of the target type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Display for TextParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for TextParseError {}

/// A type with a culture-aware textual form.
///
/// `parse_text` and `format_text` are inverses for every value whose
/// textual form survives the culture's conventions; the interval
/// converter and the string-array sub-format are both built on this
/// capability.
///
/// # Examples
///
/// ```rust
/// # use ambit_text::culture::Culture;
/// # use ambit_text::value::TextValue;
///
/// let culture = Culture::new(";", ',');
/// let value = f64::parse_text("3,5", &culture).unwrap();
/// assert_eq!(value, 3.5);
/// assert_eq!(value.format_text(&culture), "3,5");
/// ```
pub trait TextValue: Sized {
    /// Parses a value from its textual form under `culture`.
    fn parse_text(text: &str, culture: &Culture) -> Result<Self, TextParseError>;

    /// Formats the value under `culture`.
    fn format_text(&self, culture: &Culture) -> String;
}

macro_rules! impl_text_value_from_str {
    ($($t:ty),* $(,)?) => {$(
        impl TextValue for $t {
            fn parse_text(text: &str, _culture: &Culture) -> Result<Self, TextParseError> {
                let token = text.trim();
                token
                    .parse::<$t>()
                    .map_err(|_| TextParseError::new(token, std::any::type_name::<$t>()))
            }

            fn format_text(&self, _culture: &Culture) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_text_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char,
);

macro_rules! impl_text_value_float {
    ($($t:ty),* $(,)?) => {$(
        impl TextValue for $t {
            fn parse_text(text: &str, culture: &Culture) -> Result<Self, TextParseError> {
                let token = text.trim();
                let separator = culture.decimal_separator();
                let normalized = if separator != '.' {
                    token.replace(separator, ".")
                } else {
                    token.to_owned()
                };
                normalized
                    .parse::<$t>()
                    .map_err(|_| TextParseError::new(token, std::any::type_name::<$t>()))
            }

            fn format_text(&self, culture: &Culture) -> String {
                let text = self.to_string();
                let separator = culture.decimal_separator();
                if separator != '.' {
                    text.replace('.', &separator.to_string())
                } else {
                    text
                }
            }
        }
    )*};
}

impl_text_value_float!(f32, f64);

impl TextValue for String {
    /// Strings convert to themselves, whitespace preserved.
    fn parse_text(text: &str, _culture: &Culture) -> Result<Self, TextParseError> {
        Ok(text.to_owned())
    }

    fn format_text(&self, _culture: &Culture) -> String {
        self.clone()
    }
}

impl TextValue for Vec<String> {
    /// The string-array sub-format: fields delimited by the culture's
    /// list separator, with embedded separators backslash-escaped.
    fn parse_text(text: &str, culture: &Culture) -> Result<Self, TextParseError> {
        Ok(fields::split(text, culture.list_separator()).into_vec())
    }

    fn format_text(&self, culture: &Culture) -> String {
        fields::join(self, culture.list_separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parse() {
        let culture = Culture::invariant();
        assert_eq!(i32::parse_text("-15", &culture), Ok(-15));
        assert_eq!(i32::parse_text("  42  ", &culture), Ok(42));
        assert_eq!(u8::parse_text("255", &culture), Ok(255));
    }

    #[test]
    fn test_integer_parse_failure() {
        let culture = Culture::invariant();
        let err = i32::parse_text("garbage", &culture).unwrap_err();
        assert_eq!(err.token(), "garbage");
        assert!(err.type_name().contains("i32"));
    }

    #[test]
    fn test_integer_format() {
        let culture = Culture::invariant();
        assert_eq!((-15).format_text(&culture), "-15");
    }

    #[test]
    fn test_float_invariant_culture() {
        let culture = Culture::invariant();
        assert_eq!(f64::parse_text("3.5", &culture), Ok(3.5));
        assert_eq!(3.5_f64.format_text(&culture), "3.5");
    }

    #[test]
    fn test_float_decimal_separator() {
        let culture = Culture::new(";", ',');
        assert_eq!(f64::parse_text("3,5", &culture), Ok(3.5));
        assert_eq!(3.5_f64.format_text(&culture), "3,5");

        // Whole numbers carry no decimal separator in either direction.
        assert_eq!(f64::parse_text("15", &culture), Ok(15.0));
        assert_eq!(15.0_f64.format_text(&culture), "15");
    }

    #[test]
    fn test_float_special_values() {
        let culture = Culture::invariant();
        assert_eq!(f64::parse_text("inf", &culture), Ok(f64::INFINITY));
        assert_eq!(f64::parse_text("-inf", &culture), Ok(f64::NEG_INFINITY));
        assert!(f64::parse_text("NaN", &culture).unwrap().is_nan());
        assert_eq!(f64::INFINITY.format_text(&culture), "inf");
    }

    #[test]
    fn test_bool_and_char() {
        let culture = Culture::invariant();
        assert_eq!(bool::parse_text("true", &culture), Ok(true));
        assert_eq!(char::parse_text("x", &culture), Ok('x'));
        assert!(bool::parse_text("maybe", &culture).is_err());
    }

    #[test]
    fn test_string_identity() {
        let culture = Culture::invariant();
        let parsed = String::parse_text(" spaced ", &culture).unwrap();
        assert_eq!(parsed, " spaced ");
        assert_eq!(parsed.format_text(&culture), " spaced ");
    }

    #[test]
    fn test_string_array_culture_awareness() {
        let semicolon = Culture::new(";", ',');
        let first = Vec::<String>::parse_text("1,2,3,4", &semicolon).unwrap();
        let second = Vec::<String>::parse_text("1;2;3;4", &semicolon).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 4);

        let invariant = Culture::invariant();
        let third = Vec::<String>::parse_text("1,2,3,4", &invariant).unwrap();
        assert_eq!(third.len(), second.len());
    }

    #[test]
    fn test_string_array_escaping() {
        let invariant = Culture::invariant();
        let parsed = Vec::<String>::parse_text(r"1\,2,3\,4", &invariant).unwrap();
        assert_eq!(parsed, vec!["1,2", "3,4"]);

        let formatted = parsed.format_text(&invariant);
        assert_eq!(formatted, r"1\,2,3\,4");
    }

    #[test]
    fn test_string_array_round_trip_changes_spacing_only_in_source() {
        // Fields keep their embedded whitespace through a round trip.
        let semicolon = Culture::new(";", ',');
        let parsed = Vec::<String>::parse_text(" 1;2;3; 4", &semicolon).unwrap();
        assert_eq!(parsed, vec![" 1", "2", "3", " 4"]);

        let rejoined = parsed.format_text(&semicolon);
        let reparsed = Vec::<String>::parse_text(&rejoined, &semicolon).unwrap();
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn test_error_display() {
        let err = TextParseError::new("abc", "i64");
        assert_eq!(format!("{}", err), "Could not parse token 'abc' as type i64");
    }
}
