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

//! # Ambit Text
//!
//! **Culture-aware text conversion for the Ambit value types.**
//!
//! This crate maps between human-edited, separator-delimited strings and
//! typed values. The conversions are driven by a [`Culture`] parameter that
//! carries the list separator and decimal separator of the convention the
//! text was written in.
//!
//! ## Architecture
//!
//! * **`culture`**: The formatting-convention parameter threaded through
//!   every conversion call.
//! * **`fields`**: The escaping-aware split/join codec for
//!   separator-delimited field lists.
//! * **`value`**: The [`TextValue`] capability that gives an element type
//!   a culture-aware textual form, with implementations for the primitive
//!   types and for string arrays.
//! * **`convert`**: The interval converter, treating an interval as
//!   exactly two delimited fields.
//!
//! [`Culture`]: culture::Culture
//! [`TextValue`]: value::TextValue

pub mod convert;
pub mod culture;
pub mod fields;
pub mod value;
