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

//! # Ambit Core
//!
//! Foundational value types for the Ambit toolkit. This crate consolidates
//! pure, allocation-light building blocks with ergonomic APIs that underpin
//! the higher-level conversion crates.
//!
//! ## Modules
//!
//! - `ord`: Injectable total-order capability (`Comparer<T>`) with a natural
//!   ordering for `Ord` types, a total ordering for floating-point types,
//!   and a blanket implementation for plain comparison closures.
//! - `interval`: Closed interval `[minimum, maximum]` value type with
//!   on-demand validity checking, containment queries, and union and
//!   intersection algebra with an explicit failure policy.
//! - `stack`: A persistent, structurally shared LIFO stack where every
//!   mutation returns a new value.
//!
//! ## Purpose
//!
//! Everything in this crate is an immutable value computation without I/O
//! or shared mutable state. All types are safely usable from multiple
//! threads whenever their element type is.
//!
//! Refer to each module for detailed APIs and examples.

pub mod interval;
pub mod ord;
pub mod stack;
