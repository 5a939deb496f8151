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


//! # Integra Core
//!
//! Foundational abstractions for the Integra numeric kernel. Every routine in
//! the higher-level crates is generic over [`BinaryInteger`](int::BinaryInteger),
//! a capability trait implemented for all primitive integers and for
//! `num_bigint::BigInt`, so bit-level and number-theoretic code is written once
//! and behaves uniformly across fixed and dynamic storage widths.
//!
//! ## Modules
//!
//! - `int`: The `BinaryInteger` capability trait, the `StorageWidth` model and
//!   the implementations for primitive integers and `BigInt`.
//! - `width`: Storage and bit-length queries (`bit_count`, `byte_count`,
//!   `bit_length`, `shortest_bit_length`), including the asymmetric rule for
//!   negative dynamic-width values.
//! - `num`: By-value checked and wrapping arithmetic traits mirroring the
//!   intrinsic methods of the primitive integers.
//! - `error`: The error taxonomy (`NumericError`) shared by all kernel crates.
//! - `rounding`: Rounding policies used by integer log, root and pow.
//!
//! ## Purpose
//!
//! Exact integer algorithms must reconcile fixed-width wraparound, two's
//! complement sign handling and arbitrary precision growth. Collecting those
//! concerns here keeps the algorithm crates free of per-type special cases.

pub mod error;
pub mod int;
pub mod num;
pub mod rounding;
pub mod width;

pub use error::{NumericError, NumericResult};
pub use int::{BinaryInteger, StorageWidth};
pub use rounding::{RoundingMode, TieBreak};
