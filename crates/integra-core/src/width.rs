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


//! # Width & Storage Model
//!
//! Storage and bit-length queries shared by every bit-level routine.
//!
//! - `bit_count(v)` is the storage width in bits, `8 * byte_count(v)`.
//! - `shortest_bit_length(v)` is `1 + floor(log2(v))` for positive `v`,
//!   `0` for zero, and the two's complement length without the sign bit for
//!   negative `v`.
//! - `bit_length(v)` is the position of the most significant one bit plus one.
//!
//! ## Negative dynamic-width values
//!
//! A negative `BigInt` has no fixed top bit to anchor against: its sign
//! extends indefinitely. `bit_length` therefore reports the storage width
//! `bit_count(v)` for such values, while `shortest_bit_length` reports the
//! minimal magnitude length. The two disagree on purpose; callers must not
//! assume they are interchangeable for negative dynamic values.
//!
//! ```rust
//! use integra_core::width::{bit_count, bit_length, shortest_bit_length};
//! use num_bigint::BigInt;
//!
//! let v = BigInt::from(-129);
//! assert_eq!(bit_count(&v), 16);
//! assert_eq!(bit_length(&v), 16);
//! assert_eq!(shortest_bit_length(&v), 8);
//! ```

use crate::int::{BinaryInteger, StorageWidth};

/// Returns the storage width of `v` in bits.
///
/// # Examples
///
/// ```rust
/// use integra_core::width::bit_count;
/// use num_bigint::BigInt;
///
/// assert_eq!(bit_count(&0u32), 32);
/// assert_eq!(bit_count(&BigInt::from(200)), 16);
/// ```
#[inline(always)]
pub fn bit_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    v.byte_count() * 8
}

/// Returns the storage width of `v` in bytes.
#[inline(always)]
pub fn byte_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    v.byte_count()
}

/// Returns the shortest number of bits representing the magnitude of `v`.
///
/// # Examples
///
/// ```rust
/// use integra_core::width::shortest_bit_length;
///
/// assert_eq!(shortest_bit_length(&0u8), 0);
/// assert_eq!(shortest_bit_length(&1023i32), 10);
/// assert_eq!(shortest_bit_length(&-1i32), 0);
/// ```
#[inline(always)]
pub fn shortest_bit_length<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    v.shortest_bit_length()
}

/// Returns the position of the most significant one bit of `v`, plus one.
///
/// For non-negative values this equals [`shortest_bit_length`]. For negative
/// fixed-width values the sign bit is the most significant one bit, giving the
/// storage width. For negative dynamic-width values the storage width is
/// returned by definition (see the module documentation).
///
/// # Examples
///
/// ```rust
/// use integra_core::width::bit_length;
/// use num_bigint::BigInt;
///
/// assert_eq!(bit_length(&1023u16), 10);
/// assert_eq!(bit_length(&-1i8), 8);
/// assert_eq!(bit_length(&BigInt::from(-1)), 8);
/// ```
#[inline]
pub fn bit_length<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    if !v.is_negative() {
        return v.shortest_bit_length();
    }
    match T::STORAGE {
        StorageWidth::Fixed { bytes } => bytes * 8 - v.native_leading_zeros(),
        StorageWidth::Dynamic => bit_count(v),
    }
}
