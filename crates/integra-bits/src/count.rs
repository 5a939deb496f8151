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


//! Bit counting with build-time strategy selection.
//!
//! With the `intrinsics` feature (default) the counts dispatch to the
//! native per-type operations (`count_ones`, `leading_zeros`,
//! `trailing_zeros`), which lower to `POPCNT`/`LZCNT`/`TZCNT` or equivalent
//! where the target supports them. Without it the portable algorithms of
//! [`crate::portable`] are used. Both strategies are always compiled and are
//! tested against each other.

use crate::portable;
use integra_core::BinaryInteger;

/// The counting strategy selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountStrategy {
    /// Native per-type instructions.
    Intrinsic,
    /// Portable bit tricks over the storage bytes.
    Portable,
}

/// Returns the strategy this build uses.
///
/// # Examples
///
/// ```rust
/// use integra_bits::count::{active_strategy, CountStrategy};
///
/// if cfg!(feature = "intrinsics") {
///     assert_eq!(active_strategy(), CountStrategy::Intrinsic);
/// }
/// ```
#[inline(always)]
pub const fn active_strategy() -> CountStrategy {
    if cfg!(feature = "intrinsics") {
        CountStrategy::Intrinsic
    } else {
        CountStrategy::Portable
    }
}

/// Returns the number of one bits of `v`, at most `bit_count(v)`.
///
/// # Examples
///
/// ```rust
/// use integra_bits::count::population_count;
/// use num_bigint::BigInt;
///
/// assert_eq!(population_count(&0b1011u8), 3);
/// assert_eq!(population_count(&-1i16), 16);
/// assert_eq!(population_count(&BigInt::from(-1)), 8);
/// ```
#[inline]
pub fn population_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    match active_strategy() {
        CountStrategy::Intrinsic => v.native_count_ones(),
        CountStrategy::Portable => portable::population_count(v),
    }
}

/// Returns the number of zero bits above the most significant one bit.
///
/// # Examples
///
/// ```rust
/// use integra_bits::count::leading_zero_count;
///
/// assert_eq!(leading_zero_count(&1u32), 31);
/// assert_eq!(leading_zero_count(&-1i32), 0);
/// ```
#[inline]
pub fn leading_zero_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    match active_strategy() {
        CountStrategy::Intrinsic => v.native_leading_zeros(),
        CountStrategy::Portable => portable::leading_zero_count(v),
    }
}

/// Returns the number of zero bits below the least significant one bit.
///
/// `trailing_zero_count(0)` is the storage width `bit_count(0)`.
///
/// # Examples
///
/// ```rust
/// use integra_bits::count::trailing_zero_count;
///
/// assert_eq!(trailing_zero_count(&40u8), 3);
/// assert_eq!(trailing_zero_count(&0u8), 8);
/// ```
#[inline]
pub fn trailing_zero_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    match active_strategy() {
        CountStrategy::Intrinsic => v.native_trailing_zeros(),
        CountStrategy::Portable => portable::trailing_zero_count(v),
    }
}
