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


//! # Binary Integer Abstraction
//!
//! The capability set every kernel routine is written against. A
//! [`BinaryInteger`] supports two's complement bitwise operators, total
//! ordering, additive and multiplicative identities, checked conversion
//! from and to the primitive integers, by-value checked and wrapping
//! arithmetic, and a report of its own storage width.
//!
//! ## Storage strategies
//!
//! Primitive integers have a [`StorageWidth::Fixed`] width: their byte count
//! never changes. `num_bigint::BigInt` is [`StorageWidth::Dynamic`]: its byte
//! count is the minimal two's complement encoding of the current value and
//! grows with the magnitude. Algorithms that have to behave differently for
//! the two strategies branch on `T::STORAGE` (or
//! [`BinaryInteger::is_dynamic_width`]) so the alternate path is visible in
//! the signature of the capability rather than hidden in type checks.
//!
//! ## Implementations
//!
//! - `primitive`: `i8..=i128`, `isize`, `u8..=u128`, `usize`.
//! - `big`: `num_bigint::BigInt`.

mod big;
mod primitive;

use crate::error::{NumericError, NumericResult};
use crate::num::ops::checked_arithmetic::{
    CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedNegVal, CheckedRemVal, CheckedSubVal,
};
use crate::num::ops::wrapping_arithmetic::{
    WrappingAddVal, WrappingMulVal, WrappingNegVal, WrappingSubVal,
};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

/// The storage strategy of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageWidth {
    /// A fixed number of bytes, independent of the value.
    Fixed {
        /// The number of bytes of storage.
        bytes: usize,
    },
    /// The minimal two's complement encoding of the current value.
    Dynamic,
}

impl StorageWidth {
    /// Returns the number of storage bits for fixed widths, `None` for dynamic ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integra_core::int::StorageWidth;
    ///
    /// assert_eq!(StorageWidth::Fixed { bytes: 4 }.fixed_bits(), Some(32));
    /// assert_eq!(StorageWidth::Dynamic.fixed_bits(), None);
    /// ```
    #[inline(always)]
    pub const fn fixed_bits(self) -> Option<usize> {
        match self {
            Self::Fixed { bytes } => Some(bytes * 8),
            Self::Dynamic => None,
        }
    }

    /// Returns `true` for the dynamic storage strategy.
    #[inline(always)]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl std::fmt::Display for StorageWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed { bytes } => write!(f, "Fixed({} bytes)", bytes),
            Self::Dynamic => write!(f, "Dynamic"),
        }
    }
}

/// A binary integer usable by every kernel routine.
///
/// Implemented for all primitive integers and for `num_bigint::BigInt`.
/// Values are passed by reference throughout the kernel because `BigInt`
/// is not `Copy`; the operator bounds are by value, so implementations
/// clone where necessary.
///
/// # Examples
///
/// ```rust
/// use integra_core::int::{BinaryInteger, StorageWidth};
/// use num_bigint::BigInt;
///
/// assert_eq!(<u32 as BinaryInteger>::STORAGE, StorageWidth::Fixed { bytes: 4 });
/// assert!(BigInt::is_dynamic_width());
///
/// assert_eq!(BinaryInteger::byte_count(&BigInt::from(255)), 2); // 0x00FF
/// assert_eq!(BinaryInteger::byte_count(&255u8), 1);
/// ```
pub trait BinaryInteger:
    Sized
    + Clone
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + FromPrimitive
    + ToPrimitive
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedDivVal
    + CheckedRemVal
    + CheckedNegVal
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + WrappingNegVal
    + Send
    + Sync
{
    /// The storage strategy of the type.
    const STORAGE: StorageWidth;

    /// Whether values are interpreted as two's complement signed integers.
    const IS_SIGNED: bool;

    /// Returns `true` if the byte count depends on the value.
    #[inline(always)]
    fn is_dynamic_width() -> bool {
        Self::STORAGE.is_dynamic()
    }

    /// Returns the number of storage bits of a fixed-width type.
    #[inline(always)]
    fn fixed_bit_count() -> Option<usize> {
        Self::STORAGE.fixed_bits()
    }

    /// The number of bytes used to store this value.
    ///
    /// Fixed for primitive types; the minimal two's complement encoding
    /// length for dynamic types (at least one byte, also for zero).
    fn byte_count(&self) -> usize;

    /// The number of bits needed to represent the magnitude bits of the value.
    ///
    /// For non-negative values this is `1 + floor(log2(v))`, or `0` for zero.
    /// For negative values it is the shortest two's complement length without
    /// the sign bit, i.e. the bit length of `!v`.
    fn shortest_bit_length(&self) -> usize;

    /// Returns `true` if the value is below zero.
    fn is_negative(&self) -> bool;

    /// The little-endian two's complement bytes of the value, exactly
    /// `byte_count()` long.
    fn to_le_bytes_vec(&self) -> Vec<u8>;

    /// Builds a value from little-endian two's complement bytes.
    ///
    /// Fixed-width types truncate or zero-extend to their storage width.
    /// Dynamic types interpret the slice as a signed encoding of its length.
    fn from_le_bytes_slice(bytes: &[u8]) -> Self;

    /// Shifts right, filling with zeros from the top of the storage width.
    ///
    /// For unsigned types this is `>>`. Signed fixed-width types shift the
    /// unsigned reinterpretation. Negative dynamic values are first reduced
    /// to their storage-width bit pattern, so the result is non-negative.
    /// Shifting by the storage width or more yields zero for fixed widths.
    fn logical_shr(&self, shift: usize) -> Self;

    /// The number of one bits in the storage width, using the native
    /// instruction of the type where one exists.
    fn native_count_ones(&self) -> usize;

    /// The number of zero bits above the most significant one bit within the
    /// storage width, using the native instruction where one exists.
    fn native_leading_zeros(&self) -> usize;

    /// The number of zero bits below the least significant one bit, or the
    /// storage width for zero, using the native instruction where one exists.
    fn native_trailing_zeros(&self) -> usize;

    /// Converts a `usize`, failing with `Overflow` if it does not fit.
    #[inline]
    fn try_from_usize(n: usize) -> NumericResult<Self> {
        Self::from_usize(n).ok_or(NumericError::overflow("usize conversion"))
    }

    /// Converts to `usize`, failing with `OutOfRange` for negative values or
    /// values beyond `usize::MAX`.
    #[inline]
    fn try_to_usize(&self) -> NumericResult<usize> {
        self.to_usize()
            .ok_or(NumericError::out_of_range("value", "must fit in usize"))
    }

    /// Returns `true` if the least significant bit is clear.
    #[inline]
    fn is_even(&self) -> bool {
        (self.clone() & Self::one()).is_zero()
    }

    /// Widens the value to an exact `BigInt`.
    ///
    /// Used where intermediate results may exceed the fixed width of `Self`,
    /// e.g. when comparing distances to candidate powers.
    ///
    /// ```rust
    /// use integra_core::BinaryInteger;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(200u8.widen_to_bigint(), BigInt::from(200));
    /// assert_eq!((-56i8).widen_to_bigint(), BigInt::from(-56));
    /// ```
    fn widen_to_bigint(&self) -> BigInt {
        let mut bytes = self.to_le_bytes_vec();
        if !Self::IS_SIGNED {
            bytes.push(0);
        }
        BigInt::from_signed_bytes_le(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe<T: BinaryInteger>(v: &T) -> (usize, usize, bool) {
        (v.byte_count(), v.shortest_bit_length(), v.is_negative())
    }

    #[test]
    fn test_storage_width_constants() {
        assert_eq!(<i8 as BinaryInteger>::STORAGE, StorageWidth::Fixed { bytes: 1 });
        assert_eq!(<u128 as BinaryInteger>::STORAGE, StorageWidth::Fixed { bytes: 16 });
        assert_eq!(<BigInt as BinaryInteger>::STORAGE, StorageWidth::Dynamic);
        assert_eq!(i64::fixed_bit_count(), Some(64));
        assert_eq!(BigInt::fixed_bit_count(), None);
        assert!(!u16::is_dynamic_width());
        assert!(<i32 as BinaryInteger>::IS_SIGNED);
        assert!(!<u32 as BinaryInteger>::IS_SIGNED);
    }

    #[test]
    fn test_generic_description_agrees_across_types() {
        assert_eq!(describe(&100u8), (1, 7, false));
        assert_eq!(describe(&100i64), (8, 7, false));
        assert_eq!(describe(&BigInt::from(100)), (1, 7, false));
        assert_eq!(describe(&-100i16), (2, 7, true));
        assert_eq!(describe(&BigInt::from(-100)), (1, 7, true));
    }

    #[test]
    fn test_try_from_usize() {
        assert_eq!(u8::try_from_usize(255), Ok(255));
        assert!(u8::try_from_usize(256).unwrap_err().is_overflow());
        assert_eq!(BigInt::try_from_usize(usize::MAX), Ok(BigInt::from(usize::MAX)));
    }

    #[test]
    fn test_try_to_usize() {
        assert_eq!(BinaryInteger::try_to_usize(&7i32), Ok(7));
        assert!(BinaryInteger::try_to_usize(&-7i32).is_err());
    }

    #[test]
    fn test_is_even() {
        assert!(BinaryInteger::is_even(&0u8));
        assert!(!BinaryInteger::is_even(&-3i32));
        assert!(BinaryInteger::is_even(&BigInt::from(-4)));
    }

    #[test]
    fn test_widen_to_bigint() {
        assert_eq!(u128::MAX.widen_to_bigint(), BigInt::from(u128::MAX));
        assert_eq!(i64::MIN.widen_to_bigint(), BigInt::from(i64::MIN));
        let big = BigInt::from(-12345) << 100usize;
        assert_eq!(big.widen_to_bigint(), big);
    }

    #[test]
    fn test_storage_width_display() {
        assert_eq!(StorageWidth::Fixed { bytes: 2 }.to_string(), "Fixed(2 bytes)");
        assert_eq!(StorageWidth::Dynamic.to_string(), "Dynamic");
    }
}
