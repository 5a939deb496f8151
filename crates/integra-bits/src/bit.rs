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


//! Single-bit access and one-bit extraction.
//!
//! Bit indices are zero-based from the least significant bit. Fixed-width
//! types reject indices at or beyond their storage width with an
//! `OutOfRange` error instead of relying on shift behaviour. Dynamic-width
//! types accept any index; bits above the storage width read as the sign.

use crate::check_bit_index;
use integra_core::width::bit_length;
use integra_core::{BinaryInteger, NumericResult};

/// Returns whether bit `index` of `v` is set.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::get_bit;
/// use num_bigint::BigInt;
///
/// assert_eq!(get_bit(&0b100u8, 2), Ok(true));
/// assert_eq!(get_bit(&0b100u8, 1), Ok(false));
/// assert!(get_bit(&0u8, 8).is_err());
/// assert_eq!(get_bit(&BigInt::from(-1), 1000), Ok(true));
/// ```
#[inline]
pub fn get_bit<T>(v: &T, index: usize) -> NumericResult<bool>
where
    T: BinaryInteger,
{
    check_bit_index::<T>(index)?;
    Ok(!((v.clone() >> index) & T::one()).is_zero())
}

/// Returns `v` with bit `index` set.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::set_bit;
///
/// assert_eq!(set_bit(&0u8, 3), Ok(8));
/// assert_eq!(set_bit(&0i8, 7), Ok(-128));
/// ```
#[inline]
pub fn set_bit<T>(v: &T, index: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_bit_index::<T>(index)?;
    Ok(v.clone() | (T::one() << index))
}

/// Returns `v` with bit `index` cleared.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::clear_bit;
///
/// assert_eq!(clear_bit(&0b1111u8, 0), Ok(0b1110));
/// assert_eq!(clear_bit(&-1i8, 7), Ok(127));
/// ```
#[inline]
pub fn clear_bit<T>(v: &T, index: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_bit_index::<T>(index)?;
    Ok(v.clone() & !(T::one() << index))
}

/// Returns `v` with bit `index` inverted.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::flip_bit;
///
/// assert_eq!(flip_bit(&0b1010u8, 1), Ok(0b1000));
/// assert_eq!(flip_bit(&0b1010u8, 0), Ok(0b1011));
/// ```
#[inline]
pub fn flip_bit<T>(v: &T, index: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_bit_index::<T>(index)?;
    Ok(v.clone() ^ (T::one() << index))
}

/// Isolates the least significant one bit of `v`; zero for zero.
///
/// Computed as `v & (!v + 1)` so that unsigned types, which have no
/// negation, are supported. The increment wraps at the storage width.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::least_significant_1_bit;
/// use num_bigint::BigInt;
///
/// assert_eq!(least_significant_1_bit(&0b1011000u8), 0b1000);
/// assert_eq!(least_significant_1_bit(&0u8), 0);
/// assert_eq!(least_significant_1_bit(&-12i32), 4);
/// assert_eq!(least_significant_1_bit(&BigInt::from(-12)), BigInt::from(4));
/// ```
#[inline]
pub fn least_significant_1_bit<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    v.clone() & (!v.clone()).wrapping_add_val(T::one())
}

/// Isolates the most significant one bit of `v`; zero for zero.
///
/// Equal to `1 << (bit_length(v) - 1)`. For negative fixed-width values
/// this is the sign bit. For negative dynamic-width values it is the top bit
/// of the storage width, returned as a positive value.
///
/// # Examples
///
/// ```rust
/// use integra_bits::bit::most_significant_1_bit;
/// use num_bigint::BigInt;
///
/// assert_eq!(most_significant_1_bit(&0b1011000u8), 0b1000000);
/// assert_eq!(most_significant_1_bit(&-3i8), -128);
/// assert_eq!(most_significant_1_bit(&BigInt::from(-3)), BigInt::from(128));
/// ```
#[inline]
pub fn most_significant_1_bit<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return T::zero();
    }
    T::one() << (bit_length(v) - 1)
}
