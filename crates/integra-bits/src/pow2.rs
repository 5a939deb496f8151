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


//! Power-of-two arithmetic.
//!
//! The bounding powers of two of `|v|` are found through the most significant
//! one bit, then the sign of `v` is re-applied. `proper = true` demands strict
//! inequality: when `|v|` already is a power of two the result moves one more
//! step toward (or away from) zero.
//!
//! Negative values are handled in the negative domain so that the minimum of
//! a signed fixed-width type, whose magnitude is not representable, is still
//! answered exactly where the answer fits.

use crate::bit::most_significant_1_bit;
use crate::fold::fold_msb;
use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Returns `true` if `v` is a positive power of two (exactly one bit set).
///
/// Negative values are never powers of two, including the minimum of a
/// signed type whose only set bit is the sign bit.
///
/// # Examples
///
/// ```rust
/// use integra_bits::pow2::is_pow2;
///
/// assert!(is_pow2(&1024u32));
/// assert!(!is_pow2(&1023u32));
/// assert!(!is_pow2(&0u32));
/// assert!(!is_pow2(&i8::MIN));
/// ```
#[inline]
pub fn is_pow2<T>(v: &T) -> bool
where
    T: BinaryInteger,
{
    if v.is_zero() || v.is_negative() {
        return false;
    }
    (v.clone() & (v.clone() - T::one())).is_zero()
}

/// The largest power of two `p <= m` (or `p < m` if `proper`), for `m > 0`.
#[inline]
fn floor_pow2_of_magnitude<T>(m: &T, proper: bool) -> T
where
    T: BinaryInteger,
{
    let p = most_significant_1_bit(m);
    if proper && p == *m { p >> 1 } else { p }
}

/// Returns the power of two bounding `|v|` from below, with the sign of `v`.
///
/// `0` maps to `0`. With `proper`, an exact power of two moves one step
/// further toward zero (`1` maps to `0`).
///
/// # Examples
///
/// ```rust
/// use integra_bits::pow2::pow2_toward_zero;
///
/// assert_eq!(pow2_toward_zero(&100i32, false), Ok(64));
/// assert_eq!(pow2_toward_zero(&64i32, false), Ok(64));
/// assert_eq!(pow2_toward_zero(&64i32, true), Ok(32));
/// assert_eq!(pow2_toward_zero(&-100i32, false), Ok(-64));
/// assert_eq!(pow2_toward_zero(&i8::MIN, true), Ok(-64));
/// ```
pub fn pow2_toward_zero<T>(v: &T, proper: bool) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return Ok(T::zero());
    }
    if !v.is_negative() {
        return Ok(floor_pow2_of_magnitude(v, proper));
    }
    match v.clone().checked_neg_val() {
        Some(magnitude) => floor_pow2_of_magnitude(&magnitude, proper)
            .checked_neg_val()
            .ok_or(NumericError::overflow("pow2_toward_zero")),
        // Only the signed minimum has no magnitude, and it is -2^(N-1) itself.
        None if proper => Ok(v.clone() >> 1),
        None => Ok(v.clone()),
    }
}

/// Returns the power of two bounding `|v|` from above, with the sign of `v`.
///
/// `0` maps to `1`. With `proper`, an exact power of two moves one step
/// further away from zero.
///
/// # Errors
///
/// `Overflow` if the power of two does not fit a fixed-width type.
///
/// # Examples
///
/// ```rust
/// use integra_bits::pow2::pow2_away_from_zero;
///
/// assert_eq!(pow2_away_from_zero(&100i32, false), Ok(128));
/// assert_eq!(pow2_away_from_zero(&128i32, false), Ok(128));
/// assert_eq!(pow2_away_from_zero(&128i32, true), Ok(256));
/// assert_eq!(pow2_away_from_zero(&-100i8, false), Ok(-128));
/// assert!(pow2_away_from_zero(&100i8, false).is_err());
/// ```
pub fn pow2_away_from_zero<T>(v: &T, proper: bool) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return Ok(T::one());
    }
    let two = T::one() + T::one();
    let overflow = || NumericError::overflow("pow2_away_from_zero");

    if !v.is_negative() {
        let p = most_significant_1_bit(v);
        if p == *v && !proper {
            return Ok(p);
        }
        return p.checked_mul_val(two).ok_or_else(overflow);
    }

    match v.clone().checked_neg_val() {
        Some(magnitude) => {
            let p = most_significant_1_bit(&magnitude);
            let exact = p == magnitude;
            let negative = p.checked_neg_val().ok_or_else(overflow)?;
            if exact && !proper {
                Ok(negative)
            } else {
                negative.checked_mul_val(two).ok_or_else(overflow)
            }
        }
        None if proper => Err(overflow()),
        None => Ok(v.clone()),
    }
}

/// Returns the smallest power of two strictly greater than `v`,
/// `fold_msb(v) + 1`.
///
/// # Errors
///
/// `OutOfRange` for negative `v`; `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_bits::pow2::next_largest_pow2;
///
/// assert_eq!(next_largest_pow2(&0u8), Ok(1));
/// assert_eq!(next_largest_pow2(&5u8), Ok(8));
/// assert_eq!(next_largest_pow2(&8u8), Ok(16));
/// assert!(next_largest_pow2(&200u8).is_err());
/// ```
pub fn next_largest_pow2<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if v.is_negative() {
        return Err(NumericError::out_of_range("value", "must be non-negative"));
    }
    fold_msb(v)
        .checked_add_val(T::one())
        .ok_or(NumericError::overflow("next_largest_pow2"))
}
