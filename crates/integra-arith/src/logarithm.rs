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


//! Integer logarithms in an arbitrary radix.
//!
//! The logarithm of `|v|` is computed exactly and the sign of `v` is mirrored
//! onto the result, so `log_10(-1000) = -3`. `v = 0` yields `0`.
//!
//! Magnitudes with at most 53 significant bits first try a floating-point
//! estimate. The estimate is only a guess: it is accepted after the integer
//! check `radix^k <= |v| < radix^(k+1)` holds, and otherwise the exact
//! repeated-division path runs.

use crate::check_radix;
use integra_bits::pow2::is_pow2;
use integra_core::rounding::Candidate;
use integra_core::{BinaryInteger, NumericError, NumericResult, RoundingMode};
use log::trace;

/// Largest integer magnitude an `f64` represents exactly.
const MAX_EXACT_F64: u128 = 1 << 53;

/// `floor(log_radix |v|)` and whether `|v|` is an exact power of the radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LogFloor {
    pub(crate) exponent: usize,
    pub(crate) exact: bool,
}

/// Floating-point estimate of `floor(log_radix m)`, validated in `u128`.
///
/// Returns `None` when the operands exceed 53 bits or the estimate is off
/// by one at an exact power.
fn float_log_floor(m: u128, radix: u128) -> Option<LogFloor> {
    if m > MAX_EXACT_F64 || radix > MAX_EXACT_F64 {
        return None;
    }
    let estimate = ((m as f64).ln() / (radix as f64).ln()).floor();
    if !estimate.is_finite() || estimate < 0.0 || estimate > u32::MAX as f64 {
        return None;
    }
    let k = estimate as u32;
    let low = radix.checked_pow(k)?;
    let high = low.checked_mul(radix)?;
    (low <= m && m < high).then_some(LogFloor {
        exponent: k as usize,
        exact: low == m,
    })
}

/// Exact `floor(log_radix |v|)` by repeated division, for `v != 0`.
///
/// Negative values are divided in the negative domain, so the minimum of a
/// signed type needs no magnitude.
fn division_log_floor<T>(v: &T, radix: &T) -> LogFloor
where
    T: BinaryInteger,
{
    let mut exponent = 0;
    let mut exact = true;
    let mut m = v.clone();
    if v.is_negative() {
        let neg_radix = T::zero() - radix.clone();
        while m <= neg_radix {
            exact &= (m.clone() % radix.clone()).is_zero();
            m = m / radix.clone();
            exponent += 1;
        }
        exact &= m == T::zero() - T::one();
    } else {
        while m >= *radix {
            exact &= (m.clone() % radix.clone()).is_zero();
            m = m / radix.clone();
            exponent += 1;
        }
        exact &= m.is_one();
    }
    LogFloor { exponent, exact }
}

/// `floor(log_radix |v|)` for `v != 0` and a validated radix.
pub(crate) fn log_floor<T>(v: &T, radix: &T) -> LogFloor
where
    T: BinaryInteger,
{
    let small = v
        .to_i128()
        .map(i128::unsigned_abs)
        .or_else(|| v.to_u128())
        .zip(radix.to_u128());
    if let Some((m, r)) = small {
        if let Some(found) = float_log_floor(m, r) {
            return found;
        }
        trace!(
            "float log fast path rejected for |v| = {}, radix = {}; using repeated division",
            m, r
        );
    }
    division_log_floor(v, radix)
}

/// Converts a non-negative exponent to `T` and mirrors the sign of `v`.
fn signed_exponent<T>(v: &T, exponent: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let magnitude = T::from_usize(exponent)
        .ok_or(NumericError::overflow("integer_log"))?;
    if v.is_negative() {
        Ok(T::zero() - magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Returns `floor(log_radix |v|)` with the sign of `v`.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::logarithm::integer_log_toward_zero;
///
/// assert_eq!(integer_log_toward_zero(&1023u32, &2u32), Ok(9));
/// assert_eq!(integer_log_toward_zero(&1024u32, &2u32), Ok(10));
/// assert_eq!(integer_log_toward_zero(&-999i32, &10i32), Ok(-2));
/// assert_eq!(integer_log_toward_zero(&0u32, &10u32), Ok(0));
/// ```
pub fn integer_log_toward_zero<T>(v: &T, radix: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() {
        return Ok(T::zero());
    }
    signed_exponent(v, log_floor(v, radix).exponent)
}

/// Returns `ceil(log_radix |v|)` with the sign of `v`.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::logarithm::integer_log_away_from_zero;
///
/// assert_eq!(integer_log_away_from_zero(&1023u32, &2u32), Ok(10));
/// assert_eq!(integer_log_away_from_zero(&1024u32, &2u32), Ok(10));
/// assert_eq!(integer_log_away_from_zero(&-1001i32, &10i32), Ok(-4));
/// assert_eq!(integer_log_away_from_zero(&1u32, &10u32), Ok(0));
/// ```
pub fn integer_log_away_from_zero<T>(v: &T, radix: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() {
        return Ok(T::zero());
    }
    let floor = log_floor(v, radix);
    let exponent = if floor.exact {
        floor.exponent
    } else {
        floor.exponent + 1
    };
    signed_exponent(v, exponent)
}

/// Returns `log_radix |v|` rounded by `mode`, with the sign of `v`.
///
/// `Nearest` compares the linear distances `|v| - radix^k` and
/// `radix^(k+1) - |v|`. The comparison is carried out on exact `BigInt`
/// widenings, so candidate powers beyond the width of `T` are fine.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::logarithm::integer_log;
/// use integra_core::{RoundingMode, TieBreak};
///
/// let nearest = RoundingMode::Nearest(TieBreak::AwayFromZero);
/// assert_eq!(integer_log(&11u32, &2u32, nearest), Ok(3)); // 8 is closer than 16
/// assert_eq!(integer_log(&13u32, &2u32, nearest), Ok(4)); // 16 is closer than 8
/// assert_eq!(integer_log(&12u32, &2u32, nearest), Ok(4)); // tie
///
/// let to_even = RoundingMode::Nearest(TieBreak::ToEven);
/// assert_eq!(integer_log(&12u32, &2u32, to_even), Ok(4));
/// assert_eq!(integer_log(&-24i32, &2i32, to_even), Ok(-4));
/// ```
pub fn integer_log<T>(v: &T, radix: &T, mode: RoundingMode) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() {
        return Ok(T::zero());
    }
    let floor = log_floor(v, radix);
    if floor.exact {
        return signed_exponent(v, floor.exponent);
    }

    let magnitude = v.widen_to_bigint().magnitude().clone();
    let wide_radix = radix.widen_to_bigint().magnitude().clone();
    let low = wide_radix.pow(floor.exponent as u32);
    let high = &low * &wide_radix;
    let order = (&magnitude - &low).cmp(&(&high - &magnitude));

    let exponent = match mode.choose(order, floor.exponent % 2 == 0) {
        Candidate::TowardZero => floor.exponent,
        Candidate::AwayFromZero => floor.exponent + 1,
    };
    signed_exponent(v, exponent)
}

/// Returns `floor(log_2 |v|)` with the sign of `v`, read off the bit length.
///
/// `v = 0` yields `0`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::logarithm::integer_log2;
///
/// assert_eq!(integer_log2(&1u64), Ok(0));
/// assert_eq!(integer_log2(&(1u64 << 40)), Ok(40));
/// assert_eq!(integer_log2(&-8i32), Ok(-3));
/// assert_eq!(integer_log2(&i8::MIN), Ok(-7));
/// ```
pub fn integer_log2<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return Ok(T::zero());
    }
    if !v.is_negative() {
        return signed_exponent(v, v.shortest_bit_length() - 1);
    }
    let exponent = match v.clone().checked_neg_val() {
        Some(magnitude) => magnitude.shortest_bit_length() - 1,
        // The signed minimum -2^(N-1) encodes in N-1 bits plus the sign.
        None => v.shortest_bit_length(),
    };
    signed_exponent(v, exponent)
}

/// Returns `true` if `v` is a non-negative exact power of `radix`
/// (`radix^0 = 1` included).
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::logarithm::is_power_of;
///
/// assert_eq!(is_power_of(&1000u32, &10u32), Ok(true));
/// assert_eq!(is_power_of(&1001u32, &10u32), Ok(false));
/// assert_eq!(is_power_of(&1u32, &7u32), Ok(true));
/// assert_eq!(is_power_of(&0u32, &7u32), Ok(false));
/// ```
pub fn is_power_of<T>(v: &T, radix: &T) -> NumericResult<bool>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() || v.is_negative() {
        return Ok(false);
    }
    if *radix == T::one() + T::one() {
        return Ok(is_pow2(v));
    }
    Ok(log_floor(v, radix).exact)
}
