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


//! Exponentiation by squaring.

use crate::check_non_negative;
use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Computes `radix^exponent` exactly.
///
/// A zero radix or a zero exponent yields `1`: the kernel treats `0` as the
/// empty product in both positions.
///
/// # Errors
///
/// `OutOfRange` for a negative exponent; `Overflow` if the power does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::pow::integer_pow;
///
/// assert_eq!(integer_pow(&3u64, &4u64), Ok(81));
/// assert_eq!(integer_pow(&-2i32, &3i32), Ok(-8));
/// assert_eq!(integer_pow(&0u8, &5u8), Ok(1));
/// assert!(integer_pow(&2u8, &8u8).is_err());
/// assert!(integer_pow(&2i32, &-1i32).is_err());
/// ```
pub fn integer_pow<T>(radix: &T, exponent: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(exponent, "exponent")?;
    if radix.is_zero() || exponent.is_zero() {
        return Ok(T::one());
    }

    let overflow = || NumericError::overflow("integer_pow");
    let mut result = T::one();
    let mut base = radix.clone();
    let mut e = exponent.clone();
    loop {
        if !e.is_even() {
            result = result.checked_mul_val(base.clone()).ok_or_else(overflow)?;
        }
        e = e >> 1;
        if e.is_zero() {
            return Ok(result);
        }
        base = base.clone().checked_mul_val(base).ok_or_else(overflow)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_integer_pow_small_table() {
        for radix in 1u64..=12 {
            for exponent in 0u32..=12 {
                assert_eq!(
                    integer_pow(&radix, &(exponent as u64)),
                    Ok(radix.pow(exponent)),
                    "{}^{}",
                    radix,
                    exponent
                );
            }
        }
    }

    #[test]
    fn test_integer_pow_zero_conventions() {
        assert_eq!(integer_pow(&0i32, &0i32), Ok(1));
        assert_eq!(integer_pow(&0i32, &7i32), Ok(1));
        assert_eq!(integer_pow(&9i32, &0i32), Ok(1));
        assert_eq!(integer_pow(&BigInt::from(0), &BigInt::from(3)), Ok(BigInt::from(1)));
    }

    #[test]
    fn test_integer_pow_negative_radix() {
        assert_eq!(integer_pow(&-3i64, &3i64), Ok(-27));
        assert_eq!(integer_pow(&-3i64, &4i64), Ok(81));
        assert_eq!(integer_pow(&-2i8, &7i8), Ok(i8::MIN));
        assert!(integer_pow(&2i8, &7i8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_integer_pow_overflow_boundary() {
        assert_eq!(integer_pow(&2u64, &63u64), Ok(1u64 << 63));
        assert!(integer_pow(&2u64, &64u64).unwrap_err().is_overflow());
        assert_eq!(integer_pow(&255u16, &2u16), Ok(65025));
        assert!(integer_pow(&256u16, &2u16).is_err());
    }

    #[test]
    fn test_integer_pow_negative_exponent() {
        assert!(integer_pow(&2i32, &-3i32).unwrap_err().is_out_of_range());
        assert!(integer_pow(&BigInt::from(2), &BigInt::from(-1)).is_err());
    }

    #[test]
    fn test_integer_pow_bigint_matches_u128() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let radix: u128 = rng.random_range(2..1000);
            let exponent: u32 = rng.random_range(0..12);
            let expected = radix.pow(exponent);
            assert_eq!(
                integer_pow(&BigInt::from(radix), &BigInt::from(exponent)),
                Ok(BigInt::from(expected))
            );
        }
        let big = integer_pow(&BigInt::from(2), &BigInt::from(200)).unwrap();
        assert_eq!(big, BigInt::from(1) << 200usize);
    }
}
