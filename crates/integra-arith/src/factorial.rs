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


//! Factorials and factorial-like products.
//!
//! All products are checked: a result that does not fit a fixed-width type
//! is reported as `Overflow`, never wrapped. A negative argument to
//! [`factorial`] mirrors the sign, `factorial(-5) = -120`.

use crate::check_non_negative;
use integra_core::{BinaryInteger, NumericError, NumericResult};
use log::debug;

/// Ranges at most this long are multiplied iteratively by the product tree.
const LEAF_SIZE: usize = 16;

/// The product `high * (high - 1) * ... * low` for `low <= high`.
fn product_inclusive<T>(low: &T, high: &T, operation: &'static str) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let mut product = T::one();
    let mut i = high.clone();
    loop {
        product = product
            .checked_mul_val(i.clone())
            .ok_or(NumericError::overflow(operation))?;
        if i == *low {
            return Ok(product);
        }
        i = i - T::one();
    }
}

/// Balanced product tree over `[low, high]`, `0 < low <= high`.
fn product_tree<T>(low: &T, high: &T, leaf: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let span = high.clone() - low.clone();
    if span < *leaf {
        return product_inclusive(low, high, "factorial");
    }
    let mid = low.clone() + (span >> 1);
    let left = product_tree(low, &mid, leaf)?;
    let right = product_tree(&(mid + T::one()), high, leaf)?;
    left.checked_mul_val(right)
        .ok_or(NumericError::overflow("factorial"))
}

/// Splits `v` into its magnitude and sign, failing for a signed minimum.
fn magnitude_of<T>(v: &T, operation: &'static str) -> NumericResult<(T, bool)>
where
    T: BinaryInteger,
{
    if !v.is_negative() {
        return Ok((v.clone(), false));
    }
    let magnitude = v
        .clone()
        .checked_neg_val()
        .ok_or(NumericError::overflow(operation))?;
    Ok((magnitude, true))
}

/// Re-applies a sign to a positive product.
#[inline]
fn with_sign<T>(product: T, negative: bool) -> T
where
    T: BinaryInteger,
{
    if negative {
        T::zero() - product
    } else {
        product
    }
}

/// Returns `v!`, with `factorial(-v) = -factorial(v)`.
///
/// # Errors
///
/// `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::factorial::factorial;
///
/// assert_eq!(factorial(&0u32), Ok(1));
/// assert_eq!(factorial(&10u32), Ok(3_628_800));
/// assert_eq!(factorial(&-5i32), Ok(-120));
/// assert!(factorial(&6u8).is_err());
/// ```
pub fn factorial<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    factorial_with_threshold(v, &T::one())
}

/// Returns the product of the integers in `(threshold, |v|]`, with the sign
/// of `v`. An empty range yields `1`.
///
/// `factorial_with_threshold(v, t) = v! / t!` for `0 <= t <= v`.
///
/// # Errors
///
/// `OutOfRange` for a negative threshold; `Overflow` if the result does not
/// fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::factorial::factorial_with_threshold;
///
/// assert_eq!(factorial_with_threshold(&10u64, &7u64), Ok(720));
/// assert_eq!(factorial_with_threshold(&5u64, &9u64), Ok(1));
/// assert_eq!(factorial_with_threshold(&-4i64, &2i64), Ok(-12));
/// ```
pub fn factorial_with_threshold<T>(v: &T, threshold: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(threshold, "threshold")?;
    let (magnitude, negative) = magnitude_of(v, "factorial")?;
    if magnitude <= *threshold {
        return Ok(with_sign(T::one(), negative));
    }
    let low = threshold.clone() + T::one();
    let product = product_inclusive(&low, &magnitude, "factorial")?;
    Ok(with_sign(product, negative))
}

/// Returns `v!` through a balanced product tree.
///
/// Multiplying operands of similar size is much cheaper for `BigInt` than
/// the one-sided running product of [`factorial`]. Results, including
/// overflow errors, are identical to [`factorial`]: every partial product
/// divides `v!`, so if `v!` fits, so do they.
///
/// # Errors
///
/// `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::factorial::split_factorial;
/// use num_bigint::BigInt;
///
/// assert_eq!(split_factorial(&20u64), Ok(2_432_902_008_176_640_000));
/// assert_eq!(split_factorial(&-3i32), Ok(-6));
/// assert!(split_factorial(&21u64).is_err());
/// assert_eq!(split_factorial(&BigInt::from(25)).unwrap().to_string(), "15511210043330985984000000");
/// ```
pub fn split_factorial<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let (magnitude, negative) = magnitude_of(v, "factorial")?;
    let two = T::one() + T::one();
    if magnitude < two {
        return Ok(with_sign(T::one(), negative));
    }
    let leaf = T::from_usize(LEAF_SIZE).unwrap_or_else(|| two.clone());
    debug!("split factorial of {} with leaf size {}", magnitude, leaf);
    let product = product_tree(&two, &magnitude, &leaf)?;
    Ok(with_sign(product, negative))
}

/// Returns the falling factorial `v * (v - 1) * ... * (v - k + 1)`.
///
/// Equals `v! / (v - k)!` for `0 <= k <= v`, and `0` for `k > v >= 0`
/// because the product passes through zero. `k = 0` yields `1`.
///
/// # Errors
///
/// `OutOfRange` for negative `k`; `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::factorial::falling_factorial;
///
/// assert_eq!(falling_factorial(&10u32, &3u32), Ok(720));
/// assert_eq!(falling_factorial(&3u32, &5u32), Ok(0));
/// assert_eq!(falling_factorial(&-2i32, &3i32), Ok(-24));
/// ```
pub fn falling_factorial<T>(v: &T, k: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(k, "k")?;
    if k.is_zero() {
        return Ok(T::one());
    }
    if !v.is_negative() && k > v {
        return Ok(T::zero());
    }
    let low = v
        .clone()
        .checked_sub_val(k.clone() - T::one())
        .ok_or(NumericError::overflow("falling_factorial"))?;
    product_inclusive(&low, v, "falling_factorial")
}

/// Returns the rising factorial `v * (v + 1) * ... * (v + k - 1)`.
///
/// Equals `(v + k - 1)! / (v - 1)!` for `v >= 1`, and `0` when the product
/// passes through zero. `k = 0` yields `1`.
///
/// # Errors
///
/// `OutOfRange` for negative `k`; `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::factorial::rising_factorial;
///
/// assert_eq!(rising_factorial(&3u32, &4u32), Ok(360));
/// assert_eq!(rising_factorial(&0u32, &4u32), Ok(0));
/// assert_eq!(rising_factorial(&-3i32, &2i32), Ok(6));
/// ```
pub fn rising_factorial<T>(v: &T, k: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(k, "k")?;
    if k.is_zero() {
        return Ok(T::one());
    }
    let overflow = || NumericError::overflow("rising_factorial");
    let high = v
        .clone()
        .checked_add_val(k.clone() - T::one())
        .ok_or_else(overflow)?;
    if (v.is_zero() || v.is_negative()) && !high.is_negative() {
        return Ok(T::zero());
    }
    product_inclusive(v, &high, "rising_factorial")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_factorial_table_u64() {
        let mut expected = 1u64;
        for v in 0u64..=20 {
            if v > 1 {
                expected *= v;
            }
            assert_eq!(factorial(&v), Ok(expected));
        }
        assert!(factorial(&21u64).unwrap_err().is_overflow());
    }

    #[test]
    fn test_factorial_overflow_boundaries() {
        assert_eq!(factorial(&5u8), Ok(120));
        assert!(factorial(&6u8).unwrap_err().is_overflow());
        assert_eq!(factorial(&34u128), Ok(295_232_799_039_604_140_847_618_609_643_520_000_000));
        assert!(factorial(&35u128).is_err());
        assert_eq!(factorial(&-5i8), Ok(-120));
        assert!(factorial(&i8::MIN).unwrap_err().is_overflow());
    }

    #[test]
    fn test_split_factorial_matches_factorial_bigint() {
        for v in 0..=200 {
            let v = BigInt::from(v);
            assert_eq!(split_factorial(&v), factorial(&v), "v={}", v);
        }
        let v = BigInt::from(1000);
        let split = split_factorial(&v).unwrap();
        assert_eq!(Ok(split.clone()), factorial(&v));
        assert_eq!(split.to_string().len(), 2568);
    }

    #[test]
    fn test_split_factorial_matches_factorial_fixed_width() {
        for v in -40i64..=40 {
            assert_eq!(split_factorial(&v), factorial(&v), "v={}", v);
        }
        for v in 0u8..=u8::MAX {
            assert_eq!(split_factorial(&v), factorial(&v), "v={}", v);
        }
        for v in i8::MIN..=i8::MAX {
            assert_eq!(split_factorial(&v), factorial(&v), "v={}", v);
        }
    }

    #[test]
    fn test_factorial_with_threshold() {
        for v in 0u64..=20 {
            for t in 0u64..=v {
                let expected = factorial(&v).unwrap() / factorial(&t).unwrap();
                assert_eq!(factorial_with_threshold(&v, &t), Ok(expected));
            }
        }
        assert_eq!(factorial_with_threshold(&0u64, &0u64), Ok(1));
        assert!(factorial_with_threshold(&5i64, &-1i64).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_falling_factorial() {
        for v in 0u64..=20 {
            for k in 0u64..=v {
                let expected = factorial(&v).unwrap() / factorial(&(v - k)).unwrap();
                assert_eq!(falling_factorial(&v, &k), Ok(expected), "v={} k={}", v, k);
            }
            assert_eq!(falling_factorial(&v, &(v + 1)), Ok(0));
        }
        assert_eq!(falling_factorial(&i64::MIN, &1), Ok(i64::MIN));
        assert!(falling_factorial(&i64::MIN, &2).is_err());
        assert!(falling_factorial(&5i64, &-1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_rising_factorial() {
        for v in 1u64..=10 {
            for k in 0u64..=10 {
                let expected = factorial(&(v + k - 1)).unwrap() / factorial(&(v - 1)).unwrap();
                assert_eq!(rising_factorial(&v, &k), Ok(expected), "v={} k={}", v, k);
            }
        }
        assert_eq!(rising_factorial(&0u64, &0u64), Ok(1));
        assert_eq!(rising_factorial(&-5i64, &5), Ok(-120));
        assert_eq!(rising_factorial(&-5i64, &6), Ok(0));
        assert_eq!(rising_factorial(&i64::MIN, &1), Ok(i64::MIN));
        assert!(rising_factorial(&u64::MAX, &2).unwrap_err().is_overflow());
    }

    #[test]
    fn test_falling_and_rising_are_mirrors() {
        // x^(k rising) = (-1)^k (-x)^(k falling)
        for v in 1i64..=12 {
            for k in 0i64..=8 {
                let rising = rising_factorial(&v, &k).unwrap();
                let falling = falling_factorial(&-v, &k).unwrap();
                let sign = if k % 2 == 0 { 1 } else { -1 };
                assert_eq!(rising, sign * falling);
            }
        }
    }
}
