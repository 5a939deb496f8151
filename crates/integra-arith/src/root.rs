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


//! Integer square and n-th roots.
//!
//! Both roots run Newton's method downward from an estimate that is never
//! below the true root, which makes the iteration strictly decreasing until
//! it lands on `floor(v^(1/n))`. Intermediate values never exceed the input,
//! so fixed-width types cannot overflow.

use crate::{check_non_negative, checked_pow_usize};
use integra_core::rounding::Candidate;
use integra_core::{BinaryInteger, NumericError, NumericResult, RoundingMode};
use num_bigint::BigInt;

/// Returns `floor(sqrt(v))`.
///
/// Newton's method from `v >> 1`, iterating `x' = (x + v / x) >> 1` while
/// the estimate decreases.
///
/// # Errors
///
/// `OutOfRange` for negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::root::integer_sqrt;
///
/// assert_eq!(integer_sqrt(&0u32), Ok(0));
/// assert_eq!(integer_sqrt(&15u32), Ok(3));
/// assert_eq!(integer_sqrt(&16u32), Ok(4));
/// assert_eq!(integer_sqrt(&u64::MAX), Ok(u32::MAX as u64));
/// assert!(integer_sqrt(&-4i32).is_err());
/// ```
pub fn integer_sqrt<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(v, "value")?;
    if *v <= T::one() {
        return Ok(v.clone());
    }
    let mut x = v.clone() >> 1;
    loop {
        let y = (x.clone() + v.clone() / x.clone()) >> 1;
        if y >= x {
            return Ok(x);
        }
        x = y;
    }
}

/// Returns `floor(v^(1/n))`.
///
/// Newton's method for `x^n = v`. The step
/// `x' = ((n - 1) * x + v / x^(n-1)) / n` is evaluated as
/// `x - ceil((x - v / x^(n-1)) / n)` so no intermediate exceeds `x`.
/// A power `x^(n-1)` that overflows the type is larger than `v`, in which
/// case the quotient is `0`.
///
/// # Errors
///
/// `OutOfRange` for `n < 2` or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::root::integer_root_n;
///
/// assert_eq!(integer_root_n(&27u32, 3), Ok(3));
/// assert_eq!(integer_root_n(&26u32, 3), Ok(2));
/// assert_eq!(integer_root_n(&1_000_000u64, 6), Ok(10));
/// assert_eq!(integer_root_n(&u64::MAX, 64), Ok(1));
/// assert!(integer_root_n(&8u32, 1).is_err());
/// ```
pub fn integer_root_n<T>(v: &T, n: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if n < 2 {
        return Err(NumericError::out_of_range("n", "must be at least 2"));
    }
    check_non_negative(v, "value")?;
    if *v <= T::one() {
        return Ok(v.clone());
    }
    if n == 2 {
        return integer_sqrt(v);
    }

    // v < 2^bits, so the root is 1 whenever n >= bits.
    let bits = v.shortest_bit_length();
    if n >= bits {
        return Ok(T::one());
    }
    let n_value = T::from_usize(n).ok_or(NumericError::overflow("integer_root_n"))?;

    // The root is below 2^(bits / n) <= 2^ceil(bits / n).
    let mut x = T::one() << bits.div_ceil(n);
    loop {
        let quotient = match checked_pow_usize(&x, n - 1) {
            Some(power) => v.clone() / power,
            None => T::zero(),
        };
        if quotient >= x {
            return Ok(x);
        }
        let gap = x.clone() - quotient;
        let mut step = gap.clone() / n_value.clone();
        if !(gap % n_value.clone()).is_zero() {
            step = step + T::one();
        }
        x = x - step;
    }
}

/// Picks between `root` and `root + 1` for an inexact root of `v`.
fn round_root<T>(v: &T, root: T, n: usize, mode: RoundingMode) -> T
where
    T: BinaryInteger,
{
    let wide_v = v.widen_to_bigint();
    let wide_root = root.widen_to_bigint();
    let low = num_traits::pow(wide_root.clone(), n);
    if low == wide_v {
        return root;
    }
    let high = num_traits::pow(&wide_root + BigInt::from(1), n);
    let order = (&wide_v - &low).cmp(&(&high - &wide_v));
    match mode.choose(order, root.is_even()) {
        Candidate::TowardZero => root,
        // root + 1 <= v for every v >= 2 with an inexact root.
        Candidate::AwayFromZero => root + T::one(),
    }
}

/// Returns `sqrt(v)` rounded by `mode`.
///
/// `Nearest` compares `v - r^2` with `(r + 1)^2 - v`.
///
/// # Errors
///
/// `OutOfRange` for negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::root::integer_sqrt_rounded;
/// use integra_core::{RoundingMode, TieBreak};
///
/// assert_eq!(integer_sqrt_rounded(&10u32, RoundingMode::TowardZero), Ok(3));
/// assert_eq!(integer_sqrt_rounded(&10u32, RoundingMode::AwayFromZero), Ok(4));
/// assert_eq!(integer_sqrt_rounded(&9u32, RoundingMode::AwayFromZero), Ok(3));
/// assert_eq!(integer_sqrt_rounded(&13u32, RoundingMode::Nearest(TieBreak::AwayFromZero)), Ok(4));
/// ```
pub fn integer_sqrt_rounded<T>(v: &T, mode: RoundingMode) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let root = integer_sqrt(v)?;
    Ok(round_root(v, root, 2, mode))
}

/// Returns `v^(1/n)` rounded by `mode`.
///
/// # Errors
///
/// `OutOfRange` for `n < 2` or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::root::integer_root_rounded;
/// use integra_core::{RoundingMode, TieBreak};
///
/// let nearest = RoundingMode::Nearest(TieBreak::ToEven);
/// assert_eq!(integer_root_rounded(&30u32, 3, nearest), Ok(3));
/// assert_eq!(integer_root_rounded(&50u32, 3, nearest), Ok(4));
/// assert_eq!(integer_root_rounded(&9u32, 3, RoundingMode::AwayFromZero), Ok(3));
/// ```
pub fn integer_root_rounded<T>(v: &T, n: usize, mode: RoundingMode) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let root = integer_root_n(v, n)?;
    Ok(round_root(v, root, n, mode))
}

/// Returns `true` if `v = r^n` for some integer `r >= 0`.
///
/// # Errors
///
/// `OutOfRange` for `n < 2` or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::root::is_perfect_power;
///
/// assert_eq!(is_perfect_power(&64u32, 3), Ok(true));
/// assert_eq!(is_perfect_power(&63u32, 3), Ok(false));
/// assert_eq!(is_perfect_power(&0u32, 5), Ok(true));
/// ```
pub fn is_perfect_power<T>(v: &T, n: usize) -> NumericResult<bool>
where
    T: BinaryInteger,
{
    let root = integer_root_n(v, n)?;
    Ok(checked_pow_usize(&root, n).as_ref() == Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use integra_core::TieBreak;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn assert_sqrt_brackets(v: u64) {
        let r = integer_sqrt(&v).unwrap() as u128;
        let v = v as u128;
        assert!(r * r <= v && v < (r + 1) * (r + 1), "sqrt({}) = {}", v, r);
    }

    fn assert_root_brackets(v: u64, n: usize) {
        let r = integer_root_n(&v, n).unwrap();
        let wide = BigInt::from(v);
        let low = num_traits::pow(BigInt::from(r), n);
        let high = num_traits::pow(BigInt::from(r) + 1, n);
        assert!(low <= wide && wide < high, "root_{}({}) = {}", n, v, r);
    }

    #[test]
    fn test_integer_sqrt_exhaustive_u16() {
        for v in 0u16..=u16::MAX {
            let r = integer_sqrt(&v).unwrap() as u32;
            let v = v as u32;
            assert!(r * r <= v && v < (r + 1) * (r + 1));
        }
    }

    #[test]
    fn test_integer_sqrt_random_u64() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert_sqrt_brackets(rng.random());
        }
        for v in [u64::MAX, u64::MAX - 1, (1 << 32) * (1 << 32) - 1, 1 << 62] {
            assert_sqrt_brackets(v);
        }
    }

    #[test]
    fn test_integer_sqrt_signed_and_bigint() {
        assert_eq!(integer_sqrt(&i8::MAX), Ok(11));
        assert!(integer_sqrt(&i8::MIN).unwrap_err().is_out_of_range());
        let big = BigInt::from(10).pow(60);
        assert_eq!(integer_sqrt(&big), Ok(BigInt::from(10).pow(30)));
        assert_eq!(integer_sqrt(&(&big - 1)), Ok(BigInt::from(10).pow(30) - 1));
    }

    #[test]
    fn test_integer_root_n_small_exhaustive() {
        for n in 2..=9 {
            for v in 0u64..5000 {
                assert_root_brackets(v, n);
            }
        }
    }

    #[test]
    fn test_integer_root_n_random_u64() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let v: u64 = rng.random();
            let n = rng.random_range(2..70);
            assert_root_brackets(v, n);
        }
        for n in 2..=64 {
            assert_root_brackets(u64::MAX, n);
        }
    }

    #[test]
    fn test_integer_root_n_exact_powers() {
        for base in 2u64..50 {
            for n in 3..8 {
                if let Some(p) = base.checked_pow(n as u32) {
                    assert_eq!(integer_root_n(&p, n), Ok(base));
                    assert_eq!(integer_root_n(&(p - 1), n), Ok(base - 1));
                }
            }
        }
    }

    #[test]
    fn test_integer_root_n_tight_types() {
        for v in 0u8..=u8::MAX {
            for n in 2..10 {
                let r = integer_root_n(&v, n).unwrap() as u32;
                assert!(r.pow(n as u32) <= v as u32 && (v as u32) < (r + 1).pow(n as u32));
            }
        }
        assert_eq!(integer_root_n(&i8::MAX, 3), Ok(5));
        assert_eq!(integer_root_n(&i8::MAX, 7), Ok(1));
    }

    #[test]
    fn test_integer_root_n_domain() {
        assert!(integer_root_n(&8u32, 0).unwrap_err().is_out_of_range());
        assert!(integer_root_n(&8u32, 1).is_err());
        assert!(integer_root_n(&-8i32, 3).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_integer_root_n_bigint() {
        let base = BigInt::from(123_456_789u64);
        let p = num_traits::pow(base.clone(), 7);
        assert_eq!(integer_root_n(&p, 7), Ok(base.clone()));
        assert_eq!(integer_root_n(&(&p - 1), 7), Ok(&base - 1));
        assert_eq!(integer_root_n(&(&p + 1), 7), Ok(base));
    }

    #[test]
    fn test_rounded_roots() {
        let nearest = RoundingMode::Nearest(TieBreak::AwayFromZero);
        // 3^2 = 9, 4^2 = 16: 12 is closer to 9, 13 closer to 16.
        assert_eq!(integer_sqrt_rounded(&12u32, nearest), Ok(3));
        assert_eq!(integer_sqrt_rounded(&13u32, nearest), Ok(4));
        // 2^2 = 4, 3^2 = 9: no integer midpoint; 6 -> 2, 7 -> 3.
        assert_eq!(integer_sqrt_rounded(&6u32, nearest), Ok(2));
        assert_eq!(integer_sqrt_rounded(&7u32, nearest), Ok(3));
        assert_eq!(integer_sqrt_rounded(&u8::MAX, RoundingMode::AwayFromZero), Ok(16));
        assert_eq!(integer_root_rounded(&u64::MAX, 2, RoundingMode::AwayFromZero), Ok(1 << 32));
        assert_eq!(integer_root_rounded(&100u32, 3, RoundingMode::TowardZero), Ok(4));
        assert_eq!(integer_root_rounded(&100u32, 3, RoundingMode::AwayFromZero), Ok(5));
        assert_eq!(integer_root_rounded(&100u32, 3, nearest), Ok(5));
    }

    #[test]
    fn test_rounded_roots_never_tie() {
        // r^n + (r+1)^n is odd, so no integer is equidistant from both.
        for v in 2u32..10_000 {
            let to_even = integer_sqrt_rounded(&v, RoundingMode::Nearest(TieBreak::ToEven));
            let away = integer_sqrt_rounded(&v, RoundingMode::Nearest(TieBreak::AwayFromZero));
            assert_eq!(to_even, away);
        }
    }

    #[test]
    fn test_is_perfect_power() {
        for v in 0u32..100_000 {
            let r = integer_sqrt(&v).unwrap();
            assert_eq!(is_perfect_power(&v, 2), Ok(r * r == v));
        }
        assert_eq!(is_perfect_power(&u64::MAX, 2), Ok(false));
        assert_eq!(is_perfect_power(&(1u64 << 63), 9), Ok(true));
        assert_eq!(is_perfect_power(&(1u64 << 63), 2), Ok(false));
    }
}
