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


//! Modular arithmetic that never overflows.
//!
//! Residues are kept in `[0, modulus)`. When a product `a * b` does not fit
//! the type, it is rebuilt by doubling and adding, where every addition
//! `x + y (mod m)` is computed as `x - (m - y)` whenever the plain sum would
//! reach `m`. No intermediate ever exceeds `m`.

use crate::check_non_negative;
use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Rejects a modulus that is zero or negative.
fn check_modulus<T>(modulus: &T) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if modulus.is_zero() || modulus.is_negative() {
        return Err(NumericError::out_of_range("modulus", "must be positive"));
    }
    Ok(())
}

/// `(x + y) mod m` for `x, y` in `[0, m)`.
#[inline]
fn add_mod<T>(x: T, y: T, m: &T) -> T
where
    T: BinaryInteger,
{
    let gap = m.clone() - y.clone();
    if x >= gap { x - gap } else { x + y }
}

/// `(x - y) mod m` for `x, y` in `[0, m)`.
#[inline]
fn sub_mod<T>(x: T, y: T, m: &T) -> T
where
    T: BinaryInteger,
{
    if x >= y {
        x - y
    } else {
        m.clone() - (y - x)
    }
}

/// `(a * b) mod m` for reduced `a, b` and a valid modulus.
fn mul_reduced<T>(a: T, b: T, m: &T) -> T
where
    T: BinaryInteger,
{
    if let Some(product) = a.clone().checked_mul_val(b.clone()) {
        return product % m.clone();
    }
    let mut result = T::zero();
    let mut addend = a;
    let mut multiplier = b;
    while !multiplier.is_zero() {
        if !multiplier.is_even() {
            result = add_mod(result, addend.clone(), m);
        }
        addend = add_mod(addend.clone(), addend, m);
        multiplier = multiplier >> 1;
    }
    result
}

/// Returns `(a * b) mod modulus` without intermediate overflow.
///
/// # Errors
///
/// `OutOfRange` for negative `a` or `b`, or a modulus that is not positive.
///
/// # Examples
///
/// ```rust
/// use integra_arith::modular::mul_mod;
///
/// assert_eq!(mul_mod(&7u32, &8u32, &5u32), Ok(1));
/// assert_eq!(mul_mod(&u64::MAX, &u64::MAX, &(u64::MAX - 1)), Ok(1));
/// assert_eq!(mul_mod(&200u8, &200u8, &251u8), Ok(91));
/// ```
pub fn mul_mod<T>(a: &T, b: &T, modulus: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(a, "a")?;
    check_non_negative(b, "b")?;
    check_modulus(modulus)?;
    Ok(mul_reduced(
        a.clone() % modulus.clone(),
        b.clone() % modulus.clone(),
        modulus,
    ))
}

/// Returns `base^exponent mod modulus` by square-and-multiply.
///
/// A modulus of one yields `0` regardless of the other inputs.
///
/// # Errors
///
/// `OutOfRange` for a negative base or exponent, or a modulus that is not
/// positive.
///
/// # Examples
///
/// ```rust
/// use integra_arith::modular::pow_mod;
///
/// assert_eq!(pow_mod(&4u32, &13u32, &497u32), Ok(445));
/// assert_eq!(pow_mod(&2u64, &(u64::MAX), &1_000_000_007u64), Ok(981_530_768));
/// assert_eq!(pow_mod(&5u32, &0u32, &1u32), Ok(0));
/// ```
pub fn pow_mod<T>(base: &T, exponent: &T, modulus: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(base, "base")?;
    check_non_negative(exponent, "exponent")?;
    check_modulus(modulus)?;
    if modulus.is_one() {
        return Ok(T::zero());
    }
    let mut result = T::one();
    let mut square = base.clone() % modulus.clone();
    let mut e = exponent.clone();
    while !e.is_zero() {
        if !e.is_even() {
            result = mul_reduced(result, square.clone(), modulus);
        }
        e = e >> 1;
        if !e.is_zero() {
            square = mul_reduced(square.clone(), square, modulus);
        }
    }
    Ok(result)
}

/// Returns the inverse of `a` modulo `modulus` in `[0, modulus)`, or
/// `Ok(None)` when `gcd(a, modulus) != 1`.
///
/// Negative `a` is first reduced into `[0, modulus)`. The extended Euclidean
/// algorithm tracks only the Bezout coefficient of `a`, kept reduced modulo
/// `modulus` so it never overflows.
///
/// # Errors
///
/// `OutOfRange` for a modulus that is not positive.
///
/// # Examples
///
/// ```rust
/// use integra_arith::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(&3u32, &7u32), Ok(Some(5)));
/// assert_eq!(mod_inverse(&-3i32, &7i32), Ok(Some(2)));
/// assert_eq!(mod_inverse(&6u32, &9u32), Ok(None));
/// ```
pub fn mod_inverse<T>(a: &T, modulus: &T) -> NumericResult<Option<T>>
where
    T: BinaryInteger,
{
    check_modulus(modulus)?;
    let mut reduced = a.clone() % modulus.clone();
    if reduced.is_negative() {
        reduced = reduced + modulus.clone();
    }

    let (mut r0, mut r1) = (modulus.clone(), reduced);
    let (mut t0, mut t1) = (T::zero(), T::one() % modulus.clone());
    while !r1.is_zero() {
        let q = r0.clone() / r1.clone();
        let r2 = r0 - q.clone() * r1.clone();
        r0 = r1;
        r1 = r2;
        let t2 = sub_mod(
            t0,
            mul_reduced(q % modulus.clone(), t1.clone(), modulus),
            modulus,
        );
        t0 = t1;
        t1 = t2;
    }

    if r0.is_one() { Ok(Some(t0)) } else { Ok(None) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    #[test]
    fn test_mul_mod_matches_u128() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a: u64 = rng.random();
            let b: u64 = rng.random();
            let m: u64 = rng.random_range(1..=u64::MAX);
            let expected = ((a as u128 * b as u128) % m as u128) as u64;
            assert_eq!(mul_mod(&a, &b, &m), Ok(expected));
        }
    }

    #[test]
    fn test_mul_mod_exhaustive_u8() {
        for m in 1u8..=u8::MAX {
            for a in (0u8..=u8::MAX).step_by(7) {
                for b in (0u8..=u8::MAX).step_by(5) {
                    let expected = (a as u32 * b as u32 % m as u32) as u8;
                    assert_eq!(mul_mod(&a, &b, &m), Ok(expected));
                }
            }
        }
    }

    #[test]
    fn test_mul_mod_signed_near_max() {
        let m = i64::MAX;
        let a = i64::MAX - 1;
        // (m - 1)^2 = 1 (mod m)
        assert_eq!(mul_mod(&a, &a, &m), Ok(1));
        assert_eq!(mul_mod(&i8::MAX, &i8::MAX, &(i8::MAX - 2)), Ok(4));
    }

    #[test]
    fn test_mul_mod_domain() {
        assert!(mul_mod(&-1i32, &2, &5).unwrap_err().is_out_of_range());
        assert!(mul_mod(&1i32, &-2, &5).is_err());
        assert!(mul_mod(&1u32, &2, &0).is_err());
        assert!(mul_mod(&1i32, &2, &-5).is_err());
    }

    #[test]
    fn test_pow_mod() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let base: u64 = rng.random();
            let exponent: u64 = rng.random_range(0..10_000);
            let m: u64 = rng.random_range(1..=u64::MAX);
            let expected = BigInt::from(base)
                .modpow(&BigInt::from(exponent), &BigInt::from(m));
            assert_eq!(
                BigInt::from(pow_mod(&base, &exponent, &m).unwrap()),
                expected
            );
        }
    }

    #[test]
    fn test_pow_mod_edge_cases() {
        assert_eq!(pow_mod(&0u32, &0u32, &7u32), Ok(1));
        assert_eq!(pow_mod(&0u32, &5u32, &7u32), Ok(0));
        assert_eq!(pow_mod(&123u32, &456u32, &1u32), Ok(0));
        assert!(pow_mod(&2i32, &-1, &7).unwrap_err().is_out_of_range());
        assert!(pow_mod(&2u32, &1, &0).is_err());
        // Fermat: a^(p-1) = 1 (mod p)
        let p = 1_000_000_007u64;
        for a in 1u64..200 {
            assert_eq!(pow_mod(&a, &(p - 1), &p), Ok(1));
        }
    }

    #[test]
    fn test_mod_inverse_property() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut checked = 0;
        while checked < 5000 {
            let m: u64 = rng.random_range(2..=u64::MAX);
            let a: u64 = rng.random();
            if gcd_u64(a, m) != 1 {
                assert_eq!(mod_inverse(&a, &m), Ok(None));
                continue;
            }
            let inv = mod_inverse(&a, &m).unwrap().expect("coprime inputs have an inverse");
            assert!(inv < m);
            assert_eq!(mul_mod(&a, &inv, &m), Ok(1));
            checked += 1;
        }
    }

    #[test]
    fn test_mod_inverse_small_moduli_exhaustive() {
        for m in 2u8..=u8::MAX {
            for a in 0u8..=u8::MAX {
                let inverse = mod_inverse(&a, &m).unwrap();
                let brute = (0..m).find(|&x| (a as u32 * x as u32) % m as u32 == 1);
                assert_eq!(inverse, brute, "a={} m={}", a, m);
            }
        }
    }

    #[test]
    fn test_mod_inverse_edge_cases() {
        assert_eq!(mod_inverse(&5u32, &1u32), Ok(Some(0)));
        assert_eq!(mod_inverse(&0u32, &7u32), Ok(None));
        assert_eq!(mod_inverse(&i64::MIN, &3i64), Ok(Some(1)));
        assert!(mod_inverse(&3i32, &0).unwrap_err().is_out_of_range());
        assert!(mod_inverse(&3i32, &-7).is_err());
        let m = BigInt::from(2).pow(127) - 1;
        let a = BigInt::from(123_456_789);
        let inv = mod_inverse(&a, &m).unwrap().unwrap();
        assert_eq!(mul_mod(&a, &inv, &m), Ok(BigInt::from(1)));
    }
}
