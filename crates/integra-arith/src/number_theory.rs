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


//! GCD, LCM, factorization and primality.
//!
//! Trial division skips multiples of 2, 3 and 5: after testing those three
//! primes, candidates start at 7 and advance by the repeating wheel
//! `4, 2, 4, 2, 4, 6, 2, 6`, which visits exactly the integers coprime to 30.
//! Candidates are bounded by `c <= n / c` rather than `c * c <= n`, so the
//! bound itself cannot overflow.

use integra_bits::count::trailing_zero_count;
use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Increments of the 2-3-5 wheel, starting from 7.
const WHEEL: [usize; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Rejects a value that is zero or negative.
fn check_positive<T>(v: &T) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if v.is_zero() || v.is_negative() {
        return Err(NumericError::out_of_range("value", "must be positive"));
    }
    Ok(())
}

/// Small constants of `T`; every `BinaryInteger` holds values up to 127.
fn small<T>(n: usize) -> T
where
    T: BinaryInteger,
{
    T::from_usize(n).unwrap_or_else(T::zero)
}

/// Returns the absolute value, failing for a signed minimum.
fn magnitude<T>(v: T, operation: &'static str) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if !v.is_negative() {
        return Ok(v);
    }
    v.checked_neg_val().ok_or(NumericError::overflow(operation))
}

/// Returns the greatest common divisor of `a` and `b`, always non-negative.
///
/// `gcd(0, 0) = 0`.
///
/// # Errors
///
/// `Overflow` if the result is the magnitude of a signed minimum, e.g.
/// `gcd(i32::MIN, 0)`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::number_theory::gcd;
///
/// assert_eq!(gcd(&48u32, &18u32), Ok(6));
/// assert_eq!(gcd(&-48i32, &18i32), Ok(6));
/// assert_eq!(gcd(&0u32, &7u32), Ok(7));
/// ```
pub fn gcd<T>(a: &T, b: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        // MIN % -1 overflows in two's complement; its true value is 0.
        let remainder = a.checked_rem_val(b.clone()).unwrap_or_else(T::zero);
        a = b;
        b = remainder;
    }
    magnitude(a, "gcd")
}

/// Returns the least common multiple of `a` and `b`, always non-negative.
///
/// `lcm(a, 0) = 0`.
///
/// # Errors
///
/// `Overflow` if the result does not fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::number_theory::lcm;
///
/// assert_eq!(lcm(&4u32, &6u32), Ok(12));
/// assert_eq!(lcm(&-4i32, &6i32), Ok(12));
/// assert!(lcm(&200u8, &3u8).is_err());
/// ```
pub fn lcm<T>(a: &T, b: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let divisor = gcd(a, b)?;
    let reduced = magnitude(a.clone() / divisor, "lcm")?;
    let other = magnitude(b.clone(), "lcm")?;
    reduced
        .checked_mul_val(other)
        .ok_or(NumericError::overflow("lcm"))
}

/// Divides every factor `p` out of `n`, recording each one.
fn divide_out<T>(n: &mut T, p: &T, factors: &mut Vec<T>)
where
    T: BinaryInteger,
{
    while (n.clone() % p.clone()).is_zero() {
        factors.push(p.clone());
        *n = n.clone() / p.clone();
    }
}

/// Returns the prime factorization of `v` in ascending order, with
/// multiplicity. `1` has no prime factors.
///
/// # Errors
///
/// `OutOfRange` for `v <= 0`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::number_theory::prime_factors;
///
/// assert_eq!(prime_factors(&360u32), Ok(vec![2, 2, 2, 3, 3, 5]));
/// assert_eq!(prime_factors(&97u32), Ok(vec![97]));
/// assert_eq!(prime_factors(&1u32), Ok(vec![]));
/// assert!(prime_factors(&0u32).is_err());
/// ```
pub fn prime_factors<T>(v: &T) -> NumericResult<Vec<T>>
where
    T: BinaryInteger,
{
    check_positive(v)?;
    let mut factors = Vec::new();
    // Factors of two are the trailing zero bits.
    let twos = trailing_zero_count(v);
    factors.extend(std::iter::repeat_n(small::<T>(2), twos));
    let mut n = v.clone() >> twos;
    for p in [3, 5] {
        divide_out(&mut n, &small(p), &mut factors);
    }
    let mut candidate: T = small(7);
    let mut turn = 0;
    while candidate <= n.clone() / candidate.clone() {
        divide_out(&mut n, &candidate, &mut factors);
        candidate = candidate + small(WHEEL[turn % WHEEL.len()]);
        turn += 1;
    }
    if n > T::one() {
        factors.push(n);
    }
    Ok(factors)
}

/// Returns the divisors of `v` in ascending order. With `proper`, `v` itself
/// is excluded.
///
/// # Errors
///
/// `OutOfRange` for `v <= 0`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::number_theory::factors;
///
/// assert_eq!(factors(&28u32, false), Ok(vec![1, 2, 4, 7, 14, 28]));
/// assert_eq!(factors(&28u32, true), Ok(vec![1, 2, 4, 7, 14]));
/// assert_eq!(factors(&1u32, true), Ok(vec![]));
/// ```
pub fn factors<T>(v: &T, proper: bool) -> NumericResult<Vec<T>>
where
    T: BinaryInteger,
{
    check_positive(v)?;
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = T::one();
    while i <= v.clone() / i.clone() {
        if (v.clone() % i.clone()).is_zero() {
            let pair = v.clone() / i.clone();
            if pair != i {
                high.push(pair);
            }
            low.push(i.clone());
        }
        i = i + T::one();
    }
    low.extend(high.into_iter().rev());
    if proper {
        low.pop();
    }
    Ok(low)
}

/// Returns `true` if `v` is prime. Values below two are not prime.
///
/// # Examples
///
/// ```rust
/// use integra_arith::number_theory::is_prime;
///
/// assert!(is_prime(&2u32));
/// assert!(is_prime(&2_147_483_647i32));
/// assert!(!is_prime(&1u32));
/// assert!(!is_prime(&-7i32));
/// ```
pub fn is_prime<T>(v: &T) -> bool
where
    T: BinaryInteger,
{
    if *v <= T::one() {
        return false;
    }
    for p in [2, 3, 5] {
        let p: T = small(p);
        if *v == p {
            return true;
        }
        if (v.clone() % p).is_zero() {
            return false;
        }
    }
    let mut candidate: T = small(7);
    let mut turn = 0;
    while candidate <= v.clone() / candidate.clone() {
        if (v.clone() % candidate.clone()).is_zero() {
            return false;
        }
        candidate = candidate + small(WHEEL[turn % WHEEL.len()]);
        turn += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn sieve(limit: usize) -> Vec<bool> {
        let mut prime = vec![true; limit];
        prime[0] = false;
        prime[1] = false;
        let mut i = 2;
        while i * i < limit {
            if prime[i] {
                (i * i..limit).step_by(i).for_each(|j| prime[j] = false);
            }
            i += 1;
        }
        prime
    }

    #[test]
    fn test_spec_scenarios() {
        assert_eq!(prime_factors(&360i64), Ok(vec![2, 2, 2, 3, 3, 5]));
        assert_eq!(gcd(&48i64, &18), Ok(6));
        assert_eq!(lcm(&4i64, &6), Ok(12));
    }

    #[test]
    fn test_gcd_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let a: i64 = rng.random_range(-1_000_000..1_000_000);
            let b: i64 = rng.random_range(-1_000_000..1_000_000);
            let g = gcd(&a, &b).unwrap();
            assert!(g >= 0);
            if g != 0 {
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
                assert_eq!(gcd(&(a / g), &(b / g)), Ok(1));
            }
        }
    }

    #[test]
    fn test_gcd_edge_cases() {
        assert_eq!(gcd(&0u32, &0u32), Ok(0));
        assert_eq!(gcd(&i32::MIN, &-1), Ok(1));
        assert_eq!(gcd(&i32::MIN, &6), Ok(2));
        assert!(gcd(&i32::MIN, &0).unwrap_err().is_overflow());
        assert!(gcd(&i32::MIN, &i32::MIN).is_err());
        assert_eq!(gcd(&u64::MAX, &(u64::MAX - 1)), Ok(1));
    }

    #[test]
    fn test_lcm() {
        for a in 1u32..100 {
            for b in 1u32..100 {
                let l = lcm(&a, &b).unwrap();
                assert_eq!(l % a, 0);
                assert_eq!(l % b, 0);
                assert_eq!(l * gcd(&a, &b).unwrap(), a * b);
            }
        }
        assert_eq!(lcm(&0u32, &5u32), Ok(0));
        assert_eq!(lcm(&-3i32, &-5i32), Ok(15));
        assert!(lcm(&i32::MIN, &3).unwrap_err().is_overflow());
    }

    #[test]
    fn test_prime_factors_reconstruct() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let v: u64 = rng.random_range(1..10_000_000_000);
            let factors = prime_factors(&v).unwrap();
            assert_eq!(factors.iter().product::<u64>(), v);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            assert!(factors.iter().all(is_prime));
        }
    }

    #[test]
    fn test_prime_factors_type_limits() {
        assert_eq!(prime_factors(&u8::MAX), Ok(vec![3, 5, 17]));
        assert_eq!(prime_factors(&251u8), Ok(vec![251]));
        assert_eq!(prime_factors(&i8::MAX), Ok(vec![127]));
        assert_eq!(prime_factors(&u64::MAX), Ok(vec![3, 5, 17, 257, 641, 65537, 6_700_417]));
        assert_eq!(prime_factors(&4_294_967_291u64), Ok(vec![4_294_967_291]));
        assert!(prime_factors(&-12i32).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_prime_factors_bigint() {
        let v = BigInt::from(2).pow(10) * BigInt::from(1_000_003) * BigInt::from(1_000_003);
        let mut expected = vec![BigInt::from(2); 10];
        expected.push(BigInt::from(1_000_003));
        expected.push(BigInt::from(1_000_003));
        assert_eq!(prime_factors(&v), Ok(expected));
    }

    #[test]
    fn test_factors() {
        for v in 1u32..2000 {
            let brute: Vec<u32> = (1..=v).filter(|d| v % d == 0).collect();
            assert_eq!(factors(&v, false), Ok(brute.clone()));
            assert_eq!(factors(&v, true), Ok(brute[..brute.len() - 1].to_vec()));
        }
        assert_eq!(factors(&u8::MAX, false), Ok(vec![1, 3, 5, 15, 17, 51, 85, 255]));
        assert!(factors(&0u32, false).is_err());
    }

    #[test]
    fn test_is_prime_matches_sieve() {
        let prime = sieve(100_000);
        for (v, &expected) in prime.iter().enumerate() {
            assert_eq!(is_prime(&(v as u32)), expected, "v={}", v);
        }
        for v in 0u8..=u8::MAX {
            assert_eq!(is_prime(&v), prime[v as usize]);
        }
        assert!(!is_prime(&i64::MIN));
        assert!(is_prime(&BigInt::from(1_000_000_007)));
    }
}
