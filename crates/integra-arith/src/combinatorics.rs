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


//! Permutation and combination counts.

use crate::check_non_negative;
use crate::factorial::falling_factorial;
use crate::number_theory::gcd;
use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Returns the number of ordered selections of `k` items out of `n`,
/// `n! / (n - k)!`. Selecting more items than available yields `0`.
///
/// # Errors
///
/// `OutOfRange` for negative `n` or `k`; `Overflow` if the count does not
/// fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::combinatorics::permutations;
///
/// assert_eq!(permutations(&10u32, &3u32), Ok(720));
/// assert_eq!(permutations(&5u32, &0u32), Ok(1));
/// assert_eq!(permutations(&3u32, &4u32), Ok(0));
/// ```
pub fn permutations<T>(n: &T, k: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(n, "n")?;
    check_non_negative(k, "k")?;
    falling_factorial(n, k)
}

/// Returns the binomial coefficient `n choose k`. Selecting more items than
/// available yields `0`.
///
/// Computed multiplicatively as `C(n - k + i, i)` for `i = 1..=k` with the
/// smaller of `k` and `n - k`. Each step divides out the common factor first,
/// so intermediates never exceed the result.
///
/// # Errors
///
/// `OutOfRange` for negative `n` or `k`; `Overflow` if the count does not
/// fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::combinatorics::combinations;
///
/// assert_eq!(combinations(&5u32, &2u32), Ok(10));
/// assert_eq!(combinations(&62u64, &31u64), Ok(465_428_353_255_261_088));
/// assert_eq!(combinations(&3u32, &4u32), Ok(0));
/// ```
pub fn combinations<T>(n: &T, k: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_non_negative(n, "n")?;
    check_non_negative(k, "k")?;
    if k > n {
        return Ok(T::zero());
    }
    let complement = n.clone() - k.clone();
    let k = if complement < *k { complement } else { k.clone() };
    let base = n.clone() - k.clone();

    let mut result = T::one();
    let mut i = T::one();
    while i <= k {
        // result * (base + i) is divisible by i.
        let common = gcd(&result, &i)?;
        let numerator = (base.clone() + i.clone()) / (i.clone() / common.clone());
        result = (result / common)
            .checked_mul_val(numerator)
            .ok_or(NumericError::overflow("combinations"))?;
        i = i + T::one();
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_pascal_triangle_u64() {
        let mut row = vec![1u64];
        for n in 0u64..=62 {
            for (k, &expected) in row.iter().enumerate() {
                assert_eq!(combinations(&n, &(k as u64)), Ok(expected), "C({}, {})", n, k);
            }
            let mut next = vec![1u64; row.len() + 1];
            for k in 1..row.len() {
                next[k] = row[k - 1] + row[k];
            }
            row = next;
        }
    }

    #[test]
    fn test_combinations_tight_overflow() {
        // C(67, 33) = 14_226_520_737_620_288_370 fits u64, C(68, 34) does not.
        assert_eq!(combinations(&67u64, &33u64), Ok(14_226_520_737_620_288_370));
        assert!(combinations(&68u64, &34u64).unwrap_err().is_overflow());
        assert_eq!(combinations(&255u8, &1u8), Ok(255));
        assert_eq!(combinations(&255u8, &254u8), Ok(255));
        assert!(combinations(&255u8, &2u8).is_err());
    }

    #[test]
    fn test_combinations_bigint() {
        let c = combinations(&BigInt::from(100), &BigInt::from(50)).unwrap();
        assert_eq!(c.to_string(), "100891344545564193334812497256");
    }

    #[test]
    fn test_permutations() {
        for n in 0u64..=15 {
            for k in 0u64..=n {
                let expected: u64 = (n - k + 1..=n).product();
                assert_eq!(permutations(&n, &k), Ok(expected));
            }
        }
        assert!(permutations(&-1i32, &0).unwrap_err().is_out_of_range());
        assert!(permutations(&5i32, &-1).is_err());
        assert!(permutations(&21u64, &21u64).unwrap_err().is_overflow());
    }

    #[test]
    fn test_combinations_domain() {
        assert!(combinations(&-5i32, &2).unwrap_err().is_out_of_range());
        assert!(combinations(&5i32, &-2).is_err());
        assert_eq!(combinations(&0u32, &0u32), Ok(1));
    }
}
