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


//! Radix digit operations.
//!
//! Digits are always those of `|v|` and lie in `[0, radix)`. Negative
//! values are decomposed in the negative domain (remainders are negated one
//! at a time), so the minimum of a signed type is handled without taking its
//! magnitude. The digit list of `0` is `[0]`, never empty.

use crate::logarithm::log_floor;
use crate::{check_non_negative, check_radix};
use integra_core::{BinaryInteger, NumericError, NumericResult};
use log::debug;

/// Least-significant-first digits of `|v|` for a validated radix.
fn magnitude_digits<T>(v: &T, radix: &T) -> Vec<T>
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return vec![T::zero()];
    }
    let negative = v.is_negative();
    let mut digits = Vec::new();
    let mut m = v.clone();
    while !m.is_zero() {
        let remainder = m.clone() % radix.clone();
        digits.push(if negative {
            T::zero() - remainder
        } else {
            remainder
        });
        m = m / radix.clone();
    }
    digits
}

/// Digit sum of a non-negative `v` for a validated radix.
///
/// Never overflows: the digit sum of `v` is at most `v`.
fn sum_of_digits<T>(v: &T, radix: &T) -> T
where
    T: BinaryInteger,
{
    let mut sum = T::zero();
    let mut m = v.clone();
    while !m.is_zero() {
        sum = sum + m.clone() % radix.clone();
        m = m / radix.clone();
    }
    sum
}

/// Returns the digits of `|v|`, least significant first.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digits;
///
/// assert_eq!(digits(&1234u32, &10), Ok(vec![4, 3, 2, 1]));
/// assert_eq!(digits(&-6i8, &2), Ok(vec![0, 1, 1]));
/// assert_eq!(digits(&0u32, &10), Ok(vec![0]));
/// ```
pub fn digits<T>(v: &T, radix: &T) -> NumericResult<Vec<T>>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    Ok(magnitude_digits(v, radix))
}

/// Returns the digits of `|v|`, most significant first.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digits_reversed;
///
/// assert_eq!(digits_reversed(&1234u32, &10), Ok(vec![1, 2, 3, 4]));
/// assert_eq!(digits_reversed(&255u8, &16), Ok(vec![15, 15]));
/// ```
pub fn digits_reversed<T>(v: &T, radix: &T) -> NumericResult<Vec<T>>
where
    T: BinaryInteger,
{
    let mut digits = digits(v, radix)?;
    digits.reverse();
    Ok(digits)
}

/// Returns the number of digits of `|v|`; `0` has one digit.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digit_count;
///
/// assert_eq!(digit_count(&0u32, &10), Ok(1));
/// assert_eq!(digit_count(&999u32, &10), Ok(3));
/// assert_eq!(digit_count(&1000u32, &10), Ok(4));
/// assert_eq!(digit_count(&i64::MIN, &2), Ok(64));
/// ```
pub fn digit_count<T>(v: &T, radix: &T) -> NumericResult<usize>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() {
        return Ok(1);
    }
    Ok(log_floor(v, radix).exponent + 1)
}

/// Returns the sum of the digits of `v`.
///
/// # Errors
///
/// `OutOfRange` for a radix below two or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digit_sum;
///
/// assert_eq!(digit_sum(&1234u32, &10), Ok(10));
/// assert_eq!(digit_sum(&0xFFu32, &16), Ok(30));
/// assert!(digit_sum(&-12i32, &10).is_err());
/// ```
pub fn digit_sum<T>(v: &T, radix: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    check_non_negative(v, "value")?;
    Ok(sum_of_digits(v, radix))
}

/// Returns `digit * radix^position` for each digit of `v`, least significant
/// first, each carrying the sign of `v`. The values sum to `v`.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digit_place_values;
///
/// assert_eq!(digit_place_values(&1204u32, &10), Ok(vec![4, 0, 200, 1000]));
/// assert_eq!(digit_place_values(&-128i8, &10), Ok(vec![-8, -20, -100]));
/// ```
pub fn digit_place_values<T>(v: &T, radix: &T) -> NumericResult<Vec<T>>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    if v.is_zero() {
        return Ok(vec![T::zero()]);
    }
    let negative = v.is_negative();
    // |digit * place| <= |v|, so no product below can overflow.
    let mut place = if negative {
        T::zero() - T::one()
    } else {
        T::one()
    };
    let mut values = Vec::new();
    let mut m = v.clone();
    loop {
        let remainder = m.clone() % radix.clone();
        let digit = if negative {
            T::zero() - remainder
        } else {
            remainder
        };
        values.push(digit * place.clone());
        m = m / radix.clone();
        if m.is_zero() {
            return Ok(values);
        }
        place = place * radix.clone();
    }
}

/// Returns the integer whose digits are those of `v` in reverse order, with
/// the sign of `v`. Trailing zeros of `v` vanish.
///
/// # Errors
///
/// `OutOfRange` for a radix below two; `Overflow` if the reversal does not
/// fit.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::reverse_digits;
///
/// assert_eq!(reverse_digits(&1234u32, &10), Ok(4321));
/// assert_eq!(reverse_digits(&-120i32, &10), Ok(-21));
/// assert_eq!(reverse_digits(&0b1101u8, &2), Ok(0b1011));
/// assert!(reverse_digits(&199u8, &10).is_err());
/// ```
pub fn reverse_digits<T>(v: &T, radix: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    let overflow = || NumericError::overflow("reverse_digits");
    let mut reversed = T::zero();
    let mut m = v.clone();
    while !m.is_zero() {
        // The remainder carries the sign of m, keeping the accumulator in the
        // same domain as v.
        let remainder = m.clone() % radix.clone();
        reversed = reversed
            .checked_mul_val(radix.clone())
            .and_then(|r| r.checked_add_val(remainder))
            .ok_or_else(overflow)?;
        m = m / radix.clone();
    }
    Ok(reversed)
}

/// Returns `true` if every pair of adjacent digits of `|v|` differs by at
/// most one.
///
/// # Errors
///
/// `OutOfRange` for a radix below two.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::is_jumbled;
///
/// assert_eq!(is_jumbled(&8987u32, &10), Ok(true));
/// assert_eq!(is_jumbled(&1357u32, &10), Ok(false));
/// assert_eq!(is_jumbled(&7u32, &10), Ok(true));
/// ```
pub fn is_jumbled<T>(v: &T, radix: &T) -> NumericResult<bool>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    let digits = magnitude_digits(v, radix);
    Ok(digits.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        // Digits are below the radix, so adding one cannot overflow.
        *a <= b.clone() + T::one() && *b <= a.clone() + T::one()
    }))
}

/// Returns `true` if no `n >= 0` satisfies `n + digit_sum(n) = v`.
///
/// Any generator `n` has at most `digit_count(v)` digits, so its digit sum
/// is at most `(radix - 1) * digit_count(v)`. Only the window
/// `[v - (radix - 1) * digit_count(v), v)` is searched. `0` generates itself
/// and is not a self number.
///
/// # Errors
///
/// `OutOfRange` for a radix below two or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::is_self_number;
///
/// assert_eq!(is_self_number(&20u32, &10), Ok(true));
/// assert_eq!(is_self_number(&21u32, &10), Ok(false)); // 15 + 1 + 5
/// assert_eq!(is_self_number(&1u32, &2), Ok(true));
/// ```
pub fn is_self_number<T>(v: &T, radix: &T) -> NumericResult<bool>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    check_non_negative(v, "value")?;
    if v.is_zero() {
        return Ok(false);
    }

    let max_digit_sum = T::from_usize(digit_count(v, radix)?)
        .and_then(|count| (radix.clone() - T::one()).checked_mul_val(count));
    let mut n = match max_digit_sum {
        Some(bound) if bound < *v => v.clone() - bound,
        _ => T::zero(),
    };
    debug!("self number search for {} in radix {} starts at {}", v, radix, n);

    while n < *v {
        let generated = n.clone().checked_add_val(sum_of_digits(&n, radix));
        if generated.as_ref() == Some(v) {
            return Ok(false);
        }
        n = n + T::one();
    }
    Ok(true)
}

/// Returns the digital root of `v`: the single digit reached by repeatedly
/// summing digits.
///
/// # Errors
///
/// `OutOfRange` for a radix below two or negative `v`.
///
/// # Examples
///
/// ```rust
/// use integra_arith::digits::digital_root;
///
/// assert_eq!(digital_root(&942u32, &10), Ok(6));
/// assert_eq!(digital_root(&0u32, &10), Ok(0));
/// assert_eq!(digital_root(&0xFFu32, &16), Ok(15));
/// ```
pub fn digital_root<T>(v: &T, radix: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_radix(radix)?;
    check_non_negative(v, "value")?;
    let mut root = v.clone();
    while root >= *radix {
        root = sum_of_digits(&root, radix);
    }
    Ok(root)
}
