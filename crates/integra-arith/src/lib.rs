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


//! # Integra Arith
//!
//! Exact integer arithmetic generic over every [`BinaryInteger`]: integer
//! logarithms, roots and powers, radix digit operations, modular arithmetic,
//! combinatorics and elementary number theory.
//!
//! No routine ever returns a floating-point approximation. Where a float is
//! used as a shortcut (the logarithm fast path) its answer is validated with
//! integer arithmetic before it is trusted.
//!
//! ## Modules
//!
//! - `logarithm`: Integer logarithms in an arbitrary radix, with rounding modes.
//! - `pow`: Exponentiation by squaring.
//! - `root`: Integer square and n-th roots (Newton's method).
//! - `digits`: Digit extraction, sums, place values, reversal and the
//!   jumbled / self number predicates.
//! - `modular`: Overflow-free modular multiplication, exponentiation and
//!   inverses.
//! - `factorial`: Iterative and product-tree factorials, falling and rising
//!   factorials.
//! - `combinatorics`: Permutation and combination counts.
//! - `number_theory`: GCD, LCM, wheel factorization, divisors and primality.
//!
//! ## Errors
//!
//! Every fallible routine returns a [`NumericResult`]. Domain violations
//! (negative input, radix below two, zero modulus) are
//! [`NumericError::OutOfRange`]; results that do not fit a fixed-width type
//! are [`NumericError::Overflow`].
//!
//! [`BinaryInteger`]: integra_core::BinaryInteger
//! [`NumericResult`]: integra_core::NumericResult
//! [`NumericError::OutOfRange`]: integra_core::NumericError::OutOfRange
//! [`NumericError::Overflow`]: integra_core::NumericError::Overflow

pub mod combinatorics;
pub mod digits;
pub mod factorial;
pub mod logarithm;
pub mod modular;
pub mod number_theory;
pub mod pow;
pub mod root;

use integra_core::{BinaryInteger, NumericError, NumericResult};

/// Rejects a radix below two.
#[inline]
pub(crate) fn check_radix<T>(radix: &T) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if *radix <= T::one() {
        return Err(NumericError::invalid_radix());
    }
    Ok(())
}

/// Rejects a negative argument.
#[inline]
pub(crate) fn check_non_negative<T>(v: &T, argument: &'static str) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if v.is_negative() {
        return Err(NumericError::out_of_range(argument, "must be non-negative"));
    }
    Ok(())
}

/// `base^exponent` with a `usize` exponent, `None` on overflow.
///
/// The base is only squared while exponent bits remain, so no spurious
/// overflow is reported for results that fit.
pub(crate) fn checked_pow_usize<T>(base: &T, mut exponent: usize) -> Option<T>
where
    T: BinaryInteger,
{
    let mut result = T::one();
    let mut base = base.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul_val(base.clone())?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.clone().checked_mul_val(base)?;
        }
    }
    Some(result)
}
