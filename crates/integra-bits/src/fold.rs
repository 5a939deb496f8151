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


//! Bit folding: propagating a boundary one bit across the bits beside it.
//!
//! - `fold_msb` smears the most significant one bit downward, producing a
//!   contiguous run of ones from bit 0 up to and including it.
//! - `fold_lsb` smears the least significant one bit upward, producing a
//!   contiguous run of ones from it to the top of the storage width.
//!
//! ## Negative inputs
//!
//! Both folds are defined through the one-bit extractors of [`crate::bit`],
//! which already anchor negative values at the storage width. A negative
//! fixed-width value therefore folds to all ones (`-1`) under `fold_msb`.
//! For `BigInt` the result is the positive all-ones pattern of the storage
//! width, `2^bit_count(v) - 1`, which keeps the fold finite.

use crate::bit::{least_significant_1_bit, most_significant_1_bit};
use integra_core::BinaryInteger;
use integra_core::width::bit_count;

/// Propagates the most significant one bit of `v` toward bit zero.
///
/// Equivalent to `((msb - 1) << 1) | 1`, or `0` if `v = 0`. For non-zero `v`
/// the result has exactly `bit_length(v)` one bits.
///
/// # Examples
///
/// ```rust
/// use integra_bits::fold::fold_msb;
///
/// assert_eq!(fold_msb(&0b0010_1000u8), 0b0011_1111);
/// assert_eq!(fold_msb(&0u8), 0);
/// assert_eq!(fold_msb(&-5i16), -1);
/// ```
#[inline]
pub fn fold_msb<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return T::zero();
    }
    let msb = most_significant_1_bit(v);
    (msb.wrapping_sub_val(T::one()) << 1) | T::one()
}

/// Propagates the least significant one bit of `v` toward the top of the
/// storage width; `0` if `v = 0`.
///
/// # Examples
///
/// ```rust
/// use integra_bits::fold::fold_lsb;
/// use num_bigint::BigInt;
///
/// assert_eq!(fold_lsb(&0b0010_1000u8), 0b1111_1000);
/// assert_eq!(fold_lsb(&1i8), -1);
/// assert_eq!(fold_lsb(&BigInt::from(0b0010_1000)), BigInt::from(0b1111_1000));
/// ```
#[inline]
pub fn fold_lsb<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    if v.is_zero() {
        return T::zero();
    }
    let below = least_significant_1_bit(v).wrapping_sub_val(T::one());
    if T::is_dynamic_width() {
        let storage = (T::one() << bit_count(v)) - T::one();
        storage ^ below
    } else {
        !below
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::population_count;
    use integra_core::width::bit_length;
    use num_bigint::BigInt;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_fold_msb_population_equals_bit_length_fixed() {
        for v in i16::MIN..=i16::MAX {
            if v != 0 {
                assert_eq!(population_count(&fold_msb(&v)), bit_length(&v), "v = {}", v);
            }
        }
    }

    #[test]
    fn test_fold_msb_population_equals_bit_length_dynamic() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = BigInt::from(rng.random::<i64>()) * BigInt::from(rng.random::<i32>());
            if v != BigInt::from(0) {
                assert_eq!(population_count(&fold_msb(&v)), bit_length(&v), "v = {}", v);
            }
        }
    }

    #[test]
    fn test_fold_msb_negative_dynamic_is_storage_ones() {
        let v = BigInt::from(-300);
        assert_eq!(fold_msb(&v), (BigInt::from(1) << 16usize) - 1);
    }

    #[test]
    fn test_fold_lsb_fixed() {
        assert_eq!(fold_lsb(&0u32), 0);
        assert_eq!(fold_lsb(&1u32), u32::MAX);
        assert_eq!(fold_lsb(&0x8000_0000u32), 0x8000_0000);
        assert_eq!(fold_lsb(&-4i32), -4);
    }

    #[test]
    fn test_fold_lsb_run_is_contiguous() {
        for v in 1u8..=255 {
            let f = fold_lsb(&v);
            assert_eq!(f.trailing_zeros(), v.trailing_zeros());
            assert_eq!(f.leading_ones() + f.trailing_zeros(), 8);
        }
    }
}
