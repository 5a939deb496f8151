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


//! Bit-mask construction.
//!
//! Masks are built either LSB-justified (`mask_lsb`: the `length` lowest bits
//! set) or MSB-justified. For fixed-width types `mask_msb` aligns with the top
//! of the storage width. Dynamic-width types have no storage top, so
//! MSB-justified masks are built against an explicit logical width with
//! `mask_msb_within`.
//!
//! Repeating patterns fill a target width from either end. The two
//! orientations are not mirror images when the target length is not a
//! multiple of the pattern length: the partial copy takes the low bits of the
//! pattern for an LSB-first fill and the high bits for an MSB-first fill.

use integra_core::{BinaryInteger, NumericError, NumericResult};

#[inline]
fn check_length<T>(length: usize, argument: &'static str) -> NumericResult<()>
where
    T: BinaryInteger,
{
    match T::fixed_bit_count() {
        Some(bits) if length > bits => Err(NumericError::out_of_range(
            argument,
            "must not exceed the storage width",
        )),
        _ => Ok(()),
    }
}

/// Returns a value with the `length` lowest bits set.
///
/// # Errors
///
/// `OutOfRange` if `length` exceeds the storage width of a fixed-width type.
///
/// # Examples
///
/// ```rust
/// use integra_bits::mask::mask_lsb;
/// use num_bigint::BigInt;
///
/// assert_eq!(mask_lsb::<u8>(5), Ok(0b11111));
/// assert_eq!(mask_lsb::<u8>(0), Ok(0));
/// assert_eq!(mask_lsb::<i8>(8), Ok(-1));
/// assert!(mask_lsb::<u8>(9).is_err());
/// assert_eq!(mask_lsb::<BigInt>(70), Ok((BigInt::from(1) << 70usize) - 1));
/// ```
pub fn mask_lsb<T>(length: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_length::<T>(length, "length")?;
    if length == 0 {
        return Ok(T::zero());
    }
    if T::fixed_bit_count() == Some(length) {
        return Ok(!T::zero());
    }
    Ok((T::one() << length).wrapping_sub_val(T::one()))
}

/// Returns a value with the `length` highest storage bits set.
///
/// # Errors
///
/// `OutOfRange` if `length` exceeds the storage width, or if `T` has a
/// dynamic width (use [`mask_msb_within`]).
///
/// # Examples
///
/// ```rust
/// use integra_bits::mask::mask_msb;
///
/// assert_eq!(mask_msb::<u8>(3), Ok(0b1110_0000));
/// assert_eq!(mask_msb::<u16>(16), Ok(u16::MAX));
/// assert_eq!(mask_msb::<i8>(1), Ok(-128));
/// ```
pub fn mask_msb<T>(length: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    match T::fixed_bit_count() {
        Some(bits) => mask_msb_within(length, bits),
        None => Err(NumericError::out_of_range(
            "length",
            "dynamic-width types have no storage top; use mask_msb_within",
        )),
    }
}

/// Returns a value with the `length` highest bits of a `total_length`-bit
/// logical width set.
///
/// # Errors
///
/// `OutOfRange` if `length > total_length` or if `total_length` exceeds the
/// storage width of a fixed-width type.
///
/// # Examples
///
/// ```rust
/// use integra_bits::mask::mask_msb_within;
/// use num_bigint::BigInt;
///
/// assert_eq!(mask_msb_within::<u32>(2, 6), Ok(0b110000));
/// assert_eq!(mask_msb_within::<BigInt>(4, 12), Ok(BigInt::from(0xF00)));
/// assert!(mask_msb_within::<u32>(7, 6).is_err());
/// ```
pub fn mask_msb_within<T>(length: usize, total_length: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_length::<T>(total_length, "total_length")?;
    if length > total_length {
        return Err(NumericError::out_of_range(
            "length",
            "must not exceed total_length",
        ));
    }
    if length == 0 {
        return Ok(T::zero());
    }
    Ok(mask_lsb::<T>(length)? << (total_length - length))
}

#[inline]
fn check_pattern<T>(pattern_length: usize, target_length: usize) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if pattern_length == 0 {
        return Err(NumericError::out_of_range(
            "pattern_length",
            "must be at least 1",
        ));
    }
    check_length::<T>(pattern_length, "pattern_length")?;
    check_length::<T>(target_length, "target_length")
}

/// Repeats the low `pattern_length` bits of `pattern` from bit zero upward
/// until `target_length` bits are covered.
///
/// A trailing partial copy at the top takes the low bits of the pattern.
///
/// # Examples
///
/// ```rust
/// use integra_bits::mask::fill_pattern_lsb;
///
/// assert_eq!(fill_pattern_lsb(&0b101u8, 3, 8), Ok(0b01_101_101));
/// assert_eq!(fill_pattern_lsb(&0b01u32, 2, 8), Ok(0b0101_0101));
/// ```
pub fn fill_pattern_lsb<T>(pattern: &T, pattern_length: usize, target_length: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_pattern::<T>(pattern_length, target_length)?;
    let unit = pattern.clone() & mask_lsb::<T>(pattern_length)?;

    let mut result = T::zero();
    let mut offset = 0;
    while offset + pattern_length <= target_length {
        result = result | (unit.clone() << offset);
        offset += pattern_length;
    }

    let remainder = target_length - offset;
    if remainder > 0 {
        result = result | ((unit & mask_lsb::<T>(remainder)?) << offset);
    }
    Ok(result)
}

/// Repeats the low `pattern_length` bits of `pattern` from bit
/// `target_length - 1` downward until `target_length` bits are covered.
///
/// A trailing partial copy at the bottom takes the high bits of the pattern.
///
/// # Examples
///
/// ```rust
/// use integra_bits::mask::fill_pattern_msb;
///
/// assert_eq!(fill_pattern_msb(&0b101u8, 3, 8), Ok(0b101_101_10));
/// assert_eq!(fill_pattern_msb(&0b01u32, 2, 8), Ok(0b0101_0101));
/// ```
pub fn fill_pattern_msb<T>(pattern: &T, pattern_length: usize, target_length: usize) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_pattern::<T>(pattern_length, target_length)?;
    let unit = pattern.clone() & mask_lsb::<T>(pattern_length)?;

    let mut result = T::zero();
    let mut top = target_length;
    while top >= pattern_length {
        top -= pattern_length;
        result = result | (unit.clone() << top);
    }

    if top > 0 {
        result = result | unit.logical_shr(pattern_length - top);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_mask_lsb_all_lengths_u32() {
        for length in 0..32 {
            assert_eq!(mask_lsb::<u32>(length), Ok((1u32 << length) - 1));
        }
        assert_eq!(mask_lsb::<u32>(32), Ok(u32::MAX));
        assert!(mask_lsb::<u32>(33).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_mask_lsb_signed_top_lengths() {
        assert_eq!(mask_lsb::<i8>(7), Ok(127));
        assert_eq!(mask_lsb::<i64>(63), Ok(i64::MAX));
        assert_eq!(mask_lsb::<i64>(64), Ok(-1));
    }

    #[test]
    fn test_mask_msb_complements_lsb() {
        for length in 0..=16 {
            let low = mask_lsb::<u16>(16 - length).unwrap();
            let high = mask_msb::<u16>(length).unwrap();
            assert_eq!(low ^ high, u16::MAX);
            assert_eq!(high.count_ones() as usize, length);
        }
    }

    #[test]
    fn test_mask_msb_dynamic_requires_logical_width() {
        assert!(mask_msb::<BigInt>(3).is_err());
        assert_eq!(mask_msb_within::<BigInt>(0, 100), Ok(BigInt::from(0)));
        assert_eq!(
            mask_msb_within::<BigInt>(100, 100),
            Ok((BigInt::from(1) << 100usize) - 1)
        );
    }

    #[test]
    fn test_fill_orientations_differ_on_remainder() {
        let lsb = fill_pattern_lsb(&0b110u16, 3, 10).unwrap();
        let msb = fill_pattern_msb(&0b110u16, 3, 10).unwrap();
        assert_eq!(lsb, 0b0_110_110_110);
        assert_eq!(msb, 0b110_110_110_1);
        assert_ne!(lsb, msb);
    }

    #[test]
    fn test_fill_orientations_agree_on_exact_multiple() {
        for pattern in 0u32..16 {
            assert_eq!(
                fill_pattern_lsb(&pattern, 4, 32),
                fill_pattern_msb(&pattern, 4, 32)
            );
        }
    }

    #[test]
    fn test_fill_full_width_signed() {
        assert_eq!(fill_pattern_lsb(&0b10i8, 2, 8), Ok(0b1010_1010u8 as i8));
        assert_eq!(fill_pattern_msb(&-1i8, 8, 8), Ok(-1));
    }

    #[test]
    fn test_fill_pattern_ignores_bits_above_pattern_length() {
        assert_eq!(fill_pattern_lsb(&0xFFu8, 1, 4), Ok(0b1111));
        assert_eq!(fill_pattern_lsb(&0b1110u8, 1, 4), Ok(0));
    }

    #[test]
    fn test_fill_pattern_validation() {
        assert!(fill_pattern_lsb(&1u8, 0, 4).is_err());
        assert!(fill_pattern_msb(&1u8, 2, 9).is_err());
        assert_eq!(
            fill_pattern_lsb(&BigInt::from(1), 1, 80),
            Ok((BigInt::from(1) << 80usize) - 1)
        );
    }
}
