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


//! Portable bit-counting algorithms.
//!
//! These work on the little-endian storage bytes of any [`BinaryInteger`]
//! and use only shifts, masks and additions. They are the mandatory fallback
//! for the native instructions used by [`crate::count`] and must produce
//! identical results.
//!
//! [`BinaryInteger`]: integra_core::BinaryInteger

use integra_core::BinaryInteger;

/// Counts the one bits of a byte with the SWAR reduction.
#[inline(always)]
fn byte_population(b: u8) -> usize {
    let b = b - ((b >> 1) & 0x55);
    let b = (b & 0x33) + ((b >> 2) & 0x33);
    ((b + (b >> 4)) & 0x0F) as usize
}

/// Leading zeros of a byte by binary search over nibble, pair and bit.
#[inline(always)]
fn byte_leading_zeros(mut b: u8) -> usize {
    if b == 0 {
        return 8;
    }
    let mut n = 0;
    if b & 0xF0 == 0 {
        n += 4;
        b <<= 4;
    }
    if b & 0xC0 == 0 {
        n += 2;
        b <<= 2;
    }
    if b & 0x80 == 0 {
        n += 1;
    }
    n
}

/// Trailing zeros of a byte by binary search over nibble, pair and bit.
#[inline(always)]
fn byte_trailing_zeros(mut b: u8) -> usize {
    if b == 0 {
        return 8;
    }
    let mut n = 0;
    if b & 0x0F == 0 {
        n += 4;
        b >>= 4;
    }
    if b & 0x03 == 0 {
        n += 2;
        b >>= 2;
    }
    if b & 0x01 == 0 {
        n += 1;
    }
    n
}

/// Counts the one bits of `v` within its storage width.
///
/// # Examples
///
/// ```rust
/// use integra_bits::portable::population_count;
///
/// assert_eq!(population_count(&0b1011_0001u8), 4);
/// assert_eq!(population_count(&-1i32), 32);
/// ```
pub fn population_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    v.to_le_bytes_vec().into_iter().map(byte_population).sum()
}

/// Counts the zero bits above the most significant one bit of `v`.
///
/// # Examples
///
/// ```rust
/// use integra_bits::portable::leading_zero_count;
///
/// assert_eq!(leading_zero_count(&1u16), 15);
/// assert_eq!(leading_zero_count(&0u16), 16);
/// ```
pub fn leading_zero_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    let mut count = 0;
    for b in v.to_le_bytes_vec().into_iter().rev() {
        count += byte_leading_zeros(b);
        if b != 0 {
            break;
        }
    }
    count
}

/// Counts the zero bits below the least significant one bit of `v`; the
/// storage width for zero.
///
/// # Examples
///
/// ```rust
/// use integra_bits::portable::trailing_zero_count;
///
/// assert_eq!(trailing_zero_count(&0b1000u32), 3);
/// assert_eq!(trailing_zero_count(&0u32), 32);
/// ```
pub fn trailing_zero_count<T>(v: &T) -> usize
where
    T: BinaryInteger,
{
    let mut count = 0;
    for b in v.to_le_bytes_vec() {
        count += byte_trailing_zeros(b);
        if b != 0 {
            break;
        }
    }
    count
}
