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


//! Binary-reflected Gray code.
//!
//! The shifts are logical (zero-filling) within the storage width so that
//! signed fixed-width values convert like their unsigned bit patterns and the
//! inverse terminates. Negative dynamic-width values are rejected: their sign
//! extends indefinitely and the inverse transform has no finite result.

use integra_core::{BinaryInteger, NumericError, NumericResult};

#[inline]
fn check_representable<T>(v: &T) -> NumericResult<()>
where
    T: BinaryInteger,
{
    if T::is_dynamic_width() && v.is_negative() {
        return Err(NumericError::out_of_range(
            "value",
            "must be non-negative for dynamic-width Gray code",
        ));
    }
    Ok(())
}

/// Converts `v` to its Gray code, `v ^ (v >> 1)`.
///
/// # Examples
///
/// ```rust
/// use integra_bits::gray::binary_to_gray;
///
/// assert_eq!(binary_to_gray(&0b0111u8), Ok(0b0100));
/// assert_eq!(binary_to_gray(&-1i8), Ok(-128)); // 0xFF -> 0x80
/// ```
pub fn binary_to_gray<T>(v: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_representable(v)?;
    Ok(v.clone() ^ v.logical_shr(1))
}

/// Converts the Gray code `g` back to binary.
///
/// Repeatedly XORs `g` with ever further shifted copies of itself until the
/// shifted mask is exhausted.
///
/// # Examples
///
/// ```rust
/// use integra_bits::gray::gray_to_binary;
///
/// assert_eq!(gray_to_binary(&0b0100u8), Ok(0b0111));
/// assert_eq!(gray_to_binary(&-128i8), Ok(-1));
/// ```
pub fn gray_to_binary<T>(g: &T) -> NumericResult<T>
where
    T: BinaryInteger,
{
    check_representable(g)?;
    let mut value = g.clone();
    let mut mask = g.logical_shr(1);
    while !mask.is_zero() {
        value = value ^ mask.clone();
        mask = mask.logical_shr(1);
    }
    Ok(value)
}
