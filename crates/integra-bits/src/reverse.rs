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


//! Bit and byte reversal across the storage width.
//!
//! Both operations work on the little-endian two's complement bytes of the
//! value. For fixed-width types they are involutions. For `BigInt` the storage
//! width is re-derived from the result, so reversing twice returns the input
//! only when the reversed pattern needs as many bytes as the original.

use integra_core::BinaryInteger;

/// Mirrors all storage bits of `v` (bit 0 swaps with bit `N - 1`).
///
/// # Examples
///
/// ```rust
/// use integra_bits::reverse::reverse_bits;
///
/// assert_eq!(reverse_bits(&0b0000_0001u8), 0b1000_0000);
/// assert_eq!(reverse_bits(&0x0000_00F0u32), 0x0F00_0000);
/// assert_eq!(reverse_bits(&1i8), -128);
/// ```
pub fn reverse_bits<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    let reversed: Vec<u8> = v
        .to_le_bytes_vec()
        .into_iter()
        .rev()
        .map(u8::reverse_bits)
        .collect();
    T::from_le_bytes_slice(&reversed)
}

/// Mirrors the byte order of `v`, leaving the bits inside each byte intact.
///
/// # Examples
///
/// ```rust
/// use integra_bits::reverse::reverse_bytes;
///
/// assert_eq!(reverse_bytes(&0x1234_5678u32), 0x7856_3412);
/// assert_eq!(reverse_bytes(&0x12u8), 0x12);
/// ```
pub fn reverse_bytes<T>(v: &T) -> T
where
    T: BinaryInteger,
{
    let mut bytes = v.to_le_bytes_vec();
    bytes.reverse();
    T::from_le_bytes_slice(&bytes)
}
