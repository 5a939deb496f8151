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


//! # Integra Bits
//!
//! Bit-level primitives generic over every [`BinaryInteger`], fixed or
//! dynamic width.
//!
//! ## Modules
//!
//! - `count`: Population count and leading/trailing zero counts, dispatching
//!   to the native instruction of the type when the `intrinsics` feature is
//!   enabled (default), and to the portable algorithms otherwise.
//! - `portable`: The portable bit-trick algorithms. Always compiled; the
//!   native and portable strategies must agree bit for bit.
//! - `bit`: Single-bit get/set/clear/flip and least/most significant one-bit
//!   extraction.
//! - `fold`: Propagation of the most/least significant one bit.
//! - `reverse`: Bit and byte reversal across the storage width.
//! - `gray`: Binary-reflected Gray code conversion.
//! - `mask`: LSB/MSB-justified masks and repeating pattern fills.
//! - `pow2`: Power-of-two detection and nearest powers of two.
//!
//! [`BinaryInteger`]: integra_core::BinaryInteger

pub mod bit;
pub mod count;
pub mod fold;
pub mod gray;
pub mod mask;
pub mod portable;
pub mod pow2;
pub mod reverse;

/// Validates a bit index against the storage width of a fixed-width type.
///
/// Dynamic-width types accept any index: bits beyond the storage width are
/// the sign extension of the value.
#[inline]
pub(crate) fn check_bit_index<T>(index: usize) -> integra_core::NumericResult<()>
where
    T: integra_core::BinaryInteger,
{
    match T::fixed_bit_count() {
        Some(bits) if index >= bits => Err(integra_core::NumericError::out_of_range(
            "index",
            "must be below the storage width",
        )),
        _ => Ok(()),
    }
}
