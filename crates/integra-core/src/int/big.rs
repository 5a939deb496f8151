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


use super::{BinaryInteger, StorageWidth};
use num_bigint::{BigInt, Sign};
use num_traits::One;

impl BinaryInteger for BigInt {
    const STORAGE: StorageWidth = StorageWidth::Dynamic;
    const IS_SIGNED: bool = true;

    /// Minimal two's complement length: magnitude bits plus one sign bit,
    /// rounded up to whole bytes. Zero occupies one byte.
    #[inline]
    fn byte_count(&self) -> usize {
        (self.shortest_bit_length() + 8) / 8
    }

    #[inline]
    fn shortest_bit_length(&self) -> usize {
        if self.sign() == Sign::Minus {
            (!self).bits() as usize
        } else {
            self.bits() as usize
        }
    }

    #[inline(always)]
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }

    #[inline]
    fn to_le_bytes_vec(&self) -> Vec<u8> {
        self.to_signed_bytes_le()
    }

    #[inline]
    fn from_le_bytes_slice(bytes: &[u8]) -> Self {
        BigInt::from_signed_bytes_le(bytes)
    }

    fn logical_shr(&self, shift: usize) -> Self {
        if self.sign() != Sign::Minus {
            return self >> shift;
        }
        let width = self.byte_count() * 8;
        let pattern = self & ((BigInt::one() << width) - 1);
        pattern >> shift
    }

    #[inline]
    fn native_count_ones(&self) -> usize {
        self.to_signed_bytes_le()
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    #[inline]
    fn native_leading_zeros(&self) -> usize {
        if self.sign() == Sign::Minus {
            0
        } else {
            self.byte_count() * 8 - self.bits() as usize
        }
    }

    #[inline]
    fn native_trailing_zeros(&self) -> usize {
        match self.trailing_zeros() {
            Some(zeros) => zeros as usize,
            None => self.byte_count() * 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_byte_count_matches_signed_encoding() {
        for v in [0i64, 1, 127, 128, 255, 256, -1, -128, -129, 32767, -32768, -32769] {
            let b = big(v);
            assert_eq!(
                b.byte_count(),
                b.to_signed_bytes_le().len(),
                "byte count mismatch for {}",
                v
            );
        }
    }

    #[test]
    fn test_byte_count_random_values() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v: i64 = rng.random();
            let b = big(v);
            assert_eq!(b.byte_count(), b.to_signed_bytes_le().len());
        }
    }

    #[test]
    fn test_zero_occupies_one_byte() {
        assert_eq!(big(0).byte_count(), 1);
        assert_eq!(big(0).shortest_bit_length(), 0);
        assert_eq!(big(0).native_trailing_zeros(), 8);
        assert_eq!(big(0).native_leading_zeros(), 8);
    }

    #[test]
    fn test_shortest_bit_length_negative() {
        assert_eq!(big(-1).shortest_bit_length(), 0);
        assert_eq!(big(-128).shortest_bit_length(), 7);
        assert_eq!(big(-129).shortest_bit_length(), 8);
    }

    #[test]
    fn test_logical_shr_negative_uses_storage_pattern() {
        // -128 is stored as 0x80 in one byte.
        assert_eq!(big(-128).logical_shr(1), big(0x40));
        // -1 is stored as 0xFF.
        assert_eq!(big(-1).logical_shr(4), big(0x0F));
        assert_eq!(big(1024).logical_shr(3), big(128));
    }

    #[test]
    fn test_native_counts_bigint() {
        assert_eq!(big(-1).native_count_ones(), 8);
        assert_eq!(big(255).native_count_ones(), 8);
        assert_eq!(big(255).native_leading_zeros(), 8);
        assert_eq!(big(-12).native_trailing_zeros(), 2);
    }
}
