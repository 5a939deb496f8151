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

macro_rules! impl_binary_integer_common {
    ($t:ty, $u:ty) => {
        const STORAGE: StorageWidth = StorageWidth::Fixed {
            bytes: core::mem::size_of::<$t>(),
        };

        #[inline(always)]
        fn byte_count(&self) -> usize {
            core::mem::size_of::<$t>()
        }

        #[inline(always)]
        fn to_le_bytes_vec(&self) -> Vec<u8> {
            self.to_le_bytes().to_vec()
        }

        #[inline(always)]
        fn from_le_bytes_slice(bytes: &[u8]) -> Self {
            let mut buffer = [0u8; core::mem::size_of::<$t>()];
            let n = bytes.len().min(buffer.len());
            buffer[..n].copy_from_slice(&bytes[..n]);
            <$t>::from_le_bytes(buffer)
        }

        #[inline(always)]
        fn logical_shr(&self, shift: usize) -> Self {
            u32::try_from(shift)
                .ok()
                .and_then(|s| (*self as $u).checked_shr(s))
                .unwrap_or(0) as $t
        }

        #[inline(always)]
        fn native_count_ones(&self) -> usize {
            self.count_ones() as usize
        }

        #[inline(always)]
        fn native_leading_zeros(&self) -> usize {
            self.leading_zeros() as usize
        }

        #[inline(always)]
        fn native_trailing_zeros(&self) -> usize {
            self.trailing_zeros() as usize
        }
    };
}

macro_rules! impl_binary_integer_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl BinaryInteger for $t {
                impl_binary_integer_common!($t, $t);

                const IS_SIGNED: bool = false;

                #[inline(always)]
                fn shortest_bit_length(&self) -> usize {
                    (<$t>::BITS - self.leading_zeros()) as usize
                }

                #[inline(always)]
                fn is_negative(&self) -> bool {
                    false
                }
            }
        )+
    };
}

macro_rules! impl_binary_integer_signed {
    ($($t:ty => $u:ty),+ $(,)?) => {
        $(
            impl BinaryInteger for $t {
                impl_binary_integer_common!($t, $u);

                const IS_SIGNED: bool = true;

                #[inline(always)]
                fn shortest_bit_length(&self) -> usize {
                    let magnitude_bits = if *self < 0 { !*self } else { *self };
                    (<$t>::BITS - magnitude_bits.leading_zeros()) as usize
                }

                #[inline(always)]
                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }
        )+
    };
}

impl_binary_integer_unsigned!(u8, u16, u32, u64, u128, usize);
impl_binary_integer_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_bit_length_unsigned() {
        assert_eq!(0u32.shortest_bit_length(), 0);
        assert_eq!(1u32.shortest_bit_length(), 1);
        assert_eq!(1023u32.shortest_bit_length(), 10);
        assert_eq!(u64::MAX.shortest_bit_length(), 64);
    }

    #[test]
    fn test_shortest_bit_length_signed_negative() {
        assert_eq!((-1i8).shortest_bit_length(), 0);
        assert_eq!((-128i8).shortest_bit_length(), 7);
        assert_eq!((-129i16).shortest_bit_length(), 8);
        assert_eq!(i32::MAX.shortest_bit_length(), 31);
    }

    #[test]
    fn test_bytes_round_trip_fixed() {
        let v: i32 = -123_456;
        assert_eq!(i32::from_le_bytes_slice(&v.to_le_bytes_vec()), v);
        assert_eq!(v.to_le_bytes_vec().len(), 4);
    }

    #[test]
    fn test_from_le_bytes_slice_truncates_and_zero_extends() {
        assert_eq!(u16::from_le_bytes_slice(&[0x34, 0x12, 0xFF]), 0x1234);
        assert_eq!(i16::from_le_bytes_slice(&[0xFF]), 0x00FF);
    }

    #[test]
    fn test_logical_shr_signed_fills_zeros() {
        assert_eq!((-1i8).logical_shr(1), 0x7F);
        assert_eq!((-128i8).logical_shr(7), 1);
        assert_eq!((-1i8).logical_shr(8), 0);
        assert_eq!(0xF0u8.logical_shr(4), 0x0F);
        assert_eq!(1u64.logical_shr(usize::MAX), 0);
    }

    #[test]
    fn test_native_counts() {
        assert_eq!((-1i16).native_count_ones(), 16);
        assert_eq!(1u32.native_leading_zeros(), 31);
        assert_eq!(0u8.native_trailing_zeros(), 8);
        assert_eq!(0b1000i64.native_trailing_zeros(), 3);
    }
}
