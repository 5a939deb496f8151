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


use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigInt;

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Self {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

/// Wrapping addition by value (no references).
///
/// Fixed-width types wrap around at the boundary of the type, exactly like
/// the inherent `wrapping_add`. `BigInt` has no boundary, so the result is
/// the exact sum.
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// let a: u8 = 250;
/// assert_eq!(a.wrapping_add_val(10), 4);
///
/// let x: i8 = 127;
/// assert_eq!(x.wrapping_add_val(1), -128);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, wrapping_add;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WrappingAddVal for BigInt {
    #[inline(always)]
    fn wrapping_add_val(self, v: Self) -> Self {
        self + v
    }
}

/// Wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// let a: u8 = 0;
/// assert_eq!(a.wrapping_sub_val(1), 255);
///
/// let x: i8 = -128;
/// assert_eq!(x.wrapping_sub_val(1), 127);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WrappingSubVal for BigInt {
    #[inline(always)]
    fn wrapping_sub_val(self, v: Self) -> Self {
        self - v
    }
}

/// Wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// let a: u8 = 16;
/// assert_eq!(a.wrapping_mul_val(17), 16); // 272 mod 256
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WrappingMulVal for BigInt {
    #[inline(always)]
    fn wrapping_mul_val(self, v: Self) -> Self {
        self * v
    }
}

/// Wrapping (two's complement) negation by value (no references).
///
/// Unlike `Neg`, this is available for unsigned types, where it computes
/// `!v + 1` modulo the storage width.
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::wrapping_arithmetic::WrappingNegVal;
/// let a: u8 = 1;
/// assert_eq!(a.wrapping_neg_val(), 255);
///
/// let x: i8 = -128;
/// assert_eq!(x.wrapping_neg_val(), -128);
/// ```
pub trait WrappingNegVal: Sized {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, wrapping_neg;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WrappingNegVal for BigInt {
    #[inline(always)]
    fn wrapping_neg_val(self) -> Self {
        Neg::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_primitives_wrap_at_bounds() {
        assert_eq!(u16::MAX.wrapping_add_val(1), 0);
        assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
        assert_eq!(u32::MAX.wrapping_mul_val(2), u32::MAX - 1);
        assert_eq!(5u64.wrapping_neg_val(), u64::MAX - 4);
    }

    #[test]
    fn test_wrapping_neg_matches_not_plus_one() {
        for v in 0u8..=255 {
            assert_eq!(v.wrapping_neg_val(), (!v).wrapping_add_val(1));
        }
    }

    #[test]
    fn test_wrapping_bigint_is_exact() {
        let a = BigInt::from(u64::MAX);
        assert_eq!(
            a.clone().wrapping_add_val(BigInt::from(1)),
            BigInt::from(u64::MAX) + 1u32
        );
        assert_eq!(
            BigInt::from(0).wrapping_sub_val(BigInt::from(1)),
            BigInt::from(-1)
        );
        assert_eq!(a.clone().wrapping_neg_val(), -a);
    }
}
