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


use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use num_bigint::BigInt;
use num_traits::Zero;

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! checked_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Option<$t> {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`. For
/// `BigInt` the addition can never overflow and always returns `Some`.
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None); // Overflow occurs
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedAddVal for BigInt {
    #[inline(always)]
    fn checked_add_val(self, v: Self) -> Option<Self> {
        Some(self + v)
    }
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedSubVal;
/// let a: u8 = 50;
/// assert_eq!(a.checked_sub_val(100), None); // Underflow occurs
/// assert_eq!(a.checked_sub_val(20), Some(30));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedSubVal, checked_sub_val, checked_sub;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedSubVal for BigInt {
    #[inline(always)]
    fn checked_sub_val(self, v: Self) -> Option<Self> {
        Some(self - v)
    }
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedMulVal;
/// use num_bigint::BigInt;
///
/// let a: u8 = 20;
/// assert_eq!(a.checked_mul_val(10), Some(200));
/// assert_eq!(a.checked_mul_val(20), None); // 400 > 255
///
/// let big = BigInt::from(u64::MAX);
/// assert!(big.clone().checked_mul_val(big).is_some());
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedMulVal for BigInt {
    #[inline(always)]
    fn checked_mul_val(self, v: Self) -> Option<Self> {
        Some(self * v)
    }
}

/// A trait for types that support checked division by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedDivVal;
/// let a: i8 = -128;
/// assert_eq!(a.checked_div_val(0), None); // Division by zero
/// assert_eq!(a.checked_div_val(-1), None); // Overflow
/// assert_eq!(a.checked_div_val(4), Some(-32));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by
    /// zero or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedDivVal, checked_div_val, checked_div;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedDivVal for BigInt {
    #[inline(always)]
    fn checked_div_val(self, v: Self) -> Option<Self> {
        if v.is_zero() {
            return None;
        }
        Some(self / v)
    }
}

/// A trait for types that support checked remainder by value (no references).
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedRemVal;
/// let a: u8 = 10;
/// assert_eq!(a.checked_rem_val(0), None); // Division by zero
/// assert_eq!(a.checked_rem_val(3), Some(1));
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` on division by
    /// zero or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedRemVal, checked_rem_val, checked_rem;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedRemVal for BigInt {
    #[inline(always)]
    fn checked_rem_val(self, v: Self) -> Option<Self> {
        if v.is_zero() {
            return None;
        }
        Some(self % v)
    }
}

/// A trait for types that support checked negation by value (no references).
///
/// Unsigned types only negate zero successfully; `BigInt` always succeeds.
///
/// # Examples
///
/// ```rust
/// # use integra_core::num::ops::checked_arithmetic::CheckedNegVal;
/// let a: i8 = -128;
/// assert_eq!(a.checked_neg_val(), None); // Overflow occurs
/// let b: u8 = 1;
/// assert_eq!(b.checked_neg_val(), None);
/// assert_eq!(0u8.checked_neg_val(), Some(0));
/// ```
pub trait CheckedNegVal: Sized {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

checked_impl_unary_val!(CheckedNegVal, checked_neg_val, checked_neg;
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CheckedNegVal for BigInt {
    #[inline(always)]
    fn checked_neg_val(self) -> Option<Self> {
        Some(Neg::neg(self))
    }
}
