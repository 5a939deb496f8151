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


//! Error taxonomy shared by every kernel operation.
//!
//! Failures are local to a single call: an argument outside the domain of
//! the operation (`OutOfRange`), or an exact result that does not fit the
//! fixed width of the integer type (`Overflow`). The absence of a modular
//! inverse is an expected outcome and is reported as `Ok(None)` rather than
//! through this type.

use std::fmt::Display;

/// The error type for kernel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// An argument lies outside the domain of the operation (negative input,
    /// radix below two, bit index beyond a fixed storage width, zero modulus).
    OutOfRange(OutOfRangeError),
    /// The exact result cannot be represented in the integer type.
    Overflow(OverflowError),
}

/// Details about an argument that violated the domain of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The name of the offending argument (e.g., "radix").
    pub argument: &'static str,
    /// The requirement the argument failed (e.g., "must be at least 2").
    pub requirement: &'static str,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Argument '{}' out of range: {}",
            self.argument, self.requirement
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Details about an operation whose exact result would wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowError {
    /// The name of the operation that overflowed (e.g., "factorial").
    pub operation: &'static str,
}

impl std::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arithmetic overflow in '{}': result does not fit the integer type",
            self.operation
        )
    }
}

impl std::error::Error for OverflowError {}

impl NumericError {
    /// Creates an `OutOfRange` error for the given argument and requirement.
    #[inline]
    pub const fn out_of_range(argument: &'static str, requirement: &'static str) -> Self {
        Self::OutOfRange(OutOfRangeError {
            argument,
            requirement,
        })
    }

    /// Creates an `Overflow` error for the given operation.
    #[inline]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::Overflow(OverflowError { operation })
    }

    /// The shared error for a radix below two.
    #[inline]
    pub const fn invalid_radix() -> Self {
        Self::out_of_range("radix", "must be at least 2")
    }

    /// Returns `true` if this is an `OutOfRange` error.
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    /// Returns `true` if this is an `Overflow` error.
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

impl Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(e) => write!(f, "Out of range: {}", e),
            Self::Overflow(e) => write!(f, "Overflow: {}", e),
        }
    }
}

impl std::error::Error for NumericError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(e) => Some(e),
            Self::Overflow(e) => Some(e),
        }
    }
}

impl From<OutOfRangeError> for NumericError {
    fn from(e: OutOfRangeError) -> Self {
        Self::OutOfRange(e)
    }
}

impl From<OverflowError> for NumericError {
    fn from(e: OverflowError) -> Self {
        Self::Overflow(e)
    }
}

/// Result alias used by every fallible kernel operation.
pub type NumericResult<T> = Result<T, NumericError>;
