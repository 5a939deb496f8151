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


//! Rounding policies for integer log, root and pow.
//!
//! When the true mathematical result lies strictly between two integers the
//! kernel computes both bounding candidates exactly and lets a
//! [`RoundingMode`] pick one. "Nearest" compares the linear distance of the
//! candidate powers to the input, e.g. for `log_2(12)` the candidates `3` and
//! `4` stand for `8` and `16`, and `12` is equally far from both.

use std::cmp::Ordering;

/// How ties are broken by [`RoundingMode::Nearest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Prefer the candidate with the smaller magnitude.
    TowardZero,
    /// Prefer the candidate with the larger magnitude.
    #[default]
    AwayFromZero,
    /// Prefer the even candidate.
    ToEven,
}

/// The rounding policy applied when an exact integer result does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Truncate, i.e. floor for non-negative results.
    #[default]
    TowardZero,
    /// The smallest magnitude not below the true result.
    AwayFromZero,
    /// The candidate closest to the input, ties resolved by the [`TieBreak`].
    Nearest(TieBreak),
}

/// One of the two integer candidates bounding an inexact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// The candidate with the smaller magnitude.
    TowardZero,
    /// The candidate with the larger magnitude.
    AwayFromZero,
}

impl RoundingMode {
    /// Selects a candidate.
    ///
    /// `distance_order` compares the distance from the input to the
    /// toward-zero candidate with the distance to the away-from-zero
    /// candidate. `toward_zero_is_even` is only consulted for
    /// [`TieBreak::ToEven`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integra_core::rounding::{Candidate, RoundingMode, TieBreak};
    /// use std::cmp::Ordering;
    ///
    /// let mode = RoundingMode::Nearest(TieBreak::ToEven);
    /// assert_eq!(mode.choose(Ordering::Less, false), Candidate::TowardZero);
    /// assert_eq!(mode.choose(Ordering::Equal, false), Candidate::AwayFromZero);
    /// assert_eq!(RoundingMode::AwayFromZero.choose(Ordering::Less, true), Candidate::AwayFromZero);
    /// ```
    #[inline]
    pub fn choose(self, distance_order: Ordering, toward_zero_is_even: bool) -> Candidate {
        match self {
            Self::TowardZero => Candidate::TowardZero,
            Self::AwayFromZero => Candidate::AwayFromZero,
            Self::Nearest(tie) => match distance_order {
                Ordering::Less => Candidate::TowardZero,
                Ordering::Greater => Candidate::AwayFromZero,
                Ordering::Equal => match tie {
                    TieBreak::TowardZero => Candidate::TowardZero,
                    TieBreak::AwayFromZero => Candidate::AwayFromZero,
                    TieBreak::ToEven if toward_zero_is_even => Candidate::TowardZero,
                    TieBreak::ToEven => Candidate::AwayFromZero,
                },
            },
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TowardZero => write!(f, "TowardZero"),
            Self::AwayFromZero => write!(f, "AwayFromZero"),
            Self::Nearest(tie) => write!(f, "Nearest({:?})", tie),
        }
    }
}
