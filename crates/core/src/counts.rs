// crates/core/src/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Per-file or aggregated line counters. The three categories are disjoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCounts {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineCounts {
    #[inline]
    #[must_use]
    pub const fn new(code: usize, comment: usize, blank: usize) -> Self {
        Self { code, comment, blank }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Number of counted lines.
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.code + self.comment + self.blank
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.total() == 0
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            code: self.code + rhs.code,
            comment: self.comment + rhs.comment,
            blank: self.blank + rhs.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.code += rhs.code;
        self.comment += rhs.comment;
        self.blank += rhs.blank;
    }
}

impl Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
