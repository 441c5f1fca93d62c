// Copyright 2025 Cowboy AI, LLC.

//! Bridges between the three-way and less-or-equal families
//!
//! The families are independent; these adapters let an instance of one be
//! used where the other is expected, and give the law checker a way to
//! cross-check that two instances describe the same order.

use std::cmp::Ordering;

use crate::less_or_equal::LessOrEqual;
use crate::three_way::Comparator;

/// A three-way comparator derived from a less-or-equal instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeWayFromLessOrEqual<L> {
    inner: L,
}

impl<L> ThreeWayFromLessOrEqual<L> {
    /// Derive a comparator from `inner`.
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, L: LessOrEqual<T>> Comparator<T> for ThreeWayFromLessOrEqual<L> {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        match (self.inner.le(x, y), self.inner.le(y, x)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, _) => Ordering::Greater,
        }
    }
}

/// A less-or-equal instance derived from a three-way comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessOrEqualFromThreeWay<C> {
    inner: C,
}

impl<C> LessOrEqualFromThreeWay<C> {
    /// Derive a less-or-equal instance from `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, C: Comparator<T>> LessOrEqual<T> for LessOrEqualFromThreeWay<C> {
    fn le(&self, x: &T, y: &T) -> bool {
        self.inner.compare(x, y) != Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::less_or_equal::{IntegerLessOrEqual, SequenceLessOrEqual};
    use crate::three_way::{IntegerComparator, SequenceComparator};

    #[test]
    fn test_three_way_from_le() {
        let cmp = ThreeWayFromLessOrEqual::new(SequenceLessOrEqual::new(IntegerLessOrEqual));
        assert_eq!(cmp.compare(&vec![1_i32, 2, 3], &vec![1, 5, 2]), Ordering::Less);
        assert_eq!(cmp.compare(&vec![1_i32, 2, 4], &vec![1, 2, 3]), Ordering::Greater);
        assert_eq!(cmp.compare(&vec![1_i32], &vec![1]), Ordering::Equal);
    }

    #[test]
    fn test_le_from_three_way() {
        let le = LessOrEqualFromThreeWay::new(SequenceComparator::new(IntegerComparator));
        assert!(le.le(&vec![1_i32, 2, 3], &vec![1, 5, 2]));
        assert!(le.le(&vec![1_i32, 2, 3], &vec![1, 2, 3]));
        assert!(!le.le(&vec![1_i32, 2, 4], &vec![1, 2, 3]));
    }
}
