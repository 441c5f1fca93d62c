// Copyright 2025 Cowboy AI, LLC.

//! Lexicographic comparison of ordered sequences
//!
//! The first differing element decides. When one sequence runs out first it is
//! the lesser one, as if its missing tail held the minimum value of the
//! element type. No sentinel is materialized: exhaustion itself decides.

use std::cmp::Ordering;

use super::{Comparable, Comparator};

/// Compare two element streams lexicographically with `compare`.
///
/// Runs as a loop over the iterators, so stack usage does not grow with the
/// length of the input.
///
/// ```rust
/// use std::cmp::Ordering;
/// use cim_ordering::three_way::lexicographic;
///
/// let ordering = lexicographic([1_i32, 2, 3], [1, 5, 2], |a, b| a.cmp(b));
/// assert_eq!(ordering, Ordering::Less);
/// ```
pub fn lexicographic<I, J, T, F>(xs: I, ys: J, mut compare: F) -> Ordering
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut xs = xs.into_iter();
    let mut ys = ys.into_iter();
    loop {
        match (xs.next(), ys.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare(&x, &y) {
                Ordering::Equal => continue,
                decided => return decided,
            },
        }
    }
}

/// Comparator for sequences, built from the comparator of the elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceComparator<C> {
    element: C,
}

impl<C> SequenceComparator<C> {
    /// Compose a sequence comparator from an element comparator.
    pub fn new(element: C) -> Self {
        Self { element }
    }

    /// The element comparator this sequence comparator delegates to.
    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<T, C: Comparator<T>> Comparator<[T]> for SequenceComparator<C> {
    fn compare(&self, x: &[T], y: &[T]) -> Ordering {
        lexicographic(x, y, |a, b| self.element.compare(a, b))
    }
}

impl<T, C: Comparator<T>> Comparator<Vec<T>> for SequenceComparator<C> {
    fn compare(&self, x: &Vec<T>, y: &Vec<T>) -> Ordering {
        Comparator::<[T]>::compare(self, x, y)
    }
}

impl<T: Comparable> Comparable for [T] {
    type Comparator = SequenceComparator<T::Comparator>;

    fn comparator() -> Self::Comparator {
        SequenceComparator::new(T::comparator())
    }
}

impl<T: Comparable> Comparable for Vec<T> {
    type Comparator = SequenceComparator<T::Comparator>;

    fn comparator() -> Self::Comparator {
        SequenceComparator::new(T::comparator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::three_way::{IntegerComparator, TextComparator};

    #[test]
    fn test_empty_sequences() {
        let cmp = SequenceComparator::new(IntegerComparator);
        let empty: Vec<i32> = vec![];
        assert_eq!(cmp.compare(&empty, &empty), Ordering::Equal);
        assert_eq!(cmp.compare(&empty, &vec![1]), Ordering::Less);
        assert_eq!(cmp.compare(&vec![1], &empty), Ordering::Greater);
    }

    #[test]
    fn test_first_difference_decides() {
        let cmp = SequenceComparator::new(IntegerComparator);
        assert_eq!(cmp.compare(&vec![1_i32, 2, 3], &vec![1, 5, 2]), Ordering::Less);
        assert_eq!(cmp.compare(&vec![1_i32, 2, 4], &vec![1, 2, 3]), Ordering::Greater);
        assert_eq!(cmp.compare(&vec![9_i32], &vec![1, 2, 3]), Ordering::Greater);
    }

    #[test]
    fn test_prefix_is_less_than_extension() {
        let cmp = SequenceComparator::new(IntegerComparator);
        // the extension element is below every other value, still greater
        assert_eq!(
            cmp.compare(&vec![3_i64], &vec![3_i64, i64::MIN]),
            Ordering::Less
        );
    }

    #[test]
    fn test_slices_and_text_elements() {
        let cmp = SequenceComparator::new(TextComparator);
        let x: &[&str] = &["a", "b", "z"];
        let y: &[&str] = &["a", "b", "c", "d"];
        assert_eq!(cmp.compare(x, y), Ordering::Greater);
    }

    #[test]
    fn test_long_sequences_do_not_recurse() {
        let cmp = SequenceComparator::new(IntegerComparator);
        let x = vec![7_u32; 1_000_000];
        let mut y = x.clone();
        assert_eq!(cmp.compare(&x, &y), Ordering::Equal);
        y.push(0);
        assert_eq!(cmp.compare(&x, &y), Ordering::Less);
    }

    #[test]
    fn test_lexicographic_stops_at_first_difference() {
        let mut calls = 0;
        let ordering = lexicographic([1_i32, 9, 9, 9], [2, 0, 0, 0], |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_eq!(ordering, Ordering::Less);
        assert_eq!(calls, 1);
    }
}
