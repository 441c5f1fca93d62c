// Copyright 2025 Cowboy AI, LLC.

//! Operations derived from any three-way comparator
//!
//! The `*_by` forms take an explicit comparator; the short forms resolve the
//! canonical one through [`Comparable`].

use std::cmp::Ordering;

use super::{Comparable, Comparator};

/// Compare with the canonical comparator of `T`.
///
/// ```rust
/// use std::cmp::Ordering;
/// use cim_ordering::three_way;
///
/// assert_eq!(three_way::compare(&-5, &10), Ordering::Less);
/// assert_eq!(
///     three_way::compare(&vec!["a", "b", "z"], &vec!["a", "b", "c", "d"]),
///     Ordering::Greater,
/// );
/// ```
pub fn compare<T: Comparable + ?Sized>(x: &T, y: &T) -> Ordering {
    T::comparator().compare(x, y)
}

/// The larger of `x` and `y`; ties go to `y`.
pub fn max_by<'a, T, C>(comparator: &C, x: &'a T, y: &'a T) -> &'a T
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    match comparator.compare(x, y) {
        Ordering::Greater => x,
        Ordering::Less | Ordering::Equal => y,
    }
}

/// The smaller of `x` and `y`; ties go to `x`.
pub fn min_by<'a, T, C>(comparator: &C, x: &'a T, y: &'a T) -> &'a T
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    match comparator.compare(x, y) {
        Ordering::Greater => y,
        Ordering::Less | Ordering::Equal => x,
    }
}

/// Whether `x` and `y` compare `Equal`.
pub fn equal_by<T, C>(comparator: &C, x: &T, y: &T) -> bool
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    comparator.compare(x, y) == Ordering::Equal
}

/// [`max_by`] with the canonical comparator.
pub fn max<'a, T: Comparable + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    max_by(&T::comparator(), x, y)
}

/// [`min_by`] with the canonical comparator.
pub fn min<'a, T: Comparable + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    min_by(&T::comparator(), x, y)
}

/// [`equal_by`] with the canonical comparator.
pub fn equal<T: Comparable + ?Sized>(x: &T, y: &T) -> bool {
    equal_by(&T::comparator(), x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::three_way::{FnComparator, IntegerComparator};

    #[test]
    fn test_max_prefers_y_on_tie() {
        // equal under the comparator but distinguishable by address
        let by_nothing = FnComparator::new(|_: &i32, _: &i32| Ordering::Equal);
        let x = 1;
        let y = 2;
        assert!(std::ptr::eq(max_by(&by_nothing, &x, &y), &y));
        assert!(std::ptr::eq(min_by(&by_nothing, &x, &y), &x));
    }

    #[test]
    fn test_max_and_min() {
        assert_eq!(*max_by(&IntegerComparator, &3_i32, &9), 9);
        assert_eq!(*max_by(&IntegerComparator, &9_i32, &3), 9);
        assert_eq!(*min_by(&IntegerComparator, &9_i32, &3), 3);
    }

    #[test]
    fn test_resolved_forms() {
        assert_eq!(max(&vec![1_i32, 2, 3], &vec![1, 5, 2]), &vec![1, 5, 2]);
        assert_eq!(min("pear", "apple"), "apple");
        assert!(equal(&("a".to_string(), 1_u8), &("a".to_string(), 1_u8)));
        assert!(!equal(&'a', &'b'));
    }
}
