// Copyright 2025 Cowboy AI, LLC.

//! Scalar comparators: integers, text and anything already `Ord`

use std::cmp::Ordering;

use super::sequence::lexicographic;
use super::{Comparable, Comparator};

/// Three-way comparator for every primitive integer type.
///
/// Decided by `<` and `>` rather than the sign of `x - y`, so the result never
/// overflows and is always exactly one of the three orderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerComparator;

macro_rules! integer_instances {
    ($($int:ty),* $(,)?) => {
        $(
            impl Comparator<$int> for IntegerComparator {
                fn compare(&self, x: &$int, y: &$int) -> Ordering {
                    if x < y {
                        Ordering::Less
                    } else if x > y {
                        Ordering::Greater
                    } else {
                        Ordering::Equal
                    }
                }
            }

            impl Comparable for $int {
                type Comparator = IntegerComparator;

                fn comparator() -> IntegerComparator {
                    IntegerComparator
                }
            }
        )*
    };
}

integer_instances!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Three-way comparator for text: lexicographic over characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextComparator;

impl Comparator<str> for TextComparator {
    fn compare(&self, x: &str, y: &str) -> Ordering {
        lexicographic(x.chars(), y.chars(), |a, b| a.cmp(b))
    }
}

impl<'a> Comparator<&'a str> for TextComparator {
    fn compare(&self, x: &&'a str, y: &&'a str) -> Ordering {
        Comparator::<str>::compare(self, x, y)
    }
}

impl Comparator<String> for TextComparator {
    fn compare(&self, x: &String, y: &String) -> Ordering {
        Comparator::<str>::compare(self, x, y)
    }
}

impl Comparable for str {
    type Comparator = TextComparator;

    fn comparator() -> TextComparator {
        TextComparator
    }
}

impl<'a> Comparable for &'a str {
    type Comparator = TextComparator;

    fn comparator() -> TextComparator {
        TextComparator
    }
}

impl Comparable for String {
    type Comparator = TextComparator;

    fn comparator() -> TextComparator {
        TextComparator
    }
}

/// Comparator backed by a type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalComparator;

impl<T: Ord + ?Sized> Comparator<T> for NaturalComparator {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        x.cmp(y)
    }
}

macro_rules! natural_instances {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Comparable for $ty {
                type Comparator = NaturalComparator;

                fn comparator() -> NaturalComparator {
                    NaturalComparator
                }
            }
        )*
    };
}

natural_instances!(char, bool, ());
