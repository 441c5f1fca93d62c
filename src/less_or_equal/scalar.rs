// Copyright 2025 Cowboy AI, LLC.

//! Scalar less-or-equal instances

use super::sequence::lexicographic_le;
use super::{LessOrEqual, Ordered};

/// `x <= y` on every primitive integer type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerLessOrEqual;

macro_rules! integer_instances {
    ($($int:ty),* $(,)?) => {
        $(
            impl LessOrEqual<$int> for IntegerLessOrEqual {
                fn le(&self, x: &$int, y: &$int) -> bool {
                    x <= y
                }
            }

            impl Ordered for $int {
                type LessOrEqual = IntegerLessOrEqual;

                fn less_or_equal() -> IntegerLessOrEqual {
                    IntegerLessOrEqual
                }
            }
        )*
    };
}

integer_instances!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Lexicographic less-or-equal over the characters of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextLessOrEqual;

impl LessOrEqual<str> for TextLessOrEqual {
    fn le(&self, x: &str, y: &str) -> bool {
        lexicographic_le(x.chars(), y.chars(), |a, b| a <= b)
    }
}

impl<'a> LessOrEqual<&'a str> for TextLessOrEqual {
    fn le(&self, x: &&'a str, y: &&'a str) -> bool {
        LessOrEqual::<str>::le(self, x, y)
    }
}

impl LessOrEqual<String> for TextLessOrEqual {
    fn le(&self, x: &String, y: &String) -> bool {
        LessOrEqual::<str>::le(self, x, y)
    }
}

impl Ordered for str {
    type LessOrEqual = TextLessOrEqual;

    fn less_or_equal() -> TextLessOrEqual {
        TextLessOrEqual
    }
}

impl<'a> Ordered for &'a str {
    type LessOrEqual = TextLessOrEqual;

    fn less_or_equal() -> TextLessOrEqual {
        TextLessOrEqual
    }
}

impl Ordered for String {
    type LessOrEqual = TextLessOrEqual;

    fn less_or_equal() -> TextLessOrEqual {
        TextLessOrEqual
    }
}

/// Less-or-equal backed by a type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalLessOrEqual;

impl<T: Ord + ?Sized> LessOrEqual<T> for NaturalLessOrEqual {
    fn le(&self, x: &T, y: &T) -> bool {
        x <= y
    }
}

impl Ordered for char {
    type LessOrEqual = NaturalLessOrEqual;

    fn less_or_equal() -> NaturalLessOrEqual {
        NaturalLessOrEqual
    }
}

impl Ordered for bool {
    type LessOrEqual = NaturalLessOrEqual;

    fn less_or_equal() -> NaturalLessOrEqual {
        NaturalLessOrEqual
    }
}

/// A closure used as a less-or-equal instance.
#[derive(Clone, Copy)]
pub struct FnLessOrEqual<F> {
    le: F,
}

impl<F> FnLessOrEqual<F> {
    /// Wrap `le`. It must describe a total order.
    pub fn new(le: F) -> Self {
        Self { le }
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> LessOrEqual<T> for FnLessOrEqual<F> {
    fn le(&self, x: &T, y: &T) -> bool {
        (self.le)(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_le() {
        assert!(IntegerLessOrEqual.le(&-5_i32, &10_i32));
        assert!(IntegerLessOrEqual.le(&10_i32, &10_i32));
        assert!(!IntegerLessOrEqual.le(&u64::MAX, &0_u64));
    }

    #[test]
    fn test_text_le() {
        let le = TextLessOrEqual;
        assert!(le.le("a", "b"));
        assert!(le.le("ab", "ab"));
        assert!(le.le("ab", "abc"));
        assert!(!le.le("abc", "ab"));
        assert!(!le.le("z", "c"));
        assert!(le.le(&String::new(), &"x".to_string()));
    }

    #[test]
    fn test_text_le_matches_code_point_order() {
        let samples = ["", "a", "B", "é", "z", "日本", "ab"];
        for x in samples {
            for y in samples {
                assert_eq!(TextLessOrEqual.le(x, y), x <= y, "{x:?} vs {y:?}");
            }
        }
    }

    #[test]
    fn test_fn_le() {
        let shorter = FnLessOrEqual::new(|x: &Vec<u8>, y: &Vec<u8>| x.len() <= y.len());
        assert!(shorter.le(&vec![9], &vec![0, 0]));
        assert!(shorter.equivalent(&vec![1], &vec![2]));
    }
}
