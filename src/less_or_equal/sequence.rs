// Copyright 2025 Cowboy AI, LLC.

//! Less-or-equal over ordered sequences

use super::{LessOrEqual, Ordered};

/// Lexicographic less-or-equal of two element streams.
///
/// An exhausted `xs` precedes-or-equals anything; an exhausted `ys` with
/// elements left in `xs` does not. Equivalent heads move on to the tails,
/// otherwise the heads decide. Iterative, like
/// [`crate::three_way::lexicographic`].
pub fn lexicographic_le<I, J, T, F>(xs: I, ys: J, mut le: F) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut xs = xs.into_iter();
    let mut ys = ys.into_iter();
    loop {
        let (x, y) = match (xs.next(), ys.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(x), Some(y)) => (x, y),
        };
        let forward = le(&x, &y);
        if !(forward && le(&y, &x)) {
            return forward;
        }
    }
}

/// Less-or-equal for sequences, built from the element instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceLessOrEqual<L> {
    element: L,
}

impl<L> SequenceLessOrEqual<L> {
    /// Compose from an element instance.
    pub fn new(element: L) -> Self {
        Self { element }
    }
}

impl<T, L: LessOrEqual<T>> LessOrEqual<[T]> for SequenceLessOrEqual<L> {
    fn le(&self, x: &[T], y: &[T]) -> bool {
        lexicographic_le(x, y, |a, b| self.element.le(a, b))
    }
}

impl<T, L: LessOrEqual<T>> LessOrEqual<Vec<T>> for SequenceLessOrEqual<L> {
    fn le(&self, x: &Vec<T>, y: &Vec<T>) -> bool {
        LessOrEqual::<[T]>::le(self, x, y)
    }
}

impl<T: Ordered> Ordered for [T] {
    type LessOrEqual = SequenceLessOrEqual<T::LessOrEqual>;

    fn less_or_equal() -> Self::LessOrEqual {
        SequenceLessOrEqual::new(T::less_or_equal())
    }
}

impl<T: Ordered> Ordered for Vec<T> {
    type LessOrEqual = SequenceLessOrEqual<T::LessOrEqual>;

    fn less_or_equal() -> Self::LessOrEqual {
        SequenceLessOrEqual::new(T::less_or_equal())
    }
}
