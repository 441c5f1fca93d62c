// Copyright 2025 Cowboy AI, LLC.

//! Less-or-equal for tuples, left to right
//!
//! A leading component that is not equivalent decides; otherwise the
//! instance of the remaining components does.

use super::{tie_break, LessOrEqual, Ordered};

/// Less-or-equal for pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple2LessOrEqual<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple2LessOrEqual<A, B> {
    /// Compose from the component instances.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Less-or-equal of a pair given as borrowed parts.
    pub fn le_parts<T1, T2>(&self, x: (&T1, &T2), y: (&T1, &T2)) -> bool
    where
        T1: ?Sized,
        T2: ?Sized,
        A: LessOrEqual<T1>,
        B: LessOrEqual<T2>,
    {
        tie_break(&self.first, x.0, y.0, || self.second.le(x.1, y.1))
    }
}

impl<T1, T2, A, B> LessOrEqual<(T1, T2)> for Tuple2LessOrEqual<A, B>
where
    A: LessOrEqual<T1>,
    B: LessOrEqual<T2>,
{
    fn le(&self, x: &(T1, T2), y: &(T1, T2)) -> bool {
        self.le_parts((&x.0, &x.1), (&y.0, &y.1))
    }
}

/// Less-or-equal for triples: first component, then the pair of the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple3LessOrEqual<A, B, C> {
    first: A,
    rest: Tuple2LessOrEqual<B, C>,
}

impl<A, B, C> Tuple3LessOrEqual<A, B, C> {
    /// Compose from the component instances.
    pub fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            rest: Tuple2LessOrEqual::new(second, third),
        }
    }

    /// Less-or-equal of a triple given as borrowed parts.
    pub fn le_parts<T1, T2, T3>(&self, x: (&T1, &T2, &T3), y: (&T1, &T2, &T3)) -> bool
    where
        T1: ?Sized,
        T2: ?Sized,
        T3: ?Sized,
        A: LessOrEqual<T1>,
        B: LessOrEqual<T2>,
        C: LessOrEqual<T3>,
    {
        tie_break(&self.first, x.0, y.0, || {
            self.rest.le_parts((x.1, x.2), (y.1, y.2))
        })
    }
}

impl<T1, T2, T3, A, B, C> LessOrEqual<(T1, T2, T3)> for Tuple3LessOrEqual<A, B, C>
where
    A: LessOrEqual<T1>,
    B: LessOrEqual<T2>,
    C: LessOrEqual<T3>,
{
    fn le(&self, x: &(T1, T2, T3), y: &(T1, T2, T3)) -> bool {
        self.le_parts((&x.0, &x.1, &x.2), (&y.0, &y.1, &y.2))
    }
}

/// Less-or-equal for 4-tuples: first component, then the triple of the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple4LessOrEqual<A, B, C, D> {
    first: A,
    rest: Tuple3LessOrEqual<B, C, D>,
}

impl<A, B, C, D> Tuple4LessOrEqual<A, B, C, D> {
    /// Compose from the component instances.
    pub fn new(first: A, second: B, third: C, fourth: D) -> Self {
        Self {
            first,
            rest: Tuple3LessOrEqual::new(second, third, fourth),
        }
    }
}

impl<T1, T2, T3, T4, A, B, C, D> LessOrEqual<(T1, T2, T3, T4)> for Tuple4LessOrEqual<A, B, C, D>
where
    A: LessOrEqual<T1>,
    B: LessOrEqual<T2>,
    C: LessOrEqual<T3>,
    D: LessOrEqual<T4>,
{
    fn le(&self, x: &(T1, T2, T3, T4), y: &(T1, T2, T3, T4)) -> bool {
        tie_break(&self.first, &x.0, &y.0, || {
            self.rest.le_parts((&x.1, &x.2, &x.3), (&y.1, &y.2, &y.3))
        })
    }
}

impl<T1: Ordered, T2: Ordered> Ordered for (T1, T2) {
    type LessOrEqual = Tuple2LessOrEqual<T1::LessOrEqual, T2::LessOrEqual>;

    fn less_or_equal() -> Self::LessOrEqual {
        Tuple2LessOrEqual::new(T1::less_or_equal(), T2::less_or_equal())
    }
}

impl<T1: Ordered, T2: Ordered, T3: Ordered> Ordered for (T1, T2, T3) {
    type LessOrEqual = Tuple3LessOrEqual<T1::LessOrEqual, T2::LessOrEqual, T3::LessOrEqual>;

    fn less_or_equal() -> Self::LessOrEqual {
        Tuple3LessOrEqual::new(
            T1::less_or_equal(),
            T2::less_or_equal(),
            T3::less_or_equal(),
        )
    }
}

impl<T1: Ordered, T2: Ordered, T3: Ordered, T4: Ordered> Ordered for (T1, T2, T3, T4) {
    type LessOrEqual =
        Tuple4LessOrEqual<T1::LessOrEqual, T2::LessOrEqual, T3::LessOrEqual, T4::LessOrEqual>;

    fn less_or_equal() -> Self::LessOrEqual {
        Tuple4LessOrEqual::new(
            T1::less_or_equal(),
            T2::less_or_equal(),
            T3::less_or_equal(),
            T4::less_or_equal(),
        )
    }
}
