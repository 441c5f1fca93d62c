// Copyright 2025 Cowboy AI, LLC.

//! Tuple comparators by tie-break composition
//!
//! Components are compared strictly left to right; the first component that
//! is not `Equal` decides and the rest are never looked at. An n-tuple
//! comparator holds its first component comparator and the (n-1)-tuple
//! comparator of the remaining components.

use std::cmp::Ordering;

use super::{Comparable, Comparator};

/// Comparator for pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple2Comparator<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple2Comparator<A, B> {
    /// Compose a pair comparator from its component comparators.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Compare a pair given as borrowed parts.
    pub fn compare_parts<T1, T2>(&self, x: (&T1, &T2), y: (&T1, &T2)) -> Ordering
    where
        T1: ?Sized,
        T2: ?Sized,
        A: Comparator<T1>,
        B: Comparator<T2>,
    {
        self.first
            .compare(x.0, y.0)
            .then_with(|| self.second.compare(x.1, y.1))
    }
}

impl<T1, T2, A, B> Comparator<(T1, T2)> for Tuple2Comparator<A, B>
where
    A: Comparator<T1>,
    B: Comparator<T2>,
{
    fn compare(&self, x: &(T1, T2), y: &(T1, T2)) -> Ordering {
        self.compare_parts((&x.0, &x.1), (&y.0, &y.1))
    }
}

/// Comparator for triples: first component, then the pair of the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple3Comparator<A, B, C> {
    first: A,
    rest: Tuple2Comparator<B, C>,
}

impl<A, B, C> Tuple3Comparator<A, B, C> {
    /// Compose a triple comparator from its component comparators.
    pub fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            rest: Tuple2Comparator::new(second, third),
        }
    }

    /// Compare a triple given as borrowed parts.
    pub fn compare_parts<T1, T2, T3>(
        &self,
        x: (&T1, &T2, &T3),
        y: (&T1, &T2, &T3),
    ) -> Ordering
    where
        T1: ?Sized,
        T2: ?Sized,
        T3: ?Sized,
        A: Comparator<T1>,
        B: Comparator<T2>,
        C: Comparator<T3>,
    {
        self.first
            .compare(x.0, y.0)
            .then_with(|| self.rest.compare_parts((x.1, x.2), (y.1, y.2)))
    }
}

impl<T1, T2, T3, A, B, C> Comparator<(T1, T2, T3)> for Tuple3Comparator<A, B, C>
where
    A: Comparator<T1>,
    B: Comparator<T2>,
    C: Comparator<T3>,
{
    fn compare(&self, x: &(T1, T2, T3), y: &(T1, T2, T3)) -> Ordering {
        self.compare_parts((&x.0, &x.1, &x.2), (&y.0, &y.1, &y.2))
    }
}

/// Comparator for 4-tuples: first component, then the triple of the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple4Comparator<A, B, C, D> {
    first: A,
    rest: Tuple3Comparator<B, C, D>,
}

impl<A, B, C, D> Tuple4Comparator<A, B, C, D> {
    /// Compose a 4-tuple comparator from its component comparators.
    pub fn new(first: A, second: B, third: C, fourth: D) -> Self {
        Self {
            first,
            rest: Tuple3Comparator::new(second, third, fourth),
        }
    }
}

impl<T1, T2, T3, T4, A, B, C, D> Comparator<(T1, T2, T3, T4)> for Tuple4Comparator<A, B, C, D>
where
    A: Comparator<T1>,
    B: Comparator<T2>,
    C: Comparator<T3>,
    D: Comparator<T4>,
{
    fn compare(&self, x: &(T1, T2, T3, T4), y: &(T1, T2, T3, T4)) -> Ordering {
        self.first
            .compare(&x.0, &y.0)
            .then_with(|| self.rest.compare_parts((&x.1, &x.2, &x.3), (&y.1, &y.2, &y.3)))
    }
}

impl<T1: Comparable, T2: Comparable> Comparable for (T1, T2) {
    type Comparator = Tuple2Comparator<T1::Comparator, T2::Comparator>;

    fn comparator() -> Self::Comparator {
        Tuple2Comparator::new(T1::comparator(), T2::comparator())
    }
}

impl<T1: Comparable, T2: Comparable, T3: Comparable> Comparable for (T1, T2, T3) {
    type Comparator = Tuple3Comparator<T1::Comparator, T2::Comparator, T3::Comparator>;

    fn comparator() -> Self::Comparator {
        Tuple3Comparator::new(T1::comparator(), T2::comparator(), T3::comparator())
    }
}

impl<T1: Comparable, T2: Comparable, T3: Comparable, T4: Comparable> Comparable
    for (T1, T2, T3, T4)
{
    type Comparator =
        Tuple4Comparator<T1::Comparator, T2::Comparator, T3::Comparator, T4::Comparator>;

    fn comparator() -> Self::Comparator {
        Tuple4Comparator::new(
            T1::comparator(),
            T2::comparator(),
            T3::comparator(),
            T4::comparator(),
        )
    }
}
