// Copyright 2025 Cowboy AI, LLC.

//! Comparator adapters for user-defined types and derived orderings

use std::cmp::Ordering;
use std::marker::PhantomData;

use super::Comparator;

/// Flip the order of another comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    /// Reverse `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Recover the original comparator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self.inner.compare(x, y).reverse()
    }
}

/// Order values by a projected key.
///
/// This is how a domain type obtains an instance from the instances of its
/// fields:
///
/// ```rust
/// use std::cmp::Ordering;
/// use cim_ordering::three_way::{ByKey, Comparator, IntegerComparator};
///
/// struct Version { major: u32, label: &'static str }
///
/// let by_major = ByKey::new(|v: &Version| v.major, IntegerComparator);
/// let old = Version { major: 1, label: "old" };
/// let new = Version { major: 2, label: "new" };
/// assert_eq!(by_major.compare(&old, &new), Ordering::Less);
/// # let _ = (old.label, new.label);
/// ```
pub struct ByKey<F, K, C> {
    key: F,
    comparator: C,
    _key: PhantomData<fn() -> K>,
}

impl<F, K, C> ByKey<F, K, C> {
    /// Compare by `key`, ordering the keys with `comparator`.
    pub fn new(key: F, comparator: C) -> Self {
        Self {
            key,
            comparator,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K, C: Clone> Clone for ByKey<F, K, C> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone(), self.comparator.clone())
    }
}

impl<T, F, K, C> Comparator<T> for ByKey<F, K, C>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self.comparator.compare(&(self.key)(x), &(self.key)(y))
    }
}

/// A closure used as a comparator.
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    compare: F,
}

impl<F> FnComparator<F> {
    /// Wrap `compare`. It must describe a total order.
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for FnComparator<F> {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (self.compare)(x, y)
    }
}
