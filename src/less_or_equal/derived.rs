// Copyright 2025 Cowboy AI, LLC.

//! Operations derived from any less-or-equal instance

use super::{LessOrEqual, Ordered};

/// `le(x, y)` with the canonical instance of `T`.
pub fn le<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    T::less_or_equal().le(x, y)
}

/// The larger of `x` and `y`: `x` only when it strictly follows `y`.
pub fn max_by<'a, T, L>(instance: &L, x: &'a T, y: &'a T) -> &'a T
where
    T: ?Sized,
    L: LessOrEqual<T> + ?Sized,
{
    if instance.le(x, y) {
        y
    } else {
        x
    }
}

/// The smaller of `x` and `y`; ties go to `x`.
pub fn min_by<'a, T, L>(instance: &L, x: &'a T, y: &'a T) -> &'a T
where
    T: ?Sized,
    L: LessOrEqual<T> + ?Sized,
{
    if instance.le(x, y) {
        x
    } else {
        y
    }
}

/// Derived equality: `le(x, y) && le(y, x)`.
pub fn equal_by<T, L>(instance: &L, x: &T, y: &T) -> bool
where
    T: ?Sized,
    L: LessOrEqual<T> + ?Sized,
{
    instance.le(x, y) && instance.le(y, x)
}

/// [`max_by`] with the canonical instance.
pub fn max<'a, T: Ordered + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    max_by(&T::less_or_equal(), x, y)
}

/// [`min_by`] with the canonical instance.
pub fn min<'a, T: Ordered + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    min_by(&T::less_or_equal(), x, y)
}

/// [`equal_by`] with the canonical instance.
pub fn equal<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    equal_by(&T::less_or_equal(), x, y)
}
