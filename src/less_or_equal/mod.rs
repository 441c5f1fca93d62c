// Copyright 2025 Cowboy AI, LLC.

//! Boolean ordering: the `LessOrEqual` capability and the `Ordered` type class
//!
//! This family answers a single question, "does `x` precede or equal `y`",
//! and derives equality as `le(x, y) && le(y, x)`. It runs parallel to
//! [`crate::three_way`] rather than on top of it; instances compose the same
//! way (scalars, sequences, tuples) but never go through a three-way result.
//!
//! ```rust
//! use cim_ordering::less_or_equal;
//!
//! assert!(less_or_equal::le(&-5, &10));
//! assert!(!less_or_equal::le(&vec![1, 2, 4], &vec![1, 2, 3]));
//! ```

mod derived;
mod scalar;
mod sequence;
mod tuple;

pub use derived::{equal, equal_by, le, max, max_by, min, min_by};
pub use scalar::{FnLessOrEqual, IntegerLessOrEqual, NaturalLessOrEqual, TextLessOrEqual};
pub use sequence::{lexicographic_le, SequenceLessOrEqual};
pub use tuple::{Tuple2LessOrEqual, Tuple3LessOrEqual, Tuple4LessOrEqual};

/// A non-strict "precedes or equals" predicate over `T`.
///
/// Must be reflexive, antisymmetric, transitive and total; any two values
/// for which both `le(x, y)` and `le(y, x)` hold are treated as equal.
pub trait LessOrEqual<T: ?Sized> {
    /// Whether `x` precedes or equals `y`.
    fn le(&self, x: &T, y: &T) -> bool;

    /// Derived equality: `le(x, y) && le(y, x)`.
    fn equivalent(&self, x: &T, y: &T) -> bool {
        self.le(x, y) && self.le(y, x)
    }
}

impl<T: ?Sized, L: LessOrEqual<T> + ?Sized> LessOrEqual<T> for &L {
    fn le(&self, x: &T, y: &T) -> bool {
        (**self).le(x, y)
    }
}

/// Type class: types with a canonical less-or-equal instance.
pub trait Ordered {
    /// The instance for this type.
    type LessOrEqual: LessOrEqual<Self>;

    /// Build the instance.
    fn less_or_equal() -> Self::LessOrEqual;
}

/// Decide a composite comparison from its leading component.
///
/// When the components are equivalent the answer comes from `rest`;
/// otherwise the leading `le(x, y)` is the answer and `rest` is not run.
pub(crate) fn tie_break<T, L, R>(lead: &L, x: &T, y: &T, rest: R) -> bool
where
    T: ?Sized,
    L: LessOrEqual<T>,
    R: FnOnce() -> bool,
{
    let forward = lead.le(x, y);
    if forward && lead.le(y, x) {
        rest()
    } else {
        forward
    }
}
