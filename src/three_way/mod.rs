// Copyright 2025 Cowboy AI, LLC.

//! Three-way comparison: the `Comparator` capability and the `Comparable` type class
//!
//! A [`Comparator<T>`] is a stateless capability that orders two values of `T`,
//! answering `Less`, `Equal` or `Greater`. Comparators for composite shapes are
//! built from the comparators of their parts:
//!
//! ```text
//! IntegerComparator ──┐
//!                     ├─> Tuple2Comparator ──> SequenceComparator
//! TextComparator ─────┘
//! ```
//!
//! The [`Comparable`] type class names the canonical comparator of a type.
//! Composite instances are synthesized from the instances of their
//! components, so `Vec<(String, i64)>` is comparable because `String` and
//! `i64` are. Resolution happens entirely in the type checker; a type without
//! an instance is rejected at build time:
//!
//! ```compile_fail
//! use cim_ordering::three_way;
//!
//! // f64 is not totally ordered and has no instance
//! let _ = three_way::compare(&1.0_f64, &2.0_f64);
//! ```

use std::cmp::Ordering;

mod adapters;
mod derived;
mod scalar;
mod sequence;
mod tuple;

pub use adapters::{ByKey, FnComparator, Reversed};
pub use derived::{compare, equal, equal_by, max, max_by, min, min_by};
pub use scalar::{IntegerComparator, NaturalComparator, TextComparator};
pub use sequence::{lexicographic, SequenceComparator};
pub use tuple::{Tuple2Comparator, Tuple3Comparator, Tuple4Comparator};

/// A total-order comparison capability for values of `T`.
///
/// Implementations must be consistent with a total order: reflexive,
/// antisymmetric and transitive. Composite comparators inherit their
/// correctness from their parts, so a broken component silently breaks every
/// ordering built on top of it. [`crate::laws::LawChecker`] can verify an
/// instance against sample values.
pub trait Comparator<T: ?Sized> {
    /// Order `x` relative to `y`.
    fn compare(&self, x: &T, y: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (**self).compare(x, y)
    }
}

/// Type class: types with a canonical three-way comparator.
pub trait Comparable {
    /// The comparator instance for this type.
    type Comparator: Comparator<Self>;

    /// Build the comparator instance.
    fn comparator() -> Self::Comparator;
}

/// Collapse an [`Ordering`] to the fixed signed indicator `-1`, `0` or `1`.
pub fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_fixed_three_values() {
        assert_eq!(sign(Ordering::Less), -1);
        assert_eq!(sign(Ordering::Equal), 0);
        assert_eq!(sign(Ordering::Greater), 1);
    }

    #[test]
    fn test_reference_forwards_to_comparator() {
        let cmp = IntegerComparator;
        let by_ref = &cmp;
        assert_eq!(by_ref.compare(&1_i32, &2_i32), Ordering::Less);
    }

    #[test]
    fn test_comparators_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        assert_send_sync(&<Vec<(String, i64, Vec<String>)> as Comparable>::comparator());
        assert_send_sync(&Reversed::new(TextComparator));
    }
}
