// Copyright 2025 Cowboy AI, LLC.

//! # CIM Ordering
//!
//! Composable total orderings for the Composable Information Machine.
//!
//! This crate models ordering as a type class: a capability a type obtains by
//! implementing a trait, with instances for composite shapes synthesized from
//! the instances of their parts. Two parallel families are provided:
//!
//! - **Three-way** ([`three_way`]): `Comparator<T>` answers `Less`, `Equal` or
//!   `Greater`; the [`Comparable`] type class names each type's canonical one.
//! - **Less-or-equal** ([`less_or_equal`]): `LessOrEqual<T>` answers whether
//!   `x` precedes or equals `y`; the [`Ordered`] type class names each type's
//!   canonical one. Equality is `le(x, y) && le(y, x)`.
//!
//! Both families cover integers, text, sequences (lexicographic, a prefix
//! precedes its extensions) and tuples up to four components (left to right,
//! first difference decides).
//!
//! ## Design Principles
//!
//! 1. **Static resolution**: instances are found by the type checker; a type
//!    without one is a build error, never a runtime failure
//! 2. **Composition**: sequence and tuple instances are built from the
//!    instances of their parts, once, at construction
//! 3. **Stateless**: comparators hold only other comparators and are
//!    `Send + Sync` whenever their parts are
//! 4. **Bounded stack**: sequence comparison is a loop, whatever the length
//!
//! ```rust
//! use std::cmp::Ordering;
//! use cim_ordering::{less_or_equal, three_way};
//!
//! let x = vec![("a", 5, vec!["x", "y"]), ("b", 11, vec!["p", "q"])];
//! let y = vec![("a", 5, vec!["x", "y"]), ("b", 11, vec!["p"])];
//!
//! assert_eq!(three_way::compare(&x, &y), Ordering::Greater);
//! assert!(!less_or_equal::le(&x, &y));
//! ```

#![warn(missing_docs)]

mod config;
mod errors;

pub mod bridge;
pub mod laws;
pub mod less_or_equal;
pub mod three_way;

pub use bridge::{LessOrEqualFromThreeWay, ThreeWayFromLessOrEqual};
pub use config::LawCheckConfig;
pub use errors::{OrderingError, OrderingResult};
pub use laws::{Law, LawChecker, LawReport};
pub use less_or_equal::{LessOrEqual, Ordered};
pub use three_way::{sign, Comparable, Comparator};
