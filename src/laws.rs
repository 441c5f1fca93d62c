// Copyright 2025 Cowboy AI, LLC.

//! Total-order law checking over sample values
//!
//! A comparator that is not a total order does not fail loudly: every
//! sequence and tuple comparator built on it just produces wrong answers.
//! [`LawChecker`] exercises an instance against a finite sample set and
//! reports the first law it breaks.
//!
//! # Laws
//!
//! | Law | Three-way | Less-or-equal |
//! |-----|-----------|---------------|
//! | Reflexivity | `compare(x, x) == Equal` | `le(x, x)` |
//! | Antisymmetry | `compare(x, y) == compare(y, x).reverse()` | equivalent values are interchangeable against every sample |
//! | Totality | implied by the result type | `le(x, y) \|\| le(y, x)` |
//! | Transitivity | `x <= y && y <= z => x <= z` | same |
//! | Agreement | a comparator and an instance order every pair the same way | |

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LawCheckConfig;
use crate::errors::{OrderingError, OrderingResult};
use crate::less_or_equal::LessOrEqual;
use crate::three_way::Comparator;

/// The laws a total order must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// Every value equals itself.
    Reflexivity,
    /// Swapping the arguments flips the answer; equal values are interchangeable.
    Antisymmetry,
    /// Every pair is ordered one way or the other.
    Totality,
    /// Ordering chains compose.
    Transitivity,
    /// Two instances for the same type describe the same order.
    Agreement,
}

impl Display for Law {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::Reflexivity => "reflexivity",
            Law::Antisymmetry => "antisymmetry",
            Law::Totality => "totality",
            Law::Transitivity => "transitivity",
            Law::Agreement => "agreement",
        };
        f.write_str(name)
    }
}

/// What a successful check covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LawReport {
    /// Number of sample values used
    pub samples: usize,
    /// Number of ordered pairs examined
    pub pairs: usize,
    /// Number of ordered triples examined
    pub triples: usize,
    /// Laws that held
    pub laws: Vec<Law>,
}

impl LawReport {
    fn new(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    fn held(&mut self, law: Law) {
        debug!(%law, samples = self.samples, "law held");
        self.laws.push(law);
    }
}

/// Checks comparators and less-or-equal instances against the total-order laws.
#[derive(Debug, Clone, Default)]
pub struct LawChecker {
    config: LawCheckConfig,
}

impl LawChecker {
    /// Create a checker after validating `config`.
    pub fn new(config: LawCheckConfig) -> OrderingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &LawCheckConfig {
        &self.config
    }

    fn bounded<'a, T>(&self, samples: &'a [T]) -> &'a [T] {
        &samples[..samples.len().min(self.config.max_samples)]
    }

    fn triple_samples<'a, T>(&self, samples: &'a [T]) -> Option<&'a [T]> {
        self.config
            .check_triples
            .then(|| &samples[..samples.len().min(self.config.max_triple_samples)])
    }

    /// Verify that `comparator` is a total order on `samples`.
    pub fn check_comparator<T, C>(&self, comparator: &C, samples: &[T]) -> OrderingResult<LawReport>
    where
        T: Debug,
        C: Comparator<T> + ?Sized,
    {
        let samples = self.bounded(samples);
        let mut report = LawReport::new(samples.len());

        for x in samples {
            let ordering = comparator.compare(x, x);
            if ordering != Ordering::Equal {
                return Err(violation(
                    Law::Reflexivity,
                    format!("compare({x:?}, {x:?}) returned {ordering:?}"),
                ));
            }
        }
        report.held(Law::Reflexivity);

        for x in samples {
            for y in samples {
                report.pairs += 1;
                let forward = comparator.compare(x, y);
                let backward = comparator.compare(y, x);
                if forward != backward.reverse() {
                    return Err(violation(
                        Law::Antisymmetry,
                        format!(
                            "compare({x:?}, {y:?}) returned {forward:?} but compare({y:?}, {x:?}) returned {backward:?}"
                        ),
                    ));
                }
            }
        }
        report.held(Law::Antisymmetry);

        if let Some(triples) = self.triple_samples(samples) {
            let le = |x: &T, y: &T| comparator.compare(x, y) != Ordering::Greater;
            check_transitivity(&le, triples, &mut report)?;
        }

        info!(
            samples = report.samples,
            pairs = report.pairs,
            triples = report.triples,
            "Comparator satisfies total-order laws"
        );
        Ok(report)
    }

    /// Verify that `instance` is a total order on `samples`.
    pub fn check_less_or_equal<T, L>(&self, instance: &L, samples: &[T]) -> OrderingResult<LawReport>
    where
        T: Debug,
        L: LessOrEqual<T> + ?Sized,
    {
        let samples = self.bounded(samples);
        let mut report = LawReport::new(samples.len());

        if let Some(x) = samples.iter().find(|x| !instance.le(x, x)) {
            return Err(violation(
                Law::Reflexivity,
                format!("le({x:?}, {x:?}) is false"),
            ));
        }
        report.held(Law::Reflexivity);

        for x in samples {
            for y in samples {
                report.pairs += 1;
                if !instance.le(x, y) && !instance.le(y, x) {
                    return Err(violation(
                        Law::Totality,
                        format!("neither le({x:?}, {y:?}) nor le({y:?}, {x:?})"),
                    ));
                }
            }
        }
        report.held(Law::Totality);

        if let Some(triples) = self.triple_samples(samples) {
            for x in triples {
                for y in triples.iter().filter(|y| instance.equivalent(x, y)) {
                    for z in triples {
                        if instance.le(x, z) != instance.le(y, z)
                            || instance.le(z, x) != instance.le(z, y)
                        {
                            return Err(violation(
                                Law::Antisymmetry,
                                format!(
                                    "{x:?} and {y:?} are equivalent but order differently against {z:?}"
                                ),
                            ));
                        }
                    }
                }
            }
            report.held(Law::Antisymmetry);

            let le = |x: &T, y: &T| instance.le(x, y);
            check_transitivity(&le, triples, &mut report)?;
        }

        info!(
            samples = report.samples,
            pairs = report.pairs,
            triples = report.triples,
            "Less-or-equal instance satisfies total-order laws"
        );
        Ok(report)
    }

    /// Verify that `comparator` and `instance` order every sample pair the same way.
    pub fn check_agreement<T, C, L>(
        &self,
        comparator: &C,
        instance: &L,
        samples: &[T],
    ) -> OrderingResult<LawReport>
    where
        T: Debug,
        C: Comparator<T> + ?Sized,
        L: LessOrEqual<T> + ?Sized,
    {
        let samples = self.bounded(samples);
        let mut report = LawReport::new(samples.len());

        for x in samples {
            for y in samples {
                report.pairs += 1;
                let ordering = comparator.compare(x, y);
                let le = instance.le(x, y);
                if le != (ordering != Ordering::Greater) {
                    return Err(violation(
                        Law::Agreement,
                        format!("compare({x:?}, {y:?}) returned {ordering:?} but le is {le}"),
                    ));
                }
            }
        }
        report.held(Law::Agreement);

        info!(pairs = report.pairs, "Comparator and less-or-equal instance agree");
        Ok(report)
    }
}

fn check_transitivity<T, F>(le: &F, samples: &[T], report: &mut LawReport) -> OrderingResult<()>
where
    T: Debug,
    F: Fn(&T, &T) -> bool,
{
    for x in samples {
        for y in samples.iter().filter(|y| le(x, *y)) {
            for z in samples.iter().filter(|z| le(y, *z)) {
                report.triples += 1;
                if !le(x, z) {
                    return Err(violation(
                        Law::Transitivity,
                        format!("{x:?} <= {y:?} and {y:?} <= {z:?} but not {x:?} <= {z:?}"),
                    ));
                }
            }
        }
    }
    report.held(Law::Transitivity);
    Ok(())
}

fn violation(law: Law, detail: String) -> OrderingError {
    warn!(%law, %detail, "Total-order law violated");
    OrderingError::violation(law, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::LessOrEqualFromThreeWay;
    use crate::less_or_equal::{FnLessOrEqual, IntegerLessOrEqual, Ordered};
    use crate::three_way::{Comparable, FnComparator, IntegerComparator, TextComparator};

    fn ints() -> Vec<i64> {
        vec![-7, 0, 3, 3, 12, i64::MIN, i64::MAX]
    }

    #[test]
    fn test_integer_comparator_passes() {
        let report = LawChecker::default()
            .check_comparator(&IntegerComparator, &ints())
            .unwrap();
        assert_eq!(report.samples, 7);
        assert_eq!(report.pairs, 49);
        assert!(report.triples > 0);
        assert_eq!(
            report.laws,
            vec![Law::Reflexivity, Law::Antisymmetry, Law::Transitivity]
        );
    }

    #[test]
    fn test_composite_instances_pass() {
        let samples = vec![
            vec![("a".to_string(), 1_u8)],
            vec![],
            vec![("a".to_string(), 1_u8), ("b".to_string(), 0)],
            vec![("a".to_string(), 0_u8)],
        ];
        let checker = LawChecker::default();
        checker
            .check_comparator(&<Vec<(String, u8)>>::comparator(), &samples)
            .unwrap();
        checker
            .check_less_or_equal(&<Vec<(String, u8)>>::less_or_equal(), &samples)
            .unwrap();
        checker
            .check_agreement(
                &<Vec<(String, u8)>>::comparator(),
                &<Vec<(String, u8)>>::less_or_equal(),
                &samples,
            )
            .unwrap();
    }

    #[test]
    fn test_irreflexive_comparator_rejected() {
        let strict = FnComparator::new(|x: &i64, y: &i64| {
            if x <= y {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let err = LawChecker::default()
            .check_comparator(&strict, &ints())
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Reflexivity));
    }

    #[test]
    fn test_lopsided_comparator_rejected() {
        // claims everything is less than everything else
        let always_less = FnComparator::new(|x: &i64, y: &i64| {
            if x == y {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        });
        let err = LawChecker::default()
            .check_comparator(&always_less, &ints())
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Antisymmetry));
    }

    #[test]
    fn test_intransitive_comparator_rejected() {
        // rock, paper, scissors
        let beats = FnComparator::new(|x: &u8, y: &u8| match (x, y) {
            _ if x == y => Ordering::Equal,
            (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
            _ => Ordering::Greater,
        });
        let err = LawChecker::default()
            .check_comparator(&beats, &[0_u8, 1, 2])
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Transitivity));
    }

    #[test]
    fn test_partial_le_rejected() {
        let divides = FnLessOrEqual::new(|x: &u32, y: &u32| *x != 0 && y % x == 0);
        let err = LawChecker::default()
            .check_less_or_equal(&divides, &[1_u32, 2, 3])
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Totality));
    }

    #[test]
    fn test_le_with_inconsistent_equivalence_rejected() {
        // 0 and 1 claim to be equivalent, yet only 1 <= 2
        let le = FnLessOrEqual::new(|x: &u8, y: &u8| match (x, y) {
            (0, 1) | (1, 0) => true,
            (0, 2) => false,
            (2, 0) => true,
            _ => x <= y,
        });
        let err = LawChecker::default()
            .check_less_or_equal(&le, &[0_u8, 1, 2])
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Antisymmetry));
    }

    #[test]
    fn test_disagreement_rejected() {
        let err = LawChecker::default()
            .check_agreement(
                &TextComparator,
                &FnLessOrEqual::new(|x: &&str, y: &&str| x.len() <= y.len()),
                &["b", "aa"][..],
            )
            .unwrap_err();
        assert_eq!(err.law(), Some(Law::Agreement));
    }

    #[test]
    fn test_bridge_agrees_with_source() {
        let samples = ints();
        LawChecker::default()
            .check_agreement(
                &IntegerComparator,
                &LessOrEqualFromThreeWay::new(IntegerComparator),
                &samples,
            )
            .unwrap();
        LawChecker::default()
            .check_less_or_equal(&IntegerLessOrEqual, &samples)
            .unwrap();
    }

    #[test]
    fn test_sample_bounds_respected() {
        let checker = LawChecker::new(LawCheckConfig {
            max_samples: 3,
            max_triple_samples: 2,
            check_triples: true,
        })
        .unwrap();
        let report = checker.check_comparator(&IntegerComparator, &ints()).unwrap();
        assert_eq!(report.samples, 3);
        assert_eq!(report.pairs, 9);
        assert!(report.triples <= 8);

        let no_triples = LawChecker::new(LawCheckConfig {
            check_triples: false,
            ..LawCheckConfig::default()
        })
        .unwrap();
        let report = no_triples
            .check_comparator(&IntegerComparator, &ints())
            .unwrap();
        assert_eq!(report.triples, 0);
        assert!(!report.laws.contains(&Law::Transitivity));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = LawChecker::new(LawCheckConfig {
            max_samples: 0,
            ..LawCheckConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, OrderingError::InvalidConfig(_)));
    }

    #[test]
    fn test_law_display() {
        assert_eq!(Law::Transitivity.to_string(), "transitivity");
        assert_eq!(
            serde_json::to_string(&Law::Agreement).unwrap(),
            "\"agreement\""
        );
    }
}
