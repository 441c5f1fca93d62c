// Copyright 2025 Cowboy AI, LLC.

//! Configuration for the law checker

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{OrderingError, OrderingResult};

/// How much work [`crate::laws::LawChecker`] is allowed to do.
///
/// Pairwise laws are quadratic in the number of samples and the triple laws
/// are cubic, so the triple laws get their own, smaller bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LawCheckConfig {
    /// Only the first `max_samples` values are checked
    pub max_samples: usize,
    /// Only the first `max_triple_samples` values take part in triple laws
    pub max_triple_samples: usize,
    /// Whether transitivity and substitutability are checked at all
    pub check_triples: bool,
}

impl Default for LawCheckConfig {
    fn default() -> Self {
        Self {
            max_samples: 256,
            max_triple_samples: 48,
            check_triples: true,
        }
    }
}

impl LawCheckConfig {
    /// Load a configuration from JSON; missing fields take their defaults.
    ///
    /// ```rust
    /// use cim_ordering::LawCheckConfig;
    ///
    /// let config = LawCheckConfig::from_json_str(r#"{ "max_samples": 10 }"#).unwrap();
    /// assert_eq!(config.max_samples, 10);
    /// assert!(config.check_triples);
    /// ```
    pub fn from_json_str(json: &str) -> OrderingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> OrderingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject bounds that would make every check vacuous.
    pub fn validate(&self) -> OrderingResult<()> {
        if self.max_samples == 0 {
            return Err(OrderingError::InvalidConfig(
                "max_samples must be positive".to_string(),
            ));
        }
        if self.check_triples && self.max_triple_samples == 0 {
            return Err(OrderingError::InvalidConfig(
                "max_triple_samples must be positive when check_triples is set".to_string(),
            ));
        }
        Ok(())
    }
}
