// Copyright 2025 Cowboy AI, LLC.

//! Error types for ordering operations
//!
//! Comparing two values never fails. Errors only arise on the surfaces built
//! around the comparison engine: checking a comparator against the total-order
//! laws and loading the checker's configuration.

use thiserror::Error;

use crate::laws::Law;

/// Errors that can occur outside the comparison engine itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// A comparator broke one of the total-order laws on the sampled values
    #[error("Law violation ({law}): {detail}")]
    LawViolation {
        /// The law that failed
        law: Law,
        /// Which sample values exposed the failure
        detail: String,
    },

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for ordering operations
pub type OrderingResult<T> = Result<T, OrderingError>;

impl From<serde_json::Error> for OrderingError {
    fn from(err: serde_json::Error) -> Self {
        OrderingError::Serialization(err.to_string())
    }
}

impl OrderingError {
    /// Create a law violation error
    pub fn violation(law: Law, detail: impl Into<String>) -> Self {
        OrderingError::LawViolation {
            law,
            detail: detail.into(),
        }
    }

    /// The violated law, if this is a law violation
    pub fn law(&self) -> Option<Law> {
        match self {
            OrderingError::LawViolation { law, .. } => Some(*law),
            _ => None,
        }
    }

    /// Check if this is a law violation
    pub fn is_law_violation(&self) -> bool {
        matches!(self, OrderingError::LawViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = OrderingError::violation(Law::Reflexivity, "compare(3, 3) returned Less");
        assert_eq!(
            err.to_string(),
            "Law violation (reflexivity): compare(3, 3) returned Less"
        );

        let err = OrderingError::InvalidConfig("max_samples must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_samples must be positive"
        );

        let err = OrderingError::Serialization("eof".to_string());
        assert_eq!(err.to_string(), "Serialization error: eof");
    }

    #[test]
    fn test_error_predicates() {
        let err = OrderingError::violation(Law::Transitivity, "a <= b <= c but a > c");
        assert!(err.is_law_violation());
        assert_eq!(err.law(), Some(Law::Transitivity));

        let err = OrderingError::InvalidConfig("bad".to_string());
        assert!(!err.is_law_violation());
        assert_eq!(err.law(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: OrderingError = json_err.into();
        assert!(matches!(err, OrderingError::Serialization(_)));
    }
}
