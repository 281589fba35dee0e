//! Error types for the ldirect implementation.
//!
//! Evaluation failures (`Dimension`, `Domain`) are always fatal to the call that
//! raised them and abort the current run. Nothing is retried or replaced by a
//! fallback value.

use thiserror::Error;

use crate::types::Bounds;

/// Errors that can occur during DIRECT optimization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectError {
    /// The evaluation point does not have one coordinate per domain dimension.
    #[error("point has incorrect number of dimensions (expected {expected}, got {actual})")]
    Dimension { expected: usize, actual: usize },

    /// The evaluation point lies outside the configured domain.
    #[error("point {point:?} not within domain {bounds:?}")]
    Domain { point: Vec<f64>, bounds: Bounds },

    #[error("Invalid bounds: lower bound > upper bound or non-finite bound in dimension {dim}")]
    InvalidBounds { dim: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type alias for DIRECT operations.
pub type Result<T> = std::result::Result<T, DirectError>;

/// Validate a bound sequence: non-empty, finite, and `low <= high` per dimension.
///
/// Degenerate dimensions (`low == high`) are allowed.
pub(crate) fn validate_bounds(bounds: &[(f64, f64)]) -> Result<()> {
    if bounds.is_empty() {
        return Err(DirectError::InvalidArgs("dimension must be > 0".into()));
    }
    for (dim, &(lo, hi)) in bounds.iter().enumerate() {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(DirectError::InvalidBounds { dim });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = DirectError::Dimension {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "point has incorrect number of dimensions (expected 2, got 1)"
        );
    }

    #[test]
    fn test_domain_message_names_point() {
        let err = DirectError::Domain {
            point: vec![2.0],
            bounds: vec![(0.0, 1.0)],
        };
        let msg = err.to_string();
        assert!(msg.contains("[2.0]"), "{}", msg);
        assert!(msg.contains("(0.0, 1.0)"), "{}", msg);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(&[(-1.0, 1.0), (0.0, 0.0)]).is_ok());
        assert_eq!(
            validate_bounds(&[(0.0, 1.0), (2.0, 1.0)]),
            Err(DirectError::InvalidBounds { dim: 1 })
        );
        assert_eq!(
            validate_bounds(&[(f64::NEG_INFINITY, 1.0)]),
            Err(DirectError::InvalidBounds { dim: 0 })
        );
        assert!(matches!(
            validate_bounds(&[]),
            Err(DirectError::InvalidArgs(_))
        ));
    }
}
