//! Error types for the distance library.

use thiserror::Error;

/// Errors that can occur when validating legs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    /// At least one leg is below zero.
    #[error("Distance cannot be negative.")]
    NegativeLeg { vertical: f64, horizontal: f64 },

    /// At least one leg is NaN or infinite.
    #[error("Distance must be finite: vertical={vertical}, horizontal={horizontal}")]
    NonFinite { vertical: f64, horizontal: f64 },
}

/// Result type alias using [`DistanceError`].
pub type Result<T> = std::result::Result<T, DistanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DistanceError::NegativeLeg {
            vertical: -1.0,
            horizontal: 2.0,
        };
        assert_eq!(err.to_string(), "Distance cannot be negative.");

        let err = DistanceError::NonFinite {
            vertical: f64::NAN,
            horizontal: 2.0,
        };
        assert!(err.to_string().contains("NaN"));
    }
}
