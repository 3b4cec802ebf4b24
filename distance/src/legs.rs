//! Leg validation and distance computation.

use crate::error::{DistanceError, Result};

/// Two validated, orthogonal legs of a right triangle.
///
/// Both legs are finite and non-negative. Construct with [`Legs::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legs {
    vertical: f64,
    horizontal: f64,
}

impl Legs {
    /// Validate a pair of legs.
    ///
    /// # Errors
    ///
    /// - [`DistanceError::NonFinite`] if either leg is NaN or infinite
    /// - [`DistanceError::NegativeLeg`] if either leg is below zero
    pub fn new(vertical: f64, horizontal: f64) -> Result<Self> {
        if !vertical.is_finite() || !horizontal.is_finite() {
            return Err(DistanceError::NonFinite {
                vertical,
                horizontal,
            });
        }
        if vertical < 0.0 || horizontal < 0.0 {
            return Err(DistanceError::NegativeLeg {
                vertical,
                horizontal,
            });
        }
        Ok(Self {
            vertical,
            horizontal,
        })
    }

    /// Vertical leg.
    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    /// Horizontal leg.
    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    /// Unrounded hypotenuse, `sqrt(vertical² + horizontal²)`.
    ///
    /// Uses [`f64::hypot`] so very large legs do not overflow the squares.
    pub fn distance(&self) -> f64 {
        self.vertical.hypot(self.horizontal)
    }
}

/// Values at or above this magnitude have no fractional part.
const NO_FRACTION: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to two decimal places, ties to even.
///
/// Rounds the exact binary value, so `0.015` (stored as 0.01499...) becomes
/// `0.01`. Values too large to carry a fractional part are returned unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= NO_FRACTION {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Validate the legs and return the distance rounded to two decimal places.
///
/// # Example
///
/// ```
/// assert_eq!(distance::calculate(3.0, 4.0).unwrap(), 5.0);
/// ```
pub fn calculate(vertical: f64, horizontal: f64) -> Result<f64> {
    let legs = Legs::new(vertical, horizontal)?;
    Ok(round_to_hundredths(legs.distance()))
}
