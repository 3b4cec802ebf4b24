//! # Distance - right-triangle distance from two legs
//!
//! Computes the straight-line distance covered by moving `vertical` units along
//! one axis and `horizontal` units along the orthogonal one:
//!
//! ```text
//! distance = sqrt(vertical² + horizontal²)
//! ```
//!
//! Results are rounded to two decimal places, ties to even.
//!
//! ## Quick Start
//!
//! ```
//! use distance::{calculate, Legs};
//!
//! assert_eq!(calculate(3.0, 4.0)?, 5.0);
//! assert_eq!(calculate(1.0, 1.0)?, 1.41);
//!
//! let legs = Legs::new(6.0, 8.0)?;
//! assert_eq!(legs.horizontal(), 8.0);
//! assert!((legs.distance() - 10.0).abs() < 1e-12);
//! # Ok::<(), distance::DistanceError>(())
//! ```
//!
//! Negative legs are rejected:
//!
//! ```
//! use distance::{calculate, DistanceError};
//!
//! assert!(matches!(
//!     calculate(-1.0, 2.0),
//!     Err(DistanceError::NegativeLeg { .. })
//! ));
//! ```

pub mod environment;
pub mod error;
pub mod legs;

// Re-export main types at crate root for convenience
pub use environment::{Environment, ENV_VAR};
pub use error::{DistanceError, Result};
pub use legs::{calculate, round_to_hundredths, Legs};
