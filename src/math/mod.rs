//! This module provides the exact integer linear algebra behind equation
//! balancing.
//!
//! It contains the arbitrary-precision integer matrix type and the
//! stoichiometric matrix builder, the fraction-free row reducer for
//! homogeneous linear Diophantine systems, the echelon-shape validator, and
//! the smallest-positive-solution extractor. No stage here ever touches
//! floating point: exactness is the correctness contract of the whole
//! pipeline.

/// The integer matrix type and the stoichiometric matrix builder.
pub mod matrix;

/// Fraction-free (Diophantine) row reduction using LCM-scaled row
/// combinations.
pub mod reduce;

/// Structural validation of the reduced matrix.
pub mod echelon;

/// Extraction of the unique smallest positive integer solution.
pub mod extract;

pub use echelon::validate_echelon;
pub use extract::extract_smallest_solution;
pub use matrix::{IntMatrix, StoichiometricMatrix};
pub use reduce::diophantine_row_reduce;
