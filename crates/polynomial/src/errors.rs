// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Construction is the only fallible operation; everything else is total over
/// well-formed instances.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// The coefficient vector does not match the declared degree.
    #[error("expected {expected} coefficients for the declared degree, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },
}
