// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # unipoly
//!
//! A small univariate polynomial value type with real (`f64`) coefficients,
//! supporting evaluation and the basic algebraic operations.
//!
//! ## Features
//!
//! - Immutable value semantics: every operation returns a fresh polynomial and
//!   never mutates its operands.
//! - Addition, subtraction, negation, multiplication (by convolution), scalar
//!   multiplication and evaluation.
//! - A canonical text rendering that skips zero terms and joins the rest with
//!   a literal `" + "` separator.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Degree bookkeeping
//!
//! The degree of a polynomial is the highest exponent with an allocated
//! coefficient slot, which may hold an explicit zero. Operations never trim
//! the result to a minimal degree: the sum of two degree-2 polynomials is
//! degree 2 even when the leading coefficients cancel, and a product's degree
//! is always the sum of the operand degrees. Downstream degree comparisons
//! rely on this literal bookkeeping.

pub mod errors;
pub mod polynomial;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
