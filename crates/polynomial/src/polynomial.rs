// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use num_traits::Zero;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A univariate polynomial with `f64` coefficients in ascending order of degree.
///
/// Index `i` of the coefficient vector holds the coefficient of `x^i`, so the
/// polynomial is `a_0 + a_1 * x + ... + a_n * x^n` where `n` is the degree.
/// The vector always holds exactly `degree + 1` entries. A zero coefficient is
/// allowed at any index, including the leading one: arithmetic never trims the
/// result back to a minimal degree, so `degree` tracks the allocated slots, not
/// the mathematically minimal degree.
///
/// Instances are immutable values. Every operation returns a fresh polynomial
/// and leaves its operands untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    degree: usize,
    coefficients: Vec<f64>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate().rev() {
            // Exact comparison on purpose: only literal zeros are dropped.
            if *coeff == 0.0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            write!(f, "{coeff:?}")?;

            if i > 0 {
                write!(f, "x")?;
                if i > 1 {
                    write!(f, "^{i}")?;
                }
            }
        }

        // An all-zero polynomial renders as the empty string.
        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a degree and its coefficient vector.
    ///
    /// Takes ownership of the vector, so the instance never aliases
    /// caller-owned storage.
    ///
    /// # Arguments
    ///
    /// * `degree` - The highest exponent with an allocated coefficient slot.
    /// * `coefficients` - Coefficients in ascending order of degree; must hold
    ///   exactly `degree + 1` entries.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::CoefficientCountMismatch` if the vector length
    /// is not `degree + 1`.
    pub fn new(degree: usize, coefficients: Vec<f64>) -> Result<Self, PolynomialError> {
        if coefficients.len() != degree + 1 {
            return Err(PolynomialError::CoefficientCountMismatch {
                expected: degree + 1,
                actual: coefficients.len(),
            });
        }

        Ok(Self {
            degree,
            coefficients,
        })
    }

    /// Creates a zero polynomial of the specified degree.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the zero polynomial.
    pub fn zero(degree: usize) -> Self {
        Self {
            degree,
            coefficients: vec![0.0; degree + 1],
        }
    }

    /// Creates a constant polynomial of degree 0.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: f64) -> Self {
        Self {
            degree: 0,
            coefficients: vec![constant],
        }
    }

    /// Returns the degree of the polynomial.
    ///
    /// This is the highest allocated exponent, which may hold an explicit zero.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the coefficients of the polynomial in ascending order of degree.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the coefficient of `x^i`, or `0.0` for exponents above the degree.
    pub fn coefficient(&self, i: usize) -> f64 {
        self.coefficients.get(i).copied().unwrap_or(0.0)
    }

    /// Returns the coefficient of the highest allocated exponent.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.degree]
    }

    /// Checks if every coefficient of the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Evaluates the polynomial at a given point.
    ///
    /// Computes the sum of `coefficients[i] * x^i` using the general
    /// real-valued power function. `powf` defines `0^0 == 1`, so the constant
    /// term always contributes, including at `x == 0`.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            result += coeff * x.powf(i as f64);
        }
        result
    }

    /// Adds two polynomials together.
    ///
    /// This function performs polynomial addition by:
    /// 1. Taking the maximum of the two degrees as the result degree.
    /// 2. Reading missing coefficients of the shorter operand as zero.
    /// 3. Adding the coefficients term by term.
    ///
    /// The result keeps the maximum degree even when the leading coefficients
    /// cancel to zero; the degree is never reduced.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let degree = self.degree.max(other.degree);
        let mut coefficients = vec![0.0; degree + 1];

        for (i, slot) in coefficients.iter_mut().enumerate() {
            *slot = self.coefficient(i) + other.coefficient(i);
        }

        Self {
            degree,
            coefficients,
        }
    }

    /// Subtracts one polynomial from another.
    ///
    /// Shares the addition path via negation; the degree bookkeeping is the
    /// same as for `add`.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// # Returns
    ///
    /// A new polynomial with all coefficients negated.
    pub fn neg(&self) -> Self {
        Self {
            degree: self.degree,
            coefficients: self.coefficients.iter().map(|x| -x).collect(),
        }
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// The result degree is exactly the sum of the operand degrees, even when
    /// an operand carries a zero leading coefficient or is zero altogether.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self) -> Self {
        let degree = self.degree + other.degree;
        let mut coefficients = vec![0.0; degree + 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }

        Self {
            degree,
            coefficients,
        }
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - The scalar to multiply with each coefficient.
    ///
    /// # Returns
    ///
    /// A new polynomial with each coefficient multiplied by the scalar.
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        Self {
            degree: self.degree,
            coefficients: self.coefficients.iter().map(|x| x * scalar).collect(),
        }
    }
}
