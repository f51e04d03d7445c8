// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unipoly::Polynomial;

/// Demonstrates polynomial arithmetic: prints two sample polynomials, their
/// sum, difference and product, and the value of the first one at a point.
#[derive(Parser, Debug)]
#[command(name = "unipoly", version, about)]
struct Cli {
    /// Coefficients of the first polynomial, ascending by power.
    #[arg(long, value_delimiter = ',', default_values_t = [3.0, 2.0, 1.0])]
    p1: Vec<f64>,

    /// Coefficients of the second polynomial, ascending by power.
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 2.0])]
    p2: Vec<f64>,

    /// Point at which to evaluate the first polynomial.
    #[arg(short = 'x', long = "at", default_value_t = 2.0)]
    at: f64,
}

fn polynomial_from_coefficients(coefficients: Vec<f64>) -> Result<Polynomial> {
    ensure!(
        !coefficients.is_empty(),
        "a polynomial needs at least one coefficient"
    );
    let degree = coefficients.len() - 1;
    Ok(Polynomial::new(degree, coefficients)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let p1 = polynomial_from_coefficients(cli.p1)?;
    let p2 = polynomial_from_coefficients(cli.p2)?;
    debug!(
        p1_degree = p1.degree(),
        p2_degree = p2.degree(),
        "constructed sample polynomials"
    );

    println!("Polynomial p1: {}", p1);
    println!("Polynomial p2: {}", p2);
    println!("Sum (p1 + p2): {}", p1.add(&p2));
    println!("Difference (p1 - p2): {}", p1.sub(&p2));
    println!("Product (p1 * p2): {}", p1.mul(&p2));
    println!("Value of p1 at x={}: {:?}", cli.at, p1.evaluate(cli.at));

    Ok(())
}
