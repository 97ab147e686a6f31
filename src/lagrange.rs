//! Exact Lagrange interpolation over the integers.
//!
//! For a batch of shares `(x_j, y_j)` the interpolating polynomial evaluated
//! at `t` is
//!
//! P(t) = Σ_j y_j · Π_{i ≠ j} (t - x_i) / (x_j - x_i)
//!
//! Each term is divided exactly by its denominator, one factor `x_j - x_i` at
//! a time so the denominator itself never has to fit in a machine word. When
//! the whole product divides the term every step is exact; otherwise some step
//! leaves a remainder and the batch does not describe an integer polynomial
//! at `t`.

use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::{
    bigint::BigInt,
    error::{Result, SecretError},
    share::Share,
};

fn check_distinct(abscissas: &[i64]) -> Result<()> {
    let mut sorted = abscissas.to_vec();

    sorted.sort_unstable();

    match sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(SecretError::DuplicateAbscissa(pair[0])),
        None => Ok(()),
    }
}

/// Basis polynomial `j` at `at`, as (numerator, denominator factors).
///
/// The numerator is Π_{i ≠ j} (at - x_i); the denominator is the product of
/// the returned factors `x_j - x_i`. Abscissas are assumed distinct; a
/// repeated one yields a zero factor.
pub fn lagrange_coefficient(j: usize, abscissas: &[i64], at: i64) -> Result<(BigInt, Vec<i64>)> {
    let x_j = abscissas
        .get(j)
        .copied()
        .ok_or(SecretError::ShareIndexOutOfRange {
            index: j,
            len: abscissas.len(),
        })?;
    let at = BigInt::from(at);
    let mut numerator = BigInt::one();
    let mut factors = Vec::with_capacity(abscissas.len().saturating_sub(1));

    for (i, &x_i) in abscissas.iter().enumerate() {
        if i == j {
            continue;
        }

        numerator = &numerator * &(&at - &BigInt::from(x_i));
        factors.push(
            x_j.checked_sub(x_i)
                .ok_or(SecretError::DenominatorOverflow(x_j))?,
        );
    }

    Ok((numerator, factors))
}

/// Evaluates the polynomial through `shares` at the integer `at`.
pub fn interpolate_at(shares: &[Share], at: i64) -> Result<BigInt> {
    if shares.is_empty() {
        return Err(SecretError::EmptyShareBatch);
    }

    let abscissas: Vec<i64> = shares.iter().map(|share| share.x).collect();

    check_distinct(&abscissas)?;

    let mut result = BigInt::zero();

    for (j, share) in shares.iter().enumerate() {
        let (numerator, factors) = lagrange_coefficient(j, &abscissas, at)?;
        let mut term = &share.y * &numerator;

        for divisor in factors {
            let (quotient, remainder) = term.div_rem_small(divisor)?;

            if remainder != 0 {
                return Err(SecretError::NonExactDivision {
                    abscissa: share.x,
                    divisor,
                    remainder,
                });
            }

            term = quotient;
        }

        trace!(x = share.x, %numerator, %term, "lagrange term");

        result += term;
    }

    debug!(shares = shares.len(), at, "interpolation complete");

    Ok(result)
}

/// Recovers the constant term `f(0)` of the polynomial through `shares`.
pub fn interpolate_at_zero(shares: &[Share]) -> Result<BigInt> {
    interpolate_at(shares, 0)
}
