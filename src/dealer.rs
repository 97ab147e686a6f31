use tracing::debug;

use crate::{
    bigint::BigInt,
    error::{Result, SecretError},
    polynomial::Polynomial,
    share::Share,
};

/// Splits `secret` into `count` shares at x = 1..=count, any `threshold` of
/// which recover it.
///
/// Coefficients are random and non-negative with as many digits as the
/// secret, so every share value is a non-negative integer.
pub fn distribute_secret(secret: &BigInt, threshold: usize, count: usize) -> Result<Vec<Share>> {
    if threshold == 0 || threshold > count {
        return Err(SecretError::InvalidThreshold { threshold, count });
    }

    if secret.is_negative() {
        return Err(SecretError::NegativeSecret);
    }

    let mut polynomial = Polynomial::new();

    polynomial.init(secret, threshold - 1, secret.digit_len());

    let shares = (1..=count as i64)
        .map(|position| Share::new(position, polynomial.get_value(position)))
        .collect();

    debug!(threshold, count, "distributed secret");

    Ok(shares)
}
