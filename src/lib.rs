mod bigint;
mod dealer;
mod error;
mod lagrange;
mod polynomial;
mod radix;
mod share;
mod shareset;

pub use bigint::{BigInt, Sign};
pub use dealer::distribute_secret;
pub use error::{Result, SecretError};
pub use lagrange::{interpolate_at, interpolate_at_zero, lagrange_coefficient};
pub use polynomial::Polynomial;
pub use radix::{decode, encode, MAX_BASE, MIN_BASE};
pub use share::{RawShare, Share};
pub use shareset::{ShareSet, ShareSetError};

pub type Secret = BigInt;

/// Decodes the first `threshold` raw shares and recovers the constant term.
pub fn reconstruct_secret(threshold: usize, shares: &[RawShare]) -> Result<Secret> {
    if threshold == 0 {
        return Err(SecretError::InvalidThreshold {
            threshold,
            count: shares.len(),
        });
    }

    if shares.len() < threshold {
        return Err(SecretError::InsufficientShares {
            got: shares.len(),
            need: threshold,
        });
    }

    let batch = shares[..threshold]
        .iter()
        .map(RawShare::decode)
        .collect::<Result<Vec<Share>>>()?;

    interpolate_at_zero(&batch)
}

#[cfg(test)]
mod tests {
    use super::{reconstruct_secret, BigInt, RawShare, SecretError};

    #[test]
    fn test_reconstruct_secret() {
        let shares = [
            RawShare::new(1, 10, "4"),
            RawShare::new(2, 10, "7"),
            RawShare::new(3, 10, "10"),
        ];

        assert_eq!(reconstruct_secret(3, &shares).unwrap(), BigInt::from(1));
        assert_eq!(reconstruct_secret(2, &shares).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_reconstruct_secret_errors() {
        let shares = [RawShare::new(1, 10, "4"), RawShare::new(2, 10, "7")];

        assert_eq!(
            reconstruct_secret(3, &shares),
            Err(SecretError::InsufficientShares { got: 2, need: 3 })
        );
        assert_eq!(
            reconstruct_secret(0, &shares),
            Err(SecretError::InvalidThreshold {
                threshold: 0,
                count: 2
            })
        );
    }
}
