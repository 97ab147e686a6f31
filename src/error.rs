use thiserror::Error;

/// Errors produced while decoding shares or reconstructing a secret.
///
/// Every error is terminal for the call that produced it: the computation is
/// deterministic, so retrying with the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// Empty input, a lone `-`, or a non-decimal character in a decimal string.
    #[error("malformed number {input:?}: {reason}")]
    MalformedNumber { input: String, reason: &'static str },

    /// A share value contains a character outside `0-9a-zA-Z`.
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// A digit is valid but too large for the declared radix.
    #[error("digit {digit} exceeds base {base}")]
    DigitExceedsBase { digit: u32, base: u32 },

    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    /// Two shares in one batch carry the same x-coordinate.
    #[error("duplicate abscissa x = {0}")]
    DuplicateAbscissa(i64),

    /// A Lagrange term did not divide exactly; the share set is inconsistent
    /// or the secret is not an integer under this scheme.
    #[error("non-exact division for share x = {abscissa}: remainder {remainder} modulo {divisor}")]
    NonExactDivision {
        abscissa: i64,
        divisor: i64,
        remainder: i64,
    },

    /// A difference `x_j - x_i` between two abscissas does not fit in 64 bits.
    #[error("abscissa difference for share x = {0} overflows i64")]
    DenominatorOverflow(i64),

    #[error("share index {index} is out of range for {len} abscissas")]
    ShareIndexOutOfRange { index: usize, len: usize },

    #[error("share batch is empty")]
    EmptyShareBatch,

    #[error("insufficient shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },

    #[error("invalid threshold {threshold} for {count} shares")]
    InvalidThreshold { threshold: usize, count: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot deal a negative secret")]
    NegativeSecret,
}

pub type Result<T> = std::result::Result<T, SecretError>;
