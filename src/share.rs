use crate::{
    bigint::BigInt,
    error::Result,
    radix::{decode, encode},
};

/// A share as it arrives from outside: the y-value is still a digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShare {
    pub x: i64,
    pub base: u32,
    pub value: String,
}

impl RawShare {
    pub fn new(x: i64, base: u32, value: impl Into<String>) -> Self {
        RawShare {
            x,
            base,
            value: value.into(),
        }
    }

    pub fn decode(&self) -> Result<Share> {
        Share::decode(self.x, self.base, &self.value)
    }
}

/// One decoded point `(x, f(x))` of the sharing polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: i64,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: BigInt) -> Self {
        Share { x, y }
    }

    pub fn decode(x: i64, base: u32, value: &str) -> Result<Self> {
        Ok(Share {
            x,
            y: decode(value, base)?,
        })
    }

    pub fn encode(&self, base: u32) -> Result<RawShare> {
        Ok(RawShare {
            x: self.x,
            base,
            value: encode(&self.y, base)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RawShare, Share};
    use crate::{bigint::BigInt, error::SecretError};

    #[test]
    fn test_decode_raw_share() {
        let raw = RawShare::new(2, 2, "111");

        assert_eq!(raw.decode().unwrap(), Share::new(2, BigInt::from(7)));
    }

    #[test]
    fn test_decode_rejects_bad_digit() {
        let raw = RawShare::new(1, 8, "789");

        assert_eq!(
            raw.decode(),
            Err(SecretError::DigitExceedsBase { digit: 8, base: 8 })
        );
    }

    #[test]
    fn test_encode_share() {
        let share = Share::new(-3, BigInt::from(4095));

        assert_eq!(share.encode(16).unwrap(), RawShare::new(-3, 16, "fff"));
        assert_eq!(share.encode(16).unwrap().decode().unwrap(), share);
    }
}
