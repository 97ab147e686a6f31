//! Conversion between [`BigInt`] and digit strings in radix 2 to 36.

use num_traits::{ToPrimitive, Zero};

use crate::{
    bigint::BigInt,
    error::{Result, SecretError},
};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(SecretError::InvalidBase(base))
    }
}

/// Decodes an unsigned digit string, `0-9` then `a-z` (either case).
///
/// Evaluated with Horner's rule, most significant digit first.
pub fn decode(value: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;

    if value.is_empty() {
        return Err(SecretError::MalformedNumber {
            input: String::new(),
            reason: "empty string",
        });
    }

    let radix = BigInt::from(base);
    let mut accumulator = BigInt::zero();

    for (position, character) in value.chars().enumerate() {
        if !character.is_ascii_alphanumeric() {
            return Err(SecretError::InvalidDigit {
                character,
                position,
            });
        }

        let digit = match character.to_digit(MAX_BASE) {
            Some(digit) => digit,
            None => {
                return Err(SecretError::InvalidDigit {
                    character,
                    position,
                })
            }
        };

        if digit >= base {
            return Err(SecretError::DigitExceedsBase { digit, base });
        }

        accumulator = &accumulator * &radix + BigInt::from(digit);
    }

    Ok(accumulator)
}

/// Renders `value` in `base` with lowercase digits and a leading `-` when negative.
pub fn encode(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;

    if value.is_zero() {
        return Ok(String::from("0"));
    }

    let mut remaining = value.abs();
    let mut digits = Vec::new();

    while !remaining.is_zero() {
        let (quotient, remainder) = remaining.div_rem_small(i64::from(base))?;

        // remainder is in 0..base since `remaining` is non-negative
        let digit = remainder.to_u32().and_then(|d| std::char::from_digit(d, base));

        match digit {
            Some(digit) => digits.push(digit),
            None => return Err(SecretError::InvalidBase(base)),
        }

        remaining = quotient;
    }

    if value.is_negative() {
        digits.push('-');
    }

    Ok(digits.into_iter().rev().collect())
}
