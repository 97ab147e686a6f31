use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Result, SecretError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    /// Also the sign of zero.
    Positive,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    fn product(self, other: Sign) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Arbitrary-precision signed integer stored as decimal digits.
///
/// The magnitude never carries high-order zeros and zero is always
/// [`Sign::Positive`], so the derived equality is value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    // little-endian base-10 digits, empty for zero
    digits: Vec<u8>,
}

impl BigInt {
    /// Builds a value from little-endian decimal digits, each below 10.
    pub(crate) fn from_digits(sign: Sign, mut digits: Vec<u8>) -> Self {
        while digits.last() == Some(&0) {
            digits.pop();
        }

        let sign = if digits.is_empty() { Sign::Positive } else { sign };

        BigInt { sign, digits }
    }

    fn from_u128(sign: Sign, mut value: u128) -> Self {
        let mut digits = Vec::new();

        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }

        BigInt::from_digits(sign, digits)
    }

    fn magnitude_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &digit| {
                acc.checked_mul(10)?.checked_add(u128::from(digit))
            })
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            digits: self.digits.clone(),
        }
    }

    /// Number of decimal digits in the magnitude; zero has one.
    pub fn digit_len(&self) -> usize {
        self.digits.len().max(1)
    }

    /// Long division by a machine integer.
    ///
    /// Truncates toward zero: the quotient sign is the product of both signs
    /// and the remainder takes the sign of `self`. Nothing is rounded, so a
    /// caller that needs exact division must check the remainder itself.
    pub fn div_rem_small(&self, divisor: i64) -> Result<(BigInt, i64)> {
        if divisor == 0 {
            return Err(SecretError::DivisionByZero);
        }

        let modulus = u128::from(divisor.unsigned_abs());
        let mut quotient = vec![0u8; self.digits.len()];
        let mut remainder = 0u128;

        for (position, &digit) in self.digits.iter().enumerate().rev() {
            let (q, r) = (remainder * 10 + u128::from(digit)).div_rem(&modulus);

            quotient[position] = q as u8;
            remainder = r;
        }

        // remainder < |divisor| <= 2^63
        let remainder = remainder as i64;
        let remainder = match self.sign {
            Sign::Negative => -remainder,
            Sign::Positive => remainder,
        };
        let sign = if divisor < 0 {
            self.sign.flip()
        } else {
            self.sign
        };

        Ok((BigInt::from_digits(sign, quotient), remainder))
    }
}

fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut sum = Vec::with_capacity(len + 1);
    let mut carry = 0;

    for i in 0..len {
        let digit = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;

        sum.push(digit % 10);
        carry = digit / 10;
    }

    if carry > 0 {
        sum.push(carry);
    }

    sum
}

// a must not be smaller than b
fn sub_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut difference = Vec::with_capacity(a.len());
    let mut borrow = 0i8;

    for (i, &digit) in a.iter().enumerate() {
        let mut d = digit as i8 - b.get(i).copied().unwrap_or(0) as i8 - borrow;

        if d < 0 {
            d += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }

        difference.push(d as u8);
    }

    difference
}

fn mul_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut slots = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry = 0u32;

        for (j, &y) in b.iter().enumerate() {
            let current = slots[i + j] + u32::from(x) * u32::from(y) + carry;

            slots[i + j] = current % 10;
            carry = current / 10;
        }

        let mut k = i + b.len();

        while carry > 0 {
            let current = slots[k] + carry;

            slots[k] = current % 10;
            carry = current / 10;
            k += 1;
        }
    }

    slots.into_iter().map(|digit| digit as u8).collect()
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        if self.sign == other.sign {
            return BigInt::from_digits(self.sign, add_magnitude(&self.digits, &other.digits));
        }

        match cmp_magnitude(&self.digits, &other.digits) {
            Ordering::Less => {
                BigInt::from_digits(other.sign, sub_magnitude(&other.digits, &self.digits))
            }
            _ => BigInt::from_digits(self.sign, sub_magnitude(&self.digits, &other.digits)),
        }
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        self + &(-other)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_digits(
            self.sign.product(other.sign),
            mul_magnitude(&self.digits, &other.digits),
        )
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, other: BigInt) {
        *self += &other;
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_digits(self.sign.flip(), self.digits.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_digits(self.sign.flip(), self.digits)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => cmp_magnitude(&self.digits, &other.digits),
            (Sign::Negative, Sign::Negative) => cmp_magnitude(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt {
            sign: Sign::Positive,
            digits: Vec::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt {
            sign: Sign::Positive,
            digits: vec![1],
        }
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_u128()?;

        match self.sign {
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative => i128::try_from(magnitude)
                .ok()
                .and_then(|m| i64::try_from(-m).ok()),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.sign {
            Sign::Positive => u64::try_from(self.magnitude_u128()?).ok(),
            Sign::Negative => None,
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };

                BigInt::from_u128(sign, u128::from(value.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_u128(Sign::Positive, u128::from(value))
            }
        }
    )*};
}

from_signed!(i32, i64);
from_unsigned!(u32, u64);

impl FromStr for BigInt {
    type Err = SecretError;

    /// Parses an optional `-` followed by one or more decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &'static str| SecretError::MalformedNumber {
            input: s.to_string(),
            reason,
        };

        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };

        if s.is_empty() {
            return Err(malformed("empty string"));
        }

        if body.is_empty() {
            return Err(malformed("sign without digits"));
        }

        let digits = body
            .bytes()
            .rev()
            .map(|byte| {
                if byte.is_ascii_digit() {
                    Ok(byte - b'0')
                } else {
                    Err(malformed("non-decimal character"))
                }
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(BigInt::from_digits(sign, digits))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude: String = if self.digits.is_empty() {
            String::from("0")
        } else {
            self.digits
                .iter()
                .rev()
                .map(|&digit| char::from(b'0' + digit))
                .collect()
        };

        f.pad_integral(!self.is_negative(), "", &magnitude)
    }
}

impl From<&BigInt> for num_bigint::BigInt {
    fn from(value: &BigInt) -> Self {
        let magnitude = value
            .digits
            .iter()
            .rev()
            .fold(num_bigint::BigUint::zero(), |acc, &digit| {
                acc * 10u32 + u32::from(digit)
            });
        let sign = match value.sign {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Positive => num_bigint::Sign::Plus,
        };

        num_bigint::BigInt::from_biguint(sign, magnitude)
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(value: BigInt) -> Self {
        num_bigint::BigInt::from(&value)
    }
}

impl From<&num_bigint::BigInt> for BigInt {
    fn from(value: &num_bigint::BigInt) -> Self {
        let (sign, digits) = value.to_radix_le(10);
        let sign = match sign {
            num_bigint::Sign::Minus => Sign::Negative,
            _ => Sign::Positive,
        };

        BigInt::from_digits(sign, digits)
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(value: num_bigint::BigInt) -> Self {
        BigInt::from(&value)
    }
}
