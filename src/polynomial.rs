use num_traits::Zero;
use rand::Rng;

use crate::bigint::{BigInt, Sign};

// p(X) = s + p1X + ⋯ + pdX^d over the integers, s = p(0) is the secret.

#[derive(Debug, Clone, Default)]
pub struct Polynomial {
    pub coefficients: Vec<BigInt>,
}

impl Polynomial {
    pub fn new() -> Self {
        Polynomial {
            coefficients: Vec::new(),
        }
    }

    pub fn init_coefficients(&mut self, coefficients: &[BigInt]) {
        self.coefficients = coefficients.to_vec();
    }

    /// Sets `secret` as the constant term and draws `degree` random
    /// non-negative coefficients of `digits` decimal digits each.
    pub fn init(&mut self, secret: &BigInt, degree: usize, digits: usize) {
        let mut rng = rand::thread_rng();
        let mut coefficients = vec![secret.clone()];

        for _ in 0..degree {
            // little-endian, with a non-zero leading digit last
            let mut magnitude: Vec<u8> = (1..digits).map(|_| rng.gen_range(0u8, 10u8)).collect();

            magnitude.push(rng.gen_range(1u8, 10u8));
            coefficients.push(BigInt::from_digits(Sign::Positive, magnitude));
        }

        self.init_coefficients(&coefficients);
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    // get p(X) = value, by Horner's rule
    pub fn get_value(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);

        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coefficient| &acc * &x + coefficient)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::Polynomial;
    use crate::bigint::BigInt;

    #[test]
    fn test_init_polynomial() {
        let mut polynomial = Polynomial::new();
        let secret = BigInt::from(1234);
        let degree = 3;

        polynomial.init(&secret, degree, 20);

        assert_eq!(polynomial.coefficients.len(), degree + 1);
        assert_eq!(polynomial.degree(), degree);
        assert_eq!(polynomial.coefficients[0], secret);

        for coefficient in &polynomial.coefficients[1..] {
            assert_eq!(coefficient.digit_len(), 20);
            assert!(!coefficient.is_negative());
        }
    }

    #[test]
    fn test_init_single_digit_coefficients() {
        let mut polynomial = Polynomial::new();

        for digits in [0, 1] {
            polynomial.init(&BigInt::from(9), 30, digits);

            for coefficient in &polynomial.coefficients[1..] {
                assert_eq!(coefficient.digit_len(), 1);
                assert!(!coefficient.is_zero());
            }
        }
    }

    #[test]
    fn test_get_value() {
        let mut polynomial = Polynomial::new();

        polynomial.init_coefficients(&[
            BigInt::from(3),
            BigInt::from(2),
            BigInt::from(2),
            BigInt::from(4),
        ]);

        // p(0) = a_0 = 3
        assert_eq!(polynomial.get_value(0), BigInt::from(3));

        // p(1) = 11
        assert_eq!(polynomial.get_value(1), BigInt::from(11));

        // p(2) = 47
        assert_eq!(polynomial.get_value(2), BigInt::from(47));

        // p(3) = 135
        assert_eq!(polynomial.get_value(3), BigInt::from(135));

        // p(-1) = -1
        assert_eq!(polynomial.get_value(-1), BigInt::from(-1));
    }

    #[test]
    fn test_get_value_large() {
        let coefficients = [
            BigInt::from(105211),
            BigInt::from(1548877),
            BigInt::from(892134),
            BigInt::from(3490857),
            BigInt::from(324),
            BigInt::from(14234735),
        ];
        let mut polynomial = Polynomial::new();

        polynomial.init_coefficients(&coefficients);

        let value = polynomial.get_value(278);
        let (_, remainder) = value.div_rem_small(15486967).unwrap();

        assert_eq!(remainder, 4115179);
    }

    #[test]
    fn test_empty_polynomial() {
        assert!(Polynomial::new().get_value(5).is_zero());
    }
}
