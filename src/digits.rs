// SPDX-License-Identifier: MIT
use num_bigint::BigInt;
use num_traits::Zero;
use std::error::Error;
use std::fmt;

/// Smallest and largest numeral bases accepted by [`decode`], inclusive.
pub const MIN_BASE: i64 = 2;
pub const MAX_BASE: i64 = 36;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DecodeError {
    /// Base outside `[2, 36]` or not an integer value; carries the
    /// offending value as text so non-numeric base specifiers report
    /// through the same kind.
    InvalidBase(String),
    /// Digit string empty after removing an optional sign.
    EmptyValue,
    /// A character outside `[0-9a-zA-Z]`.
    InvalidDigitChar(char),
    /// A digit whose value is not less than the declared base.
    DigitOutOfRange { digit: char, base: i64 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::InvalidBase(value) => write!(
                f,
                "invalid base {:?}: expected an integer in {}..={}",
                value, MIN_BASE, MAX_BASE
            ),
            DecodeError::EmptyValue => write!(f, "empty digit string"),
            DecodeError::InvalidDigitChar(digit) => {
                write!(f, "invalid digit character {:?}", digit)
            }
            DecodeError::DigitOutOfRange { digit, base } => {
                write!(f, "digit {:?} out of range for base {}", digit, base)
            }
        }
    }
}

impl Error for DecodeError {}

/// Decodes a base-`base` digit string into an exact signed integer.
///
/// The input is trimmed, an optional leading `+`/`-` is consumed, and the
/// remaining digits are mapped case-insensitively (`0`-`9`, then `a`-`z`
/// for 10..=35) and accumulated most-significant first as
/// `acc = acc * base + digit` over a `BigInt`, so no magnitude can
/// overflow or round.
pub fn decode(base: i64, digits: &str) -> Result<BigInt, DecodeError> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(DecodeError::InvalidBase(base.to_string()));
    }
    let trimmed = digits.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if body.is_empty() {
        return Err(DecodeError::EmptyValue);
    }
    let mut accumulator = BigInt::zero();
    for digit in body.chars() {
        let value = digit
            .to_digit(36)
            .ok_or(DecodeError::InvalidDigitChar(digit))?;
        if i64::from(value) >= base {
            return Err(DecodeError::DigitOutOfRange { digit, base });
        }
        accumulator = accumulator * base + value;
    }
    if negative {
        accumulator = -accumulator;
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use num_traits::{Num, One, Signed, ToPrimitive};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_decimal() {
        assert_eq!(decode(10, "0").unwrap(), BigInt::from(0));
        assert_eq!(decode(10, "42").unwrap(), BigInt::from(42));
        assert_eq!(decode(10, "+42").unwrap(), BigInt::from(42));
        assert_eq!(decode(10, "-42").unwrap(), BigInt::from(-42));
        assert_eq!(decode(10, "007").unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_hex_and_case_insensitivity() {
        assert_eq!(decode(16, "-ff").unwrap(), BigInt::from(-255));
        assert_eq!(decode(16, "-FF").unwrap(), BigInt::from(-255));
        assert_eq!(decode(16, "DeadBeef").unwrap(), decode(16, "deadbeef").unwrap());
        assert_eq!(decode(36, "Zz").unwrap(), BigInt::from(35 * 36 + 35));
    }

    #[test]
    fn test_base_boundaries() {
        assert_eq!(decode(2, "101").unwrap(), BigInt::from(5));
        assert_eq!(decode(36, "10").unwrap(), BigInt::from(36));
        assert_eq!(
            decode(1, "0").unwrap_err(),
            DecodeError::InvalidBase("1".to_string())
        );
        assert_eq!(
            decode(37, "0").unwrap_err(),
            DecodeError::InvalidBase("37".to_string())
        );
        assert_eq!(
            decode(0, "0").unwrap_err(),
            DecodeError::InvalidBase("0".to_string())
        );
        assert_eq!(
            decode(-10, "0").unwrap_err(),
            DecodeError::InvalidBase("-10".to_string())
        );
    }

    #[test]
    fn test_empty_and_bare_sign() {
        assert_eq!(decode(10, "").unwrap_err(), DecodeError::EmptyValue);
        assert_eq!(decode(10, "   ").unwrap_err(), DecodeError::EmptyValue);
        assert_eq!(decode(10, "+").unwrap_err(), DecodeError::EmptyValue);
        assert_eq!(decode(10, "-").unwrap_err(), DecodeError::EmptyValue);
    }

    #[test]
    fn test_bad_digits() {
        assert_eq!(
            decode(10, "12x3").unwrap_err(),
            DecodeError::InvalidDigitChar('x')
        );
        assert_eq!(
            decode(10, "1_2").unwrap_err(),
            DecodeError::InvalidDigitChar('_')
        );
        assert_eq!(
            decode(2, "2").unwrap_err(),
            DecodeError::DigitOutOfRange { digit: '2', base: 2 }
        );
        assert_eq!(
            decode(16, "fg").unwrap_err(),
            DecodeError::DigitOutOfRange { digit: 'g', base: 16 }
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(decode(10, "  42 ").unwrap(), BigInt::from(42));
        assert_eq!(decode(10, "\t-42\n").unwrap(), BigInt::from(-42));
    }

    #[test]
    fn test_beyond_fixed_width() {
        // 2^200, far past any fixed-width integer
        let value = decode(2, &format!("1{}", "0".repeat(200))).unwrap();
        assert_eq!(value, BigInt::one() << 200);
        let decimal = "123456789012345678901234567890123456789";
        assert_eq!(
            decode(10, decimal).unwrap(),
            BigInt::from_str_radix(decimal, 10).unwrap()
        );
    }

    #[test]
    fn test_sign_symmetry() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..256 {
            let base = rng.gen_range(2..=36i64);
            let length = rng.gen_range(1..40);
            let digits: String = (0..length)
                .map(|_| {
                    std::char::from_digit(rng.gen_range(0..base as u32), 36).unwrap()
                })
                .collect();
            let positive = decode(base, &digits).unwrap();
            let negative = decode(base, &format!("-{}", digits)).unwrap();
            assert_eq!(negative, -&positive);
            assert_eq!(decode(base, &digits.to_uppercase()).unwrap(), positive);
        }
    }

    #[test]
    fn test_round_trip_by_division() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..256 {
            let base = rng.gen_range(2..=36i64);
            let length = rng.gen_range(1..40);
            // no leading zero so the digit count survives the round trip
            let digits: String = (0..length)
                .map(|index| {
                    let low = if index == 0 && length > 1 { 1 } else { 0 };
                    std::char::from_digit(rng.gen_range(low..base as u32), 36).unwrap()
                })
                .collect();
            let mut value = decode(base, &digits).unwrap();
            assert!(!value.is_negative());
            let mut recovered = String::new();
            while !value.is_zero() {
                let (quotient, remainder) = value.div_rem(&BigInt::from(base));
                let digit = remainder.to_u32().unwrap();
                recovered.insert(0, std::char::from_digit(digit, 36).unwrap());
                value = quotient;
            }
            if recovered.is_empty() {
                recovered.push('0');
            }
            assert_eq!(recovered, digits);
        }
    }
}
