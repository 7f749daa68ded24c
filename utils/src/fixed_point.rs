//! Lossless conversion of fixed-point integer strings to decimal values.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

/// Converts a base-10 integer string with an implicit decimal-place count
/// into an `f64`, correct to 4 decimal places.
///
/// Token amounts routinely exceed the safe-integer range of an `f64`
/// (e.g. 18-decimal amounts), so the division happens in arbitrary
/// precision and only the rounded result is converted.
pub fn from_fixed_point(s: &str, decimals: u32) -> Result<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid fixed-point integer: {:?}", s);
    }
    let raw = BigDecimal::from_str(s).with_context(|| format!("failed to parse {:?}", s))?;

    if decimals == 0 {
        return raw
            .to_f64()
            .with_context(|| format!("value {} out of f64 range", s));
    }

    // Scale in big-integer space, round at 4 places, and only then move
    // to floating point: the quotient digits fit an f64 and 10^4 divides
    // exactly.
    let (digits, _) = raw.into_bigint_and_exponent();
    let scaled = BigDecimal::new(digits, i64::from(decimals))
        .with_scale_round(4, RoundingMode::HalfUp);
    let (quotient, _) = scaled.into_bigint_and_exponent();
    let quotient = quotient
        .to_f64()
        .with_context(|| format!("value {} out of f64 range", s))?;
    Ok(quotient / 10_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_beyond_f64_safe_integers() {
        let v = from_fixed_point("3987844230000000000000000", 18).unwrap();
        assert_eq!(v, 3_987_844.23);
    }

    #[test]
    fn rounds_to_four_decimals() {
        // 1.23456789 rounds half-up to 1.2346
        let v = from_fixed_point("123456789", 8).unwrap();
        assert_eq!(v, 1.2346);
    }

    #[test]
    fn zero_decimals_is_plain_parse() {
        assert_eq!(from_fixed_point("42", 0).unwrap(), 42.0);
        assert_eq!(from_fixed_point("0", 0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_integer_input() {
        assert!(from_fixed_point("", 18).is_err());
        assert!(from_fixed_point("12.5", 18).is_err());
        assert!(from_fixed_point("-100", 18).is_err());
        assert!(from_fixed_point("0x10", 18).is_err());
    }

    #[test]
    fn small_amounts_keep_precision() {
        assert_eq!(from_fixed_point("1500000000000000000", 18).unwrap(), 1.5);
        assert_eq!(from_fixed_point("1", 18).unwrap(), 0.0);
    }
}
