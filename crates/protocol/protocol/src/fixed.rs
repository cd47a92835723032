//! Conversions into 18-decimal fixed point ("wad") prices.

use alloy_primitives::U256;

/// The number of decimals of every price written into a [`crate::PriceReport`].
pub const WAD_DECIMALS: u8 = 18;

/// `10^18`.
const WAD: u64 = 1_000_000_000_000_000_000;

/// Mask over the 52 fraction bits of an IEEE-754 double.
const F64_FRACTION_MASK: u64 = (1 << 52) - 1;

/// An error converting a reading into a wad price.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Copy, Clone)]
pub enum FixedPointError {
    /// The reading was NaN or infinite.
    #[error("price reading is not finite")]
    NonFinite,
    /// The reading was negative.
    #[error("price reading is negative")]
    Negative,
    /// The scaled value does not fit in 256 bits.
    #[error("scaled price overflows 256 bits")]
    Overflow,
}

/// Scales an integer reading with `decimals` decimals to 18 decimals.
///
/// Readings with more than 18 decimals are truncated.
pub fn scale_to_wad(raw: U256, decimals: u8) -> Result<U256, FixedPointError> {
    let ten = U256::from(10u8);
    if decimals <= WAD_DECIMALS {
        let factor = ten.pow(U256::from(WAD_DECIMALS - decimals));
        raw.checked_mul(factor).ok_or(FixedPointError::Overflow)
    } else {
        let divisor = ten.pow(U256::from(decimals - WAD_DECIMALS));
        Ok(raw / divisor)
    }
}

/// Converts a floating point reading into an 18-decimal integer.
///
/// The exact binary value of `value` is multiplied by `10^18` in 256-bit integer arithmetic and
/// then truncated, so no precision is lost to intermediate floating point rounding.
pub fn f64_to_wad(value: f64) -> Result<U256, FixedPointError> {
    if !value.is_finite() {
        return Err(FixedPointError::NonFinite);
    }
    if value == 0.0 {
        return Ok(U256::ZERO);
    }
    if value.is_sign_negative() {
        return Err(FixedPointError::Negative);
    }

    // value == mantissa * 2^exponent
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & F64_FRACTION_MASK;
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    // Fits in 113 bits.
    let scaled = U256::from(mantissa) * U256::from(WAD);

    if exponent >= 0 {
        let shift = exponent as usize;
        if shift >= 256 || scaled.leading_zeros() < shift {
            return Err(FixedPointError::Overflow);
        }
        Ok(scaled << shift)
    } else {
        let shift = exponent.unsigned_abs() as usize;
        if shift >= 256 { Ok(U256::ZERO) } else { Ok(scaled >> shift) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::six_decimals(U256::from(1_000_000u64), 6, U256::from(WAD))]
    #[case::eight_decimals(U256::from(99_987_000u64), 8, U256::from(999_870_000_000_000_000u64))]
    #[case::already_wad(U256::from(WAD), 18, U256::from(WAD))]
    #[case::truncates(U256::from(1_234_567u64), 20, U256::from(12_345u64))]
    #[case::zero(U256::ZERO, 8, U256::ZERO)]
    fn test_scale_to_wad(#[case] raw: U256, #[case] decimals: u8, #[case] expected: U256) {
        assert_eq!(scale_to_wad(raw, decimals), Ok(expected));
    }

    #[test]
    fn test_scale_to_wad_overflow() {
        assert_eq!(scale_to_wad(U256::MAX, 0), Err(FixedPointError::Overflow));
    }

    #[rstest]
    #[case::one(1.0, U256::from(WAD))]
    #[case::half(0.5, U256::from(WAD / 2))]
    #[case::integer(2500.0, U256::from(2500u64) * U256::from(WAD))]
    #[case::zero(0.0, U256::ZERO)]
    fn test_f64_to_wad_exact(#[case] value: f64, #[case] expected: U256) {
        assert_eq!(f64_to_wad(value), Ok(expected));
    }

    #[test]
    fn test_f64_to_wad_truncates_binary_value() {
        // 0.1 is stored as 0x3FB999999999999A, slightly above one tenth.
        assert_eq!(f64_to_wad(0.1), Ok(U256::from(100_000_000_000_000_005u64)));
        assert_eq!(f64_to_wad(0.9998), Ok(U256::from(999_800_000_000_000_022u64)));
    }

    #[test]
    fn test_f64_to_wad_subnormal_is_zero() {
        assert_eq!(f64_to_wad(f64::MIN_POSITIVE / 2.0), Ok(U256::ZERO));
    }

    #[rstest]
    #[case(f64::NAN, FixedPointError::NonFinite)]
    #[case(f64::INFINITY, FixedPointError::NonFinite)]
    #[case(-1.0, FixedPointError::Negative)]
    #[case(f64::MAX, FixedPointError::Overflow)]
    fn test_f64_to_wad_rejects(#[case] value: f64, #[case] err: FixedPointError) {
        assert_eq!(f64_to_wad(value), Err(err));
    }
}
