//! `UnscaledDecimal128`: a signed 127-bit-magnitude decimal coefficient and
//! the arithmetic kernel a `DECIMAL(p, s)` SQL type is built on. The scale
//! is not part of this type - callers pair a scale with each value and
//! choose which [`rescale`](UnscaledDecimal128::rescale) exponent to apply
//! before combining two decimals of different scales.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};

use crate::constants::{MAX_UNSCALED, POWERS_OF_TEN};
use crate::error::{Error, Result};
use crate::magnitude::Magnitude128;
use crate::wide::Magnitude256;

/// A signed decimal coefficient stored as a 127-bit magnitude plus a sign.
///
/// Sign-magnitude rather than two's complement: negation, comparison and
/// the big-integer codec all stay simple at the cost of one bit of range.
/// Zero is always encoded sign-positive; no operation in this module ever
/// produces a negative zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnscaledDecimal128 {
    magnitude: Magnitude128,
    negative: bool,
}

impl UnscaledDecimal128 {
    /// The canonical zero value.
    #[inline]
    pub const fn zero() -> Self {
        Self { magnitude: Magnitude128::ZERO, negative: false }
    }

    /// A zeroed 16-byte buffer, for callers that want an output parameter
    /// to pass into a destructive operation.
    #[inline]
    pub const fn new_empty() -> [u8; 16] {
        [0u8; 16]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    // ---- representation & codec -----------------------------------

    /// Packs the value into the normative 16-byte little-endian layout:
    /// bytes 0..15 hold the magnitude, byte 15 bit 7 holds the sign.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = self.magnitude.to_u128().to_le_bytes();
        if self.negative {
            bytes[15] |= 0x80;
        }
        bytes
    }

    /// Unpacks the normative 16-byte layout. A set sign bit on an
    /// all-zero magnitude is canonicalized away rather than rejected.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let negative = bytes[15] & 0x80 != 0;
        let mut magnitude_bytes = bytes;
        magnitude_bytes[15] &= 0x7F;
        let magnitude = Magnitude128::from_u128(u128::from_le_bytes(magnitude_bytes));
        Self { magnitude, negative: negative && !magnitude.is_zero() }
    }

    /// Converts from an arbitrary-precision integer. Fails with
    /// [`Error::Overflow`] if `|n| > MAX_UNSCALED`.
    pub fn from_big_integer(n: &BigInt) -> Result<Self> {
        let (sign, magnitude_bytes) = n.to_bytes_le();
        if magnitude_bytes.len() > 16 {
            return Err(Error::Overflow);
        }
        let mut buf = [0u8; 16];
        buf[..magnitude_bytes.len()].copy_from_slice(&magnitude_bytes);
        let magnitude = Magnitude128::from_u128(u128::from_le_bytes(buf));
        if magnitude.to_u128() > MAX_UNSCALED {
            return Err(Error::Overflow);
        }
        Ok(Self { magnitude, negative: sign == Sign::Minus })
    }

    /// Converts to an arbitrary-precision integer, exactly.
    pub fn to_big_integer(&self) -> BigInt {
        let magnitude = BigInt::from(self.magnitude.to_u128());
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Converts from a signed 64-bit integer. Always succeeds.
    #[inline]
    pub fn from_long(n: i64) -> Self {
        Self {
            magnitude: Magnitude128::from_u128(n.unsigned_abs() as u128),
            negative: n < 0,
        }
    }

    /// Converts to a signed 64-bit integer. Fails with [`Error::Overflow`]
    /// if the value does not fit in the `i64` range.
    pub fn to_long(&self) -> Result<i64> {
        let magnitude = self.magnitude.to_u128();
        if !self.negative {
            if magnitude > i64::MAX as u128 {
                return Err(Error::Overflow);
            }
            Ok(magnitude as i64)
        } else if magnitude == (i64::MAX as u128) + 1 {
            Ok(i64::MIN)
        } else if magnitude > i64::MAX as u128 {
            Err(Error::Overflow)
        } else {
            Ok(-(magnitude as i64))
        }
    }

    // ---- comparison -------------------------------------------------

    /// Total order on signed decimal values.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.negative != other.negative {
            return if self.negative { Ordering::Less } else { Ordering::Greater };
        }
        let magnitude_order = self.magnitude.cmp(&other.magnitude);
        if self.negative {
            magnitude_order.reverse()
        } else {
            magnitude_order
        }
    }

    /// Toggles the sign. Negating zero yields zero.
    #[inline]
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            Self { magnitude: self.magnitude, negative: !self.negative }
        }
    }

    // ---- additive kernel ----------------------------------------------

    /// Signed addition. Fails with [`Error::Overflow`] if `|a + b| >
    /// MAX_UNSCALED`.
    pub fn add(a: &Self, b: &Self) -> Result<Self> {
        if a.negative == b.negative {
            let (sum, carry) = a.magnitude.overflowing_add(b.magnitude);
            if carry || sum.to_u128() > MAX_UNSCALED {
                return Err(Error::Overflow);
            }
            Ok(Self { magnitude: sum, negative: !sum.is_zero() && a.negative })
        } else {
            Ok(Self::add_opposite_signs(a, b))
        }
    }

    /// `a - b`, implemented as `add(a, negate(b))`.
    pub fn subtract(a: &Self, b: &Self) -> Result<Self> {
        Self::add(a, &b.negate())
    }

    fn add_opposite_signs(a: &Self, b: &Self) -> Self {
        match a.magnitude.cmp(&b.magnitude) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                let (magnitude, _) = a.magnitude.overflowing_sub(b.magnitude);
                Self { magnitude, negative: a.negative }
            }
            Ordering::Less => {
                let (magnitude, _) = b.magnitude.overflowing_sub(a.magnitude);
                Self { magnitude, negative: b.negative }
            }
        }
    }

    /// Computes `a + b mod 2^127` into the returned value, plus a signed
    /// overflow count `k` such that the true sum equals `decode(out) + k *
    /// 2^127`. Unlike [`add`](Self::add), this never fails: it is the
    /// primitive callers use to sum many values and only check for
    /// overflow once at the end.
    ///
    /// ```
    /// use udec128::UnscaledDecimal128;
    ///
    /// let max = UnscaledDecimal128::from_big_integer(
    ///     &"99999999999999999999999999999999999999".parse().unwrap(),
    /// ).unwrap();
    /// let (_out, overflow) = UnscaledDecimal128::add_with_overflow(&max, &max);
    /// assert_eq!(overflow, 1);
    /// ```
    pub fn add_with_overflow(a: &Self, b: &Self) -> (Self, i8) {
        const TWO_POW_127: Magnitude128 = Magnitude128 { lo: 0, hi: 1u64 << 63 };

        if a.negative == b.negative {
            let (sum, carry) = a.magnitude.overflowing_add(b.magnitude);
            debug_assert!(!carry, "two MAX_UNSCALED-bounded magnitudes can't overflow 128 bits");
            let bit_127_set = sum.hi & (1u64 << 63) != 0;
            if bit_127_set {
                let (reduced, _) = sum.overflowing_sub(TWO_POW_127);
                let k = if a.negative { -1 } else { 1 };
                (Self { magnitude: reduced, negative: !reduced.is_zero() && a.negative }, k)
            } else {
                (Self { magnitude: sum, negative: !sum.is_zero() && a.negative }, 0)
            }
        } else {
            (Self::add_opposite_signs(a, b), 0)
        }
    }

    // ---- multiplicative kernel -----------------------------------------

    /// Checked 128x128 -> 128 multiply. Fails with [`Error::Overflow`] if
    /// `|a * b| > MAX_UNSCALED`.
    pub fn multiply(a: &Self, b: &Self) -> Result<Self> {
        let product = a.magnitude.checked_mul(b.magnitude).ok_or(Error::Overflow)?;
        if product.to_u128() > MAX_UNSCALED {
            return Err(Error::Overflow);
        }
        Ok(Self { magnitude: product, negative: !product.is_zero() && (a.negative != b.negative) })
    }

    /// Same contract as [`multiply`](Self::multiply) with a short 64-bit
    /// operand.
    pub fn multiply_long(a: &Self, k: i64) -> Result<Self> {
        Self::multiply(a, &Self::from_long(k))
    }

    /// Computes `left[0..4] * right` as an unsigned 256-bit product,
    /// overwriting all eight limbs of `left`. A standalone primitive for
    /// callers assembling a wider intermediate directly in limb form;
    /// [`divide`](Self::divide) and [`rescale`](Self::rescale) pre-scale
    /// through [`Magnitude128::widening_mul`] instead, since they already
    /// hold their operand as a `Magnitude128` rather than a limb buffer.
    pub fn multiply_256_destructive(left: &mut [u32; 8], right: &Self) {
        multiply_256_magnitude(left, right.magnitude);
    }

    // ---- division kernel ------------------------------------------------

    /// Pre-scales `dividend` by `10^dividend_rescale` and `divisor` by
    /// `10^divisor_rescale`, then divides, returning `(quotient,
    /// remainder)` such that `rescaled_dividend = quotient *
    /// rescaled_divisor + remainder`, `|remainder| < |rescaled_divisor|`,
    /// and `remainder` takes the sign of `rescaled_dividend` (or is zero).
    ///
    /// Fails with [`Error::DivisionByZero`] if the rescaled divisor is
    /// zero, or [`Error::Overflow`] if either output exceeds
    /// `MAX_UNSCALED`.
    pub fn divide(
        dividend: &Self,
        dividend_rescale: u32,
        divisor: &Self,
        divisor_rescale: u32,
    ) -> Result<(Self, Self)> {
        let scaled_dividend = scale_up(dividend.magnitude, dividend_rescale)?;
        let scaled_divisor_wide = scale_up(divisor.magnitude, divisor_rescale)?;
        let scaled_divisor = scaled_divisor_wide.to_magnitude128().ok_or(Error::Overflow)?;

        let (quotient_wide, remainder) =
            scaled_dividend.div_rem(scaled_divisor).ok_or(Error::DivisionByZero)?;
        let quotient = quotient_wide.to_magnitude128().ok_or(Error::Overflow)?;

        if quotient.to_u128() > MAX_UNSCALED || remainder.to_u128() > MAX_UNSCALED {
            return Err(Error::Overflow);
        }

        let quotient_negative = !quotient.is_zero() && (dividend.negative != divisor.negative);
        let remainder_negative = !remainder.is_zero() && dividend.negative;
        Ok((
            Self { magnitude: quotient, negative: quotient_negative },
            Self { magnitude: remainder, negative: remainder_negative },
        ))
    }

    // ---- rescale & range checks ------------------------------------------

    /// Multiplies or divides by `10^exponent`, with half-up-away-from-zero
    /// rounding on truncation. `exponent == 0` is a no-op; `exponent <=
    /// -39` always yields zero (the divisor would exceed any representable
    /// magnitude).
    pub fn rescale(v: &Self, exponent: i32) -> Result<Self> {
        if exponent == 0 {
            return Ok(*v);
        }
        if exponent <= -39 {
            return Ok(Self::zero());
        }
        if exponent > 0 {
            let wide = scale_up(v.magnitude, exponent as u32)?;
            let magnitude = wide.to_magnitude128().ok_or(Error::Overflow)?;
            if magnitude.to_u128() > MAX_UNSCALED {
                return Err(Error::Overflow);
            }
            return Ok(Self { magnitude, negative: !magnitude.is_zero() && v.negative });
        }

        let divisor = Magnitude128::from_u128(POWERS_OF_TEN[(-exponent) as usize]);
        debug_assert!(!divisor.is_zero(), "a power of ten is never zero");
        let (quotient_wide, remainder) = Magnitude256::from_magnitude128(v.magnitude)
            .div_rem(divisor)
            .ok_or(Error::Overflow)?;
        let mut quotient = quotient_wide.to_magnitude128().ok_or(Error::Overflow)?;

        if remainder.to_u128().saturating_mul(2) >= divisor.to_u128() {
            let (incremented, _) = quotient.overflowing_add(Magnitude128::ONE);
            quotient = incremented;
        }

        Ok(Self { magnitude: quotient, negative: !quotient.is_zero() && v.negative })
    }

    /// True iff `|v| >= 10^precision`. `precision` must be in `1..=38`.
    pub fn overflows(v: &Self, precision: u32) -> bool {
        debug_assert!((1..=38).contains(&precision));
        v.magnitude.to_u128() >= POWERS_OF_TEN[precision as usize]
    }

    /// Fails with [`Error::Overflow`] iff `|v| > MAX_UNSCALED`.
    pub fn throw_if_overflows(v: &Self) -> Result<()> {
        if v.magnitude.to_u128() > MAX_UNSCALED {
            Err(Error::Overflow)
        } else {
            Ok(())
        }
    }

    /// Same check for a candidate result a caller assembled directly into
    /// a `(low, high)` register pair rather than a `UnscaledDecimal128`.
    pub fn throw_if_overflows_pair(low: u64, high: u64) -> Result<()> {
        if Magnitude128 { lo: low, hi: high }.to_u128() > MAX_UNSCALED {
            Err(Error::Overflow)
        } else {
            Ok(())
        }
    }

    // ---- shifts -----------------------------------------------------------

    /// Updates `v` to `v * 2^n`, signed, failing with [`Error::Overflow`]
    /// if the result would exceed `MAX_UNSCALED` in magnitude.
    pub fn shift_left_destructive(v: &Self, n: u32) -> Result<Self> {
        if v.is_zero() {
            return Ok(Self::zero());
        }
        if n >= 256 {
            return Err(Error::Overflow);
        }
        let wide = Magnitude256::from_magnitude128(v.magnitude).shl_bits(n);
        let shifted = wide.to_magnitude128().ok_or(Error::Overflow)?;
        if shifted.to_u128() > MAX_UNSCALED {
            return Err(Error::Overflow);
        }
        Ok(Self { magnitude: shifted, negative: v.negative })
    }

    /// Arithmetic right shift of the magnitude by `n` bits, sign preserved.
    /// If `round_up` is set and any bit shifted out was nonzero, the
    /// magnitude is incremented by one afterwards (sticky-bit rounding;
    /// distinct from the decimal half-up rounding in
    /// [`rescale`](Self::rescale)).
    pub fn shift_right(v: &Self, n: u32, round_up: bool) -> Self {
        let (shifted, sticky) = v.magnitude.shr_bits_sticky(n);
        let shifted = if round_up && sticky {
            shifted.overflowing_add(Magnitude128::ONE).0
        } else {
            shifted
        };
        Self { magnitude: shifted, negative: !shifted.is_zero() && v.negative }
    }

    // ---- text conversion ----------------------------------------------

    /// The decimal representation of the signed unscaled integer: a
    /// leading `-` for negative values, no other formatting. Zero is
    /// `"0"`.
    pub fn to_unscaled_string(&self) -> String {
        if self.negative {
            format!("-{}", self.magnitude.to_u128())
        } else {
            self.magnitude.to_u128().to_string()
        }
    }
}

impl fmt::Display for UnscaledDecimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unscaled_string())
    }
}

impl PartialOrd for UnscaledDecimal128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for UnscaledDecimal128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

fn multiply_256_magnitude(left: &mut [u32; 8], right: Magnitude128) {
    let left_low = Magnitude128::from_u32_limbs([left[0], left[1], left[2], left[3]]);
    let product = left_low.widening_mul(right);
    left.copy_from_slice(&product.to_u32_limbs());
}

/// Widens `magnitude` to 256 bits and multiplies by `10^rescale`,
/// bounds-checking `rescale` itself against the power-of-ten table.
fn scale_up(magnitude: Magnitude128, rescale: u32) -> Result<Magnitude256> {
    if rescale == 0 {
        return Ok(Magnitude256::from_magnitude128(magnitude));
    }
    let factor = *POWERS_OF_TEN.get(rescale as usize).ok_or(Error::Overflow)?;
    Ok(magnitude.widening_mul(Magnitude128::from_u128(factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn from_big_str(s: &str) -> UnscaledDecimal128 {
        UnscaledDecimal128::from_big_integer(&big(s)).unwrap()
    }

    #[test]
    fn codec_roundtrips_through_bytes() {
        let v = UnscaledDecimal128::from_long(-123456789);
        assert_eq!(UnscaledDecimal128::from_bytes(v.to_bytes()), v);
    }

    #[test]
    fn negative_zero_is_canonicalized_on_decode() {
        let mut bytes = [0u8; 16];
        bytes[15] = 0x80;
        let v = UnscaledDecimal128::from_bytes(bytes);
        assert!(v.is_zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn big_integer_roundtrip() {
        let v = from_big_str("-99999999999999999999999999999999999999");
        assert_eq!(v.to_big_integer(), big("-99999999999999999999999999999999999999"));
    }

    #[test]
    fn from_big_integer_rejects_out_of_range() {
        let too_big = big("100000000000000000000000000000000000000");
        assert_eq!(UnscaledDecimal128::from_big_integer(&too_big), Err(Error::Overflow));
    }

    #[test]
    fn long_roundtrip_including_i64_min() {
        for n in [0i64, 1, -1, i64::MAX, i64::MIN, 1 << 40] {
            assert_eq!(UnscaledDecimal128::from_long(n).to_long().unwrap(), n);
        }
    }

    #[test]
    fn add_matches_spec_seed_scenario() {
        let a = UnscaledDecimal128::from_long(1i64 << 31);
        let sum = UnscaledDecimal128::add(&a, &a).unwrap();
        assert_eq!(sum, UnscaledDecimal128::from_long(1i64 << 32));
    }

    #[test]
    fn add_overflow_is_reported() {
        let max = from_big_str("99999999999999999999999999999999999999");
        let one = UnscaledDecimal128::from_long(1);
        assert_eq!(UnscaledDecimal128::add(&max, &one), Err(Error::Overflow));
    }

    #[test]
    fn add_with_overflow_matches_spec_seed_scenario() {
        let max = from_big_str("99999999999999999999999999999999999999");
        let (out, k) = UnscaledDecimal128::add_with_overflow(&max, &max);
        assert_eq!(k, 1);
        let two_pow_127: BigInt = "170141183460469231731687303715884105728".parse().unwrap();
        let max_as_big = max.to_big_integer();
        let expected = (&max_as_big + &max_as_big) - &two_pow_127;
        assert_eq!(out.to_big_integer(), expected);
    }

    #[test]
    fn multiply_matches_spec_seed_scenario() {
        let a = from_big_str("99999999999999");
        let b = from_big_str("-1000000000000000000000000");
        let product = UnscaledDecimal128::multiply(&a, &b).unwrap();
        assert_eq!(
            product.to_big_integer(),
            big("-99999999999999000000000000000000000000")
        );
    }

    #[test]
    fn multiply_identities() {
        let a = from_big_str("123456789012345678901234567890");
        let zero = UnscaledDecimal128::zero();
        let one = UnscaledDecimal128::from_long(1);
        let neg_one = UnscaledDecimal128::from_long(-1);
        assert_eq!(UnscaledDecimal128::multiply(&a, &zero).unwrap(), zero);
        assert_eq!(UnscaledDecimal128::multiply(&a, &one).unwrap(), a);
        assert_eq!(UnscaledDecimal128::multiply(&a, &neg_one).unwrap(), a.negate());
    }

    #[test]
    fn rescale_half_up_scenarios() {
        assert_eq!(
            UnscaledDecimal128::rescale(&UnscaledDecimal128::from_long(15), -1).unwrap(),
            UnscaledDecimal128::from_long(2)
        );
        assert_eq!(
            UnscaledDecimal128::rescale(&UnscaledDecimal128::from_long(14), -1).unwrap(),
            UnscaledDecimal128::from_long(1)
        );
        assert_eq!(
            UnscaledDecimal128::rescale(&UnscaledDecimal128::from_long(-15), -1).unwrap(),
            UnscaledDecimal128::from_long(-2)
        );
    }

    #[test]
    fn rescale_very_negative_exponent_is_zero() {
        let v = from_big_str("99999999999999999999999999999999999999");
        assert_eq!(UnscaledDecimal128::rescale(&v, -39).unwrap(), UnscaledDecimal128::zero());
    }

    #[test]
    fn rescale_up_then_down_is_identity_when_lossless() {
        let v = UnscaledDecimal128::from_long(12345);
        let scaled = UnscaledDecimal128::rescale(&v, 5).unwrap();
        let restored = UnscaledDecimal128::rescale(&scaled, -5).unwrap();
        assert_eq!(restored, v);
    }

    #[test]
    fn divide_matches_spec_seed_scenario() {
        let dividend = from_big_str("1000000000000000000000000");
        let divisor = from_big_str("111111111111111111111111");
        let (q, r) = UnscaledDecimal128::divide(&dividend, 0, &divisor, 0).unwrap();
        assert_eq!(q, UnscaledDecimal128::from_long(9));
        assert_eq!(r, UnscaledDecimal128::from_long(1));
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        let dividend = UnscaledDecimal128::from_long(1);
        let zero = UnscaledDecimal128::zero();
        assert_eq!(
            UnscaledDecimal128::divide(&dividend, 0, &zero, 0),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn divide_dividend_shorter_than_divisor() {
        let dividend = UnscaledDecimal128::from_long(3);
        let divisor = UnscaledDecimal128::from_long(7);
        let (q, r) = UnscaledDecimal128::divide(&dividend, 0, &divisor, 0).unwrap();
        assert_eq!(q, UnscaledDecimal128::zero());
        assert_eq!(r, UnscaledDecimal128::from_long(3));
    }

    #[test]
    fn divide_sign_combinations() {
        let seven = UnscaledDecimal128::from_long(7);
        let two = UnscaledDecimal128::from_long(2);
        let neg_seven = seven.negate();
        let neg_two = two.negate();

        let (q, r) = UnscaledDecimal128::divide(&seven, 0, &two, 0).unwrap();
        assert_eq!((q, r), (UnscaledDecimal128::from_long(3), UnscaledDecimal128::from_long(1)));

        let (q, r) = UnscaledDecimal128::divide(&neg_seven, 0, &two, 0).unwrap();
        assert_eq!((q, r), (UnscaledDecimal128::from_long(-3), UnscaledDecimal128::from_long(-1)));

        let (q, r) = UnscaledDecimal128::divide(&seven, 0, &neg_two, 0).unwrap();
        assert_eq!((q, r), (UnscaledDecimal128::from_long(-3), UnscaledDecimal128::from_long(1)));

        let (q, r) = UnscaledDecimal128::divide(&neg_seven, 0, &neg_two, 0).unwrap();
        assert_eq!((q, r), (UnscaledDecimal128::from_long(3), UnscaledDecimal128::from_long(-1)));
    }

    #[test]
    fn multiply_256_destructive_matches_spec_seed_scenario() {
        let max = from_big_str("99999999999999999999999999999999999999");
        let mut limbs = [0u32; 8];
        let max_limbs = max.magnitude.to_u32_limbs();
        limbs[..4].copy_from_slice(&max_limbs);

        UnscaledDecimal128::multiply_256_destructive(&mut limbs, &max);

        let w0 = limbs[0] as u64 | (limbs[1] as u64) << 32;
        let w1 = limbs[2] as u64 | (limbs[3] as u64) << 32;
        let w2 = limbs[4] as u64 | (limbs[5] as u64) << 32;
        let w3 = limbs[6] as u64 | (limbs[7] as u64) << 32;

        assert_eq!(w3, 0x161BCCA7119915B5);
        assert_eq!(w2, 0x0764B4ABE8652978);
        assert_eq!(w1, 0xE0FF0CA0BC87870B);
        assert_eq!(w0, 0xECEBBB8000000001);
    }

    #[test]
    fn shift_left_destructive_matches_multiply_by_power_of_two() {
        let v = UnscaledDecimal128::from_long(12345);
        let shifted = UnscaledDecimal128::shift_left_destructive(&v, 10).unwrap();
        let multiplied = UnscaledDecimal128::multiply_long(&v, 1 << 10).unwrap();
        assert_eq!(shifted, multiplied);
    }

    #[test]
    fn shift_left_destructive_overflow() {
        let max = from_big_str("99999999999999999999999999999999999999");
        assert_eq!(UnscaledDecimal128::shift_left_destructive(&max, 1), Err(Error::Overflow));
    }

    #[test]
    fn shift_right_sticky_rounding_is_independent_of_rescale_rounding() {
        let v = UnscaledDecimal128::from_long(0b1011);
        let truncated = UnscaledDecimal128::shift_right(&v, 2, false);
        let rounded = UnscaledDecimal128::shift_right(&v, 2, true);
        assert_eq!(truncated, UnscaledDecimal128::from_long(0b10));
        assert_eq!(rounded, UnscaledDecimal128::from_long(0b11));
    }

    #[test]
    fn overflows_matches_precision_boundary() {
        let p3_max = UnscaledDecimal128::from_long(999);
        let p3_overflow = UnscaledDecimal128::from_long(1000);
        assert!(!UnscaledDecimal128::overflows(&p3_max, 3));
        assert!(UnscaledDecimal128::overflows(&p3_overflow, 3));
    }

    #[test]
    fn to_unscaled_string_matches_spec_examples() {
        assert_eq!(UnscaledDecimal128::zero().to_unscaled_string(), "0");
        assert_eq!(UnscaledDecimal128::from_long(-42).to_unscaled_string(), "-42");
        assert_eq!(format!("{}", UnscaledDecimal128::from_long(42)), "42");
    }

    #[test]
    fn compare_is_a_total_order_consistent_with_sign() {
        let neg = UnscaledDecimal128::from_long(-5);
        let zero = UnscaledDecimal128::zero();
        let pos = UnscaledDecimal128::from_long(5);
        assert!(neg < zero);
        assert!(zero < pos);
        assert!(neg < pos);
    }
}
