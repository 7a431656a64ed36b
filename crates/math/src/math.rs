//! Fixed-point math for wad (18 decimals) and ray (27 decimals) values.
//!
//! The ray and wad helpers reproduce the on-chain `WadRayMath` library
//! bit-for-bit: every operation rounds half up and works on `U256`, so
//! off-chain projections agree with contract state exactly.
//!
//! The decimal helpers turn exact big-integer rationals into
//! [`rust_decimal::Decimal`] values. Division is the only step that rounds,
//! always half up, at [`DECIMAL_PLACES`] fractional digits unless the caller
//! asks for another scale.

use alloy_primitives::{uint, U256, U512};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MathError, Result};

/// 1e27
pub const RAY: U256 = uint!(1_000_000_000_000_000_000_000_000_000_U256);
/// 0.5e27
pub const HALF_RAY: U256 = uint!(500_000_000_000_000_000_000_000_000_U256);
/// 1e18
pub const WAD: U256 = uint!(1_000_000_000_000_000_000_U256);
/// 0.5e18
pub const HALF_WAD: U256 = uint!(500_000_000_000_000_000_U256);
/// RAY / WAD
pub const WAD_RAY_RATIO: U256 = uint!(1_000_000_000_U256);

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Fractional digits kept when dividing decimal quantities
pub const DECIMAL_PLACES: u32 = 20;

/// Largest scale a `Decimal` can carry
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Multiplier applied by [`calc_delegate_amount`] (1.1)
const DELEGATE_BUFFER: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// Multiply two rays, rounding half up: `(a * b + HALF_RAY) / RAY`
pub fn ray_mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b)
        .and_then(|product| product.checked_add(HALF_RAY))
        .map(|product| product / RAY)
        .ok_or(MathError::Overflow { operation: "ray_mul" })
}

/// Divide two rays, rounding half up: `(a * RAY + b / 2) / b`
///
/// A zero divisor is malformed state and fails instead of resolving to zero.
pub fn ray_div(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero { operation: "ray_div" });
    }
    let half_b = b / U256::from(2u8);
    a.checked_mul(RAY)
        .and_then(|scaled| scaled.checked_add(half_b))
        .map(|scaled| scaled / b)
        .ok_or(MathError::Overflow { operation: "ray_div" })
}

/// Multiply two wads, rounding half up: `(a * b + HALF_WAD) / WAD`
pub fn wad_mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b)
        .and_then(|product| product.checked_add(HALF_WAD))
        .map(|product| product / WAD)
        .ok_or(MathError::Overflow { operation: "wad_mul" })
}

/// Divide two wads, rounding half up: `(a * WAD + b / 2) / b`
pub fn wad_div(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero { operation: "wad_div" });
    }
    let half_b = b / U256::from(2u8);
    a.checked_mul(WAD)
        .and_then(|scaled| scaled.checked_add(half_b))
        .map(|scaled| scaled / b)
        .ok_or(MathError::Overflow { operation: "wad_div" })
}

/// Convert a ray to a wad, rounding half up
pub fn ray_to_wad(a: U256) -> Result<U256> {
    let half_ratio = WAD_RAY_RATIO / U256::from(2u8);
    a.checked_add(half_ratio)
        .map(|value| value / WAD_RAY_RATIO)
        .ok_or(MathError::Overflow {
            operation: "ray_to_wad",
        })
}

/// Convert a wad to a ray
pub fn wad_to_ray(a: U256) -> Result<U256> {
    a.checked_mul(WAD_RAY_RATIO).ok_or(MathError::Overflow {
        operation: "wad_to_ray",
    })
}

/// Raise a ray to an integer power by repeated squaring.
///
/// Each step goes through [`ray_mul`], so intermediate rounding matches the
/// contract implementation.
pub fn ray_pow(base: U256, exponent: u64) -> Result<U256> {
    let mut x = base;
    let mut n = exponent;
    let mut z = if n % 2 == 0 { RAY } else { x };

    n /= 2;
    while n != 0 {
        x = ray_mul(x, x)?;
        if n % 2 != 0 {
            z = ray_mul(z, x)?;
        }
        n /= 2;
    }

    Ok(z)
}

/// Convert a ray-scaled integer to its decimal value (e.g. 1.5e27 -> 1.5)
pub fn ray_to_decimal(a: U256) -> Result<Decimal> {
    ratio_to_decimal(widen(a), widen(RAY), 27)
}

/// Convert an integer amount to a `Decimal` without scaling
pub fn u256_to_decimal(value: U256) -> Result<Decimal> {
    ratio_to_decimal(widen(value), U512::from(1u8), 0)
}

/// Shift a base-unit amount into human units: `value / 10^decimals`.
pub fn normalize(value: Decimal, decimals: u8) -> Decimal {
    let mut shifted = value;
    match shifted.set_scale(value.scale() + u32::from(decimals)) {
        Ok(()) => shifted,
        // Scale would pass 28 digits; let decimal division drop the excess.
        Err(_) => (0..decimals).fold(value, |acc, _| acc / Decimal::TEN),
    }
}

/// Amount of credit to delegate for a leveraged position: 110% of
/// `amount`, rounded up to a whole unit.
pub fn calc_delegate_amount(amount: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(DELEGATE_BUFFER)
        .map(|buffered| buffered.round_dp_with_strategy(0, RoundingStrategy::ToPositiveInfinity))
        .ok_or(MathError::Overflow {
            operation: "calc_delegate_amount",
        })
}

/// Widen a `U256` into the 512-bit domain used for exact intermediates
pub(crate) fn widen(value: U256) -> U512 {
    U512::from(value)
}

/// `10^exponent` in the 512-bit domain
pub(crate) fn pow10(exponent: u32) -> Result<U512> {
    U512::from(10u8)
        .checked_pow(U512::from(exponent))
        .ok_or(MathError::Overflow { operation: "pow10" })
}

/// Multiply a chain of 512-bit factors, failing on overflow
pub(crate) fn checked_product(factors: &[U512], operation: &'static str) -> Result<U512> {
    factors
        .iter()
        .try_fold(U512::from(1u8), |acc, factor| acc.checked_mul(*factor))
        .ok_or(MathError::Overflow { operation })
}

/// Integer division rounding half up. `denominator` must be non-zero.
pub(crate) fn div_half_up(numerator: U512, denominator: U512) -> U512 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder >= denominator - remainder {
        quotient + U512::from(1u8)
    } else {
        quotient
    }
}

/// Divide two exact integers into a `Decimal` with at most `max_scale`
/// fractional digits, rounding half up.
///
/// The scale is only reduced below `max_scale` when the quotient would not
/// fit a 96-bit mantissa. Trailing zeros are stripped.
pub fn ratio_to_decimal(numerator: U512, denominator: U512, max_scale: u32) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero {
            operation: "ratio_to_decimal",
        });
    }

    for scale in (0..=max_scale.min(MAX_DECIMAL_SCALE)).rev() {
        let Some(scaled) = numerator.checked_mul(pow10(scale)?) else {
            continue;
        };
        let quotient = div_half_up(scaled, denominator);
        if let Some(mantissa) = to_mantissa(quotient) {
            return Decimal::try_from_i128_with_scale(mantissa, scale)
                .map(|value| value.normalize())
                .map_err(|_| MathError::DecimalOutOfRange {
                    value: quotient.to_string(),
                });
        }
    }

    Err(MathError::DecimalOutOfRange {
        value: (numerator / denominator).to_string(),
    })
}

/// Narrow a quotient to a decimal mantissa if it fits in 96 bits
fn to_mantissa(value: U512) -> Option<i128> {
    if value.bit_len() > 96 {
        return None;
    }
    let limbs = value.as_limbs();
    let wide = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
    i128::try_from(wide).ok()
}
