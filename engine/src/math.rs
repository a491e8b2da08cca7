//! Health-Factor Arithmetic
//!
//! Pure functions mapping (debt, collateral value) to the dimensionless
//! solvency ratio. All arithmetic is checked; truncation toward zero is
//! the documented rounding policy, not a bug.

use crate::constants::{precision, ratios};
use crate::errors::{EngineError, EngineResult};

const LO_MASK: u128 = u64::MAX as u128;

/// `a * b / divisor` with a 256-bit intermediate product, truncating
/// toward zero.
///
/// Multiplying an 1e18-scaled value by the 1e18 ratio precision exceeds
/// u128 for any position above a few hundred value units, so the product
/// is carried in two 128-bit halves. `Overflow` means the quotient
/// itself does not fit in u128, never the intermediate.
pub fn mul_div(a: u128, b: u128, divisor: u128) -> EngineResult<u128> {
    if divisor == 0 {
        return Err(EngineError::DivisionByZero);
    }

    // 128x128 -> 256 bit product via 64-bit limbs
    let a0 = a & LO_MASK;
    let a1 = a >> 64;
    let b0 = b & LO_MASK;
    let b1 = b >> 64;

    let ll = a0 * b0;
    let (mid, mid_carry) = (a0 * b1).overflowing_add(a1 * b0);
    let (lo, lo_carry) = ll.overflowing_add(mid << 64);
    let hi = a1 * b1 + (mid >> 64) + ((mid_carry as u128) << 64) + lo_carry as u128;

    if hi == 0 {
        return Ok(lo / divisor);
    }
    if hi >= divisor {
        return Err(EngineError::Overflow);
    }

    // Schoolbook 256 / 128 bit division. hi < divisor, so the running
    // remainder stays below 2 * divisor and the quotient fits in u128.
    let mut rem = hi;
    let mut quotient: u128 = 0;
    for i in (0..128).rev() {
        let top = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        quotient <<= 1;
        if top == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1;
        }
    }
    Ok(quotient)
}

/// Calculate the health factor for a position.
///
/// `health = (collateral_value * threshold / 100) * 1e18 / debt`
///
/// A position with zero debt is never liquidatable and returns the
/// maximum representable ratio regardless of collateral.
///
/// # Arguments
/// * `debt` - Minted debt in value-unit precision
/// * `collateral_value` - Total collateral value in value-unit precision
/// * `threshold` - Liquidation threshold numerator (e.g. 50 for 50/100)
pub fn health_factor(debt: u128, collateral_value: u128, threshold: u128) -> EngineResult<u128> {
    if debt == 0 {
        return Ok(u128::MAX);
    }

    let adjusted_collateral = mul_div(collateral_value, threshold, ratios::LIQUIDATION_PRECISION)?;
    mul_div(adjusted_collateral, precision::VALUE_PRECISION, debt)
}

/// Check whether a ratio is below the given minimum.
pub fn is_liquidatable(health_factor: u128, min_health_factor: u128) -> bool {
    health_factor < min_health_factor
}
