//! Asset/Value Conversion
//!
//! Converts collateral-asset quantities to the common value unit and
//! back. Integer truncation toward zero in both directions is deliberate
//! and documented; changing the rounding direction changes economic
//! behavior.

use crate::constants::precision::FEED_PRECISION;
use crate::errors::{EngineError, EngineResult};

/// Convert an asset quantity to value units at the given feed price.
///
/// `value = quantity * price / feed_precision`, the folded form of
/// scaling the 8-decimal price up to 1e18 and dividing by the value
/// precision. Identical truncation, but the intermediate carries 1e10
/// more headroom and stays in u128 range well past trillion-value
/// positions.
///
/// The price must already be validated positive by the caller.
pub fn asset_to_value(quantity: u128, price: u128) -> EngineResult<u128> {
    quantity
        .checked_mul(price)
        .ok_or(EngineError::Overflow)?
        .checked_div(FEED_PRECISION)
        .ok_or(EngineError::DivisionByZero)
}

/// Convert a value-unit amount back to an asset quantity.
///
/// `quantity = value * feed_precision / price`
pub fn value_to_asset(value: u128, price: u128) -> EngineResult<u128> {
    value
        .checked_mul(FEED_PRECISION)
        .ok_or(EngineError::Overflow)?
        .checked_div(price)
        .ok_or(EngineError::DivisionByZero)
}
