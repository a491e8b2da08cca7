//! Engine Constants
//!
//! Fixed-point scaling and collateralization parameters. All values are
//! process-wide configuration, fixed at construction and read-only
//! thereafter.

/// Fixed-point precision constants
pub mod precision {
    /// One whole value unit (18 decimals). All collateral values, debt
    /// amounts, and health factors are expressed at this scale.
    pub const VALUE_PRECISION: u128 = 1_000_000_000_000_000_000;

    /// Price feeds report with 8 decimals; multiplying by this brings a
    /// raw feed price up to value-unit precision.
    pub const FEED_PRECISION_ADJUSTMENT: u128 = 10_000_000_000;

    /// Decimal places of the external price feeds.
    pub const FEED_DECIMALS: u8 = 8;

    /// One whole feed unit (1e8). Dividing by this converts a raw-price
    /// product straight to value-unit precision, with the same
    /// truncation as scaling the price up by the adjustment first.
    pub const FEED_PRECISION: u128 = VALUE_PRECISION / FEED_PRECISION_ADJUSTMENT;
}

/// Collateralization ratios
pub mod ratios {
    use super::precision::VALUE_PRECISION;

    /// Liquidation threshold numerator over [`LIQUIDATION_PRECISION`].
    /// 50/100 means collateral must be worth at least 2x the debt.
    pub const LIQUIDATION_THRESHOLD: u128 = 50;

    /// Denominator for the threshold and bonus ratios.
    pub const LIQUIDATION_PRECISION: u128 = 100;

    /// Liquidation bonus numerator over [`LIQUIDATION_PRECISION`].
    /// Liquidators receive 10% of the seized quantity on top.
    pub const LIQUIDATION_BONUS: u128 = 10;

    /// Minimum health factor: ratio 1.0 in value-unit precision. A
    /// position at or above this is solvent.
    pub const MIN_HEALTH_FACTOR: u128 = VALUE_PRECISION;
}
