//! Core Types for the Debt Engine

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::ratios;

/// Type alias for account addresses (32-byte identifier)
pub type Address = [u8; 32];

/// Type alias for collateral asset identifiers
pub type AssetId = [u8; 32];

/// A single observation from an external price source.
///
/// `price` is signed per the feed interface; the engine rejects anything
/// non-positive. Staleness policy is owned by the source itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct PriceSample {
    /// Price with 8 feed decimals
    pub price: i128,
    /// Timestamp of the last feed update
    pub updated_at: u64,
}

impl PriceSample {
    /// Creates a new price sample
    pub fn new(price: i128, updated_at: u64) -> Self {
        Self { price, updated_at }
    }
}

/// Collateralization parameters, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct EngineParams {
    /// Liquidation threshold numerator (over a 100 denominator)
    pub liquidation_threshold: u128,
    /// Liquidation bonus numerator (over a 100 denominator)
    pub liquidation_bonus: u128,
    /// Minimum health factor in value-unit precision
    pub min_health_factor: u128,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            liquidation_threshold: ratios::LIQUIDATION_THRESHOLD,
            liquidation_bonus: ratios::LIQUIDATION_BONUS,
            min_health_factor: ratios::MIN_HEALTH_FACTOR,
        }
    }
}
