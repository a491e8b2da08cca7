//! External Collaborator Interfaces
//!
//! The debt-token ledger, per-asset custody ledgers, and per-asset price
//! sources live outside this core and are untrusted. They are injected at
//! construction as capability traits; the engine treats a `false` return
//! and a failed call identically (operation aborted, no partial mutation
//! persists) and never substitutes defaults for failed price reads.

use crate::types::{Address, PriceSample};

/// Why a price source declined to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFailure {
    /// Last update is older than the source's own staleness bound
    Stale { updated_at: u64, max_age: u64 },
    /// The source has no data at all
    NotAvailable,
}

/// External price source for one collateral asset.
///
/// Staleness policy (maximum age) is owned by the implementation; the
/// engine propagates any failure as `PriceUnavailable` and additionally
/// rejects non-positive prices.
pub trait PriceSource {
    fn latest_price(&self) -> Result<PriceSample, FeedFailure>;
}

/// External custody ledger for one collateral asset.
pub trait AssetLedger {
    /// Move `quantity` from `from` to `to`; `false` means refused.
    fn transfer_from(&self, from: Address, to: Address, quantity: u128) -> bool;

    /// Move `quantity` from the engine's own custody to `to`.
    fn transfer(&self, to: Address, quantity: u128) -> bool;
}

/// External debt-token ledger.
///
/// The engine's per-account minted-debt scalars, summed over all
/// accounts, must always equal this ledger's outstanding supply
/// attributable to the engine; integration tests check this, the engine
/// does not re-verify it per call.
pub trait DebtTokenLedger {
    /// Credit `amount` of debt token to `account`; `false` means refused.
    fn mint(&self, account: Address, amount: u128) -> bool;

    /// Destroy `amount` held by the engine.
    fn burn(&self, amount: u128);

    /// Move `amount` from `from` to `to`; `false` means refused.
    fn transfer_from(&self, from: Address, to: Address, amount: u128) -> bool;

    /// Current balance of `account`.
    fn balance_of(&self, account: Address) -> u128;
}
