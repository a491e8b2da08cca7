//! Engine Core
//!
//! Owns the immutable collateral registry, the position ledger, the
//! external collaborators, and the reentrancy guard. The mutating entry
//! points live in the `collateral`, `debt`, and `liquidation` modules;
//! this module provides construction, the read-only queries, and the
//! solvency choke point every mutating operation goes through.

use crate::constants::precision;
use crate::conversion;
use crate::errors::{EngineError, EngineResult};
use crate::events::EngineEvent;
use crate::external::{AssetLedger, DebtTokenLedger, PriceSource};
use crate::guard::ReentrancyGuard;
use crate::ledger::PositionLedger;
use crate::math;
use crate::types::{Address, AssetId, EngineParams};
use crate::{Box, Vec};

/// One registered collateral asset with its collaborators.
pub(crate) struct CollateralEntry {
    pub(crate) asset: AssetId,
    pub(crate) feed: Box<dyn PriceSource>,
    pub(crate) custody: Box<dyn AssetLedger>,
}

/// The collateralized-debt engine.
pub struct Engine {
    pub(crate) address: Address,
    pub(crate) params: EngineParams,
    pub(crate) registry: Vec<CollateralEntry>,
    pub(crate) debt_ledger: Box<dyn DebtTokenLedger>,
    pub(crate) ledger: PositionLedger,
    pub(crate) guard: ReentrancyGuard,
    pub(crate) events: Vec<EngineEvent>,
}

impl Engine {
    /// Construct an engine from parallel collaborator lists.
    ///
    /// `assets`, `feeds`, and `custody` are ordered and must have equal
    /// lengths; the resulting registry order is the iteration order used
    /// everywhere (deterministic valuation). The registry is immutable
    /// afterward: there is no add/remove operation.
    pub fn new(
        address: Address,
        assets: Vec<AssetId>,
        feeds: Vec<Box<dyn PriceSource>>,
        custody: Vec<Box<dyn AssetLedger>>,
        debt_ledger: Box<dyn DebtTokenLedger>,
        params: EngineParams,
    ) -> EngineResult<Self> {
        if assets.len() != feeds.len() {
            return Err(EngineError::ConfigurationLengthMismatch {
                assets: assets.len(),
                collaborators: feeds.len(),
            });
        }
        if assets.len() != custody.len() {
            return Err(EngineError::ConfigurationLengthMismatch {
                assets: assets.len(),
                collaborators: custody.len(),
            });
        }

        let registry = assets
            .into_iter()
            .zip(feeds)
            .zip(custody)
            .map(|((asset, feed), custody)| CollateralEntry {
                asset,
                feed,
                custody,
            })
            .collect();

        Ok(Self {
            address,
            params,
            registry,
            debt_ledger,
            ledger: PositionLedger::new(),
            guard: ReentrancyGuard::new(),
            events: Vec::new(),
        })
    }

    // ============ Queries ============

    /// The engine's own custody address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Registered collateral assets, in registry order
    pub fn collateral_assets(&self) -> Vec<AssetId> {
        self.registry.iter().map(|e| e.asset).collect()
    }

    /// Configured liquidation threshold numerator
    pub fn liquidation_threshold(&self) -> u128 {
        self.params.liquidation_threshold
    }

    /// Configured liquidation bonus numerator
    pub fn liquidation_bonus(&self) -> u128 {
        self.params.liquidation_bonus
    }

    /// Configured minimum health factor
    pub fn min_health_factor(&self) -> u128 {
        self.params.min_health_factor
    }

    /// Value-unit precision (1e18)
    pub fn value_precision(&self) -> u128 {
        precision::VALUE_PRECISION
    }

    /// Deposited quantity of one asset for an account
    pub fn collateral_balance_of(&self, account: Address, asset: AssetId) -> u128 {
        self.ledger.collateral_of(&account, &asset)
    }

    /// Recorded minted debt of an account
    pub fn debt_of(&self, account: Address) -> u128 {
        self.ledger.debt_of(&account)
    }

    /// Current value of `quantity` units of `asset`
    pub fn value_of(&self, asset: AssetId, quantity: u128) -> EngineResult<u128> {
        let idx = self.registry_index(asset)?;
        let price = self.fetch_price(idx)?;
        conversion::asset_to_value(quantity, price)
    }

    /// Asset quantity currently worth `value` value units
    pub fn quantity_from_value(&self, asset: AssetId, value: u128) -> EngineResult<u128> {
        let idx = self.registry_index(asset)?;
        let price = self.fetch_price(idx)?;
        conversion::value_to_asset(value, price)
    }

    /// Total collateral value of an account, summed in registry order.
    ///
    /// Zero balances contribute zero without touching their feed, so an
    /// account is never blocked by a stale feed for an asset it does not
    /// hold.
    pub fn total_collateral_value(&self, account: Address) -> EngineResult<u128> {
        let mut total: u128 = 0;
        for idx in 0..self.registry.len() {
            let balance = self
                .ledger
                .collateral_of(&account, &self.registry[idx].asset);
            if balance == 0 {
                continue;
            }
            let price = self.fetch_price(idx)?;
            let value = conversion::asset_to_value(balance, price)?;
            total = total.checked_add(value).ok_or(EngineError::Overflow)?;
        }
        Ok(total)
    }

    /// (minted debt, total collateral value) for an account
    pub fn account_information(&self, account: Address) -> EngineResult<(u128, u128)> {
        let debt = self.ledger.debt_of(&account);
        let collateral_value = self.total_collateral_value(account)?;
        Ok((debt, collateral_value))
    }

    /// Current health factor of an account
    pub fn health_factor_of(&self, account: Address) -> EngineResult<u128> {
        let (debt, collateral_value) = self.account_information(account)?;
        math::health_factor(debt, collateral_value, self.params.liquidation_threshold)
    }

    /// Drain the event log accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        core::mem::take(&mut self.events)
    }

    // ============ Internal ============

    pub(crate) fn registry_index(&self, asset: AssetId) -> EngineResult<usize> {
        self.registry
            .iter()
            .position(|e| e.asset == asset)
            .ok_or(EngineError::AssetNotAllowed { asset })
    }

    /// Fetch and validate the current price for a registry entry.
    pub(crate) fn fetch_price(&self, idx: usize) -> EngineResult<u128> {
        let entry = &self.registry[idx];
        let sample = entry
            .feed
            .latest_price()
            .map_err(|_| EngineError::PriceUnavailable { asset: entry.asset })?;
        if sample.price <= 0 {
            return Err(EngineError::PriceUnavailable { asset: entry.asset });
        }
        Ok(sample.price as u128)
    }

    /// The single solvency choke point: fails with `HealthFactorBroken`
    /// when the account's current ratio is below the minimum.
    pub(crate) fn assert_solvent(&self, account: Address) -> EngineResult<()> {
        let health_factor = self.health_factor_of(account)?;
        if health_factor < self.params.min_health_factor {
            return Err(EngineError::HealthFactorBroken { health_factor });
        }
        Ok(())
    }
}
