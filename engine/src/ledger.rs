//! Position Ledger
//!
//! Pure data store for per-account collateral balances and minted debt.
//! Positions are created implicitly on first use and never destroyed; a
//! position with all-zero balances is simply inert. No method silently
//! clamps: every boundary violation is an explicit failure.
//!
//! Business rules (solvency checks, custody movement) live in the
//! operation modules, never here.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::types::{Address, AssetId};
use crate::Vec;

/// Per-account position: collateral balances per asset plus the
/// minted-debt scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct AccountPosition {
    /// Account address
    pub account: Address,
    /// Deposited quantity per asset, in deposit order
    pub collateral: Vec<(AssetId, u128)>,
    /// Minted debt in value-unit precision
    pub debt: u128,
}

impl AccountPosition {
    fn new(account: Address) -> Self {
        Self {
            account,
            collateral: Vec::new(),
            debt: 0,
        }
    }

    /// Deposited quantity of a single asset
    pub fn collateral_of(&self, asset: &AssetId) -> u128 {
        self.collateral
            .iter()
            .find(|(a, _)| a == asset)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }
}

/// Sparse store of all account positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct PositionLedger {
    positions: Vec<AccountPosition>,
}

impl PositionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a position without creating it
    pub fn position(&self, account: &Address) -> Option<&AccountPosition> {
        self.positions.iter().find(|p| &p.account == account)
    }

    fn position_mut(&mut self, account: Address) -> &mut AccountPosition {
        if let Some(idx) = self.positions.iter().position(|p| p.account == account) {
            return &mut self.positions[idx];
        }
        self.positions.push(AccountPosition::new(account));
        let last = self.positions.len() - 1;
        &mut self.positions[last]
    }

    /// Credit collateral to an account
    pub fn add_collateral(
        &mut self,
        account: Address,
        asset: AssetId,
        quantity: u128,
    ) -> EngineResult<()> {
        let position = self.position_mut(account);
        if let Some(entry) = position.collateral.iter_mut().find(|(a, _)| *a == asset) {
            entry.1 = entry.1.checked_add(quantity).ok_or(EngineError::Overflow)?;
        } else {
            position.collateral.push((asset, quantity));
        }
        Ok(())
    }

    /// Debit collateral from an account
    pub fn sub_collateral(
        &mut self,
        account: Address,
        asset: AssetId,
        quantity: u128,
    ) -> EngineResult<()> {
        let position = self.position_mut(account);
        match position.collateral.iter_mut().find(|(a, _)| *a == asset) {
            Some(entry) if entry.1 >= quantity => {
                entry.1 -= quantity;
                Ok(())
            }
            Some(entry) => Err(EngineError::InsufficientCollateral {
                available: entry.1,
                requested: quantity,
            }),
            None => Err(EngineError::InsufficientCollateral {
                available: 0,
                requested: quantity,
            }),
        }
    }

    /// Increase an account's minted debt
    pub fn add_debt(&mut self, account: Address, amount: u128) -> EngineResult<()> {
        let position = self.position_mut(account);
        position.debt = position.debt.checked_add(amount).ok_or(EngineError::Overflow)?;
        Ok(())
    }

    /// Decrease an account's minted debt
    pub fn sub_debt(&mut self, account: Address, amount: u128) -> EngineResult<()> {
        let position = self.position_mut(account);
        if position.debt < amount {
            return Err(EngineError::InsufficientDebtRecorded {
                recorded: position.debt,
                requested: amount,
            });
        }
        position.debt -= amount;
        Ok(())
    }

    /// Deposited quantity of one asset for an account
    pub fn collateral_of(&self, account: &Address, asset: &AssetId) -> u128 {
        self.position(account).map_or(0, |p| p.collateral_of(asset))
    }

    /// Recorded minted debt of an account
    pub fn debt_of(&self, account: &Address) -> u128 {
        self.position(account).map_or(0, |p| p.debt)
    }
}
