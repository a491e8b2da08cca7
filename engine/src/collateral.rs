//! Collateral Operations
//!
//! Deposit and redeem flows. Deposits only improve health and skip the
//! solvency re-check; redemptions re-validate solvency against the
//! post-debit ledger state before any custody leaves the engine, so a
//! refused redemption leaves every balance untouched.

use crate::engine::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::events::EngineEvent;
use crate::types::{Address, AssetId};

impl Engine {
    /// Deposit `quantity` units of `asset` as collateral for `account`.
    ///
    /// Custody of the quantity moves from the caller to the engine via
    /// the asset's external ledger; a refused transfer aborts the whole
    /// operation.
    pub fn deposit(
        &mut self,
        account: Address,
        asset: AssetId,
        quantity: u128,
    ) -> EngineResult<()> {
        let _permit = self.guard.enter()?;
        if quantity == 0 {
            return Err(EngineError::AmountMustBePositive);
        }
        let idx = self.registry_index(asset)?;

        self.ledger.add_collateral(account, asset, quantity)?;

        let engine = self.address;
        if !self.registry[idx].custody.transfer_from(account, engine, quantity) {
            self.ledger.sub_collateral(account, asset, quantity)?;
            return Err(EngineError::TransferFailed {
                from: account,
                to: engine,
                amount: quantity,
            });
        }

        self.events.push(EngineEvent::CollateralDeposited {
            account,
            asset,
            quantity,
        });
        Ok(())
    }

    /// Redeem `quantity` units of `asset` from `account`'s position,
    /// sending custody to `destination`.
    ///
    /// The ledger is debited first and solvency re-checked against the
    /// debited state; only then does custody move. Any failure reverses
    /// the debit, so the operation is all-or-nothing.
    pub fn redeem(
        &mut self,
        account: Address,
        asset: AssetId,
        quantity: u128,
        destination: Address,
    ) -> EngineResult<()> {
        let _permit = self.guard.enter()?;
        if quantity == 0 {
            return Err(EngineError::AmountMustBePositive);
        }
        let idx = self.registry_index(asset)?;

        self.ledger.sub_collateral(account, asset, quantity)?;

        if let Err(err) = self.assert_solvent(account) {
            self.ledger.add_collateral(account, asset, quantity)?;
            return Err(err);
        }

        if !self.registry[idx].custody.transfer(destination, quantity) {
            self.ledger.add_collateral(account, asset, quantity)?;
            return Err(EngineError::TransferFailed {
                from: self.address,
                to: destination,
                amount: quantity,
            });
        }

        self.events.push(EngineEvent::CollateralRedeemed {
            account,
            asset,
            quantity,
            destination,
        });
        Ok(())
    }
}
