//! Liquidation Engine
//!
//! A liquidation is one atomic sequence: seize covered collateral plus
//! bonus from an undercollateralized target, retire the covered debt
//! funded by the liquidator, and verify that the target was restored to
//! the minimum health factor and that the liquidator remains solvent.
//! The bonus is paid out of the target's collateral, so the flow is a
//! zero-sum transfer that strictly reduces system-wide debt.

use crate::constants::ratios::LIQUIDATION_PRECISION;
use crate::conversion;
use crate::engine::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::events::EngineEvent;
use crate::math;
use crate::types::{Address, AssetId};

impl Engine {
    /// Cover `debt_to_cover` of `target`'s debt, seizing the equivalent
    /// quantity of `collateral_asset` plus the liquidation bonus into
    /// `liquidator`'s custody.
    pub fn liquidate(
        &mut self,
        liquidator: Address,
        target: Address,
        collateral_asset: AssetId,
        debt_to_cover: u128,
    ) -> EngineResult<()> {
        let _permit = self.guard.enter()?;
        if debt_to_cover == 0 {
            return Err(EngineError::AmountMustBePositive);
        }
        let idx = self.registry_index(collateral_asset)?;

        let starting_health = self.health_factor_of(target)?;
        if !math::is_liquidatable(starting_health, self.params.min_health_factor) {
            return Err(EngineError::HealthFactorOk {
                health_factor: starting_health,
            });
        }

        let price = self.fetch_price(idx)?;
        let seized = conversion::value_to_asset(debt_to_cover, price)?;
        let bonus = seized
            .checked_mul(self.params.liquidation_bonus)
            .ok_or(EngineError::Overflow)?
            / LIQUIDATION_PRECISION;
        let total_seized = seized.checked_add(bonus).ok_or(EngineError::Overflow)?;

        // Stage the ledger mutations; postconditions run against the
        // staged state, externals only after every check passes.
        self.ledger
            .sub_collateral(target, collateral_asset, total_seized)?;
        if let Err(err) = self.ledger.sub_debt(target, debt_to_cover) {
            self.ledger
                .add_collateral(target, collateral_asset, total_seized)?;
            return Err(err);
        }

        if let Err(err) = self.check_liquidation_postconditions(target, liquidator) {
            self.unwind_seizure(target, collateral_asset, total_seized, debt_to_cover)?;
            return Err(err);
        }

        // Commit: pull the repayment, release the seized collateral,
        // destroy the covered debt.
        let engine = self.address;
        if !self.debt_ledger.transfer_from(liquidator, engine, debt_to_cover) {
            self.unwind_seizure(target, collateral_asset, total_seized, debt_to_cover)?;
            return Err(EngineError::TransferFailed {
                from: liquidator,
                to: engine,
                amount: debt_to_cover,
            });
        }
        if !self.registry[idx].custody.transfer(liquidator, total_seized) {
            // Return the pulled repayment before unwinding; if that
            // also fails the amount stays with the engine, so record it.
            if !self.debt_ledger.transfer_from(engine, liquidator, debt_to_cover) {
                self.events.push(EngineEvent::DebtRefundStranded {
                    liquidator,
                    amount: debt_to_cover,
                });
            }
            self.unwind_seizure(target, collateral_asset, total_seized, debt_to_cover)?;
            return Err(EngineError::TransferFailed {
                from: engine,
                to: liquidator,
                amount: total_seized,
            });
        }
        self.debt_ledger.burn(debt_to_cover);

        self.events.push(EngineEvent::Liquidated {
            target,
            liquidator,
            collateral_asset,
            debt_covered: debt_to_cover,
            collateral_seized: total_seized,
        });
        Ok(())
    }

    /// The target must reach the minimum health factor and the
    /// liquidator must not end up insolvent from the absorbed debt.
    fn check_liquidation_postconditions(
        &self,
        target: Address,
        liquidator: Address,
    ) -> EngineResult<()> {
        let ending_health = self.health_factor_of(target)?;
        if math::is_liquidatable(ending_health, self.params.min_health_factor) {
            return Err(EngineError::HealthFactorNotImproved {
                health_factor: ending_health,
            });
        }
        self.assert_solvent(liquidator)
    }

    fn unwind_seizure(
        &mut self,
        target: Address,
        collateral_asset: AssetId,
        total_seized: u128,
        debt_to_cover: u128,
    ) -> EngineResult<()> {
        self.ledger
            .add_collateral(target, collateral_asset, total_seized)?;
        self.ledger.add_debt(target, debt_to_cover)
    }
}
