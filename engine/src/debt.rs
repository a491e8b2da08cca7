//! Debt Operations
//!
//! Mint and burn flows. Minting increments the recorded debt before the
//! solvency check so the check runs against the post-mint figure; the
//! external debt-token credit happens only once the position is proven
//! solvent. Burning decrements the record, pulls the repayment from the
//! payer, and destroys it on the external ledger.

use crate::engine::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::events::EngineEvent;
use crate::types::Address;

impl Engine {
    /// Mint `amount` of debt token against `account`'s collateral.
    pub fn mint_debt(&mut self, account: Address, amount: u128) -> EngineResult<()> {
        let _permit = self.guard.enter()?;
        if amount == 0 {
            return Err(EngineError::AmountMustBePositive);
        }

        // Record first: the solvency check must see the post-mint debt.
        self.ledger.add_debt(account, amount)?;

        if let Err(err) = self.assert_solvent(account) {
            self.ledger.sub_debt(account, amount)?;
            return Err(err);
        }

        if !self.debt_ledger.mint(account, amount) {
            self.ledger.sub_debt(account, amount)?;
            return Err(EngineError::MintFailed { account, amount });
        }

        self.events.push(EngineEvent::DebtMinted { account, amount });
        Ok(())
    }

    /// Burn `amount` of `account`'s own debt, paid from their balance.
    pub fn burn_debt(&mut self, account: Address, amount: u128) -> EngineResult<()> {
        let _permit = self.guard.enter()?;
        if amount == 0 {
            return Err(EngineError::AmountMustBePositive);
        }

        self.ledger.sub_debt(account, amount)?;

        // Burning can only improve the ratio, but the choke point also
        // fails on unpriceable collateral; check before any external
        // effect so the debit can still be reversed.
        if let Err(err) = self.assert_solvent(account) {
            self.ledger.add_debt(account, amount)?;
            return Err(err);
        }

        let engine = self.address;
        if !self.debt_ledger.transfer_from(account, engine, amount) {
            self.ledger.add_debt(account, amount)?;
            return Err(EngineError::TransferFailed {
                from: account,
                to: engine,
                amount,
            });
        }
        self.debt_ledger.burn(amount);

        self.events.push(EngineEvent::DebtBurned {
            on_behalf_of: account,
            payer: account,
            amount,
        });
        Ok(())
    }
}
