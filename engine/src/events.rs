//! Engine Events
//!
//! Appended to the engine's event log only after a mutating operation
//! commits; a failed operation leaves no event. The one exception is
//! [`EngineEvent::DebtRefundStranded`], recorded when a failed
//! liquidation could not return the repayment it had already pulled.
//! The embedder drains the log for indexing, UIs, or notifications.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::types::{Address, AssetId};

/// All events the engine can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum EngineEvent {
    /// Collateral entered the engine's custody
    CollateralDeposited {
        account: Address,
        asset: AssetId,
        quantity: u128,
    },

    /// Collateral left the engine's custody
    CollateralRedeemed {
        account: Address,
        asset: AssetId,
        quantity: u128,
        destination: Address,
    },

    /// Debt token credited against an account's collateral
    DebtMinted { account: Address, amount: u128 },

    /// Debt repaid and destroyed
    DebtBurned {
        on_behalf_of: Address,
        payer: Address,
        amount: u128,
    },

    /// A failed liquidation pulled the liquidator's repayment but could
    /// not return it; the amount remains in the engine's custody
    DebtRefundStranded { liquidator: Address, amount: u128 },

    /// Undercollateralized position partially liquidated
    Liquidated {
        target: Address,
        liquidator: Address,
        collateral_asset: AssetId,
        debt_covered: u128,
        collateral_seized: u128,
    },
}
