//! Multi-Asset Collateralized-Debt Engine
//!
//! Accounts deposit approved collateral assets and mint a debt token
//! against them; the engine enforces a minimum over-collateralization
//! ratio on every mutating operation and lets third parties liquidate
//! undercollateralized positions for a collateral bonus.
//!
//! ## Design
//!
//! - **Position accounting**: per-account collateral balances (per asset)
//!   and a minted-debt scalar, owned by [`PositionLedger`]
//! - **Health factor**: dimensionless solvency ratio in 1e18 value-unit
//!   precision; below [`constants::ratios::MIN_HEALTH_FACTOR`] a position
//!   is liquidatable
//! - **External collaborators**: the debt-token ledger, per-asset custody
//!   ledgers, and per-asset price sources are capability traits injected
//!   at construction ([`external`])
//! - **Atomicity**: every mutating call fully commits or leaves no
//!   partial effect; ledger mutations are staged and reversed in memory
//!   before any error returns
//! - **Reentrancy**: a process-wide guard rejects nested mutating entry
//!   with [`EngineError::ReentrantCallRejected`]
//!
//! This crate is `no_std` compatible when built without the default
//! `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-exports for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{boxed::Box, rc::Rc, vec::Vec};
#[cfg(feature = "std")]
pub use std::{boxed::Box, rc::Rc, vec::Vec};

pub mod constants;
pub mod errors;
pub mod types;
pub mod math;
pub mod conversion;
pub mod ledger;
pub mod external;
pub mod guard;
pub mod events;
pub mod engine;
pub mod collateral;
pub mod debt;
pub mod liquidation;

#[cfg(test)]
pub(crate) mod testutil;


// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use math::*;
pub use conversion::*;
pub use ledger::*;
pub use external::*;
pub use guard::*;
pub use events::*;
pub use engine::*;
