//! Error Types for the Debt Engine
//!
//! Typed errors with the offending values attached. Every failure aborts
//! the whole operation with no partial mutation; there is no local
//! recovery or default-substitution path anywhere in the core.

use crate::types::{Address, AssetId};

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Main error enum for all engine failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ============ Input Validation ============
    /// Zero amount where a positive amount is required
    AmountMustBePositive,

    /// Asset is not in the collateral registry
    AssetNotAllowed { asset: AssetId },

    /// Construction-time collaborator lists have unequal lengths
    ConfigurationLengthMismatch { assets: usize, collaborators: usize },

    // ============ State Preconditions ============
    /// Requested quantity exceeds the account's collateral balance
    InsufficientCollateral { available: u128, requested: u128 },

    /// Requested amount exceeds the account's recorded minted debt
    InsufficientDebtRecorded { recorded: u128, requested: u128 },

    /// Liquidation target is solvent
    HealthFactorOk { health_factor: u128 },

    // ============ Invariant Violations ============
    /// Operation would leave the account below the minimum health factor
    HealthFactorBroken { health_factor: u128 },

    /// Liquidation did not restore the target to the minimum health factor
    HealthFactorNotImproved { health_factor: u128 },

    // ============ Collaborator Failures ============
    /// External custody or debt-token transfer was refused
    TransferFailed { from: Address, to: Address, amount: u128 },

    /// External debt-token ledger refused to credit the mint
    MintFailed { account: Address, amount: u128 },

    /// Price source returned stale or non-positive data
    PriceUnavailable { asset: AssetId },

    /// A mutating entry point was invoked while another was in progress
    ReentrantCallRejected,

    // ============ Math ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Division by zero
    DivisionByZero,
}

/// Failure classes mirroring the error-handling taxonomy: retry guidance
/// differs per class, the abort semantics do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller error; safe to retry with corrected input
    InputValidation,
    /// Reflects current ledger state; retry only after state changes
    StatePrecondition,
    /// Refused specifically to preserve system solvency
    InvariantViolation,
    /// Cause lies outside the core; never retried automatically
    Collaborator,
}

impl EngineError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmountMustBePositive => "E001_AMOUNT_NOT_POSITIVE",
            Self::AssetNotAllowed { .. } => "E002_ASSET_NOT_ALLOWED",
            Self::ConfigurationLengthMismatch { .. } => "E003_CONFIG_LENGTH_MISMATCH",
            Self::InsufficientCollateral { .. } => "E010_INSUFFICIENT_COLLATERAL",
            Self::InsufficientDebtRecorded { .. } => "E011_INSUFFICIENT_DEBT",
            Self::HealthFactorOk { .. } => "E012_HEALTH_FACTOR_OK",
            Self::HealthFactorBroken { .. } => "E020_HEALTH_FACTOR_BROKEN",
            Self::HealthFactorNotImproved { .. } => "E021_HEALTH_NOT_IMPROVED",
            Self::TransferFailed { .. } => "E030_TRANSFER_FAILED",
            Self::MintFailed { .. } => "E031_MINT_FAILED",
            Self::PriceUnavailable { .. } => "E032_PRICE_UNAVAILABLE",
            Self::ReentrantCallRejected => "E033_REENTRANT_CALL",
            Self::Overflow => "E040_OVERFLOW",
            Self::DivisionByZero => "E041_DIV_ZERO",
        }
    }

    /// Returns the failure class of this error
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::AmountMustBePositive
            | Self::AssetNotAllowed { .. }
            | Self::ConfigurationLengthMismatch { .. }
            | Self::Overflow
            | Self::DivisionByZero => ErrorClass::InputValidation,
            Self::InsufficientCollateral { .. }
            | Self::InsufficientDebtRecorded { .. }
            | Self::HealthFactorOk { .. } => ErrorClass::StatePrecondition,
            Self::HealthFactorBroken { .. } | Self::HealthFactorNotImproved { .. } => {
                ErrorClass::InvariantViolation
            }
            Self::TransferFailed { .. }
            | Self::MintFailed { .. }
            | Self::PriceUnavailable { .. }
            | Self::ReentrantCallRejected => ErrorClass::Collaborator,
        }
    }
}
