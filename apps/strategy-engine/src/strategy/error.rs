//! Strategy error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from leg construction or update.
///
/// Raised whenever a leg invariant is violated. Never recovered
/// internally - the editing surface must reject the edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLegError {
    /// Strike must be strictly positive.
    #[error("Strike must be positive, got {strike}")]
    NonPositiveStrike {
        /// The rejected strike.
        strike: Decimal,
    },

    /// Quantity must be at least one lot.
    #[error("Quantity must be positive")]
    ZeroQuantity,

    /// Lot size must be at least one unit.
    #[error("Lot size must be positive")]
    ZeroLotSize,

    /// Premium is a price and cannot be negative.
    #[error("Premium cannot be negative, got {premium}")]
    NegativePremium {
        /// The rejected premium.
        premium: Decimal,
    },
}

/// Errors from the draft -> active promotion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeployError {
    /// The validation report contains invalid fields.
    #[error("Strategy is not deployable: {issues:?}")]
    NotDeployable {
        /// Messages of the invalid checks blocking deployment.
        issues: Vec<String>,
    },

    /// The strategy is already active.
    #[error("Strategy is already active")]
    AlreadyActive,
}
