//! Option leg model.
//!
//! One leg is one option position: call or put, bought or sold, at a
//! strike, in lots. Legs carry the entry premium so the payoff curve is
//! an expiry P&L, not a mark-to-market curve.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvalidLegError;
use super::ids::LegId;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKind {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// Position direction for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegAction {
    /// Long position (premium paid).
    Buy,
    /// Short position (premium received).
    Sell,
}

impl LegAction {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for LegAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// A single leg of an options strategy.
///
/// Invariants (checked by [`OptionLeg::new`] and re-checked on patch):
/// `strike > 0`, `quantity > 0`, `lot_size > 0`, `premium >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Unique identifier, stable across reorders.
    pub id: LegId,
    /// Option type (call/put).
    pub kind: OptionKind,
    /// Position direction (buy/sell).
    pub action: LegAction,
    /// Exercise price.
    pub strike: Decimal,
    /// Expiry label. Display-only, never parsed by the engine.
    pub expiry: String,
    /// Number of lots.
    pub quantity: u32,
    /// Units per lot.
    pub lot_size: u32,
    /// Premium paid (buy) or received (sell) per unit at entry.
    pub premium: Decimal,
}

impl OptionLeg {
    /// Create a new leg, checking the leg invariants.
    pub fn new(
        kind: OptionKind,
        action: LegAction,
        strike: Decimal,
        expiry: impl Into<String>,
        quantity: u32,
        lot_size: u32,
        premium: Decimal,
    ) -> Result<Self, InvalidLegError> {
        validate_fields(strike, quantity, lot_size, premium)?;
        Ok(Self {
            id: LegId::generate(),
            kind,
            action,
            strike,
            expiry: expiry.into(),
            quantity,
            lot_size,
            premium,
        })
    }

    /// Effective position size in units (`quantity * lot_size`).
    #[must_use]
    pub fn effective_size(&self) -> Decimal {
        Decimal::from(self.quantity) * Decimal::from(self.lot_size)
    }

    /// Intrinsic value per unit at the given underlying price.
    #[must_use]
    pub fn intrinsic_at(&self, price: Decimal) -> Decimal {
        match self.kind {
            OptionKind::Call => (price - self.strike).max(Decimal::ZERO),
            OptionKind::Put => (self.strike - price).max(Decimal::ZERO),
        }
    }

    /// Expiry P&L contribution of this leg at the given underlying price.
    #[must_use]
    pub fn pnl_at(&self, price: Decimal) -> Decimal {
        let intrinsic = self.intrinsic_at(price);
        let per_unit = match self.action {
            LegAction::Buy => intrinsic - self.premium,
            LegAction::Sell => self.premium - intrinsic,
        };
        per_unit * self.effective_size()
    }

    /// Premium cash flow at entry (credit positive, debit negative).
    #[must_use]
    pub fn premium_cashflow(&self) -> Decimal {
        let value = self.premium * self.effective_size();
        match self.action {
            LegAction::Sell => value,
            LegAction::Buy => -value,
        }
    }

    /// Apply a field patch, re-checking the leg invariants.
    ///
    /// The id is never patched; it stays stable for the leg's lifetime.
    pub fn with_patch(&self, patch: &LegPatch) -> Result<Self, InvalidLegError> {
        let candidate = Self {
            id: self.id.clone(),
            kind: patch.kind.unwrap_or(self.kind),
            action: patch.action.unwrap_or(self.action),
            strike: patch.strike.unwrap_or(self.strike),
            expiry: patch.expiry.clone().unwrap_or_else(|| self.expiry.clone()),
            quantity: patch.quantity.unwrap_or(self.quantity),
            lot_size: patch.lot_size.unwrap_or(self.lot_size),
            premium: patch.premium.unwrap_or(self.premium),
        };
        validate_fields(
            candidate.strike,
            candidate.quantity,
            candidate.lot_size,
            candidate.premium,
        )?;
        Ok(candidate)
    }
}

/// A partial leg edit. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegPatch {
    /// New option type.
    #[serde(default)]
    pub kind: Option<OptionKind>,
    /// New direction.
    #[serde(default)]
    pub action: Option<LegAction>,
    /// New strike.
    #[serde(default)]
    pub strike: Option<Decimal>,
    /// New expiry label.
    #[serde(default)]
    pub expiry: Option<String>,
    /// New lot count.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// New lot size.
    #[serde(default)]
    pub lot_size: Option<u32>,
    /// New entry premium.
    #[serde(default)]
    pub premium: Option<Decimal>,
}

fn validate_fields(
    strike: Decimal,
    quantity: u32,
    lot_size: u32,
    premium: Decimal,
) -> Result<(), InvalidLegError> {
    if strike <= Decimal::ZERO {
        return Err(InvalidLegError::NonPositiveStrike { strike });
    }
    if quantity == 0 {
        return Err(InvalidLegError::ZeroQuantity);
    }
    if lot_size == 0 {
        return Err(InvalidLegError::ZeroLotSize);
    }
    if premium < Decimal::ZERO {
        return Err(InvalidLegError::NegativePremium { premium });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn buy_call() -> OptionLeg {
        OptionLeg::new(
            OptionKind::Call,
            LegAction::Buy,
            dec!(24100),
            "21 Nov 24",
            1,
            25,
            dec!(150),
        )
        .unwrap()
    }

    #[test]
    fn test_invariants_rejected() {
        let invalid = OptionLeg::new(
            OptionKind::Call,
            LegAction::Buy,
            dec!(0),
            "21 Nov 24",
            1,
            25,
            dec!(150),
        );
        assert!(matches!(
            invalid,
            Err(InvalidLegError::NonPositiveStrike { .. })
        ));

        let invalid = OptionLeg::new(
            OptionKind::Put,
            LegAction::Sell,
            dec!(24100),
            "21 Nov 24",
            0,
            25,
            dec!(150),
        );
        assert!(matches!(invalid, Err(InvalidLegError::ZeroQuantity)));

        let invalid = OptionLeg::new(
            OptionKind::Put,
            LegAction::Sell,
            dec!(24100),
            "21 Nov 24",
            1,
            0,
            dec!(150),
        );
        assert!(matches!(invalid, Err(InvalidLegError::ZeroLotSize)));

        let invalid = OptionLeg::new(
            OptionKind::Call,
            LegAction::Buy,
            dec!(24100),
            "21 Nov 24",
            1,
            25,
            dec!(-1),
        );
        assert!(matches!(
            invalid,
            Err(InvalidLegError::NegativePremium { .. })
        ));
    }

    #[test]
    fn test_effective_size() {
        let leg = buy_call();
        assert_eq!(leg.effective_size(), dec!(25));
    }

    #[test]
    fn test_buy_call_pnl() {
        let leg = buy_call();
        // Below the strike: premium fully lost
        assert_eq!(leg.pnl_at(dec!(23000)), dec!(-3750));
        // At breakeven strike + premium
        assert_eq!(leg.pnl_at(dec!(24250)), Decimal::ZERO);
        // Deep in the money
        assert_eq!(leg.pnl_at(dec!(24500)), dec!(6250));
    }

    #[test]
    fn test_sell_put_pnl() {
        let leg = OptionLeg::new(
            OptionKind::Put,
            LegAction::Sell,
            dec!(24000),
            "21 Nov 24",
            1,
            25,
            dec!(100),
        )
        .unwrap();
        // Above the strike: keep the premium
        assert_eq!(leg.pnl_at(dec!(24500)), dec!(2500));
        // Below the strike: premium offset by intrinsic
        assert_eq!(leg.pnl_at(dec!(23700)), dec!(-5000));
    }

    #[test]
    fn test_premium_cashflow_signs() {
        let buy = buy_call();
        assert_eq!(buy.premium_cashflow(), dec!(-3750));

        let mut sell = buy.clone();
        sell.action = LegAction::Sell;
        assert_eq!(sell.premium_cashflow(), dec!(3750));
    }

    #[test]
    fn test_patch_keeps_id_and_revalidates() {
        let leg = buy_call();
        let patched = leg
            .with_patch(&LegPatch {
                strike: Some(dec!(24200)),
                quantity: Some(2),
                ..LegPatch::default()
            })
            .unwrap();
        assert_eq!(patched.id, leg.id);
        assert_eq!(patched.strike, dec!(24200));
        assert_eq!(patched.quantity, 2);
        assert_eq!(patched.premium, leg.premium);

        let rejected = leg.with_patch(&LegPatch {
            strike: Some(dec!(-5)),
            ..LegPatch::default()
        });
        assert!(rejected.is_err());
    }
}
