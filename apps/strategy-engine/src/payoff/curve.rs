//! Payoff curve generation.
//!
//! Samples a price window wide enough to reveal the strategy's shape
//! and accumulates the per-leg expiry P&L at each sample. Time value
//! and volatility are ignored by construction: this is the expiry
//! payoff, not a mark-to-market curve.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::strategy::OptionLeg;

/// One evaluation point of the payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSample {
    /// Underlying price.
    pub price: Decimal,
    /// Aggregate strategy P&L at that price (currency units).
    pub pnl: Decimal,
}

/// Sample the aggregate expiry P&L over a window around the legs'
/// strikes.
///
/// The window spans `[min_strike - padding, max_strike + padding]`
/// where padding is a fraction of the strike range, or a fixed fallback
/// for single-strike strategies. The lower bound is clamped at zero
/// since underlying prices are not negative. The window is divided into
/// `curve_steps` equal steps, both endpoints inclusive. An empty leg
/// set yields an empty curve, never an error.
#[must_use]
pub fn payoff_curve(legs: &[OptionLeg], config: &EngineConfig) -> Vec<PayoffSample> {
    let Some(first) = legs.first() else {
        return Vec::new();
    };

    let mut min_strike = first.strike;
    let mut max_strike = first.strike;
    for leg in &legs[1..] {
        min_strike = min_strike.min(leg.strike);
        max_strike = max_strike.max(leg.strike);
    }

    let range = max_strike - min_strike;
    let padding = if range > Decimal::ZERO {
        range * config.padding_ratio
    } else {
        config.padding_fallback
    };

    let start = (min_strike - padding).max(Decimal::ZERO);
    let end = max_strike + padding;
    let step = (end - start) / Decimal::from(config.curve_steps);

    let mut samples = Vec::with_capacity(config.curve_steps as usize + 1);
    for i in 0..=config.curve_steps {
        let price = start + step * Decimal::from(i);
        let pnl = legs.iter().map(|leg| leg.pnl_at(price)).sum();
        samples.push(PayoffSample { price, pnl });
    }
    samples
}
