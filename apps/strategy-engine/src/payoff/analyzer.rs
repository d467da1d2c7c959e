//! Breakeven and extremum analysis.
//!
//! Post-processes the sampled payoff curve into decision statistics:
//! max profit/loss with explicit unbounded detection, breakeven
//! crossings, net premium, margin requirement and risk/reward.
//!
//! Unbounded detection is structural rather than numeric: the curve is
//! piecewise linear and every kink sits inside the sampled window, so a
//! curve still strictly rising (or falling) at a window edge keeps that
//! slope forever. Relying on floating-point infinity propagation would
//! be fragile; the edge-slope rule is exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::strategy::OptionLeg;

use super::curve::PayoffSample;

/// A payoff extremum: a finite currency amount or open-ended.
///
/// Unbounded profit/loss is a reportable state, not an error. It must
/// be surfaced distinctly so the display layer never mislabels
/// open-ended risk as a bounded number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoffBound {
    /// Finite sampled extremum.
    Finite(Decimal),
    /// Open-ended beyond the sampled window.
    Unbounded,
}

impl PayoffBound {
    /// Whether the bound is open-ended.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The finite value, if any.
    #[must_use]
    pub const fn finite(&self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Unbounded => None,
        }
    }
}

/// Risk/reward ratio, or not applicable when either bound is unbounded
/// or the max loss is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskReward {
    /// `max_profit / |max_loss|`.
    Ratio(Decimal),
    /// Not defined for this strategy.
    NotApplicable,
}

/// Summary statistics derived from the payoff curve. Recomputed
/// whenever the leg set changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSummary {
    /// Maximum profit over the curve.
    pub max_profit: PayoffBound,
    /// Maximum loss over the curve (signed minimum P&L).
    pub max_loss: PayoffBound,
    /// Breakeven prices, ascending.
    pub breakevens: Vec<Decimal>,
    /// Net premium cash flow (credit positive, debit negative).
    pub net_premium: Decimal,
    /// Capital reserved to cover the worst-case loss.
    pub margin_requirement: Decimal,
    /// Risk/reward ratio.
    pub risk_reward: RiskReward,
}

impl PayoffSummary {
    /// Neutral defaults for an empty leg set.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            max_profit: PayoffBound::Finite(Decimal::ZERO),
            max_loss: PayoffBound::Finite(Decimal::ZERO),
            breakevens: Vec::new(),
            net_premium: Decimal::ZERO,
            margin_requirement: Decimal::ZERO,
            risk_reward: RiskReward::NotApplicable,
        }
    }
}

/// Net premium over the legs (credit positive, debit negative).
#[must_use]
pub fn net_premium(legs: &[OptionLeg]) -> Decimal {
    legs.iter().map(OptionLeg::premium_cashflow).sum()
}

/// Derive summary statistics from a sampled payoff curve.
///
/// With zero legs (and therefore no samples) every output is a neutral
/// default, never an error.
#[must_use]
pub fn analyze(legs: &[OptionLeg], samples: &[PayoffSample], config: &EngineConfig) -> PayoffSummary {
    if samples.len() < 2 {
        return PayoffSummary {
            net_premium: net_premium(legs),
            ..PayoffSummary::neutral()
        };
    }

    let mut high = samples[0].pnl;
    let mut low = samples[0].pnl;
    for sample in &samples[1..] {
        high = high.max(sample.pnl);
        low = low.min(sample.pnl);
    }

    // Edge-slope rule: a strictly rising (falling) edge means the true
    // extremum lies outside the window.
    let last = samples.len() - 1;
    let rising_right = samples[last].pnl > samples[last - 1].pnl;
    let falling_right = samples[last].pnl < samples[last - 1].pnl;
    let rising_left = samples[0].pnl > samples[1].pnl;
    let falling_left = samples[0].pnl < samples[1].pnl;

    let max_profit = if rising_right || rising_left {
        PayoffBound::Unbounded
    } else {
        PayoffBound::Finite(high)
    };
    let max_loss = if falling_right || falling_left {
        PayoffBound::Unbounded
    } else {
        PayoffBound::Finite(low)
    };

    let margin_requirement = match max_loss {
        PayoffBound::Finite(loss) => loss.abs(),
        PayoffBound::Unbounded => config.unbounded_margin,
    };

    let risk_reward = match (max_profit, max_loss) {
        (PayoffBound::Finite(profit), PayoffBound::Finite(loss)) if loss != Decimal::ZERO => {
            RiskReward::Ratio(profit / loss.abs())
        }
        _ => RiskReward::NotApplicable,
    };

    PayoffSummary {
        max_profit,
        max_loss,
        breakevens: find_breakevens(samples),
        net_premium: net_premium(legs),
        margin_requirement,
        risk_reward,
    }
}

/// Scan consecutive sample pairs for zero crossings and interpolate the
/// crossing price. Scan order guarantees ascending results; an exact
/// zero shared by adjacent pairs is reported once.
fn find_breakevens(samples: &[PayoffSample]) -> Vec<Decimal> {
    let mut breakevens = Vec::new();
    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let crosses = (a.pnl <= Decimal::ZERO && b.pnl >= Decimal::ZERO)
            || (a.pnl >= Decimal::ZERO && b.pnl <= Decimal::ZERO);
        if !crosses {
            continue;
        }
        let point = if a.pnl == b.pnl {
            // Both exactly zero: the whole segment sits on the axis
            a.price
        } else {
            a.price + (b.price - a.price) * (Decimal::ZERO - a.pnl) / (b.pnl - a.pnl)
        };
        if breakevens.last() != Some(&point) {
            breakevens.push(point);
        }
    }
    breakevens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::payoff_curve;
    use crate::strategy::{LegAction, OptionKind};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn leg(
        kind: OptionKind,
        action: LegAction,
        strike: Decimal,
        premium: Decimal,
    ) -> OptionLeg {
        OptionLeg::new(kind, action, strike, "21 Nov 24", 1, 25, premium).unwrap()
    }

    fn summarize(legs: &[OptionLeg]) -> PayoffSummary {
        let config = EngineConfig::default();
        let curve = payoff_curve(legs, &config);
        analyze(legs, &curve, &config)
    }

    #[test]
    fn test_empty_leg_set_is_neutral() {
        let summary = summarize(&[]);
        assert_eq!(summary, PayoffSummary::neutral());
    }

    #[test]
    fn test_long_call_unbounded_profit() {
        // Buy Call 24100 @ 150, 1 lot of 25
        let legs = vec![leg(OptionKind::Call, LegAction::Buy, dec!(24100), dec!(150))];
        let summary = summarize(&legs);

        assert_eq!(summary.max_profit, PayoffBound::Unbounded);
        assert_eq!(summary.max_loss, PayoffBound::Finite(dec!(-3750)));
        assert_eq!(summary.breakevens, vec![dec!(24250)]);
        assert_eq!(summary.net_premium, dec!(-3750));
        assert_eq!(summary.margin_requirement, dec!(3750));
        assert_eq!(summary.risk_reward, RiskReward::NotApplicable);
    }

    #[test]
    fn test_long_put_breakeven_below_strike() {
        let legs = vec![leg(OptionKind::Put, LegAction::Buy, dec!(24100), dec!(150))];
        let summary = summarize(&legs);

        assert_eq!(summary.breakevens, vec![dec!(23950)]);
        assert_eq!(summary.max_loss, PayoffBound::Finite(dec!(-3750)));
        // P&L keeps rising toward the lower window edge
        assert_eq!(summary.max_profit, PayoffBound::Unbounded);
    }

    #[test]
    fn test_short_call_unbounded_loss_uses_policy_margin() {
        let config = EngineConfig::default();
        let legs = vec![leg(OptionKind::Call, LegAction::Sell, dec!(24100), dec!(150))];
        let curve = payoff_curve(&legs, &config);
        let summary = analyze(&legs, &curve, &config);

        assert_eq!(summary.max_loss, PayoffBound::Unbounded);
        assert_eq!(summary.max_profit, PayoffBound::Finite(dec!(3750)));
        assert_eq!(summary.margin_requirement, config.unbounded_margin);
        assert_eq!(summary.risk_reward, RiskReward::NotApplicable);
        assert_eq!(summary.net_premium, dec!(3750));
    }

    #[test]
    fn test_bear_call_spread() {
        // Sell Call 24200 @ 78.20 + Buy Call 24150 @ 112.40
        let legs = vec![
            leg(OptionKind::Call, LegAction::Sell, dec!(24200), dec!(78.20)),
            leg(OptionKind::Call, LegAction::Buy, dec!(24150), dec!(112.40)),
        ];
        let summary = summarize(&legs);

        // Net debit of (78.20 - 112.40) * 25
        assert_eq!(summary.net_premium, dec!(-855.00));
        assert!(!summary.max_profit.is_unbounded());
        assert!(!summary.max_loss.is_unbounded());

        // Exactly one breakeven, between the two strikes
        assert_eq!(summary.breakevens.len(), 1);
        let breakeven = summary.breakevens[0];
        assert!(breakeven > dec!(24150) && breakeven < dec!(24200));

        // Long spread: worst case is the debit, best case width - debit
        assert_eq!(summary.max_loss, PayoffBound::Finite(dec!(-855.00)));
        assert_eq!(summary.max_profit.finite().unwrap(), dec!(395.00));
        assert_eq!(summary.margin_requirement, dec!(855.00));
        match summary.risk_reward {
            RiskReward::Ratio(ratio) => assert!(ratio > Decimal::ZERO),
            RiskReward::NotApplicable => panic!("spread has a defined risk/reward"),
        }
    }

    #[test]
    fn test_straddle_has_two_breakevens() {
        let legs = vec![
            leg(OptionKind::Call, LegAction::Buy, dec!(24100), dec!(150)),
            leg(OptionKind::Put, LegAction::Buy, dec!(24100), dec!(120)),
        ];
        let summary = summarize(&legs);

        assert_eq!(summary.breakevens.len(), 2);
        assert_eq!(summary.breakevens[0], dec!(23830));
        assert_eq!(summary.breakevens[1], dec!(24370));
        assert!(summary.breakevens[0] < summary.breakevens[1]);
        assert_eq!(summary.max_loss, PayoffBound::Finite(dec!(-6750)));
    }

    #[test]
    fn test_exact_zero_sample_reported_once() {
        let config = EngineConfig::default();
        // Buy Call 24100 @ 150: breakeven 24250 falls exactly on a
        // sample (window [23600, 24600], step 10).
        let legs = vec![leg(OptionKind::Call, LegAction::Buy, dec!(24100), dec!(150))];
        let curve = payoff_curve(&legs, &config);
        assert!(curve.iter().any(|s| s.pnl == Decimal::ZERO));

        let summary = analyze(&legs, &curve, &config);
        assert_eq!(summary.breakevens, vec![dec!(24250)]);
    }

    #[test]
    fn test_net_premium_sign_convention() {
        let sells = vec![
            leg(OptionKind::Call, LegAction::Sell, dec!(24200), dec!(78.20)),
            leg(OptionKind::Put, LegAction::Sell, dec!(24000), dec!(90)),
        ];
        assert!(net_premium(&sells) > Decimal::ZERO);

        let buys = vec![
            leg(OptionKind::Call, LegAction::Buy, dec!(24200), dec!(78.20)),
            leg(OptionKind::Put, LegAction::Buy, dec!(24000), dec!(90)),
        ];
        assert!(net_premium(&buys) < Decimal::ZERO);
    }

    proptest! {
        // A strategy of only sell legs collects premium; flipping every
        // action to buy negates the net premium.
        #[test]
        fn prop_net_premium_negates_with_action(
            strike in 20_000u32..28_000,
            premium in 1u32..500,
            quantity in 1u32..5,
        ) {
            let sell = OptionLeg::new(
                OptionKind::Put,
                LegAction::Sell,
                Decimal::from(strike),
                "21 Nov 24",
                quantity,
                25,
                Decimal::from(premium),
            ).unwrap();
            let mut buy = sell.clone();
            buy.action = buy.action.flipped();

            let credit = net_premium(std::slice::from_ref(&sell));
            let debit = net_premium(std::slice::from_ref(&buy));
            prop_assert!(credit > Decimal::ZERO);
            prop_assert_eq!(credit, -debit);
        }
    }
}
