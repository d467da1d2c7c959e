//! Strategy templates and expansion.
//!
//! A template is a reusable blueprint: leg shapes without concrete
//! strike, expiry or premium, plus default entry/exit conditions.
//! Expansion seeds concrete legs around a reference strike (the current
//! at-the-money price). Placeholder premiums are provisional and must
//! never be treated as authoritative pricing downstream.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::StrategyAggregate;
use super::conditions::{
    ComparisonOp, ConditionValue, EntryConditionKind, EntryConditionTemplate, ExitConditionKind,
    ExitConditionTemplate,
};
use super::error::InvalidLegError;
use super::leg::{LegAction, OptionKind, OptionLeg};
use crate::config::EngineConfig;

/// A leg shape without concrete strike, expiry or id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegTemplate {
    /// Option type (call/put).
    pub kind: OptionKind,
    /// Position direction.
    pub action: LegAction,
    /// Number of lots.
    pub quantity: u32,
    /// Units per lot.
    pub lot_size: u32,
    /// Premium, when the template supplies one. `None` means a
    /// placeholder is generated at expansion time.
    #[serde(default)]
    pub premium: Option<Decimal>,
    /// Explicit strike offset from the reference strike. `None` means
    /// the leg index drives the offset via the configured strike step.
    #[serde(default)]
    pub strike_offset: Option<Decimal>,
}

/// A reusable strategy blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTemplate {
    /// Template name, copied to the expanded aggregate.
    pub name: String,
    /// Description, copied to the expanded aggregate.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Leg shapes, expanded in order.
    pub legs: Vec<LegTemplate>,
    /// Default entry conditions.
    #[serde(default)]
    pub entry_conditions: Vec<EntryConditionTemplate>,
    /// Default exit conditions.
    #[serde(default)]
    pub exit_conditions: Vec<ExitConditionTemplate>,
}

impl StrategyTemplate {
    /// Expand into a concrete draft aggregate around `reference_strike`.
    ///
    /// Leg `i` gets `reference_strike + i * strike_step` unless the
    /// template supplies an explicit offset. A zero-leg template expands
    /// to a zero-leg aggregate (valid, merely not deployable).
    pub fn expand(
        &self,
        reference_strike: Decimal,
        config: &EngineConfig,
    ) -> Result<StrategyAggregate, InvalidLegError> {
        self.expand_with_rng(reference_strike, config, &mut rand::rng())
    }

    /// Expand with a caller-supplied random source for the premium
    /// jitter, so tests can seed it.
    pub fn expand_with_rng<R: Rng + ?Sized>(
        &self,
        reference_strike: Decimal,
        config: &EngineConfig,
        rng: &mut R,
    ) -> Result<StrategyAggregate, InvalidLegError> {
        let mut aggregate = StrategyAggregate::new(&self.name, &self.description, &self.category);

        for (index, shape) in self.legs.iter().enumerate() {
            let strike = match shape.strike_offset {
                Some(offset) => reference_strike + offset,
                None => reference_strike + Decimal::from(index) * config.strike_step,
            };
            let premium = shape.premium.unwrap_or_else(|| {
                let jitter = rng.random_range(0..=config.premium_jitter_max);
                config.default_premium + Decimal::from(jitter)
            });
            let leg = OptionLeg::new(
                shape.kind,
                shape.action,
                strike,
                config.default_expiry_label.clone(),
                shape.quantity,
                shape.lot_size,
                premium,
            )?;
            aggregate.add_leg(leg);
        }

        for template in &self.entry_conditions {
            aggregate.entry_conditions.push(template.instantiate());
        }
        for template in &self.exit_conditions {
            aggregate.exit_conditions.push(template.instantiate());
        }

        Ok(aggregate)
    }
}

const NIFTY_LOT_SIZE: u32 = 25;

fn leg_shape(kind: OptionKind, action: LegAction, quantity: u32) -> LegTemplate {
    LegTemplate {
        kind,
        action,
        quantity,
        lot_size: NIFTY_LOT_SIZE,
        premium: None,
        strike_offset: None,
    }
}

/// Long Straddle: buy ATM call + buy ATM put.
#[must_use]
pub fn long_straddle() -> StrategyTemplate {
    StrategyTemplate {
        name: "Long Straddle".to_string(),
        description: "Buy ATM Call + Buy ATM Put".to_string(),
        category: "Volatility".to_string(),
        legs: vec![
            leg_shape(OptionKind::Call, LegAction::Buy, 1),
            leg_shape(OptionKind::Put, LegAction::Buy, 1),
        ],
        entry_conditions: vec![EntryConditionTemplate {
            kind: EntryConditionKind::Time,
            parameter: "market_open".to_string(),
            operator: ComparisonOp::GreaterOrEqual,
            value: ConditionValue::Text("09:20".to_string()),
            enabled: true,
        }],
        exit_conditions: vec![
            ExitConditionTemplate {
                kind: ExitConditionKind::ProfitTarget,
                parameter: "percentage".to_string(),
                value: Decimal::from(25u32),
                enabled: true,
            },
            ExitConditionTemplate {
                kind: ExitConditionKind::StopLoss,
                parameter: "percentage".to_string(),
                value: Decimal::from(50u32),
                enabled: true,
            },
        ],
    }
}

/// Iron Condor: short call spread + short put spread.
#[must_use]
pub fn iron_condor() -> StrategyTemplate {
    StrategyTemplate {
        name: "Iron Condor".to_string(),
        description: "Sell ITM Call + Buy OTM Call + Sell ITM Put + Buy OTM Put".to_string(),
        category: "Range Bound".to_string(),
        legs: vec![
            leg_shape(OptionKind::Call, LegAction::Sell, 1),
            leg_shape(OptionKind::Call, LegAction::Buy, 1),
            leg_shape(OptionKind::Put, LegAction::Sell, 1),
            leg_shape(OptionKind::Put, LegAction::Buy, 1),
        ],
        entry_conditions: vec![EntryConditionTemplate {
            kind: EntryConditionKind::Volatility,
            parameter: "iv".to_string(),
            operator: ComparisonOp::LessThan,
            value: ConditionValue::Number(Decimal::from(20u32)),
            enabled: true,
        }],
        exit_conditions: vec![
            ExitConditionTemplate {
                kind: ExitConditionKind::ProfitTarget,
                parameter: "percentage".to_string(),
                value: Decimal::from(50u32),
                enabled: true,
            },
            ExitConditionTemplate {
                kind: ExitConditionKind::TimeBased,
                parameter: "dte".to_string(),
                value: Decimal::from(5u32),
                enabled: true,
            },
        ],
    }
}

/// Long Butterfly: buy ITM + sell 2 ATM + buy OTM, same type.
#[must_use]
pub fn long_butterfly() -> StrategyTemplate {
    StrategyTemplate {
        name: "Long Butterfly".to_string(),
        description: "Buy ITM + Sell 2 ATM + Buy OTM (same type)".to_string(),
        category: "Neutral".to_string(),
        legs: vec![
            leg_shape(OptionKind::Call, LegAction::Buy, 1),
            leg_shape(OptionKind::Call, LegAction::Sell, 2),
            leg_shape(OptionKind::Call, LegAction::Buy, 1),
        ],
        entry_conditions: vec![EntryConditionTemplate {
            kind: EntryConditionKind::Price,
            parameter: "underlying".to_string(),
            operator: ComparisonOp::GreaterOrEqual,
            value: ConditionValue::Number(Decimal::from(24100u32)),
            enabled: true,
        }],
        exit_conditions: vec![
            ExitConditionTemplate {
                kind: ExitConditionKind::ProfitTarget,
                parameter: "points".to_string(),
                value: Decimal::from(30u32),
                enabled: true,
            },
            ExitConditionTemplate {
                kind: ExitConditionKind::StopLoss,
                parameter: "points".to_string(),
                value: Decimal::from(15u32),
                enabled: true,
            },
        ],
    }
}

/// Covered Call: sell OTM call against a held underlying.
#[must_use]
pub fn covered_call() -> StrategyTemplate {
    StrategyTemplate {
        name: "Covered Call".to_string(),
        description: "Sell OTM Call (when holding underlying)".to_string(),
        category: "Income".to_string(),
        legs: vec![leg_shape(OptionKind::Call, LegAction::Sell, 1)],
        entry_conditions: vec![EntryConditionTemplate {
            kind: EntryConditionKind::Technical,
            parameter: "rsi".to_string(),
            operator: ComparisonOp::GreaterThan,
            value: ConditionValue::Number(Decimal::from(70u32)),
            enabled: true,
        }],
        exit_conditions: vec![
            ExitConditionTemplate {
                kind: ExitConditionKind::ProfitTarget,
                parameter: "percentage".to_string(),
                value: Decimal::from(80u32),
                enabled: true,
            },
            ExitConditionTemplate {
                kind: ExitConditionKind::TimeBased,
                parameter: "dte".to_string(),
                value: Decimal::from(7u32),
                enabled: true,
            },
        ],
    }
}

/// The built-in template catalog.
#[must_use]
pub fn builtins() -> Vec<StrategyTemplate> {
    vec![long_straddle(), iron_condor(), long_butterfly(), covered_call()]
}
