//! Evaluation facade.
//!
//! The editing surface calls [`evaluate`] after every mutation: there
//! is no incremental update, the full recomputation is proportional to
//! leg count x sample count and stays small.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::payoff::{PayoffSample, PayoffSummary, analyze, payoff_curve};
use crate::strategy::StrategyAggregate;
use crate::validation::{ValidationReport, validate_strategy};

/// Everything the display layer needs after a mutation: the sampled
/// curve (for charting), the summary statistics, and the deployability
/// verdict (to enable/disable the deploy action).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyEvaluation {
    /// Sampled payoff curve.
    pub curve: Vec<PayoffSample>,
    /// Derived summary statistics.
    pub summary: PayoffSummary,
    /// Completeness report.
    pub validation: ValidationReport,
}

/// Recompute the payoff curve, summary and validation report for the
/// current aggregate state.
#[must_use]
pub fn evaluate(strategy: &StrategyAggregate, config: &EngineConfig) -> StrategyEvaluation {
    let curve = payoff_curve(&strategy.legs, config);
    let summary = analyze(&strategy.legs, &curve, config);
    let validation = validate_strategy(strategy);

    debug!(
        legs = strategy.legs.len(),
        samples = curve.len(),
        breakevens = summary.breakevens.len(),
        deployable = validation.deployable,
        "strategy evaluation recomputed"
    );

    StrategyEvaluation {
        curve,
        summary,
        validation,
    }
}
