// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Payoff Analytics Core Library
//!
//! Turns an unordered collection of option legs into an expiry
//! profit-and-loss curve and the decision statistics derived from it,
//! and gates whether an assembled strategy may be promoted from draft
//! to active.
//!
//! # Components
//!
//! - `strategy`: leg model, aggregate, conditions, templates, and the
//!   leg sequence editor
//! - `payoff`: payoff curve sampling plus the breakeven/extremum analyzer
//! - `validation`: completeness checks producing a deployability verdict
//! - `engine`: the single synchronous recompute entry point
//! - `config`: tunable constants (strike step, sampling density, margins)
//!
//! All components are pure, synchronous functions over an in-memory leg
//! set. The engine performs no I/O: price feeds, persistence, execution
//! and backtesting are external collaborators that consume the outputs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Engine configuration (strike step, sampling density, margin policy).
pub mod config;

/// Evaluation facade - full recompute after every mutation.
pub mod engine;

/// Payoff curve generation and summary analysis.
pub mod payoff;

/// Strategy domain model - legs, aggregate, conditions, templates, editor.
pub mod strategy;

/// Strategy completeness validation and deployability verdict.
pub mod validation;

pub use config::{ConfigError, EngineConfig};
pub use engine::{StrategyEvaluation, evaluate};
pub use payoff::{
    PayoffBound, PayoffSample, PayoffSummary, RiskReward, analyze, net_premium, payoff_curve,
};
pub use strategy::{
    ComparisonOp, ConditionId, ConditionValue, DeployError, EntryCondition, EntryConditionKind,
    EntryConditionTemplate, ExitCondition, ExitConditionKind, ExitConditionTemplate,
    InvalidLegError, LegAction, LegId, LegPatch, LegTemplate, OptionKind, OptionLeg,
    StrategyAggregate, StrategyTemplate,
};
pub use validation::{ValidationCheck, ValidationReport, ValidationStatus, validate_strategy};
