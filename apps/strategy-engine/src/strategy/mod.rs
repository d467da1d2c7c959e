//! Strategy domain model.
//!
//! This module provides:
//! - The option leg model with construction-time invariants
//! - The strategy aggregate (legs, conditions, draft/active lifecycle)
//! - Entry/exit condition records carried for the external execution engine
//! - Template expansion into concrete aggregates
//! - The leg sequence editor backing drag-and-drop reordering

mod aggregate;
mod conditions;
mod editor;
mod error;
mod ids;
mod leg;
mod template;

// Identifiers
pub use ids::{ConditionId, LegId};

// Leg model
pub use leg::{LegAction, LegPatch, OptionKind, OptionLeg};

// Conditions
pub use conditions::{
    ComparisonOp, ConditionValue, EntryCondition, EntryConditionKind, EntryConditionTemplate,
    ExitCondition, ExitConditionKind, ExitConditionTemplate,
};

// Aggregate and lifecycle
pub use aggregate::StrategyAggregate;

// Errors
pub use error::{DeployError, InvalidLegError};

// Sequence editing
pub use editor::{insert_after_last, move_leg};

// Templates
pub use template::{
    LegTemplate, StrategyTemplate, builtins, covered_call, iron_condor, long_butterfly,
    long_straddle,
};
