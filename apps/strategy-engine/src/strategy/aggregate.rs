//! Strategy aggregate and draft/active lifecycle.
//!
//! The aggregate owns the ordered leg sequence and the condition sets.
//! Every mutation is expected to be followed by a full re-evaluation
//! (see [`crate::engine::evaluate`]); the aggregate itself stays pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conditions::{EntryCondition, ExitCondition};
use super::editor;
use super::error::{DeployError, InvalidLegError};
use super::ids::LegId;
use super::leg::{LegPatch, OptionLeg};
use crate::validation::validate_strategy;

/// A multi-leg options strategy under construction.
///
/// Created empty or from a template, mutated through leg operations,
/// and promoted to active via [`StrategyAggregate::deploy`]. Once
/// active the aggregate is immutable in spirit: callers should
/// [`StrategyAggregate::revert_to_draft`] before editing further.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAggregate {
    /// Strategy name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Category label (e.g. `"Volatility"`, `"Range Bound"`).
    pub category: String,
    /// Ordered leg sequence. Order is display-only, not payoff-relevant.
    pub legs: Vec<OptionLeg>,
    /// Entry conditions, consumed by the external execution engine.
    pub entry_conditions: Vec<EntryCondition>,
    /// Exit conditions, consumed by the external execution engine.
    pub exit_conditions: Vec<ExitCondition>,
    /// True only after a successful deployment.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl StrategyAggregate {
    /// Create an empty draft strategy.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            legs: Vec::new(),
            entry_conditions: Vec::new(),
            exit_conditions: Vec::new(),
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a leg at the end of the sequence.
    pub fn add_leg(&mut self, leg: OptionLeg) {
        editor::insert_after_last(&mut self.legs, leg);
        self.touch();
    }

    /// Remove a leg by id.
    ///
    /// Removing an unknown id is a no-op (not an error), keeping
    /// UI-driven deletes idempotent. Returns whether a leg was removed.
    pub fn remove_leg(&mut self, id: &LegId) -> bool {
        let before = self.legs.len();
        self.legs.retain(|leg| &leg.id != id);
        let removed = self.legs.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Patch a leg's fields, re-checking the leg invariants.
    ///
    /// Returns `Ok(false)` for an unknown id (no-op). An invariant
    /// violation leaves the aggregate untouched.
    pub fn update_leg(&mut self, id: &LegId, patch: &LegPatch) -> Result<bool, InvalidLegError> {
        let Some(index) = self.legs.iter().position(|leg| &leg.id == id) else {
            return Ok(false);
        };
        self.legs[index] = self.legs[index].with_patch(patch)?;
        self.touch();
        Ok(true)
    }

    /// Look up a leg by id.
    #[must_use]
    pub fn leg(&self, id: &LegId) -> Option<&OptionLeg> {
        self.legs.iter().find(|leg| &leg.id == id)
    }

    /// Relocate a leg in the display sequence.
    ///
    /// Stable array-move semantics; unknown ids are a no-op. Returns
    /// whether the leg was found.
    pub fn move_leg(&mut self, id: &LegId, to_index: usize) -> bool {
        let moved = editor::move_leg(&mut self.legs, id, to_index);
        if moved {
            self.touch();
        }
        moved
    }

    /// Promote the strategy from draft to active.
    ///
    /// Re-runs the completeness validator; the flag flips only when the
    /// report contains no invalid field. Warnings never block.
    pub fn deploy(&mut self) -> Result<(), DeployError> {
        if self.is_active {
            return Err(DeployError::AlreadyActive);
        }
        let report = validate_strategy(self);
        if !report.deployable {
            return Err(DeployError::NotDeployable {
                issues: report.invalid_messages(),
            });
        }
        self.is_active = true;
        self.touch();
        debug!(name = %self.name, legs = self.legs.len(), "strategy deployed");
        Ok(())
    }

    /// Demote the strategy back to draft so it can be edited again.
    pub fn revert_to_draft(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
