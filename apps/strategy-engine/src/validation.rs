//! Strategy completeness validation.
//!
//! A pure function from aggregate state to an itemized report plus an
//! overall deployability verdict. Every rule is evaluated independently
//! (never short-circuited) so the editing surface can show all
//! diagnostics at once. Warnings never block deployment.

use serde::{Deserialize, Serialize};

use crate::strategy::StrategyAggregate;

/// Outcome of one validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// The rule is satisfied.
    Valid,
    /// The rule is unsatisfied but does not block deployment.
    Warning,
    /// The rule is unsatisfied and blocks deployment.
    Invalid,
}

/// One field-level validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCheck {
    /// The inspected field.
    pub field: String,
    /// Rule outcome.
    pub status: ValidationStatus,
    /// Human-readable diagnostic.
    pub message: String,
}

/// The full validation report for a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Per-field checks, in rule order.
    pub checks: Vec<ValidationCheck>,
    /// True when no check is invalid. Warnings never block.
    pub deployable: bool,
}

impl ValidationReport {
    /// Number of satisfied checks.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.count(ValidationStatus::Valid)
    }

    /// Number of warning checks.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(ValidationStatus::Warning)
    }

    /// Number of invalid checks.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.count(ValidationStatus::Invalid)
    }

    /// Messages of the invalid checks, in rule order.
    #[must_use]
    pub fn invalid_messages(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|check| check.status == ValidationStatus::Invalid)
            .map(|check| check.message.clone())
            .collect()
    }

    fn count(&self, status: ValidationStatus) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == status)
            .count()
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Validate a strategy's completeness.
///
/// Rules:
/// - `name` non-empty, else invalid
/// - `legs` non-empty, else invalid
/// - `entry_conditions` present, else warning (absence means immediate
///   execution downstream)
/// - `exit_conditions` present, else warning (absence means manual exit
///   downstream)
#[must_use]
pub fn validate_strategy(strategy: &StrategyAggregate) -> ValidationReport {
    let mut checks = Vec::with_capacity(4);

    checks.push(if strategy.name.trim().is_empty() {
        ValidationCheck {
            field: "name".to_string(),
            status: ValidationStatus::Invalid,
            message: "Strategy name is required".to_string(),
        }
    } else {
        ValidationCheck {
            field: "name".to_string(),
            status: ValidationStatus::Valid,
            message: "Strategy has a name".to_string(),
        }
    });

    checks.push(if strategy.legs.is_empty() {
        ValidationCheck {
            field: "legs".to_string(),
            status: ValidationStatus::Invalid,
            message: "At least one strategy leg is required".to_string(),
        }
    } else {
        ValidationCheck {
            field: "legs".to_string(),
            status: ValidationStatus::Valid,
            message: format!(
                "{} configured",
                plural(strategy.legs.len(), "leg", "legs")
            ),
        }
    });

    checks.push(if strategy.entry_conditions.is_empty() {
        ValidationCheck {
            field: "entry_conditions".to_string(),
            status: ValidationStatus::Warning,
            message: "No entry conditions set (strategy will execute immediately)".to_string(),
        }
    } else {
        ValidationCheck {
            field: "entry_conditions".to_string(),
            status: ValidationStatus::Valid,
            message: format!(
                "{} set",
                plural(
                    strategy.entry_conditions.len(),
                    "entry condition",
                    "entry conditions"
                )
            ),
        }
    });

    checks.push(if strategy.exit_conditions.is_empty() {
        ValidationCheck {
            field: "exit_conditions".to_string(),
            status: ValidationStatus::Warning,
            message: "No exit conditions set (manual exit required)".to_string(),
        }
    } else {
        ValidationCheck {
            field: "exit_conditions".to_string(),
            status: ValidationStatus::Valid,
            message: format!(
                "{} set",
                plural(
                    strategy.exit_conditions.len(),
                    "exit condition",
                    "exit conditions"
                )
            ),
        }
    });

    let deployable = !checks
        .iter()
        .any(|check| check.status == ValidationStatus::Invalid);

    ValidationReport { checks, deployable }
}
