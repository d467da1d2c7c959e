//! Entry and exit condition records.
//!
//! Conditions are carried on the aggregate for the external execution
//! engine; this engine never interprets them. Id-less template variants
//! feed the template expander, which mints fresh ids and copies values
//! verbatim.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ConditionId;

/// Comparison operator for condition thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Strictly greater than.
    #[serde(rename = ">")]
    GreaterThan,
    /// Strictly less than.
    #[serde(rename = "<")]
    LessThan,
    /// Equal to.
    #[serde(rename = "=")]
    Equal,
    /// Greater than or equal to.
    #[serde(rename = ">=")]
    GreaterOrEqual,
    /// Less than or equal to.
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Equal => "=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}

/// Condition threshold value (numeric or free text such as a time of day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// Numeric threshold.
    Number(Decimal),
    /// Textual threshold (e.g. `"09:20"`).
    Text(String),
}

/// Kind of entry trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryConditionKind {
    /// Time-of-day trigger.
    Time,
    /// Underlying price trigger.
    Price,
    /// Implied volatility trigger.
    Volatility,
    /// Technical indicator trigger.
    Technical,
}

/// Kind of exit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitConditionKind {
    /// Close at a profit target.
    ProfitTarget,
    /// Close at a stop loss.
    StopLoss,
    /// Close based on time (e.g. days to expiry).
    TimeBased,
    /// Trailing stop loss.
    TrailingSl,
    /// Technical indicator trigger.
    Technical,
}

/// One entry condition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCondition {
    /// Unique identifier.
    pub id: ConditionId,
    /// Trigger kind.
    pub kind: EntryConditionKind,
    /// Parameter the trigger observes (e.g. `"iv"`, `"rsi"`).
    pub parameter: String,
    /// Comparison operator.
    pub operator: ComparisonOp,
    /// Threshold value.
    pub value: ConditionValue,
    /// Whether the condition is enabled.
    pub enabled: bool,
}

/// One exit condition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitCondition {
    /// Unique identifier.
    pub id: ConditionId,
    /// Trigger kind.
    pub kind: ExitConditionKind,
    /// Parameter the trigger observes (e.g. `"percentage"`, `"dte"`).
    pub parameter: String,
    /// Threshold value.
    pub value: Decimal,
    /// Whether the condition is enabled.
    pub enabled: bool,
}

/// An entry condition shape without an id, used in templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConditionTemplate {
    /// Trigger kind.
    pub kind: EntryConditionKind,
    /// Observed parameter.
    pub parameter: String,
    /// Comparison operator.
    pub operator: ComparisonOp,
    /// Threshold value.
    pub value: ConditionValue,
    /// Whether the condition starts enabled.
    pub enabled: bool,
}

impl EntryConditionTemplate {
    /// Expand into a concrete condition with a fresh id.
    #[must_use]
    pub fn instantiate(&self) -> EntryCondition {
        EntryCondition {
            id: ConditionId::generate(),
            kind: self.kind,
            parameter: self.parameter.clone(),
            operator: self.operator,
            value: self.value.clone(),
            enabled: self.enabled,
        }
    }
}

/// An exit condition shape without an id, used in templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitConditionTemplate {
    /// Trigger kind.
    pub kind: ExitConditionKind,
    /// Observed parameter.
    pub parameter: String,
    /// Threshold value.
    pub value: Decimal,
    /// Whether the condition starts enabled.
    pub enabled: bool,
}

impl ExitConditionTemplate {
    /// Expand into a concrete condition with a fresh id.
    #[must_use]
    pub fn instantiate(&self) -> ExitCondition {
        ExitCondition {
            id: ConditionId::generate(),
            kind: self.kind,
            parameter: self.parameter.clone(),
            value: self.value,
            enabled: self.enabled,
        }
    }
}
