//! Payoff analytics.
//!
//! This module provides:
//! - Expiry payoff curve sampling over a window derived from the legs'
//!   strikes
//! - Breakeven and extremum analysis with explicit unbounded-risk
//!   detection
//!
//! Both are pure functions over the current leg set; the full
//! recomputation is proportional to leg count x sample count.

mod analyzer;
mod curve;

pub use analyzer::{PayoffBound, PayoffSummary, RiskReward, analyze, net_premium};
pub use curve::{PayoffSample, payoff_curve};
