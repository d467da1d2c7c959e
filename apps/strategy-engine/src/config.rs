//! Configuration for the strategy engine.
//!
//! All constants that shape template expansion and payoff sampling live
//! here: the strike ladder step, the placeholder premium model, the
//! sampling density of the payoff curve, and the margin policy applied
//! to unbounded-risk strategies.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_engine::config::EngineConfig;
//!
//! // Built-in defaults
//! let config = EngineConfig::default();
//!
//! // Or from YAML
//! let config = EngineConfig::from_yaml_str("curve_steps: 200")?;
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Tunable constants for template expansion and payoff analysis.
///
/// Every field has a default, so a partial YAML document (or an empty
/// one) always yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strike ladder step applied per leg index during template
    /// expansion (currency units).
    #[serde(default = "default_strike_step")]
    pub strike_step: Decimal,

    /// Expiry label assigned to expanded legs. Display-only, never
    /// parsed by the engine.
    #[serde(default = "default_expiry_label")]
    pub default_expiry_label: String,

    /// Placeholder premium base for template legs without a quote.
    /// Provisional - expected to be overwritten once a real quote is
    /// available.
    #[serde(default = "default_premium")]
    pub default_premium: Decimal,

    /// Upper bound of the jitter added to the placeholder premium
    /// (whole currency units).
    #[serde(default = "default_premium_jitter_max")]
    pub premium_jitter_max: u32,

    /// Number of equal steps dividing the payoff window. The curve has
    /// `curve_steps + 1` samples, both endpoints inclusive.
    #[serde(default = "default_curve_steps")]
    pub curve_steps: u32,

    /// Window padding as a fraction of the strike range.
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: Decimal,

    /// Fixed window padding when all legs share one strike (currency
    /// units). Guarantees a visible window for single-strike strategies.
    #[serde(default = "default_padding_fallback")]
    pub padding_fallback: Decimal,

    /// Conservative margin reserved for unbounded-risk strategies.
    /// Real margining rules are an external concern.
    #[serde(default = "default_unbounded_margin")]
    pub unbounded_margin: Decimal,
}

fn default_strike_step() -> Decimal {
    dec!(50)
}

fn default_expiry_label() -> String {
    "21 Nov 24".to_string()
}

fn default_premium() -> Decimal {
    dec!(150)
}

fn default_premium_jitter_max() -> u32 {
    100
}

fn default_curve_steps() -> u32 {
    100
}

fn default_padding_ratio() -> Decimal {
    dec!(0.2)
}

fn default_padding_fallback() -> Decimal {
    dec!(500)
}

fn default_unbounded_margin() -> Decimal {
    dec!(200000)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strike_step: default_strike_step(),
            default_expiry_label: default_expiry_label(),
            default_premium: default_premium(),
            premium_jitter_max: default_premium_jitter_max(),
            curve_steps: default_curve_steps(),
            padding_ratio: default_padding_ratio(),
            padding_fallback: default_padding_fallback(),
            unbounded_margin: default_unbounded_margin(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_bw::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strike_step <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "strike_step must be positive".to_string(),
            ));
        }
        if self.curve_steps < 2 {
            return Err(ConfigError::ValidationError(
                "curve_steps must be at least 2".to_string(),
            ));
        }
        if self.padding_ratio < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "padding_ratio cannot be negative".to_string(),
            ));
        }
        if self.padding_fallback <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "padding_fallback must be positive".to_string(),
            ));
        }
        if self.default_premium < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "default_premium cannot be negative".to_string(),
            ));
        }
        if self.unbounded_margin < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "unbounded_margin cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
