//! Analysis configuration
//!
//! Settings consumed by the extraction engine. Every field has a default so
//! a partial TOML file is valid; CLI flags are layered on top by the caller.

use super::error::AnalysisError;
use super::transaction::{Amount, Direction};
use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Block delimiter used by SAHAL notification exports
pub const DEFAULT_DELIMITER: &str = "[SAHAL]";

/// Default length of every top-N ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Decimal rounding applied when an amount carries more than two decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Midpoint rounds away from zero (2.345 → 2.35)
    #[default]
    HalfUp,
    /// Midpoint rounds to the even neighbour (2.345 → 2.34)
    HalfEven,
    /// Extra digits are dropped (2.349 → 2.34)
    Truncate,
}

impl RoundingMode {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Truncate => RoundingStrategy::ToZero,
        }
    }
}

/// Meaning of a positive per-counterparty ledger balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SignConvention {
    /// Positive balance: the owner received more than they sent, so the
    /// owner owes the counterparty. Received adds, sent subtracts.
    #[default]
    OwedByMe,
    /// Positive balance: the owner sent more than they received, so the
    /// counterparty owes the owner. Sent adds, received subtracts.
    OwedToMe,
}

impl SignConvention {
    /// Signed contribution of one amount to a ledger balance
    pub fn signed(self, direction: Direction, amount: Amount) -> Decimal {
        let value = amount.value();
        match (self, direction) {
            (SignConvention::OwedByMe, Direction::Received)
            | (SignConvention::OwedToMe, Direction::Sent) => value,
            (SignConvention::OwedByMe, Direction::Sent)
            | (SignConvention::OwedToMe, Direction::Received) => -value,
        }
    }
}

/// Engine configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Literal marker separating transaction blocks
    pub delimiter: String,

    /// Length of every top-N ranking
    pub top_n: usize,

    /// Rounding applied to amounts and to the average
    pub rounding: RoundingMode,

    /// Sign of per-counterparty balances and of the net balance
    pub sign_convention: SignConvention,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            top_n: DEFAULT_TOP_N,
            rounding: RoundingMode::default(),
            sign_convention: SignConvention::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document, filling missing keys with defaults
    pub fn from_toml(content: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.delimiter.trim().is_empty() {
            return Err(AnalysisError::invalid_config(
                "delimiter must contain at least one non-whitespace character",
            ));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::invalid_config("top_n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.delimiter, "[SAHAL]");
        assert_eq!(config.top_n, 5);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert_eq!(config.sign_convention, SignConvention::OwedByMe);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = AnalysisConfig::from_toml("top_n = 10\n").unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.delimiter, DEFAULT_DELIMITER);
    }

    #[test]
    fn test_from_toml_full() {
        let content = r#"
            delimiter = "---"
            top_n = 3
            rounding = "half-even"
            sign_convention = "owed-to-me"
        "#;
        let config = AnalysisConfig::from_toml(content).unwrap();
        assert_eq!(config.delimiter, "---");
        assert_eq!(config.top_n, 3);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.sign_convention, SignConvention::OwedToMe);
    }

    #[rstest]
    #[case::empty_delimiter("delimiter = \"  \"\n")]
    #[case::zero_top_n("top_n = 0\n")]
    #[case::unknown_key("colour = \"red\"\n")]
    #[case::bad_rounding("rounding = \"ceiling\"\n")]
    fn test_from_toml_rejects(#[case] content: &str) {
        let result = AnalysisConfig::from_toml(content);
        assert!(matches!(result, Err(AnalysisError::InvalidConfig { .. })));
    }

    #[rstest]
    #[case(SignConvention::OwedByMe, Direction::Received, "5.00")]
    #[case(SignConvention::OwedByMe, Direction::Sent, "-5.00")]
    #[case(SignConvention::OwedToMe, Direction::Sent, "5.00")]
    #[case(SignConvention::OwedToMe, Direction::Received, "-5.00")]
    fn test_sign_convention(
        #[case] convention: SignConvention,
        #[case] direction: Direction,
        #[case] expected: &str,
    ) {
        let amount = Amount::new(
            Decimal::from_str("5.00").unwrap(),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .unwrap();
        assert_eq!(
            convention.signed(direction, amount),
            Decimal::from_str(expected).unwrap()
        );
    }
}
