//! Core traits for block classification and date extraction
//!
//! These are the seams of the extraction pipeline. Both are pure functions of
//! block text, so implementations must be `Send + Sync` and may run on any
//! worker thread.

use crate::types::Classification;
use chrono::NaiveDateTime;
use rust_decimal::RoundingStrategy;

/// A single transaction-pattern rule
///
/// A rule is total: it either extracts amount, counterparty and kind
/// together, or reports no match. A rule never yields a partial record.
pub trait ClassificationRule: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Try to classify the block text
    ///
    /// `rounding` is applied when the amount carries more than two decimals.
    fn classify(&self, text: &str, rounding: RoundingStrategy) -> Option<Classification>;
}

/// A single date/time textual pattern
pub trait DatePattern: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Parse the leftmost occurrence of this pattern in `text`
    ///
    /// Returns `None` when the pattern is absent or its leftmost occurrence
    /// does not form a valid calendar date and time.
    fn extract(&self, text: &str) -> Option<NaiveDateTime>;
}
