//! Aggregate report types
//!
//! The report is built once per run from the full transaction sequence and
//! the ledger, and is read-only afterwards.

use super::config::SignConvention;
use super::ledger::{KindTotal, RankedCounterparty};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Earliest/latest timestamps among dated transactions
///
/// Only exists when at least one transaction carried a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeSummary {
    pub earliest: NaiveDateTime,
    pub latest: NaiveDateTime,

    /// Whole calendar days between the earliest and latest dates
    pub span_days: i64,

    /// Number of transactions with a timestamp
    pub dated_count: usize,
}

/// Terminal aggregate of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Sign convention every balance in this report is expressed in
    pub sign_convention: SignConvention,

    pub total_sent: Decimal,
    pub total_received: Decimal,

    /// Sum of all ledger balances, in the report's sign convention
    pub net_balance: Decimal,

    pub transaction_count: usize,
    pub unique_counterparties: usize,

    /// Mean amount over all transactions, zero when there are none
    pub average_amount: Decimal,

    pub unmatched_count: usize,

    /// Transactions whose block had no recognised date
    pub undated_count: usize,

    pub date_range: Option<DateRangeSummary>,

    /// Amount and count per kind, in kind declaration order
    pub kind_totals: Vec<KindTotal>,

    /// Counterparties who owe the owner, largest debt first
    pub top_debtors: Vec<RankedCounterparty>,

    /// Counterparties the owner owes, largest debt first
    pub top_creditors: Vec<RankedCounterparty>,

    /// Counterparties ranked by total sent to them
    pub top_sent_to: Vec<RankedCounterparty>,

    /// Counterparties ranked by total received from them
    pub top_received_from: Vec<RankedCounterparty>,

    /// Counterparties ranked by number of transactions
    pub most_active: Vec<RankedCounterparty>,
}

impl AnalysisReport {
    /// Combined amount of every transaction
    pub fn total_amount(&self) -> Decimal {
        self.total_sent + self.total_received
    }

    /// Number of dated transactions (zero when no date range exists)
    pub fn dated_count(&self) -> usize {
        self.date_range
            .as_ref()
            .map_or(0, |range| range.dated_count)
    }
}
