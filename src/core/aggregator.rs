//! Aggregator
//!
//! Folds the full transaction sequence into the per-counterparty ledger and
//! the global report. The fold is pure: the same transaction sequence always
//! yields the same ledger and report, rankings included.
//!
//! Rankings break ties by first-seen order (the order counterparties first
//! appear in the transaction sequence), never by name.

use crate::types::{
    AnalysisReport, CounterpartyId, DateRangeSummary, Direction, KindTotal, LedgerEntry,
    RankedCounterparty, SignConvention, Transaction, TransactionKind,
};
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Per-counterparty ledger in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    positions: HashMap<String, usize>,
}

impl Ledger {
    /// Fold transactions into a fresh ledger
    pub fn fold(transactions: &[Transaction], convention: SignConvention) -> Self {
        transactions
            .iter()
            .fold(Ledger::default(), |mut ledger, tx| {
                ledger.apply(tx, convention);
                ledger
            })
    }

    fn apply(&mut self, tx: &Transaction, convention: SignConvention) {
        let key = tx.counterparty().key();
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push(LedgerEntry::new(
                    tx.counterparty().clone(),
                    tx.source_block_index(),
                ));
                self.positions.insert(key.to_string(), position);
                position
            }
        };
        self.entries[position].apply(tx, convention);
    }

    /// Look up an entry by any casing of the counterparty name
    pub fn get(&self, counterparty: &str) -> Option<&LedgerEntry> {
        let id = CounterpartyId::parse(counterparty)?;
        self.positions.get(id.key()).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LedgerEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the ledger and the report for one run
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    convention: SignConvention,
    rounding: RoundingStrategy,
    top_n: usize,
}

impl Aggregator {
    pub fn new(convention: SignConvention, rounding: RoundingStrategy, top_n: usize) -> Self {
        Self {
            convention,
            rounding,
            top_n,
        }
    }

    /// Aggregate a complete transaction sequence
    ///
    /// `unmatched_count` is carried into the report as-is; unmatched blocks
    /// never contribute to any total.
    pub fn aggregate(
        &self,
        transactions: &[Transaction],
        unmatched_count: usize,
    ) -> (Ledger, AnalysisReport) {
        let ledger = Ledger::fold(transactions, self.convention);

        let (total_sent, total_received) =
            transactions
                .iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(sent, received), tx| {
                    match tx.direction() {
                        Direction::Sent => (sent + tx.amount().value(), received),
                        Direction::Received => (sent, received + tx.amount().value()),
                    }
                });

        let net_balance = match self.convention {
            SignConvention::OwedByMe => total_received - total_sent,
            SignConvention::OwedToMe => total_sent - total_received,
        };

        let transaction_count = transactions.len();
        let mut average_amount = if transaction_count == 0 {
            Decimal::ZERO
        } else {
            ((total_sent + total_received) / Decimal::from(transaction_count))
                .round_dp_with_strategy(2, self.rounding)
        };
        average_amount.rescale(2);

        let date_range = date_range(transactions);
        let dated_count = date_range.as_ref().map_or(0, |r| r.dated_count);

        let entries = ledger.entries();
        let report = AnalysisReport {
            sign_convention: self.convention,
            total_sent,
            total_received,
            net_balance,
            transaction_count,
            unique_counterparties: ledger.len(),
            average_amount,
            unmatched_count,
            undated_count: transaction_count - dated_count,
            date_range,
            kind_totals: kind_totals(transactions),
            top_debtors: self.rank(entries, |e| e.owed_to_me(self.convention)),
            top_creditors: self.rank(entries, |e| -e.owed_to_me(self.convention)),
            top_sent_to: self.rank(entries, |e| e.sent_total),
            top_received_from: self.rank(entries, |e| e.received_total),
            most_active: self.rank(entries, |e| Decimal::from(e.transaction_count())),
        };

        (ledger, report)
    }

    /// Top-N entries with a strictly positive `value`, largest first
    ///
    /// `entries` are in first-seen order and the sort is stable, so equal
    /// values keep first-seen order.
    fn rank<F>(&self, entries: &[LedgerEntry], value: F) -> Vec<RankedCounterparty>
    where
        F: Fn(&LedgerEntry) -> Decimal,
    {
        let mut ranked: Vec<(&LedgerEntry, Decimal)> = entries
            .iter()
            .map(|entry| (entry, value(entry)))
            .filter(|(_, v)| *v > Decimal::ZERO)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(self.top_n)
            .map(|(entry, v)| RankedCounterparty::new(entry, v))
            .collect()
    }
}

fn date_range(transactions: &[Transaction]) -> Option<DateRangeSummary> {
    let (bounds, dated_count) = transactions
        .iter()
        .filter_map(Transaction::timestamp)
        .fold(
            (None::<(NaiveDateTime, NaiveDateTime)>, 0usize),
            |(bounds, count), ts| {
                let bounds = match bounds {
                    Some((lo, hi)) => (lo.min(ts), hi.max(ts)),
                    None => (ts, ts),
                };
                (Some(bounds), count + 1)
            },
        );

    let (earliest, latest) = bounds?;
    Some(DateRangeSummary {
        earliest,
        latest,
        span_days: (latest.date() - earliest.date()).num_days(),
        dated_count,
    })
}

fn kind_totals(transactions: &[Transaction]) -> Vec<KindTotal> {
    TransactionKind::ALL
        .iter()
        .map(|&kind| {
            let (total, count) = transactions
                .iter()
                .filter(|tx| tx.kind() == kind)
                .fold((Decimal::ZERO, 0usize), |(total, count), tx| {
                    (total + tx.amount().value(), count + 1)
                });
            KindTotal { kind, total, count }
        })
        .collect()
}
