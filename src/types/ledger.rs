//! Per-counterparty ledger types
//!
//! A ledger entry is the folded state of every transaction that references
//! one counterparty. Entries are rebuilt from scratch on each run.

use super::config::SignConvention;
use super::transaction::{BlockIndex, CounterpartyId, Direction, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::Serialize;

/// Folded balance state for a single counterparty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    /// Counterparty identity, displayed with its first-seen casing
    pub counterparty: CounterpartyId,

    /// Signed balance under the run's sign convention
    ///
    /// With `OwedByMe` a positive value means the owner received more than
    /// they sent (the owner owes the counterparty). With `OwedToMe` a
    /// positive value means the owner sent more than they received.
    pub balance: Decimal,

    /// Sum of sent-kind amounts
    pub sent_total: Decimal,

    /// Sum of received-kind amounts
    pub received_total: Decimal,

    /// Number of sent-kind transactions
    pub sent_count: usize,

    /// Number of received-kind transactions
    pub received_count: usize,

    /// Total moved in person-to-person transfers
    pub person_total: Decimal,

    /// Total moved in phone-number transfers and airtime
    pub phone_total: Decimal,

    /// Block index of the first transaction with this counterparty
    pub first_seen: BlockIndex,

    /// Block index of the latest transaction with this counterparty
    pub last_seen: BlockIndex,
}

impl LedgerEntry {
    /// Create an empty entry for a counterparty first seen at `first_seen`
    pub fn new(counterparty: CounterpartyId, first_seen: BlockIndex) -> Self {
        LedgerEntry {
            counterparty,
            balance: Decimal::ZERO,
            sent_total: Decimal::ZERO,
            received_total: Decimal::ZERO,
            sent_count: 0,
            received_count: 0,
            person_total: Decimal::ZERO,
            phone_total: Decimal::ZERO,
            first_seen,
            last_seen: first_seen,
        }
    }

    /// Fold one transaction into this entry
    ///
    /// The entry keeps its original display casing.
    pub fn apply(&mut self, tx: &Transaction, convention: SignConvention) {
        let amount = tx.amount().value();
        match tx.direction() {
            Direction::Sent => {
                self.sent_total += amount;
                self.sent_count += 1;
            }
            Direction::Received => {
                self.received_total += amount;
                self.received_count += 1;
            }
        }
        self.balance += convention.signed(tx.direction(), tx.amount());
        if tx.kind().is_phone_counterparty() {
            self.phone_total += amount;
        } else {
            self.person_total += amount;
        }
        self.last_seen = tx.source_block_index();
    }

    /// Total number of transactions with this counterparty
    pub fn transaction_count(&self) -> usize {
        self.sent_count + self.received_count
    }

    /// Balance re-expressed so that positive means "the counterparty owes me"
    pub fn owed_to_me(&self, convention: SignConvention) -> Decimal {
        match convention {
            SignConvention::OwedToMe => self.balance,
            SignConvention::OwedByMe => -self.balance,
        }
    }
}

/// Amount and count for a single transaction kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindTotal {
    pub kind: TransactionKind,
    pub total: Decimal,
    pub count: usize,
}

/// One row of a top-N ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCounterparty {
    /// Display form of the counterparty
    pub counterparty: String,

    /// Ranked value (balance magnitude, total, or count depending on the list)
    pub value: Decimal,

    /// Number of transactions with this counterparty
    pub transaction_count: usize,
}

impl RankedCounterparty {
    pub fn new(entry: &LedgerEntry, value: Decimal) -> Self {
        RankedCounterparty {
            counterparty: entry.counterparty.display().to_string(),
            value,
            transaction_count: entry.transaction_count(),
        }
    }
}

