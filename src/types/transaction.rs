//! Transaction-related types for the SAHAL ledger
//!
//! This module defines the transaction kinds, the money amount newtype,
//! counterparty identities, and the per-block records produced by the
//! extraction pipeline.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal position of a block in the source text, counted from 0
pub type BlockIndex = usize;

/// A contiguous slice of input text between two delimiter markers
///
/// Produced by the splitter and consumed once by extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Ordinal of this block among the non-empty blocks of the source
    pub index: BlockIndex,

    /// Trimmed block text, delimiter excluded
    pub text: String,
}

impl RawBlock {
    pub fn new(index: BlockIndex, text: impl Into<String>) -> Self {
        RawBlock {
            index,
            text: text.into(),
        }
    }
}

/// Money flow direction of a transaction, seen from the account owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money left the owner's wallet
    Sent,
    /// Money arrived in the owner's wallet
    Received,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

/// Classified transaction category
///
/// The kind → direction table in [`TransactionKind::direction`] is the single
/// source of truth for every total, balance and ranking in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money transfer to a named person ("ayaad u dirtay")
    SentToPerson,

    /// Money transfer received from a named person ("ka heshay")
    ReceivedFromPerson,

    /// Cash-out or top-up to a mobile number ("ugu shubtay")
    SentToNumber,

    /// Airtime credited from a mobile number
    AirtimeReceived,
}

impl TransactionKind {
    /// Every kind, in declaration order
    pub const ALL: [TransactionKind; 4] = [
        TransactionKind::SentToPerson,
        TransactionKind::ReceivedFromPerson,
        TransactionKind::SentToNumber,
        TransactionKind::AirtimeReceived,
    ];

    /// Direction of money flow for this kind
    ///
    /// | kind                 | direction |
    /// |----------------------|-----------|
    /// | `SentToPerson`       | Sent      |
    /// | `SentToNumber`       | Sent      |
    /// | `ReceivedFromPerson` | Received  |
    /// | `AirtimeReceived`    | Received  |
    pub fn direction(self) -> Direction {
        match self {
            TransactionKind::SentToPerson | TransactionKind::SentToNumber => Direction::Sent,
            TransactionKind::ReceivedFromPerson | TransactionKind::AirtimeReceived => {
                Direction::Received
            }
        }
    }

    /// Whether the counterparty is a phone number rather than a person name
    pub fn is_phone_counterparty(self) -> bool {
        matches!(
            self,
            TransactionKind::SentToNumber | TransactionKind::AirtimeReceived
        )
    }

    /// Stable snake_case label used in exports
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::SentToPerson => "sent_to_person",
            TransactionKind::ReceivedFromPerson => "received_from_person",
            TransactionKind::SentToNumber => "sent_to_number",
            TransactionKind::AirtimeReceived => "airtime_received",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative currency value with exactly two fractional digits
///
/// Values stay below [`Amount::LIMIT`], so totals over any realistic number
/// of transactions fit in a `Decimal` and aggregation cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Exclusive upper bound: one quadrillion
    pub const LIMIT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

    /// Round `value` to two decimals with `strategy`
    ///
    /// Returns `None` for negative values and for values that round to
    /// [`Amount::LIMIT`] or more.
    pub fn new(value: Decimal, strategy: RoundingStrategy) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return None;
        }
        let mut rounded = value.round_dp_with_strategy(2, strategy);
        if rounded >= Self::LIMIT {
            return None;
        }
        rounded.rescale(2);
        // -0.00 would otherwise print with a sign
        rounded.set_sign_positive(true);
        Some(Amount(rounded))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Counterparty identity with separate grouping key and display form
///
/// Equality and hashing use the grouping key only, so two spellings that
/// differ by case are the same counterparty.
#[derive(Debug, Clone)]
pub struct CounterpartyId {
    /// Lower-cased, whitespace-collapsed grouping key
    key: String,

    /// Whitespace-collapsed display string, casing preserved
    display: String,
}

impl CounterpartyId {
    /// Normalize a raw captured name or number
    ///
    /// Trims, collapses internal whitespace runs to one space, and derives
    /// the case-folded key. Returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let display = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if display.is_empty() {
            return None;
        }
        let key = display.to_lowercase();
        Some(CounterpartyId { key, display })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

impl PartialEq for CounterpartyId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CounterpartyId {}

impl std::hash::Hash for CounterpartyId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Serialize for CounterpartyId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl fmt::Display for CounterpartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Result of a successful classifier match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub amount: Amount,
    pub counterparty: CounterpartyId,
    pub kind: TransactionKind,
}

/// One extracted transaction, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    amount: Amount,
    counterparty: CounterpartyId,
    kind: TransactionKind,
    timestamp: Option<NaiveDateTime>,
    source_block_index: BlockIndex,
}

impl Transaction {
    /// Build a transaction from a classifier match and an optional timestamp
    pub fn new(
        classification: Classification,
        timestamp: Option<NaiveDateTime>,
        source_block_index: BlockIndex,
    ) -> Self {
        let Classification {
            amount,
            counterparty,
            kind,
        } = classification;
        Transaction {
            amount,
            counterparty,
            kind,
            timestamp,
            source_block_index,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn counterparty(&self) -> &CounterpartyId {
        &self.counterparty
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.kind.direction()
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn source_block_index(&self) -> BlockIndex {
        self.source_block_index
    }
}

/// A block no classification rule could parse, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedBlock {
    pub index: BlockIndex,
    pub text: String,
}

impl From<RawBlock> for UnmatchedBlock {
    fn from(block: RawBlock) -> Self {
        UnmatchedBlock {
            index: block.index,
            text: block.text,
        }
    }
}

/// Per-block outcome of the record builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    Matched(Transaction),
    Unmatched(UnmatchedBlock),
}

impl BlockOutcome {
    pub fn block_index(&self) -> BlockIndex {
        match self {
            BlockOutcome::Matched(tx) => tx.source_block_index(),
            BlockOutcome::Unmatched(block) => block.index,
        }
    }
}
