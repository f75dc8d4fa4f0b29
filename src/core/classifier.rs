//! Pattern classifier
//!
//! Evaluates an ordered list of transaction-pattern rules against a block and
//! returns the first complete match. Person-name rules come before
//! phone-number rules so a number can never be read as part of a name.

use crate::core::traits::ClassificationRule;
use crate::types::{Amount, Classification, CounterpartyId, TransactionKind};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;

// ── Compiled regex cache ─────────────────────────────────────────────────────

re!(
    re_sent_to_person,
    r"(?i)\$\s*(?P<amount>[0-9][0-9,]*(?:\.[0-9]+)?)\s+ayaad\s+u\s+dirtay\s+(?P<party>[^(\n]+?)\s*\("
);
re!(
    re_received_from_person,
    r"(?i)\bwaxaad\s+\$\s*(?P<amount>[0-9][0-9,]*(?:\.[0-9]+)?)\s+ka\s+heshay\s+(?P<party>[^(\n]+?)\s*\("
);
re!(
    re_sent_to_number,
    r"(?i)\bwaxaad\s+\$\s*(?P<amount>[0-9][0-9,]*(?:\.[0-9]+)?)\s+ugu\s+shubtay\s+\+?(?P<party>[0-9]{9,12})\b"
);
re!(
    re_airtime_received,
    r"(?i)\byou\s+have\s+received\s+airtime\s+of\s+\$\s*(?P<amount>[0-9][0-9,]*(?:\.[0-9]+)?)\s+from\s+\+?(?P<party>[0-9]{9,12})\b"
);
re!(
    re_amount_shape,
    r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?$"
);

/// Parse a captured amount token into a two-decimal [`Amount`]
///
/// Accepts plain digits or comma-grouped thousands, with an optional
/// fraction. Extra fractional digits are rounded with `rounding`.
pub fn parse_amount(token: &str, rounding: RoundingStrategy) -> Option<Amount> {
    let token = token.trim();
    if !re_amount_shape().is_match(token) {
        return None;
    }
    let value = Decimal::from_str(&token.replace(',', "")).ok()?;
    Amount::new(value, rounding)
}

/// A rule backed by one regex with `amount` and `party` capture groups
pub struct PhraseRule {
    name: &'static str,
    kind: TransactionKind,
    pattern: fn() -> &'static Regex,
}

impl PhraseRule {
    pub fn new(name: &'static str, kind: TransactionKind, pattern: fn() -> &'static Regex) -> Self {
        Self {
            name,
            kind,
            pattern,
        }
    }

    /// "$50.00 ayaad u dirtay John Doe("
    pub fn sent_to_person() -> Self {
        Self::new("sent_to_person", TransactionKind::SentToPerson, re_sent_to_person)
    }

    /// "Waxaad $25.00 ka heshay Jane Smith("
    pub fn received_from_person() -> Self {
        Self::new(
            "received_from_person",
            TransactionKind::ReceivedFromPerson,
            re_received_from_person,
        )
    }

    /// "Waxaad $10.00 ugu shubtay 252907123456"
    pub fn sent_to_number() -> Self {
        Self::new("sent_to_number", TransactionKind::SentToNumber, re_sent_to_number)
    }

    /// "You have received airtime of $5.00 from 252908123456"
    pub fn airtime_received() -> Self {
        Self::new(
            "airtime_received",
            TransactionKind::AirtimeReceived,
            re_airtime_received,
        )
    }
}

impl ClassificationRule for PhraseRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, text: &str, rounding: RoundingStrategy) -> Option<Classification> {
        let c = (self.pattern)().captures(text)?;
        let amount = parse_amount(c.name("amount")?.as_str(), rounding)?;
        let counterparty = CounterpartyId::parse(c.name("party")?.as_str())?;
        Some(Classification {
            amount,
            counterparty,
            kind: self.kind,
        })
    }
}

/// Ordered rule list; the first rule that fully matches wins
pub struct PatternClassifier {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl PatternClassifier {
    /// The four SAHAL notification rules in priority order
    pub fn standard() -> Self {
        Self::with_rules(vec![
            Box::new(PhraseRule::sent_to_person()),
            Box::new(PhraseRule::received_from_person()),
            Box::new(PhraseRule::sent_to_number()),
            Box::new(PhraseRule::airtime_received()),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn ClassificationRule>>) -> Self {
        Self { rules }
    }

    /// Classify a block, trying each rule in order
    pub fn classify(&self, text: &str, rounding: RoundingStrategy) -> Option<Classification> {
        self.rules
            .iter()
            .find_map(|rule| rule.classify(text, rounding))
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PatternClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternClassifier")
            .field("rules", &self.rule_names())
            .finish()
    }
}
