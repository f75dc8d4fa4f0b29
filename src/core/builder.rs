//! Record builder
//!
//! Turns each raw block into exactly one outcome: a transaction when a
//! classification rule matches, otherwise an unmatched block kept verbatim.

use crate::core::classifier::PatternClassifier;
use crate::core::dates::DateExtractor;
use crate::types::{BlockOutcome, RawBlock, Transaction, UnmatchedBlock};
use rust_decimal::RoundingStrategy;
use tracing::debug;

/// Combines classifier and date extractor output per block
#[derive(Debug)]
pub struct RecordBuilder {
    classifier: PatternClassifier,
    dates: DateExtractor,
    rounding: RoundingStrategy,
}

impl RecordBuilder {
    pub fn new(
        classifier: PatternClassifier,
        dates: DateExtractor,
        rounding: RoundingStrategy,
    ) -> Self {
        Self {
            classifier,
            dates,
            rounding,
        }
    }

    /// Build the outcome for one block
    ///
    /// The date extractor only runs for classified blocks.
    pub fn build(&self, block: RawBlock) -> BlockOutcome {
        match self.classifier.classify(&block.text, self.rounding) {
            Some(classification) => {
                let timestamp = self.dates.extract(&block.text);
                if timestamp.is_none() {
                    debug!(block = block.index, "no date found in block");
                }
                BlockOutcome::Matched(Transaction::new(classification, timestamp, block.index))
            }
            None => {
                debug!(block = block.index, "no rule matched block");
                BlockOutcome::Unmatched(UnmatchedBlock::from(block))
            }
        }
    }

    /// Build outcomes for a sequence of blocks, preserving order
    pub fn build_all(&self, blocks: Vec<RawBlock>) -> Vec<BlockOutcome> {
        blocks.into_iter().map(|block| self.build(block)).collect()
    }
}

/// Transactions and unmatched blocks, each in source block order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub transactions: Vec<Transaction>,
    pub unmatched: Vec<UnmatchedBlock>,
}

impl Extraction {
    /// Partition outcomes after restoring source block order
    ///
    /// Outcomes may arrive in any order (e.g. from parallel workers); they are
    /// sorted by block index first so the result never depends on arrival order.
    pub fn from_outcomes(mut outcomes: Vec<BlockOutcome>) -> Self {
        outcomes.sort_by_key(BlockOutcome::block_index);

        let mut extraction = Extraction::default();
        for outcome in outcomes {
            match outcome {
                BlockOutcome::Matched(tx) => extraction.transactions.push(tx),
                BlockOutcome::Unmatched(block) => extraction.unmatched.push(block),
            }
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use chrono::NaiveDate;

    fn builder() -> RecordBuilder {
        RecordBuilder::new(
            PatternClassifier::standard(),
            DateExtractor::standard(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    #[test]
    fn test_matched_block_with_date() {
        let block = RawBlock::new(
            3,
            "Tuesday, October 17, 2023 · 11:17 AM\n$50.00 ayaad u dirtay John Doe(",
        );
        let outcome = builder().build(block);

        let BlockOutcome::Matched(tx) = outcome else {
            panic!("expected a transaction, got {:?}", outcome);
        };
        assert_eq!(tx.kind(), TransactionKind::SentToPerson);
        assert_eq!(tx.source_block_index(), 3);
        assert_eq!(
            tx.timestamp().map(|t| t.date()),
            NaiveDate::from_ymd_opt(2023, 10, 17)
        );
    }

    #[test]
    fn test_matched_block_without_date() {
        let outcome = builder().build(RawBlock::new(0, "Waxaad $25.00 ka heshay Jane Smith("));
        match outcome {
            BlockOutcome::Matched(tx) => assert!(tx.timestamp().is_none()),
            other => panic!("expected a transaction, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_block_is_verbatim() {
        let text = "Hadhaagaagu waa $12.00\nMahadsanid";
        let outcome = builder().build(RawBlock::new(7, text));
        assert_eq!(
            outcome,
            BlockOutcome::Unmatched(UnmatchedBlock {
                index: 7,
                text: text.to_string()
            })
        );
    }

    #[test]
    fn test_from_outcomes_restores_order() {
        let b = builder();
        let outcomes = vec![
            b.build(RawBlock::new(2, "Waxaad $10.00 ugu shubtay 252907123456")),
            b.build(RawBlock::new(0, "$50.00 ayaad u dirtay John Doe(")),
            b.build(RawBlock::new(1, "nothing here")),
        ];
        let extraction = Extraction::from_outcomes(outcomes);

        let indices: Vec<_> = extraction
            .transactions
            .iter()
            .map(|tx| tx.source_block_index())
            .collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(extraction.unmatched.len(), 1);
        assert_eq!(extraction.unmatched[0].index, 1);
    }
}
