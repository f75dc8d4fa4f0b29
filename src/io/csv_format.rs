//! CSV export of transactions and per-counterparty ledger rows
//!
//! Both writers are pure with respect to their input: rows come out in the
//! order they are given (block order for transactions, first-seen order for
//! counterparties). Money columns always carry two decimal places.

use crate::types::{AnalysisError, LedgerEntry, Transaction};
use chrono::NaiveDateTime;
use csv::Writer;
use std::io::Write;

/// Timestamp layout used in every export
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TRANSACTION_HEADER: [&str; 6] = [
    "block",
    "kind",
    "direction",
    "counterparty",
    "amount",
    "timestamp",
];

const COUNTERPARTY_HEADER: [&str; 10] = [
    "counterparty",
    "balance",
    "sent_total",
    "received_total",
    "sent_count",
    "received_count",
    "person_total",
    "phone_total",
    "first_seen",
    "last_seen",
];

fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Write transactions in CSV format
///
/// Columns: block, kind, direction, counterparty, amount, timestamp. An
/// undated transaction has an empty timestamp column.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(TRANSACTION_HEADER)?;

    for tx in transactions {
        writer.write_record(&[
            tx.source_block_index().to_string(),
            tx.kind().to_string(),
            tx.direction().as_str().to_string(),
            tx.counterparty().display().to_string(),
            tx.amount().to_string(),
            format_timestamp(tx.timestamp()),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write ledger entries in CSV format, one row per counterparty
pub fn write_counterparties_csv(
    entries: &[LedgerEntry],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(COUNTERPARTY_HEADER)?;

    for entry in entries {
        writer.write_record(&[
            entry.counterparty.display().to_string(),
            format!("{:.2}", entry.balance),
            format!("{:.2}", entry.sent_total),
            format!("{:.2}", entry.received_total),
            entry.sent_count.to_string(),
            entry.received_count.to_string(),
            format!("{:.2}", entry.person_total),
            format!("{:.2}", entry.phone_total),
            entry.first_seen.to_string(),
            entry.last_seen.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalysisEngine;
    use rstest::rstest;

    fn transactions_csv(input: &str) -> String {
        let analysis = AnalysisEngine::default().analyze(input);
        let mut output = Vec::new();
        write_transactions_csv(&analysis.transactions, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::empty("", "block,kind,direction,counterparty,amount,timestamp\n")]
    #[case::undated(
        "$50 ayaad u dirtay John Doe(",
        "block,kind,direction,counterparty,amount,timestamp\n\
         0,sent_to_person,sent,John Doe,50.00,\n"
    )]
    #[case::dated(
        "[SAHAL]\nnoise\n[SAHAL]\nTar: 17/10/23 13:35:59\nWaxaad $10.00 ugu shubtay 252907123456",
        "block,kind,direction,counterparty,amount,timestamp\n\
         1,sent_to_number,sent,252907123456,10.00,2023-10-17 13:35:59\n"
    )]
    #[case::quoted_name(
        "Waxaad $1,250.5 ka heshay Ali, Omar(",
        "block,kind,direction,counterparty,amount,timestamp\n\
         0,received_from_person,received,\"Ali, Omar\",1250.50,\n"
    )]
    fn test_write_transactions_csv(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(transactions_csv(input), expected);
    }

    #[test]
    fn test_write_counterparties_csv() {
        let input = "[SAHAL]\n$50.00 ayaad u dirtay John Doe(\n\
                     [SAHAL]\nWaxaad $25.00 ka heshay Jane Smith(\n\
                     [SAHAL]\nWaxaad $5.00 ka heshay john doe(";
        let analysis = AnalysisEngine::default().analyze(input);
        let mut output = Vec::new();
        write_counterparties_csv(&analysis.counterparties, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "counterparty,balance,sent_total,received_total,sent_count,received_count,person_total,phone_total,first_seen,last_seen\n\
             John Doe,-45.00,50.00,5.00,1,1,55.00,0.00,0,2\n\
             Jane Smith,25.00,0.00,25.00,0,1,25.00,0.00,1,1\n"
        );
    }
}
