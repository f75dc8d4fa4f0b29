//! Plain-text output: terminal summary and unmatched-block dump

use crate::io::csv_format::TIMESTAMP_FORMAT;
use crate::types::{
    AnalysisError, AnalysisReport, RankedCounterparty, SignConvention, UnmatchedBlock,
};
use std::io::Write;

const LABEL_WIDTH: usize = 22;

fn convention_note(convention: SignConvention) -> &'static str {
    match convention {
        SignConvention::OwedByMe => "positive = I owe them",
        SignConvention::OwedToMe => "positive = they owe me",
    }
}

fn write_ranking(
    output: &mut dyn Write,
    title: &str,
    ranking: &[RankedCounterparty],
) -> Result<(), AnalysisError> {
    writeln!(output, "{}:", title)?;
    if ranking.is_empty() {
        writeln!(output, "  (none)")?;
    }
    for (position, row) in ranking.iter().enumerate() {
        writeln!(
            output,
            "  {}. {:<24} {:>12.2} ({} tx)",
            position + 1,
            row.counterparty,
            row.value,
            row.transaction_count
        )?;
    }
    Ok(())
}

/// Write the human-readable run summary
///
/// Totals and counts first, then the date range and the debtor and
/// creditor rankings.
pub fn write_summary(report: &AnalysisReport, output: &mut dyn Write) -> Result<(), AnalysisError> {
    let rows = [
        ("Transactions", report.transaction_count.to_string()),
        ("Unmatched blocks", report.unmatched_count.to_string()),
        ("Undated transactions", report.undated_count.to_string()),
        ("Counterparties", report.unique_counterparties.to_string()),
        ("Total sent", format!("{:.2}", report.total_sent)),
        ("Total received", format!("{:.2}", report.total_received)),
        (
            "Net balance",
            format!(
                "{:.2} ({})",
                report.net_balance,
                convention_note(report.sign_convention)
            ),
        ),
        ("Average amount", format!("{:.2}", report.average_amount)),
        (
            "Date range",
            match &report.date_range {
                Some(range) => format!(
                    "{} to {} ({} days)",
                    range.earliest.format(TIMESTAMP_FORMAT),
                    range.latest.format(TIMESTAMP_FORMAT),
                    range.span_days
                ),
                None => "none".to_string(),
            },
        ),
    ];

    writeln!(output, "SAHAL Transaction Summary")?;
    writeln!(output, "=========================")?;
    for (label, value) in rows {
        writeln!(output, "{:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)?;
    }

    writeln!(output)?;
    write_ranking(output, "Top debtors (they owe me)", &report.top_debtors)?;
    write_ranking(output, "Top creditors (I owe them)", &report.top_creditors)?;
    output.flush()?;
    Ok(())
}

/// Dump unmatched blocks verbatim, separated by one blank line
pub fn write_unmatched(
    unmatched: &[UnmatchedBlock],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    for (i, block) in unmatched.iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "{}", block.text)?;
    }
    output.flush()?;
    Ok(())
}
