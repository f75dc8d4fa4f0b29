//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the synchronous and asynchronous processing
//! strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Generated Input
//!
//! Exports are generated in memory at three sizes (100, 10,000 and 200,000
//! blocks). Each export mixes:
//! - All four notification kinds
//! - Both date formats and undated blocks
//! - Unmatched noise blocks

use divan::Bencher;
use sahal_ledger::cli::StrategyType;
use sahal_ledger::strategy::{create_strategy, BatchConfig};
use sahal_ledger::types::AnalysisConfig;

const SIZES: &[usize] = &[100, 10_000, 200_000];

fn main() {
    divan::main();
}

fn generate_export(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 96);
    for i in 0..blocks {
        let body = match i % 6 {
            0 => format!("${}.{:02} ayaad u dirtay Person {}(2526)", i % 900, i % 100, i % 97),
            1 => format!("Waxaad ${}.50 ka heshay person {}(2526)", i % 300, i % 97),
            2 => format!("Waxaad ${}.00 ugu shubtay 2529{:08}", i % 50, i % 13),
            3 => format!(
                "You have received airtime of $1.{:02} from 2529{:08}",
                i % 100,
                i % 13
            ),
            4 => "Hadhaagaagu waa $42.00".to_string(),
            _ => format!(
                "Tuesday, October {}, 2023 · 9:{:02} AM\n$3.00 ayaad u dirtay Person {}(",
                i % 28 + 1,
                i % 60,
                i % 97
            ),
        };
        if i % 4 == 0 {
            out.push_str(&format!("[SAHAL]\nTar: {:02}/10/23 12:00:00\n{}\n", i % 28 + 1, body));
        } else {
            out.push_str(&format!("[SAHAL]\n{}\n", body));
        }
    }
    out
}

/// Benchmark the synchronous strategy
#[divan::bench(args = SIZES)]
fn sync_strategy(bencher: Bencher, blocks: usize) {
    let input = generate_export(blocks);
    let strategy = create_strategy(StrategyType::Sync, AnalysisConfig::default(), None);

    bencher.bench_local(|| strategy.analyze(&input).expect("Processing failed"));
}

/// Benchmark the asynchronous batch strategy with default batching
#[divan::bench(args = SIZES)]
fn async_strategy(bencher: Bencher, blocks: usize) {
    let input = generate_export(blocks);
    let strategy = create_strategy(
        StrategyType::Async,
        AnalysisConfig::default(),
        Some(BatchConfig::default()),
    );

    bencher.bench_local(|| strategy.analyze(&input).expect("Processing failed"));
}
