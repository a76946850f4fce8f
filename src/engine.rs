//! Scanning and parsing engine.
//!
//! Standardizing a string is a two-step pipeline:
//!
//! ```text
//! input ── scan_all (scanner.rs) ──> [Token] ── Parser::standardize (parser.rs)
//!          words, numbers, separators            ordered productions
//!          classified via lexicon.rs              with positional backtracking
//!                                                        │
//!                                                        v
//!                                          Option<(CompoundDate, Production)>
//! ```
//!
//! Encoding the result into an index key is not part of the engine; see
//! `encode.rs`.
//!
//! ## Responsibilities by module
//!
//! - `token.rs`: token kinds and the `KindSet` bitflags the parser skips over.
//! - `lexicon.rs`: keyword and month-name tables.
//! - `scanner.rs`: character-level tokenizer with one character of lookahead.
//! - `parser.rs`: the productions and the top-level stage order.
//! - `metrics.rs`: timing for verbose runs.
//!
//! ## Purity
//!
//! Nothing here keeps state between calls. The word tables are initialized
//! once and only read afterwards, so any number of threads may standardize
//! concurrently.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug` and `trace` level. They cost
//! nothing unless a subscriber is installed (the CLI installs one from
//! `RUST_LOG`).

#[path = "engine/lexicon.rs"]
mod lexicon;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/token.rs"]
mod token;

pub use parser::Production;
pub use token::TokenKind;

use crate::date::CompoundDate;
use metrics::{RunMetrics, RunResult};
use parser::Parser;
use std::time::Instant;

/// Standardize `input` without collecting any diagnostics.
pub(crate) fn run(input: &str) -> Option<CompoundDate> {
    let tokens = scanner::scan_all(input);
    tracing::trace!(tokens = tokens.len(), "scanned");

    let (compound, production) = Parser::new(&tokens).standardize()?;
    tracing::debug!(%production, encoded = %compound.encode(), "recognized date");
    Some(compound)
}

/// Standardize `input`, keeping the token list, the recognizing production
/// and timings.
pub(crate) fn run_with_metrics(input: &str) -> RunResult<'_> {
    let started = Instant::now();

    let tokens = scanner::scan_all(input);
    let scan = started.elapsed();

    let parse_started = Instant::now();
    let outcome = Parser::new(&tokens).standardize();
    let parse = parse_started.elapsed();

    match &outcome {
        Some((compound, production)) => {
            tracing::debug!(%production, encoded = %compound.encode(), "recognized date");
        }
        None => tracing::debug!(input, "no date recognized"),
    }

    RunResult { tokens, outcome, metrics: RunMetrics { total: started.elapsed(), scan, parse } }
}
