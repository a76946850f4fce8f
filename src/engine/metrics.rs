//! Run metrics for verbose standardization.
//!
//! `engine::run` is the hot path and collects nothing; `engine::run_with_metrics`
//! keeps the scanned tokens and times each phase for the CLI report and for
//! debugging unexpected parses.

use super::parser::Production;
use super::token::Token;
use crate::date::CompoundDate;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent turning characters into tokens.
    pub scan: Duration,
    /// Time spent trying productions.
    pub parse: Duration,
}

/// Engine output bundled with what it saw along the way.
#[derive(Debug, Clone)]
pub struct RunResult<'a> {
    /// Every scanned token, ending with `Eof`.
    pub(crate) tokens: Vec<Token<'a>>,
    /// The recognized date and the stage that recognized it.
    pub outcome: Option<(CompoundDate, Production)>,
    pub metrics: RunMetrics,
}
