//! Word tables: keywords and English month names.
//!
//! Both tables are keyed by the uppercased word. Lookups expect the caller to
//! have uppercased already, except [`month_number`] which accepts any case.

use super::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("ABOUT", TokenKind::About),
        ("ABT", TokenKind::About),
        ("CIRCA", TokenKind::About),
        ("CA", TokenKind::About),
        ("C", TokenKind::About),
        ("BEFORE", TokenKind::Before),
        ("BEF", TokenKind::Before),
        ("AFTER", TokenKind::After),
        ("AFT", TokenKind::After),
        ("FROM", TokenKind::From),
        ("TO", TokenKind::To),
        ("BETWEEN", TokenKind::Between),
        ("BET", TokenKind::Between),
        ("BETW", TokenKind::Between),
        ("BTW", TokenKind::Between),
        ("AND", TokenKind::And),
        ("OR", TokenKind::Or),
        ("ESTIMATED", TokenKind::Estimated),
        ("EST", TokenKind::Estimated),
        ("CALCULATED", TokenKind::Estimated),
        ("CALC", TokenKind::Estimated),
        ("CAL", TokenKind::Estimated),
        ("PROBABLY", TokenKind::Estimated),
        ("PROB", TokenKind::Estimated),
        ("QUARTER", TokenKind::Quarter),
        ("QTR", TokenKind::Quarter),
        ("Q", TokenKind::Quarter),
        ("ST", TokenKind::Ordinal),
        ("ND", TokenKind::Ordinal),
        ("RD", TokenKind::Ordinal),
        ("TH", TokenKind::Ordinal),
    ])
});

static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("JANUARY", 1),
        ("JAN", 1),
        ("FEBRUARY", 2),
        ("FEB", 2),
        ("MARCH", 3),
        ("MAR", 3),
        ("APRIL", 4),
        ("APR", 4),
        ("MAY", 5),
        ("JUNE", 6),
        ("JUN", 6),
        ("JULY", 7),
        ("JUL", 7),
        ("AUGUST", 8),
        ("AUG", 8),
        ("SEPTEMBER", 9),
        ("SEPT", 9),
        ("SEP", 9),
        ("OCTOBER", 10),
        ("OCT", 10),
        ("NOVEMBER", 11),
        ("NOV", 11),
        ("DECEMBER", 12),
        ("DEC", 12),
    ])
});

/// Keyword kind for an uppercased word.
pub(crate) fn keyword(upper: &str) -> Option<TokenKind> {
    KEYWORDS.get(upper).copied()
}

/// Month number (`1..=12`) for a month name or abbreviation in any case, or 0.
pub(crate) fn month_number(name: &str) -> u32 {
    MONTHS.get(name.to_ascii_uppercase().as_str()).copied().unwrap_or(0)
}
