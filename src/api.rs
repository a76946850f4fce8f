use crate::date::CompoundDate;
use crate::engine::{self, Production, TokenKind};
use std::time::Duration;

/// Suffix appended to a record field's name to hold its standardized value.
pub const STD_SUFFIX: &str = "_std";

/// Standardize a free-form date string.
///
/// Returns `None` when no date is recognized. Input is expected to be ASCII;
/// other characters are skipped like punctuation.
///
/// # Example
/// ```
/// use stddate::standardize;
///
/// let date = standardize("Feb 25, 1759/60").unwrap();
/// assert_eq!(date.encode(), "17590225,17600225");
/// assert!(standardize("unknown").is_none());
/// ```
pub fn standardize(text: &str) -> Option<CompoundDate> {
    engine::run(text)
}

/// Standardize a raw record value into its index key, or `""` when nothing
/// is recognized.
pub fn standardize_field(raw: &str) -> String {
    standardize(raw).map(|date| date.encode()).unwrap_or_default()
}

/// Name of the field holding the standardized value of `field`.
pub fn std_field_name(field: &str) -> String {
    format!("{field}{STD_SUFFIX}")
}

/// A scanned token, as reported by [`standardize_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSummary {
    pub kind: TokenKind,
    pub lexeme: String,
}

/// Result of [`standardize_verbose`].
///
/// This is meant for debugging why an input did or did not parse; the plain
/// [`standardize`] path does not allocate these traces.
#[derive(Debug, Clone)]
pub struct StandardizeDetails {
    /// The input text.
    pub text: String,
    /// Same value [`standardize`] returns.
    pub result: Option<CompoundDate>,
    /// Which top-level stage recognized the date.
    pub production: Option<Production>,
    /// Every scanned token, ending with `Eof`. Ordinal suffixes are already dropped.
    pub tokens: Vec<TokenSummary>,
    pub scan: Duration,
    pub parse: Duration,
    pub total: Duration,
}

impl StandardizeDetails {
    /// Index key of the result, if any.
    pub fn encoded(&self) -> Option<String> {
        self.result.as_ref().map(CompoundDate::encode)
    }
}

/// Standardize `text` and return the result with scanner and parser details.
pub fn standardize_verbose(text: &str) -> StandardizeDetails {
    let run = engine::run_with_metrics(text);
    let tokens = run.tokens.iter().map(|t| TokenSummary { kind: t.kind, lexeme: t.lexeme.to_string() }).collect();
    let (result, production) = match run.outcome {
        Some((date, production)) => (Some(date), Some(production)),
        None => (None, None),
    };

    StandardizeDetails {
        text: text.to_string(),
        result,
        production,
        tokens,
        scan: run.metrics.scan,
        parse: run.metrics.parse,
        total: run.metrics.total,
    }
}
