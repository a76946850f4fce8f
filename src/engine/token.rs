//! Token kinds produced by the scanner and the kind sets the parser skips over.

use std::fmt;

/// Classification of a scanned word, number or separator.
///
/// Numbers are classified purely by value: `1..=12` could be a month or a
/// day, `13..=31` can only be a day, `200..=2200` is a year and anything else
/// is noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Noise,
    /// `st`, `nd`, `rd`, `th`. Dropped by the scanner; callers never see it.
    Ordinal,
    Separator,
    Day,
    MonthDay,
    MonthAlpha,
    Year,
    About,
    Before,
    After,
    From,
    To,
    Between,
    And,
    Or,
    Quarter,
    Estimated,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Noise => "noise",
            TokenKind::Ordinal => "ordinal",
            TokenKind::Separator => "separator",
            TokenKind::Day => "day",
            TokenKind::MonthDay => "month-day",
            TokenKind::MonthAlpha => "month",
            TokenKind::Year => "year",
            TokenKind::About => "about",
            TokenKind::Before => "before",
            TokenKind::After => "after",
            TokenKind::From => "from",
            TokenKind::To => "to",
            TokenKind::Between => "between",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Quarter => "quarter",
            TokenKind::Estimated => "estimated",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of token kinds, used for the parser's skip and stop conditions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct KindSet: u32 {
        const EOF         = 1 << 0;
        const NOISE       = 1 << 1;
        const ORDINAL     = 1 << 2;
        const SEPARATOR   = 1 << 3;
        const DAY         = 1 << 4;
        const MONTH_DAY   = 1 << 5;
        const MONTH_ALPHA = 1 << 6;
        const YEAR        = 1 << 7;
        const ABOUT       = 1 << 8;
        const BEFORE      = 1 << 9;
        const AFTER       = 1 << 10;
        const FROM        = 1 << 11;
        const TO          = 1 << 12;
        const BETWEEN     = 1 << 13;
        const AND         = 1 << 14;
        const OR          = 1 << 15;
        const QUARTER     = 1 << 16;
        const ESTIMATED   = 1 << 17;

        /// A number that can stand for a day of the month.
        const DAYISH = Self::DAY.bits() | Self::MONTH_DAY.bits();
        /// Everything skipped before falling back to a single date.
        const CONNECTORS = Self::BETWEEN.bits()
            | Self::FROM.bits()
            | Self::TO.bits()
            | Self::AND.bits()
            | Self::OR.bits()
            | Self::NOISE.bits()
            | Self::SEPARATOR.bits();
        /// Filler between the two readings of a "two dates" compound.
        const ALTERNATIVES = Self::OR.bits() | Self::NOISE.bits() | Self::SEPARATOR.bits();
    }
}

impl KindSet {
    pub(crate) fn has(self, kind: TokenKind) -> bool {
        self.contains(KindSet::from(kind))
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eof => KindSet::EOF,
            TokenKind::Noise => KindSet::NOISE,
            TokenKind::Ordinal => KindSet::ORDINAL,
            TokenKind::Separator => KindSet::SEPARATOR,
            TokenKind::Day => KindSet::DAY,
            TokenKind::MonthDay => KindSet::MONTH_DAY,
            TokenKind::MonthAlpha => KindSet::MONTH_ALPHA,
            TokenKind::Year => KindSet::YEAR,
            TokenKind::About => KindSet::ABOUT,
            TokenKind::Before => KindSet::BEFORE,
            TokenKind::After => KindSet::AFTER,
            TokenKind::From => KindSet::FROM,
            TokenKind::To => KindSet::TO,
            TokenKind::Between => KindSet::BETWEEN,
            TokenKind::And => KindSet::AND,
            TokenKind::Or => KindSet::OR,
            TokenKind::Quarter => KindSet::QUARTER,
            TokenKind::Estimated => KindSet::ESTIMATED,
        }
    }
}

/// A scanned token. `lexeme` is a slice of the input in its original case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        Token { kind, lexeme }
    }

    pub(crate) fn eof() -> Self {
        Token { kind: TokenKind::Eof, lexeme: "" }
    }

    /// Integer value of the lexeme, if it is one.
    pub(crate) fn int_value(&self) -> Option<i32> {
        self.lexeme.parse().ok()
    }
}
