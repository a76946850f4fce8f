//! Recursive-descent parser over the scanned token list.
//!
//! Every production takes a start position and returns the value it
//! recognized together with the position just past it, or `None`. A failed
//! production consumes nothing, so callers simply retry the next alternative
//! from the same position.
//!
//! ## Top-level order
//!
//! ```text
//! (1) early-era year    "50 AD", "3 BC"
//! (2) skip leading noise
//! (3) compound          "between 1900 and 1910", "5 or 15 Jan 1900"
//! (4) quarter           "Jan Qtr 1900", "Jan Feb Mar 1900"
//! (5) skip connectors, then single date
//! (6) skip to a month name or year, then single date
//! (7) skip to a year, then single date
//! ```
//!
//! The first stage that recognizes something wins.
//!
//! ## Single-date shapes
//!
//! After optional `Estimated` and `Before`/`After`/`About` prefixes, the
//! shapes are tried in this order:
//!
//! ```text
//! a  month  day  year                      "Feb 25 1759"
//! b  [day] [-] month [-] year              "25 Feb 1759", "Feb-1759"
//! c  month-day [-] day [-] year            "2/23/1900"  (M/D/Y)
//! d  [day] [-] [month-day] [-] year        "23/2/1900", "1900"
//! ```
//!
//! Numeric shapes whose day and month are both `1..=12` are marked ambiguous.

use super::lexicon::month_number;
use super::token::{KindSet, Token, TokenKind};
use crate::date::{CompoundDate, CompoundType, Date, DoubleType, ModifierType, QualityType};
use std::fmt;

/// Years below this, followed by an era marker, are taken as early-era years.
const EARLY_YEAR_LIMIT: i32 = 200;

/// Latest start month of a quarter that still ends within the year.
const LAST_QUARTER_START: u32 = 10;

/// The top-level stage that recognized a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    EarlyEra,
    Compound,
    Quarter,
    Single,
    MonthYear,
    YearOnly,
}

impl Production {
    pub fn name(self) -> &'static str {
        match self {
            Production::EarlyEra => "early-era",
            Production::Compound => "compound",
            Production::Quarter => "quarter",
            Production::Single => "single",
            Production::MonthYear => "month-year",
            Production::YearOnly => "year-only",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parser over a borrowed token list.
///
/// Positions past the end read as `Eof`, so productions never index out of
/// bounds.
pub(crate) struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
}

impl<'t, 'a> Parser<'t, 'a> {
    pub(crate) fn new(tokens: &'t [Token<'a>]) -> Self {
        Parser { tokens }
    }

    // --- Token access ---------------------------------------------------------

    fn kind(&self, pos: usize) -> TokenKind {
        self.tokens.get(pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    fn lexeme(&self, pos: usize) -> &'a str {
        self.tokens.get(pos).map_or("", |t| t.lexeme)
    }

    fn at(&self, pos: usize, set: KindSet) -> bool {
        set.has(self.kind(pos))
    }

    /// Integer value at `pos`. Digit runs always parse; anything else reads as 0.
    fn int_at(&self, pos: usize) -> i32 {
        self.tokens.get(pos).and_then(Token::int_value).unwrap_or(0)
    }

    fn day_at(&self, pos: usize) -> u32 {
        u32::try_from(self.int_at(pos)).unwrap_or(0)
    }

    fn month_name_at(&self, pos: usize) -> u32 {
        month_number(self.lexeme(pos))
    }

    fn is_separator(&self, pos: usize, ch: &str) -> bool {
        self.kind(pos) == TokenKind::Separator && self.lexeme(pos) == ch
    }

    fn is_month(&self, pos: usize, month: u32) -> bool {
        self.kind(pos) == TokenKind::MonthAlpha && self.month_name_at(pos) == month
    }

    /// Skip one token of a kind in `set`, if present.
    fn optional(&self, pos: usize, set: KindSet) -> usize {
        if self.at(pos, set) { pos + 1 } else { pos }
    }

    /// Skip every token of a kind in `set`.
    fn skip(&self, mut pos: usize, set: KindSet) -> usize {
        while self.at(pos, set) {
            pos += 1;
        }
        pos
    }

    /// Advance to the next token of a kind in `set`, or to `Eof`.
    fn skip_until(&self, mut pos: usize, set: KindSet) -> usize {
        while self.kind(pos) != TokenKind::Eof && !self.at(pos, set) {
            pos += 1;
        }
        pos
    }

    // --- Top level ------------------------------------------------------------

    /// Run the top-level stages in order and report which one succeeded.
    pub(crate) fn standardize(&self) -> Option<(CompoundDate, Production)> {
        if let Some(date) = self.parse_early_year() {
            return Some((CompoundDate::single(date), Production::EarlyEra));
        }

        let mut pos = self.skip(0, KindSet::NOISE);

        if let Some((compound, _)) = self.parse_compound(pos) {
            return Some((compound, Production::Compound));
        }

        if let Some((date, _)) = self.parse_quarter_year(pos) {
            let start = date.month.min(LAST_QUARTER_START);
            let quarter =
                CompoundDate::range(Date::month_year(start, date.year), Date::month_year(start + 2, date.year));
            return Some((quarter, Production::Quarter));
        }

        pos = self.skip(pos, KindSet::CONNECTORS);
        if let Some((date, _)) = self.parse_date(pos) {
            return Some((CompoundDate::single(date), Production::Single));
        }

        pos = self.skip_until(pos, KindSet::MONTH_ALPHA | KindSet::YEAR);
        if let Some((date, _)) = self.parse_date(pos) {
            return Some((CompoundDate::single(date), Production::MonthYear));
        }

        pos = self.skip_until(pos, KindSet::YEAR);
        if let Some((date, _)) = self.parse_date(pos) {
            return Some((CompoundDate::single(date), Production::YearOnly));
        }

        None
    }

    /// `<n> BC|AD|CE` anywhere in the input, with `n` below the year range.
    ///
    /// BC years all collapse to year 1: the key has no sign.
    fn parse_early_year(&self) -> Option<Date> {
        (1..self.tokens.len()).find_map(|pos| {
            let era = self.lexeme(pos);
            if !matches!(era, "BC" | "AD" | "CE") {
                return None;
            }
            let year = self.tokens[pos - 1].int_value()?;
            let year = if era == "BC" { 1 } else { year };
            (year < EARLY_YEAR_LIMIT).then(|| Date::year_only(year))
        })
    }

    // --- Compound -------------------------------------------------------------

    /// `[EST] [BETWEEN|FROM] <first> <connector> <date>`.
    fn parse_compound(&self, start: usize) -> Option<(CompoundDate, usize)> {
        let mut pos = start;

        let estimated = self.kind(pos) == TokenKind::Estimated;
        pos = self.optional(pos, KindSet::ESTIMATED);

        let lead_in = match self.kind(pos) {
            kind @ (TokenKind::Between | TokenKind::From) => {
                pos += 1;
                Some(kind)
            }
            _ => None,
        };

        let (mut first, next) = self.parse_first_partial(pos)?;
        let month_day_only = first.year == 0 && first.day != 0 && self.kind(pos) == TokenKind::MonthAlpha;
        pos = next;

        let connector = self.kind(pos);
        let dash = self.is_separator(pos, "-");
        let kind = match lead_in {
            Some(TokenKind::Between) if connector == TokenKind::And || dash => {
                pos += 1;
                CompoundType::Range
            }
            Some(TokenKind::Between) => return None,
            Some(_) if connector == TokenKind::To || dash => {
                pos += 1;
                CompoundType::Range
            }
            Some(_) => return None,
            None if connector == TokenKind::To || dash => {
                pos += 1;
                CompoundType::Range
            }
            None if connector != TokenKind::Eof => {
                pos = self.skip(pos, KindSet::ALTERNATIVES);
                CompoundType::Two
            }
            None => return None,
        };

        let (mut second, end) = self.parse_date(pos)?;

        if first.year == 0 && second.year == 0 {
            return None;
        }

        // "Mar 3 or 4 1900" would otherwise pair Mar 3 with April.
        if month_day_only && !(pos..end).any(|p| self.kind(p) == TokenKind::MonthAlpha) {
            return None;
        }

        // "Jan 5 - Mar 10 1900", "5 or 15 Jan 1900"
        if first.month == 0 {
            first.month = second.month;
        }
        if first.year == 0 {
            first.year = second.year;
        }

        if estimated {
            first.quality = QualityType::Estimated;
            second.quality = QualityType::Estimated;
        }

        let mut compound = CompoundDate { first, second, kind };
        if kind == CompoundType::Range && first.year_mm_dd() > second.year_mm_dd() {
            tracing::trace!(first = %first.year_mm_dd(), second = %second.year_mm_dd(), "reversed range read as two dates");
            compound = CompoundDate { first: second, second: first, kind: CompoundType::Two };
        }

        Some((compound, end))
    }

    /// A full date, a month name optionally followed by a day, or a day
    /// optionally followed by a month name.
    ///
    /// A month with a day only pairs with a second date that names its own
    /// month; `parse_compound` enforces that.
    fn parse_first_partial(&self, pos: usize) -> Option<(Date, usize)> {
        if let Some(found) = self.parse_date(pos) {
            return Some(found);
        }

        match self.kind(pos) {
            TokenKind::MonthAlpha => {
                let mut date = Date { month: self.month_name_at(pos), ..Date::default() };
                let mut pos = pos + 1;
                if self.at(pos, KindSet::DAYISH) {
                    date.day = self.day_at(pos);
                    pos += 1;
                }
                Some((date, pos))
            }
            TokenKind::MonthDay | TokenKind::Day => {
                let mut date = Date { day: self.day_at(pos), ..Date::default() };
                let mut pos = pos + 1;
                if self.kind(pos) == TokenKind::MonthAlpha {
                    date.month = self.month_name_at(pos);
                    pos += 1;
                }
                Some((date, pos))
            }
            _ => None,
        }
    }

    // --- Quarter --------------------------------------------------------------

    /// `<month> QTR <year>` or three consecutive month names and a year.
    ///
    /// Returns the start month and year; the caller builds the range.
    fn parse_quarter_year(&self, start: usize) -> Option<(Date, usize)> {
        if self.kind(start) != TokenKind::MonthAlpha {
            return None;
        }
        let month = self.month_name_at(start);
        let mut pos = start + 1;

        if self.kind(pos) == TokenKind::Quarter {
            pos += 1;
        } else {
            pos = self.optional(pos, KindSet::SEPARATOR);
            if self.is_month(pos, month + 2) {
                pos += 1;
            } else {
                if !self.is_month(pos, month + 1) {
                    return None;
                }
                pos = self.optional(pos + 1, KindSet::SEPARATOR);
                if !self.is_month(pos, month + 2) {
                    return None;
                }
                pos += 1;
            }
        }

        if self.kind(pos) != TokenKind::Year {
            return None;
        }
        Some((Date::month_year(month, self.int_at(pos)), pos + 1))
    }

    // --- Single date ----------------------------------------------------------

    /// Qualifiers, one of the date shapes, then an optional double-date suffix
    /// and trailing `Estimated`.
    pub(crate) fn parse_date(&self, start: usize) -> Option<(Date, usize)> {
        let mut pos = start;
        let mut date = Date::default();

        if self.kind(pos) == TokenKind::Estimated {
            date.quality = QualityType::Estimated;
            pos += 1;
        }

        // "ABT AFT 1907": the last modifier wins.
        loop {
            date.modifier = match self.kind(pos) {
                TokenKind::Before => ModifierType::Before,
                TokenKind::After => ModifierType::After,
                TokenKind::About => ModifierType::About,
                _ => break,
            };
            pos += 1;
        }

        if self.kind(pos) == TokenKind::Estimated {
            date.quality = QualityType::Estimated;
            pos += 1;
        }

        let (found, next) = self
            .parse_month_alpha_day_year(pos)
            .or_else(|| self.parse_day_month_alpha_year(pos))
            .or_else(|| self.parse_month_day_year(pos))
            .or_else(|| self.parse_day_month_year(pos))?;
        date.day = found.day;
        date.month = found.month;
        date.year = found.year;
        if found.quality == QualityType::Ambiguous {
            date.quality = QualityType::Ambiguous;
        }
        pos = next;

        if self.is_double_year(pos, date.year) {
            date.double = DoubleType::DoubleDate;
            pos += 2;
        }

        if self.kind(pos) == TokenKind::Estimated {
            date.quality = QualityType::Estimated;
            pos += 1;
        }

        Some((date, pos))
    }

    /// `/` followed by the next year written with one, two or all digits
    /// (`1756/7`, `1759/60`, `1799/1800`).
    ///
    /// The suffix is read from the lexeme: `1900/1` scans the `1` as a day.
    fn is_double_year(&self, pos: usize, year: i32) -> bool {
        if !self.is_separator(pos, "/") {
            return false;
        }
        let Some(next) = self.tokens.get(pos + 1).and_then(Token::int_value) else {
            return false;
        };
        let following = year + 1;
        (next < 10 && following % 10 == next) || (next < 100 && following % 100 == next) || following == next
    }

    /// Shape a: `<month> <day> <year>`.
    fn parse_month_alpha_day_year(&self, start: usize) -> Option<(Date, usize)> {
        let mut pos = start;
        let mut date = Date::default();

        if self.kind(pos) != TokenKind::MonthAlpha {
            return None;
        }
        date.month = self.month_name_at(pos);
        pos += 1;

        if !self.at(pos, KindSet::DAYISH) {
            return None;
        }
        date.day = self.day_at(pos);
        pos += 1;

        if self.kind(pos) != TokenKind::Year {
            return None;
        }
        date.year = self.int_at(pos);
        Some((date, pos + 1))
    }

    /// Shape b: `[<day>] [-] <month> [-] <year>`.
    fn parse_day_month_alpha_year(&self, start: usize) -> Option<(Date, usize)> {
        let mut pos = start;
        let mut date = Date::default();

        if self.at(pos, KindSet::DAYISH) {
            date.day = self.day_at(pos);
            pos += 1;
        }
        pos = self.optional(pos, KindSet::SEPARATOR);

        if self.kind(pos) != TokenKind::MonthAlpha {
            return None;
        }
        date.month = self.month_name_at(pos);
        pos = self.optional(pos + 1, KindSet::SEPARATOR);

        if self.kind(pos) != TokenKind::Year {
            return None;
        }
        date.year = self.int_at(pos);
        Some((date, pos + 1))
    }

    /// Shape c: `<month-day> [-] <day> [-] <year>`, read as M/D/Y.
    fn parse_month_day_year(&self, start: usize) -> Option<(Date, usize)> {
        let mut pos = start;
        let mut date = Date::default();

        if self.kind(pos) != TokenKind::MonthDay {
            return None;
        }
        date.month = self.day_at(pos);
        pos = self.optional(pos + 1, KindSet::SEPARATOR);

        if !self.at(pos, KindSet::DAYISH) {
            return None;
        }
        date.day = self.day_at(pos);
        pos = self.optional(pos + 1, KindSet::SEPARATOR);

        if self.kind(pos) != TokenKind::Year {
            return None;
        }
        date.year = self.int_at(pos);
        mark_ambiguous(&mut date);
        Some((date, pos + 1))
    }

    /// Shape d: `[<day>] [-] [<month-day>] [-] <year>`, read as D/M/Y.
    ///
    /// A lone small number before the year is a month: `1-1900` is January.
    fn parse_day_month_year(&self, start: usize) -> Option<(Date, usize)> {
        let mut pos = start;
        let mut date = Date::default();

        if self.at(pos, KindSet::DAYISH) {
            date.day = self.day_at(pos);
            pos += 1;
        }
        pos = self.optional(pos, KindSet::SEPARATOR);

        if self.kind(pos) == TokenKind::MonthDay {
            date.month = self.day_at(pos);
            pos += 1;
        }
        pos = self.optional(pos, KindSet::SEPARATOR);

        if self.kind(pos) != TokenKind::Year {
            return None;
        }
        date.year = self.int_at(pos);

        if (1..=12).contains(&date.day) && date.month == 0 {
            date.month = date.day;
            date.day = 0;
        }
        mark_ambiguous(&mut date);
        Some((date, pos + 1))
    }
}

fn mark_ambiguous(date: &mut Date) {
    if (1..=12).contains(&date.day) && date.month > 0 {
        date.quality = QualityType::Ambiguous;
    }
}
