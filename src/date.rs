//! Structured dates produced by the parser.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompoundType {
    /// A single date; only `first` is meaningful.
    #[default]
    None,
    /// `first..=second` is an inclusive interval.
    Range,
    /// `first` and `second` are alternative readings of the same input.
    Two,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DoubleType {
    #[default]
    None,
    /// Old-style/new-style year pair such as `1759/60`.
    DoubleDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModifierType {
    #[default]
    None,
    About,
    Before,
    After,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QualityType {
    #[default]
    None,
    Estimated,
    /// Numeric day and month are both `1..=12` and could be swapped.
    Ambiguous,
}

/// A possibly partial date. Zero in `day`, `month` or `year` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub double: DoubleType,
    pub modifier: ModifierType,
    pub quality: QualityType,
}

impl Date {
    pub(crate) fn year_only(year: i32) -> Self {
        Date { year, ..Date::default() }
    }

    pub(crate) fn month_year(month: u32, year: i32) -> Self {
        Date { month, year, ..Date::default() }
    }

    /// Fixed-width `YYYYMMDD`, with zeros for missing components.
    pub fn year_mm_dd(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// The same date with day and month exchanged.
    pub fn swapped(&self) -> Date {
        Date { day: self.month, month: self.day, ..*self }
    }

    /// Calendar date, when year, month and day are all known and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.day == 0 || self.month == 0 || self.year == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// The result of standardizing one input string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompoundDate {
    pub first: Date,
    pub second: Date,
    pub kind: CompoundType,
}

impl CompoundDate {
    pub(crate) fn single(first: Date) -> Self {
        CompoundDate { first, ..CompoundDate::default() }
    }

    pub(crate) fn range(first: Date, second: Date) -> Self {
        CompoundDate { first, second, kind: CompoundType::Range }
    }
}

impl fmt::Display for CompoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompoundType::None => "",
            CompoundType::Range => "Range",
            CompoundType::Two => "Two",
        })
    }
}

impl fmt::Display for DoubleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DoubleType::None => "",
            DoubleType::DoubleDate => "DoubleDate",
        })
    }
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModifierType::None => "",
            ModifierType::About => "About",
            ModifierType::Before => "Before",
            ModifierType::After => "After",
        })
    }
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QualityType::None => "",
            QualityType::Estimated => "Estimated",
            QualityType::Ambiguous => "Ambiguous",
        })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year_mm_dd(), self.modifier, self.double, self.quality)
    }
}

impl fmt::Display for CompoundDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CompoundType::None => write!(f, "{}", self.first),
            kind => write!(f, "{}: {} - {}", kind, self.first, self.second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_mm_dd_pads_missing_parts() {
        assert_eq!(Date::year_only(1900).year_mm_dd(), "19000000");
        assert_eq!(Date::month_year(3, 1900).year_mm_dd(), "19000300");
        assert_eq!(Date::year_only(1).year_mm_dd(), "00010000");
        assert_eq!(Date::default().year_mm_dd(), "00000000");
    }

    #[test]
    fn swapped_exchanges_day_and_month() {
        let date = Date { day: 3, month: 2, year: 1900, quality: QualityType::Ambiguous, ..Date::default() };
        let alt = date.swapped();
        assert_eq!((alt.day, alt.month, alt.year), (2, 3, 1900));
        assert_eq!(alt.quality, QualityType::Ambiguous);
    }

    #[test]
    fn to_naive_date_needs_a_full_valid_date() {
        let full = Date { day: 29, month: 2, year: 1904, ..Date::default() };
        assert_eq!(full.to_naive_date(), NaiveDate::from_ymd_opt(1904, 2, 29));

        let invalid = Date { day: 31, month: 2, year: 1900, ..Date::default() };
        assert_eq!(invalid.to_naive_date(), None);
        assert_eq!(Date::month_year(2, 1900).to_naive_date(), None);
    }

    #[test]
    fn display_shows_qualifiers() {
        let date = Date { year: 1900, modifier: ModifierType::About, ..Date::default() };
        assert_eq!(date.to_string(), "19000000 About  ");

        let range = CompoundDate::range(Date::year_only(1900), Date::year_only(1910));
        assert_eq!(range.to_string(), "Range: 19000000    - 19100000   ");
        assert_eq!(CompoundDate::single(Date::year_only(1900)).to_string(), "19000000   ");
    }
}
