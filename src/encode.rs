//! Index-key encoding.
//!
//! A [`CompoundDate`] is serialized to one of three comma-joined shapes, each
//! part a fixed-width `YYYYMMDD`:
//!
//! ```text
//! 19000101                      exact (or as exact as the input was)
//! 17590225,17600225             two readings: double date, ambiguous day/month, "or"
//! 19000000,18990101-19011231    the date, then the start-end bounds to search
//! ```
//!
//! Bounds widen vague dates: `Before`/`After` by ten years on one side,
//! `Estimated` by ten years on both sides, `About` by one year on both sides.
//! Missing months and days widen to the whole year or month; day 31 is used
//! for every month end.

use crate::date::{CompoundDate, CompoundType, Date, DoubleType, ModifierType, QualityType};

const WIDE_YEARS: i32 = 10;
const ABOUT_YEARS: i32 = 1;

impl Date {
    fn widens_down(&self) -> bool {
        self.modifier == ModifierType::Before || self.quality == QualityType::Estimated
    }

    fn widens_up(&self) -> bool {
        self.modifier == ModifierType::After || self.quality == QualityType::Estimated
    }

    fn start_bound(&self) -> Date {
        let mut start = *self;
        if self.widens_down() {
            (start.year, start.month, start.day) = (self.year - WIDE_YEARS, 1, 1);
        } else if self.modifier == ModifierType::About {
            (start.year, start.month, start.day) = (self.year - ABOUT_YEARS, 1, 1);
        } else if self.month == 0 {
            (start.month, start.day) = (1, 1);
        } else if self.day == 0 {
            start.day = 1;
        }
        start
    }

    fn end_bound(&self) -> Date {
        let mut end = *self;
        if self.widens_up() {
            (end.year, end.month, end.day) = (self.year + WIDE_YEARS, 12, 31);
        } else if self.modifier == ModifierType::About {
            (end.year, end.month, end.day) = (self.year + ABOUT_YEARS, 12, 31);
        } else if self.month == 0 {
            (end.month, end.day) = (12, 31);
        } else if self.day == 0 {
            end.day = 31;
        }
        end
    }

    /// Earliest `YYYYMMDD` this date could stand for.
    pub fn start_year_mm_dd(&self) -> String {
        self.start_bound().year_mm_dd()
    }

    /// Latest `YYYYMMDD` this date could stand for.
    pub fn end_year_mm_dd(&self) -> String {
        self.end_bound().year_mm_dd()
    }

    /// Earliest year, ignoring month and day.
    pub fn start_year(&self) -> i32 {
        if self.widens_down() {
            self.year - WIDE_YEARS
        } else if self.modifier == ModifierType::About {
            self.year - ABOUT_YEARS
        } else {
            self.year
        }
    }

    /// Latest year, ignoring month and day.
    pub fn end_year(&self) -> i32 {
        if self.widens_up() {
            self.year + WIDE_YEARS
        } else if self.modifier == ModifierType::About {
            self.year + ABOUT_YEARS
        } else {
            self.year
        }
    }
}

impl CompoundDate {
    /// Canonical index key.
    pub fn encode(&self) -> String {
        let first = &self.first;
        match self.kind {
            CompoundType::Two => format!("{},{}", first.year_mm_dd(), self.second.year_mm_dd()),
            CompoundType::Range => {
                format!("{},{}-{}", first.year_mm_dd(), first.start_year_mm_dd(), self.second.end_year_mm_dd())
            }
            CompoundType::None if first.modifier != ModifierType::None || first.quality == QualityType::Estimated => {
                format!("{},{}-{}", first.year_mm_dd(), first.start_year_mm_dd(), first.end_year_mm_dd())
            }
            CompoundType::None if first.quality == QualityType::Ambiguous => {
                format!("{},{}", first.year_mm_dd(), first.swapped().year_mm_dd())
            }
            CompoundType::None if first.double == DoubleType::DoubleDate => {
                let next = Date { year: first.year + 1, ..*first };
                format!("{},{}", first.year_mm_dd(), next.year_mm_dd())
            }
            CompoundType::None => first.year_mm_dd(),
        }
    }
}
