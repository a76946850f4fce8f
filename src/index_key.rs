//! Decoding index keys back into searchable values.
//!
//! The indexer stores two things per date field: the integer `YYYYMMDD`
//! dates for exact matching, and every year the record should be found
//! under for year-range queries. [`IndexKey`] recovers both from the
//! string produced by [`CompoundDate::encode`](crate::CompoundDate::encode).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty index key")]
    Empty,
    #[error("malformed index key: {0:?}")]
    Malformed(String),
}

/// A parsed index key. Each value is an 8-digit `YYYYMMDD` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKey {
    /// `Y`
    Single(u32),
    /// `Y,Y`: two alternative readings.
    Two(u32, u32),
    /// `Y,S-E`: a date with the bounds to search.
    Range { date: u32, start: u32, end: u32 },
}

impl IndexKey {
    pub fn parse(encoded: &str) -> Result<IndexKey, DecodeError> {
        if encoded.is_empty() {
            return Err(DecodeError::Empty);
        }
        let malformed = || DecodeError::Malformed(encoded.to_string());
        let caps = regex!(r"^([0-9]{8})(?:,([0-9]{8})(?:-([0-9]{8}))?)?$").captures(encoded).ok_or_else(malformed)?;

        let part = |idx: usize| -> Result<Option<u32>, DecodeError> {
            caps.get(idx).map(|m| m.as_str().parse::<u32>().map_err(|_| malformed())).transpose()
        };

        let date = part(1)?.ok_or_else(malformed)?;
        Ok(match (part(2)?, part(3)?) {
            (None, _) => IndexKey::Single(date),
            (Some(second), None) => IndexKey::Two(date, second),
            (Some(start), Some(end)) => IndexKey::Range { date, start, end },
        })
    }

    /// The dates to match exactly. A range keeps only its date, not its bounds.
    pub fn dates(&self) -> Vec<u32> {
        match *self {
            IndexKey::Single(date) => vec![date],
            IndexKey::Two(first, second) => vec![first, second],
            IndexKey::Range { date, .. } => vec![date],
        }
    }

    /// Every year the date should be indexed under, ascending for ranges.
    pub fn years(&self) -> Vec<i32> {
        match *self {
            IndexKey::Single(date) => vec![year_of(date)],
            IndexKey::Two(first, second) => {
                let (first, second) = (year_of(first), year_of(second));
                if first == second { vec![first] } else { vec![first, second] }
            }
            IndexKey::Range { start, end, .. } => (year_of(start)..=year_of(end)).collect(),
        }
    }
}

fn year_of(yyyymmdd: u32) -> i32 {
    // at most 9999, always fits
    i32::try_from(yyyymmdd / 10_000).unwrap_or_default()
}

impl FromStr for IndexKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexKey::parse(s)
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Single(date) => write!(f, "{date:08}"),
            IndexKey::Two(first, second) => write!(f, "{first:08},{second:08}"),
            IndexKey::Range { date, start, end } => write!(f, "{date:08},{start:08}-{end:08}"),
        }
    }
}
