//! Standardization of free-form genealogical dates.
//!
//! Vital records, census transcriptions and family-tree exports write dates
//! in every dialect imaginable: `1 Jan 1900`, `ABT 1900`, `2/3/1900`,
//! `Feb 25, 1759/60`, `bet 1900 and 1910`, `JAN QTR 1900`. [`standardize`]
//! turns such a string into a structured [`CompoundDate`], and
//! [`CompoundDate::encode`] turns that into a fixed-width index key with the
//! bounds to use for range search:
//!
//! ```
//! use stddate::standardize;
//!
//! assert_eq!(standardize("1 Jan 1900").unwrap().encode(), "19000101");
//! assert_eq!(standardize("ABT 1900").unwrap().encode(), "19000000,18990101-19011231");
//! assert_eq!(standardize("2/3/1900").unwrap().encode(), "19000203,19000302");
//! ```
//!
//! Standardization is deterministic and keeps no state between calls.
//! Month names are English only, and input is expected to be folded to ASCII
//! beforehand.

#[macro_use]
mod macros;
mod api;
mod date;
mod encode;
mod engine;
mod index_key;

pub use api::{
    STD_SUFFIX, StandardizeDetails, TokenSummary, standardize, standardize_field, standardize_verbose, std_field_name,
};
pub use date::{CompoundDate, CompoundType, Date, DoubleType, ModifierType, QualityType};
pub use engine::{Production, TokenKind};
pub use index_key::{DecodeError, IndexKey};

#[cfg(test)]
mod tests;
