//! Domain primitives for log entry management.
//!
//! Newtypes here keep raw integers coming off the wire from being confused
//! with other values, and carry the parsing rules for request input.

pub mod pagination;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use pagination::{Page, PageRequest};

/// Identifier of a row in `log_entries`.
///
/// # Examples
///
/// ```rust
/// use logmanager::domain::EntryId;
///
/// let id: EntryId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert!("wrong-id".parse::<EntryId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

/// Raised when a path segment cannot name an existing entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEntryId {
    #[error("Invalid ID")]
    NotNumeric(String),

    /// A number no integer row id can equal, e.g. `1.5`.
    #[error("Log entry not found")]
    NoSuchRow(String),
}

impl FromStr for EntryId {
    type Err = InvalidEntryId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidEntryId::NotNumeric(raw.to_string()));
        }

        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(Self::new(id));
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => whole_id(value)
                .map(Self::new)
                .ok_or_else(|| InvalidEntryId::NoSuchRow(raw.to_string())),
            _ => Err(InvalidEntryId::NotNumeric(raw.to_string())),
        }
    }
}

/// `2.0` and `1e3` still name rows; fractions and out-of-range values cannot.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_id(value: f64) -> Option<i64> {
    // 2^63 is exact as f64, i64::MAX is not.
    let bound = i64::MAX as f64;
    (value.fract() == 0.0 && value >= -bound && value < bound).then(|| value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_parses_integers() {
        assert_eq!("7".parse::<EntryId>(), Ok(EntryId::new(7)));
        assert_eq!(" 12 ".parse::<EntryId>(), Ok(EntryId::new(12)));
        assert_eq!("9999".parse::<EntryId>().map(|id| id.value()), Ok(9999));
    }

    #[test]
    fn entry_id_rejects_garbage() {
        for raw in ["wrong-id", "", "   ", "nan", "inf", "12abc"] {
            assert_eq!(
                raw.parse::<EntryId>(),
                Err(InvalidEntryId::NotNumeric(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn whole_numbers_in_other_notations_name_rows() {
        assert_eq!("2.0".parse::<EntryId>(), Ok(EntryId::new(2)));
        assert_eq!("1e3".parse::<EntryId>(), Ok(EntryId::new(1000)));
    }

    #[test]
    fn fractional_and_huge_numbers_match_no_row() {
        for raw in ["1.5", "-0.25", "99999999999999999999"] {
            assert_eq!(
                raw.parse::<EntryId>(),
                Err(InvalidEntryId::NoSuchRow(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn invalid_entry_id_messages() {
        let err = "abc".parse::<EntryId>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID");

        let err = "1.5".parse::<EntryId>().unwrap_err();
        assert_eq!(err.to_string(), "Log entry not found");
    }

    #[test]
    fn entry_id_serializes_as_number() {
        let json = serde_json::to_string(&EntryId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
