//! Canonical calendar-date keys.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// A calendar day in canonical `YYYY-MM-DD` form (zero-padded).
///
/// This is the store's partition key. Lexicographic order on the
/// canonical form is chronological order, so `DateKey` keys in a
/// `BTreeMap` come out date-sorted for free.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Build a key from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    /// Today's key, in local time.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Parse and validate user input as a date key.
    ///
    /// Accepts only real calendar dates in `YYYY-MM-DD` form; the key is
    /// rebuilt from the parsed date so padding is always canonical.
    pub fn parse(s: &str) -> PlannerResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| PlannerError::InvalidDateKey(s.to_string()))?;
        Ok(Self::from_date(date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
