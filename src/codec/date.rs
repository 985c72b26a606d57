//! Calendar-date codec for the API's date-only wire format.
//!
//! The API exchanges calendar dates as `YYYY-MM-DD` text, distinct from its
//! full timestamps. [`ApiDate`] wraps [`chrono::NaiveDate`] and pins the
//! wire form to exactly that pattern: encoding always produces it, decoding
//! rejects anything else, and no time-of-day or zone information exists to
//! drift through a round trip.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Wire pattern for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date as exchanged with the API.
///
/// # Examples
///
/// ```
/// use moip_assinaturas::codec::ApiDate;
///
/// let date = ApiDate::from_ymd(2026, 8, 6).unwrap();
/// assert_eq!(serde_json::to_string(&date).unwrap(), "\"2026-08-06\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiDate(NaiveDate);

impl ApiDate {
    /// Creates a date from calendar components.
    ///
    /// Returns `None` for an out-of-range or non-existent date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ApiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for ApiDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for ApiDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| de::Error::custom(format!("invalid date '{text}', expected YYYY-MM-DD")))
    }
}
