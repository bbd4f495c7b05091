/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Field-level codecs for the date formats used by the Eduzz API
//!
//! The upstream is not consistent across endpoints, so each field picks its
//! codec explicitly with `#[serde(with = "...")]`:
//!
//! * [`calendar_date`]: `yyyy-MM-dd` or `yyyy/MM/dd` in, `yyyy-MM-dd` out
//! * [`timestamp`]: ISO-8601 with offset in, RFC 3339 UTC out
//! * [`local_date`]: `dd/MM/yyyy` both ways
//!
//! Each module also exposes plain `parse`/`format` functions and an `option`
//! submodule for nullable fields.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Calendar dates such as `2024-03-15` or `2024/03/15`
pub mod calendar_date {
    use chrono::NaiveDate;
    use once_cell::sync::Lazy;
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer, de};

    static CALENDAR_DATE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\d{4})[-/]?(\d{2})[-/]?(\d{2})$").expect("valid calendar date pattern")
    });

    /// Output pattern
    pub const FORMAT: &str = "%Y-%m-%d";

    /// Parses a calendar date, accepting `-` or `/` as separator
    pub fn parse(value: &str) -> Result<NaiveDate, String> {
        let caps = CALENDAR_DATE
            .captures(value.trim())
            .ok_or_else(|| format!("invalid calendar date: {value}"))?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let year: i32 = field(1).parse().map_err(|_| format!("invalid year in {value}"))?;
        let month: u32 = field(2).parse().map_err(|_| format!("invalid month in {value}"))?;
        let day: u32 = field(3).parse().map_err(|_| format!("invalid day in {value}"))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| format!("calendar date out of range: {value}"))
    }

    /// Formats a calendar date as `yyyy-MM-dd`
    #[must_use]
    pub fn format(date: &NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    /// Serde serializer
    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(date))
    }

    /// Serde deserializer
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Nullable variant
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de};

        /// Serde serializer
        pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => s.serialize_str(&super::format(d)),
                None => s.serialize_none(),
            }
        }

        /// Serde deserializer
        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) if !raw.trim().is_empty() => {
                    super::parse(&raw).map(Some).map_err(de::Error::custom)
                }
                _ => Ok(None),
            }
        }
    }
}

/// Instants such as `2024-03-15T10:20:30-03:00`
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Parses an ISO-8601 timestamp with offset.
    ///
    /// A space between date and time is accepted in place of `T`. When the
    /// offset is missing the value is read as UTC.
    pub fn parse(value: &str) -> Result<DateTime<Utc>, String> {
        let normalized = value.trim().replacen(' ', "T", 1);
        match DateTime::parse_from_rfc3339(&normalized) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(_) => DateTime::parse_from_rfc3339(&format!("{normalized}Z"))
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| format!("invalid timestamp {value}: {e}")),
        }
    }

    /// Formats an instant as RFC 3339 in UTC with a `Z` suffix
    #[must_use]
    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Serde serializer
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(value))
    }

    /// Serde deserializer
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Nullable variant
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de};

        /// Serde serializer
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => s.serialize_str(&super::format(v)),
                None => s.serialize_none(),
            }
        }

        /// Serde deserializer
        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) if !raw.trim().is_empty() => {
                    super::parse(&raw).map(Some).map_err(de::Error::custom)
                }
                _ => Ok(None),
            }
        }
    }
}

/// Regional dates such as `15/03/2024`
pub mod local_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Input and output pattern
    pub const FORMAT: &str = "%d/%m/%Y";

    /// Parses a `dd/MM/yyyy` date
    pub fn parse(value: &str) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(value.trim(), FORMAT)
            .map_err(|e| format!("invalid local date {value}: {e}"))
    }

    /// Formats a date as `dd/MM/yyyy`
    #[must_use]
    pub fn format(date: &NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    /// Serde serializer
    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(date))
    }

    /// Serde deserializer
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(de::Error::custom)
    }
}

/// Deserializes an optional float that the upstream may send as a number or a string
pub fn string_as_float_opt<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {s}: {e}"))),
        Some(other) => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}
