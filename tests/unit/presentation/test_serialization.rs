use chrono::{NaiveDate, TimeZone, Utc};
use eduzz_client::presentation::serialization::{
    calendar_date, local_date, string_as_float_opt, timestamp,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Dated {
    #[serde(with = "calendar_date")]
    day: NaiveDate,
    #[serde(default, with = "calendar_date::option")]
    maybe_day: Option<NaiveDate>,
    #[serde(with = "timestamp")]
    at: chrono::DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    maybe_at: Option<chrono::DateTime<Utc>>,
    #[serde(with = "local_date")]
    local: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct Amount {
    #[serde(default, deserialize_with = "string_as_float_opt")]
    value: Option<f64>,
}

#[test]
fn test_calendar_date_round_trip_normalizes_separator() {
    let date = calendar_date::parse("2024/03/15").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(calendar_date::format(&date), "2024-03-15");
    assert_eq!(calendar_date::parse(&calendar_date::format(&date)).unwrap(), date);
}

#[test]
fn test_calendar_date_rejects_garbage() {
    assert!(calendar_date::parse("").is_err());
    assert!(calendar_date::parse("2024-13-01").is_err());
    assert!(calendar_date::parse("15/03/2024").is_err());
    assert!(calendar_date::parse("2024-03-15T00:00:00").is_err());
}

#[test]
fn test_timestamp_round_trip_preserves_instant() {
    let parsed = timestamp::parse("2024-03-15T10:20:30-03:00").unwrap();
    let formatted = timestamp::format(&parsed);
    assert_eq!(formatted, "2024-03-15T13:20:30Z");
    assert_eq!(timestamp::parse(&formatted).unwrap(), parsed);
}

#[test]
fn test_timestamp_accepts_space_separator_and_fraction() {
    let parsed = timestamp::parse("2024-03-15 10:20:30.250+00:00").unwrap();
    assert_eq!(
        parsed,
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 20, 30).unwrap()
            + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn test_local_date_round_trip() {
    let date = local_date::parse("31/12/2023").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(local_date::format(&date), "31/12/2023");
    assert!(local_date::parse("12/31/2023").is_err());
}

#[test]
fn test_codecs_through_serde() {
    let json = r#"{
        "day": "2024/03/15",
        "maybe_day": "",
        "at": "2024-03-15 10:20:30-03:00",
        "maybe_at": null,
        "local": "01/02/2024"
    }"#;
    let value: Dated = serde_json::from_str(json).unwrap();
    assert_eq!(value.day, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(value.maybe_day, None);
    assert_eq!(value.maybe_at, None);
    assert_eq!(value.local, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    let out = serde_json::to_value(&value).unwrap();
    assert_eq!(out["day"], "2024-03-15");
    assert_eq!(out["at"], "2024-03-15T13:20:30Z");
    assert_eq!(out["local"], "01/02/2024");
    assert!(out["maybe_at"].is_null());
}

#[test]
fn test_string_as_float_opt() {
    let parse = |json: &str| serde_json::from_str::<Amount>(json).unwrap().value;
    assert_eq!(parse(r#"{"value": 12.5}"#), Some(12.5));
    assert_eq!(parse(r#"{"value": "12.5"}"#), Some(12.5));
    assert_eq!(parse(r#"{"value": ""}"#), None);
    assert_eq!(parse(r#"{"value": null}"#), None);
    assert_eq!(parse(r#"{}"#), None);
    assert!(serde_json::from_str::<Amount>(r#"{"value": "abc"}"#).is_err());
}
