/// Utilities for timestamp formatting
///
/// History records carry milliseconds since the Unix epoch; these helpers turn
/// them into DD.MM.YYYY HH:MM:SS strings.
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format epoch milliseconds in the browser's local time zone
pub fn format_timestamp(millis: i64) -> String {
    format_timestamp_in(millis, &Local)
}

/// Format epoch milliseconds in the given time zone.
/// Out-of-range values come back as the raw number.
pub fn format_timestamp_in<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(tz).format(DATETIME_FORMAT).to_string(),
        None => millis.to_string(),
    }
}
