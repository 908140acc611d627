use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

use crate::config;

/// Converts a UTC instant into wall-clock time of the display zone.
pub fn to_display(ts: &DateTime<Utc>) -> NaiveDateTime {
    match config::display_time_zone() {
        Some(tz) => ts.with_timezone(&tz).naive_local(),
        None => ts.with_timezone(&Local).naive_local(),
    }
}

pub fn today_in_display_tz() -> NaiveDate {
    to_display(&Utc::now()).date()
}

/// `January 1, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `09:00 AM`
pub fn format_clock(dt: &NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

/// `01-01-2024`
pub fn format_short_date(dt: &NaiveDateTime) -> String {
    dt.format("%m-%d-%Y").to_string()
}

/// `January 1, 2024 at 09:00 AM`
pub fn format_long_date_time(dt: &NaiveDateTime) -> String {
    format!("{} at {}", format_long_date(dt.date()), format_clock(dt))
}

pub fn display_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|ts| format_clock(&to_display(ts)))
        .unwrap_or_else(|| "-".into())
}

pub fn display_short_date(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|ts| format_short_date(&to_display(ts)))
        .unwrap_or_else(|| "-".into())
}

pub fn display_long_date_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|ts| format_long_date_time(&to_display(ts)))
        .unwrap_or_default()
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `YYYY-MM-DD`, the format used by `<input type="date">` and the backend.
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
