use chrono::NaiveDate;
use leptos::*;

use crate::utils::time::{first_day_of_month, format_input_date, parse_input_date};

pub const LOAD_FAILED: &str = "Failed to load attendance data";
pub const EMPTY_RESULT: &str = "No attendance records found";

#[derive(Clone, Copy)]
pub struct SummaryFormState {
    start: RwSignal<String>,
    end: RwSignal<String>,
}

impl SummaryFormState {
    pub fn new() -> Self {
        Self {
            start: create_rw_signal(String::new()),
            end: create_rw_signal(String::new()),
        }
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end
    }

    pub fn set_range(&self, start: NaiveDate, end: NaiveDate) {
        self.start.set(format_input_date(start));
        self.end.set(format_input_date(end));
    }

    /// Current inputs as dates. When either is blank or malformed the whole
    /// range falls back to the current month so far and is written back.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let parsed = (
            parse_input_date(&self.start.get_untracked()),
            parse_input_date(&self.end.get_untracked()),
        );
        match parsed {
            (Some(start), Some(end)) => (start, end),
            _ => {
                let range = default_range(today);
                self.set_range(range.0, range.1);
                range
            }
        }
    }
}

impl Default for SummaryFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(today), today)
}

pub fn record_count_text(count: usize) -> String {
    format!("Showing {} record(s) for the selected date range", count)
}
