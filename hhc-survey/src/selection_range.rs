use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive date range picked with the time brush.
///
/// A range whose start is after its end is kept as-is and selects nothing.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SelectionRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            hhc_utils::dates::format_date(&self.start),
            hhc_utils::dates::format_date(&self.end)
        )
    }
}
