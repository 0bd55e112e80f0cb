//! Date token parsing and expansion

use crate::error::{Result, WalError};
use chrono::{Datelike, NaiveDate};
use std::fmt;

const EXPECTED_SHAPES: &str = "YYYYMMDD, MMDD or DD expected";

/// A partial date given on the command line.
///
/// The number of decimal digits selects the granularity:
/// 1-2 digits are `DD`, 3-4 digits are `MMDD` and 8 digits are `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken(i64);

impl DateToken {
    pub fn new(value: i64) -> Self {
        DateToken(value)
    }

    /// Parse a command-line argument. Anything that is not a decimal
    /// integer is an invalid date, including numbers too large for `i64`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(DateToken(value));
        }

        let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
        let detail = if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
            format!("{} has {} digits; {}", trimmed, unsigned.len(), EXPECTED_SHAPES)
        } else {
            format!("'{}' is not a number; {}", input, EXPECTED_SHAPES)
        };
        Err(WalError::InvalidDateFormat(detail))
    }

    /// Number of decimal digits, or `None` for non-positive tokens
    pub fn digits(&self) -> Option<u32> {
        if self.0 > 0 {
            Some(self.0.ilog10() + 1)
        } else {
            None
        }
    }

    /// Expand this token to a full calendar date, filling omitted parts from `today`
    pub fn expand(&self, today: NaiveDate) -> Result<ExpandedDate> {
        let digits = self.digits().ok_or_else(|| {
            WalError::InvalidDateFormat(format!("{} is not positive; {}", self.0, EXPECTED_SHAPES))
        })?;

        let (year, month, day) = match digits {
            8 => (
                (self.0 / 10_000) as i32,
                ((self.0 % 10_000) / 100) as u32,
                (self.0 % 100) as u32,
            ),
            3 | 4 => (today.year(), (self.0 / 100) as u32, (self.0 % 100) as u32),
            1 | 2 => (today.year(), today.month(), self.0 as u32),
            _ => {
                return Err(WalError::InvalidDateFormat(format!(
                    "{} has {} digits; {}",
                    self.0, digits, EXPECTED_SHAPES
                )))
            }
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(ExpandedDate)
            .ok_or_else(|| WalError::InvalidDateFormat(calendar_detail(year, month, day)))
    }
}

/// Describe why a (year, month, day) triple is not a real date
fn calendar_detail(year: i32, month: u32, day: u32) -> String {
    if !(1..=12).contains(&month) {
        format!("month {} is out of range", month)
    } else {
        format!("day {} is out of range for {:04}-{:02}", day, year, month)
    }
}

/// A validated calendar date, rendered as `YYYYMMDD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpandedDate(NaiveDate);

impl ExpandedDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Log file name for this date (e.g., `20230410.md`)
    pub fn file_name(&self) -> String {
        format!("{}.md", self)
    }
}

impl fmt::Display for ExpandedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

impl From<NaiveDate> for ExpandedDate {
    fn from(date: NaiveDate) -> Self {
        ExpandedDate(date)
    }
}
