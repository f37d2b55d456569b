//! Display-date parsing for the dd/mm/yyyy input convention
//!
//! The collection front end accepts dates as masked free text in day/month/
//! year order. This module owns the canonical conversion between that
//! display form and `NaiveDate`, including re-deriving the mask for partial
//! input and rejecting impossible day/month/year combinations.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from parsing a display-formatted date
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    /// Input does not contain exactly eight digits
    #[error("Incomplete date: expected dd/mm/yyyy, got '{0}'")]
    Incomplete(String),

    /// Digits are complete but do not name a real calendar date
    #[error("Invalid date: {day:02}/{month:02}/{year:04} is not a valid calendar date")]
    InvalidDate { day: u32, month: u32, year: i32 },
}

/// Parses a dd/mm/yyyy display date into a `NaiveDate`
///
/// Non-digit characters are ignored, so "07/03/1991", "07031991" and
/// partially slashed input all parse the same way. Exactly eight digits are
/// required; the combination is validated against the real calendar
/// (31/02/2000 is rejected, 29/02/2000 is accepted).
pub fn parse_display_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return Err(DateParseError::Incomplete(input.to_string()));
    }

    // Slices are all-digit by construction, so the parses cannot fail
    let day: u32 = digits[0..2].parse().unwrap_or(0);
    let month: u32 = digits[2..4].parse().unwrap_or(0);
    let year: i32 = digits[4..8].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { day, month, year })
}

/// Formats a date in the dd/mm/yyyy display convention
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Re-derives the dd/mm/yyyy mask for a partially typed date
///
/// Strips everything but digits, regroups with slashes after the day and
/// month, and caps the input at eight digits. This is the canonical form of
/// the front end's keystroke masking, kept here so the behavior is testable
/// independent of any UI event model.
pub fn mask_partial_date(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(8)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[0..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[0..2], &digits[2..4], &digits[4..]),
    }
}
