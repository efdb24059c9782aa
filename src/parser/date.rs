//! GEDCOM date-value parsing.

use chrono::NaiveDate;

use crate::error::DateFormatError;

/// Month abbreviations in GEDCOM date values, JAN = 1 through DEC = 12
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .map(|i| i as u32 + 1)
}

/// Parse a `<day> <MON> <year>` date value into a calendar date.
///
/// The value is split on the first two spaces only, so a trailing token with
/// embedded spaces fails the year parse rather than being silently dropped.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    if value.is_empty() {
        return Err(DateFormatError::Empty);
    }
    let parts: Vec<&str> = value.splitn(3, ' ').collect();
    if parts.len() != 3 {
        return Err(DateFormatError::WrongShape);
    }
    let day: u32 = parts[0]
        .parse()
        .map_err(|_| DateFormatError::InvalidDay(parts[0].to_string()))?;
    let month = month_number(parts[1])
        .ok_or_else(|| DateFormatError::InvalidMonth(parts[1].to_string()))?;
    let year: i32 = parts[2]
        .parse()
        .map_err(|_| DateFormatError::InvalidYear(parts[2].to_string()))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateFormatError::OutOfRange(value.to_string()))
}
