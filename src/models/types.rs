//! Common domain type definitions
//!
//! This module contains the shared enum types and date helpers used across
//! the record models and the check engine.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Sex marker of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    /// Male marker
    Male,
    /// Female marker
    Female,
    /// Unknown or unrecognized marker
    Unknown,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Which date field a level-1 tag announced for the following DATE line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTarget {
    /// Birth date of an individual
    Birth,
    /// Death date of an individual
    Death,
    /// Marriage date of a family
    Marriage,
    /// Divorce date of a family
    Divorce,
}

impl DateTarget {
    /// Map a level-1 tag to its date target, if it is one.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BIRT" => Some(Self::Birth),
            "DEAT" => Some(Self::Death),
            "MARR" => Some(Self::Marriage),
            "DIV" => Some(Self::Divorce),
            _ => None,
        }
    }
}

impl fmt::Display for DateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Birth => "BIRT",
            Self::Death => "DEAT",
            Self::Marriage => "MARR",
            Self::Divorce => "DIV",
        };
        write!(f, "{tag}")
    }
}

/// Whole calendar years elapsed from `start` to `end`, month/day aware.
#[must_use]
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    // Not yet reached the anniversary of `start` within `end`'s year
    if end.month() < start.month()
        || (end.month() == start.month() && end.day() < start.day())
    {
        years -= 1;
    }
    years
}
