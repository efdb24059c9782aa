//! Error handling for the GEDCOM checker.
//!
//! Three tiers: [`GedcomError`] aborts a whole run (I/O only), [`LineError`]
//! invalidates a single input line, and [`DateFormatError`] degrades a date
//! field to absent and is reported as an `Invalid Date` finding.

use std::io;
use std::path::PathBuf;

use crate::models::DateTarget;

/// Errors that abort an entire ingest run
#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    /// The input file could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
}

/// Alias for Result with [`GedcomError`]
pub type Result<T> = std::result::Result<T, GedcomError>;

/// Per-line ingest failures. Each aborts the offending line only; the
/// session continues with the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Fewer than two fields on the line
    #[error("not enough fields on the line")]
    TooFewFields,

    /// The level token is not 0, 1 or 2
    #[error("line level `{0}` is not valid (expected 0, 1 or 2)")]
    InvalidLevel(String),

    /// A level-0 line that is neither an annotation nor a record marker
    #[error("invalid tag for a level-0 line")]
    InvalidTopLevelTag,

    /// A field or date line arrived with no record open
    #[error("no individual or family record is open to receive the field")]
    NoOpenRecord,

    /// A level-1 field tag without a value
    #[error("missing value for tag `{0}`")]
    MissingValue(String),

    /// Unrecognized level-1 tag on an individual record
    #[error("specified field (`{value}`) under tag `{tag}` is invalid for an individual")]
    UnknownIndividualField {
        /// The unrecognized tag
        tag: String,
        /// The value it carried
        value: String,
    },

    /// Unrecognized level-1 tag on a family record
    #[error("specified field (`{value}`) under tag `{tag}` is invalid for a family")]
    UnknownFamilyField {
        /// The unrecognized tag
        tag: String,
        /// The value it carried
        value: String,
    },

    /// A level-2 line with a tag other than DATE
    #[error("only DATE is valid on a level-2 line")]
    InvalidDateTag,

    /// A DATE line without a value
    #[error("not enough fields for DATE")]
    MissingDateValue,

    /// A DATE line arrived before any date field was announced
    #[error("type of date has not been specified")]
    NoPendingDate,

    /// The announced date field does not exist on the open record's kind
    #[error("no date field corresponding to {target} for {kind}")]
    WrongDateTarget {
        /// The announced target
        target: DateTarget,
        /// Kind of the open record
        kind: &'static str,
    },
}

/// Date-string parse failures, distinguishing which token was at fault
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateFormatError {
    /// Empty or absent date value
    #[error("date is not provided")]
    Empty,

    /// The value does not split into `<day> <month> <year>`
    #[error("date is malformed; should consist of `<day> <month> <year>`")]
    WrongShape,

    /// Non-numeric day token
    #[error("day of date (`{0}`) is not a valid numerical value")]
    InvalidDay(String),

    /// Unrecognized month abbreviation
    #[error("month of date (`{0}`) is not a valid month string")]
    InvalidMonth(String),

    /// Non-numeric year token
    #[error("year of date (`{0}`) is not a valid numerical value")]
    InvalidYear(String),

    /// Tokens parsed but do not form a real calendar date
    #[error("`{0}` is not a valid date (the day is probably too large for the month)")]
    OutOfRange(String),
}
