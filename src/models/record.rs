//! Record sum type dispatched by the ingest state machine.
//!
//! There are exactly two record kinds, so a flat two-variant enum replaces
//! any deeper abstraction over them.

use chrono::NaiveDate;

use crate::error::LineError;
use crate::models::family::Family;
use crate::models::individual::Individual;
use crate::models::types::DateTarget;

/// Either record kind while it is being assembled
#[derive(Debug, Clone)]
pub enum GedcomRecord {
    /// A person record
    Individual(Individual),
    /// A union record
    Family(Family),
}

impl GedcomRecord {
    /// Identifier of the underlying record
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Individual(indi) => &indi.id,
            Self::Family(fam) => &fam.id,
        }
    }

    /// Human-readable kind name, for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Individual(_) => "individual",
            Self::Family(_) => "family",
        }
    }

    /// Delegate a level-1 field line to the underlying record.
    pub fn set_field(&mut self, tag: &str, value: &str) -> Result<(), LineError> {
        match self {
            Self::Individual(indi) => indi.set_field(tag, value),
            Self::Family(fam) => fam.set_field(tag, value),
        }
    }

    /// Delegate a parsed date to the underlying record.
    pub fn set_date(&mut self, date: NaiveDate, target: DateTarget) -> Result<(), LineError> {
        match self {
            Self::Individual(indi) => indi.set_date(date, target),
            Self::Family(fam) => fam.set_date(date, target),
        }
    }
}
