//! Individual entity model
//!
//! An Individual represents one person record, assembled incrementally from
//! level-1 field lines and level-2 date lines.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LineError;
use crate::models::name;
use crate::models::types::{DateTarget, Sex, whole_years_between};

/// A person record
#[derive(Debug, Clone, Serialize)]
pub struct Individual {
    /// Record identifier, unique after duplicate resolution
    pub id: String,
    /// Display name in the slash-delimited surname convention
    pub name: Option<String>,
    /// Sex marker
    pub sex: Option<Sex>,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// Family in which this individual is recorded as a child
    pub child_in: Option<String>,
    /// Families in which this individual is recorded as a spouse, in ingest order
    pub spouse_in: Vec<String>,
}

impl Individual {
    /// Create a new Individual with only its identifier set
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: None,
            sex: None,
            birth_date: None,
            death_date: None,
            child_in: None,
            spouse_in: Vec::new(),
        }
    }

    /// Apply a level-1 field line to this record.
    pub fn set_field(&mut self, tag: &str, value: &str) -> Result<(), LineError> {
        match tag {
            "NAME" => self.name = Some(value.to_string()),
            "SEX" => self.sex = Some(Sex::from(value)),
            "FAMC" => self.child_in = Some(value.to_string()),
            "FAMS" => self.spouse_in.push(value.to_string()),
            _ => {
                return Err(LineError::UnknownIndividualField {
                    tag: tag.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Write a parsed date into the field announced by `target`.
    pub fn set_date(&mut self, date: NaiveDate, target: DateTarget) -> Result<(), LineError> {
        match target {
            DateTarget::Birth => self.birth_date = Some(date),
            DateTarget::Death => self.death_date = Some(date),
            DateTarget::Marriage | DateTarget::Divorce => {
                return Err(LineError::WrongDateTarget {
                    target,
                    kind: "individual",
                });
            }
        }
        Ok(())
    }

    /// Age in whole years as of `as_of`, stopping at the death date when one
    /// is recorded. `None` without a birth date.
    #[must_use]
    pub fn age(&self, as_of: NaiveDate) -> Option<i32> {
        let birth = self.birth_date?;
        let end = match self.death_date {
            Some(death) if death < as_of => death,
            _ => as_of,
        };
        Some(whole_years_between(birth, end))
    }

    /// Whether no death date has been recorded
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// Surname extracted from the display name; empty when absent
    #[must_use]
    pub fn surname(&self) -> &str {
        self.name.as_deref().map_or("", name::surname)
    }

    /// First name extracted from the display name; empty when absent
    #[must_use]
    pub fn first_name(&self) -> String {
        self.name.as_deref().map_or_else(String::new, name::first_name)
    }

    /// Label used in finding messages: the name when present, the id otherwise
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
