//! Family unit representation
//!
//! A Family links up to two spouses and any number of children by record id;
//! the referenced individuals live in the record store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LineError;
use crate::models::types::DateTarget;

/// A union record linking spouses and children
#[derive(Debug, Clone, Serialize)]
pub struct Family {
    /// Record identifier, unique after duplicate resolution
    pub id: String,
    /// Husband record id
    pub husband_id: Option<String>,
    /// Wife record id
    pub wife_id: Option<String>,
    /// Child record ids; re-ordered in place by the age-sort pass
    pub child_ids: Vec<String>,
    /// Marriage date
    pub marriage_date: Option<NaiveDate>,
    /// Divorce date; may be back-filled from spouse death dates
    pub divorce_date: Option<NaiveDate>,
}

impl Family {
    /// Create a new Family with only its identifier set
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            husband_id: None,
            wife_id: None,
            child_ids: Vec::new(),
            marriage_date: None,
            divorce_date: None,
        }
    }

    /// Apply a level-1 field line to this record.
    pub fn set_field(&mut self, tag: &str, value: &str) -> Result<(), LineError> {
        match tag {
            "HUSB" => self.husband_id = Some(value.to_string()),
            "WIFE" => self.wife_id = Some(value.to_string()),
            "CHIL" => self.child_ids.push(value.to_string()),
            _ => {
                return Err(LineError::UnknownFamilyField {
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
            DateTarget::Marriage => self.marriage_date = Some(date),
            DateTarget::Divorce => self.divorce_date = Some(date),
            DateTarget::Birth | DateTarget::Death => {
                return Err(LineError::WrongDateTarget {
                    target,
                    kind: "family",
                });
            }
        }
        Ok(())
    }

    /// Spouse ids present on this record, husband first
    #[must_use]
    pub fn spouse_ids(&self) -> impl Iterator<Item = &str> {
        [self.husband_id.as_deref(), self.wife_id.as_deref()]
            .into_iter()
            .flatten()
    }
}
