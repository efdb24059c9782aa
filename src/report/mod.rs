//! Report aggregate: record store, findings, listings and run metadata.
//!
//! The report owns everything a validation run accumulates. Findings are
//! append-only; running a check twice doubles its findings, deliberately, so
//! callers control de-duplication by controlling invocation.

pub mod checks;

use chrono::{Local, NaiveDate};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::DateFormatError;
use crate::models::record::GedcomRecord;
use crate::models::{Family, Individual};
use crate::store::RecordStore;

/// A single reported rule violation or oddity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Category label, e.g. `Duplicate IDs`
    pub category: String,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Build a finding from a category label and message
    #[must_use]
    pub fn new(category: &str, message: String) -> Self {
        Self {
            category: category.to_string(),
            message,
        }
    }
}

/// An (id, date) pair in one of the window listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedEntry {
    /// Record id the entry refers to
    pub id: String,
    /// The listed date
    pub date: NaiveDate,
}

/// Accumulates records, findings and listings for one validation run
#[derive(Debug)]
pub struct Report {
    pub(crate) store: RecordStore,
    /// Hard data contradictions
    pub errors: Vec<Finding>,
    /// Plausible but unusual situations
    pub anomalies: Vec<Finding>,
    /// Birthdays falling within the configured window
    pub upcoming_birthdays: Vec<DatedEntry>,
    /// Anniversaries falling within the configured window
    pub upcoming_anniversaries: Vec<DatedEntry>,
    /// Births on or after the window threshold
    pub recent_births: Vec<DatedEntry>,
    /// Deaths on or after the window threshold
    pub recent_deaths: Vec<DatedEntry>,
    pub(crate) run_date: NaiveDate,
    pub(crate) config: ReportConfig,
    /// Times each raw id has been seen duplicated
    duplicate_ids: FxHashMap<String, u32>,
}

impl Report {
    /// Create an empty report anchored to today's date
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self::with_run_date(config, Local::now().date_naive())
    }

    /// Create an empty report with a fixed run date
    #[must_use]
    pub fn with_run_date(config: ReportConfig, run_date: NaiveDate) -> Self {
        Self {
            store: RecordStore::new(),
            errors: Vec::new(),
            anomalies: Vec::new(),
            upcoming_birthdays: Vec::new(),
            upcoming_anniversaries: Vec::new(),
            recent_births: Vec::new(),
            recent_deaths: Vec::new(),
            run_date,
            config,
            duplicate_ids: FxHashMap::default(),
        }
    }

    /// The "now" anchor of this run
    #[must_use]
    pub fn run_date(&self) -> NaiveDate {
        self.run_date
    }

    /// Read access to the record store
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Iterate individuals in ingest order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.store.individuals()
    }

    /// Iterate families in ingest order
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.store.families()
    }

    /// Count the individuals in the store
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.store.individual_count()
    }

    /// Count the families in the store
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.store.family_count()
    }

    /// Resolve a raw record id against everything already committed.
    ///
    /// A fresh id comes back unchanged. A claimed id yields a `Duplicate IDs`
    /// finding and a `"<id> (<n>)"` replacement; the space guarantees
    /// uniqueness because raw GEDCOM ids cannot contain one.
    pub fn check_unique_id(&mut self, raw_id: &str) -> String {
        if !self.store.contains_id(raw_id) {
            return raw_id.to_string();
        }
        self.errors.push(Finding::new(
            "Duplicate IDs",
            format!("{raw_id} is already used"),
        ));
        let count = self.duplicate_ids.entry(raw_id.to_string()).or_insert(0);
        *count += 1;
        format!("{raw_id} ({count})")
    }

    /// Commit a finished record into the store, re-resolving its id if the
    /// applicable map somehow already holds it.
    pub fn commit(&mut self, record: GedcomRecord) {
        match record {
            GedcomRecord::Individual(mut individual) => {
                if self.store.individual(&individual.id).is_some() {
                    individual.id = self.check_unique_id(&individual.id);
                }
                self.store.insert_individual(individual);
            }
            GedcomRecord::Family(mut family) => {
                if self.store.family(&family.id).is_some() {
                    family.id = self.check_unique_id(&family.id);
                }
                self.store.insert_family(family);
            }
        }
    }

    /// Record a date-parse failure as an `Invalid Date` finding.
    pub(crate) fn add_invalid_date(&mut self, err: &DateFormatError) {
        self.errors
            .push(Finding::new("Invalid Date", err.to_string()));
    }

    /// Explicit divorce date, or one inferred from spouse death dates: the
    /// earlier death when both are recorded, otherwise whichever single
    /// death is recorded.
    #[must_use]
    pub fn effective_divorce_date(&self, family: &Family) -> Option<NaiveDate> {
        if family.divorce_date.is_some() {
            return family.divorce_date;
        }
        let death = |id: Option<&str>| {
            id.and_then(|id| self.store.individual(id))
                .and_then(|indi| indi.death_date)
        };
        let husband_death = death(family.husband_id.as_deref());
        let wife_death = death(family.wife_id.as_deref());
        match (husband_death, wife_death) {
            (Some(husband), Some(wife)) => Some(husband.min(wife)),
            (Some(death), None) | (None, Some(death)) => Some(death),
            (None, None) => None,
        }
    }

    /// Run every check in the fixed reference order, then build the window
    /// listings.
    pub fn run_checks(&mut self) {
        self.check_future_dates();
        self.check_corresponding_entries();
        self.check_birth_before_marriage();
        self.check_birth_before_death();
        self.check_marriage_before_divorce();
        self.check_marriage_before_death();
        self.check_divorce_before_death();
        self.check_max_age();
        self.check_birth_around_parents_marriage();
        self.check_birth_after_parent_death();
        self.check_marriage_after_14();
        self.check_bigamy();
        self.check_parent_child_age_gap();
        self.check_multiple_births();
        self.check_sibling_count();
        self.check_male_surnames();
        self.check_marriage_to_descendant();
        self.check_sibling_marriage();
        self.check_first_cousin_marriage();
        self.check_spouse_roles();
        self.check_unique_name_and_birth();
        self.check_sibling_first_names();
        self.sort_children_by_age();
        self.check_couple_age_gap();
        self.list_recent_births();
        self.list_recent_deaths();
        self.list_upcoming_birthdays();
        self.list_upcoming_anniversaries();
    }

    /// Machine-readable snapshot of the finished report
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            individuals: self.store.individuals().cloned().collect(),
            families: self.store.families().cloned().collect(),
            errors: self.errors.clone(),
            anomalies: self.anomalies.clone(),
            upcoming_birthdays: self.upcoming_birthdays.clone(),
            upcoming_anniversaries: self.upcoming_anniversaries.clone(),
            recent_births: self.recent_births.clone(),
            recent_deaths: self.recent_deaths.clone(),
        }
    }
}

/// Serializable snapshot of a finished report, consumed by the presentation
/// layer
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Individuals in ingest order
    pub individuals: Vec<Individual>,
    /// Families in ingest order
    pub families: Vec<Family>,
    /// Hard data contradictions
    pub errors: Vec<Finding>,
    /// Plausible but unusual situations
    pub anomalies: Vec<Finding>,
    /// Birthdays falling within the configured window
    pub upcoming_birthdays: Vec<DatedEntry>,
    /// Anniversaries falling within the configured window
    pub upcoming_anniversaries: Vec<DatedEntry>,
    /// Births on or after the window threshold
    pub recent_births: Vec<DatedEntry>,
    /// Deaths on or after the window threshold
    pub recent_deaths: Vec<DatedEntry>,
}
