//! Listing passes and marriage-status queries.
//!
//! These produce the informational sections of the report rather than
//! findings, plus the two queries the presentation layer uses for the
//! living-married and single-over-30 listings.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Individual, whole_years_between};
use crate::report::{DatedEntry, Finding, Report};

impl Report {
    /// Order each family's children oldest first. Children without a birth
    /// date sort after all dated children, keeping their relative order.
    pub fn sort_children_by_age(&mut self) {
        let sorted: Vec<(String, Vec<String>)> = self
            .store
            .families()
            .map(|family| {
                let mut children = family.child_ids.clone();
                children.sort_by_key(|id| {
                    self.store
                        .individual(id)
                        .and_then(|child| child.birth_date)
                        .unwrap_or(NaiveDate::MAX)
                });
                (family.id.clone(), children)
            })
            .collect();
        for (family_id, children) in sorted {
            if let Some(family) = self.store.family_mut(&family_id) {
                family.child_ids = children;
            }
        }
    }

    /// Flag couples where the birth gap exceeds the younger spouse's own
    /// age, i.e. the older spouse is more than twice as old.
    pub fn check_couple_age_gap(&mut self) {
        let run_date = self.run_date;
        for family in self.store.families() {
            let spouse = |id: Option<&str>| id.and_then(|id| self.store.individual(id));
            let Some(husband) = spouse(family.husband_id.as_deref()) else {
                continue;
            };
            let Some(wife) = spouse(family.wife_id.as_deref()) else {
                continue;
            };
            let (Some(husband_birth), Some(wife_birth)) = (husband.birth_date, wife.birth_date)
            else {
                continue;
            };
            let (older_birth, younger_birth, younger) = if husband_birth <= wife_birth {
                (husband_birth, wife_birth, wife)
            } else {
                (wife_birth, husband_birth, husband)
            };
            let gap = whole_years_between(older_birth, younger_birth);
            let Some(younger_age) = younger.age(run_date) else {
                continue;
            };
            if gap > younger_age {
                self.anomalies.push(Finding::new(
                    "Large Couple Age Gap",
                    format!(
                        "Spouses {} and {} in family {} have an age gap of {gap} years, larger than the younger spouse's age",
                        husband.id, wife.id, family.id
                    ),
                ));
            }
        }
    }

    /// Births on or after the window threshold, sorted by date.
    pub fn list_recent_births(&mut self) {
        let threshold = self.run_date - Duration::days(self.config.window_days);
        let mut entries: Vec<DatedEntry> = self
            .store
            .individuals()
            .filter_map(|individual| {
                let birth = individual.birth_date?;
                (birth >= threshold).then(|| DatedEntry {
                    id: individual.id.clone(),
                    date: birth,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.date);
        self.recent_births = entries;
    }

    /// Deaths on or after the window threshold, sorted by date.
    pub fn list_recent_deaths(&mut self) {
        let threshold = self.run_date - Duration::days(self.config.window_days);
        let mut entries: Vec<DatedEntry> = self
            .store
            .individuals()
            .filter_map(|individual| {
                let death = individual.death_date?;
                (death >= threshold).then(|| DatedEntry {
                    id: individual.id.clone(),
                    date: death,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.date);
        self.recent_deaths = entries;
    }

    /// Living individuals whose next birthday falls within the window,
    /// sorted by date.
    pub fn list_upcoming_birthdays(&mut self) {
        let run_date = self.run_date;
        let horizon = run_date + Duration::days(self.config.window_days);
        let mut entries: Vec<DatedEntry> = self
            .store
            .individuals()
            .filter_map(|individual| {
                if !individual.is_alive() {
                    return None;
                }
                let next = next_occurrence(individual.birth_date?, run_date);
                (next <= horizon).then(|| DatedEntry {
                    id: individual.id.clone(),
                    date: next,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.date);
        self.upcoming_birthdays = entries;
    }

    /// Undivorced families whose next anniversary falls within the window,
    /// sorted by date.
    pub fn list_upcoming_anniversaries(&mut self) {
        let run_date = self.run_date;
        let horizon = run_date + Duration::days(self.config.window_days);
        let mut entries: Vec<DatedEntry> = self
            .store
            .families()
            .filter_map(|family| {
                if family.divorce_date.is_some() {
                    return None;
                }
                let next = next_occurrence(family.marriage_date?, run_date);
                (next <= horizon).then(|| DatedEntry {
                    id: family.id.clone(),
                    date: next,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.date);
        self.upcoming_anniversaries = entries;
    }

    /// Ids of the families in which `individual` is a spouse and the
    /// marriage has not been dissolved by divorce or death.
    #[must_use]
    pub fn married_family_ids(&self, individual: &Individual) -> Vec<String> {
        individual
            .spouse_in
            .iter()
            .filter(|family_id| {
                self.store
                    .family(family_id)
                    .is_some_and(|family| self.effective_divorce_date(family).is_none())
            })
            .cloned()
            .collect()
    }

    /// Whether `individual` has no currently-undissolved marriage
    #[must_use]
    pub fn is_currently_single(&self, individual: &Individual) -> bool {
        self.married_family_ids(individual).is_empty()
    }

    /// Living individuals paired with their active marriage families
    #[must_use]
    pub fn list_living_married(&self) -> Vec<(String, Vec<String>)> {
        self.store
            .individuals()
            .filter(|individual| individual.is_alive())
            .filter_map(|individual| {
                let families = self.married_family_ids(individual);
                (!families.is_empty()).then(|| (individual.id.clone(), families))
            })
            .collect()
    }

    /// Living individuals over 30 with no active marriage
    #[must_use]
    pub fn list_single_over_30(&self) -> Vec<String> {
        self.store
            .individuals()
            .filter(|individual| {
                individual.is_alive()
                    && self.is_currently_single(individual)
                    && individual.age(self.run_date).is_some_and(|age| age > 30)
            })
            .map(|individual| individual.id.clone())
            .collect()
    }
}

/// Re-anchor a date's month/day onto the current or next year, collapsing
/// Feb-29 onto Feb-28 when the target year is not a leap year.
fn next_occurrence(date: NaiveDate, run_date: NaiveDate) -> NaiveDate {
    let reanchored = |year: i32| {
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
            .unwrap_or(date)
    };
    let this_year = reanchored(run_date.year());
    if this_year >= run_date {
        this_year
    } else {
        reanchored(run_date.year() + 1)
    }
}
