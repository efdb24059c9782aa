//! Parent/child plausibility checks within a single family.

use crate::models::Sex;
use crate::report::{Finding, Report};

/// Days after a marriage ends within which a birth is still plausible
const GESTATION_DAYS: i64 = 270;

impl Report {
    /// Children should be born after their parents' marriage and no more
    /// than nine months after it ends.
    pub fn check_birth_around_parents_marriage(&mut self) {
        let mut findings = Vec::new();
        for family in self.store.families() {
            let divorce = self.effective_divorce_date(family);
            for child_id in &family.child_ids {
                let Some(child) = self.store.individual(child_id) else {
                    continue;
                };
                let Some(birth) = child.birth_date else {
                    continue;
                };
                if let Some(marriage) = family.marriage_date {
                    if birth < marriage {
                        findings.push(Finding::new(
                            "Birth Before Parents' Marriage",
                            format!(
                                "Birth of {} ({birth}) occurred before the marriage of their parents ({marriage})",
                                child.id
                            ),
                        ));
                        continue;
                    }
                }
                if let Some(divorce) = divorce {
                    if birth > divorce + chrono::Duration::days(GESTATION_DAYS) {
                        findings.push(Finding::new(
                            "Birth After Parents' Divorce",
                            format!(
                                "Birth of {} ({birth}) occurred more than nine months after the divorce of their parents ({divorce})",
                                child.id
                            ),
                        ));
                    }
                }
            }
        }
        self.anomalies.extend(findings);
    }

    /// Children cannot be born after the mother's death, or more than nine
    /// months after the father's.
    pub fn check_birth_after_parent_death(&mut self) {
        for family in self.store.families() {
            let mother_death = family
                .wife_id
                .as_deref()
                .and_then(|id| self.store.individual(id))
                .and_then(|wife| wife.death_date);
            let father_death = family
                .husband_id
                .as_deref()
                .and_then(|id| self.store.individual(id))
                .and_then(|husband| husband.death_date);
            for child_id in &family.child_ids {
                let Some(child) = self.store.individual(child_id) else {
                    continue;
                };
                let Some(birth) = child.birth_date else {
                    continue;
                };
                if let Some(death) = mother_death {
                    if birth > death {
                        self.errors.push(Finding::new(
                            "Birth After Parent's Death",
                            format!(
                                "Birth of {} ({birth}) occurred after the death of the mother ({death})",
                                child.id
                            ),
                        ));
                    }
                }
                if let Some(death) = father_death {
                    if birth > death + chrono::Duration::days(GESTATION_DAYS) {
                        self.errors.push(Finding::new(
                            "Birth After Parent's Death",
                            format!(
                                "Birth of {} ({birth}) occurred more than nine months after the death of the father ({death})",
                                child.id
                            ),
                        ));
                    }
                }
            }
        }
    }

    /// Fathers should not be more than 80 years older than a child, mothers
    /// not more than 60. One finding per parent, listing every affected
    /// child.
    pub fn check_parent_child_age_gap(&mut self) {
        let run_date = self.run_date;
        for family in self.store.families() {
            if family.child_ids.is_empty() {
                continue;
            }
            let children: Vec<(&str, i32)> = family
                .child_ids
                .iter()
                .filter_map(|id| {
                    let child = self.store.individual(id)?;
                    Some((child.id.as_str(), child.age(run_date)?))
                })
                .collect();
            for (parent_id, role, pronoun, limit) in [
                (family.husband_id.as_deref(), "Father", "his", 80),
                (family.wife_id.as_deref(), "Mother", "her", 60),
            ] {
                let Some(parent) = parent_id.and_then(|id| self.store.individual(id)) else {
                    continue;
                };
                let Some(parent_age) = parent.age(run_date) else {
                    continue;
                };
                let too_old_for: Vec<&str> = children
                    .iter()
                    .filter(|(_, child_age)| parent_age - child_age > limit)
                    .map(|(id, _)| *id)
                    .collect();
                if !too_old_for.is_empty() {
                    self.anomalies.push(Finding::new(
                        "Parent Too Old",
                        format!(
                            "{role} in family {} is over {limit} years older than one or more of {pronoun} children {too_old_for:?}",
                            family.id
                        ),
                    ));
                }
            }
        }
    }

    /// No more than five siblings should share a birth date.
    pub fn check_multiple_births(&mut self) {
        for family in self.store.families() {
            // First-seen order keeps the output deterministic
            let mut birth_counts: Vec<(chrono::NaiveDate, u32)> = Vec::new();
            for child_id in &family.child_ids {
                let Some(birth) = self
                    .store
                    .individual(child_id)
                    .and_then(|child| child.birth_date)
                else {
                    continue;
                };
                match birth_counts.iter_mut().find(|(date, _)| *date == birth) {
                    Some((_, count)) => *count += 1,
                    None => birth_counts.push((birth, 1)),
                }
            }
            for (date, count) in birth_counts {
                if count > 5 {
                    self.anomalies.push(Finding::new(
                        "Multiple Births",
                        format!(
                            "More than five siblings were born on {date} in family {}",
                            family.id
                        ),
                    ));
                }
            }
        }
    }

    /// Families should have fewer than 15 children.
    pub fn check_sibling_count(&mut self) {
        for family in self.store.families() {
            if family.child_ids.len() >= 15 {
                self.anomalies.push(Finding::new(
                    "Too Many Siblings",
                    format!("Family {} has 15 or more children", family.id),
                ));
            }
        }
    }

    /// The husband and all male children of a family should share one
    /// surname.
    pub fn check_male_surnames(&mut self) {
        for family in self.store.families() {
            let mut surnames: Vec<String> = Vec::new();
            if let Some(husband) = family
                .husband_id
                .as_deref()
                .and_then(|id| self.store.individual(id))
            {
                if husband.name.is_some() {
                    surnames.push(husband.surname().to_string());
                }
            }
            for child_id in &family.child_ids {
                let Some(child) = self.store.individual(child_id) else {
                    continue;
                };
                if child.name.is_none() || child.sex != Some(Sex::Male) {
                    continue;
                }
                let surname = child.surname().to_string();
                if !surnames.contains(&surname) {
                    surnames.push(surname);
                }
            }
            if surnames.len() > 1 {
                self.anomalies.push(Finding::new(
                    "Differing Male Surnames",
                    format!(
                        "Males in family {} have several different surnames {surnames:?}",
                        family.id
                    ),
                ));
            }
        }
    }

    /// The husband must carry the male marker and the wife the female one.
    pub fn check_spouse_roles(&mut self) {
        for family in self.store.families() {
            if let Some(husband) = family
                .husband_id
                .as_deref()
                .and_then(|id| self.store.individual(id))
            {
                if husband.sex != Some(Sex::Male) {
                    self.errors.push(Finding::new(
                        "Incorrect Sex",
                        format!("Husband in family {} is not male", family.id),
                    ));
                }
            }
            if let Some(wife) = family
                .wife_id
                .as_deref()
                .and_then(|id| self.store.individual(id))
            {
                if wife.sex != Some(Sex::Female) {
                    self.errors.push(Finding::new(
                        "Incorrect Sex",
                        format!("Wife in family {} is not female", family.id),
                    ));
                }
            }
        }
    }

    /// Siblings should not share an identical first name. One finding per
    /// colliding group.
    pub fn check_sibling_first_names(&mut self) {
        for family in self.store.families() {
            // (first name, ids) in first-seen order
            let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
            for child_id in &family.child_ids {
                let Some(child) = self.store.individual(child_id) else {
                    continue;
                };
                if child.name.is_none() {
                    continue;
                }
                let first = child.first_name();
                match groups.iter_mut().find(|(name, _)| *name == first) {
                    Some((_, ids)) => ids.push(child.id.as_str()),
                    None => groups.push((first, vec![child.id.as_str()])),
                }
            }
            for (first, ids) in &groups {
                if ids.len() > 1 {
                    self.anomalies.push(Finding::new(
                        "Siblings Shared Name",
                        format!("Siblings {ids:?} share a first name ({first})"),
                    ));
                }
            }
        }
    }
}
