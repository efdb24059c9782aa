//! Checks that traverse the marriage and descent graph.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::BigamyPolicy;
use crate::report::{Finding, Report};

impl Report {
    /// No marriage may overlap another marriage of the same spouse.
    ///
    /// Each family's end date is its explicit divorce date or one inferred
    /// from spouse deaths; unknown end dates are handled per the configured
    /// [`BigamyPolicy`]. Each offending family is reported once per pass,
    /// and inferred end dates are cached back onto the records for the
    /// later listing passes.
    pub fn check_bigamy(&mut self) {
        let policy = self.config.bigamy_policy;
        let end_dates: FxHashMap<String, Option<NaiveDate>> = self
            .store
            .families()
            .map(|family| (family.id.clone(), self.effective_divorce_date(family)))
            .collect();
        let mut flagged: FxHashSet<String> = FxHashSet::default();
        let mut findings = Vec::new();
        for family in self.store.families() {
            if flagged.contains(&family.id) {
                continue;
            }
            let marriage = family.marriage_date;
            let end = end_dates[&family.id];
            for spouse_id in family.spouse_ids() {
                let Some(spouse) = self.store.individual(spouse_id) else {
                    continue;
                };
                if spouse.spouse_in.len() < 2 {
                    continue;
                }
                for other_id in &spouse.spouse_in {
                    if other_id == &family.id {
                        continue;
                    }
                    let Some(other) = self.store.family(other_id) else {
                        continue;
                    };
                    let other_end = end_dates.get(other_id).copied().flatten();
                    if marriages_overlap(marriage, end, other.marriage_date, other_end, policy) {
                        flagged.insert(other_id.clone());
                        findings.push(Finding::new(
                            "Bigamy",
                            format!(
                                "Spouse details are: {} and families are {} and {other_id}",
                                spouse.id, family.id
                            ),
                        ));
                    }
                }
            }
        }
        self.errors.extend(findings);
        // Cache the inferred end dates for the listing passes.
        for (family_id, end) in end_dates {
            let Some(end) = end else { continue };
            if let Some(family) = self.store.family_mut(&family_id) {
                if family.divorce_date.is_none() {
                    family.divorce_date = Some(end);
                }
            }
        }
    }

    /// No individual may be married to one of their own descendants.
    pub fn check_marriage_to_descendant(&mut self) {
        let mut findings = Vec::new();
        for individual in self.store.individuals() {
            if individual.spouse_in.is_empty() {
                continue;
            }
            let descendants = self.descendants_of(&individual.id);
            for family_id in &individual.spouse_in {
                let Some(family) = self.store.family(family_id) else {
                    continue;
                };
                for partner_id in family.spouse_ids() {
                    if partner_id != individual.id && descendants.contains(partner_id) {
                        findings.push(Finding::new(
                            "Marriage to Descendant",
                            format!("{} is married to descendant, {partner_id}.", individual.id),
                        ));
                    }
                }
            }
        }
        self.anomalies.extend(findings);
    }

    /// A family's spouses must not share the same childhood family.
    pub fn check_sibling_marriage(&mut self) {
        for family in self.store.families() {
            let parents = |id: Option<&str>| {
                id.and_then(|id| self.store.individual(id))
                    .and_then(|indi| indi.child_in.as_deref())
            };
            let husband_family = parents(family.husband_id.as_deref());
            let wife_family = parents(family.wife_id.as_deref());
            if let (Some(husband_family), Some(wife_family)) = (husband_family, wife_family) {
                if husband_family == wife_family {
                    self.anomalies.push(Finding::new(
                        "Sibling Marriage",
                        format!(
                            "Siblings {} and {} should not marry.",
                            family.husband_id.as_deref().unwrap_or_default(),
                            family.wife_id.as_deref().unwrap_or_default()
                        ),
                    ));
                }
            }
        }
    }

    /// A family's spouses must not share a grandparent.
    pub fn check_first_cousin_marriage(&mut self) {
        let mut findings = Vec::new();
        for family in self.store.families() {
            let (Some(husband_id), Some(wife_id)) =
                (family.husband_id.as_deref(), family.wife_id.as_deref())
            else {
                continue;
            };
            let husband_grandparents = self.grandparents_of(husband_id);
            if husband_grandparents.is_empty() {
                continue;
            }
            let wife_grandparents = self.grandparents_of(wife_id);
            if husband_grandparents
                .intersection(&wife_grandparents)
                .next()
                .is_some()
            {
                findings.push(Finding::new(
                    "First Cousins Marrying",
                    format!("First cousins are getting married in Family {}", family.id),
                ));
            }
        }
        self.anomalies.extend(findings);
    }

    /// Parent ids of an individual, via their childhood family.
    fn parents_of(&self, id: &str) -> Vec<String> {
        self.store
            .individual(id)
            .and_then(|indi| indi.child_in.as_deref())
            .and_then(|family_id| self.store.family(family_id))
            .map(|family| family.spouse_ids().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Grandparent ids of an individual: one level of parent-of-parent.
    fn grandparents_of(&self, id: &str) -> FxHashSet<String> {
        self.parents_of(id)
            .iter()
            .flat_map(|parent| self.parents_of(parent))
            .collect()
    }

    /// All individuals reachable from `root` via the child relation.
    ///
    /// Worklist traversal with a visited set, so a record erroneously listed
    /// as its own descendant cannot loop forever.
    fn descendants_of(&self, root: &str) -> FxHashSet<String> {
        let mut visited: FxHashSet<String> = FxHashSet::default();
        let mut descendants: FxHashSet<String> = FxHashSet::default();
        let mut worklist = vec![root.to_string()];
        while let Some(id) = worklist.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            let Some(individual) = self.store.individual(&id) else {
                continue;
            };
            for family_id in &individual.spouse_in {
                let Some(family) = self.store.family(family_id) else {
                    continue;
                };
                for child_id in &family.child_ids {
                    descendants.insert(child_id.clone());
                    worklist.push(child_id.clone());
                }
            }
        }
        descendants
    }
}

/// Interval-overlap test for two marriages of the same spouse.
fn marriages_overlap(
    marriage: Option<NaiveDate>,
    end: Option<NaiveDate>,
    other_marriage: Option<NaiveDate>,
    other_end: Option<NaiveDate>,
    policy: BigamyPolicy,
) -> bool {
    match (end, other_end) {
        (Some(end), Some(other_end)) => {
            let (Some(marriage), Some(other_marriage)) = (marriage, other_marriage) else {
                return false;
            };
            (marriage < other_marriage && end > other_marriage)
                || (marriage > other_marriage && other_end > marriage)
        }
        (Some(end), None) => other_marriage.is_some_and(|other_marriage| end > other_marriage),
        (None, Some(other_end)) => marriage.is_some_and(|marriage| marriage < other_end),
        (None, None) => policy == BigamyPolicy::FlagAmbiguous,
    }
}
