//! Referential-integrity and identity checks across the whole store.

use chrono::NaiveDate;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::report::{Finding, Report};

impl Report {
    /// Every family reference must resolve, and the referenced record must
    /// point back. Individuals are checked first, then families; one finding
    /// per broken direction.
    pub fn check_corresponding_entries(&mut self) {
        for individual in self.store.individuals() {
            if let Some(family_id) = individual.child_in.as_deref() {
                match self.store.family(family_id) {
                    None => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Family {family_id} specified in individual {} is not present in the family records",
                                individual.id
                            ),
                        ));
                    }
                    Some(family) if !family.child_ids.contains(&individual.id) => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Family {family_id} specified in individual {0} does not have {0} as a child",
                                individual.id
                            ),
                        ));
                    }
                    Some(_) => {}
                }
            }
            for family_id in &individual.spouse_in {
                match self.store.family(family_id) {
                    None => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Family {family_id} specified in individual {} is not present in the family records",
                                individual.id
                            ),
                        ));
                    }
                    Some(family)
                        if family.husband_id.as_deref() != Some(individual.id.as_str())
                            && family.wife_id.as_deref() != Some(individual.id.as_str()) =>
                    {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Family {family_id} specified in individual {0} does not have {0} as a spouse",
                                individual.id
                            ),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        for family in self.store.families() {
            for (spouse_id, role) in [
                (family.husband_id.as_deref(), "Husband"),
                (family.wife_id.as_deref(), "Wife"),
            ] {
                let Some(spouse_id) = spouse_id else { continue };
                match self.store.individual(spouse_id) {
                    None => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "{role} {spouse_id} specified in family {} is not present in the individual records",
                                family.id
                            ),
                        ));
                    }
                    Some(spouse) if !spouse.spouse_in.contains(&family.id) => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "{role} {spouse_id} specified in family {0} does not have {0} as a corresponding spousal family",
                                family.id
                            ),
                        ));
                    }
                    Some(_) => {}
                }
            }
            for child_id in &family.child_ids {
                match self.store.individual(child_id) {
                    None => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Child {child_id} specified in family {} is not present in the individual records",
                                family.id
                            ),
                        ));
                    }
                    Some(child) if child.child_in.as_deref() != Some(family.id.as_str()) => {
                        self.errors.push(Finding::new(
                            "Correspondence Error",
                            format!(
                                "Child {child_id} specified in family {0} does not have {0} as their childhood family",
                                family.id
                            ),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// No two individuals should share both a name and a birth date. One
    /// finding per colliding group, in first-seen order.
    pub fn check_unique_name_and_birth(&mut self) {
        let mut groups: FxHashMap<(&str, NaiveDate), Vec<&str>> = FxHashMap::default();
        let mut order: Vec<(&str, NaiveDate)> = Vec::new();
        for individual in self.store.individuals() {
            let (Some(name), Some(birth)) = (individual.name.as_deref(), individual.birth_date)
            else {
                continue;
            };
            let entry = groups.entry((name, birth)).or_default();
            if entry.is_empty() {
                order.push((name, birth));
            }
            entry.push(&individual.id);
        }
        for key in order {
            let ids = &groups[&key];
            if ids.len() > 1 {
                let (name, birth) = key;
                self.anomalies.push(Finding::new(
                    "Duplicate Name and Birthdate",
                    format!(
                        "{} share a name ({name}) and birthday ({birth})",
                        ids.iter().join(", ")
                    ),
                ));
            }
        }
    }
}
