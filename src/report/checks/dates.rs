//! Date-ordering checks: lifecycle events of individuals and families must
//! fall in a plausible order, and no recorded date may lie in the future.

use crate::models::whole_years_between;
use crate::report::{Finding, Report};

impl Report {
    /// Every stored date must be on or before the run date.
    pub fn check_future_dates(&mut self) {
        let run_date = self.run_date;
        let mut dates = Vec::new();
        for individual in self.store.individuals() {
            dates.extend(individual.birth_date);
            dates.extend(individual.death_date);
        }
        for family in self.store.families() {
            dates.extend(family.marriage_date);
            dates.extend(family.divorce_date);
        }
        for date in dates {
            if date > run_date {
                self.errors.push(Finding::new(
                    "Future Date",
                    format!("Date that has yet to happen ({date}) has been detected"),
                ));
            }
        }
    }

    /// A spouse must be born before their family's marriage date.
    pub fn check_birth_before_marriage(&mut self) {
        for family in self.store.families() {
            let Some(marriage) = family.marriage_date else {
                continue;
            };
            for spouse_id in family.spouse_ids() {
                let Some(spouse) = self.store.individual(spouse_id) else {
                    continue;
                };
                if let Some(birth) = spouse.birth_date {
                    if birth > marriage {
                        self.errors.push(Finding::new(
                            "Birth After Marriage",
                            format!(
                                "Birth of {} ({birth}) occurred after their marriage ({marriage})",
                                spouse.id
                            ),
                        ));
                    }
                }
            }
        }
    }

    /// An individual must be born before they die.
    pub fn check_birth_before_death(&mut self) {
        for individual in self.store.individuals() {
            if let (Some(birth), Some(death)) = (individual.birth_date, individual.death_date) {
                if death < birth {
                    self.errors.push(Finding::new(
                        "Birth After Death",
                        format!(
                            "Birth of {} ({birth}) occurs after their death ({death})",
                            individual.id
                        ),
                    ));
                }
            }
        }
    }

    /// A divorce needs a marriage, and must come after it.
    pub fn check_marriage_before_divorce(&mut self) {
        for family in self.store.families() {
            match (family.marriage_date, family.divorce_date) {
                (Some(marriage), Some(divorce)) if divorce < marriage => {
                    self.errors.push(Finding::new(
                        "Divorce Before Marriage",
                        format!(
                            "Divorce of {} ({divorce}) occurs before their marriage ({marriage})",
                            family.id
                        ),
                    ));
                }
                (None, Some(divorce)) => {
                    self.errors.push(Finding::new(
                        "Divorce Without Marriage",
                        format!(
                            "Divorce of {} ({divorce}) occurs without a recorded marriage date",
                            family.id
                        ),
                    ));
                }
                _ => {}
            }
        }
    }

    /// Neither spouse may die before the marriage takes place.
    pub fn check_marriage_before_death(&mut self) {
        for family in self.store.families() {
            let Some(marriage) = family.marriage_date else {
                continue;
            };
            for spouse_id in family.spouse_ids() {
                let Some(spouse) = self.store.individual(spouse_id) else {
                    continue;
                };
                if let Some(death) = spouse.death_date {
                    if death < marriage {
                        self.errors.push(Finding::new(
                            "Marriage After Death",
                            format!(
                                "Marriage of {} ({marriage}) occurs after the death of {} ({death})",
                                family.id,
                                spouse.label()
                            ),
                        ));
                    }
                }
            }
        }
    }

    /// A divorce cannot postdate the death of either spouse.
    pub fn check_divorce_before_death(&mut self) {
        for family in self.store.families() {
            let Some(divorce) = family.divorce_date else {
                continue;
            };
            for (spouse_id, role) in [
                (family.husband_id.as_deref(), "husband"),
                (family.wife_id.as_deref(), "wife"),
            ] {
                let Some(spouse) = spouse_id.and_then(|id| self.store.individual(id)) else {
                    continue;
                };
                if let Some(death) = spouse.death_date {
                    if divorce > death {
                        self.errors.push(Finding::new(
                            "Divorce After Death",
                            format!(
                                "Divorce for family {} ({divorce}) occurs after the death of the {role} ({death})",
                                family.id
                            ),
                        ));
                    }
                }
            }
        }
    }

    /// No individual should be older than 150 years.
    pub fn check_max_age(&mut self) {
        let run_date = self.run_date;
        for individual in self.store.individuals() {
            if let Some(age) = individual.age(run_date) {
                if age > 150 {
                    self.anomalies.push(Finding::new(
                        "Over 150 Years Old",
                        format!("{} is over 150 years old ({age} years old)", individual.id),
                    ));
                }
            }
        }
    }

    /// Both spouses must be at least 14 years old at the marriage date.
    pub fn check_marriage_after_14(&mut self) {
        for family in self.store.families() {
            let Some(marriage) = family.marriage_date else {
                continue;
            };
            for spouse_id in family.spouse_ids() {
                let Some(spouse) = self.store.individual(spouse_id) else {
                    continue;
                };
                let Some(birth) = spouse.birth_date else {
                    continue;
                };
                if whole_years_between(birth, marriage) < 14 {
                    self.errors.push(Finding::new(
                        "Marriage Before 14",
                        format!(
                            "Marriage for {} ({marriage}) occurs before 14 ({birth})",
                            spouse.id
                        ),
                    ));
                }
            }
        }
    }
}
