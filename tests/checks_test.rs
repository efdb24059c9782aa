#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use gedlint::config::{BigamyPolicy, ReportConfig};
    use gedlint::models::{Family, GedcomRecord, Individual, Sex};
    use gedlint::report::Report;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn test_report() -> Report {
        Report::with_run_date(ReportConfig::default(), date(2024, 1, 15))
    }

    fn individual(
        id: &str,
        name: Option<&str>,
        sex: Option<Sex>,
        birth: Option<NaiveDate>,
    ) -> Individual {
        let mut individual = Individual::new(id.to_string());
        individual.name = name.map(str::to_string);
        individual.sex = sex;
        individual.birth_date = birth;
        individual
    }

    fn family(id: &str, husband: Option<&str>, wife: Option<&str>, children: &[&str]) -> Family {
        let mut family = Family::new(id.to_string());
        family.husband_id = husband.map(str::to_string);
        family.wife_id = wife.map(str::to_string);
        family.child_ids = children.iter().map(|child| (*child).to_string()).collect();
        family
    }

    fn add(report: &mut Report, individual: Individual) {
        report.commit(GedcomRecord::Individual(individual));
    }

    fn add_family(report: &mut Report, family: Family) {
        report.commit(GedcomRecord::Family(family));
    }

    #[test]
    fn test_check_unique_id_suffixes_duplicates() {
        let mut report = test_report();

        let first = report.check_unique_id("a");
        assert_eq!(first, "a");
        add(&mut report, individual(&first, None, None, None));

        let second = report.check_unique_id("a");
        assert_eq!(second, "a (1)");
        add(&mut report, individual(&second, None, None, None));

        let third = report.check_unique_id("a");
        assert_eq!(third, "a (2)");
        add_family(&mut report, family(&third, None, None, &[]));

        let duplicates: Vec<_> = report
            .errors
            .iter()
            .filter(|finding| finding.category == "Duplicate IDs")
            .collect();
        assert_eq!(duplicates.len(), 2);
    }

    #[test]
    fn test_birth_before_marriage_passes_for_valid_couple() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Male), Some(date(1971, 2, 23))),
        );
        add(
            &mut report,
            individual("I2", None, Some(Sex::Female), Some(date(1967, 12, 28))),
        );
        let mut couple = family("F1", Some("I1"), Some("I2"), &[]);
        couple.marriage_date = Some(date(1989, 11, 26));
        add_family(&mut report, couple);

        report.check_birth_before_marriage();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_birth_after_marriage_is_an_error() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Male), Some(date(1971, 2, 23))),
        );
        add(
            &mut report,
            individual("I2", None, Some(Sex::Female), Some(date(1967, 12, 28))),
        );
        let mut couple = family("F1", Some("I1"), Some("I2"), &[]);
        couple.marriage_date = Some(date(1969, 11, 26));
        add_family(&mut report, couple);

        report.check_birth_before_marriage();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Birth After Marriage");
        assert_eq!(
            report.errors[0].message,
            "Birth of I1 (1971-02-23) occurred after their marriage (1969-11-26)"
        );
    }

    #[test]
    fn test_pure_checks_have_no_internal_deduplication() {
        let mut report = test_report();
        let mut deceased = individual("I1", None, None, Some(date(2000, 5, 1)));
        deceased.death_date = Some(date(1999, 1, 1));
        add(&mut report, deceased);

        report.check_birth_before_death();
        report.check_birth_before_death();
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_birth_after_death_is_an_error() {
        let mut report = test_report();
        let mut deceased = individual("I1", None, None, Some(date(2000, 5, 1)));
        deceased.death_date = Some(date(1999, 1, 1));
        add(&mut report, deceased);

        report.check_birth_before_death();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Birth After Death");
    }

    #[test]
    fn test_divorce_before_marriage_is_an_error() {
        let mut report = test_report();
        let mut couple = family("F1", None, None, &[]);
        couple.marriage_date = Some(date(2021, 1, 20));
        couple.divorce_date = Some(date(2019, 6, 30));
        add_family(&mut report, couple);

        report.check_marriage_before_divorce();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Divorce Before Marriage");
        assert!(report.errors[0].message.contains("2019-06-30"));
        assert!(report.errors[0].message.contains("2021-01-20"));
    }

    #[test]
    fn test_divorce_without_marriage_is_an_error() {
        let mut report = test_report();
        let mut broken = family("F1", None, None, &[]);
        broken.divorce_date = Some(date(2019, 6, 30));
        add_family(&mut report, broken);

        report.check_marriage_before_divorce();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Divorce Without Marriage");
    }

    #[test]
    fn test_marriage_after_death_is_an_error() {
        let mut report = test_report();
        let mut widow = individual("I1", None, Some(Sex::Male), Some(date(1950, 1, 1)));
        widow.death_date = Some(date(1990, 1, 1));
        add(&mut report, widow);
        let mut couple = family("F1", Some("I1"), None, &[]);
        couple.marriage_date = Some(date(1995, 6, 1));
        add_family(&mut report, couple);

        report.check_marriage_before_death();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Marriage After Death");
    }

    #[test]
    fn test_divorce_after_death_is_an_error() {
        let mut report = test_report();
        let mut spouse = individual("I1", None, Some(Sex::Male), Some(date(1950, 1, 1)));
        spouse.death_date = Some(date(1990, 1, 1));
        add(&mut report, spouse);
        let mut couple = family("F1", Some("I1"), None, &[]);
        couple.marriage_date = Some(date(1970, 1, 1));
        couple.divorce_date = Some(date(1992, 1, 1));
        add_family(&mut report, couple);

        report.check_divorce_before_death();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Divorce After Death");
        assert!(report.errors[0].message.contains("husband"));
    }

    #[test]
    fn test_over_150_years_old_is_an_anomaly() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, None, Some(date(1850, 1, 1))),
        );
        report.check_max_age();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Over 150 Years Old");
    }

    #[test]
    fn test_age_of_deceased_stops_at_death() {
        let mut report = test_report();
        let mut ancestor = individual("I1", None, None, Some(date(1800, 1, 1)));
        ancestor.death_date = Some(date(1850, 1, 1));
        add(&mut report, ancestor);
        report.check_max_age();
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_marriage_before_14_is_an_error() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Male), Some(date(2000, 1, 15))),
        );
        let mut early = family("F1", Some("I1"), None, &[]);
        early.marriage_date = Some(date(2014, 1, 14));
        add_family(&mut report, early);

        report.check_marriage_after_14();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Marriage Before 14");
    }

    #[test]
    fn test_marriage_at_exactly_14_is_allowed() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Male), Some(date(2000, 1, 15))),
        );
        let mut couple = family("F1", Some("I1"), None, &[]);
        couple.marriage_date = Some(date(2014, 1, 15));
        add_family(&mut report, couple);

        report.check_marriage_after_14();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_birth_before_parents_marriage_is_an_anomaly() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I3", None, None, Some(date(2007, 1, 29))),
        );
        let mut parents = family("F1", None, None, &["I3"]);
        parents.marriage_date = Some(date(2008, 4, 3));
        add_family(&mut report, parents);

        report.check_birth_around_parents_marriage();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Birth Before Parents' Marriage");
        assert!(report.anomalies[0].message.contains("2007-01-29"));
    }

    #[test]
    fn test_birth_long_after_parents_divorce_is_an_anomaly() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I3", None, None, Some(date(2007, 1, 29))),
        );
        let mut parents = family("F1", None, None, &["I3"]);
        parents.marriage_date = Some(date(2004, 4, 3));
        parents.divorce_date = Some(date(2006, 4, 3));
        add_family(&mut report, parents);

        report.check_birth_around_parents_marriage();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Birth After Parents' Divorce");
    }

    #[test]
    fn test_birth_after_mother_death_is_an_error() {
        let mut report = test_report();
        let mut mother = individual("I2", None, Some(Sex::Female), Some(date(1983, 4, 8)));
        mother.death_date = Some(date(2007, 1, 28));
        add(&mut report, mother);
        add(
            &mut report,
            individual("I3", None, None, Some(date(2007, 1, 29))),
        );
        add_family(&mut report, family("F1", None, Some("I2"), &["I3"]));

        report.check_birth_after_parent_death();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Birth After Parent's Death");
        assert!(report.errors[0].message.contains("mother"));
    }

    #[test]
    fn test_birth_within_gestation_of_father_death_is_allowed() {
        let mut report = test_report();
        let mut father = individual("I1", None, Some(Sex::Male), Some(date(1970, 11, 2)));
        father.death_date = Some(date(2006, 10, 1));
        add(&mut report, father);
        add(
            &mut report,
            individual("I3", None, None, Some(date(2007, 1, 29))),
        );
        add_family(&mut report, family("F1", Some("I1"), None, &["I3"]));

        report.check_birth_after_parent_death();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_birth_long_after_father_death_is_an_error() {
        let mut report = test_report();
        let mut father = individual("I1", None, Some(Sex::Male), Some(date(1970, 11, 2)));
        father.death_date = Some(date(2006, 1, 29));
        add(&mut report, father);
        add(
            &mut report,
            individual("I3", None, None, Some(date(2007, 1, 29))),
        );
        add_family(&mut report, family("F1", Some("I1"), None, &["I3"]));

        report.check_birth_after_parent_death();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("father"));
    }

    #[test]
    fn test_parent_too_old_lists_affected_children() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Male), Some(date(1900, 1, 1))),
        );
        add(
            &mut report,
            individual("I3", None, None, Some(date(1990, 1, 1))),
        );
        add(
            &mut report,
            individual("I4", None, None, Some(date(1970, 1, 1))),
        );
        add_family(&mut report, family("F1", Some("I1"), None, &["I3", "I4"]));

        report.check_parent_child_age_gap();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Parent Too Old");
        assert!(report.anomalies[0].message.contains("Father"));
        assert!(report.anomalies[0].message.contains("I3"));
        assert!(!report.anomalies[0].message.contains("I4"));
    }

    #[test]
    fn test_more_than_five_same_day_births_is_an_anomaly() {
        for (count, expected) in [(5usize, 0usize), (6, 1)] {
            let mut report = test_report();
            let ids: Vec<String> = (0..count).map(|i| format!("C{i}")).collect();
            for id in &ids {
                add(&mut report, individual(id, None, None, Some(date(2000, 6, 1))));
            }
            let children: Vec<&str> = ids.iter().map(String::as_str).collect();
            add_family(&mut report, family("F1", None, None, &children));

            report.check_multiple_births();
            assert_eq!(report.anomalies.len(), expected);
        }
    }

    #[test]
    fn test_fifteen_children_is_an_anomaly() {
        for (count, expected) in [(14usize, 0usize), (15, 1)] {
            let mut report = test_report();
            let ids: Vec<String> = (0..count).map(|i| format!("C{i}")).collect();
            let children: Vec<&str> = ids.iter().map(String::as_str).collect();
            add_family(&mut report, family("F1", None, None, &children));

            report.check_sibling_count();
            assert_eq!(report.anomalies.len(), expected);
            if expected == 1 {
                assert_eq!(report.anomalies[0].category, "Too Many Siblings");
                assert_eq!(
                    report.anomalies[0].message,
                    "Family F1 has 15 or more children"
                );
            }
        }
    }

    #[test]
    fn test_differing_male_surnames_is_an_anomaly() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", Some("John /Doe/"), Some(Sex::Male), None),
        );
        add(
            &mut report,
            individual("I3", Some("Tim /Smith/"), Some(Sex::Male), None),
        );
        add(
            &mut report,
            individual("I4", Some("Sue /Smith/"), Some(Sex::Female), None),
        );
        add_family(&mut report, family("F1", Some("I1"), None, &["I3", "I4"]));

        report.check_male_surnames();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Differing Male Surnames");
        assert!(report.anomalies[0].message.contains("Doe"));
        assert!(report.anomalies[0].message.contains("Smith"));
    }

    #[test]
    fn test_matching_male_surnames_pass() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", Some("John /Doe/"), Some(Sex::Male), None),
        );
        add(
            &mut report,
            individual("I3", Some("Tim /Doe/"), Some(Sex::Male), None),
        );
        add_family(&mut report, family("F1", Some("I1"), None, &["I3"]));

        report.check_male_surnames();
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_spouse_roles_require_matching_sex() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", None, Some(Sex::Female), None),
        );
        add(&mut report, individual("I2", None, Some(Sex::Male), None));
        add_family(&mut report, family("F1", Some("I1"), Some("I2"), &[]));

        report.check_spouse_roles();
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].category, "Incorrect Sex");
        assert!(report.errors[0].message.contains("Husband"));
        assert!(report.errors[1].message.contains("Wife"));
    }

    #[test]
    fn test_bigamy_with_overlapping_marriages() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string(), "F2".to_string()];
        add(&mut report, husband);
        let mut first = family("F1", Some("I1"), None, &[]);
        first.marriage_date = Some(date(1990, 1, 1));
        first.divorce_date = Some(date(1996, 1, 1));
        add_family(&mut report, first);
        let mut second = family("F2", Some("I1"), None, &[]);
        second.marriage_date = Some(date(1995, 1, 1));
        second.divorce_date = Some(date(1997, 1, 1));
        add_family(&mut report, second);

        report.check_bigamy();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Bigamy");
        assert_eq!(
            report.errors[0].message,
            "Spouse details are: I1 and families are F1 and F2"
        );
    }

    #[test]
    fn test_bigamy_with_sequential_marriages_passes() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string(), "F2".to_string()];
        add(&mut report, husband);
        let mut first = family("F1", Some("I1"), None, &[]);
        first.marriage_date = Some(date(1990, 1, 1));
        first.divorce_date = Some(date(1994, 1, 1));
        add_family(&mut report, first);
        let mut second = family("F2", Some("I1"), None, &[]);
        second.marriage_date = Some(date(1995, 1, 1));
        second.divorce_date = Some(date(1997, 1, 1));
        add_family(&mut report, second);

        report.check_bigamy();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_bigamy_policy_controls_unknown_end_dates() {
        for (policy, expected) in [
            (BigamyPolicy::FlagAmbiguous, 1usize),
            (BigamyPolicy::RequireEvidence, 0),
        ] {
            let config = ReportConfig {
                bigamy_policy: policy,
                ..ReportConfig::default()
            };
            let mut report = Report::with_run_date(config, date(2024, 1, 15));
            let mut husband = individual("I1", None, Some(Sex::Male), None);
            husband.spouse_in = vec!["F1".to_string(), "F2".to_string()];
            add(&mut report, husband);
            let mut first = family("F1", Some("I1"), None, &[]);
            first.marriage_date = Some(date(1990, 1, 1));
            add_family(&mut report, first);
            let mut second = family("F2", Some("I1"), None, &[]);
            second.marriage_date = Some(date(1995, 1, 1));
            add_family(&mut report, second);

            report.check_bigamy();
            assert_eq!(report.errors.len(), expected);
        }
    }

    #[test]
    fn test_bigamy_backfills_inferred_divorce_dates() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string()];
        husband.death_date = Some(date(1990, 5, 5));
        add(&mut report, husband);
        let mut widowed = family("F1", Some("I1"), None, &[]);
        widowed.marriage_date = Some(date(1980, 1, 1));
        add_family(&mut report, widowed);

        report.check_bigamy();
        assert_eq!(
            report.store().family("F1").unwrap().divorce_date,
            Some(date(1990, 5, 5))
        );
    }

    #[test]
    fn test_marriage_to_descendant_is_an_anomaly() {
        let mut report = test_report();
        let mut patriarch = individual("I1", Some("John /Doe/"), Some(Sex::Male), None);
        patriarch.spouse_in = vec!["F1".to_string()];
        add(&mut report, patriarch);
        add(
            &mut report,
            individual("I2", Some("Jane /Smith/"), Some(Sex::Female), None),
        );
        let mut child = individual("I3", Some("Child /Doe/"), Some(Sex::Female), None);
        child.child_in = Some("F1".to_string());
        child.spouse_in = vec!["F1".to_string()];
        add(&mut report, child);
        add_family(&mut report, family("F1", Some("I1"), Some("I3"), &["I3"]));

        report.check_marriage_to_descendant();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Marriage to Descendant");
        assert_eq!(
            report.anomalies[0].message,
            "I1 is married to descendant, I3."
        );
    }

    #[test]
    fn test_ordinary_marriage_is_not_a_descendant_marriage() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string()];
        add(&mut report, husband);
        let mut wife = individual("I2", None, Some(Sex::Female), None);
        wife.spouse_in = vec!["F1".to_string()];
        add(&mut report, wife);
        let mut child = individual("I3", None, Some(Sex::Female), None);
        child.child_in = Some("F1".to_string());
        add(&mut report, child);
        add_family(&mut report, family("F1", Some("I1"), Some("I2"), &["I3"]));

        report.check_marriage_to_descendant();
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_sibling_marriage_is_an_anomaly() {
        let mut report = test_report();
        let mut brother = individual("I4", None, Some(Sex::Male), None);
        brother.child_in = Some("F1".to_string());
        brother.spouse_in = vec!["F2".to_string()];
        add(&mut report, brother);
        let mut sister = individual("I3", None, Some(Sex::Female), None);
        sister.child_in = Some("F1".to_string());
        sister.spouse_in = vec!["F2".to_string()];
        add(&mut report, sister);
        add_family(&mut report, family("F1", None, None, &["I3", "I4"]));
        add_family(&mut report, family("F2", Some("I4"), Some("I3"), &[]));

        report.check_sibling_marriage();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Sibling Marriage");
        assert_eq!(
            report.anomalies[0].message,
            "Siblings I4 and I3 should not marry."
        );
    }

    #[test]
    fn test_first_cousin_marriage_is_an_anomaly() {
        let mut report = test_report();
        add(&mut report, individual("G1", None, Some(Sex::Male), None));
        add(&mut report, individual("G2", None, Some(Sex::Female), None));
        let mut john = individual("I1", None, Some(Sex::Male), None);
        john.child_in = Some("F1".to_string());
        add(&mut report, john);
        add(&mut report, individual("I2", None, Some(Sex::Female), None));
        let mut alice = individual("I3", None, Some(Sex::Female), None);
        alice.child_in = Some("F2".to_string());
        add(&mut report, alice);
        let mut mike = individual("I4", None, Some(Sex::Male), None);
        mike.child_in = Some("F1".to_string());
        add(&mut report, mike);
        add(&mut report, individual("I5", None, Some(Sex::Female), None));
        let mut tyler = individual("I6", None, Some(Sex::Male), None);
        tyler.child_in = Some("F3".to_string());
        add(&mut report, tyler);

        add_family(&mut report, family("F1", Some("G1"), Some("G2"), &["I1", "I4"]));
        add_family(&mut report, family("F2", Some("I1"), Some("I2"), &["I3"]));
        add_family(&mut report, family("F3", Some("I4"), Some("I5"), &["I6"]));
        add_family(&mut report, family("F4", Some("I6"), Some("I3"), &[]));

        report.check_first_cousin_marriage();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "First Cousins Marrying");
        assert_eq!(
            report.anomalies[0].message,
            "First cousins are getting married in Family F4"
        );
    }

    #[test]
    fn test_unrelated_spouses_are_not_cousins() {
        let mut report = test_report();
        add(&mut report, individual("G1", None, Some(Sex::Male), None));
        add(&mut report, individual("G2", None, Some(Sex::Female), None));
        let mut john = individual("I1", None, Some(Sex::Male), None);
        john.child_in = Some("F1".to_string());
        add(&mut report, john);
        add(&mut report, individual("I2", None, Some(Sex::Female), None));
        let mut alice = individual("I3", None, Some(Sex::Female), None);
        alice.child_in = Some("F2".to_string());
        add(&mut report, alice);
        // Tyler has no recorded parents this time.
        add(&mut report, individual("I6", None, Some(Sex::Male), None));

        add_family(&mut report, family("F1", Some("G1"), Some("G2"), &["I1"]));
        add_family(&mut report, family("F2", Some("I1"), Some("I2"), &["I3"]));
        add_family(&mut report, family("F4", Some("I6"), Some("I3"), &[]));

        report.check_first_cousin_marriage();
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_corresponding_entries_all_consistent() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string()];
        add(&mut report, husband);
        let mut wife = individual("I2", None, Some(Sex::Female), None);
        wife.spouse_in = vec!["F1".to_string()];
        add(&mut report, wife);
        let mut child = individual("I3", None, Some(Sex::Male), None);
        child.child_in = Some("F1".to_string());
        add(&mut report, child);
        add_family(&mut report, family("F1", Some("I1"), Some("I2"), &["I3"]));

        report.check_corresponding_entries();
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_corresponding_entries_missing_husband_record() {
        let mut report = test_report();
        let mut wife = individual("I2", None, Some(Sex::Female), None);
        wife.spouse_in = vec!["F1".to_string()];
        add(&mut report, wife);
        add_family(&mut report, family("F1", Some("I1"), Some("I2"), &[]));

        report.check_corresponding_entries();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].category, "Correspondence Error");
        assert_eq!(
            report.errors[0].message,
            "Husband I1 specified in family F1 is not present in the individual records"
        );
    }

    #[test]
    fn test_corresponding_entries_missing_family_record() {
        let mut report = test_report();
        for id in ["I1", "I2"] {
            let mut spouse = individual(id, None, None, None);
            spouse.spouse_in = vec!["F1".to_string()];
            add(&mut report, spouse);
        }
        for id in ["I3", "I4"] {
            let mut child = individual(id, None, None, None);
            child.child_in = Some("F1".to_string());
            add(&mut report, child);
        }

        report.check_corresponding_entries();
        assert_eq!(report.errors.len(), 4);
        assert_eq!(
            report.errors[0].message,
            "Family F1 specified in individual I1 is not present in the family records"
        );
        assert_eq!(
            report.errors[3].message,
            "Family F1 specified in individual I4 is not present in the family records"
        );
    }

    #[test]
    fn test_corresponding_entries_mismatched_child() {
        let mut report = test_report();
        let mut husband = individual("I1", None, Some(Sex::Male), None);
        husband.spouse_in = vec!["F1".to_string()];
        add(&mut report, husband);
        let mut wife = individual("I2", None, Some(Sex::Female), None);
        wife.spouse_in = vec!["F1".to_string()];
        add(&mut report, wife);
        let mut stray = individual("I3", None, Some(Sex::Male), None);
        stray.child_in = Some("F1".to_string());
        add(&mut report, stray);
        let mut listed = individual("I4", None, Some(Sex::Male), None);
        listed.child_in = Some("F1".to_string());
        add(&mut report, listed);
        add_family(&mut report, family("F1", Some("I1"), Some("I2"), &["I4"]));
        add_family(&mut report, family("F2", None, None, &["I3"]));

        report.check_corresponding_entries();
        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0].message,
            "Family F1 specified in individual I3 does not have I3 as a child"
        );
        assert_eq!(
            report.errors[1].message,
            "Child I3 specified in family F2 does not have F2 as their childhood family"
        );
    }

    #[test]
    fn test_shared_name_and_birthdate_is_one_grouped_anomaly() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", Some("Carl /Johnson/"), Some(Sex::Male), Some(date(1990, 4, 3))),
        );
        add(
            &mut report,
            individual("I2", Some("Carl /Johnson/"), Some(Sex::Male), Some(date(1990, 4, 3))),
        );
        add(
            &mut report,
            individual("I3", Some("Sarah /Johnson/"), Some(Sex::Female), Some(date(1997, 5, 4))),
        );

        report.check_unique_name_and_birth();
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].category, "Duplicate Name and Birthdate");
        assert_eq!(
            report.anomalies[0].message,
            "I1, I2 share a name (Carl /Johnson/) and birthday (1990-04-03)"
        );
    }

    #[test]
    fn test_siblings_sharing_first_names_group_per_name() {
        let mut report = test_report();
        add(
            &mut report,
            individual("I1", Some("Carl /Johnson/"), Some(Sex::Male), Some(date(1990, 4, 3))),
        );
        add(
            &mut report,
            individual("I2", Some("Carl /Johnson/"), Some(Sex::Male), Some(date(1990, 4, 3))),
        );
        add(
            &mut report,
            individual("I3", Some("Sarah /Johnson/"), Some(Sex::Female), Some(date(1997, 5, 4))),
        );
        add(
            &mut report,
            individual("I4", Some("Sarah /Johnson/"), Some(Sex::Female), Some(date(1997, 5, 4))),
        );
        add_family(&mut report, family("F1", None, None, &["I1", "I2", "I3", "I4"]));

        report.check_sibling_first_names();
        assert_eq!(report.anomalies.len(), 2);
        assert_eq!(report.anomalies[0].category, "Siblings Shared Name");
        assert_eq!(
            report.anomalies[0].message,
            "Siblings [\"I1\", \"I2\"] share a first name (Carl)"
        );
        assert_eq!(
            report.anomalies[1].message,
            "Siblings [\"I3\", \"I4\"] share a first name (Sarah)"
        );
    }
}
