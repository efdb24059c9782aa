use std::path::PathBuf;

use anyhow::Context;
use log::info;

use gedlint::config::ReportConfig;
use gedlint::parser::ingest_path;
use gedlint::report::{DatedEntry, Finding, Report};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => path = Some(PathBuf::from(other)),
        }
    }
    let path = path.context("usage: gedlint [--json] <file.ged>")?;

    info!("Reading GEDCOM records from {}", path.display());
    let mut report = ingest_path(&path, ReportConfig::default())?;
    info!(
        "Read {} individuals and {} families",
        report.individual_count(),
        report.family_count()
    );

    report.run_checks();

    if json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("[GEDCOM File Report]");

    println!("\nIndividuals:");
    for individual in report.individuals() {
        println!(
            "  {} {} ({}{})",
            individual.id,
            individual.label(),
            individual
                .birth_date
                .map_or_else(|| "birth unknown".to_string(), |d| d.to_string()),
            individual
                .death_date
                .map_or_else(String::new, |d| format!(" - {d}")),
        );
    }

    println!("\nFamilies:");
    for family in report.families() {
        println!(
            "  {} husband={} wife={} children={:?}",
            family.id,
            family.husband_id.as_deref().unwrap_or("NA"),
            family.wife_id.as_deref().unwrap_or("NA"),
            family.child_ids,
        );
    }

    print_findings("Errors", &report.errors);
    print_findings("Anomalies", &report.anomalies);
    print_listing("Upcoming Birthdays", &report.upcoming_birthdays);
    print_listing("Upcoming Anniversaries", &report.upcoming_anniversaries);
    print_listing("Recent Births", &report.recent_births);
    print_listing("Recent Deaths", &report.recent_deaths);

    println!("\nLiving Married:");
    for (id, families) in report.list_living_married() {
        println!("  {id} in {families:?}");
    }

    println!("\nSingle Over 30:");
    for id in report.list_single_over_30() {
        println!("  {id}");
    }
}

fn print_findings(title: &str, findings: &[Finding]) {
    println!("\n{title}:");
    for finding in findings {
        println!("  [{}] {}", finding.category, finding.message);
    }
}

fn print_listing(title: &str, entries: &[DatedEntry]) {
    println!("\n{title}:");
    for entry in entries {
        println!("  {} {}", entry.id, entry.date);
    }
}
