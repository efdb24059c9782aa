//! Line-oriented GEDCOM ingest.
//!
//! [`IngestSession`] consumes one line at a time, keeps the record currently
//! being assembled plus the pending date target, and commits finished records
//! into the report's store whenever a level-0 boundary arrives. A malformed
//! line invalidates itself only; the session stays usable for the next line.

pub mod date;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::ReportConfig;
use crate::error::{GedcomError, LineError};
use crate::models::record::GedcomRecord;
use crate::models::types::DateTarget;
use crate::models::{Family, Individual};
use crate::report::Report;

pub use date::parse_date;

/// Level-0 tags that only annotate the file and carry no record data
const ANNOTATION_TAGS: [&str; 3] = ["HEAD", "TRLR", "NOTE"];

/// Stateful one-pass reader that fills a [`Report`]
#[derive(Debug)]
pub struct IngestSession {
    report: Report,
    current: Option<GedcomRecord>,
    pending_date: Option<DateTarget>,
}

impl IngestSession {
    /// Create a session reporting against today's date
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self {
            report: Report::new(config),
            current: None,
            pending_date: None,
        }
    }

    /// Create a session with a fixed run date, for reproducible reports
    #[must_use]
    pub fn with_run_date(config: ReportConfig, run_date: NaiveDate) -> Self {
        Self {
            report: Report::with_run_date(config, run_date),
            current: None,
            pending_date: None,
        }
    }

    /// Process a single raw input line.
    pub fn process_line(&mut self, raw: &str) -> Result<(), LineError> {
        let line = raw.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.splitn(3, ' ').collect();
        if fields.len() <= 1 {
            return Err(LineError::TooFewFields);
        }
        match fields[0] {
            "0" => self.open_record(&fields),
            "1" => self.apply_field(&fields),
            "2" => self.apply_date(&fields),
            level => Err(LineError::InvalidLevel(level.to_string())),
        }
    }

    /// Read every line from `reader`, logging and skipping malformed lines.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if let Err(err) = self.process_line(&line) {
                warn!("line {}: {err}", number + 1);
            }
        }
        Ok(())
    }

    /// Commit any still-open record and hand back the populated report.
    #[must_use]
    pub fn finish(mut self) -> Report {
        self.commit_current();
        self.report
    }

    fn commit_current(&mut self) {
        if let Some(record) = self.current.take() {
            debug!("committing {} record {}", record.kind(), record.id());
            self.report.commit(record);
        }
    }

    fn open_record(&mut self, fields: &[&str]) -> Result<(), LineError> {
        let tag = fields[1];
        if ANNOTATION_TAGS.contains(&tag) {
            return Ok(());
        }
        match fields.get(2).copied() {
            Some("INDI") => {
                // Commit the previous record before the id check so the new
                // id is resolved against everything already stored.
                self.commit_current();
                let id = self.report.check_unique_id(tag);
                self.current = Some(GedcomRecord::Individual(Individual::new(id)));
                Ok(())
            }
            Some("FAM") => {
                self.commit_current();
                let id = self.report.check_unique_id(tag);
                self.current = Some(GedcomRecord::Family(Family::new(id)));
                Ok(())
            }
            _ => Err(LineError::InvalidTopLevelTag),
        }
    }

    fn apply_field(&mut self, fields: &[&str]) -> Result<(), LineError> {
        let Some(record) = self.current.as_mut() else {
            return Err(LineError::NoOpenRecord);
        };
        let tag = fields[1];
        if let Some(target) = DateTarget::from_tag(tag) {
            self.pending_date = Some(target);
            return Ok(());
        }
        let value = fields
            .get(2)
            .copied()
            .ok_or_else(|| LineError::MissingValue(tag.to_string()))?;
        record.set_field(tag, value)
    }

    fn apply_date(&mut self, fields: &[&str]) -> Result<(), LineError> {
        // The pending target is consumed whatever happens on this line.
        let pending = self.pending_date.take();
        if fields[1] != "DATE" {
            return Err(LineError::InvalidDateTag);
        }
        let value = fields.get(2).copied().ok_or(LineError::MissingDateValue)?;
        let record = self.current.as_mut().ok_or(LineError::NoOpenRecord)?;
        let target = pending.ok_or(LineError::NoPendingDate)?;
        match date::parse_date(value) {
            Ok(parsed) => record.set_date(parsed, target),
            Err(err) => {
                // A bad date degrades the field to absent instead of losing
                // the whole record.
                self.report.add_invalid_date(&err);
                Ok(())
            }
        }
    }
}

/// Ingest a GEDCOM file from disk. I/O failures abort the whole run; they
/// are the only errors this function returns.
pub fn ingest_path(path: &Path, config: ReportConfig) -> Result<Report, GedcomError> {
    let file = File::open(path).map_err(|source| GedcomError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut session = IngestSession::new(config);
    session
        .ingest(BufReader::new(file))
        .map_err(|source| GedcomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(session.finish())
}
