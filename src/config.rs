//! Configuration for a validation run.

/// Policy for the bigamy check when a marriage has no recoverable end date
/// (no explicit divorce and no recorded spouse death).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BigamyPolicy {
    /// Two marriages whose end dates are both unknown are treated as
    /// overlapping and flagged.
    #[default]
    FlagAmbiguous,
    /// Only flag when a known end date demonstrably overlaps the other
    /// family's marriage date.
    RequireEvidence,
}

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Day window for the recent-birth/death and upcoming listings
    pub window_days: i64,
    /// End-date policy for the bigamy check
    pub bigamy_policy: BigamyPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            bigamy_policy: BigamyPolicy::default(),
        }
    }
}
