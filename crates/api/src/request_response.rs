// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross this boundary as ISO 8601 strings and are parsed at the
//! edge. Typed dates stay internal to the domain crate.

use mplan_domain::{Kategori, StatusBadge, StatusCode};

/// A pipeline entry as submitted for evaluation.
///
/// This is the one-row-per-company shape. Raw exports that carry the
/// full update history are collapsed to it first via `latest_entries`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryRecord {
    /// The unique company identifier.
    pub company_code: String,
    /// The company display name, if recorded.
    pub company_name: Option<String>,
    /// The raw category text, if recorded.
    pub kategori: Option<String>,
    /// The current status as entered by sales staff.
    pub status: String,
    /// The date of the most recent update (ISO 8601).
    pub last_update: String,
}

/// A single row from an update timeline export.
///
/// Exports carry one row per historical update, so a company appears
/// once per status change rather than once overall.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateRecord {
    /// The unique company identifier.
    pub company_code: String,
    /// The company display name, if recorded.
    pub company_name: Option<String>,
    /// The raw category text, if recorded.
    pub kategori: Option<String>,
    /// The status recorded by this update.
    pub status: String,
    /// The date this update was recorded (ISO 8601).
    pub update_date: String,
}

/// The resolver outcome for an entry, as presented at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextStepOutcome {
    /// The entry advances to a concrete next status by a due date.
    Advance,
    /// The entry has no automatic progression.
    Terminal,
    /// The entry's status is outside the active rule table.
    Unmapped,
}

impl NextStepOutcome {
    /// Returns the lowercase name used in report output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Terminal => "terminal",
            Self::Unmapped => "unmapped",
        }
    }
}

/// The resolved next step for an entry.
///
/// The three optional fields are populated only for the advance outcome.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NextStepInfo {
    /// Which of the three outcomes applies.
    pub outcome: NextStepOutcome,
    /// The status the entry moves to next.
    pub next_status: Option<StatusCode>,
    /// The transition deadline (ISO 8601).
    pub due_date: Option<String>,
    /// The transition deadline in Indonesian display form.
    pub due_date_display: Option<String>,
}

/// One evaluated entry in a pipeline report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryReportRow {
    /// The unique company identifier.
    pub company_code: String,
    /// The company display name, `"-"` when not recorded.
    pub company_name: String,
    /// The category classification.
    pub kategori: Kategori,
    /// The status as entered.
    pub status: String,
    /// The presentation badge for the status.
    pub status_badge: StatusBadge,
    /// The date of the most recent update (ISO 8601).
    pub last_update: String,
    /// The most recent update in Indonesian display form.
    pub last_update_display: String,
    /// The resolved next step.
    pub next_step: NextStepInfo,
    /// True when the entry's transition deadline has passed.
    pub overdue: bool,
    /// True when the entry has a deadline that has not yet passed.
    pub on_track: bool,
}

/// Aggregate counts for a pipeline report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportSummary {
    /// The number of entries evaluated.
    pub total: usize,
    /// Entries with a scheduled next transition.
    pub advancing: usize,
    /// Entries with no automatic progression.
    pub terminal: usize,
    /// Entries whose status is outside the rule table.
    pub unmapped: usize,
    /// Entries whose transition deadline has passed.
    pub overdue: usize,
}

/// A full pipeline report for a set of entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineReport {
    /// The name of the rule table the report was evaluated against.
    pub rule_table: String,
    /// The evaluation date (ISO 8601).
    pub today: String,
    /// One evaluated row per entry, in input order.
    pub rows: Vec<EntryReportRow>,
    /// Aggregate counts over the rows.
    pub summary: ReportSummary,
}
