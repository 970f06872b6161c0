// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for pipeline evaluation and reporting.

use chrono::NaiveDate;
use mplan_config::RuleTableSource;
use mplan_domain::{
    NextStep, RuleTable, classify_kategori, classify_status, compute_next_step, format_date_id,
    is_on_track, is_overdue, parse_iso_date,
};
use std::collections::BTreeMap;

use crate::error::{ApiError, translate_config_error, translate_domain_error};
use crate::record_policy::RecordPolicy;
use crate::request_response::{
    EntryRecord, EntryReportRow, NextStepInfo, NextStepOutcome, PipelineReport, ReportSummary,
    UpdateRecord,
};

/// Loads a rule table from a configuration source.
///
/// # Arguments
///
/// * `source` - The source to load from (a built-in preset or a file)
///
/// # Returns
///
/// The validated rule table.
///
/// # Errors
///
/// Returns an error if the source cannot be read or fails validation.
pub fn load_rule_table(source: &RuleTableSource) -> Result<RuleTable, ApiError> {
    mplan_config::load(source).map_err(translate_config_error)
}

/// Resolves the next step for a single status and last-update date.
///
/// An unknown status resolves to the unmapped outcome rather than
/// failing; only an unparseable date is an error.
///
/// # Arguments
///
/// * `table` - The active rule table
/// * `raw_status` - The status as entered
/// * `last_update` - The last-update date (ISO 8601)
///
/// # Returns
///
/// The resolved next step with display fields populated.
///
/// # Errors
///
/// Returns an error if the last-update date cannot be parsed.
pub fn resolve_next_step(
    table: &RuleTable,
    raw_status: &str,
    last_update: &str,
) -> Result<NextStepInfo, ApiError> {
    let last_update: NaiveDate = parse_iso_date(last_update).map_err(translate_domain_error)?;
    Ok(next_step_info(compute_next_step(
        table,
        raw_status,
        last_update,
    )))
}

/// Evaluates a single entry into a report row.
///
/// The row carries the resolved next step, the overdue flag against
/// `today`, and the presentation fields (badges and Indonesian dates)
/// the dashboard renders.
///
/// # Arguments
///
/// * `table` - The active rule table
/// * `policy` - The record acceptance policy
/// * `record` - The entry to evaluate
/// * `today` - The evaluation date
///
/// # Returns
///
/// The evaluated report row.
///
/// # Errors
///
/// Returns an error if the record is rejected by the policy or its
/// last-update date cannot be parsed.
pub fn evaluate_entry(
    table: &RuleTable,
    policy: &RecordPolicy,
    record: &EntryRecord,
    today: NaiveDate,
) -> Result<EntryReportRow, ApiError> {
    policy.validate(record)?;

    let last_update: NaiveDate =
        parse_iso_date(&record.last_update).map_err(|err| ApiError::InvalidInput {
            field: String::from("last_update"),
            message: format!("Record for '{}': {err}", record.company_code),
        })?;

    let step: NextStep = compute_next_step(table, &record.status, last_update);

    let company_name: String = match record.company_name {
        Some(ref name) if !name.trim().is_empty() => name.clone(),
        _ => String::from("-"),
    };

    Ok(EntryReportRow {
        company_code: record.company_code.clone(),
        company_name,
        kategori: classify_kategori(record.kategori.as_deref().unwrap_or("")),
        status: record.status.clone(),
        status_badge: classify_status(&record.status),
        last_update: record.last_update.clone(),
        last_update_display: format_date_id(last_update),
        next_step: next_step_info(step),
        overdue: is_overdue(step.due_date(), today),
        on_track: is_on_track(step.due_date(), today),
    })
}

/// Builds a pipeline report over a set of entries.
///
/// Rows keep the input order. Evaluation is all-or-nothing; a single
/// bad record fails the report so partial output is never mistaken for
/// a complete one.
///
/// # Arguments
///
/// * `table` - The active rule table
/// * `policy` - The record acceptance policy
/// * `records` - The entries to evaluate
/// * `today` - The evaluation date
///
/// # Returns
///
/// The report with one row per entry and aggregate counts.
///
/// # Errors
///
/// Returns an error if any record is rejected by the policy or has an
/// unparseable last-update date.
pub fn build_report(
    table: &RuleTable,
    policy: &RecordPolicy,
    records: &[EntryRecord],
    today: NaiveDate,
) -> Result<PipelineReport, ApiError> {
    let mut summary: ReportSummary = ReportSummary {
        total: records.len(),
        advancing: 0,
        terminal: 0,
        unmapped: 0,
        overdue: 0,
    };

    let mut rows: Vec<EntryReportRow> = Vec::with_capacity(records.len());
    for record in records {
        let row: EntryReportRow = evaluate_entry(table, policy, record, today)?;
        match row.next_step.outcome {
            NextStepOutcome::Advance => summary.advancing += 1,
            NextStepOutcome::Terminal => summary.terminal += 1,
            NextStepOutcome::Unmapped => summary.unmapped += 1,
        }
        if row.overdue {
            summary.overdue += 1;
        }
        rows.push(row);
    }

    tracing::info!(
        "Evaluated {} entries against rule table '{}'",
        summary.total,
        table.name()
    );

    Ok(PipelineReport {
        rule_table: table.name().to_string(),
        today: today.to_string(),
        rows,
        summary,
    })
}

/// Collapses an update timeline to the latest entry per company.
///
/// When two updates for the same company carry the same date, the row
/// that appears later in the export wins. The result is sorted by
/// company code.
///
/// # Arguments
///
/// * `updates` - The timeline rows, one per historical update
///
/// # Returns
///
/// One entry per company, carrying the fields of its winning update.
#[must_use]
pub fn latest_entries(updates: &[UpdateRecord]) -> Vec<EntryRecord> {
    let mut latest: BTreeMap<&str, &UpdateRecord> = BTreeMap::new();
    for update in updates {
        match latest.get(update.company_code.as_str()) {
            Some(current) if update.update_date < current.update_date => {}
            _ => {
                latest.insert(update.company_code.as_str(), update);
            }
        }
    }

    latest
        .into_values()
        .map(|update| EntryRecord {
            company_code: update.company_code.clone(),
            company_name: update.company_name.clone(),
            kategori: update.kategori.clone(),
            status: update.status.clone(),
            last_update: update.update_date.clone(),
        })
        .collect()
}

/// Converts a resolver outcome into its boundary representation.
fn next_step_info(step: NextStep) -> NextStepInfo {
    match step {
        NextStep::Advance {
            due_date,
            next_status,
        } => NextStepInfo {
            outcome: NextStepOutcome::Advance,
            next_status: Some(next_status),
            due_date: Some(due_date.to_string()),
            due_date_display: Some(format_date_id(due_date)),
        },
        NextStep::Terminal => NextStepInfo {
            outcome: NextStepOutcome::Terminal,
            next_status: None,
            due_date: None,
            due_date_display: None,
        },
        NextStep::Unmapped => NextStepInfo {
            outcome: NextStepOutcome::Unmapped,
            next_status: None,
            due_date: None,
            due_date_display: None,
        },
    }
}
