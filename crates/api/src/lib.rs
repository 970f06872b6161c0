// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the MPLAN Sales Pipeline.
//!
//! This crate sits between callers and the domain rules. Entries come
//! in as DTOs with ISO 8601 string dates, pass the record acceptance
//! policy, and are evaluated against the active rule table. Domain and
//! configuration errors are translated before they reach the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod record_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_config_error, translate_domain_error};
pub use handlers::{
    build_report, evaluate_entry, latest_entries, load_rule_table, resolve_next_step,
};
pub use record_policy::{RecordPolicy, RecordPolicyError};
pub use request_response::{
    EntryRecord, EntryReportRow, NextStepInfo, NextStepOutcome, PipelineReport, ReportSummary,
    UpdateRecord,
};
