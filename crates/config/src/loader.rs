// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule document loading and validation.
//!
//! External rule tables are plain JSON documents:
//!
//! ```json
//! {
//!   "name": "custom",
//!   "rules": [
//!     { "status": "TELE", "delay_business_days": 1, "next": "EMOL" },
//!     { "status": "TELE NOTR", "delay_business_days": 0, "next": null }
//!   ]
//! }
//! ```
//!
//! Documents are validated before the engine sees them: every status must
//! be in the known vocabulary, no status may appear twice, and every
//! `next` target must have a rule of its own.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use mplan_domain::{RuleTable, StatusCode, StatusRule};

use crate::error::ConfigError;
use crate::source::RuleTableSource;

/// JSON shape of an external rule document.
#[derive(Debug, Deserialize)]
struct RuleTableDocument {
    name: String,
    rules: Vec<RuleDocument>,
}

/// One rule row in an external rule document.
#[derive(Debug, Deserialize)]
struct RuleDocument {
    status: String,
    delay_business_days: u32,
    next: Option<String>,
}

/// Resolves a rule table from a source.
///
/// The built-in presets are returned directly; file sources are read,
/// parsed, and validated.
///
/// # Arguments
///
/// * `source` - The rule table source to resolve
///
/// # Errors
///
/// Returns an error if a file source cannot be read, parsed, or validated.
pub fn load(source: &RuleTableSource) -> Result<RuleTable, ConfigError> {
    match source {
        RuleTableSource::Canonical => Ok(RuleTable::canonical()),
        RuleTableSource::LegacyCyclic => Ok(RuleTable::legacy_cyclic()),
        RuleTableSource::File(path) => load_file(path),
    }
}

/// Loads and validates a rule table from a JSON document on disk.
///
/// # Arguments
///
/// * `path` - The path of the rule document
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid rule
/// document, or fails validation.
pub fn load_file(path: &Path) -> Result<RuleTable, ConfigError> {
    info!("Loading rule table from: {}", path.display());

    let contents: String = fs::read_to_string(path)?;
    let table: RuleTable = parse_document(&contents)?;

    info!(
        "Loaded rule table '{}' with {} rules",
        table.name(),
        table.len()
    );
    Ok(table)
}

/// Parses and validates a JSON rule document.
///
/// Status names in the document are normalized the same way the resolver
/// normalizes record statuses, so `"tele na"` and `"TELE NA"` name the
/// same rule.
///
/// # Arguments
///
/// * `contents` - The JSON text of the rule document
///
/// # Errors
///
/// Returns an error if the document is not valid JSON, declares no rules,
/// names an unknown status, repeats a status, or advances to a status
/// that has no rule of its own.
pub fn parse_document(contents: &str) -> Result<RuleTable, ConfigError> {
    let document: RuleTableDocument = serde_json::from_str(contents)?;
    build_table(document)
}

fn build_table(document: RuleTableDocument) -> Result<RuleTable, ConfigError> {
    let RuleTableDocument { name, rules } = document;

    if rules.is_empty() {
        return Err(ConfigError::EmptyTable);
    }

    let mut table: RuleTable = RuleTable::new(name);
    for rule in rules {
        let status: StatusCode = StatusCode::from_raw(&rule.status)
            .map_err(|_| ConfigError::UnknownStatus(rule.status.clone()))?;
        let next: Option<StatusCode> = match rule.next {
            Some(ref target) => Some(
                StatusCode::from_raw(target)
                    .map_err(|_| ConfigError::UnknownStatus(target.clone()))?,
            ),
            None => None,
        };

        let previous: Option<StatusRule> =
            table.insert(status, StatusRule::new(rule.delay_business_days, next));
        if previous.is_some() {
            return Err(ConfigError::DuplicateStatus(rule.status));
        }
    }

    verify_next_targets(&table)?;
    Ok(table)
}

fn verify_next_targets(table: &RuleTable) -> Result<(), ConfigError> {
    for (status, rule) in table.iter() {
        if let Some(next) = rule.next
            && table.rule_for(next).is_none()
        {
            return Err(ConfigError::UnknownNextTarget {
                status: status.as_str().to_string(),
                next: next.as_str().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_load_directly() {
        let canonical: RuleTable = load(&RuleTableSource::Canonical).unwrap();
        assert_eq!(canonical.name(), "canonical");
        assert_eq!(canonical.len(), 29);

        let legacy: RuleTable = load(&RuleTableSource::LegacyCyclic).unwrap();
        assert_eq!(legacy.name(), "legacy-cyclic");
        assert_eq!(legacy.len(), 12);
    }

    #[test]
    fn test_valid_document_parses() {
        let contents: &str = r#"{
            "name": "short",
            "rules": [
                { "status": "TELE", "delay_business_days": 1, "next": "EMOL" },
                { "status": "EMOL", "delay_business_days": 2, "next": null }
            ]
        }"#;

        let table: RuleTable = parse_document(contents).unwrap();
        assert_eq!(table.name(), "short");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rule_for(StatusCode::Tele),
            Some(StatusRule::new(1, Some(StatusCode::Emol)))
        );
        assert_eq!(
            table.rule_for(StatusCode::Emol),
            Some(StatusRule::new(2, None))
        );
    }

    #[test]
    fn test_status_names_are_normalized() {
        let contents: &str = r#"{
            "name": "messy",
            "rules": [
                { "status": "  tele na ", "delay_business_days": 20, "next": "tele" },
                { "status": "Tele", "delay_business_days": 1, "next": null }
            ]
        }"#;

        let table: RuleTable = parse_document(contents).unwrap();
        assert_eq!(
            table.rule_for(StatusCode::TeleNa),
            Some(StatusRule::new(20, Some(StatusCode::Tele)))
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let contents: &str = r#"{
            "name": "bad",
            "rules": [
                { "status": "FOOBAR", "delay_business_days": 1, "next": null }
            ]
        }"#;

        match parse_document(contents) {
            Err(ConfigError::UnknownStatus(status)) => assert_eq!(status, "FOOBAR"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_next_name_rejected() {
        let contents: &str = r#"{
            "name": "bad",
            "rules": [
                { "status": "TELE", "delay_business_days": 1, "next": "NOPE" }
            ]
        }"#;

        match parse_document(contents) {
            Err(ConfigError::UnknownStatus(status)) => assert_eq!(status, "NOPE"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_next_target_rejected() {
        // EMOL is in the vocabulary but this table has no rule for it.
        let contents: &str = r#"{
            "name": "bad",
            "rules": [
                { "status": "TELE", "delay_business_days": 1, "next": "EMOL" }
            ]
        }"#;

        match parse_document(contents) {
            Err(ConfigError::UnknownNextTarget { status, next }) => {
                assert_eq!(status, "TELE");
                assert_eq!(next, "EMOL");
            }
            other => panic!("expected UnknownNextTarget, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_status_rejected() {
        let contents: &str = r#"{
            "name": "bad",
            "rules": [
                { "status": "TELE", "delay_business_days": 1, "next": null },
                { "status": "tele.", "delay_business_days": 2, "next": null }
            ]
        }"#;

        // The second row normalizes to the same code as the first.
        match parse_document(contents) {
            Err(ConfigError::DuplicateStatus(status)) => assert_eq!(status, "tele."),
            other => panic!("expected DuplicateStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_rule_list_rejected() {
        let contents: &str = r#"{ "name": "empty", "rules": [] }"#;

        match parse_document(contents) {
            Err(ConfigError::EmptyTable) => {}
            other => panic!("expected EmptyTable, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        match parse_document("{ not json") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_rejected() {
        // Rule rows must spell out the delay.
        let contents: &str = r#"{
            "name": "bad",
            "rules": [
                { "status": "TELE", "next": null }
            ]
        }"#;

        match parse_document(contents) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
