// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for error translation at the API boundary.

use crate::{
    ApiError, RecordPolicyError, load_rule_table, translate_config_error, translate_domain_error,
};
use mplan_config::{ConfigError, RuleTableSource};
use mplan_domain::{DomainError, RuleTable};
use std::path::PathBuf;

#[test]
fn test_date_parse_error_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::DateParse {
        input: String::from("31-31-2025"),
        reason: String::from("input is out of range"),
    });

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { field, message } = err {
        assert_eq!(field, "date");
        assert!(message.contains("31-31-2025"));
    }
}

#[test]
fn test_unknown_status_error_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::UnknownStatusCode {
        code: String::from("XYZ"),
    });

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { field, message } = err {
        assert_eq!(field, "status");
        assert!(message.contains("XYZ"));
    }
}

#[test]
fn test_timezone_error_translates_to_invalid_input() {
    let err: ApiError =
        translate_domain_error(DomainError::InvalidTimezone(String::from("Mars/Olympus")));

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { field, .. } = err {
        assert_eq!(field, "timezone");
    }
}

#[test]
fn test_config_error_translates_to_rule_config() {
    let err: ApiError = translate_config_error(ConfigError::EmptyTable);

    assert_eq!(
        err,
        ApiError::RuleConfig {
            message: String::from("Rule document declares no rules"),
        }
    );
}

#[test]
fn test_record_policy_error_converts() {
    let err: ApiError = ApiError::from(RecordPolicyError::MissingCompanyCode);

    assert_eq!(
        err,
        ApiError::RecordPolicyViolation {
            message: String::from("Record has no company code"),
        }
    );
}

#[test]
fn test_load_rule_table_presets() {
    let canonical: RuleTable = load_rule_table(&RuleTableSource::Canonical).unwrap();
    assert_eq!(canonical.name(), "canonical");
    assert_eq!(canonical.len(), 29);

    let legacy: RuleTable = load_rule_table(&RuleTableSource::LegacyCyclic).unwrap();
    assert_eq!(legacy.name(), "legacy-cyclic");
    assert_eq!(legacy.len(), 12);
}

#[test]
fn test_load_rule_table_missing_file() {
    let source: RuleTableSource =
        RuleTableSource::File(PathBuf::from("/nonexistent/rules/table.json"));

    let result: Result<RuleTable, ApiError> = load_rule_table(&source);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ApiError::RuleConfig { .. }));
}

#[test]
fn test_api_error_display() {
    let err1: ApiError = ApiError::InvalidInput {
        field: String::from("last_update"),
        message: String::from("bad date"),
    };
    assert_eq!(
        format!("{err1}"),
        "Invalid input for field 'last_update': bad date"
    );

    let err2: ApiError = ApiError::RecordPolicyViolation {
        message: String::from("no status"),
    };
    assert_eq!(format!("{err2}"), "Record policy violation: no status");

    let err3: ApiError = ApiError::RuleConfig {
        message: String::from("duplicate rule"),
    };
    assert_eq!(
        format!("{err3}"),
        "Rule table configuration error: duplicate rule"
    );

    let err4: ApiError = ApiError::Internal {
        message: String::from("unexpected"),
    };
    assert_eq!(format!("{err4}"), "Internal error: unexpected");
}
