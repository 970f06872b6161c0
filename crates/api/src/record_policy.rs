// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record acceptance policy.
//!
//! This module decides which submitted records are accepted for
//! evaluation before the resolver sees them.

use thiserror::Error;

use crate::request_response::EntryRecord;
use mplan_domain::StatusCode;

/// Record policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordPolicyError {
    /// The record has no company code.
    #[error("Record has no company code")]
    MissingCompanyCode,

    /// The record has no status.
    #[error("Record for '{company_code}' has no status")]
    MissingStatus { company_code: String },

    /// The record has no last-update date.
    #[error("Record for '{company_code}' has no last update date")]
    MissingLastUpdate { company_code: String },

    /// The record's status is outside the known vocabulary.
    #[error("Record for '{company_code}' has unknown status '{status}'")]
    UnknownStatus { company_code: String, status: String },
}

/// Record policy configuration.
///
/// The resolver treats unmapped statuses as a value, so the default
/// policy accepts them and lets them surface in report output. Strict
/// mode rejects them here instead, before evaluation.
#[derive(Debug, Default)]
pub struct RecordPolicy {
    /// Reject statuses that do not normalize to a known status code.
    pub require_known_status: bool,
}

impl RecordPolicy {
    /// A policy that additionally rejects unknown statuses.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_known_status: true,
        }
    }

    /// Validates a record against the policy.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to validate
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank, or if strict mode
    /// is enabled and the status is outside the known vocabulary.
    pub fn validate(&self, record: &EntryRecord) -> Result<(), RecordPolicyError> {
        if record.company_code.trim().is_empty() {
            return Err(RecordPolicyError::MissingCompanyCode);
        }

        if record.status.trim().is_empty() {
            return Err(RecordPolicyError::MissingStatus {
                company_code: record.company_code.clone(),
            });
        }

        if record.last_update.trim().is_empty() {
            return Err(RecordPolicyError::MissingLastUpdate {
                company_code: record.company_code.clone(),
            });
        }

        if self.require_known_status && StatusCode::from_raw(&record.status).is_err() {
            return Err(RecordPolicyError::UnknownStatus {
                company_code: record.company_code.clone(),
                status: record.status.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn create_test_record() -> EntryRecord {
        EntryRecord {
            company_code: String::from("C-0017"),
            company_name: Some(String::from("PT Maju Bersama")),
            kategori: Some(String::from("LANGGANAN")),
            status: String::from("TELE"),
            last_update: String::from("2025-01-06"),
        }
    }

    #[test]
    fn test_default_policy_accepts_valid_record() {
        let policy: RecordPolicy = RecordPolicy::default();
        let record: EntryRecord = create_test_record();
        assert!(policy.validate(&record).is_ok());
    }

    #[test]
    fn test_blank_company_code_rejected() {
        let policy: RecordPolicy = RecordPolicy::default();
        let mut record: EntryRecord = create_test_record();
        record.company_code = String::from("   ");
        assert_eq!(
            policy.validate(&record),
            Err(RecordPolicyError::MissingCompanyCode)
        );
    }

    #[test]
    fn test_blank_status_rejected() {
        let policy: RecordPolicy = RecordPolicy::default();
        let mut record: EntryRecord = create_test_record();
        record.status = String::new();
        assert_eq!(
            policy.validate(&record),
            Err(RecordPolicyError::MissingStatus {
                company_code: String::from("C-0017"),
            })
        );
    }

    #[test]
    fn test_blank_last_update_rejected() {
        let policy: RecordPolicy = RecordPolicy::default();
        let mut record: EntryRecord = create_test_record();
        record.last_update = String::new();
        assert_eq!(
            policy.validate(&record),
            Err(RecordPolicyError::MissingLastUpdate {
                company_code: String::from("C-0017"),
            })
        );
    }

    #[test]
    fn test_default_policy_accepts_unknown_status() {
        let policy: RecordPolicy = RecordPolicy::default();
        let mut record: EntryRecord = create_test_record();
        record.status = String::from("STATUS BARU");
        assert!(policy.validate(&record).is_ok());
    }

    #[test]
    fn test_strict_policy_rejects_unknown_status() {
        let policy: RecordPolicy = RecordPolicy::strict();
        let mut record: EntryRecord = create_test_record();
        record.status = String::from("STATUS BARU");
        assert_eq!(
            policy.validate(&record),
            Err(RecordPolicyError::UnknownStatus {
                company_code: String::from("C-0017"),
                status: String::from("STATUS BARU"),
            })
        );
    }

    #[test]
    fn test_strict_policy_accepts_normalizable_status() {
        let policy: RecordPolicy = RecordPolicy::strict();
        let mut record: EntryRecord = create_test_record();
        record.status = String::from("  tele na ");
        assert!(policy.validate(&record).is_ok());
    }

    #[test]
    fn test_unknown_status_error_display() {
        let err: RecordPolicyError = RecordPolicyError::UnknownStatus {
            company_code: String::from("C-0017"),
            status: String::from("XYZ"),
        };
        assert_eq!(
            format!("{err}"),
            "Record for 'C-0017' has unknown status 'XYZ'"
        );
    }
}
