// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::record_policy::RecordPolicyError;
use mplan_config::ConfigError;
use mplan_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A record was rejected by the acceptance policy.
    RecordPolicyViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The rule table configuration could not be loaded or is invalid.
    RuleConfig {
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::RecordPolicyViolation { message } => {
                write!(f, "Record policy violation: {message}")
            }
            Self::RuleConfig { message } => {
                write!(f, "Rule table configuration error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RecordPolicyError> for ApiError {
    fn from(err: RecordPolicyError) -> Self {
        Self::RecordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownStatusCode { code } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status code '{code}'"),
        },
        DomainError::DateParse { input, reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{input}': {reason}"),
        },
        DomainError::InvalidTimezone(zone) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Invalid timezone: {zone}"),
        },
    }
}

/// Translates a rule table configuration error into an API error.
///
/// All configuration failures surface as one variant; the underlying
/// message carries the detail.
#[must_use]
pub fn translate_config_error(err: ConfigError) -> ApiError {
    ApiError::RuleConfig {
        message: err.to_string(),
    }
}
