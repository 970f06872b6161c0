// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Status code is not part of the pipeline vocabulary.
    ///
    /// Raised only at strict boundaries (rule table validation, explicit
    /// parsing). The next-step resolver maps unknown codes to the unmapped
    /// outcome instead, which is a value and not an error.
    UnknownStatusCode {
        /// The normalized status string that failed to parse.
        code: String,
    },
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        input: String,
        /// The parsing error message.
        reason: String,
    },
    /// Timezone identifier is not a valid IANA zone name.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatusCode { code } => {
                write!(f, "Unknown status code '{code}'")
            }
            Self::DateParse { input, reason } => {
                write!(f, "Failed to parse date '{input}': {reason}")
            }
            Self::InvalidTimezone(zone) => {
                write!(f, "Invalid timezone: {zone}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
