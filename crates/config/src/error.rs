// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for rule table loading and validation.

/// Errors that can occur while loading or validating a rule table.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading a rule document from disk failed.
    Io(String),

    /// The rule document is not valid JSON or does not match the
    /// expected document shape.
    Parse(String),

    /// The rule document declares no rules at all.
    EmptyTable,

    /// The same status appears in more than one rule.
    DuplicateStatus(String),

    /// A rule names a status outside the known vocabulary.
    UnknownStatus(String),

    /// A rule advances to a status that has no rule of its own.
    UnknownNextTarget {
        /// The status whose rule is dangling.
        status: String,
        /// The next status the rule points at.
        next: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => {
                write!(f, "Failed to read rule document: {msg}")
            }
            Self::Parse(msg) => {
                write!(f, "Failed to parse rule document: {msg}")
            }
            Self::EmptyTable => {
                write!(f, "Rule document declares no rules")
            }
            Self::DuplicateStatus(status) => {
                write!(f, "Duplicate rule for status '{status}'")
            }
            Self::UnknownStatus(status) => {
                write!(f, "Unknown status '{status}' in rule document")
            }
            Self::UnknownNextTarget { status, next } => {
                write!(f, "Rule for '{status}' advances to '{next}', which has no rule")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err: ConfigError = ConfigError::DuplicateStatus(String::from("TELE"));
        assert_eq!(err.to_string(), "Duplicate rule for status 'TELE'");

        let err: ConfigError = ConfigError::UnknownNextTarget {
            status: String::from("TELE"),
            next: String::from("EMOL"),
        };
        assert_eq!(
            err.to_string(),
            "Rule for 'TELE' advances to 'EMOL', which has no rule"
        );

        let err: ConfigError = ConfigError::EmptyTable;
        assert_eq!(err.to_string(), "Rule document declares no rules");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ConfigError = io_err.into();

        match err {
            ConfigError::Io(msg) => assert!(msg.contains("no such file")),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
