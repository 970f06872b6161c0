// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule table source selection.

use std::path::PathBuf;

/// Where a rule table comes from.
///
/// The two presets are compiled in; everything else is treated as a path
/// to a JSON rule document. A file that happens to be named like a preset
/// keyword can be selected with an explicit path prefix (`./canonical`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTableSource {
    /// The built-in canonical table.
    Canonical,
    /// The built-in legacy cyclic chain.
    LegacyCyclic,
    /// A JSON rule document on disk.
    File(PathBuf),
}

impl std::str::FromStr for RuleTableSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "canonical" => Self::Canonical,
            "legacy-cyclic" => Self::LegacyCyclic,
            other => Self::File(PathBuf::from(other)),
        })
    }
}

impl std::fmt::Display for RuleTableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::LegacyCyclic => write!(f, "legacy-cyclic"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
