// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pipeline status vocabulary and input normalization.
//!
//! Status values arrive from the backend as free-form strings entered by
//! sales staff. Normalization makes lookup insensitive to case, stray
//! whitespace, and periods; the `StatusCode` enum is the closed canonical
//! vocabulary behind those strings.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalizes a raw status string to its canonical spelling.
///
/// Uppercases, strips all periods, then collapses whitespace runs to a
/// single space and trims the ends.
///
/// Periods are stripped before whitespace is collapsed so that inputs
/// like `"TELE . NA"` cannot leave a double space behind; this ordering
/// makes the function idempotent.
#[must_use]
pub fn normalize_status(raw: &str) -> String {
    let cleaned = raw.to_uppercase().replace('.', "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical status codes of the MPLAN sales pipeline.
///
/// This is a closed set. Raw strings that normalize to something outside
/// it are handled as unmapped by the resolver, never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusCode {
    // Main pipeline sequence, in funnel order
    #[serde(rename = "TELE")]
    Tele,
    #[serde(rename = "EMOL")]
    Emol,
    #[serde(rename = "EMFO")]
    Emfo,
    #[serde(rename = "TEFO")]
    Tefo,
    #[serde(rename = "QUOT")]
    Quot,
    #[serde(rename = "MEET")]
    Meet,
    #[serde(rename = "PRIO")]
    Prio,
    #[serde(rename = "CUSO")]
    Cuso,
    #[serde(rename = "CUPRO")]
    Cupro,
    #[serde(rename = "CUSD")]
    Cusd,
    #[serde(rename = "CUGR")]
    Cugr,
    #[serde(rename = "SELESAI")]
    Selesai,
    // Telemarketing outcomes
    #[serde(rename = "TELE NA")]
    TeleNa,
    #[serde(rename = "TELE NOTR")]
    TeleNotr,
    #[serde(rename = "TELE CL")]
    TeleCl,
    // Follow-up outcomes
    #[serde(rename = "TEFO YR")]
    TefoYr,
    #[serde(rename = "TEFO NA")]
    TefoNa,
    #[serde(rename = "TEFO NOTR")]
    TefoNotr,
    #[serde(rename = "TEFO CL")]
    TefoCl,
    #[serde(rename = "TEFO NOTU")]
    TefoNotu,
    #[serde(rename = "TEFO HADV")]
    TefoHadv,
    #[serde(rename = "TEFO WA")]
    TefoWa,
    // Rejection outcomes
    #[serde(rename = "REJE NOTU")]
    RejeNotu,
    #[serde(rename = "REJE YR")]
    RejeYr,
    #[serde(rename = "REJE HADV")]
    RejeHadv,
    #[serde(rename = "REJE HADC")]
    RejeHadc,
    #[serde(rename = "REJE NOQU")]
    RejeNoqu,
    #[serde(rename = "REJE LM")]
    RejeLm,
    #[serde(rename = "REJE PTOF")]
    RejePtof,
}

impl StatusCode {
    /// Returns the canonical spelling of the status code.
    ///
    /// This is the form stored by the backend and shown on reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tele => "TELE",
            Self::Emol => "EMOL",
            Self::Emfo => "EMFO",
            Self::Tefo => "TEFO",
            Self::Quot => "QUOT",
            Self::Meet => "MEET",
            Self::Prio => "PRIO",
            Self::Cuso => "CUSO",
            Self::Cupro => "CUPRO",
            Self::Cusd => "CUSD",
            Self::Cugr => "CUGR",
            Self::Selesai => "SELESAI",
            Self::TeleNa => "TELE NA",
            Self::TeleNotr => "TELE NOTR",
            Self::TeleCl => "TELE CL",
            Self::TefoYr => "TEFO YR",
            Self::TefoNa => "TEFO NA",
            Self::TefoNotr => "TEFO NOTR",
            Self::TefoCl => "TEFO CL",
            Self::TefoNotu => "TEFO NOTU",
            Self::TefoHadv => "TEFO HADV",
            Self::TefoWa => "TEFO WA",
            Self::RejeNotu => "REJE NOTU",
            Self::RejeYr => "REJE YR",
            Self::RejeHadv => "REJE HADV",
            Self::RejeHadc => "REJE HADC",
            Self::RejeNoqu => "REJE NOQU",
            Self::RejeLm => "REJE LM",
            Self::RejePtof => "REJE PTOF",
        }
    }

    /// Parses a status code from its canonical spelling.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatusCode` if the string is not a
    /// canonical status spelling.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "TELE" => Ok(Self::Tele),
            "EMOL" => Ok(Self::Emol),
            "EMFO" => Ok(Self::Emfo),
            "TEFO" => Ok(Self::Tefo),
            "QUOT" => Ok(Self::Quot),
            "MEET" => Ok(Self::Meet),
            "PRIO" => Ok(Self::Prio),
            "CUSO" => Ok(Self::Cuso),
            "CUPRO" => Ok(Self::Cupro),
            "CUSD" => Ok(Self::Cusd),
            "CUGR" => Ok(Self::Cugr),
            "SELESAI" => Ok(Self::Selesai),
            "TELE NA" => Ok(Self::TeleNa),
            "TELE NOTR" => Ok(Self::TeleNotr),
            "TELE CL" => Ok(Self::TeleCl),
            "TEFO YR" => Ok(Self::TefoYr),
            "TEFO NA" => Ok(Self::TefoNa),
            "TEFO NOTR" => Ok(Self::TefoNotr),
            "TEFO CL" => Ok(Self::TefoCl),
            "TEFO NOTU" => Ok(Self::TefoNotu),
            "TEFO HADV" => Ok(Self::TefoHadv),
            "TEFO WA" => Ok(Self::TefoWa),
            "REJE NOTU" => Ok(Self::RejeNotu),
            "REJE YR" => Ok(Self::RejeYr),
            "REJE HADV" => Ok(Self::RejeHadv),
            "REJE HADC" => Ok(Self::RejeHadc),
            "REJE NOQU" => Ok(Self::RejeNoqu),
            "REJE LM" => Ok(Self::RejeLm),
            "REJE PTOF" => Ok(Self::RejePtof),
            _ => Err(DomainError::UnknownStatusCode {
                code: s.to_string(),
            }),
        }
    }

    /// Parses a raw status string, normalizing it first.
    ///
    /// This is the entry point for backend data, where casing, spacing,
    /// and punctuation vary with whoever typed the update.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatusCode` if the normalized string
    /// is not in the canonical vocabulary.
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        Self::parse_str(&normalize_status(raw))
    }
}

impl FromStr for StatusCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
