// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation classification for statuses and company categories.
//!
//! Reports group statuses into families (all `REJE *` variants share one
//! color, and so on). Classification is exact match on the normalized
//! code first, then longest-prefix fallback so unknown sub-statuses like
//! `TELE XYZ` still land in their family, and a neutral bucket for
//! everything else. Classification never fails.

use crate::status::{StatusCode, normalize_status};
use serde::{Deserialize, Serialize};

/// Status family for presentation grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCategory {
    Tele,
    Emol,
    Emfo,
    Tefo,
    Quot,
    Meet,
    Prio,
    Cuso,
    Cupro,
    Cusd,
    Cugr,
    Selesai,
    Reje,
    /// Blank or unrecognized statuses.
    Unknown,
}

impl StatusCategory {
    /// Returns the family name as shown in report legends.
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
            Self::Reje => "REJE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A classified status ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    /// The family the status belongs to.
    pub category: StatusCategory,
    /// The normalized status text to print, `"-"` when blank.
    pub label: String,
}

/// Family prefixes in presentation order.
const FAMILY_PREFIXES: [(&str, StatusCategory); 13] = [
    ("TELE", StatusCategory::Tele),
    ("EMOL", StatusCategory::Emol),
    ("EMFO", StatusCategory::Emfo),
    ("TEFO", StatusCategory::Tefo),
    ("QUOT", StatusCategory::Quot),
    ("MEET", StatusCategory::Meet),
    ("PRIO", StatusCategory::Prio),
    ("CUSO", StatusCategory::Cuso),
    ("CUPRO", StatusCategory::Cupro),
    ("CUSD", StatusCategory::Cusd),
    ("CUGR", StatusCategory::Cugr),
    ("SELESAI", StatusCategory::Selesai),
    ("REJE", StatusCategory::Reje),
];

/// Maps a canonical code to its presentation family.
const fn family_of(code: StatusCode) -> StatusCategory {
    match code {
        StatusCode::Tele | StatusCode::TeleNa | StatusCode::TeleNotr | StatusCode::TeleCl => {
            StatusCategory::Tele
        }
        StatusCode::Emol => StatusCategory::Emol,
        StatusCode::Emfo => StatusCategory::Emfo,
        StatusCode::Tefo
        | StatusCode::TefoYr
        | StatusCode::TefoNa
        | StatusCode::TefoNotr
        | StatusCode::TefoCl
        | StatusCode::TefoNotu
        | StatusCode::TefoHadv
        | StatusCode::TefoWa => StatusCategory::Tefo,
        StatusCode::Quot => StatusCategory::Quot,
        StatusCode::Meet => StatusCategory::Meet,
        StatusCode::Prio => StatusCategory::Prio,
        StatusCode::Cuso => StatusCategory::Cuso,
        StatusCode::Cupro => StatusCategory::Cupro,
        StatusCode::Cusd => StatusCategory::Cusd,
        StatusCode::Cugr => StatusCategory::Cugr,
        StatusCode::Selesai => StatusCategory::Selesai,
        StatusCode::RejeNotu
        | StatusCode::RejeYr
        | StatusCode::RejeHadv
        | StatusCode::RejeHadc
        | StatusCode::RejeNoqu
        | StatusCode::RejeLm
        | StatusCode::RejePtof => StatusCategory::Reje,
    }
}

/// Classifies a raw status string for display.
///
/// An exact match on the canonical vocabulary wins; otherwise the
/// longest family prefix of the normalized string decides; otherwise
/// the status is `Unknown`. Blank input gets the `"-"` placeholder
/// label.
#[must_use]
pub fn classify_status(raw: &str) -> StatusBadge {
    let normalized = normalize_status(raw);

    if normalized.is_empty() {
        return StatusBadge {
            category: StatusCategory::Unknown,
            label: String::from("-"),
        };
    }

    if let Ok(code) = normalized.parse::<StatusCode>() {
        return StatusBadge {
            category: family_of(code),
            label: normalized,
        };
    }

    let mut best: Option<(usize, StatusCategory)> = None;
    for (prefix, category) in FAMILY_PREFIXES {
        if normalized.starts_with(prefix) {
            match best {
                Some((len, _)) if len >= prefix.len() => {}
                _ => best = Some((prefix.len(), category)),
            }
        }
    }

    StatusBadge {
        category: best.map_or(StatusCategory::Unknown, |(_, category)| category),
        label: normalized,
    }
}

/// Company category as entered by sales staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kategori {
    /// New client.
    #[serde(rename = "KLIEN BARU")]
    KlienBaru,
    /// Subscription customer.
    #[serde(rename = "LANGGANAN")]
    Langganan,
    /// Contract customer. The backend spells this both `KONTRAK` and
    /// `KLIEN KONTRAK`.
    #[serde(rename = "KONTRAK")]
    Kontrak,
    /// Anything else, including blank.
    #[serde(rename = "LAINNYA")]
    Lainnya,
}

impl Kategori {
    /// Returns the canonical spelling of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KlienBaru => "KLIEN BARU",
            Self::Langganan => "LANGGANAN",
            Self::Kontrak => "KONTRAK",
            Self::Lainnya => "LAINNYA",
        }
    }
}

/// Classifies a raw company category string.
///
/// Matching is exact on the normalized form; there is no prefix
/// fallback here because the category vocabulary is tiny and its
/// spellings do not nest.
#[must_use]
pub fn classify_kategori(raw: &str) -> Kategori {
    match normalize_status(raw).as_str() {
        "KLIEN BARU" => Kategori::KlienBaru,
        "LANGGANAN" => Kategori::Langganan,
        "KONTRAK" | "KLIEN KONTRAK" => Kategori::Kontrak,
        _ => Kategori::Lainnya,
    }
}
