// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status transition rule tables.
//!
//! A rule table maps each status code to a delay in business days and an
//! optional next status. Two tables ship built in:
//!
//! - The canonical table, the authoritative transition graph with named
//!   dead ends (`TELE NOTR`, the `REJE` family, and so on).
//! - The legacy cyclic table, the older 12-step chain that loops from
//!   `SELESAI` back to `TELE`.
//!
//! The two graphs genuinely disagree (canonical advances `SELESAI` to
//! `TEFO`; the legacy chain advances it to `TELE`), so they are never
//! merged. Callers pick one table and stay on it.

use crate::status::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single transition rule: how long an entry may sit in a status and
/// where it goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRule {
    /// Allowed dwell time in business days before the next step is due.
    pub delay_business_days: u32,
    /// The status the entry should advance to, if any.
    pub next: Option<StatusCode>,
}

impl StatusRule {
    /// Creates a rule from a delay and an optional next status.
    #[must_use]
    pub const fn new(delay_business_days: u32, next: Option<StatusCode>) -> Self {
        Self {
            delay_business_days,
            next,
        }
    }

    /// Returns true if this rule ends the automatic progression.
    ///
    /// A zero delay and a missing next status both mean terminal; the
    /// backend data uses them interchangeably and the resolver honors
    /// either.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.delay_business_days == 0 || self.next.is_none()
    }
}

/// An immutable status transition table.
///
/// Keys are canonical status codes; lookup of a code the table does not
/// know returns `None` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    name: String,
    rules: BTreeMap<StatusCode, StatusRule>,
}

impl RuleTable {
    /// Creates an empty table with the given display name.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            rules: BTreeMap::new(),
        }
    }

    /// The table's display name, used in logs and report headers.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a rule, returning the previous rule for the code if one
    /// was already present.
    pub fn insert(&mut self, code: StatusCode, rule: StatusRule) -> Option<StatusRule> {
        self.rules.insert(code, rule)
    }

    /// Looks up the rule for a status code.
    #[must_use]
    pub fn rule_for(&self, code: StatusCode) -> Option<StatusRule> {
        self.rules.get(&code).copied()
    }

    /// Returns the number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in status code order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, StatusRule)> + '_ {
        self.rules.iter().map(|(code, rule)| (*code, *rule))
    }

    /// The authoritative transition table.
    ///
    /// Delays and targets mirror the production rule set, including the
    /// retry paths (`TELE NA` and `TEFO NA` re-queue to `TELE` after 20
    /// business days) and the dead ends (zero delay, no next status).
    #[must_use]
    pub fn canonical() -> Self {
        let mut table = Self::new(String::from("canonical"));

        table.insert(StatusCode::TeleNa, StatusRule::new(20, Some(StatusCode::Tele)));
        table.insert(StatusCode::TeleNotr, StatusRule::new(0, None));
        table.insert(StatusCode::TeleCl, StatusRule::new(0, None));
        table.insert(StatusCode::Tele, StatusRule::new(1, Some(StatusCode::Emol)));
        table.insert(StatusCode::Emol, StatusRule::new(1, Some(StatusCode::Emfo)));
        table.insert(StatusCode::Emfo, StatusRule::new(2, Some(StatusCode::Tefo)));
        table.insert(StatusCode::Tefo, StatusRule::new(1, Some(StatusCode::Quot)));
        table.insert(StatusCode::TefoYr, StatusRule::new(0, None));
        table.insert(StatusCode::TefoNa, StatusRule::new(20, Some(StatusCode::Tele)));
        table.insert(StatusCode::TefoNotr, StatusRule::new(0, None));
        table.insert(StatusCode::TefoCl, StatusRule::new(5, Some(StatusCode::Tele)));
        table.insert(StatusCode::TefoNotu, StatusRule::new(0, None));
        table.insert(StatusCode::TefoHadv, StatusRule::new(0, None));
        table.insert(StatusCode::TefoWa, StatusRule::new(1, Some(StatusCode::Quot)));
        table.insert(StatusCode::Quot, StatusRule::new(1, Some(StatusCode::Meet)));
        table.insert(StatusCode::Meet, StatusRule::new(2, Some(StatusCode::Prio)));
        table.insert(StatusCode::Prio, StatusRule::new(3, Some(StatusCode::Cuso)));
        table.insert(StatusCode::Cuso, StatusRule::new(7, Some(StatusCode::Cupro)));
        table.insert(StatusCode::Cupro, StatusRule::new(20, Some(StatusCode::Cusd)));
        table.insert(StatusCode::Cusd, StatusRule::new(3, Some(StatusCode::Cugr)));
        table.insert(StatusCode::Cugr, StatusRule::new(25, Some(StatusCode::Selesai)));
        table.insert(StatusCode::Selesai, StatusRule::new(25, Some(StatusCode::Tefo)));

        // Reject states never progress
        table.insert(StatusCode::RejeNotu, StatusRule::new(0, None));
        table.insert(StatusCode::RejeYr, StatusRule::new(0, None));
        table.insert(StatusCode::RejeHadv, StatusRule::new(0, None));
        table.insert(StatusCode::RejeHadc, StatusRule::new(0, None));
        table.insert(StatusCode::RejeNoqu, StatusRule::new(0, None));
        table.insert(StatusCode::RejeLm, StatusRule::new(0, None));
        table.insert(StatusCode::RejePtof, StatusRule::new(0, None));

        table
    }

    /// The legacy 12-step cyclic table.
    ///
    /// Predates the canonical table; knows only the main-line codes and
    /// loops forever (`SELESAI` re-enters at `TELE`). Kept selectable for
    /// reproducing old reports, never merged into the canonical graph.
    #[must_use]
    pub fn legacy_cyclic() -> Self {
        let mut table = Self::new(String::from("legacy-cyclic"));

        table.insert(StatusCode::Tele, StatusRule::new(1, Some(StatusCode::Emol)));
        table.insert(StatusCode::Emol, StatusRule::new(1, Some(StatusCode::Emfo)));
        table.insert(StatusCode::Emfo, StatusRule::new(2, Some(StatusCode::Tefo)));
        table.insert(StatusCode::Tefo, StatusRule::new(1, Some(StatusCode::Quot)));
        table.insert(StatusCode::Quot, StatusRule::new(1, Some(StatusCode::Meet)));
        table.insert(StatusCode::Meet, StatusRule::new(2, Some(StatusCode::Prio)));
        table.insert(StatusCode::Prio, StatusRule::new(3, Some(StatusCode::Cuso)));
        table.insert(StatusCode::Cuso, StatusRule::new(7, Some(StatusCode::Cupro)));
        table.insert(StatusCode::Cupro, StatusRule::new(20, Some(StatusCode::Cusd)));
        table.insert(StatusCode::Cusd, StatusRule::new(3, Some(StatusCode::Cugr)));
        table.insert(StatusCode::Cugr, StatusRule::new(25, Some(StatusCode::Selesai)));
        table.insert(StatusCode::Selesai, StatusRule::new(25, Some(StatusCode::Tele)));

        table
    }
}
