// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Next-step resolution for pipeline entries.
//!
//! Given an entry's current status and the date of its last update, the
//! resolver answers one question: what should happen next? The answer is
//! always one of three things and the three are never collapsed:
//!
//! - advance to a concrete next status by a concrete due date,
//! - terminal, nothing further is scheduled, or
//! - unmapped, the status is outside the active rule table.
//!
//! Unmapped is a value, not an error. Free-form backend data makes it a
//! routine outcome and callers surface it rather than failing.

use crate::business_days::add_business_days;
use crate::rule_table::RuleTable;
use crate::status::StatusCode;
use chrono::NaiveDate;

/// The outcome of resolving an entry's next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// The entry should advance to `next_status`, due by `due_date`.
    Advance {
        /// Deadline for the transition, in business days after the last
        /// update.
        due_date: NaiveDate,
        /// The status the entry moves to next.
        next_status: StatusCode,
    },
    /// The entry has reached a state with no automatic progression.
    Terminal,
    /// The entry's status is not in the active rule table.
    Unmapped,
}

impl NextStep {
    /// Returns true if the entry has a scheduled next transition.
    #[must_use]
    pub const fn is_advance(&self) -> bool {
        matches!(self, Self::Advance { .. })
    }

    /// Returns true if the entry has no automatic progression.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// Returns true if the entry's status is outside the rule table.
    #[must_use]
    pub const fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped)
    }

    /// The due date of the scheduled transition, if one exists.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Advance { due_date, .. } => Some(*due_date),
            Self::Terminal | Self::Unmapped => None,
        }
    }

    /// The target status of the scheduled transition, if one exists.
    #[must_use]
    pub const fn next_status(&self) -> Option<StatusCode> {
        match self {
            Self::Advance { next_status, .. } => Some(*next_status),
            Self::Terminal | Self::Unmapped => None,
        }
    }
}

/// Resolves the next step for a raw status string and last-update date.
///
/// The status is normalized before lookup, so casing, stray whitespace,
/// and periods do not affect the result. The due date is computed in
/// business days from the last update; weekends are skipped.
///
/// # Returns
///
/// - `NextStep::Advance` when the active table maps the status to a next
///   status with a positive delay.
/// - `NextStep::Terminal` when the rule has a zero delay or no next
///   status. The backend uses both spellings for "the road ends here".
/// - `NextStep::Unmapped` when the status does not normalize to a known
///   code, or the active table has no rule for it.
#[must_use]
pub fn compute_next_step(table: &RuleTable, raw_status: &str, last_update: NaiveDate) -> NextStep {
    let Ok(code) = StatusCode::from_raw(raw_status) else {
        return NextStep::Unmapped;
    };

    let Some(rule) = table.rule_for(code) else {
        return NextStep::Unmapped;
    };

    match rule.next {
        Some(next_status) if rule.delay_business_days > 0 => NextStep::Advance {
            due_date: add_business_days(last_update, rule.delay_business_days),
            next_status,
        },
        _ => NextStep::Terminal,
    }
}
