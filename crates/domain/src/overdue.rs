// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overdue evaluation for computed due dates.
//!
//! The comparison is date-only and strict: a follow-up due today is not
//! overdue, it becomes overdue tomorrow. Entries without a due date
//! (terminal or unmapped) are never overdue.

use chrono::NaiveDate;

/// Returns true if the due date has passed.
///
/// `today` is supplied by the caller so the evaluation stays pure; use
/// [`crate::clock::today_in_zone`] to obtain it for the business
/// timezone at call time.
#[must_use]
pub fn is_overdue(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match due_date {
        Some(due) => due < today,
        None => false,
    }
}

/// Returns true if the entry has a due date that has not yet passed.
///
/// This is the "still on schedule" flag shown next to upcoming
/// follow-ups; a due date of today counts as on track.
#[must_use]
pub fn is_on_track(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match due_date {
        Some(due) => due >= today,
        None => false,
    }
}
