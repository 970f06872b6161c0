// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business-day date arithmetic and strict date parsing.
//!
//! Due dates are counted in business days: Saturdays and Sundays are
//! skipped, nothing else. Public holidays are deliberately not modeled;
//! the sales team treats them as ordinary working days for follow-up
//! scheduling.

use crate::error::DomainError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns true if the date falls on a weekday (Mon-Fri).
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sat && date.weekday() != Weekday::Sun
}

/// Adds a number of business days to a date, skipping weekends.
///
/// A count of zero returns the start date unchanged, even if the start
/// date itself falls on a weekend. For any positive count the result is
/// always a weekday.
#[must_use]
pub fn add_business_days(start: NaiveDate, business_days: u32) -> NaiveDate {
    let mut current = start;
    let mut remaining = business_days;

    while remaining > 0 {
        current += Duration::days(1);

        // Skip weekends
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    current
}

/// Parses an ISO 8601 date, accepting either a plain date or a full
/// RFC 3339 timestamp (the backend stores both forms).
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the input is neither. Malformed
/// dates are a hard error here; callers that want a lenient path must
/// decide that themselves.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    chrono::DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|e| DomainError::DateParse {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
