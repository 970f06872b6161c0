// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Call-time "today" in an explicit business timezone.
//!
//! Overdue checks compare dates only, so the answer flips at midnight in
//! whatever zone "today" is taken from. The sales office runs on WIB, so
//! the evaluation date must come from the declared business timezone and
//! not from wherever the process happens to run.

use crate::error::DomainError;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// The sales office timezone used when callers do not declare one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// Returns today's date in the given IANA timezone.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the zone name is not a
/// valid IANA identifier.
pub fn today_in_zone(zone: &str) -> Result<NaiveDate, DomainError> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(zone.to_string()))?;

    Ok(chrono::Utc::now().with_timezone(&tz).date_naive())
}
