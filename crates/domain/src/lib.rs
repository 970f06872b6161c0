// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod business_days;
mod classify;
mod clock;
mod error;
mod format;
mod next_step;
mod overdue;
mod rule_table;
mod status;

#[cfg(test)]
mod tests;

pub use next_step::{NextStep, compute_next_step};
pub use overdue::{is_on_track, is_overdue};
pub use rule_table::{RuleTable, StatusRule};
pub use status::{StatusCode, normalize_status};

// Re-export public types
pub use business_days::{add_business_days, is_business_day, parse_iso_date};
pub use classify::{Kategori, StatusBadge, StatusCategory, classify_kategori, classify_status};
pub use clock::{DEFAULT_TIMEZONE, today_in_zone};
pub use error::DomainError;
pub use format::{day_abbrev, format_date_id, format_date_short};
