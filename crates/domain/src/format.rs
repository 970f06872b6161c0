// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Indonesian-locale date rendering for reports.
//!
//! Two fixed formats, matching what the sales team reads on the
//! dashboard: `"Sen, 06 Jan 25"` and `"06 Jan 2025"`. The abbreviations
//! are a closed set, so no locale machinery is involved.

use chrono::{Datelike, NaiveDate, Weekday};

/// Indonesian weekday abbreviation (Senin, Selasa, ...).
#[must_use]
pub const fn day_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Sen",
        Weekday::Tue => "Sel",
        Weekday::Wed => "Rab",
        Weekday::Thu => "Kam",
        Weekday::Fri => "Jum",
        Weekday::Sat => "Sab",
        Weekday::Sun => "Min",
    }
}

/// Indonesian month abbreviation for a 0-based month index.
const fn month_abbrev(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "Mei",
        5 => "Jun",
        6 => "Jul",
        7 => "Agu",
        8 => "Sep",
        9 => "Okt",
        10 => "Nov",
        _ => "Des",
    }
}

/// Formats a date the way the dashboard shows due dates:
/// `"Sen, 06 Jan 25"`.
#[must_use]
pub fn format_date_id(date: NaiveDate) -> String {
    format!(
        "{}, {:02} {} {:02}",
        day_abbrev(date.weekday()),
        date.day(),
        month_abbrev(date.month0()),
        date.year().rem_euclid(100)
    )
}

/// Formats a date in the short report style: `"06 Jan 2025"`.
#[must_use]
pub fn format_date_short(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_abbrev(date.month0()),
        date.year()
    )
}
