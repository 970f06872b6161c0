// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end resolver scenarios over the built-in tables, pinning the
//! business behavior reviewers check against the dashboard.

use crate::{
    NextStep, RuleTable, StatusCode, compute_next_step, format_date_id, is_overdue,
};
use chrono::NaiveDate;

fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_tele_on_monday_advances_to_emol_next_day() {
    let table: RuleTable = RuleTable::canonical();
    let monday: NaiveDate = make_date(2025, 1, 6);

    let step: NextStep = compute_next_step(&table, "TELE", monday);

    assert_eq!(
        step,
        NextStep::Advance {
            due_date: make_date(2025, 1, 7),
            next_status: StatusCode::Emol,
        }
    );
}

#[test]
fn test_lowercase_tele_on_friday_lands_on_monday() {
    let table: RuleTable = RuleTable::canonical();
    let friday: NaiveDate = make_date(2025, 1, 10);

    let step: NextStep = compute_next_step(&table, "tele", friday);

    assert_eq!(
        step,
        NextStep::Advance {
            due_date: make_date(2025, 1, 13),
            next_status: StatusCode::Emol,
        }
    );
}

#[test]
fn test_selesai_diverges_between_canonical_and_legacy_tables() {
    let canonical: RuleTable = RuleTable::canonical();
    let legacy: RuleTable = RuleTable::legacy_cyclic();
    let monday: NaiveDate = make_date(2025, 1, 6);

    let canonical_step: NextStep = compute_next_step(&canonical, "SELESAI", monday);
    let legacy_step: NextStep = compute_next_step(&legacy, "SELESAI", monday);

    // Same delay, different target: the tables are not interchangeable.
    assert_eq!(
        canonical_step,
        NextStep::Advance {
            due_date: make_date(2025, 2, 10),
            next_status: StatusCode::Tefo,
        }
    );
    assert_eq!(
        legacy_step,
        NextStep::Advance {
            due_date: make_date(2025, 2, 10),
            next_status: StatusCode::Tele,
        }
    );
    assert_ne!(canonical_step.next_status(), legacy_step.next_status());
}

#[test]
fn test_dead_end_codes_are_terminal_only_under_the_canonical_table() {
    let canonical: RuleTable = RuleTable::canonical();
    let legacy: RuleTable = RuleTable::legacy_cyclic();
    let date: NaiveDate = make_date(2025, 1, 6);

    for raw in ["TELE NOTR", "REJE NOTU"] {
        assert_eq!(compute_next_step(&canonical, raw, date), NextStep::Terminal);
        // The legacy chain predates these codes entirely
        assert_eq!(compute_next_step(&legacy, raw, date), NextStep::Unmapped);
    }
}

#[test]
fn test_unknown_status_is_unmapped_with_no_due_date() {
    let table: RuleTable = RuleTable::canonical();
    let step: NextStep = compute_next_step(&table, "FOOBAR", make_date(2025, 1, 6));

    assert_eq!(step, NextStep::Unmapped);
    assert_eq!(step.due_date(), None);
}

#[test]
fn test_telemarketing_retry_requeues_after_four_weeks() {
    let table: RuleTable = RuleTable::canonical();
    let monday: NaiveDate = make_date(2025, 1, 6);

    let step: NextStep = compute_next_step(&table, "TELE NA", monday);

    // 20 business days = 4 calendar weeks from a Monday
    assert_eq!(
        step,
        NextStep::Advance {
            due_date: make_date(2025, 2, 3),
            next_status: StatusCode::Tele,
        }
    );
}

#[test]
fn test_resolved_due_date_feeds_overdue_check() {
    let table: RuleTable = RuleTable::canonical();
    let monday: NaiveDate = make_date(2025, 1, 6);

    let step: NextStep = compute_next_step(&table, "TELE", monday);
    let due: Option<NaiveDate> = step.due_date();

    // Due Tuesday Jan 7: overdue from the 8th on, not before
    assert!(!is_overdue(due, make_date(2025, 1, 7)));
    assert!(is_overdue(due, make_date(2025, 1, 8)));
    assert!(is_overdue(due, make_date(2025, 1, 10)));
}

#[test]
fn test_canonical_main_line_walk() {
    let table: RuleTable = RuleTable::canonical();
    let expected_chain = vec![
        StatusCode::Tele,
        StatusCode::Emol,
        StatusCode::Emfo,
        StatusCode::Tefo,
        StatusCode::Quot,
        StatusCode::Meet,
        StatusCode::Prio,
        StatusCode::Cuso,
        StatusCode::Cupro,
        StatusCode::Cusd,
        StatusCode::Cugr,
        StatusCode::Selesai,
    ];

    let mut date: NaiveDate = make_date(2025, 1, 6);
    for pair in expected_chain.windows(2) {
        let step: NextStep = compute_next_step(&table, pair[0].as_str(), date);
        match step {
            NextStep::Advance {
                due_date,
                next_status,
            } => {
                assert_eq!(next_status, pair[1], "wrong hop from {}", pair[0].as_str());
                date = due_date;
            }
            other => panic!("{} resolved {other:?}, expected advance", pair[0].as_str()),
        }
    }

    // SELESAI then re-enters the follow-up loop rather than stopping
    let last: NextStep = compute_next_step(&table, "SELESAI", date);
    assert_eq!(last.next_status(), Some(StatusCode::Tefo));
}

#[test]
fn test_due_dates_render_in_indonesian_format() {
    let table: RuleTable = RuleTable::canonical();
    let friday: NaiveDate = make_date(2025, 1, 10);

    let step: NextStep = compute_next_step(&table, "tele", friday);

    let rendered: String = step.due_date().map(format_date_id).unwrap();
    assert_eq!(rendered, "Sen, 13 Jan 25");
}
