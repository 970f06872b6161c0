// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::NaiveDate;

use crate::{EntryRecord, UpdateRecord};

pub fn create_test_record(company_code: &str, status: &str, last_update: &str) -> EntryRecord {
    EntryRecord {
        company_code: String::from(company_code),
        company_name: Some(format!("PT {company_code}")),
        kategori: Some(String::from("LANGGANAN")),
        status: String::from(status),
        last_update: String::from(last_update),
    }
}

pub fn create_test_update(company_code: &str, status: &str, update_date: &str) -> UpdateRecord {
    UpdateRecord {
        company_code: String::from(company_code),
        company_name: Some(format!("PT {company_code}")),
        kategori: Some(String::from("KLIEN BARU")),
        status: String::from(status),
        update_date: String::from(update_date),
    }
}

pub fn create_test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
