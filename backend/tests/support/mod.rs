// Not every suite uses every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use audiencia_rust::api::{Complaint, HearingSlot};
use chrono::NaiveDate;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in &self.snapshot {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }
}

/// Build a complaint with derived display fields.
pub fn complaint(id: &str, name: &str, company: &str) -> Complaint {
    Complaint {
        id: id.to_string(),
        date: "2025-05-01".to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", id),
        denounced_company: company.to_string(),
        pdf_url: None,
        status: String::new(),
    }
}

/// Build a persisted manual hearing.
pub fn manual_hearing(
    id: &str,
    date: Option<NaiveDate>,
    time: &str,
    complaint_id: Option<&str>,
) -> HearingSlot {
    HearingSlot {
        id: Some(id.to_string()),
        date,
        time: time.to_string(),
        claimant: "FIXED CLAIMANT".to_string(),
        defendant: "FIXED DEFENDANT".to_string(),
        complaint_id: complaint_id.map(str::to_string),
        is_manual: true,
    }
}
