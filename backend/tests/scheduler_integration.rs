//! End-to-end compiler scenarios across multiple days.

mod support;

use audiencia_rust::calendar::CalendarPolicy;
use audiencia_rust::config::ScheduleConfig;
use audiencia_rust::scheduler::compile;
use chrono::NaiveDate;
use support::{complaint, manual_hearing};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_week_with_pins_holiday_and_weekend() {
    // Thursday 2025-06-05. The walk starts Friday 06-06, skips the
    // weekend, and 06-09 (Monday) is configured as a holiday, so the
    // remaining fill lands on Tuesday 06-10.
    let today = date(2025, 6, 5);
    let holiday = date(2025, 6, 9);

    let config = ScheduleConfig {
        time_slots: vec!["08:00".to_string(), "09:00".to_string()],
        capacity_per_slot: 2,
        holidays: vec![holiday],
    };
    let policy = config.policy();

    // Six complaints, stored most-recent-first (f newest, a oldest).
    let complaints: Vec<_> = ["f", "e", "d", "c", "b", "a"]
        .iter()
        .map(|id| complaint(id, &format!("Claimant {}", id), "Empresa SA"))
        .collect();

    let manuals = vec![
        // Pins one seat on Friday 08:00.
        manual_hearing("m-1", Some(date(2025, 6, 6)), "08:00", None),
        // Covers complaint "c" without occupying any day yet.
        manual_hearing("m-2", None, "08:00", Some("c")),
    ];

    let map = compile(&complaints, &manuals, &policy, &config, today);

    // Friday: manual + 3 automatics (a fills the seat next to the pin,
    // b and d take 09:00).
    let friday = &map[&date(2025, 6, 6)];
    assert_eq!(friday.len(), 4);
    assert!(friday[0].is_manual);
    let friday_autos: Vec<_> = friday
        .iter()
        .filter(|s| !s.is_manual)
        .map(|s| (s.time.as_str(), s.complaint_id.as_deref().unwrap()))
        .collect();
    assert_eq!(
        friday_autos,
        vec![("08:00", "a"), ("09:00", "b"), ("09:00", "d")]
    );

    // Weekend and holiday untouched.
    assert!(!map.contains_key(&date(2025, 6, 7)));
    assert!(!map.contains_key(&date(2025, 6, 8)));
    assert!(!map.contains_key(&holiday));

    // Tuesday takes the rest: e then f at 08:00.
    let tuesday = &map[&date(2025, 6, 10)];
    let tuesday_autos: Vec<_> = tuesday
        .iter()
        .map(|s| (s.time.as_str(), s.complaint_id.as_deref().unwrap()))
        .collect();
    assert_eq!(tuesday_autos, vec![("08:00", "e"), ("08:00", "f")]);

    // "c" is reserved by its dateless pin and appears nowhere.
    assert!(map
        .values()
        .flatten()
        .all(|s| s.complaint_id.as_deref() != Some("c") || s.is_manual));
}

#[test]
fn test_editing_a_pin_rebuilds_the_map_consistently() {
    // Recompilation is total: moving a manual hearing from one day to
    // another leaves no trace of the old placement.
    let today = date(2025, 6, 2);
    let config = ScheduleConfig {
        time_slots: vec!["08:00".to_string()],
        capacity_per_slot: 1,
        holidays: vec![],
    };
    let policy = config.policy();
    let complaints = vec![complaint("a", "Ana", "Agua SA")];

    let before = compile(
        &complaints,
        &[manual_hearing("m-1", Some(date(2025, 6, 3)), "08:00", None)],
        &policy,
        &config,
        today,
    );
    // The pin fills Tuesday; the complaint spills to Wednesday.
    assert!(before[&date(2025, 6, 3)][0].is_manual);
    assert_eq!(
        before[&date(2025, 6, 4)][0].complaint_id.as_deref(),
        Some("a")
    );

    let after = compile(
        &complaints,
        &[manual_hearing("m-1", Some(date(2025, 6, 5)), "08:00", None)],
        &policy,
        &config,
        today,
    );
    // Tuesday is free again and the complaint takes it; the pin sits on
    // Thursday alone.
    assert_eq!(
        after[&date(2025, 6, 3)][0].complaint_id.as_deref(),
        Some("a")
    );
    assert!(after[&date(2025, 6, 5)][0].is_manual);
    assert!(!after.contains_key(&date(2025, 6, 4)));
}

#[test]
fn test_same_complaint_manual_and_log_yields_single_hearing() {
    // A complaint promoted to a manual hearing keeps exactly one active
    // hearing across the whole map.
    let today = date(2025, 6, 2);
    let config = ScheduleConfig::default();
    let policy = CalendarPolicy::default();
    let complaints = vec![
        complaint("b", "Bruno", "Luz SA"),
        complaint("a", "Ana", "Agua SA"),
    ];
    let manuals = vec![manual_hearing(
        "m-1",
        Some(date(2025, 6, 20)),
        "10:00",
        Some("a"),
    )];

    let map = compile(&complaints, &manuals, &policy, &config, today);

    let hearings_for_a: Vec<_> = map
        .values()
        .flatten()
        .filter(|s| s.complaint_id.as_deref() == Some("a"))
        .collect();
    assert_eq!(hearings_for_a.len(), 1);
    assert!(hearings_for_a[0].is_manual);
}
