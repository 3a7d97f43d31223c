//! Integration tests for the service layer over the in-memory store.

mod support;

use audiencia_rust::config::ScheduleConfig;
use audiencia_rust::db::repositories::LocalRepository;
use audiencia_rust::services::{
    self, delete_hearing_by_id, load_schedule_inputs, refresh_schedule, save_hearing,
    ScheduleCache,
};
use chrono::NaiveDate;
use support::{complaint, manual_hearing};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday; the first fill day is Tuesday 2025-06-03.
fn monday() -> NaiveDate {
    date(2025, 6, 2)
}

fn config() -> ScheduleConfig {
    ScheduleConfig {
        time_slots: vec!["08:00".to_string(), "09:00".to_string()],
        capacity_per_slot: 2,
        holidays: vec![],
    }
}

#[tokio::test]
async fn test_refresh_compiles_store_contents() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![
        complaint("b", "Bruno", "Luz SA"),
        complaint("a", "Ana", "Agua SA"),
    ]);
    repo.seed_hearings(vec![manual_hearing(
        "m-1",
        Some(date(2025, 6, 3)),
        "08:00",
        None,
    )]);

    let cache = ScheduleCache::new();
    let cfg = config();
    let policy = cfg.policy();

    let map = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;

    let tuesday = &map[&date(2025, 6, 3)];
    assert_eq!(tuesday.len(), 3);
    assert!(tuesday[0].is_manual);
    // The cache serves the same snapshot without recomputing.
    assert_eq!(cache.snapshot().as_ref(), map.as_ref());
}

#[tokio::test]
async fn test_unreachable_store_degrades_to_empty_schedule() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![complaint("a", "Ana", "Agua SA")]);
    repo.set_healthy(false);

    let (complaints, hearings) = load_schedule_inputs(&repo).await;
    assert!(complaints.is_empty());
    assert!(hearings.is_empty());

    let cache = ScheduleCache::new();
    let cfg = config();
    let policy = cfg.policy();
    let map = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;
    assert!(map.is_empty());
}

#[tokio::test]
async fn test_save_then_refresh_replaces_automatic_with_pin() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![complaint("a", "Ana", "Agua SA")]);

    let cache = ScheduleCache::new();
    let cfg = config();
    let policy = cfg.policy();

    let before = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;
    let auto = &before[&date(2025, 6, 3)][0];
    assert!(!auto.is_manual);

    // The editor pins the automatic placement onto a chosen day.
    let mut pinned = auto.clone();
    pinned.date = Some(date(2025, 6, 13));
    pinned.time = "09:00".to_string();
    let saved = save_hearing(&repo, &pinned).await.unwrap();
    assert!(saved.is_manual);

    let after = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;
    // The complaint now has exactly its pinned hearing; tomorrow is free.
    assert!(!after.contains_key(&date(2025, 6, 3)));
    let friday = &after[&date(2025, 6, 13)];
    assert_eq!(friday.len(), 1);
    assert!(friday[0].is_manual);
    assert_eq!(friday[0].complaint_id.as_deref(), Some("a"));
}

#[tokio::test]
async fn test_delete_then_refresh_returns_complaint_to_the_pool() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![complaint("a", "Ana", "Agua SA")]);
    let saved = save_hearing(
        &repo,
        &manual_hearing("m-1", Some(date(2025, 6, 13)), "09:00", Some("a")),
    )
    .await
    .unwrap();

    let cache = ScheduleCache::new();
    let cfg = config();
    let policy = cfg.policy();

    let before = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;
    assert!(!before.contains_key(&date(2025, 6, 3)));

    delete_hearing_by_id(&repo, saved.id.as_deref().unwrap())
        .await
        .unwrap();

    let after = refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;
    // With the pin gone the complaint is auto-scheduled again.
    assert_eq!(
        after[&date(2025, 6, 3)][0].complaint_id.as_deref(),
        Some("a")
    );
}

#[tokio::test]
async fn test_day_view_reads_cache_without_recompute() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![complaint("a", "Ana", "Agua SA")]);

    let cache = ScheduleCache::new();
    let cfg = config();
    let policy = cfg.policy();
    refresh_schedule(&repo, &cache, &policy, &cfg, monday()).await;

    // Mutating the store without refreshing must not change what the
    // view renders: day navigation re-reads the compiled map only.
    repo.seed_complaints(vec![
        complaint("b", "Bruno", "Luz SA"),
        complaint("a", "Ana", "Agua SA"),
    ]);

    let snapshot = cache.snapshot();
    let view = services::day_view(&snapshot, &policy, &cfg, date(2025, 6, 3));
    let occupied = view.rows.iter().filter(|r| r.slot.is_some()).count();
    assert_eq!(occupied, 1);
}
