//! Store-contract tests for the in-memory repository.

mod support;

use audiencia_rust::db::repositories::LocalRepository;
use audiencia_rust::db::repository::{
    ComplaintRepository, HearingRepository, RepositoryError,
};
use chrono::NaiveDate;
use support::{complaint, manual_hearing};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_complaints_round_trip_in_storage_order() {
    let repo = LocalRepository::new();
    repo.seed_complaints(vec![
        complaint("new", "Newest", "Vea"),
        complaint("old", "Oldest", "Telecom"),
    ]);

    let fetched = repo.fetch_complaints().await.unwrap();
    assert_eq!(fetched.len(), 2);
    // Most-recent-first ordering is preserved verbatim.
    assert_eq!(fetched[0].id, "new");
    assert_eq!(fetched[1].id, "old");
}

#[tokio::test]
async fn test_upsert_create_edit_delete_cycle() {
    let repo = LocalRepository::new();

    // Create: id is assigned.
    let mut slot = manual_hearing("ignored", Some(date(2025, 6, 3)), "08:00", None);
    slot.id = None;
    let created = repo.upsert_hearing(&slot).await.unwrap();
    let id = created.id.clone().unwrap();
    assert!(!id.is_empty());

    // Edit: same id, updated fields, still one record.
    let mut edited = created.clone();
    edited.claimant = "EDITED CLAIMANT".to_string();
    repo.upsert_hearing(&edited).await.unwrap();
    let listed = repo.list_hearings().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].claimant, "EDITED CLAIMANT");

    // Delete: record gone; repeating the delete is a no-op.
    repo.delete_hearing(&id).await.unwrap();
    repo.delete_hearing(&id).await.unwrap();
    assert!(repo.list_hearings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_accepts_colliding_date_and_time() {
    // Two pins on the same seat are the administrator's call; the store
    // never deduplicates, and the compiler treats it as over-booking.
    let repo = LocalRepository::new();
    repo.upsert_hearing(&{
        let mut s = manual_hearing("a", Some(date(2025, 6, 3)), "08:00", None);
        s.id = None;
        s
    })
    .await
    .unwrap();
    repo.upsert_hearing(&{
        let mut s = manual_hearing("b", Some(date(2025, 6, 3)), "08:00", None);
        s.id = None;
        s
    })
    .await
    .unwrap();

    assert_eq!(repo.list_hearings().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_every_operation_fails_when_unhealthy() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(matches!(
        repo.fetch_complaints().await.unwrap_err(),
        RepositoryError::ConnectionError { .. }
    ));
    assert!(matches!(
        repo.list_hearings().await.unwrap_err(),
        RepositoryError::ConnectionError { .. }
    ));
    let slot = manual_hearing("m-1", Some(date(2025, 6, 3)), "08:00", None);
    assert!(repo.upsert_hearing(&slot).await.is_err());
    assert!(repo.delete_hearing("m-1").await.is_err());

    // health_check itself reports the state instead of erroring.
    assert!(!repo.health_check().await.unwrap());
}
