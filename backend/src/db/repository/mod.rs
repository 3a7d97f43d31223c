//! Repository traits for the complaint/hearing store.
//!
//! The remote store is an opaque web app keyed by string ids; these traits
//! are the only surface the rest of the crate sees.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::api::{Complaint, HearingSlot};
use async_trait::async_trait;

/// Repository trait for the complaint log.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Check if the store connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is reachable
    /// - `Ok(false)` if unreachable but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch the complaint log, most-recent-first as stored.
    ///
    /// The scheduler never mutates or validates the returned records.
    async fn fetch_complaints(&self) -> RepositoryResult<Vec<Complaint>>;
}

/// Repository trait for manual hearing persistence.
#[async_trait]
pub trait HearingRepository: Send + Sync {
    /// List all persisted manual hearings.
    async fn list_hearings(&self) -> RepositoryResult<Vec<HearingSlot>>;

    /// Create or update a manual hearing.
    ///
    /// Replaces any existing entry with the same id (edit) or appends
    /// (create), assigning an id to new entries. The store never
    /// deduplicates by date+time: saving two hearings at the same slot is
    /// allowed, and any resulting over-booking is the compiler's concern.
    ///
    /// # Returns
    /// The persisted hearing, with its assigned id.
    async fn upsert_hearing(&self, slot: &HearingSlot) -> RepositoryResult<HearingSlot>;

    /// Delete a manual hearing by id.
    ///
    /// Deleting an unknown id is a no-op at this layer; refusing to
    /// delete automatic placements is the caller's responsibility.
    async fn delete_hearing(&self, id: &str) -> RepositoryResult<()>;
}

/// Combined repository covering both store concerns.
pub trait FullRepository: ComplaintRepository + HearingRepository {}

impl<T: ComplaintRepository + HearingRepository> FullRepository for T {}
