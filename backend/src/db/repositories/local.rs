//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using Vec structures, providing fast, deterministic and isolated
//! execution.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::api::{Complaint, HearingSlot};
use crate::db::repository::*;

/// In-memory local repository.
///
/// Complaints are held most-recent-first, matching the remote store's
/// ordering contract; hearings keep insertion order so edits replace in
/// place.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    complaints: Vec<Complaint>,
    hearings: Vec<HearingSlot>,
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Replace the complaint log (most-recent-first, as the remote store
    /// would return it). Helper for setting up test data.
    pub fn seed_complaints(&self, complaints: Vec<Complaint>) {
        let mut data = self.data.write().unwrap();
        data.complaints = complaints;
    }

    /// Pre-load manual hearings without going through `upsert_hearing`.
    pub fn seed_hearings(&self, hearings: Vec<HearingSlot>) {
        let mut data = self.data.write().unwrap();
        data.hearings = hearings;
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Number of persisted manual hearings.
    pub fn hearing_count(&self) -> usize {
        self.data.read().unwrap().hearings.len()
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Helper to check health and return an error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Store is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComplaintRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn fetch_complaints(&self) -> RepositoryResult<Vec<Complaint>> {
        self.check_health()
            .map_err(|e| e.with_operation("fetch_complaints"))?;
        Ok(self.data.read().unwrap().complaints.clone())
    }
}

#[async_trait]
impl HearingRepository for LocalRepository {
    async fn list_hearings(&self) -> RepositoryResult<Vec<HearingSlot>> {
        self.check_health()
            .map_err(|e| e.with_operation("list_hearings"))?;
        Ok(self.data.read().unwrap().hearings.clone())
    }

    async fn upsert_hearing(&self, slot: &HearingSlot) -> RepositoryResult<HearingSlot> {
        self.check_health()
            .map_err(|e| e.with_operation("upsert_hearing"))?;

        let mut persisted = slot.clone();
        if persisted.id.is_none() {
            persisted.id = Some(Uuid::new_v4().to_string());
        }

        let mut data = self.data.write().unwrap();
        match data.hearings.iter_mut().find(|h| h.id == persisted.id) {
            Some(existing) => *existing = persisted.clone(),
            // No dedup by date+time: same-slot entries are allowed.
            None => data.hearings.push(persisted.clone()),
        }
        Ok(persisted)
    }

    async fn delete_hearing(&self, id: &str) -> RepositoryResult<()> {
        self.check_health()
            .map_err(|e| e.with_operation("delete_hearing"))?;

        // Unknown ids are a no-op by contract.
        let mut data = self.data.write().unwrap();
        data.hearings.retain(|h| h.id.as_deref() != Some(id));
        Ok(())
    }
}
