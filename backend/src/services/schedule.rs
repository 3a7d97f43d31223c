//! Schedule loading, compilation and caching.
//!
//! Compilation itself is pure ([`crate::scheduler::compile`]); this module
//! owns the async edges around it: fetching both store collections
//! concurrently, degrading to empty collections when the store is
//! unreachable, and publishing the result into a shared cache that day
//! navigation reads without recomputing.

use crate::api::{Complaint, HearingSlot, ScheduleMap};
use crate::calendar::CalendarPolicy;
use crate::config::ScheduleConfig;
use crate::db::repository::FullRepository;
use crate::scheduler;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

/// Shared cache holding the most recently compiled schedule map.
///
/// Reloads are generation-checked: a reload that finishes after a newer
/// one has started is discarded instead of overwriting fresher data, so
/// rapid refreshes cannot publish out-of-order results.
#[derive(Clone, Default)]
pub struct ScheduleCache {
    inner: Arc<RwLock<CacheInner>>,
}

#[derive(Default)]
struct CacheInner {
    map: Arc<ScheduleMap>,
    generation: u64,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current compiled map. Missing dates mean "no hearings".
    pub fn snapshot(&self) -> Arc<ScheduleMap> {
        self.inner.read().map.clone()
    }

    /// Start a reload, returning the token to publish with.
    pub fn begin_reload(&self) -> u64 {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.generation
    }

    /// Install a compiled map unless a newer reload has begun.
    ///
    /// Returns whether the map was installed.
    pub fn publish(&self, generation: u64, map: ScheduleMap) -> bool {
        let mut inner = self.inner.write();
        if inner.generation != generation {
            return false;
        }
        inner.map = Arc::new(map);
        true
    }
}

/// Fetch both compiler inputs concurrently.
///
/// Store failures degrade to empty collections with an operator warning:
/// the back office keeps running on "manual hearings only" or "no
/// complaints" rather than surfacing a user-facing failure.
pub async fn load_schedule_inputs(
    repo: &dyn FullRepository,
) -> (Vec<Complaint>, Vec<HearingSlot>) {
    let (complaints, hearings) = tokio::join!(repo.fetch_complaints(), repo.list_hearings());

    let complaints = complaints.unwrap_or_else(|e| {
        warn!(error = %e, "complaint fetch failed; continuing with an empty log");
        Vec::new()
    });
    let hearings = hearings.unwrap_or_else(|e| {
        warn!(error = %e, "hearing fetch failed; continuing without manual hearings");
        Vec::new()
    });
    (complaints, hearings)
}

/// Reload both collections, recompile, and publish into the cache.
///
/// Returns the cache's current snapshot, which is the freshly compiled map
/// unless a newer reload overtook this one.
pub async fn refresh_schedule(
    repo: &dyn FullRepository,
    cache: &ScheduleCache,
    policy: &CalendarPolicy,
    config: &ScheduleConfig,
    today: NaiveDate,
) -> Arc<ScheduleMap> {
    let generation = cache.begin_reload();
    let (complaints, hearings) = load_schedule_inputs(repo).await;
    let map = scheduler::compile(&complaints, &hearings, policy, config, today);
    if !cache.publish(generation, map) {
        warn!(generation, "discarding stale schedule compilation");
    }
    cache.snapshot()
}
