//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::AdminCredentials;
use crate::calendar::CalendarPolicy;
use crate::config::ScheduleConfig;
use crate::db::repository::FullRepository;
use crate::services::ScheduleCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn FullRepository>,
    /// Most recently compiled schedule map
    pub cache: ScheduleCache,
    /// Slot grid and holiday configuration
    pub config: Arc<ScheduleConfig>,
    /// Business-day policy derived from the configuration
    pub policy: Arc<CalendarPolicy>,
    /// Admin credential gate
    pub credentials: AdminCredentials,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(
        repository: Arc<dyn FullRepository>,
        config: ScheduleConfig,
        credentials: AdminCredentials,
    ) -> Self {
        let policy = Arc::new(config.policy());
        Self {
            repository,
            cache: ScheduleCache::new(),
            config: Arc::new(config),
            policy,
            credentials,
        }
    }
}
