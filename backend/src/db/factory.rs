//! Factory for creating repository instances.
//!
//! Centralizes backend construction so callers depend on
//! `Arc<dyn FullRepository>` rather than concrete types.

use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "sheet-repo")]
use super::repositories::{SheetConfig, SheetRepository};
use super::repository::FullRepository;
#[cfg(feature = "sheet-repo")]
use super::repository::RepositoryResult;

pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a client for the remote spreadsheet-backed store.
    #[cfg(feature = "sheet-repo")]
    pub fn create_sheet(config: SheetConfig) -> RepositoryResult<Arc<dyn FullRepository>> {
        Ok(Arc::new(SheetRepository::new(config)?))
    }
}
