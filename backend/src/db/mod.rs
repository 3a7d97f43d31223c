//! Storage module for complaint and hearing data.
//!
//! This module provides abstractions for the remote store via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server binary)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services) - Business Logic              │
//! │  - Schedule compilation orchestration                   │
//! │  - Mutation validation and recompute                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │   Local Repository     Sheet Repository      │
//!     │     (in-memory)       (remote web app)       │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: trait definitions and error types for store operations
//! - `repositories::local`: in-memory implementation for unit testing and
//!   local development
//! - `repositories::sheet`: client for the remote spreadsheet-backed web
//!   app (feature `sheet-repo`)
//! - `factory`: factory for creating repository instances

// Feature flag priority: sheet > local
// When multiple features are enabled (e.g., --all-features), sheet takes precedence.
#[cfg(not(any(feature = "sheet-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

// ==================== Repository Pattern Exports ====================

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
#[cfg(feature = "sheet-repo")]
pub use repositories::{SheetConfig, SheetRepository};
pub use repository::{
    ComplaintRepository, ErrorContext, FullRepository, HearingRepository, RepositoryError,
    RepositoryResult,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

// Priority: sheet > local (when --all-features is used)
#[cfg(feature = "sheet-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    let config = SheetConfig::from_env().map_err(RepositoryError::configuration)?;
    RepositoryFactory::create_sheet(config)
}

#[cfg(all(feature = "local-repo", not(feature = "sheet-repo")))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Store not initialized. Call init_repository() first.")
}
