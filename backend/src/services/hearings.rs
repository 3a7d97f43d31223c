//! Manual hearing mutations: validation and delete policy.
//!
//! Saving always pins: whatever the editor started from (a blank seat or
//! an automatic placement), the persisted record is a manual hearing.
//! Automatic placements have no independent identity, so deleting one is
//! refused with guidance instead of silently doing nothing.

use crate::api::HearingSlot;
use crate::db::repository::{FullRepository, RepositoryError};
use thiserror::Error;

/// Guidance shown when an automatic placement is targeted for deletion.
pub const ILLEGAL_DELETE_GUIDANCE: &str =
    "This is an automatic hearing. Edit and save it to convert it into a fixed manual entry first.";

#[derive(Debug, Error)]
pub enum HearingActionError {
    /// Rejected before persistence was attempted; user-facing message.
    #[error("{0}")]
    Validation(String),
    /// Attempted to delete something that is not a manual hearing.
    #[error("{}", ILLEGAL_DELETE_GUIDANCE)]
    IllegalDelete,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Persist a hearing from the editor, pinning it as manual.
///
/// Claimant, defendant, date and time must all be present; otherwise the
/// save is rejected before the store is touched.
pub async fn save_hearing(
    repo: &dyn FullRepository,
    slot: &HearingSlot,
) -> Result<HearingSlot, HearingActionError> {
    validate_slot(slot)?;
    let mut to_save = slot.clone();
    to_save.is_manual = true;
    Ok(repo.upsert_hearing(&to_save).await?)
}

/// Delete the hearing held in the editor.
///
/// Non-manual slots are refused. A manual slot that was never persisted
/// (no id) has nothing to delete, and the store treats unknown ids as a
/// no-op, so the operation cannot half-fail.
pub async fn delete_hearing_slot(
    repo: &dyn FullRepository,
    slot: &HearingSlot,
) -> Result<(), HearingActionError> {
    if !slot.is_manual {
        return Err(HearingActionError::IllegalDelete);
    }
    match slot.id.as_deref() {
        Some(id) => Ok(repo.delete_hearing(id).await?),
        None => Ok(()),
    }
}

/// Delete a manual hearing addressed by id.
///
/// Ids absent from the manual store do not name a manual hearing —
/// automatic placements never have one — so they are refused with the
/// conversion guidance rather than treated as a silent no-op.
pub async fn delete_hearing_by_id(
    repo: &dyn FullRepository,
    id: &str,
) -> Result<(), HearingActionError> {
    let manuals = repo.list_hearings().await?;
    if !manuals.iter().any(|h| h.id.as_deref() == Some(id)) {
        return Err(HearingActionError::IllegalDelete);
    }
    Ok(repo.delete_hearing(id).await?)
}

fn validate_slot(slot: &HearingSlot) -> Result<(), HearingActionError> {
    let complete = !slot.claimant.trim().is_empty()
        && !slot.defendant.trim().is_empty()
        && slot.date.is_some()
        && !slot.time.trim().is_empty();
    if !complete {
        return Err(HearingActionError::Validation(
            "Complete claimant, defendant, date and time before saving.".to_string(),
        ));
    }
    Ok(())
}
