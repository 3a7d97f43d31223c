//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. Mutations recompile the schedule
//! before answering; day navigation only reads the cached map.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::warn;

use super::dto::{
    DashboardResponse, DeleteHearingResponse, HealthResponse, LoginRequest, LoginResponse,
    RefreshResponse, SaveHearingResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::HearingSlot;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// How many complaints the dashboard's recent-arrivals table shows.
const RECENT_COMPLAINTS: usize = 5;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the remote
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Admin Gate
// =============================================================================

/// POST /v1/login
///
/// Static credential check in front of the dashboard.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    if state.credentials.verify(&request.username, &request.password) {
        Ok(Json(LoginResponse { success: true }))
    } else {
        Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ))
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Complaint statistics plus the most recent arrivals. A failed fetch
/// degrades to an empty log so the dashboard stays interactive.
pub async fn dashboard(State(state): State<AppState>) -> HandlerResult<DashboardResponse> {
    let complaints = state
        .repository
        .fetch_complaints()
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "complaint fetch failed; dashboard degrades to empty");
            Vec::new()
        });

    Ok(Json(DashboardResponse {
        stats: services::dashboard_stats(&complaints),
        recent: services::recent_complaints(&complaints, RECENT_COMPLAINTS).to_vec(),
    }))
}

// =============================================================================
// Schedule
// =============================================================================

/// POST /v1/schedule/refresh
///
/// Reload both store collections and recompile the full schedule.
pub async fn refresh_schedule(State(state): State<AppState>) -> HandlerResult<RefreshResponse> {
    let map = services::refresh_schedule(
        state.repository.as_ref(),
        &state.cache,
        &state.policy,
        &state.config,
        today(),
    )
    .await;

    Ok(Json(RefreshResponse {
        scheduled_days: map.len(),
        scheduled_hearings: map.values().map(Vec::len).sum(),
    }))
}

/// GET /v1/agenda/{date}
///
/// Screen view of one day. Reads the cached map only; day navigation
/// never triggers a recompilation.
pub async fn get_day_view(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> HandlerResult<crate::services::DayView> {
    let map = state.cache.snapshot();
    Ok(Json(services::day_view(
        &map,
        &state.policy,
        &state.config,
        date,
    )))
}

/// GET /v1/agenda/{date}/print
///
/// Plain-text hearing listing for one day, padded to capacity rows per
/// time label.
pub async fn get_day_print(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<String, AppError> {
    let map = state.cache.snapshot();
    let rows = services::print_rows(&map, &state.config, date);
    Ok(services::render_print_text(date, &rows))
}

// =============================================================================
// Hearing Mutations
// =============================================================================

/// POST /v1/hearings
///
/// Create or edit a manual hearing: validate, persist, then recompile.
pub async fn save_hearing(
    State(state): State<AppState>,
    Json(slot): Json<HearingSlot>,
) -> HandlerResult<SaveHearingResponse> {
    let hearing = services::save_hearing(state.repository.as_ref(), &slot).await?;

    services::refresh_schedule(
        state.repository.as_ref(),
        &state.cache,
        &state.policy,
        &state.config,
        today(),
    )
    .await;

    Ok(Json(SaveHearingResponse { hearing }))
}

/// DELETE /v1/hearings/{id}
///
/// Delete a manual hearing, then recompile. Ids that do not name a manual
/// hearing are refused with the convert-to-manual guidance.
pub async fn delete_hearing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DeleteHearingResponse> {
    services::delete_hearing_by_id(state.repository.as_ref(), &id).await?;

    services::refresh_schedule(
        state.repository.as_ref(),
        &state.cache,
        &state.policy,
        &state.config,
        today(),
    )
    .await;

    Ok(Json(DeleteHearingResponse {
        status: "deleted".to_string(),
    }))
}

/// The compiler's clock: placements start at "tomorrow" relative to this.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
