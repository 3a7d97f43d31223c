//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The agenda and statistics types are re-exported from the service layer
//! since they already derive Serialize/Deserialize; hearing mutations use
//! the domain [`crate::api::HearingSlot`] directly as their body.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{Complaint, HearingSlot};
pub use crate::services::{AgendaRow, DashboardStats, DayView, PrintRow};

/// Request body for the admin login gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Remote store connection status
    pub store: String,
}

/// Dashboard payload: headline counters plus the latest arrivals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent: Vec<Complaint>,
}

/// Response for a schedule recompilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Days carrying at least one hearing
    pub scheduled_days: usize,
    /// Total hearings in the compiled map
    pub scheduled_hearings: usize,
}

/// Response for a persisted hearing mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHearingResponse {
    pub hearing: HearingSlot,
}

/// Response for a hearing deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHearingResponse {
    pub status: String,
}
