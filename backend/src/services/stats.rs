//! Dashboard statistics over the complaint log.

use crate::api::Complaint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Headline counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_complaints: usize,
    /// Distinct claimants, keyed by email.
    pub unique_users: usize,
    /// Distinct denounced companies.
    pub unique_companies: usize,
}

pub fn dashboard_stats(complaints: &[Complaint]) -> DashboardStats {
    let unique_users: HashSet<&str> = complaints.iter().map(|c| c.email.as_str()).collect();
    let unique_companies: HashSet<&str> = complaints
        .iter()
        .map(|c| c.denounced_company.as_str())
        .collect();
    DashboardStats {
        total_complaints: complaints.len(),
        unique_users: unique_users.len(),
        unique_companies: unique_companies.len(),
    }
}

/// The latest arrivals; the log is already most-recent-first.
pub fn recent_complaints(complaints: &[Complaint], limit: usize) -> &[Complaint] {
    &complaints[..complaints.len().min(limit)]
}
