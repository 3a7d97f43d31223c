//! Public API surface for the Rust backend.
//!
//! This file consolidates the domain types shared by the scheduler, the
//! storage layer and the HTTP API. All types derive Serialize/Deserialize
//! and keep the remote sheet's camelCase field names on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Compiled schedule: calendar date -> hearings on that day.
///
/// Days with no hearings are absent from the map; a missing key means
/// "no hearings, capacity fully free", never an error.
pub type ScheduleMap = BTreeMap<NaiveDate, Vec<HearingSlot>>;

/// A consumer complaint as returned by the remote store.
///
/// The store returns complaints most-recent-first; the scheduler never
/// mutates or validates these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    /// Submission timestamp as recorded by the intake form.
    #[serde(default)]
    pub date: String,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub denounced_company: String,
    /// Link to the generated receipt PDF, when the intake pipeline made one.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// One occupied appointment in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingSlot {
    /// Present only for persisted manual hearings; automatic placements
    /// carry no durable identifier.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    /// Assigned calendar date. Manual hearings may be saved without one;
    /// such entries reserve their complaint without occupying any day.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub date: Option<NaiveDate>,
    pub time: String,
    pub claimant: String,
    pub defendant: String,
    /// Back-reference to the originating complaint, when there is one.
    /// Walk-in manual hearings have none.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub complaint_id: Option<String>,
    /// True for administrator-pinned hearings (durable); false for
    /// compiler-generated placements (recomputed on every run).
    #[serde(default)]
    pub is_manual: bool,
}

impl HearingSlot {
    /// Build the ephemeral compiler placement for a pending complaint.
    pub fn automatic(complaint: &Complaint, date: NaiveDate, time: &str) -> Self {
        Self {
            id: None,
            date: Some(date),
            time: time.to_string(),
            claimant: complaint.full_name.clone(),
            defendant: complaint.denounced_company.clone(),
            complaint_id: Some(complaint.id.clone()),
            is_manual: false,
        }
    }
}

/// The sheet encodes "absent" as an empty cell; map it to `None`.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Dates arrive as `YYYY-MM-DD` strings, possibly empty.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
