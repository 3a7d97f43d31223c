//! Remote spreadsheet-backed store client.
//!
//! The production store is a spreadsheet web app reached over HTTPS. Reads
//! are `GET {url}?action=...` calls returning JSON arrays; mutations are
//! `POST {url}` calls with a JSON body carrying an `action` field. The
//! body is sent as `text/plain` because the web app rejects preflighted
//! requests.
//!
//! The wire format beyond the fields the scheduler needs is out of scope;
//! unknown fields in the store's responses are ignored.

use async_trait::async_trait;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use uuid::Uuid;

use crate::api::{Complaint, HearingSlot};
use crate::db::repository::*;

/// Remote store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Deployed web-app URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SheetConfig {
    /// Create a new store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SHEET_URL` (required): deployed web-app URL
    /// - `SHEET_TIMEOUT_SECS` (optional, default: 30): request timeout
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let url =
            env::var("SHEET_URL").map_err(|_| "SHEET_URL environment variable not set".to_string())?;
        let timeout_secs = env::var("SHEET_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| "SHEET_TIMEOUT_SECS must be a number of seconds".to_string())?;

        Ok(Self {
            url: url.trim().to_string(),
            timeout_secs,
        })
    }
}

/// Mutation acknowledgement returned by the web app.
#[derive(Debug, Deserialize)]
struct SheetMutationResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the remote spreadsheet-backed store.
pub struct SheetRepository {
    client: reqwest::Client,
    config: SheetConfig,
}

impl SheetRepository {
    pub fn new(config: SheetConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RepositoryError::configuration(format!("HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// Fetch a JSON collection for a read action.
    ///
    /// The web app answers misconfigured deployments with an HTML page
    /// instead of JSON, and old script versions answer with a bare object;
    /// both are treated as "no records" so a stale deployment cannot take
    /// the back office down.
    async fn get_collection<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
    ) -> RepositoryResult<Vec<T>> {
        let context = || ErrorContext::new(action).with_entity("sheet");
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("action", action)])
            .send()
            .await
            .map_err(|e| RepositoryError::connection_with_context(e.to_string(), context()))?;

        if !response.status().is_success() {
            return Err(RepositoryError::request_with_context(
                format!("store answered HTTP {}", response.status()),
                context(),
            ));
        }

        if !is_json(&response) {
            tracing::warn!(action, "store answered non-JSON; assuming no records");
            return Ok(Vec::new());
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RepositoryError::decode_with_context(e.to_string(), context()))?;
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item).map_err(|e| {
                        RepositoryError::decode_with_context(e.to_string(), context())
                    })
                })
                .collect(),
            _ => {
                tracing::warn!(action, "store answered a non-array payload; assuming no records");
                Ok(Vec::new())
            }
        }
    }

    /// Post a mutation and check its acknowledgement.
    async fn post_mutation(
        &self,
        action: &str,
        payload: serde_json::Value,
    ) -> RepositoryResult<SheetMutationResponse> {
        let context = || ErrorContext::new(action).with_entity("sheet");
        let body = serde_json::to_string(&payload)
            .map_err(|e| RepositoryError::internal(e.to_string()))?;

        let response = self
            .client
            .post(&self.config.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| RepositoryError::connection_with_context(e.to_string(), context()))?;

        if !is_json(&response) {
            return Err(RepositoryError::decode_with_context(
                "store answered non-JSON; the deployed script may be outdated",
                context(),
            ));
        }

        let ack: SheetMutationResponse = response
            .json()
            .await
            .map_err(|e| RepositoryError::decode_with_context(e.to_string(), context()))?;
        if ack.status != "success" {
            return Err(RepositoryError::request_with_context(
                ack.message
                    .clone()
                    .unwrap_or_else(|| format!("store reported status '{}'", ack.status)),
                context(),
            ));
        }
        Ok(ack)
    }
}

fn is_json(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Build the mutation body: the slot's fields plus the routing action.
fn save_payload(slot: &HearingSlot) -> RepositoryResult<serde_json::Value> {
    let mut payload = serde_json::to_value(slot)
        .map_err(|e| RepositoryError::internal(e.to_string()))?;
    if let Some(object) = payload.as_object_mut() {
        object.insert(
            "action".to_string(),
            serde_json::Value::String("saveHearing".to_string()),
        );
    }
    Ok(payload)
}

#[async_trait]
impl ComplaintRepository for SheetRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("action", "getHearings")])
            .send()
            .await;
        match response {
            Ok(r) => Ok(r.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    async fn fetch_complaints(&self) -> RepositoryResult<Vec<Complaint>> {
        self.get_collection("getComplaints").await
    }
}

#[async_trait]
impl HearingRepository for SheetRepository {
    async fn list_hearings(&self) -> RepositoryResult<Vec<HearingSlot>> {
        self.get_collection("getHearings").await
    }

    async fn upsert_hearing(&self, slot: &HearingSlot) -> RepositoryResult<HearingSlot> {
        // Assign the id client-side so the record posted and the record
        // kept locally agree even when the web app echoes nothing back.
        let mut persisted = slot.clone();
        if persisted.id.is_none() {
            persisted.id = Some(Uuid::new_v4().to_string());
        }

        let ack = self
            .post_mutation("saveHearing", save_payload(&persisted)?)
            .await?;
        if let Some(id) = ack.id {
            persisted.id = Some(id);
        }
        Ok(persisted)
    }

    async fn delete_hearing(&self, id: &str) -> RepositoryResult<()> {
        self.post_mutation(
            "deleteHearing",
            serde_json::json!({ "action": "deleteHearing", "id": id }),
        )
        .await?;
        Ok(())
    }
}
