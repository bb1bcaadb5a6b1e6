//! Snapshot documents.
//!
//! The backend is the system of record; this tool only consumes point-in-time
//! snapshots of it (a JSON document downloaded from the API). A sync replaces
//! the whole local cache with the document's content, so every later
//! computation runs over one consistent, wholly-fetched dataset.

use crate::errors::{AppError, AppResult};
use crate::models::notification::Notification;
use crate::models::reposition::Reposition;
use crate::models::transfer::Transfer;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the backend produced the document. Optional on the wire; the
    /// sync command falls back to its own clock.
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub repositions: Vec<Reposition>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

impl Snapshot {
    pub fn parse_document(content: &str) -> AppResult<Self> {
        serde_json::from_str(content).map_err(|e| AppError::Snapshot(e.to_string()))
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse_document(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.repositions.is_empty() && self.notifications.is_empty() && self.transfers.is_empty()
    }
}
