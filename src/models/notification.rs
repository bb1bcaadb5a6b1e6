use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification row from the backend snapshot.
///
/// `kind` is the wire `type` field; it stays a raw string because the backend
/// keeps growing the vocabulary and unknown kinds must still render with the
/// generic icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub folio: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
