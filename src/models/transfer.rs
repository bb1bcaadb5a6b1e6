use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A material transfer between areas, as delivered by the backend snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i64,
    #[serde(default)]
    pub folio: Option<String>,
    #[serde(default)]
    pub from_area: Option<String>,
    #[serde(default)]
    pub to_area: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    /// Pending transfers wait for the receiving area to accept them; they
    /// count toward the notification badge.
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending") || self.status.eq_ignore_ascii_case("pendiente")
    }
}
