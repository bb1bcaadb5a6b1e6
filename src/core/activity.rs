//! Recent-activity feed: the latest repositions by creation time.

use crate::core::sort::{SortKey, compare};
use crate::models::reposition::Reposition;

/// Latest `limit` repositions, newest first. The snapshot order is not
/// trusted; the feed always re-sorts by creation timestamp.
pub fn recent(records: &[Reposition], limit: usize) -> Vec<Reposition> {
    let mut all: Vec<Reposition> = records.to_vec();
    all.sort_by(|a, b| compare(a, b, SortKey::CreatedAt).reverse());
    all.truncate(limit);
    all
}
