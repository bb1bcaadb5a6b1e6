//! Time-windowed visibility of finalized repositions.
//!
//! Active records are visible to everybody. Once a reposition is finalized
//! it stays on screen for a grace window: 24 hours for the area that
//! requested it, 12 hours for everyone else. Admin and Envíos bypass the
//! window entirely.

use crate::models::area::Area;
use crate::models::reposition::Reposition;
use chrono::{DateTime, Duration, Utc};

/// Hours a finalized reposition stays visible to areas other than the
/// requesting one.
pub const OTHER_AREA_WINDOW_HOURS: i64 = 12;

/// Hours a finalized reposition stays visible to its requesting area.
pub const REQUESTER_WINDOW_HOURS: i64 = 24;

/// Visibility predicate evaluated against an explicit `now`.
///
/// The boundary is inclusive: a record finalized exactly 12h (or 24h) ago is
/// still visible; one second later it is not. An unknown viewer area (config
/// typo, retired area) gets the 12h rule.
pub fn is_visible_at(repo: &Reposition, viewer: Option<Area>, now: DateTime<Utc>) -> bool {
    if viewer.map(|a| a.is_privileged()).unwrap_or(false) {
        return true;
    }

    let finalized = match repo.finalized_at() {
        Some(ts) => ts,
        None => return true, // still active
    };

    let elapsed = now - finalized;

    let is_requester = match (viewer, repo.solicitante_area.as_deref()) {
        (Some(v), Some(raw)) => Area::from_code(raw) == Some(v),
        _ => false,
    };

    let window = if is_requester {
        Duration::hours(REQUESTER_WINDOW_HOURS)
    } else {
        Duration::hours(OTHER_AREA_WINDOW_HOURS)
    };

    elapsed <= window
}

/// Wall-clock convenience wrapper.
pub fn is_visible(repo: &Reposition, viewer: Option<Area>) -> bool {
    is_visible_at(repo, viewer, Utc::now())
}
