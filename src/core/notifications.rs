//! Notification feed logic: which rows the panel shows, the badge count,
//! per-kind icon/color mapping, and the panel interaction state.

use crate::models::notification::Notification;
use crate::models::transfer::Transfer;
use ansi_term::Colour;
use std::collections::HashSet;

/// Kinds the panel cares about. The backend emits many notification types;
/// the panel only surfaces the reposition/completion family.
pub fn is_reposition_related(kind: &str) -> bool {
    kind.contains("reposition")
        || kind.contains("completion")
        || matches!(kind, "partial_transfer_warning")
}

/// Unread, reposition-related notifications, in snapshot order.
pub fn unread(all: &[Notification]) -> Vec<&Notification> {
    all.iter()
        .filter(|n| !n.read && is_reposition_related(&n.kind))
        .collect()
}

/// Bell badge count: pending transfers plus unread reposition notifications.
pub fn badge_count(notifications: &[Notification], transfers: &[Transfer]) -> usize {
    let pending = transfers.iter().filter(|t| t.is_pending()).count();
    pending + unread(notifications).len()
}

/// Terminal icon + color for a notification kind. Unknown kinds fall back to
/// the generic bell.
pub fn describe_kind(kind: &str) -> (&'static str, Colour) {
    match kind {
        "transfer" | "reposition_transfer" | "transfer_processed" => ("→", Colour::Blue),
        "reposition_approved" | "reposition_completed" | "reposition_received"
        | "order_completed" => ("✔", Colour::Green),
        "new_reposition" | "reposition_created" | "order_created" => ("+", Colour::Purple),
        "reposition_rejected" | "reposition_deleted" => ("✖", Colour::Red),
        "completion_approval_needed" | "partial_transfer_warning" => ("!", Colour::Yellow),
        _ => ("•", Colour::White),
    }
}

/// Interaction state of the notifications panel, keyed by notification id.
///
/// Dismissal is two-phase: a notification first enters the dismissing set
/// (the UI plays its removal out), then `finish_dismiss` drops it once the
/// read-mark has been recorded. Both sets are plain local state; deriving
/// anything from them is side-effect free.
#[derive(Debug, Default)]
pub struct PanelState {
    expanded: HashSet<i64>,
    dismissing: HashSet<i64>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_expanded(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    pub fn begin_dismiss(&mut self, id: i64) {
        self.dismissing.insert(id);
    }

    /// Called once the read-mark landed (or failed); either way the entry
    /// stops animating.
    pub fn finish_dismiss(&mut self, id: i64) {
        self.dismissing.remove(&id);
        self.expanded.remove(&id);
    }

    pub fn is_dismissing(&self, id: i64) -> bool {
        self.dismissing.contains(&id)
    }

    pub fn dismissing_count(&self) -> usize {
        self.dismissing.len()
    }
}
