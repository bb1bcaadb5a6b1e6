//! The composed history view: visibility + filters + sort, plus the stat
//! counters the dashboard cards show.

use crate::core::filter::{FilterCriteria, filter_repositions};
use crate::core::sort::{SortKey, SortOrder, sort_repositions};
use crate::models::area::Area;
use crate::models::reposition::Reposition;
use crate::models::status::Status;
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: usize,
    pub pendientes: usize,
    pub en_proceso: usize,
    pub completadas: usize,
}

#[derive(Debug, Clone)]
pub struct HistoryView {
    /// Filtered + ordered records, ready for rendering or export.
    pub entries: Vec<Reposition>,
    /// Size of the raw snapshot before filtering, for the "X de Y" summary.
    pub snapshot_total: usize,
    pub stats: HistoryStats,
}

impl HistoryView {
    pub fn build(
        records: &[Reposition],
        criteria: &FilterCriteria,
        key: SortKey,
        order: SortOrder,
        viewer: Option<Area>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut entries = filter_repositions(records, criteria, viewer, now);
        sort_repositions(&mut entries, key, order);

        let count = |status: Status| {
            entries
                .iter()
                .filter(|r| Status::from_code(&r.status) == Some(status))
                .count()
        };

        let stats = HistoryStats {
            total: entries.len(),
            pendientes: count(Status::Pendiente),
            en_proceso: count(Status::EnProceso),
            completadas: count(Status::Completado),
        };

        HistoryView {
            entries,
            snapshot_total: records.len(),
            stats,
        }
    }

    /// Share of the snapshot the filtered view represents, rounded to whole
    /// percent. An empty snapshot yields 0 instead of dividing by zero.
    pub fn percent_of_total(&self) -> u32 {
        if self.snapshot_total == 0 {
            return 0;
        }
        ((self.entries.len() as f64 / self.snapshot_total as f64) * 100.0).round() as u32
    }
}
