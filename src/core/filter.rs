//! History filter pipeline.
//!
//! Criteria are independent and AND-combined, in the same order the
//! dashboard applies them: visibility first, then free-text search, area,
//! status, urgency, type, accident origin and creation-date period.

use crate::core::visibility::is_visible_at;
use crate::models::area::Area;
use crate::models::reposition::Reposition;
use crate::models::status::Status;
use crate::models::tipo::Tipo;
use crate::models::urgency::Urgency;
use chrono::{DateTime, Duration, Utc};

/// Accident-origin criterion: whether a causing area was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccidentFilter {
    #[default]
    All,
    WithAccident,
    WithoutAccident,
}

impl AccidentFilter {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(AccidentFilter::All),
            "with_accident" | "with" => Some(AccidentFilter::WithAccident),
            "without_accident" | "without" => Some(AccidentFilter::WithoutAccident),
            _ => None,
        }
    }
}

/// Creation-date criterion relative to `now`.
///
/// `Today` compares calendar dates; the rest are trailing windows of whole
/// 24-hour days (not calendar-aware), matching the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
    Quarter,
    Semester,
    Year,
}

impl PeriodFilter {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(PeriodFilter::All),
            "today" => Some(PeriodFilter::Today),
            "week" => Some(PeriodFilter::Week),
            "month" => Some(PeriodFilter::Month),
            "quarter" => Some(PeriodFilter::Quarter),
            "semester" => Some(PeriodFilter::Semester),
            "year" => Some(PeriodFilter::Year),
            _ => None,
        }
    }

    fn trailing_days(&self) -> Option<i64> {
        match self {
            PeriodFilter::All | PeriodFilter::Today => None,
            PeriodFilter::Week => Some(7),
            PeriodFilter::Month => Some(30),
            PeriodFilter::Quarter => Some(90),
            PeriodFilter::Semester => Some(180),
            PeriodFilter::Year => Some(365),
        }
    }

    fn matches(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Today => created_at.date_naive() == now.date_naive(),
            _ => {
                // trailing_days is Some for every remaining variant
                let days = self.trailing_days().unwrap_or(0);
                created_at >= now - Duration::days(days)
            }
        }
    }
}

/// One set of history filters. `None` / `All` means the criterion is
/// bypassed, the dashboard's "all" option.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub area: Option<Area>,
    pub status: Option<Status>,
    pub urgency: Option<Urgency>,
    pub tipo: Option<Tipo>,
    pub accident: AccidentFilter,
    pub period: PeriodFilter,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map(str::is_empty).unwrap_or(true)
            && self.area.is_none()
            && self.status.is_none()
            && self.urgency.is_none()
            && self.tipo.is_none()
            && self.accident == AccidentFilter::All
            && self.period == PeriodFilter::All
    }

    fn matches(&self, repo: &Reposition, now: DateTime<Utc>) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => repo.matches_search(&term.to_lowercase()),
        };

        let matches_area = match self.area {
            None => true,
            Some(filter) => {
                let hits = |raw: Option<&str>| {
                    raw.and_then(Area::from_code)
                        .map(|a| a == filter)
                        .unwrap_or(false)
                };
                hits(repo.current_area.as_deref()) || hits(repo.solicitante_area.as_deref())
            }
        };

        let matches_status = match self.status {
            None => true,
            Some(filter) => Status::from_code(&repo.status) == Some(filter),
        };

        let matches_urgency = match self.urgency {
            None => true,
            Some(filter) => {
                repo.urgencia
                    .as_deref()
                    .and_then(Urgency::from_code)
                    .map(|u| u == filter)
                    .unwrap_or(false)
            }
        };

        let matches_tipo = match self.tipo {
            None => true,
            Some(filter) => {
                repo.tipo
                    .as_deref()
                    .and_then(Tipo::from_code)
                    .map(|t| t == filter)
                    .unwrap_or(false)
            }
        };

        let matches_accident = match self.accident {
            AccidentFilter::All => true,
            AccidentFilter::WithAccident => repo.has_accident_origin(),
            AccidentFilter::WithoutAccident => !repo.has_accident_origin(),
        };

        matches_search
            && matches_area
            && matches_status
            && matches_urgency
            && matches_tipo
            && matches_accident
            && self.period.matches(repo.created_at, now)
    }
}

/// Apply visibility plus the whole criteria set over a snapshot.
///
/// Pure projection over an immutable snapshot: applying the same criteria
/// twice yields the same records.
pub fn filter_repositions(
    records: &[Reposition],
    criteria: &FilterCriteria,
    viewer: Option<Area>,
    now: DateTime<Utc>,
) -> Vec<Reposition> {
    records
        .iter()
        .filter(|r| is_visible_at(r, viewer, now))
        .filter(|r| criteria.matches(r, now))
        .cloned()
        .collect()
}
