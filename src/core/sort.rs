//! History ordering.

use crate::models::reposition::Reposition;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    FinalizadoAt,
    Folio,
    Cliente,
    Piezas,
}

impl SortKey {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "createdat" | "created" | "creacion" => Some(SortKey::CreatedAt),
            "finalizadoat" | "finalizado" => Some(SortKey::FinalizadoAt),
            "folio" => Some(SortKey::Folio),
            "cliente" => Some(SortKey::Cliente),
            "piezas" => Some(SortKey::Piezas),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "createdAt",
            SortKey::FinalizadoAt => "finalizadoAt",
            SortKey::Folio => "folio",
            SortKey::Cliente => "cliente",
            SortKey::Piezas => "piezas",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Key comparison for a single pair of records.
///
/// Records without a finalization date compare as the earliest possible
/// value (first in ascending order); a missing cliente compares as the empty
/// string.
pub fn compare(a: &Reposition, b: &Reposition, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        // Option<DateTime> orders None first, exactly the contract
        SortKey::FinalizadoAt => a.finalized_at().cmp(&b.finalized_at()),
        SortKey::Folio => a.folio.cmp(&b.folio),
        SortKey::Cliente => a
            .cliente
            .as_deref()
            .unwrap_or("")
            .cmp(b.cliente.as_deref().unwrap_or("")),
        SortKey::Piezas => a.piezas.cmp(&b.piezas),
    }
}

/// Order records in place. The sort is stable, so equal keys keep their
/// snapshot order.
pub fn sort_repositions(records: &mut [Reposition], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
