use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reposition as delivered by the backend snapshot (camelCase wire names).
///
/// The record is read-only from this side: the backend owns it, we only keep
/// a cached copy. Enum-ish fields (status, urgencia, areas, tipo) stay as the
/// raw wire strings so an unknown value coming from a newer backend never
/// breaks parsing; they are canonicalised on demand when filtering/display
/// needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reposition {
    pub id: i64,
    pub folio: String,
    pub status: String,
    #[serde(default)]
    pub urgencia: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub current_area: Option<String>,
    #[serde(default)]
    pub solicitante_area: Option<String>,
    #[serde(default)]
    pub area_causante_dano: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub piezas: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub finalizado_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reposition {
    /// Finalization timestamp. Set iff the record reached a terminal state;
    /// older backend versions wrote `completedAt` instead of `finalizadoAt`.
    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalizado_at.or(self.completed_at)
    }

    /// Case-insensitive substring match over the searchable text fields
    /// (folio, cliente, modelo, motivo, descripcion). `term_lower` must
    /// already be lowercased.
    pub fn matches_search(&self, term_lower: &str) -> bool {
        let hit = |field: Option<&str>| {
            field
                .map(|v| v.to_lowercase().contains(term_lower))
                .unwrap_or(false)
        };

        self.folio.to_lowercase().contains(term_lower)
            || hit(self.cliente.as_deref())
            || hit(self.modelo.as_deref())
            || hit(self.motivo.as_deref())
            || hit(self.descripcion.as_deref())
    }

    /// True when an area has been identified as responsible for the damage.
    pub fn has_accident_origin(&self) -> bool {
        self.area_causante_dano
            .as_deref()
            .map(|a| !a.trim().is_empty())
            .unwrap_or(false)
    }
}
