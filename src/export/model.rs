use crate::models::reposition::Reposition;
use crate::utils::date::format_datetime;
use serde::Serialize;

/// Flat, spreadsheet-friendly projection of a reposition.
#[derive(Serialize, Clone, Debug)]
pub struct RepositionExport {
    pub id: i64,
    pub folio: String,
    pub status: String,
    pub urgencia: String,
    pub tipo: String,
    pub area_actual: String,
    pub area_solicitante: String,
    pub area_causante: String,
    pub cliente: String,
    pub modelo: String,
    pub motivo: String,
    pub descripcion: String,
    pub piezas: i64,
    pub creado: String,
    pub finalizado: String,
}

impl From<&Reposition> for RepositionExport {
    fn from(r: &Reposition) -> Self {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();

        RepositionExport {
            id: r.id,
            folio: r.folio.clone(),
            status: r.status.clone(),
            urgencia: opt(&r.urgencia),
            tipo: opt(&r.tipo),
            area_actual: opt(&r.current_area),
            area_solicitante: opt(&r.solicitante_area),
            area_causante: opt(&r.area_causante_dano),
            cliente: opt(&r.cliente),
            modelo: opt(&r.modelo),
            motivo: opt(&r.motivo),
            descripcion: opt(&r.descripcion),
            piezas: r.piezas,
            creado: format_datetime(r.created_at),
            finalizado: r.finalized_at().map(format_datetime).unwrap_or_default(),
        }
    }
}

/// Column headers for CSV / XLSX / PDF.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "folio",
        "status",
        "urgencia",
        "tipo",
        "area_actual",
        "area_solicitante",
        "area_causante",
        "cliente",
        "modelo",
        "motivo",
        "descripcion",
        "piezas",
        "creado",
        "finalizado",
    ]
}

pub(crate) fn reposition_to_row(e: &RepositionExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.folio.clone(),
        e.status.clone(),
        e.urgencia.clone(),
        e.tipo.clone(),
        e.area_actual.clone(),
        e.area_solicitante.clone(),
        e.area_causante.clone(),
        e.cliente.clone(),
        e.modelo.clone(),
        e.motivo.clone(),
        e.descripcion.clone(),
        e.piezas.to_string(),
        e.creado.clone(),
        e.finalizado.clone(),
    ]
}

pub(crate) fn repositions_to_table(rows: &[RepositionExport]) -> Vec<Vec<String>> {
    rows.iter().map(reposition_to_row).collect()
}
