use serde::Serialize;

/// Lifecycle states of a reposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Pendiente,
    EnProceso,
    Completado,
    Cancelado,
    Pausado,
}

impl Status {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pendiente" => Some(Status::Pendiente),
            "en_proceso" => Some(Status::EnProceso),
            "completado" => Some(Status::Completado),
            "cancelado" => Some(Status::Cancelado),
            "pausado" => Some(Status::Pausado),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Status::Pendiente => "pendiente",
            Status::EnProceso => "en_proceso",
            Status::Completado => "completado",
            Status::Cancelado => "cancelado",
            Status::Pausado => "pausado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Pendiente => "Pendiente",
            Status::EnProceso => "En Proceso",
            Status::Completado => "Completado",
            Status::Cancelado => "Cancelado",
            Status::Pausado => "Pausado",
        }
    }

    /// ANSI color matching the dashboard badge palette.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Pendiente => "\x1b[33m", // yellow
            Status::EnProceso => "\x1b[34m", // blue
            Status::Completado => "\x1b[32m",
            Status::Cancelado => "\x1b[31m",
            Status::Pausado => "\x1b[90m",
        }
    }
}

/// Label for a raw wire value, unknown statuses fall back unchanged.
pub fn display_status(raw: &str) -> String {
    Status::from_code(raw)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| raw.to_string())
}
