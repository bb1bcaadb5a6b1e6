use serde::Serialize;

/// Category of rework a reposition asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tipo {
    Reparacion,
    Rehechura,
    Ajuste,
    Calidad,
}

impl Tipo {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reparacion" | "reparación" => Some(Tipo::Reparacion),
            "rehechura" => Some(Tipo::Rehechura),
            "ajuste" => Some(Tipo::Ajuste),
            "calidad" => Some(Tipo::Calidad),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tipo::Reparacion => "reparacion",
            Tipo::Rehechura => "rehechura",
            Tipo::Ajuste => "ajuste",
            Tipo::Calidad => "calidad",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tipo::Reparacion => "Reparación",
            Tipo::Rehechura => "Rehechura",
            Tipo::Ajuste => "Ajuste",
            Tipo::Calidad => "Control de Calidad",
        }
    }
}

pub fn display_tipo(raw: &str) -> String {
    Tipo::from_code(raw)
        .map(|t| t.display_name().to_string())
        .unwrap_or_else(|| raw.to_string())
}
