use serde::Serialize;

/// Production areas of the workshop. Snapshot records keep the raw wire
/// string; this enum is the parse target for filters and display mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Area {
    Corte,    // corte
    Bordado,  // bordado
    Ensamble, // ensamble
    Plancha,  // plancha (empaque)
    Calidad,  // calidad
    Envios,   // envios
    Almacen,  // almacen
    Diseno,   // diseño
    Admin,    // admin
}

impl Area {
    pub fn code(&self) -> &'static str {
        match self {
            Area::Corte => "corte",
            Area::Bordado => "bordado",
            Area::Ensamble => "ensamble",
            Area::Plancha => "plancha",
            Area::Calidad => "calidad",
            Area::Envios => "envios",
            Area::Almacen => "almacen",
            Area::Diseno => "diseño",
            Area::Admin => "admin",
        }
    }

    /// Parse a wire/CLI code. Accepts the ASCII spelling of "diseño" too.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "corte" => Some(Area::Corte),
            "bordado" => Some(Area::Bordado),
            "ensamble" => Some(Area::Ensamble),
            "plancha" => Some(Area::Plancha),
            "calidad" => Some(Area::Calidad),
            "envios" | "envíos" => Some(Area::Envios),
            "almacen" | "almacén" => Some(Area::Almacen),
            "diseño" | "diseno" => Some(Area::Diseno),
            "admin" => Some(Area::Admin),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Area::Corte => "Corte",
            Area::Bordado => "Bordado",
            Area::Ensamble => "Ensamble",
            Area::Plancha => "Plancha/Empaque",
            Area::Calidad => "Calidad",
            Area::Envios => "Envíos",
            Area::Almacen => "Almacén",
            Area::Diseno => "Diseño",
            Area::Admin => "Admin",
        }
    }

    /// ANSI badge color for terminal output.
    pub fn color(&self) -> &'static str {
        match self {
            Area::Corte => "\x1b[32m",   // green
            Area::Bordado => "\x1b[34m", // blue
            Area::Ensamble => "\x1b[35m",
            Area::Plancha => "\x1b[95m",
            Area::Calidad => "\x1b[36m",
            Area::Envios => "\x1b[35m",
            Area::Almacen => "\x1b[33m",
            Area::Diseno => "\x1b[95m",
            Area::Admin => "\x1b[90m",
        }
    }

    /// Admin and Envíos have full access: they see every record regardless
    /// of the finalization window and may delete repositions.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Area::Admin | Area::Envios)
    }
}

/// Human label for a raw wire value, falling back to the value itself when
/// it is not one of the known areas.
pub fn display_area(raw: &str) -> String {
    Area::from_code(raw)
        .map(|a| a.display_name().to_string())
        .unwrap_or_else(|| raw.to_string())
}
