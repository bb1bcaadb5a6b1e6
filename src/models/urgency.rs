use serde::Serialize;

/// Priority tier of a reposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    Alta,
    Media,
    Baja,
}

impl Urgency {
    /// Parse a wire value. Older snapshots carry the locale variants
    /// urgente / intermedio / poco_urgente, map them to the same tiers.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alta" | "urgente" => Some(Urgency::Alta),
            "media" | "intermedio" => Some(Urgency::Media),
            "baja" | "poco_urgente" => Some(Urgency::Baja),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Urgency::Alta => "alta",
            Urgency::Media => "media",
            Urgency::Baja => "baja",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Urgency::Alta => "ALTA",
            Urgency::Media => "MEDIA",
            Urgency::Baja => "BAJA",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Alta => "\x1b[31m", // red
            Urgency::Media => "\x1b[33m",
            Urgency::Baja => "\x1b[32m",
        }
    }
}

pub fn display_urgency(raw: &str) -> String {
    Urgency::from_code(raw)
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| raw.to_uppercase())
}
