//! Configuration file upkeep: report and fill keys that older installs are
//! missing, without disturbing the values the user already set.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every current config must carry, with their default literal.
const REQUIRED_KEYS: [(&str, &str); 6] = [
    ("database", ""),
    ("area", "corte"),
    ("user_name", "Operador"),
    ("recent_limit", "10"),
    ("release_date", "~"),
    ("separator_char", "-"),
];

/// List config keys missing from the given file. A missing file reports all
/// keys.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(REQUIRED_KEYS.iter().map(|(k, _)| *k).collect());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => return Ok(REQUIRED_KEYS.iter().map(|(k, _)| *k).collect()),
    };

    Ok(REQUIRED_KEYS
        .iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| *k)
        .collect())
}

/// `config --check`: report missing keys without touching the file.
pub fn check_config(path: &Path) -> AppResult<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!("Missing keys: {}", missing.join(", ")));
        info("Run `jasana config --migrate` to fill them with defaults.");
    }
    Ok(())
}

/// `config --migrate`: append defaults for every missing key.
pub fn migrate_config(path: &Path) -> AppResult<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Nothing to migrate: configuration file is complete.");
        return Ok(());
    }

    let mut content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    for (key, default) in REQUIRED_KEYS {
        if missing.contains(&key) {
            content.push_str(&format!("{key}: {default}\n"));
        }
    }

    fs::write(path, content)?;
    success(format!("Added missing keys: {}", missing.join(", ")));
    Ok(())
}
