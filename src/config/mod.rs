use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

use crate::models::area::Area;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the local snapshot cache (SQLite).
    pub database: String,
    /// Viewer area code: decides visibility windows and delete permission.
    pub area: String,
    /// Display name used in the status greeting.
    pub user_name: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// RFC 3339 target of the announced platform update, if one is running.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_recent_limit() -> usize {
    10
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            area: "corte".to_string(),
            user_name: "Operador".to_string(),
            recent_limit: default_recent_limit(),
            release_date: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jasana")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jasana")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jasana.conf")
    }

    /// Return the full path of the SQLite cache
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("jasana.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// The viewer's area, when the configured code is a known one. Unknown
    /// codes behave like a non-privileged outside viewer.
    pub fn viewer(&self) -> Option<Area> {
        Area::from_code(&self.area)
    }

    /// Initialize configuration and cache files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped under --test so test runs never touch
        // the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty cache file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Cache:       {:?}", db_path);

        Ok(db_path)
    }
}
