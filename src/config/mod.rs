use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite key-value store holding the workout snapshot.
    pub database: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

fn default_map_zoom() -> u8 {
    13
}
fn default_show_icons() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            map_zoom: default_map_zoom(),
            show_icons: default_show_icons(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtracklogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtracklogger")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtracklogger.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtracklogger.sqlite")
    }

    /// Load configuration from file. A missing or unreadable file falls back
    /// to the defaults so every command works before `init` ran.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("configuration unreadable, using defaults: {e}");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("could not read configuration file: {e}");
                Self::default()
            }
        }
    }

    /// Create the config directory, the configuration file (skipped in test
    /// mode), and an empty storage file.
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

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
