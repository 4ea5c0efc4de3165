use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Splash-screen greeting line.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Delay before the session becomes interactive, in milliseconds.
    #[serde(default = "default_splash_millis")]
    pub splash_millis: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_greeting() -> String {
    "Welcome".to_string()
}
fn default_splash_millis() -> u64 {
    2000
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            splash_millis: default_splash_millis(),
            separator_char: default_separator_char(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("habitrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".habitrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("habitrack.conf")
    }

    /// Load configuration from the standard location, or defaults if absent
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path, or defaults if absent
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }
}
