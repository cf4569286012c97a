//! Where tabcalc keeps its files
//!
//! ```text
//! $XDG_CONFIG_HOME/tabcalc/      (default ~/.config/tabcalc/, %APPDATA%\tabcalc\ on Windows)
//! ├── config.yaml
//! ├── keymap.yaml
//! └── logs/tabcalc.log.YYYY-MM-DD
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "tabcalc";
const LOGS_DIR: &str = "logs";

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const KEYMAP_FILE_NAME: &str = "keymap.yaml";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "tabcalc.log";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();

    #[cfg(not(target_os = "windows"))]
    let base = config_base(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir());

    base.map(|base| base.join(APP_DIR))
}

/// `XDG_CONFIG_HOME` wins when set and non-empty, else `<home>/.config`
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn config_base(xdg: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg.filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(KEYMAP_FILE_NAME))
}

fn create_dir(path: PathBuf) -> Result<PathBuf, String> {
    fs::create_dir_all(&path)
        .map(|()| path.clone())
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the config directory if needed
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    create_dir(dir)
}

/// Create `logs/` under the config directory if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    create_dir(config.join(LOGS_DIR))
}
