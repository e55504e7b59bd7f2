//! Centralized path definitions for rollcall
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── rollcall.toml          # Survey, sources, reminder template, SMTP
//! ├── roster.csv             # Expected participants (or a sheet URL)
//! └── responses.csv          # Collected responses (or a sheet URL)
//!
//! ~/.config/rollcall/
//! └── config.toml            # Fallback when no project config exists
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "rollcall.toml";

/// Global configuration directory (relative to home)
const GLOBAL_DIR: &str = ".config/rollcall";

/// Global configuration filename
const GLOBAL_CONFIG: &str = "config.toml";

/// Response log written by `record` when nothing else is configured
pub const DEFAULT_RESPONSE_LOG: &str = "responses.csv";

/// Path to the project config in `dir`
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global config directory (`~/.config/rollcall`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get path to the global config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG)
}
