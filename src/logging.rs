//! File logging. The terminal belongs to the menu, so logs go to the cache dir.

use std::path::PathBuf;

const APP_NAME: &str = "pagemenu";
const LOG_FILE_NAME: &str = "pagemenu.log";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn cache_dir() -> PathBuf {
    if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME") {
        if !xdg_cache_home.is_empty() {
            return PathBuf::from(xdg_cache_home).join(APP_NAME);
        }
    }
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
}

pub fn default_log_file() -> PathBuf {
    cache_dir().join(LOG_FILE_NAME)
}

pub fn setup_logging(level: log::LevelFilter) -> Result<(), String> {
    let log_file = default_log_file();
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| e.to_string())?;
    log::info!("pagemenu logging initialised (level={level})");
    Ok(())
}
