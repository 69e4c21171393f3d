use std::path::PathBuf;

/// Last-seen marker meaning "nothing recorded yet"
pub const NO_HISTORY_SENTINEL: &str = "0";

/// Environment variable read for the log filter when `--log-level` is not given
pub const LOG_ENV_VAR: &str = "WHATS_NEW_LOG";

/// Log filter used when neither `--log-level` nor the environment sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Shown in place of an empty delta
pub const CAUGHT_UP_MESSAGE: &str = "You're all caught up.";

/// Returns the path to the data directory for whats-new.
/// Uses $XDG_DATA_HOME/whats-new if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/whats-new,
/// or ./whats-new if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("whats-new.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("whats-new")
}
