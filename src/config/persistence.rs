use std::fs;
use std::path::PathBuf;

use crate::strip::SavedState;

use super::StripConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("slidetab").join("config.ron"))
}

fn session_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("slidetab").join("session.ron"))
}

fn write_ron<T: serde::Serialize>(path: Option<PathBuf>, value: &T) {
    let Some(path) = path else {
        return;
    };
    let Some(dir) = path.parent() else {
        return;
    };
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(value, pretty) else {
        return;
    };
    let _ = fs::write(path, serialized);
}

/// Loads the strip config from disk, falling back to defaults on any error.
pub fn load_config() -> StripConfig {
    let Some(path) = config_path() else {
        return StripConfig::default();
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        return StripConfig::default();
    };
    ron::from_str(&contents).unwrap_or_default()
}

/// Persists the strip config to disk. Errors are silently ignored.
pub fn save_config(config: &StripConfig) {
    write_ron(config_path(), config);
}

/// Loads the persisted widget state (the selected page index), if any.
pub fn load_session() -> Option<SavedState> {
    let path = session_path()?;
    let contents = fs::read_to_string(&path).ok()?;
    ron::from_str(&contents).ok()
}

/// Persists the widget state to disk. Errors are silently ignored.
pub fn save_session(state: &SavedState) {
    write_ron(session_path(), state);
}
