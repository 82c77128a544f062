use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{Result, SettingsError};
use crate::types::CastSettings;

/// Root directory for cast data: `$CAST_HOME`, else `~/.cast`.
pub fn cast_home() -> PathBuf {
    if let Ok(home) = std::env::var("CAST_HOME") {
        return PathBuf::from(home);
    }
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join(".cast")
}

pub fn settings_path() -> PathBuf {
    cast_home().join("settings.json")
}

/// Load settings from the default path with env overrides applied.
pub fn load_settings() -> Result<CastSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from `path`, deep-merged over defaults, then apply `CAST_*` overrides.
/// A missing file yields the defaults.
pub fn load_settings_from_path(path: &Path) -> Result<CastSettings> {
    let settings = read_file_layer(path)?;
    apply_env_overrides(settings, |key| std::env::var(key).ok())
}

fn read_file_layer(path: &Path) -> Result<CastSettings> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(?path, "no settings file, using defaults");
            return Ok(CastSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_owned(),
                source,
            })
        }
    };

    let parse_err = |source| SettingsError::Parse {
        path: path.to_owned(),
        source,
    };
    let user: Value = serde_json::from_str(&raw).map_err(parse_err)?;
    let defaults = serde_json::to_value(CastSettings::default()).map_err(parse_err)?;
    serde_json::from_value(deep_merge(defaults, user)).map_err(parse_err)
}

/// Apply `CAST_DB_PATH`, `CAST_LOG_LEVEL` and `CAST_LOG_JSON` from `lookup`.
pub fn apply_env_overrides<F>(mut settings: CastSettings, lookup: F) -> Result<CastSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("CAST_DB_PATH").filter(|v| !v.is_empty()) {
        settings.database.path = PathBuf::from(path);
    }
    if let Some(level) = lookup("CAST_LOG_LEVEL").filter(|v| !v.is_empty()) {
        settings.logging.level = level;
    }
    if let Some(json) = lookup("CAST_LOG_JSON") {
        settings.logging.json = match json.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" | "" => false,
            _ => {
                return Err(SettingsError::InvalidEnv {
                    key: "CAST_LOG_JSON",
                    value: json,
                })
            }
        };
    }
    Ok(settings)
}

/// Recursively merge `overlay` into `base`. Objects merge key-by-key; any other
/// overlay value replaces the base value.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, overlay) => overlay,
    }
}
