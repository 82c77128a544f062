//! # cast-settings
//!
//! Layered configuration for the cast store.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`CastSettings::default()`]
//! 2. **User file** — `$CAST_HOME/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `CAST_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, cast_home, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::*;
