//! Filesystem path resolution for durable storage.
//!
//! Resolves the default data directory for the watched-list JSON file,
//! following the XDG convention with a home-relative fallback.

use std::path::PathBuf;

/// Returns the default data directory for cinetrack storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/cinetrack`
/// 2. `$HOME/.local/share/cinetrack`
/// 3. `.cinetrack` relative to the working directory, when neither variable
///    is set
///
/// The default watched-list file `watched.json` lives inside this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("cinetrack");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".local/share/cinetrack");
    }
    PathBuf::from(".cinetrack")
}
