//! Path utilities for the state and tracker database locations.

use std::path::{Path, PathBuf};

/// Resolve a leading `~/` against the home directory; other paths are kept as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// Database location for a name given on `init`: absolute (or `~/`) paths
/// are used as they are, bare names land in `base`.
pub fn database_in(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}
