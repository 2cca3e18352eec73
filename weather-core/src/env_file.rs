//! Shell-style `KEY=VALUE` files, as written by HyDE into its state directory.

use directories::BaseDirs;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Parse the contents of an env file into ordered `(key, value)` pairs.
///
/// Supported syntax: blank lines, `#` comment lines, an optional `export `
/// prefix and double-quoted values. Lines without `=` are skipped.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (lineno, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            debug!(line = lineno + 1, "skipping env file line without '='");
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim().trim_matches('"');
        pairs.push((key.to_string(), value.to_string()));
    }

    pairs
}

/// Read and parse an env file. Missing or unreadable files yield `None`.
pub fn load(path: &Path) -> Option<Vec<(String, String)>> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(parse(&contents)),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "env file not loaded");
            None
        }
    }
}

/// The HyDE state files, in load order (later wins).
pub fn default_paths() -> Vec<PathBuf> {
    let Some(dirs) = BaseDirs::new() else {
        return Vec::new();
    };

    let state_dir = dirs
        .state_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.home_dir().join(".local").join("state"));

    let hyde = state_dir.join("hyde");
    vec![hyde.join("staterc"), hyde.join("config")]
}
