use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::splice::Anchor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read marker config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse marker config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0} marker must not be empty")]
    EmptyMarker(&'static str),

    #[error("primary marker must begin with a line terminator")]
    PrimaryNotLineAnchored,

    #[error("fallback marker must be a substring of the primary marker")]
    FallbackNotInPrimary,
}

/// Marker patterns as they arrive from a JSON config file or CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkerConfig {
    pub primary_marker: String,
    pub fallback_marker: String,
}

impl MarkerConfig {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the markers and hands them to the core.
    ///
    /// The primary must start with `\n` — resolution lands one byte past the
    /// match, so anything else would put the insertion point mid-line.
    pub fn into_anchor(self) -> Result<Anchor, ConfigError> {
        if self.primary_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("primary"));
        }
        if self.fallback_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("fallback"));
        }
        if !self.primary_marker.starts_with('\n') {
            return Err(ConfigError::PrimaryNotLineAnchored);
        }
        if !self.primary_marker.contains(&self.fallback_marker) {
            return Err(ConfigError::FallbackNotInPrimary);
        }
        Ok(Anchor {
            primary: self.primary_marker,
            fallback: self.fallback_marker,
        })
    }
}

/// Expands literal `\n`, `\r`, `\t` and `\\` escapes in a marker given on
/// the command line, where typing a real newline is awkward. Unknown escapes
/// pass through unchanged.
pub fn unescape_marker(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
