//! Static asset URL resolution
//!
//! The bundler that produces digested file names runs outside this service.
//! We only read its manifest: a flat JSON object mapping logical names such
//! as `app.js` to the file actually deployed, e.g. `app.3f9c2d1e.js`.

use std::collections::HashMap;
use std::path::Path;

/// Maps a logical asset name to a servable URL.
///
/// Must be a pure function of the name for the lifetime of a deployment.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, logical: &str) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to read asset manifest {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serves every asset under a fixed URL prefix, unchanged.
#[derive(Debug, Clone)]
pub struct StaticPrefix {
    prefix: String,
}

impl StaticPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl AssetResolver for StaticPrefix {
    fn resolve(&self, logical: &str) -> String {
        join_url(&self.prefix, logical)
    }
}

/// Resolves through the bundler's digest manifest.
#[derive(Debug, Clone)]
pub struct DigestManifest {
    prefix: String,
    entries: HashMap<String, String>,
}

impl DigestManifest {
    pub fn from_json(prefix: impl Into<String>, json: &str) -> Result<Self, AssetError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            prefix: prefix.into(),
            entries,
        })
    }

    pub fn load(prefix: impl Into<String>, path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(prefix, &json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetResolver for DigestManifest {
    fn resolve(&self, logical: &str) -> String {
        let file = self
            .entries
            .get(logical)
            .map(String::as_str)
            .unwrap_or(logical);
        join_url(&self.prefix, file)
    }
}

fn join_url(prefix: &str, name: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}
