//! Catalog document loading
//!
//! Accepts either a bare array of releases or an object with a `releases` key:
//!
//! ```json
//! { "releases": [ { "version": "1.0", "title": "First", "changes": [] } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::changelog::types::Release;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Releases(Vec<Release>),
    Wrapped { releases: Vec<Release> },
}

impl From<CatalogDocument> for Vec<Release> {
    fn from(document: CatalogDocument) -> Self {
        match document {
            CatalogDocument::Releases(releases) => releases,
            CatalogDocument::Wrapped { releases } => releases,
        }
    }
}

/// Decode a catalog from JSON text.
pub fn parse_catalog(content: &str) -> Result<Vec<Release>, serde_json::Error> {
    let document: CatalogDocument = serde_json::from_str(content)?;
    Ok(document.into())
}

/// Read and decode a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Release>, CatalogError> {
    debug!("Reading catalog from {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let releases = parse_catalog(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} releases from {:?}", releases.len(), path);
    Ok(releases)
}
