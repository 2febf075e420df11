use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ResolveError;


/// Static catalog mapping image identifiers to their coordinates.
///
/// Loaded once by the caller and read-only for the duration of a
/// resolution. The authoring format is an external concern; this is the
/// parsed view the resolver consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub images: BTreeMap<String, ImageEntry>,
}

/// Coordinates of one catalogued image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_path: Option<String>,
    pub name: String,
    pub tag: String,
}

impl ProductDescriptor {
    /// Load a product descriptor from a JSON document
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product descriptor: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse product descriptor: {}", path.display()))
    }

    /// Look up the entry for an image identifier
    pub fn entry(&self, image: &str) -> Result<&ImageEntry, ResolveError> {
        self.images.get(image).ok_or_else(|| ResolveError::MissingDescriptor {
            image: image.to_string(),
        })
    }
}
