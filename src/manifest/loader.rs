//! Manifest file loading and saving.
//!
//! This module handles reading the pipelines.yaml manifest from a GitOps
//! folder and writing a mutated manifest back.

use crate::error::{BelayError, Result};
use crate::manifest::schema::Manifest;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the manifest file inside a pipelines folder.
pub const MANIFEST_FILE: &str = "pipelines.yaml";

/// Path to the manifest file within the given pipelines folder.
pub fn manifest_path(pipelines_folder: &Path) -> PathBuf {
    pipelines_folder.join(MANIFEST_FILE)
}

/// Load and parse the manifest at the given path.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the YAML is invalid.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BelayError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BelayError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a Manifest.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|e| BelayError::ManifestParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a manifest to its YAML form.
pub fn serialize_manifest(manifest: &Manifest) -> Result<String> {
    serde_yaml::to_string(manifest)
        .map_err(|e| BelayError::Other(anyhow::anyhow!("Failed to serialize manifest: {}", e)))
}

/// Serialize and write a manifest back to the given path.
pub fn save_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let content = serialize_manifest(manifest)?;
    fs::write(path, content)?;
    Ok(())
}
