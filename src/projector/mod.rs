//! Projection of environments onto the generated file tree.
//!
//! Each new environment projects to a fixed, deterministic kustomization
//! layout under the pipelines folder:
//!
//! ```text
//! environments/<name>/env/base/kustomization.yaml
//! environments/<name>/env/base/<name>-environment.yaml
//! environments/<name>/env/overlays/kustomization.yaml
//! ```
//!
//! [`project`] is a pure function from an [`Environment`] to that file set;
//! [`write_files`] is the I/O half that puts the bytes on disk.

pub mod kustomize;

use crate::error::Result;
use crate::manifest::Environment;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use kustomize::{Kustomization, Metadata, Namespace};

/// A generated file: path relative to the pipelines folder, plus content.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Project an environment onto its generated file set.
///
/// Exactly three files are produced, with content derived solely from the
/// environment itself.
pub fn project(env: &Environment) -> Result<Vec<GeneratedFile>> {
    let env_dir = Path::new("environments").join(&env.name).join("env");
    let resource_file = format!("{}-environment.yaml", env.name);

    let base = Kustomization::with_resources(vec![resource_file.clone()]);
    let namespace = Namespace::named(&env.name);
    let overlay = Kustomization::with_bases(vec!["../base".into()]);

    Ok(vec![
        GeneratedFile {
            path: env_dir.join("base").join("kustomization.yaml"),
            content: to_yaml(&base)?,
        },
        GeneratedFile {
            path: env_dir.join("base").join(resource_file),
            content: to_yaml(&namespace)?,
        },
        GeneratedFile {
            path: env_dir.join("overlays").join("kustomization.yaml"),
            content: to_yaml(&overlay)?,
        },
    ])
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize generated file: {}", e).into())
}

/// Write generated files under the given root, creating directories as
/// needed.
pub fn write_files(root: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
    }
    Ok(())
}
