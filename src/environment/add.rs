//! Adding environments to a pipelines manifest.
//!
//! [`add_environment`] is the in-memory mutation: validate uniqueness,
//! derive, append. [`add_env`] is the full operation the CLI runs: load the
//! manifest, mutate it, and write the manifest plus the new environment's
//! kustomization tree back to the pipelines folder.

use crate::environment::derive::derive_environment;
use crate::error::{BelayError, Result};
use crate::githost::HostRegistry;
use crate::manifest::{self, Manifest};
use crate::projector::{self, GeneratedFile};
use std::path::PathBuf;

/// Parameters for an add-environment operation.
#[derive(Debug, Clone)]
pub struct AddEnvParameters {
    /// Folder containing pipelines.yaml and the generated trees
    pub pipelines_folder_path: PathBuf,

    /// Name of the environment to add
    pub env_name: String,

    /// Target cluster, if one was supplied
    pub cluster: Option<String>,
}

/// Validate and append a newly derived environment to the manifest.
///
/// The duplicate scan runs before anything else; on failure the manifest is
/// left untouched. The new environment is appended, preserving the order of
/// existing entries.
pub fn add_environment(
    manifest: &mut Manifest,
    params: &AddEnvParameters,
    registry: &HostRegistry,
) -> Result<()> {
    if manifest.environment(&params.env_name).is_some() {
        return Err(BelayError::DuplicateEnvironment {
            name: params.env_name.clone(),
        });
    }

    let mut env = derive_environment(manifest, &params.env_name, registry)?;
    env.cluster = params.cluster.clone();

    tracing::debug!(name = %env.name, "appending environment to manifest");
    manifest.environments.push(env);
    Ok(())
}

/// Add an environment to the manifest in the pipelines folder and write the
/// updated manifest and generated files.
///
/// All output content is assembled in memory before the first write, so a
/// failing validation leaves the folder untouched.
pub fn add_env(params: &AddEnvParameters, registry: &HostRegistry) -> Result<()> {
    let manifest_file = manifest::manifest_path(&params.pipelines_folder_path);
    let mut loaded = manifest::load_manifest(&manifest_file)?;

    add_environment(&mut loaded, params, registry)?;

    let mut files: Vec<GeneratedFile> = loaded
        .environments
        .last()
        .map(projector::project)
        .transpose()?
        .unwrap_or_default();
    files.push(GeneratedFile {
        path: PathBuf::from(manifest::MANIFEST_FILE),
        content: manifest::serialize_manifest(&loaded)?,
    });

    projector::write_files(&params.pipelines_folder_path, &files)?;
    tracing::debug!(
        env = %params.env_name,
        folder = %params.pipelines_folder_path.display(),
        files = files.len(),
        "environment added"
    );
    Ok(())
}
