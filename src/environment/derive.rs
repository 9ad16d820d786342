//! Environment derivation.
//!
//! Builds a new [`Environment`] from a manifest and a requested name,
//! applying the CI binding rules. Derivation is pure construction:
//! uniqueness against existing environments is the mutator's concern.

use crate::error::{BelayError, Result};
use crate::githost::HostRegistry;
use crate::manifest::{Environment, Manifest, Pipelines, TemplateBinding};

/// Template applied to every CI-integrated environment.
pub const APP_CI_TEMPLATE: &str = "app-ci-template";

/// Derive a new environment with the given name.
///
/// The CI pipelines block is attached iff the manifest carries both a
/// non-empty `gitops_url` and a non-empty `config.pipelines.name`; absence
/// at any level means the environment is created without pipelines. The
/// trigger bindings come from the host registry; an unrecognized host
/// leaves the binding list empty rather than failing.
pub fn derive_environment(
    manifest: &Manifest,
    name: &str,
    registry: &HostRegistry,
) -> Result<Environment> {
    if name.is_empty() {
        return Err(BelayError::EmptyEnvironmentName);
    }

    let mut env = Environment::named(name);

    let gitops_url = manifest.gitops_url.as_deref().filter(|url| !url.is_empty());
    if let (Some(url), Some(_cicd)) = (gitops_url, manifest.cicd_name()) {
        env.pipelines = Some(Pipelines {
            integration: Some(TemplateBinding {
                template: APP_CI_TEMPLATE.to_string(),
                bindings: registry.push_bindings(url),
            }),
        });
    }

    Ok(env)
}
