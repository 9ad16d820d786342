//! Webhook listing for the GitOps repository.
//!
//! Peripheral to the manifest core: reads the manifest only to find the
//! repository URL, then talks to the hosting provider's API via
//! [`client::WebhookLister`].

pub mod client;

use crate::error::{BelayError, Result};
use crate::manifest;
use std::path::Path;

pub use client::WebhookLister;

/// List webhook IDs for the GitOps repository named by the manifest in
/// `pipelines_folder`.
pub fn list_webhook_ids(access_token: &str, pipelines_folder: &Path) -> Result<Vec<String>> {
    let manifest_file = manifest::manifest_path(pipelines_folder);
    let loaded = manifest::load_manifest(&manifest_file)?;

    let repo_url = loaded
        .gitops_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or(BelayError::MissingGitOpsUrl {
            path: manifest_file,
        })?;

    WebhookLister::new().list(access_token, repo_url)
}
