//! Webhook listing against Git host REST APIs.
//!
//! GitHub and GitLab expose repository hooks over slightly different
//! endpoints and auth headers; [`WebhookLister`] picks the right one from
//! the repository URL's host. API bases are injectable so tests can point
//! at a mock server.

use crate::error::{BelayError, Result};
use crate::githost::{host_of, repo_path};
use serde::Deserialize;
use std::time::Duration;

const GITHUB_API: &str = "https://api.github.com";
const GITLAB_API: &str = "https://gitlab.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("belay/", env!("CARGO_PKG_VERSION"));

/// The only hook field we care about.
#[derive(Debug, Deserialize)]
struct Hook {
    id: u64,
}

/// Lists repository webhooks via the hosting provider's REST API.
pub struct WebhookLister {
    client: reqwest::blocking::Client,
    github_api: String,
    gitlab_api: String,
}

impl Default for WebhookLister {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookLister {
    /// A lister against the public github.com/gitlab.com APIs.
    pub fn new() -> Self {
        Self::with_endpoints(GITHUB_API, GITLAB_API)
    }

    /// A lister with custom API base URLs.
    pub fn with_endpoints(github_api: impl Into<String>, gitlab_api: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            github_api: github_api.into(),
            gitlab_api: gitlab_api.into(),
        }
    }

    /// List webhook IDs for the repository at `repo_url`.
    pub fn list(&self, token: &str, repo_url: &str) -> Result<Vec<String>> {
        let host = host_of(repo_url).ok_or_else(|| BelayError::InvalidRepoUrl {
            url: repo_url.to_string(),
        })?;
        let repo = repo_path(repo_url).ok_or_else(|| BelayError::InvalidRepoUrl {
            url: repo_url.to_string(),
        })?;

        match host.as_str() {
            "github.com" => self.list_github(token, &repo),
            "gitlab.com" => self.list_gitlab(token, &repo),
            _ => Err(BelayError::UnsupportedGitHost { host }),
        }
    }

    fn list_github(&self, token: &str, repo: &str) -> Result<Vec<String>> {
        let url = format!("{}/repos/{}/hooks", self.github_api, repo);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| BelayError::WebhookRequestFailed {
                url: url.clone(),
                message: e.to_string(),
            })?;
        hook_ids(response, &url)
    }

    fn list_gitlab(&self, token: &str, repo: &str) -> Result<Vec<String>> {
        // GitLab addresses projects by URL-encoded full path.
        let project = repo.replace('/', "%2F");
        let url = format!("{}/api/v4/projects/{}/hooks", self.gitlab_api, project);
        let response = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", token)
            .send()
            .map_err(|e| BelayError::WebhookRequestFailed {
                url: url.clone(),
                message: e.to_string(),
            })?;
        hook_ids(response, &url)
    }
}

fn hook_ids(response: reqwest::blocking::Response, url: &str) -> Result<Vec<String>> {
    let status = response.status();
    if !status.is_success() {
        return Err(BelayError::WebhookRequestFailed {
            url: url.to_string(),
            message: format!("HTTP {}", status),
        });
    }

    let hooks: Vec<Hook> = response.json().map_err(|e| BelayError::WebhookRequestFailed {
        url: url.to_string(),
        message: format!("Unexpected response body: {}", e),
    })?;
    Ok(hooks.into_iter().map(|h| h.id.to_string()).collect())
}
