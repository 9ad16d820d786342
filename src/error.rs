//! Error types for Belay operations.
//!
//! This module defines [`BelayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BelayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BelayError::Other`) for unexpected errors
//! - All errors should carry the underlying cause in their message

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Belay operations.
#[derive(Debug, Error)]
pub enum BelayError {
    /// Pipelines manifest not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the pipelines manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Environment name was empty.
    #[error("Environment name must not be empty")]
    EmptyEnvironmentName,

    /// An environment with this name already exists in the manifest.
    #[error("Environment '{name}' already exists in the manifest")]
    DuplicateEnvironment { name: String },

    /// The manifest has no GitOps repository URL.
    #[error("Manifest at {path} has no gitops_url")]
    MissingGitOpsUrl { path: PathBuf },

    /// The repository URL does not name an owner/repo path.
    #[error("Cannot determine repository from URL: {url}")]
    InvalidRepoUrl { url: String },

    /// The repository is hosted somewhere we have no webhook API for.
    #[error("No webhook API support for Git host '{host}'")]
    UnsupportedGitHost { host: String },

    /// A webhook API request failed.
    #[error("Webhook request to {url} failed: {message}")]
    WebhookRequestFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Belay operations.
pub type Result<T> = std::result::Result<T, BelayError>;
