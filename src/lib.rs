//! Belay - GitOps environment and pipeline manifest management.
//!
//! Belay manages a declarative pipelines manifest describing a GitOps
//! deployment: named environments, their target clusters, and which CI/CD
//! pipeline templates and trigger bindings apply to each.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Environment derivation and manifest mutation
//! - [`error`] - Error types and result aliases
//! - [`githost`] - Git hosting provider resolution
//! - [`manifest`] - Manifest schema, loading, and saving
//! - [`projector`] - Generated kustomization trees per environment
//! - [`ui`] - Terminal output and table rendering
//! - [`webhook`] - Webhook listing against Git host APIs
//!
//! # Example
//!
//! ```
//! use belay::githost::HostRegistry;
//!
//! let registry = HostRegistry::default();
//! let bindings = registry.push_bindings("https://github.com/foo/bar");
//! assert_eq!(bindings, vec!["github-push-binding".to_string()]);
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod githost;
pub mod manifest;
pub mod projector;
pub mod ui;
pub mod webhook;

pub use error::{BelayError, Result};
