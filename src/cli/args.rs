//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Belay - GitOps environment and pipeline manifest management.
#[derive(Debug, Parser)]
#[command(name = "belay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage deployment environments in the pipelines manifest
    Environment(EnvironmentArgs),

    /// Inspect webhooks on the GitOps repository
    Webhook(WebhookArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `environment` command group.
#[derive(Debug, clap::Args)]
pub struct EnvironmentArgs {
    #[command(subcommand)]
    pub command: EnvironmentCommands,
}

/// Environment subcommands.
#[derive(Debug, Subcommand)]
pub enum EnvironmentCommands {
    /// Add a new environment to the pipelines manifest
    Add(EnvironmentAddArgs),
}

/// Arguments for `environment add`.
#[derive(Debug, Clone, clap::Args)]
pub struct EnvironmentAddArgs {
    /// Name of the environment to add
    #[arg(long)]
    pub env_name: String,

    /// Target cluster for the new environment
    #[arg(long)]
    pub cluster: Option<String>,

    /// Folder containing the pipelines manifest
    #[arg(long, default_value = ".")]
    pub pipelines_folder: PathBuf,
}

/// Arguments for the `webhook` command group.
#[derive(Debug, clap::Args)]
pub struct WebhookArgs {
    #[command(subcommand)]
    pub command: WebhookCommands,
}

/// Webhook subcommands.
#[derive(Debug, Subcommand)]
pub enum WebhookCommands {
    /// List webhook IDs of the GitOps repository
    List(WebhookListArgs),
}

/// Arguments for `webhook list`.
#[derive(Debug, Clone, clap::Args)]
pub struct WebhookListArgs {
    /// Access token for the Git hosting provider API
    #[arg(long, env = "BELAY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Folder containing the pipelines manifest
    #[arg(long, default_value = ".")]
    pub pipelines_folder: PathBuf,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
