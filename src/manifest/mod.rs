//! The pipelines manifest: schema and file handling.
//!
//! The manifest (`pipelines.yaml`) is the single source of truth for a
//! GitOps deployment: which environments exist, which clusters they target,
//! and how CI pipelines bind to them.
//!
//! - Schema definitions in [`schema`]
//! - Loading and saving in [`loader`]

pub mod loader;
pub mod schema;

pub use loader::{
    load_manifest, manifest_path, parse_manifest, save_manifest, serialize_manifest, MANIFEST_FILE,
};
pub use schema::{
    Environment, Manifest, ManifestConfig, Pipelines, PipelinesConfig, TemplateBinding,
};
