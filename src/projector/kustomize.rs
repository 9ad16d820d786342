//! Kustomize document schemas.
//!
//! Minimal serde types for the generated kustomization trees. Only the
//! fields Belay emits are modeled.

use serde::{Deserialize, Serialize};

/// A kustomization.yaml document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kustomization {
    /// Resource files included by this kustomization
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    /// Base directories this kustomization overlays
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,
}

impl Kustomization {
    /// A base kustomization listing the given resource files.
    pub fn with_resources(resources: Vec<String>) -> Self {
        Self {
            resources,
            ..Self::default()
        }
    }

    /// An overlay kustomization pointing at the given bases.
    pub fn with_bases(bases: Vec<String>) -> Self {
        Self {
            bases,
            ..Self::default()
        }
    }
}

/// A v1 Namespace resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
}

/// Object metadata; only the name is emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

impl Namespace {
    /// A Namespace resource with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            api_version: "v1".into(),
            kind: "Namespace".into(),
            metadata: Metadata { name: name.into() },
        }
    }
}
