//! Manifest schema definitions for Belay.
//!
//! This module contains all the struct definitions that map to
//! the pipelines.yaml manifest format.

use serde::{Deserialize, Deserializer, Serialize};

/// Root manifest structure for pipelines.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// URL of the GitOps repository this manifest lives in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitops_url: Option<String>,

    /// Top-level CI/CD configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ManifestConfig>,

    /// Deployment environments, in declaration order
    #[serde(deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<Environment>,
}

impl Manifest {
    /// Look up an environment by name.
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.name == name)
    }

    /// The CI/CD pipelines name, if one is configured.
    ///
    /// Absence at any nesting level (no `config`, no `config.pipelines`,
    /// empty name) resolves to `None`.
    pub fn cicd_name(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|c| c.pipelines.as_ref())
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
    }
}

/// Top-level `config` block of the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// CI/CD pipelines configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines: Option<PipelinesConfig>,
}

/// Names the CI/CD pipelines deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelinesConfig {
    /// Name of the CI/CD pipelines namespace/deployment
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// A single deployment environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Environment name (unique within the manifest)
    pub name: String,

    /// Target cluster for this environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,

    /// CI pipeline configuration, present only when CI binding applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines: Option<Pipelines>,
}

impl Environment {
    /// Create an environment with the given name and nothing else set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Per-environment pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipelines {
    /// CI integration template and its trigger bindings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<TemplateBinding>,
}

/// Pairs a pipeline template with the trigger bindings that feed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateBinding {
    /// Pipeline template name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,

    /// Trigger binding names, provider-specific
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<String>,
}

/// A freshly bootstrapped manifest is often just `environments:` with no
/// entries; serde treats the explicit null as a unit, not a missing key,
/// so map it back to an empty list here.
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_has_defaults() {
        let manifest: Manifest = serde_yaml::from_str("{}").unwrap();
        assert!(manifest.gitops_url.is_none());
        assert!(manifest.config.is_none());
        assert!(manifest.environments.is_empty());
    }

    #[test]
    fn parses_null_environments_key() {
        // A bootstrapped manifest contains just the bare key.
        let manifest: Manifest = serde_yaml::from_str("environments:").unwrap();
        assert!(manifest.environments.is_empty());
    }

    #[test]
    fn parses_full_manifest() {
        let yaml = r#"
gitops_url: https://github.com/foo/bar
config:
  pipelines:
    name: my-cicd
environments:
  - name: dev
    cluster: testing.cluster
  - name: production
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            manifest.gitops_url,
            Some("https://github.com/foo/bar".to_string())
        );
        assert_eq!(manifest.cicd_name(), Some("my-cicd"));
        assert_eq!(manifest.environments.len(), 2);
        assert_eq!(manifest.environments[0].name, "dev");
        assert_eq!(
            manifest.environments[0].cluster,
            Some("testing.cluster".to_string())
        );
        assert!(manifest.environments[1].cluster.is_none());
    }

    #[test]
    fn parses_environment_with_pipelines() {
        let yaml = r#"
environments:
  - name: dev
    pipelines:
      integration:
        template: app-ci-template
        bindings:
          - github-push-binding
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        let pipelines = manifest.environments[0].pipelines.as_ref().unwrap();
        let integration = pipelines.integration.as_ref().unwrap();
        assert_eq!(integration.template, "app-ci-template");
        assert_eq!(integration.bindings, vec!["github-push-binding"]);
    }

    #[test]
    fn cicd_name_absent_without_config() {
        let manifest: Manifest = serde_yaml::from_str("gitops_url: https://github.com/foo/bar")
            .unwrap();
        assert!(manifest.cicd_name().is_none());
    }

    #[test]
    fn cicd_name_absent_without_pipelines_block() {
        let yaml = r#"
config: {}
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.cicd_name().is_none());
    }

    #[test]
    fn cicd_name_absent_when_name_empty() {
        let yaml = r#"
config:
  pipelines:
    name: ""
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.cicd_name().is_none());
    }

    #[test]
    fn environment_lookup_by_name() {
        let yaml = r#"
environments:
  - name: dev
  - name: staging
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.environment("staging").is_some());
        assert!(manifest.environment("production").is_none());
        // Lookup is case-sensitive.
        assert!(manifest.environment("Dev").is_none());
    }

    #[test]
    fn serialize_omits_absent_fields() {
        let manifest = Manifest {
            environments: vec![Environment::named("dev")],
            ..Manifest::default()
        };

        let yaml = serde_yaml::to_string(&manifest).unwrap();

        assert!(yaml.contains("name: dev"));
        assert!(!yaml.contains("gitops_url"), "None gitops_url should be omitted");
        assert!(!yaml.contains("config"), "None config should be omitted");
        assert!(!yaml.contains("cluster"), "None cluster should be omitted");
        assert!(!yaml.contains("pipelines"), "None pipelines should be omitted");
    }

    #[test]
    fn serialize_includes_cluster_when_set() {
        let manifest = Manifest {
            environments: vec![Environment {
                name: "dev".into(),
                cluster: Some("testing.cluster".into()),
                pipelines: None,
            }],
            ..Manifest::default()
        };

        let yaml = serde_yaml::to_string(&manifest).unwrap();
        assert!(yaml.contains("cluster: testing.cluster"));
    }

    #[test]
    fn round_trips_after_mutation() {
        let yaml = r#"
gitops_url: https://gitlab.com/foo/bar
environments:
  - name: dev
"#;
        let mut manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        manifest.environments.push(Environment {
            name: "staging".into(),
            cluster: Some("staging.cluster".into()),
            pipelines: None,
        });

        let serialized = serde_yaml::to_string(&manifest).unwrap();
        let reparsed: Manifest = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(reparsed, manifest);
    }
}
