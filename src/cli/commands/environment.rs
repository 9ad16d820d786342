//! The `environment add` command.

use crate::cli::args::EnvironmentAddArgs;
use crate::environment::{add_env, AddEnvParameters};
use crate::githost::HostRegistry;
use crate::manifest;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The environment add command implementation.
pub struct EnvironmentAddCommand {
    args: EnvironmentAddArgs,
}

impl EnvironmentAddCommand {
    /// Create a new environment add command.
    pub fn new(args: EnvironmentAddArgs) -> Self {
        Self { args }
    }
}

impl Command for EnvironmentAddCommand {
    fn execute(&self, output: &Output) -> crate::error::Result<CommandResult> {
        let params = AddEnvParameters {
            pipelines_folder_path: self.args.pipelines_folder.clone(),
            env_name: self.args.env_name.clone(),
            cluster: self.args.cluster.clone(),
        };

        add_env(&params, &HostRegistry::default())?;

        output.success(&format!(
            "Environment '{}' added to {}",
            self.args.env_name,
            manifest::manifest_path(&self.args.pipelines_folder).display()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::fs;
    use tempfile::TempDir;

    fn add_args(folder: &std::path::Path, name: &str) -> EnvironmentAddArgs {
        EnvironmentAddArgs {
            env_name: name.to_string(),
            cluster: None,
            pipelines_folder: folder.to_path_buf(),
        }
    }

    #[test]
    fn execute_adds_environment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pipelines.yaml"), "environments:").unwrap();

        let cmd = EnvironmentAddCommand::new(add_args(temp.path(), "dev"));
        let result = cmd.execute(&Output::new(OutputMode::Quiet)).unwrap();

        assert!(result.success);
        assert!(temp
            .path()
            .join("environments/dev/env/base/kustomization.yaml")
            .exists());
    }

    #[test]
    fn execute_propagates_duplicate_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("pipelines.yaml"),
            "environments:\n  - name: dev\n",
        )
        .unwrap();

        let cmd = EnvironmentAddCommand::new(add_args(temp.path(), "dev"));
        let result = cmd.execute(&Output::new(OutputMode::Quiet));

        assert!(result.is_err());
    }
}
