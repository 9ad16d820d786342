//! The `webhook list` command.

use crate::cli::args::WebhookListArgs;
use crate::ui::{Output, Table};
use crate::webhook;

use super::dispatcher::{Command, CommandResult};

/// The webhook list command implementation.
pub struct WebhookListCommand {
    args: WebhookListArgs,
}

impl WebhookListCommand {
    /// Create a new webhook list command.
    pub fn new(args: WebhookListArgs) -> Self {
        Self { args }
    }

    fn render(&self, ids: &[String], output: &Output) -> crate::error::Result<()> {
        if self.args.json {
            let rendered = serde_json::to_string(ids)
                .map_err(|e| anyhow::anyhow!("Failed to render webhook IDs as JSON: {}", e))?;
            output.result(&rendered);
            return Ok(());
        }

        if ids.is_empty() {
            output.status("No webhooks found.");
            return Ok(());
        }

        let mut table = Table::new(vec!["ID"]);
        for id in ids {
            table.add_row(vec![id]);
        }
        output.result(&table.render());
        Ok(())
    }
}

impl Command for WebhookListCommand {
    fn execute(&self, output: &Output) -> crate::error::Result<CommandResult> {
        let ids = webhook::list_webhook_ids(&self.args.access_token, &self.args.pipelines_folder)?;
        self.render(&ids, output)?;
        Ok(CommandResult::success())
    }
}
