/// Process adapters driving pip and pipdeptree
mod pip_client;
mod pipdeptree_client;

pub use pip_client::PipMetadataProvider;
pub use pipdeptree_client::PipdeptreeComparisonSource;

use crate::shared::error::AnalyzerError;
use std::io;
use std::process::{Command, Output};

/// Runs `command`, mapping a failure to start it onto `ToolUnavailable`.
fn run_tool(mut command: Command, tool: &str, hint: &str) -> crate::shared::Result<Output> {
    tracing::debug!(?command, "running external tool");
    command.output().map_err(|e| {
        let details = match e.kind() {
            io::ErrorKind::NotFound => "command not found".to_string(),
            _ => e.to_string(),
        };
        AnalyzerError::ToolUnavailable {
            tool: tool.to_string(),
            details,
            hint: hint.to_string(),
        }
        .into()
    })
}
