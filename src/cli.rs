//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{AccessCmd, ConfigCmd, EditableCmd, ResponsesCmd, SummaryCmd, WindowCmd};

#[derive(Parser)]
#[command(name = "dash")]
#[command(about = "Dash - package entitlements and dashboard period filters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show features and limits for a user or package
    Access(AccessCmd),

    /// Resolve a period token to a date range
    Window(WindowCmd),

    /// Count forms, employees and responses in a period
    Summary(SummaryCmd),

    /// List responses with filters, ordering and edit status
    Responses(ResponsesCmd),

    /// Check whether a submission can still be edited
    Editable(EditableCmd),

    /// Manage configuration (week start, package catalog)
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Access(cmd) => cmd.run().await,
            Command::Window(cmd) => cmd.run().await,
            Command::Summary(cmd) => cmd.run().await,
            Command::Responses(cmd) => cmd.run().await,
            Command::Editable(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}
