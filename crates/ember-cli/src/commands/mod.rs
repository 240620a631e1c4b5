//! CLI commands for ember

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod get;
pub mod list;
pub mod show;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Get the deployed address of a contract in a module
    Get(get::GetCommand),

    /// List all deployed addresses in a module
    List(list::ListCommand),

    /// Print the full deployment manifest for a module
    Show(show::ShowCommand),
}

impl Command {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Command::Get(cmd) => cmd.run(),
            Command::List(cmd) => cmd.run(),
            Command::Show(cmd) => cmd.run(),
        }
    }
}
