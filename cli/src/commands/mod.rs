//! CLI command definitions and dispatch.

mod create;
mod publish;
mod push;
mod rm;

use clap::{Parser, Subcommand};

use manifestctl_core::ManifestPublisher;

/// Manifestctl — assemble and publish multi-arch manifest lists.
#[derive(Parser)]
#[command(name = "manifestctl", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a local manifest list and add images to it
    Create(create::CreateArgs),
    /// Push a local manifest list and all its images to the registry
    Push(push::PushArgs),
    /// Remove a local manifest list
    Rm(rm::RmArgs),
    /// Create, push, then remove a manifest list in one sequence
    Publish(publish::PublishArgs),
}

/// Open a publisher against the host's manifest tool.
pub(crate) fn open_publisher() -> ManifestPublisher {
    ManifestPublisher::new()
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Create(args) => create::execute(args),
        Command::Push(args) => push::execute(args),
        Command::Rm(args) => rm::execute(args),
        Command::Publish(args) => publish::execute(args),
    }
}
