use clap::{Args, Subcommand};
use eyre::Result;

use super::{application::ApplicationCommand, resource::ResourceCommand};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(subcommand)]
    pub target: Target,
}

#[derive(Subcommand)]
pub enum Target {
    /// Create a new application skeleton
    #[command(visible_alias = "app")]
    Application(ApplicationCommand),

    /// Add a resource to an existing application
    Resource(ResourceCommand),
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        match &self.target {
            Target::Application(cmd) => cmd.run(),
            Target::Resource(cmd) => cmd.run(),
        }
    }
}
