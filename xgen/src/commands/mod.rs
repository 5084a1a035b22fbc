mod application;
mod completions;
mod generate;
mod resource;

use std::path::PathBuf;

use application::ApplicationCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use xenon_gen_scaffold::ScaffoldConfig;

/// Extension trait for exiting on scaffold errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for xenon_gen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "xgen")]
#[command(version)]
#[command(about = "Scaffold layered Go REST applications")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Api(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an application or a resource
    #[command(visible_alias = "g")]
    Generate(GenerateCommand),

    /// Create an API application (shortcut for generate application)
    Api(ApplicationCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags shared by every generator.
#[derive(Args)]
pub struct ScaffoldArgs {
    /// Path to an xgen TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write into non-empty destinations and overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ScaffoldArgs {
    /// Load the config file, if any, with the shared flags applied on top.
    pub fn load(&self) -> xenon_gen_core::Result<ScaffoldConfig> {
        let mut config = match &self.config {
            Some(path) => ScaffoldConfig::open(path)?,
            None => ScaffoldConfig::default(),
        };
        config.force |= self.force;
        Ok(config)
    }
}
