use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use xenon_gen_scaffold::{Driver, ScaffoldConfig};

use super::{ScaffoldArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{CreateLog, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ApplicationCommand {
    /// Application name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Database driver written to conf/app.conf
    #[arg(long)]
    pub driver: Option<Driver>,

    /// Database connection string
    #[arg(long)]
    pub conn: Option<String>,

    /// Comma-separated list of tables
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// HTTP port written to conf/app.conf
    #[arg(long)]
    pub http_port: Option<u16>,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

impl ApplicationCommand {
    pub fn run(&self) -> Result<()> {
        let (app_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let config = self.config().unwrap_or_exit();

        let mut out = TerminalOutput::new();
        let report = ops::application(
            &app_name,
            &output_dir,
            ops::GenerateOptions {
                config,
                dry_run: self.scaffold.dry_run,
                observer: &mut CreateLog::new(&mut out),
            },
        )
        .unwrap_or_exit();

        report.render(&mut out);
        Ok(())
    }

    /// Merge the config file with the flags given on the command line.
    fn config(&self) -> xenon_gen_core::Result<ScaffoldConfig> {
        let mut config = self.scaffold.load()?;
        if let Some(driver) = self.driver {
            config.database.driver = driver;
        }
        if let Some(conn) = &self.conn {
            config.database.conn = Some(conn.clone());
        }
        if !self.tables.is_empty() {
            config.database.tables = self.tables.clone();
        }
        if let Some(port) = self.http_port {
            config.server.http_port = port;
        }
        Ok(config)
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or(cwd);
            Ok((dir_name, output_dir))
        } else {
            let app_name = Path::new(name)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(name)
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((app_name, output_dir))
        }
    }
}
