use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{ScaffoldArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{CreateLog, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResourceCommand {
    /// Qualified resource name, `package/resource` or `package.resource`
    pub name: String,

    /// Root of the application to add the resource to
    #[arg(long, default_value = ".")]
    pub app_root: PathBuf,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

impl ResourceCommand {
    pub fn run(&self) -> Result<()> {
        let app_root = self.resolve_app_root()?;
        let config = self.scaffold.load().unwrap_or_exit();

        let mut out = TerminalOutput::new();
        let report = ops::resource(
            &self.name,
            &app_root,
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

    fn resolve_app_root(&self) -> Result<PathBuf> {
        self.app_root.canonicalize().wrap_err_with(|| {
            format!(
                "Failed to resolve application root '{}'",
                self.app_root.display()
            )
        })
    }
}
