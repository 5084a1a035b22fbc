//! Placeholder substitution.
//!
//! Templates contain tokens of the form `{{.name}}`. Only the names listed
//! in [`Placeholder`] are substituted; any other well-formed token, and any
//! recognised token whose value is not part of the [`RenderContext`], is
//! copied to the output untouched.

use xenon_gen_core::{NameForms, PackageNames};

use crate::config::ScaffoldConfig;

const OPEN: &str = "{{.";
const CLOSE: &str = "}}";

/// The closed set of substitutable tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{.Appname}}` or `{{.app_name}}`
    AppName,
    /// `{{.package_name}}`
    PackageName,
    /// `{{.PackageName}}`
    PackagePascal,
    /// `{{.packageName}}`
    PackageCamel,
    /// `{{.resource_name}}`
    ResourceName,
    /// `{{.ResourceName}}`
    ResourcePascal,
    /// `{{.resourceName}}`
    ResourceCamel,
    /// `{{.resource_file}}`, the lower-case file stem
    ResourceFile,
    /// `{{.db_driver}}`
    DbDriver,
    /// `{{.db_host}}`
    DbHost,
    /// `{{.db_port}}`
    DbPort,
    /// `{{.http_port}}`
    HttpPort,
    /// `{{.run_mode}}`
    RunMode,
}

impl Placeholder {
    /// Look up a placeholder by the name between `{{.` and `}}`.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Appname" | "app_name" => Self::AppName,
            "package_name" => Self::PackageName,
            "PackageName" => Self::PackagePascal,
            "packageName" => Self::PackageCamel,
            "resource_name" => Self::ResourceName,
            "ResourceName" => Self::ResourcePascal,
            "resourceName" => Self::ResourceCamel,
            "resource_file" => Self::ResourceFile,
            "db_driver" => Self::DbDriver,
            "db_host" => Self::DbHost,
            "db_port" => Self::DbPort,
            "http_port" => Self::HttpPort,
            "run_mode" => Self::RunMode,
            _ => return None,
        })
    }
}

/// Values available to a render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    app_name: String,
    package: Option<PackageNames>,
    resource: Option<NameForms>,
    settings: Option<Settings>,
}

#[derive(Debug, Clone)]
struct Settings {
    db_driver: String,
    db_host: String,
    db_port: String,
    http_port: String,
    run_mode: String,
}

impl RenderContext {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    pub fn with_package(mut self, package: PackageNames) -> Self {
        self.package = Some(package);
        self
    }

    pub fn with_resource(mut self, resource: NameForms) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Expose the database and server settings of `config`.
    pub fn with_config(mut self, config: &ScaffoldConfig) -> Self {
        self.settings = Some(Settings {
            db_driver: config.database.driver.to_string(),
            db_host: config.database.host.clone(),
            db_port: config.database.port().to_string(),
            http_port: config.server.http_port.to_string(),
            run_mode: config.server.run_mode.clone(),
        });
        self
    }

    /// Get the value for a placeholder, if this context carries one.
    pub fn value(&self, placeholder: Placeholder) -> Option<&str> {
        let package = self.package.as_ref();
        let resource = self.resource.as_ref();
        let settings = self.settings.as_ref();

        match placeholder {
            Placeholder::AppName => Some(self.app_name.as_str()),
            Placeholder::PackageName => package.map(|p| p.raw.as_str()),
            Placeholder::PackagePascal => package.map(|p| p.pascal.as_str()),
            Placeholder::PackageCamel => package.map(|p| p.camel.as_str()),
            Placeholder::ResourceName => resource.map(|r| r.snake.as_str()),
            Placeholder::ResourcePascal => resource.map(|r| r.pascal.as_str()),
            Placeholder::ResourceCamel => resource.map(|r| r.camel.as_str()),
            Placeholder::ResourceFile => resource.map(|r| r.lower.as_str()),
            Placeholder::DbDriver => settings.map(|s| s.db_driver.as_str()),
            Placeholder::DbHost => settings.map(|s| s.db_host.as_str()),
            Placeholder::DbPort => settings.map(|s| s.db_port.as_str()),
            Placeholder::HttpPort => settings.map(|s| s.http_port.as_str()),
            Placeholder::RunMode => settings.map(|s| s.run_mode.as_str()),
        }
    }
}

fn is_token_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Split `{{.name}}` off the front of `s`, where `s` starts right after `{{.`.
///
/// Returns the name and the number of bytes consumed including `}}`.
fn parse_token(s: &str) -> Option<(&str, usize)> {
    let end = s.find(CLOSE)?;
    let name = &s[..end];
    is_token_name(name).then_some((name, end + CLOSE.len()))
}

/// Substitute every recognised placeholder in `template`.
///
/// The template is scanned once from left to right, so substituted values
/// are never scanned again.
pub fn render(template: &str, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        match parse_token(after) {
            Some((name, consumed)) => {
                match Placeholder::from_name(name).and_then(|p| ctx.value(p)) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + OPEN.len() + consumed]),
                }
                rest = &after[consumed..];
            }
            None => {
                out.push_str(OPEN);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
