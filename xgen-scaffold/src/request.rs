//! Generation requests and resource name parsing.

use std::path::{Path, PathBuf};

use xenon_gen_core::{Error, NameForms, PackageNames, Result};

/// What a request generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A whole application skeleton
    Application,
    /// One resource bundle inside an existing application
    Resource,
}

/// One invocation of the scaffolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    base_name: String,
    target_path: PathBuf,
    mode: Mode,
}

impl GenerationRequest {
    /// Generate the application `name` into `destination`.
    pub fn application(name: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            base_name: name.into(),
            target_path: destination.into(),
            mode: Mode::Application,
        }
    }

    /// Generate `package/resource` inside the application at `app_root`.
    pub fn resource(qualified_name: impl Into<String>, app_root: impl Into<PathBuf>) -> Self {
        Self {
            base_name: qualified_name.into(),
            target_path: app_root.into(),
            mode: Mode::Resource,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// A `package/resource` name split into its two derived parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedResource {
    pub package: PackageNames,
    pub resource: NameForms,
}

impl QualifiedResource {
    /// Parse a qualified resource name.
    ///
    /// `.` is accepted in place of `/`. The name is split on the last
    /// separator, and the package is the last component before it, so
    /// `shop/blog/post` yields package `blog` and resource `post`.
    pub fn parse(qualified_name: &str) -> Result<Self> {
        let normalized = qualified_name.replace('.', "/");
        let Some((prefix, resource)) = normalized.rsplit_once('/') else {
            return Err(Error::malformed_resource_name(qualified_name));
        };
        let package = prefix.rsplit('/').next().unwrap_or(prefix);
        if package.is_empty() || resource.is_empty() {
            return Err(Error::malformed_resource_name(qualified_name));
        }

        Ok(Self {
            package: PackageNames::new(package)?,
            resource: NameForms::new(resource)?,
        })
    }
}
