use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffold operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid name '{name}'")]
    #[diagnostic(
        code(xgen::invalid_name),
        help("{reason}. Use only letters, digits, '_' and '/', starting with a letter or '_'.")
    )]
    InvalidName { name: String, reason: String },

    #[error("malformed resource name '{name}'")]
    #[diagnostic(
        code(xgen::malformed_resource_name),
        help("resources must be qualified by a package, e.g. 'xgen generate resource account/user'")
    )]
    MalformedResourceName { name: String },

    #[error("'{}' already exists", path.display())]
    #[diagnostic(
        code(xgen::path_conflict),
        help("choose another destination or pass --force to overwrite")
    )]
    PathConflict { path: PathBuf },

    #[error("failed to access '{}'", path.display())]
    #[diagnostic(code(xgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine the module path of '{}'", path.display())]
    #[diagnostic(
        code(xgen::module_root),
        help("run the command inside a Go module (a directory with go.mod) or under $GOPATH/src")
    )]
    ModuleRoot { path: PathBuf },

    #[error("failed to parse '{}'", path.display())]
    #[diagnostic(code(xgen::config))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a malformed resource name error
    pub fn malformed_resource_name(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedResourceName { name: name.into() })
    }

    /// Create a path conflict error
    pub fn path_conflict(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::PathConflict { path: path.into() })
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a module root resolution error
    pub fn module_root(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::ModuleRoot { path: path.into() })
    }

    /// Create a config parse error
    pub fn config(path: &Path, source: toml::de::Error) -> Box<Self> {
        Box::new(Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
