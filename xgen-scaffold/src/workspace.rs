//! Module root resolution.
//!
//! Generated resources import their sibling packages by full import path
//! (`<module>/business/<package>`), so the emitter needs to know the module
//! path of the application it is adding to.

use std::path::{Component, Path, PathBuf};

use xenon_gen_core::{Error, FileSystem, Result};

/// Resolves the import path of the application rooted at a directory.
pub trait ModuleResolver {
    fn resolve(&self, fs: &dyn FileSystem, app_root: &Path) -> Result<String>;
}

/// Always answers with the same module path.
#[derive(Debug, Clone)]
pub struct FixedModule(pub String);

impl ModuleResolver for FixedModule {
    fn resolve(&self, _fs: &dyn FileSystem, _app_root: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Resolves module paths the way the Go toolchain lays out projects.
///
/// A `go.mod` in the application root or any ancestor wins. Otherwise an
/// application under `<GOPATH>/src/<name>` resolves to `<name>`.
#[derive(Debug, Clone, Default)]
pub struct GoWorkspace {
    gopaths: Vec<PathBuf>,
}

impl GoWorkspace {
    pub fn new(gopaths: Vec<PathBuf>) -> Self {
        Self { gopaths }
    }

    /// Use the entries of `$GOPATH`.
    pub fn from_env() -> Self {
        let gopaths = std::env::var_os("GOPATH")
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();
        Self::new(gopaths)
    }

    fn from_go_mod(fs: &dyn FileSystem, app_root: &Path) -> Option<String> {
        app_root.ancestors().find_map(|dir| {
            let content = fs.read_to_string(&dir.join("go.mod")).ok()?;
            let module = parse_module_line(&content)?;
            let relative = app_root.strip_prefix(dir).ok()?;
            Some(join_import(module, relative))
        })
    }

    fn from_gopath(&self, app_root: &Path) -> Option<String> {
        self.gopaths.iter().find_map(|gopath| {
            let below = app_root.strip_prefix(gopath.join("src")).ok()?;
            match below.components().next()? {
                Component::Normal(name) => name.to_str().map(str::to_string),
                _ => None,
            }
        })
    }
}

impl ModuleResolver for GoWorkspace {
    fn resolve(&self, fs: &dyn FileSystem, app_root: &Path) -> Result<String> {
        Self::from_go_mod(fs, app_root)
            .or_else(|| self.from_gopath(app_root))
            .ok_or_else(|| Error::module_root(app_root))
    }
}

/// Extract the module path from the contents of a `go.mod` file.
fn parse_module_line(content: &str) -> Option<&str> {
    content.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.trim().trim_matches('"');
        (!module.is_empty()).then_some(module)
    })
}

fn join_import(module: &str, relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .fold(module.to_string(), |import, part| import + "/" + part)
}
