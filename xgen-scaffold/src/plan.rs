//! In-memory emission plans.

use std::path::{Path, PathBuf};

use crate::{
    template::{RenderContext, render},
    templates::Step,
};

/// One step of a plan with every path and body resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Dir(PathBuf),
    File {
        /// Id of the template the file was rendered from
        template: &'static str,
        path: PathBuf,
        contents: String,
    },
}

impl PlanEntry {
    pub fn path(&self) -> &Path {
        match self {
            PlanEntry::Dir(path) => path,
            PlanEntry::File { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, PlanEntry::Dir(_))
    }
}

/// The ordered list of directories and files one request produces.
///
/// Built completely before anything touches the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionPlan {
    root: PathBuf,
    entries: Vec<PlanEntry>,
}

impl EmissionPlan {
    /// Resolve a layout against `root`.
    pub fn from_layout(root: &Path, layout: &[Step], ctx: &RenderContext) -> Self {
        let entries = layout
            .iter()
            .map(|step| match step {
                Step::Dir(path) => PlanEntry::Dir(join(root, &render(path, ctx))),
                Step::File(spec) => PlanEntry::File {
                    template: spec.id,
                    path: join(root, &render(spec.path, ctx)),
                    contents: render(spec.body, ctx),
                },
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directories in plan order
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|entry| entry.is_dir())
            .map(PlanEntry::path)
    }

    /// Files and their contents in plan order
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|entry| match entry {
            PlanEntry::File { path, contents, .. } => Some((path.as_path(), contents.as_str())),
            PlanEntry::Dir(_) => None,
        })
    }

    /// Contents of the file at `relative` (slash separated, relative to the root)
    pub fn file(&self, relative: &str) -> Option<&str> {
        let wanted = join(&self.root, relative);
        self.files()
            .find(|(path, _)| *path == wanted)
            .map(|(_, contents)| contents)
    }

    /// `path` relative to the plan root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Join a slash separated relative path onto `root`.
fn join(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}
