//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from scaffolding an application or resource.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// What was generated, e.g. "application" or "resource".
    pub kind: &'static str,

    /// Application name, or qualified resource name.
    pub name: String,

    /// Derived names worth echoing, e.g. the resource and package names.
    pub names: Vec<(&'static str, String)>,

    /// Warning messages about ignored configuration.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of scaffolding.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Root the plan was applied to.
    pub root: PathBuf,
    /// Number of directories created.
    pub dirs: usize,
    /// Number of files written.
    pub files: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Directories that would be created, relative to the root.
    pub dirs: Vec<String>,
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Id of the template the file comes from.
    pub template: String,
    /// File path relative to the root.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for (key, value) in &self.names {
            out.key_value(key, value);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl ScaffoldReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.newline();
        out.success(&format!(
            "New {} '{}' created in {} ({} directories, {} files)",
            self.kind,
            self.name,
            written.root.display(),
            written.dirs,
            written.files,
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&format!("{} ({})", file.path, file.template));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        for dir in &preview.dirs {
            out.key_value("dir", dir);
        }
        out.preformatted(&format!(
            "{} directories and {} files would be generated",
            preview.dirs.len(),
            preview.files.len()
        ));
    }
}
