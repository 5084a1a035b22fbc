//! Generate operation - scaffold an application or a resource.

use std::path::Path;

use xenon_gen_core::{DiskFileSystem, FileSystem, Result};
use xenon_gen_scaffold::{
    EmissionPlan, EmitObserver, Emitter, GenerationRequest, GoWorkspace, Mode, ModuleResolver,
    PlanEntry, QualifiedResource, ScaffoldConfig,
};

use crate::reports::{GenerationResult, PreviewFile, PreviewResult, ScaffoldReport, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Settings merged from the config file and flags.
    pub config: ScaffoldConfig,
    /// Whether to preview without writing.
    pub dry_run: bool,
    /// Receives a create event per directory and file written.
    pub observer: &'a mut dyn EmitObserver,
}

/// Generate the application `app_name` into `destination`.
pub fn application(
    app_name: &str,
    destination: &Path,
    opts: GenerateOptions,
) -> Result<ScaffoldReport> {
    let request = GenerationRequest::application(app_name, destination);
    let mut emitter = Emitter::new(DiskFileSystem, opts.config);
    scaffold(
        &mut emitter,
        &request,
        &GoWorkspace::from_env(),
        opts.dry_run,
        opts.observer,
    )
}

/// Generate `qualified_name` inside the application at `app_root`.
pub fn resource(
    qualified_name: &str,
    app_root: &Path,
    opts: GenerateOptions,
) -> Result<ScaffoldReport> {
    let request = GenerationRequest::resource(qualified_name, app_root);
    let mut emitter = Emitter::new(DiskFileSystem, opts.config);
    scaffold(
        &mut emitter,
        &request,
        &GoWorkspace::from_env(),
        opts.dry_run,
        opts.observer,
    )
}

fn scaffold<F: FileSystem>(
    emitter: &mut Emitter<F>,
    request: &GenerationRequest,
    resolver: &dyn ModuleResolver,
    dry_run: bool,
    observer: &mut dyn EmitObserver,
) -> Result<ScaffoldReport> {
    let warnings = warnings(emitter.config(), request.mode());
    let names = match request.mode() {
        Mode::Application => Vec::new(),
        Mode::Resource => {
            let QualifiedResource { package, resource } =
                QualifiedResource::parse(request.base_name())?;
            vec![("Resource name", resource.title), ("Package name", package.raw)]
        }
    };

    let result = if dry_run {
        let plan = emitter.plan(request, resolver)?;
        GenerationResult::Preview(preview(&plan))
    } else {
        let plan = emitter.emit(request, resolver, observer)?;
        GenerationResult::Written(WrittenResult {
            root: plan.root().to_path_buf(),
            dirs: plan.dirs().count(),
            files: plan.files().count(),
        })
    };

    Ok(ScaffoldReport {
        kind: match request.mode() {
            Mode::Application => "application",
            Mode::Resource => "resource",
        },
        name: request.base_name().to_string(),
        names,
        warnings,
        result,
    })
}

fn warnings(config: &ScaffoldConfig, mode: Mode) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.wants_introspection() {
        let target = match mode {
            Mode::Application => "generating the example application instead",
            Mode::Resource => "generating an empty resource instead",
        };
        warnings.push(format!(
            "database introspection is not supported; {}",
            target
        ));
    }
    warnings
}

fn preview(plan: &EmissionPlan) -> PreviewResult {
    let display = |path: &Path| {
        let relative = plan.relative(path);
        if relative.as_os_str().is_empty() {
            ".".to_string()
        } else {
            relative.display().to_string()
        }
    };

    PreviewResult {
        dirs: plan.dirs().map(display).collect(),
        files: plan
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                PlanEntry::File {
                    template,
                    path,
                    contents,
                } => Some(PreviewFile {
                    template: template.to_string(),
                    path: display(path),
                    content: contents.clone(),
                }),
                PlanEntry::Dir(_) => None,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use xenon_gen_core::{Error, MemoryFileSystem};
    use xenon_gen_scaffold::{EmitEvent, FixedModule};

    use super::*;

    fn memory_emitter(config: ScaffoldConfig) -> Emitter<MemoryFileSystem> {
        Emitter::new(MemoryFileSystem::new(), config)
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let mut emitter = memory_emitter(ScaffoldConfig::default());
        let request = GenerationRequest::application("shop", "/out/shop");
        let mut events: Vec<EmitEvent> = Vec::new();

        let report = scaffold(
            &mut emitter,
            &request,
            &FixedModule("shop".into()),
            true,
            &mut events,
        )
        .unwrap();

        assert!(events.is_empty());
        assert_eq!(emitter.fs().write_count(), 0);
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 13);
        assert_eq!(preview.dirs.first().map(String::as_str), Some("."));
        let conf = preview
            .files
            .iter()
            .find(|file| file.path == "conf/app.conf")
            .unwrap();
        assert_eq!(conf.template, "app_conf");
    }

    #[test]
    fn test_written_counts() {
        let mut emitter = memory_emitter(ScaffoldConfig::default());
        let request = GenerationRequest::application("shop", "/out/shop");
        let mut events: Vec<EmitEvent> = Vec::new();

        let report = scaffold(
            &mut emitter,
            &request,
            &FixedModule("shop".into()),
            false,
            &mut events,
        )
        .unwrap();

        assert_eq!(report.kind, "application");
        assert_eq!(events.len(), 21);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(written.root, PathBuf::from("/out/shop"));
        assert_eq!(written.dirs, 8);
        assert_eq!(written.files, 13);
    }

    #[test]
    fn test_introspection_warning() {
        let mut config = ScaffoldConfig::default();
        config.database.tables = vec!["users".into()];
        let mut emitter = memory_emitter(config);
        let request = GenerationRequest::application("shop", "/out/shop");

        let report = scaffold(
            &mut emitter,
            &request,
            &FixedModule("shop".into()),
            true,
            &mut (),
        )
        .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("introspection"));
    }

    #[test]
    fn test_resource_reports_names() {
        let fs = MemoryFileSystem::new().with_dir("/srv/shop");
        let mut emitter = Emitter::new(fs, ScaffoldConfig::default());
        let request = GenerationRequest::resource("blog.post", "/srv/shop");

        let report = scaffold(
            &mut emitter,
            &request,
            &FixedModule("shop".into()),
            true,
            &mut (),
        )
        .unwrap();

        assert_eq!(report.kind, "resource");
        assert_eq!(
            report.names,
            vec![
                ("Resource name", "Post".to_string()),
                ("Package name", "blog".to_string())
            ]
        );
    }

    #[test]
    fn test_resource_error_propagates() {
        let mut emitter = memory_emitter(ScaffoldConfig::default());
        let request = GenerationRequest::resource("post", "/out/shop");

        let err = scaffold(
            &mut emitter,
            &request,
            &FixedModule("shop".into()),
            false,
            &mut (),
        )
        .unwrap_err();

        assert!(matches!(*err, Error::MalformedResourceName { .. }));
        assert_eq!(emitter.fs().write_count(), 0);
    }
}
