//! Scaffold emission.
//!
//! The emitter turns a [`GenerationRequest`] into an [`EmissionPlan`],
//! checking names, conflicts and the module root on the way, and then
//! applies the plan to its file system one step at a time.

use std::path::{Path, PathBuf};

use xenon_gen_core::{Error, FileSystem, Result, validate_app_name};

use crate::{
    config::ScaffoldConfig,
    plan::{EmissionPlan, PlanEntry},
    request::{GenerationRequest, Mode, QualifiedResource},
    template::RenderContext,
    templates::{APPLICATION, RESOURCE},
    workspace::ModuleResolver,
};

/// Kind of a create event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// A directory or file the emitter has just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitEvent {
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// Receives create events as the plan is applied.
pub trait EmitObserver {
    fn on_create(&mut self, event: &EmitEvent);
}

/// Discards all events.
impl EmitObserver for () {
    fn on_create(&mut self, _event: &EmitEvent) {}
}

/// Records all events.
impl EmitObserver for Vec<EmitEvent> {
    fn on_create(&mut self, event: &EmitEvent) {
        self.push(event.clone());
    }
}

/// Plans and writes scaffolds through a [`FileSystem`].
pub struct Emitter<F: FileSystem> {
    fs: F,
    config: ScaffoldConfig,
}

impl<F: FileSystem> Emitter<F> {
    pub fn new(fs: F, config: ScaffoldConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn into_fs(self) -> F {
        self.fs
    }

    /// Build the plan for `request` without touching the file system.
    ///
    /// All validation happens here: names, the module root for resources,
    /// and conflicts with what already exists at the destination.
    pub fn plan(
        &self,
        request: &GenerationRequest,
        resolver: &dyn ModuleResolver,
    ) -> Result<EmissionPlan> {
        match request.mode() {
            Mode::Application => {
                self.plan_application(request.base_name(), request.target_path())
            }
            Mode::Resource => {
                self.plan_resource(request.base_name(), request.target_path(), resolver)
            }
        }
    }

    /// Plan and write `request`, reporting each step to `observer`.
    pub fn emit(
        &mut self,
        request: &GenerationRequest,
        resolver: &dyn ModuleResolver,
        observer: &mut dyn EmitObserver,
    ) -> Result<EmissionPlan> {
        let plan = self.plan(request, resolver)?;
        self.execute(&plan, observer)?;
        Ok(plan)
    }

    /// Generate the application `app_name` into `destination`.
    pub fn emit_application(
        &mut self,
        app_name: &str,
        destination: &Path,
        observer: &mut dyn EmitObserver,
    ) -> Result<EmissionPlan> {
        let plan = self.plan_application(app_name, destination)?;
        self.execute(&plan, observer)?;
        Ok(plan)
    }

    /// Generate the resource `qualified_name` inside the application at `app_root`.
    pub fn emit_resource(
        &mut self,
        qualified_name: &str,
        app_root: &Path,
        resolver: &dyn ModuleResolver,
        observer: &mut dyn EmitObserver,
    ) -> Result<EmissionPlan> {
        let plan = self.plan_resource(qualified_name, app_root, resolver)?;
        self.execute(&plan, observer)?;
        Ok(plan)
    }

    pub fn plan_application(&self, app_name: &str, destination: &Path) -> Result<EmissionPlan> {
        validate_app_name(app_name)?;
        self.check_destination(destination)?;

        let ctx = RenderContext::new(app_name).with_config(&self.config);
        Ok(EmissionPlan::from_layout(destination, APPLICATION, &ctx))
    }

    pub fn plan_resource(
        &self,
        qualified_name: &str,
        app_root: &Path,
        resolver: &dyn ModuleResolver,
    ) -> Result<EmissionPlan> {
        let QualifiedResource { package, resource } = QualifiedResource::parse(qualified_name)?;
        let module = resolver.resolve(&self.fs, app_root)?;

        let ctx = RenderContext::new(module)
            .with_package(package)
            .with_resource(resource)
            .with_config(&self.config);
        let plan = EmissionPlan::from_layout(app_root, RESOURCE, &ctx);

        if !self.config.force {
            if let Some((path, _)) = plan.files().find(|(path, _)| self.fs.exists(path)) {
                return Err(Error::path_conflict(path));
            }
        }
        Ok(plan)
    }

    /// Apply `plan` in order.
    ///
    /// The first failure aborts the rest of the plan. Whatever was written
    /// before it stays on disk.
    pub fn execute(&mut self, plan: &EmissionPlan, observer: &mut dyn EmitObserver) -> Result<()> {
        for entry in plan.entries() {
            let kind = match entry {
                PlanEntry::Dir(path) => {
                    self.fs
                        .create_dir_all(path)
                        .map_err(|e| Error::io(path, e))?;
                    EntryKind::Dir
                }
                PlanEntry::File { path, contents, .. } => {
                    self.fs
                        .write(path, contents)
                        .map_err(|e| Error::io(path, e))?;
                    EntryKind::File
                }
            };
            observer.on_create(&EmitEvent {
                kind,
                path: entry.path().to_path_buf(),
            });
        }
        Ok(())
    }

    fn check_destination(&self, destination: &Path) -> Result<()> {
        if self.config.force || !self.fs.exists(destination) {
            return Ok(());
        }
        if !self.fs.is_dir(destination) {
            return Err(Error::path_conflict(destination));
        }
        let empty = self
            .fs
            .is_empty_dir(destination)
            .map_err(|e| Error::io(destination, e))?;
        if empty {
            Ok(())
        } else {
            Err(Error::path_conflict(destination))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use xenon_gen_core::MemoryFileSystem;

    use super::*;
    use crate::workspace::FixedModule;

    fn emitter(fs: MemoryFileSystem) -> Emitter<MemoryFileSystem> {
        Emitter::new(fs, ScaffoldConfig::default())
    }

    fn module() -> FixedModule {
        FixedModule("shop".to_string())
    }

    #[test]
    fn test_emit_application_into_missing_destination() {
        let mut emitter = emitter(MemoryFileSystem::new());
        let mut events: Vec<EmitEvent> = Vec::new();

        let plan = emitter
            .emit_application("shop", Path::new("/out/shop"), &mut events)
            .unwrap();

        assert_eq!(events.len(), plan.len());
        assert_eq!(events[0].path, PathBuf::from("/out/shop"));
        assert_eq!(events[0].kind, EntryKind::Dir);
        let conf = emitter.fs().file("/out/shop/conf/app.conf").unwrap();
        assert!(conf.lines().any(|line| line == "appname = shop"));
    }

    #[test]
    fn test_emit_application_into_empty_destination() {
        let mut emitter = emitter(MemoryFileSystem::new().with_dir("/out/shop"));
        let result = emitter.emit_application("shop", Path::new("/out/shop"), &mut ());
        assert!(result.is_ok());
    }

    #[test]
    fn test_emit_application_conflict_writes_nothing() {
        let fs = MemoryFileSystem::new().with_file("/out/shop/main.go", "package main");
        let mut emitter = emitter(fs);

        let err = emitter
            .emit_application("shop", Path::new("/out/shop"), &mut ())
            .unwrap_err();

        assert!(matches!(*err, Error::PathConflict { .. }));
        assert_eq!(emitter.fs().write_count(), 0);
    }

    #[test]
    fn test_emit_application_destination_is_file() {
        let fs = MemoryFileSystem::new().with_file("/out/shop", "");
        let err = emitter(fs)
            .emit_application("shop", Path::new("/out/shop"), &mut ())
            .unwrap_err();
        assert!(matches!(*err, Error::PathConflict { .. }));
    }

    #[test]
    fn test_emit_application_force_overwrites() {
        let fs = MemoryFileSystem::new().with_file("/out/shop/main.go", "stale");
        let config = ScaffoldConfig {
            force: true,
            ..ScaffoldConfig::default()
        };
        let mut emitter = Emitter::new(fs, config);

        emitter
            .emit_application("shop", Path::new("/out/shop"), &mut ())
            .unwrap();

        let main = emitter.fs().file("/out/shop/main.go").unwrap();
        assert!(main.contains("xenon.Run()"));
    }

    #[test]
    fn test_emit_application_invalid_name() {
        let mut emitter = emitter(MemoryFileSystem::new());
        let err = emitter
            .emit_application("my shop", Path::new("/out/shop"), &mut ())
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
        assert_eq!(emitter.fs().write_count(), 0);
    }

    #[test]
    fn test_emit_resource_without_package_writes_nothing() {
        let mut emitter = emitter(MemoryFileSystem::new().with_dir("/srv/shop"));
        let err = emitter
            .emit_resource("blog", Path::new("/srv/shop"), &module(), &mut ())
            .unwrap_err();

        assert!(matches!(*err, Error::MalformedResourceName { .. }));
        assert_eq!(emitter.fs().write_count(), 0);
    }

    #[test]
    fn test_emit_resource_existing_file_conflicts() {
        let fs = MemoryFileSystem::new().with_file("/srv/shop/model/blog/post.go", "keep");
        let mut emitter = emitter(fs);

        let err = emitter
            .emit_resource("blog/post", Path::new("/srv/shop"), &module(), &mut ())
            .unwrap_err();

        assert!(matches!(*err, Error::PathConflict { ref path } if path.ends_with("model/blog/post.go")));
        assert_eq!(emitter.fs().write_count(), 0);
        assert_eq!(emitter.fs().file("/srv/shop/model/blog/post.go"), Some("keep"));
    }

    #[test]
    fn test_emit_resource_reuses_package_directories() {
        let fs = MemoryFileSystem::new().with_file("/srv/shop/rest/blog/comment.go", "package blog");
        let mut emitter = emitter(fs);

        emitter
            .emit_resource("blog/post", Path::new("/srv/shop"), &module(), &mut ())
            .unwrap();

        assert_eq!(
            emitter.fs().file("/srv/shop/rest/blog/comment.go"),
            Some("package blog")
        );
        assert!(emitter.fs().file("/srv/shop/rest/blog/post.go").is_some());
    }

    #[test]
    fn test_emit_request_dispatches_on_mode() {
        let mut emitter = emitter(MemoryFileSystem::new());
        let request = GenerationRequest::resource("blog/post", "/srv/shop");

        let plan = emitter.emit(&request, &module(), &mut ()).unwrap();

        assert_eq!(plan.files().count(), 5);
        let rest = plan.file("rest/blog/post.go").unwrap();
        assert!(rest.contains("bBlog \"shop/business/blog\""));
    }

    /// Fails every write to one path.
    struct FailingFs {
        inner: MemoryFileSystem,
        fail_on: PathBuf,
    }

    impl FileSystem for FailingFs {
        fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.inner.is_dir(path)
        }

        fn is_empty_dir(&self, path: &Path) -> io::Result<bool> {
            self.inner.is_empty_dir(path)
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.inner.read_to_string(path)
        }

        fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
            self.inner.create_dir_all(path)
        }

        fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
            if path == self.fail_on {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.inner.write(path, content)
        }
    }

    #[test]
    fn test_io_error_aborts_remaining_plan() {
        let fs = FailingFs {
            inner: MemoryFileSystem::new(),
            fail_on: PathBuf::from("/out/shop/rest/init.go"),
        };
        let mut emitter = Emitter::new(fs, ScaffoldConfig::default());
        let mut events: Vec<EmitEvent> = Vec::new();

        let err = emitter
            .emit_application("shop", Path::new("/out/shop"), &mut events)
            .unwrap_err();

        match *err {
            Error::Io { ref path, .. } => assert_eq!(path, Path::new("/out/shop/rest/init.go")),
            ref other => panic!("expected Io error, got {other:?}"),
        }
        let last = events.last().unwrap();
        assert_eq!(last.path, PathBuf::from("/out/shop/rest/account/login_user.go"));

        let fs = emitter.into_fs();
        assert!(fs.inner.file("/out/shop/rest/account/login_user.go").is_some());
        assert!(fs.inner.file("/out/shop/main.go").is_none());
    }
}
