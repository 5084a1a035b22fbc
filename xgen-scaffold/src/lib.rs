//! Scaffolding for xenon API applications.
//!
//! A [`GenerationRequest`] is resolved against the compiled-in template
//! table into an [`EmissionPlan`], which the [`Emitter`] then writes through
//! a [`FileSystem`](xenon_gen_core::FileSystem).
//!
//! ```
//! use std::path::Path;
//!
//! use xenon_gen_core::MemoryFileSystem;
//! use xenon_gen_scaffold::{Emitter, ScaffoldConfig};
//!
//! let mut emitter = Emitter::new(MemoryFileSystem::new(), ScaffoldConfig::default());
//! let plan = emitter
//!     .emit_application("shop", Path::new("/out/shop"), &mut ())
//!     .unwrap();
//!
//! assert!(plan.file("conf/app.conf").unwrap().contains("appname = shop"));
//! ```

pub mod config;
pub mod emitter;
pub mod plan;
pub mod request;
pub mod template;
pub mod templates;
pub mod workspace;

pub use config::{DatabaseConfig, Driver, ScaffoldConfig, ServerConfig};
pub use emitter::{EmitEvent, EmitObserver, Emitter, EntryKind};
pub use plan::{EmissionPlan, PlanEntry};
pub use request::{GenerationRequest, Mode, QualifiedResource};
pub use template::{Placeholder, RenderContext, render};
pub use templates::{Step, TemplateSpec};
pub use workspace::{FixedModule, GoWorkspace, ModuleResolver};
