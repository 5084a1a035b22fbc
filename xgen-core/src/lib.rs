//! Core utilities for the xgen scaffolder.
//!
//! Name-case transforms, the shared error type and the file-system
//! abstraction the emitter writes through.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod naming;

pub use error::{Error, Result};
// File operations
pub use file::{DiskFileSystem, FileSystem, MemoryFileSystem};
// Naming
pub use naming::{
    NameForms, PackageNames, to_camel_case, to_pascal_case, to_snake_case, validate_app_name,
    validate_identifier,
};
