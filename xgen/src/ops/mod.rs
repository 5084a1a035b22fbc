//! Core operations.
//!
//! This module contains the business logic for xgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, application, resource};
