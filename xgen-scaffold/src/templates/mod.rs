//! The compiled-in template table.
//!
//! Each layout is an ordered list of steps. The order is the order in which
//! directories are created and files are written, and is echoed to the user.

mod application;
mod resource;

pub use application::APPLICATION;
pub use resource::RESOURCE;

/// One generated file: its body and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Stable identifier, shown next to the path in previews
    pub id: &'static str,
    /// Output path relative to the generation root, itself a template
    pub path: &'static str,
    pub body: &'static str,
}

/// A step of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Create a directory (path template, `""` is the root itself)
    Dir(&'static str),
    /// Render and write a file
    File(TemplateSpec),
}

impl Step {
    /// Iterate over the file templates of a layout.
    pub fn templates(layout: &'static [Step]) -> impl Iterator<Item = &'static TemplateSpec> {
        layout.iter().filter_map(|step| match step {
            Step::File(spec) => Some(spec),
            Step::Dir(_) => None,
        })
    }
}
