//! Output trait for rendering reports to different formats.

use std::path::Path;

use xenon_gen_scaffold::{EmitEvent, EmitObserver};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, JSON, HTML, etc).
pub trait Output {
    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a created directory or file.
    fn created(&mut self, path: &Path);

    /// Render a success message.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn created(&mut self, path: &Path) {
        println!("\tcreate\t {}", path.display());
    }

    fn success(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Streams emitter create events to an [`Output`] as they happen.
pub struct CreateLog<'a> {
    out: &'a mut dyn Output,
}

impl<'a> CreateLog<'a> {
    pub fn new(out: &'a mut dyn Output) -> Self {
        Self { out }
    }
}

impl EmitObserver for CreateLog<'_> {
    fn on_create(&mut self, event: &EmitEvent) {
        self.out.created(&event.path);
    }
}

/// Collects rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn created(&mut self, path: &Path) {
        self.lines.push(format!("create {}", path.display()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("-- {} --", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use xenon_gen_scaffold::EntryKind;

    use super::*;

    #[test]
    fn test_create_log_forwards_events() {
        let mut out = RecordingOutput::default();
        let mut log = CreateLog::new(&mut out);

        log.on_create(&EmitEvent {
            kind: EntryKind::Dir,
            path: PathBuf::from("shop"),
        });
        log.on_create(&EmitEvent {
            kind: EntryKind::File,
            path: PathBuf::from("shop/main.go"),
        });
        assert_eq!(out.lines, vec!["create shop", "create shop/main.go"]);
    }
}
