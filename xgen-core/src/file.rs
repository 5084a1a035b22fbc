use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

/// The file-system operations the scaffolder needs.
///
/// Queries take `&self`, mutations take `&mut self`, so an emitter owning a
/// file system is the only writer.
pub trait FileSystem {
    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is a directory with no entries
    fn is_empty_dir(&self, path: &Path) -> io::Result<bool>;

    /// Read a file to a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create a directory and all of its missing parents
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Write a file, creating parent directories and replacing any previous content
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_empty_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::read_dir(path)?.next().is_none())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(String),
}

/// An in-memory file system.
///
/// Paths are stored as given, without normalisation, so callers should use
/// the same (ideally absolute) form throughout.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
    writes: usize,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .insert(path.to_path_buf(), Node::File(content.into()));
        self
    }

    /// Add a directory and its parents
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Get the content of a file
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        match self.nodes.get(path.as_ref()) {
            Some(Node::File(content)) => Some(content.as_str()),
            _ => None,
        }
    }

    /// All file paths, sorted
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.nodes.iter().filter_map(|(path, node)| match node {
            Node::File(_) => Some(path.as_path()),
            Node::Dir => None,
        })
    }

    /// Number of mutating calls made through the [`FileSystem`] trait
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn insert_dirs(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(Node::Dir))
    }

    fn is_empty_dir(&self, path: &Path) -> io::Result<bool> {
        match self.nodes.get(path) {
            Some(Node::Dir) => Ok(!self.nodes.keys().any(|p| p.parent() == Some(path))),
            Some(Node::File(_)) => Err(io::Error::other(format!(
                "{} is not a directory",
                path.display()
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        if let Some(Node::File(_)) = self.nodes.get(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        self.writes += 1;
        self.insert_dirs(path);
        Ok(())
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        if self.is_dir(path) {
            return Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            )));
        }
        self.writes += 1;
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .insert(path.to_path_buf(), Node::File(content.to_string()));
        Ok(())
    }
}
