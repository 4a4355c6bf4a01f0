// Where skin images are read from

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Read access to the files the skin scanner looks at
pub trait AssetSource {
    /// Create `dir` if it does not exist yet. Returns true if it was created.
    fn ensure_dir(&self, dir: &Path) -> io::Result<bool>;

    /// Paths of the files directly inside `dir`, in scan order
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read a whole file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Asset source backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn ensure_dir(&self, dir: &Path) -> io::Result<bool> {
        if dir.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(dir)?;
        Ok(true)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }

        // read_dir order is platform dependent
        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

#[derive(Debug, Clone)]
enum MemoryFile {
    Bytes(Vec<u8>),
    Denied,
}

#[derive(Debug, Default)]
struct MemoryFiles {
    files: BTreeMap<PathBuf, MemoryFile>,
    dirs: BTreeSet<PathBuf>,
    reads: usize,
}

/// In-memory asset source.
///
/// Clones share the same file table, so a test can keep one handle and
/// delete or corrupt files after another handle was given to a selector.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    inner: Rc<RefCell<MemoryFiles>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        let path = path.into();
        let mut inner = self.inner.borrow_mut();
        if let Some(parent) = path.parent() {
            inner.dirs.insert(parent.to_path_buf());
        }
        inner.files.insert(path, MemoryFile::Bytes(bytes));
    }

    /// Add a file that exists but cannot be read
    pub fn insert_denied(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.borrow_mut();
        if let Some(parent) = path.parent() {
            inner.dirs.insert(parent.to_path_buf());
        }
        inner.files.insert(path, MemoryFile::Denied);
    }

    /// Delete a file, returns true if it existed
    pub fn remove(&self, path: &Path) -> bool {
        self.inner.borrow_mut().files.remove(path).is_some()
    }

    /// Whether `dir` has been created
    pub fn has_dir(&self, dir: &Path) -> bool {
        self.inner.borrow().dirs.contains(dir)
    }

    /// Number of `read` calls served so far
    pub fn read_count(&self) -> usize {
        self.inner.borrow().reads
    }
}

impl AssetSource for MemoryAssetSource {
    fn ensure_dir(&self, dir: &Path) -> io::Result<bool> {
        Ok(self.inner.borrow_mut().dirs.insert(dir.to_path_buf()))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let inner = self.inner.borrow();
        if !inner.dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such directory: {}", dir.display()),
            ));
        }

        Ok(inner
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut inner = self.inner.borrow_mut();
        inner.reads += 1;

        match inner.files.get(path) {
            Some(MemoryFile::Bytes(bytes)) => Ok(bytes.clone()),
            Some(MemoryFile::Denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Access denied: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )),
        }
    }
}
