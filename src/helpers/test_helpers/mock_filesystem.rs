use super::*;
use std::{
    io,
    path::{Path, PathBuf},
};

/// In-memory files for config tests. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem {
    /// None marks a file that exists but can't be read
    files: Rc<RefCell<HashMap<PathBuf, Option<String>>>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), Some(contents.to_string()));
        self
    }

    pub fn with_unreadable_file(self, path: impl AsRef<Path>) -> Self {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), None);
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.borrow().get(path) {
            Some(Some(contents)) => Ok(contents.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is unreadable", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }
}
