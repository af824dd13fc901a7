use std::io;
use std::path::Path;

/// A mockable interface to the filesystem, used when looking for config files
pub trait FilesystemTrait {
    /// Like std::path::Path::is_file()
    fn is_file(&self, path: &Path) -> bool;
    /// Like std::fs::read_to_string()
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

pub type Filesystem = Box<dyn FilesystemTrait>;

impl dyn FilesystemTrait {
    /// Contents of the file, or None if there is no file at the path. Errors reading a file
    /// that does exist are still errors.
    pub fn read_if_exists(&self, path: &Path) -> io::Result<Option<String>> {
        if self.is_file(path) {
            self.read_to_string(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

pub fn real_filesystem() -> Filesystem {
    Box::new(FilesystemImpl)
}

struct FilesystemImpl;

impl FilesystemTrait for FilesystemImpl {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
