//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use crudforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("src/modules/Produto");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("index.ts"), "export {};\n").unwrap();

        assert!(fs.exists(&dir.join("index.ts")));
        assert_eq!(fs.read_to_string(&dir.join("index.ts")).unwrap(), "export {};\n");
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.ts");

        let err = LocalFilesystem::new().read_to_string(&missing).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::FilesystemError { ref path, .. }) if *path == missing
        ));
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path().join("my-api");
        fs.create_dir_all(&root.join("src")).unwrap();
        fs.write_file(&root.join("src/server.ts"), "").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
