use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// The source files of one generated module, ready for materialization.
///
/// Output of the content generators. Written as a unit: either every file
/// lands in a freshly created directory or nothing is written.
#[derive(Debug, Clone)]
pub struct GeneratedArtifactSet {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<GeneratedFile>,
}

impl GeneratedArtifactSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<PathBuf>, content: String) {
        self.files.push(GeneratedFile {
            path: name.into(),
            content,
        });
    }

    pub fn with_file(mut self, name: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(name, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }
        Ok(())
    }

    /// Module directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Content of a file by its name within the module.
    pub fn content(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == Path::new(name))
            .map(|f| f.content.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lookup_by_name() {
        let set = GeneratedArtifactSet::new("/tmp/Produto")
            .with_file("index.ts", "export {};".into());
        assert_eq!(set.content("index.ts"), Some("export {};"));
        assert_eq!(set.content("missing.ts"), None);
        assert_eq!(set.file_count(), 1);
    }

    #[test]
    fn duplicate_files_rejected() {
        let set = GeneratedArtifactSet::new("/tmp/Produto")
            .with_file("index.ts", String::new())
            .with_file("index.ts", String::new());
        assert!(matches!(set.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_file_paths_rejected() {
        let set = GeneratedArtifactSet::new("/tmp/Produto").with_file("/etc/passwd", String::new());
        assert!(matches!(
            set.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
