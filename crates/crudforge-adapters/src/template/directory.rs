//! Template loaded from a directory tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use crudforge_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{ProjectTemplate, RelativePath},
    error::ForgeResult,
};

/// Environment override for the template directory.
pub const TEMPLATE_DIR_VAR: &str = "CRUDFORGE_TEMPLATE_DIR";

/// Build output and dependency folders never copied into a new project.
const SKIPPED_DIRS: [&str; 3] = ["node_modules", ".git", "dist"];

#[derive(Debug, Clone)]
pub struct DirectoryTemplate {
    root: PathBuf,
}

impl DirectoryTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Template named by `$CRUDFORGE_TEMPLATE_DIR`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(TEMPLATE_DIR_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_error(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::TemplateLoadFailed {
            path: self.root.clone(),
            reason: reason.into(),
        }
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Forward slashes so Windows and Unix paths compare identically.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl TemplateSource for DirectoryTemplate {
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn load(&self) -> ForgeResult<ProjectTemplate> {
        if !self.root.is_dir() {
            return Err(self.load_error("directory not found").into());
        }

        let name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".into());
        let mut template = ProjectTemplate::new(name);

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));

        for entry in walker {
            let entry = entry.map_err(|e| self.load_error(format!("directory walk error: {e}")))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                self.load_error(format!("failed to relativise '{}'", entry.path().display()))
            })?;
            let rel = normalize_path(rel);

            let content = fs::read_to_string(entry.path())
                .map_err(|e| self.load_error(format!("failed to read '{rel}': {e}")))?;
            let path = RelativePath::try_new(&rel).map_err(|e| self.load_error(e.to_string()))?;

            debug!(path = %rel, "template file");
            template.add_file(path, content);
        }

        if template.files().is_empty() {
            return Err(self.load_error("template contains no files").into());
        }
        Ok(template)
    }

    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }
}
