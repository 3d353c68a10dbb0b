//! TypeScript types-tree scanner.
//!
//! Walks a directory in lexical path order and returns the first interface
//! named `<Pascal>` or `I<Pascal>` found in a `.ts` file. Parsing itself is
//! done by [`crudforge_core::domain::find_interface`]; this adapter only
//! owns the I/O.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crudforge_core::{
    application::{
        ApplicationError,
        ports::{Discovery, SchemaProvider},
    },
    domain::{DomainDescriptor, PropertySchema, find_interface},
    error::ForgeResult,
};

/// Directories never descended into.
const SKIPPED_DIRS: [&str; 2] = ["node_modules", ".git"];

const SOURCE_EXTENSION: &str = "ts";

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptSchemaProvider;

impl TypeScriptSchemaProvider {
    pub fn new() -> Self {
        Self
    }

    /// Every `.ts` file under `root`, in deterministic order.
    fn source_files(root: &Path) -> ForgeResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: format!("Failed to walk types directory: {e}"),
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
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

impl SchemaProvider for TypeScriptSchemaProvider {
    #[instrument(skip_all, fields(entity = %domain.pascal(), root = %search_root.display()))]
    fn discover(
        &self,
        domain: &DomainDescriptor,
        search_root: &Path,
    ) -> ForgeResult<Option<Discovery>> {
        if !search_root.is_dir() {
            warn!("Types directory not found");
            return Ok(None);
        }

        let candidates = domain.interface_candidates();
        let files = Self::source_files(search_root)?;
        debug!(files = files.len(), "Scanning type declarations");

        for path in files {
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };

            let Some(decl) = find_interface(&source, &candidates) else {
                continue;
            };

            match PropertySchema::new(decl.properties) {
                Ok(schema) => {
                    return Ok(Some(Discovery {
                        interface: decl.name,
                        source: path,
                        schema,
                    }));
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        interface = %decl.name,
                        error = %e,
                        "Ignoring malformed interface"
                    );
                }
            }
        }

        Ok(None)
    }
}
