//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{DomainDescriptor, ProjectTemplate, PropertySchema};
use crate::error::ForgeResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudforge_adapters::filesystem::LocalFilesystem` (production)
/// - `crudforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// A schema found by a [`SchemaProvider`], with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub interface: String,
    pub source: PathBuf,
    pub schema: PropertySchema,
}

/// Port for schema discovery.
///
/// `Ok(None)` is the normal "nothing found" outcome, including a missing
/// search root. Errors are reserved for unreadable trees.
///
/// Implemented by:
/// - `crudforge_adapters::schema::TypeScriptSchemaProvider`
/// - `crudforge_adapters::schema::NullSchemaProvider`
#[cfg_attr(test, automock)]
pub trait SchemaProvider: Send + Sync {
    fn discover(&self, domain: &DomainDescriptor, search_root: &Path)
    -> ForgeResult<Option<Discovery>>;
}

/// Port for running DDL against the backing store.
///
/// Implemented by:
/// - `crudforge_adapters::ddl::SupabaseDdlExecutor`
#[cfg_attr(test, automock)]
pub trait DdlExecutor: Send + Sync {
    /// Submit one SQL script.
    ///
    /// Fails with `ApplicationError::DdlUnavailable` when no connection is
    /// configured, `ApplicationError::DdlFailed` when the backend rejects it.
    fn execute(&self, sql: &str) -> ForgeResult<()>;
}

/// Port for obtaining the project bootstrap template.
///
/// Implemented by:
/// - `crudforge_adapters::template::DirectoryTemplate` (user directory)
/// - `crudforge_adapters::template::BuiltinTemplate` (embedded)
#[cfg_attr(test, automock)]
pub trait TemplateSource: Send + Sync {
    fn load(&self) -> ForgeResult<ProjectTemplate>;

    /// Human-readable origin, for progress output.
    fn describe(&self) -> String;
}

/// Port for installing a new project's dependencies.
///
/// Implemented by:
/// - `crudforge_adapters::install::NpmInstaller`
#[cfg_attr(test, automock)]
pub trait DependencyInstaller: Send + Sync {
    fn install(&self, project_dir: &Path) -> ForgeResult<()>;
}
