//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Target module directory already exists. Nothing was written.
    #[error("Module '{name}' already exists at {path}")]
    ModuleExists { name: String, path: PathBuf },

    /// Project folder already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Remote DDL execution failed.
    #[error("DDL execution failed: {reason}")]
    DdlFailed { reason: String },

    /// Database credentials or endpoint missing.
    #[error("Database connection not configured: {reason}")]
    DdlUnavailable { reason: String },

    /// Project template could not be loaded.
    #[error("Failed to load template from {path}: {reason}")]
    TemplateLoadFailed { path: PathBuf, reason: String },

    /// Dependency installation failed.
    #[error("Dependency installation failed: {reason}")]
    InstallFailed { reason: String },

    /// In-memory adapter state poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleExists { name, path } => vec![
                format!("Module '{name}' is already present at {}", path.display()),
                "Generation never overwrites an existing module".into(),
                "Remove the directory first or choose another entity name".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::DdlFailed { .. } => vec![
                "Check that the exec_sql function exists in your database".into(),
                "Run the printed SQL manually, or re-run with --no-db".into(),
            ],
            Self::DdlUnavailable { .. } => vec![
                "Set SUPABASE_URL and SUPABASE_KEY in the environment or .env".into(),
                "Or pass --no-db to only print the SQL".into(),
            ],
            Self::TemplateLoadFailed { path, .. } => vec![
                format!("Check the template directory: {}", path.display()),
                "Omit --template to use the built-in backend template".into(),
            ],
            Self::InstallFailed { .. } => vec![
                "Run `npm install` manually inside the project folder".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RollbackFailed { path, .. } => vec![
                format!("Remove the partially created directory: {}", path.display()),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleExists { .. } | Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::TemplateLoadFailed { .. } => ErrorCategory::NotFound,
            Self::DdlUnavailable { .. } => ErrorCategory::Configuration,
            Self::DdlFailed { .. } | Self::InstallFailed { .. } => ErrorCategory::Remote,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
