// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Property name cannot be empty")]
    EmptyPropertyName,

    #[error("Duplicate property '{name}' in schema")]
    DuplicateProperty { name: String },

    #[error("Duplicate path in generated output: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid package manifest: {reason}")]
    InvalidManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { .. } => vec![
                "Entity names start with a letter".into(),
                "Use letters, digits, spaces, '_' or '-'".into(),
                "Examples: Produto, CentroCusto, \"nota fiscal\"".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-api, backend_app, api2".into(),
            ],
            Self::DuplicateProperty { name } => vec![
                format!("Property '{name}' is declared twice in the interface"),
                "Remove the duplicate member and run again".into(),
            ],
            Self::InvalidTemplate(msg) => vec![
                "The project template is incomplete or unreadable".into(),
                format!("Details: {msg}"),
            ],
            Self::InvalidManifest { .. } => vec![
                "Check that the template's package.json is a valid JSON object".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. }
            | Self::InvalidProjectName { .. }
            | Self::EmptyPropertyName
            | Self::DuplicateProperty { .. }
            | Self::InvalidManifest { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
