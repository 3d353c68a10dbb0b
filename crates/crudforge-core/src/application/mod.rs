//! Application layer for crudforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DomainGenerator, ProjectService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BarrelOutcome, CreateProjectRequest, DdlOutcome, DomainGenerator, GenerateRequest,
    GenerationReport, InstallOutcome, ProjectReport, ProjectService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    DdlExecutor, DependencyInstaller, Discovery, Filesystem, SchemaProvider, TemplateSource,
};

pub use error::ApplicationError;
