//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a CRUD module" or "bootstrap a
//! project".

pub mod domain_generator;
pub mod project_service;

pub use domain_generator::{
    BarrelOutcome, DdlOutcome, DomainGenerator, GenerateRequest, GenerationReport, MODULES_DIR,
    module_dir,
};
pub use project_service::{CreateProjectRequest, InstallOutcome, ProjectReport, ProjectService};
