//! crudforge Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the crudforge backend generator,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DomainGenerator, ProjectService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, SchemaProvider, DDL, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, Supabase, TS scanner) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (naming, schema, generators, barrel)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use crudforge_core::application::{DomainGenerator, GenerateRequest};
//!
//! # fn demo(service: DomainGenerator) -> crudforge_core::error::ForgeResult<()> {
//! let report = service.generate(&GenerateRequest {
//!     entity: "Produto".into(),
//!     table_prefix: "app_".into(),
//!     types_root: PathBuf::from("../src/types"),
//!     backend_root: PathBuf::from("."),
//!     execute_ddl: false,
//! })?;
//! println!("{}", report.sql);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, BarrelOutcome, CreateProjectRequest, DdlOutcome, DomainGenerator,
        GenerateRequest, GenerationReport, InstallOutcome, ProjectReport, ProjectService,
        ports::{
            DdlExecutor, DependencyInstaller, Discovery, Filesystem, SchemaProvider,
            TemplateSource,
        },
    };
    pub use crate::domain::{
        DomainDescriptor, DomainError, ProjectTemplate, PropertyInfo, PropertySchema,
        RelativePath, TypeBucket,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
