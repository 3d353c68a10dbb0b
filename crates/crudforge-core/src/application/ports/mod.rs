//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `SchemaProvider`: Interface discovery in a types tree
//!   - `DdlExecutor`: Remote SQL execution
//!   - `TemplateSource`: Project bootstrap template
//!   - `DependencyInstaller`: Package installation for new projects
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    DdlExecutor, DependencyInstaller, Discovery, Filesystem, SchemaProvider, TemplateSource,
};

#[cfg(test)]
pub use output::{
    MockDdlExecutor, MockDependencyInstaller, MockFilesystem, MockSchemaProvider,
    MockTemplateSource,
};
