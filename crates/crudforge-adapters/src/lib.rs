//! Infrastructure adapters for crudforge.
//!
//! This crate implements the ports defined in `crudforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod ddl;
pub mod filesystem;
pub mod install;
pub mod schema;
pub mod template;

// Re-export commonly used adapters
pub use ddl::SupabaseDdlExecutor;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use install::NpmInstaller;
pub use schema::{NullSchemaProvider, TypeScriptSchemaProvider};
pub use template::{BuiltinTemplate, DirectoryTemplate};
