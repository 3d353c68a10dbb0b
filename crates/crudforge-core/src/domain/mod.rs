// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudforge.
//!
//! Pure generation logic with no I/O. Reading source trees, writing modules
//! and talking to the database happen behind the ports of the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Every function maps text and values to text and values
//! - **Deterministic**: Same descriptor + schema → byte-identical artifacts
//!
pub mod barrel;
pub mod entities;
pub mod error;
pub mod generators;
pub mod introspection;
pub mod manifest;
pub mod naming;

pub use barrel::{BARREL_PATH, BarrelPatch, RouteBarrel};
pub use entities::{
    artifact_set::{GeneratedArtifactSet, GeneratedFile},
    common::RelativePath,
    descriptor::DomainDescriptor,
    project_template::{ProjectTemplate, TemplateFile, validate_project_name},
    schema::{PropertyInfo, PropertySchema, TypeBucket},
};
pub use error::{DomainError, ErrorCategory};
pub use generators::{GeneratedModule, generate_module, module_file_names};
pub use introspection::{InterfaceDecl, find_interface, parse_interfaces};
