//! Content generators.
//!
//! Pure functions from `(DomainDescriptor, Option<&PropertySchema>)` to
//! source text. `None` means discovery found nothing and selects the
//! generic skeleton content.

pub mod mapper;
pub mod sql;
pub mod templates;
pub mod types;

use std::path::PathBuf;

use crate::domain::entities::{
    artifact_set::GeneratedArtifactSet, descriptor::DomainDescriptor, schema::PropertySchema,
};

pub use mapper::generate_mapper;
pub use sql::{SqlColumn, generate_sql, table_columns};
pub use templates::{
    RestRoute, generate_controller, generate_index, generate_repository, generate_router,
    generate_service,
};
pub use types::generate_types;

/// Everything produced for one domain: the module files and the DDL script.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub artifacts: GeneratedArtifactSet,
    pub table: String,
    pub sql: String,
}

/// File names of a module, in write order.
pub fn module_file_names(domain: &DomainDescriptor) -> [String; 7] {
    let p = domain.pascal();
    [
        format!("{p}.type.ts"),
        format!("{p}.utils.ts"),
        format!("{p}.repository.ts"),
        format!("{p}.service.ts"),
        format!("{p}.controller.ts"),
        format!("{p}.router.ts"),
        "index.ts".to_string(),
    ]
}

/// Run every generator for a domain.
pub fn generate_module(
    domain: &DomainDescriptor,
    schema: Option<&PropertySchema>,
    table_prefix: &str,
    module_dir: impl Into<PathBuf>,
) -> GeneratedModule {
    let table = domain.table_name(table_prefix);
    let pascal = domain.pascal();

    let contents = [
        generate_types(pascal, schema),
        generate_mapper(pascal, schema),
        generate_repository(domain, &table),
        generate_service(domain),
        generate_controller(domain),
        generate_router(domain),
        generate_index(domain),
    ];

    let mut artifacts = GeneratedArtifactSet::new(module_dir);
    for (name, content) in module_file_names(domain).into_iter().zip(contents) {
        artifacts.add_file(name, content);
    }

    GeneratedModule {
        sql: generate_sql(&table, schema),
        artifacts,
        table,
    }
}
