//! Provider that never finds anything, forcing the skeleton schema.

use std::path::Path;

use crudforge_core::{
    application::ports::{Discovery, SchemaProvider},
    domain::DomainDescriptor,
    error::ForgeResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchemaProvider;

impl SchemaProvider for NullSchemaProvider {
    fn discover(&self, _domain: &DomainDescriptor, _search_root: &Path) -> ForgeResult<Option<Discovery>> {
        Ok(None)
    }
}
