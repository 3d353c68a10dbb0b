pub mod artifact_set;
pub mod common;
pub mod descriptor;
pub mod project_template;
pub mod schema;

pub use crate::domain::DomainError;
pub use artifact_set::GeneratedArtifactSet;
pub use descriptor::DomainDescriptor;
pub use project_template::ProjectTemplate;
pub use schema::{PropertyInfo, PropertySchema};
