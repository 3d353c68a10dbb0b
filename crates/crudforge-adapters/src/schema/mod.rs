//! Schema discovery adapters.

mod null;
mod typescript;

pub use null::NullSchemaProvider;
pub use typescript::TypeScriptSchemaProvider;
