//! Project template sources.
//!
//! | Source | Origin |
//! |--------|--------|
//! | [`DirectoryTemplate`] | a template folder on disk (`--template`, env, config) |
//! | [`BuiltinTemplate`] | the backend skeleton compiled into the binary |

mod builtin;
mod directory;

pub use builtin::BuiltinTemplate;
pub use directory::{DirectoryTemplate, TEMPLATE_DIR_VAR};
