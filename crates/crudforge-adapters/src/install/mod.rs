//! Dependency installers for new projects.

mod npm;

pub use npm::NpmInstaller;
