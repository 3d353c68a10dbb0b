//! `npm install` runner.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{info, instrument};

use crudforge_core::{
    application::{ApplicationError, ports::DependencyInstaller},
    error::ForgeResult,
};

const DEFAULT_PROGRAM: &str = if cfg!(windows) { "npm.cmd" } else { "npm" };

/// Runs `<program> install` inside the project directory, inheriting stdio
/// so the package manager's progress stays visible.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: PathBuf,
}

impl NpmInstaller {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use another npm-compatible binary (`pnpm`, a test stub...).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyInstaller for NpmInstaller {
    #[instrument(skip(self), fields(program = %self.program.display()))]
    fn install(&self, project_dir: &Path) -> ForgeResult<()> {
        let status = Command::new(&self.program)
            .arg("install")
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::InstallFailed {
                reason: format!("could not run {}: {e}", self.program.display()),
            })?;

        if !status.success() {
            return Err(ApplicationError::InstallFailed {
                reason: format!("{} install exited with {status}", self.program.display()),
            }
            .into());
        }

        info!("Dependencies installed");
        Ok(())
    }
}
