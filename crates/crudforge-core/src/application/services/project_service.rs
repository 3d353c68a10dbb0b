//! Project Service - bootstrap use case.
//!
//! Creates a new backend project from a template:
//! 1. Validate the name and refuse an existing folder
//! 2. Load and instantiate the template (dotfile rename, manifest rewrite)
//! 3. Write every file, rolling back the folder on failure
//! 4. Install dependencies (failure is reported, not fatal)

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DependencyInstaller, Filesystem, TemplateSource},
    },
    domain::{TemplateFile, validate_project_name},
    error::{ForgeError, ForgeResult},
};

#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub name: String,
    /// Folder the project directory is created in.
    pub parent_dir: PathBuf,
    pub install: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped,
    Installed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub root: PathBuf,
    pub template: String,
    pub files: Vec<PathBuf>,
    pub install: InstallOutcome,
}

pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
    template: Box<dyn TemplateSource>,
    installer: Box<dyn DependencyInstaller>,
}

impl ProjectService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        template: Box<dyn TemplateSource>,
        installer: Box<dyn DependencyInstaller>,
    ) -> Self {
        Self {
            filesystem,
            template,
            installer,
        }
    }

    #[instrument(
        skip_all,
        fields(
            project = %request.name,
            parent = %request.parent_dir.display(),
            template = %self.template.describe()
        )
    )]
    pub fn create(&self, request: &CreateProjectRequest) -> ForgeResult<ProjectReport> {
        validate_project_name(&request.name).map_err(ForgeError::Domain)?;

        let root = request.parent_dir.join(&request.name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let template = self.template.load()?;
        let files = template.instantiate(&request.name).map_err(ForgeError::Domain)?;
        info!(files = files.len(), "Template instantiated");

        let written = match self.write_all(&root, &files) {
            Ok(written) => written,
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&root);
                return Err(e);
            }
        };

        let install = if request.install {
            match self.installer.install(&root) {
                Ok(()) => InstallOutcome::Installed,
                Err(e) => {
                    warn!(error = %e, "Dependency installation failed");
                    InstallOutcome::Failed(e.to_string())
                }
            }
        } else {
            InstallOutcome::Skipped
        };

        info!("Project created successfully");
        Ok(ProjectReport {
            root,
            template: self.template.describe(),
            files: written,
            install,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, root: &Path, files: &[TemplateFile]) -> ForgeResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(root)?;

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDependencyInstaller, MockFilesystem, MockTemplateSource};
    use crate::domain::ProjectTemplate;
    use std::sync::{Arc, Mutex};

    fn template_source() -> MockTemplateSource {
        let mut source = MockTemplateSource::new();
        source.expect_describe().return_const("test template".to_string());
        source.expect_load().returning(|| {
            Ok(ProjectTemplate::new("test")
                .with_file("_gitignore", "node_modules\n")
                .with_file("package.json", r#"{"name":"template","version":"0.0.0"}"#)
                .with_file("src/server.ts", "listen();\n"))
        });
        source
    }

    fn recording_fs(writes: Arc<Mutex<Vec<(PathBuf, String)>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, c| {
            writes.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        fs
    }

    fn request(install: bool) -> CreateProjectRequest {
        CreateProjectRequest {
            name: "my-api".into(),
            parent_dir: PathBuf::from("/work"),
            install,
        }
    }

    #[test]
    fn creates_project_with_renamed_dotfile_and_manifest() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let mut installer = MockDependencyInstaller::new();
        installer.expect_install().never();
        let service = ProjectService::new(
            Box::new(recording_fs(writes.clone())),
            Box::new(template_source()),
            Box::new(installer),
        );

        let report = service.create(&request(false)).unwrap();

        assert_eq!(report.root, PathBuf::from("/work/my-api"));
        assert_eq!(report.install, InstallOutcome::Skipped);
        let writes = writes.lock().unwrap();
        let paths: Vec<&PathBuf> = writes.iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&&PathBuf::from("/work/my-api/.gitignore")));
        let manifest = writes
            .iter()
            .find(|(p, _)| p.ends_with("package.json"))
            .map(|(_, c)| c.clone())
            .unwrap();
        assert!(manifest.contains(r#""name": "my-api""#));
    }

    #[test]
    fn existing_folder_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        let mut source = MockTemplateSource::new();
        source.expect_describe().return_const("t".to_string());
        source.expect_load().never();
        let service = ProjectService::new(Box::new(fs), Box::new(source), Box::new(MockDependencyInstaller::new()));

        let err = service.create(&request(true)).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn install_failure_is_reported_not_fatal() {
        let mut installer = MockDependencyInstaller::new();
        installer
            .expect_install()
            .withf(|dir| dir == Path::new("/work/my-api"))
            .times(1)
            .returning(|_| {
                Err(ApplicationError::InstallFailed {
                    reason: "npm not found".into(),
                }
                .into())
            });
        let service = ProjectService::new(
            Box::new(recording_fs(Arc::new(Mutex::new(Vec::new())))),
            Box::new(template_source()),
            Box::new(installer),
        );

        let report = service.create(&request(true)).unwrap();
        assert!(matches!(report.install, InstallOutcome::Failed(ref m) if m.contains("npm not found")));
    }

    #[test]
    fn write_failure_rolls_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/work/my-api"))
            .times(1)
            .returning(|_| Ok(()));
        let service = ProjectService::new(
            Box::new(fs),
            Box::new(template_source()),
            Box::new(MockDependencyInstaller::new()),
        );

        assert!(service.create(&request(false)).is_err());
    }

    #[test]
    fn invalid_name_rejected_early() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        let mut source = MockTemplateSource::new();
        source.expect_describe().return_const("t".to_string());
        let service = ProjectService::new(Box::new(fs), Box::new(source), Box::new(MockDependencyInstaller::new()));

        let mut req = request(false);
        req.name = "../escape".into();
        assert!(matches!(service.create(&req), Err(ForgeError::Domain(_))));
    }
}
