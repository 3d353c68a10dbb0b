//! Domain Generator - CRUD module generation use case.
//!
//! Coordinates one `gen` run:
//! 1. Discover a schema for the entity (soft failure → skeleton)
//! 2. Generate the module files and the DDL script
//! 3. Write the module directory (refuses to overwrite)
//! 4. Register the route map in the shared barrel
//! 5. Optionally submit the DDL
//!
//! Steps run strictly in sequence. Nothing is rolled back: a failure after
//! step 3 leaves the written module in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DdlExecutor, Discovery, Filesystem, SchemaProvider},
    },
    domain::{
        BARREL_PATH, BarrelPatch, DomainDescriptor, GeneratedModule, RouteBarrel, generate_module,
    },
    error::{ForgeError, ForgeResult},
};

/// Modules live under `<backend root>/src/modules/<Pascal>`.
pub const MODULES_DIR: &str = "src/modules";

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub entity: String,
    pub table_prefix: String,
    /// Directory searched for interface declarations.
    pub types_root: PathBuf,
    /// Backend project root.
    pub backend_root: PathBuf,
    /// `false` under `--no-db`.
    pub execute_ddl: bool,
}

/// What happened to the route barrel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarrelOutcome {
    Patched,
    AlreadyRegistered,
    MarkerMissing,
    /// No barrel file in this project.
    Missing,
}

/// What happened to the generated DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlOutcome {
    /// Dry run: printed only.
    Skipped,
    Executed,
    Failed(String),
    Unavailable(String),
}

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub domain: DomainDescriptor,
    pub discovery: Option<Discovery>,
    pub module_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub table: String,
    pub sql: String,
    pub barrel: BarrelOutcome,
    pub ddl: DdlOutcome,
}

pub struct DomainGenerator {
    filesystem: Box<dyn Filesystem>,
    schema_provider: Box<dyn SchemaProvider>,
    ddl: Box<dyn DdlExecutor>,
}

impl DomainGenerator {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        schema_provider: Box<dyn SchemaProvider>,
        ddl: Box<dyn DdlExecutor>,
    ) -> Self {
        Self {
            filesystem,
            schema_provider,
            ddl,
        }
    }

    /// Run the whole pipeline.
    #[instrument(
        skip_all,
        fields(
            entity = %request.entity,
            prefix = %request.table_prefix,
            root = %request.backend_root.display()
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> ForgeResult<GenerationReport> {
        let domain = DomainDescriptor::parse(&request.entity).map_err(ForgeError::Domain)?;
        info!(pascal = %domain.pascal(), snake = %domain.snake(), "Generating module");

        let discovery = self.discover(&domain, &request.types_root);
        let module_dir = module_dir(&request.backend_root, &domain);
        let module = generate_module(
            &domain,
            discovery.as_ref().map(|d| &d.schema),
            &request.table_prefix,
            &module_dir,
        );

        let files = self.materialize(&domain, &module)?;
        let barrel = self.register_route(&domain, &request.backend_root)?;
        let ddl = if request.execute_ddl {
            self.execute_ddl(&module.sql)
        } else {
            info!("DDL execution disabled");
            DdlOutcome::Skipped
        };

        Ok(GenerationReport {
            domain,
            discovery,
            module_dir,
            files,
            table: module.table,
            sql: module.sql,
            barrel,
            ddl,
        })
    }

    /// Ask the schema provider; any failure degrades to `None`.
    pub fn discover(&self, domain: &DomainDescriptor, types_root: &Path) -> Option<Discovery> {
        match self.schema_provider.discover(domain, types_root) {
            Ok(Some(found)) => {
                info!(
                    interface = %found.interface,
                    source = %found.source.display(),
                    properties = found.schema.len(),
                    "Interface found"
                );
                for p in found.schema.iter().filter(|p| !p.has_known_type()) {
                    debug!(
                        property = %p.name,
                        declared_type = %p.declared_type,
                        bucket = %p.bucket(),
                        "Type matched no known marker, treating as text"
                    );
                }
                Some(found)
            }
            Ok(None) => {
                warn!(
                    entity = %domain.pascal(),
                    root = %types_root.display(),
                    "No interface found, using skeleton schema"
                );
                None
            }
            Err(e) => {
                warn!(error = %e, "Schema discovery failed, using skeleton schema");
                None
            }
        }
    }

    /// Write every artifact into a fresh module directory.
    pub fn materialize(
        &self,
        domain: &DomainDescriptor,
        module: &GeneratedModule,
    ) -> ForgeResult<Vec<PathBuf>> {
        let artifacts = &module.artifacts;
        artifacts.validate().map_err(ForgeError::Domain)?;

        let root = artifacts.root();
        if self.filesystem.exists(root) {
            return Err(ApplicationError::ModuleExists {
                name: domain.pascal().to_string(),
                path: root.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(root)?;
        let mut written = Vec::with_capacity(artifacts.file_count());
        for file in artifacts.files() {
            let path = root.join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), "Wrote file");
            written.push(path);
        }

        info!(count = written.len(), "Module written");
        Ok(written)
    }

    /// Patch the route barrel. Only a successful patch is written.
    pub fn register_route(
        &self,
        domain: &DomainDescriptor,
        backend_root: &Path,
    ) -> ForgeResult<BarrelOutcome> {
        let path = backend_root.join(BARREL_PATH);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "No route barrel, skipping registration");
            return Ok(BarrelOutcome::Missing);
        }

        let source = self.filesystem.read_to_string(&path)?;
        match RouteBarrel::parse(&source).register(domain) {
            BarrelPatch::Patched(content) => {
                self.filesystem.write_file(&path, &content)?;
                info!(symbol = %domain.routes_symbol(), "Route registered");
                Ok(BarrelOutcome::Patched)
            }
            BarrelPatch::AlreadyRegistered => {
                debug!(symbol = %domain.routes_symbol(), "Route already registered");
                Ok(BarrelOutcome::AlreadyRegistered)
            }
            BarrelPatch::MarkerMissing => {
                warn!(path = %path.display(), "Route aggregate not found, barrel left unchanged");
                Ok(BarrelOutcome::MarkerMissing)
            }
        }
    }

    /// Submit the DDL. Never fails the run.
    pub fn execute_ddl(&self, sql: &str) -> DdlOutcome {
        match self.ddl.execute(sql) {
            Ok(()) => {
                info!("DDL executed");
                DdlOutcome::Executed
            }
            Err(ForgeError::Application(ApplicationError::DdlUnavailable { reason })) => {
                warn!(%reason, "DDL not executed");
                DdlOutcome::Unavailable(reason)
            }
            Err(e) => {
                warn!(error = %e, "DDL execution failed");
                DdlOutcome::Failed(e.to_string())
            }
        }
    }
}

pub fn module_dir(backend_root: &Path, domain: &DomainDescriptor) -> PathBuf {
    backend_root.join(MODULES_DIR).join(domain.pascal())
}
