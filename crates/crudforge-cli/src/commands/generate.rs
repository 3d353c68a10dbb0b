//! `crudforge gen`: generate one CRUD domain module.

use std::path::Path;

use serde_json::json;
use tracing::instrument;

use crudforge_adapters::{
    LocalFilesystem, NullSchemaProvider, SupabaseDdlExecutor, TypeScriptSchemaProvider,
    ddl::{SUPABASE_KEY_VAR, SUPABASE_URL_VAR},
};
use crudforge_core::application::{
    BarrelOutcome, DdlOutcome, DomainGenerator, GenerateRequest, GenerationReport,
    ports::SchemaProvider,
};

use crate::{
    cli::GenArgs,
    config::{AppConfig, SchemaProviderKind},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Generate the module, patch the barrel and optionally run the DDL.
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(args: GenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config);

    let provider: Box<dyn SchemaProvider> =
        if args.skeleton || config.generate.schema_provider == SchemaProviderKind::None {
            Box::new(NullSchemaProvider)
        } else {
            Box::new(TypeScriptSchemaProvider::new())
        };
    // Unconfigured under --no-db so credentials are never read.
    let ddl = if args.no_db {
        SupabaseDdlExecutor::unconfigured()
    } else {
        SupabaseDdlExecutor::from_env()
    };

    let generator = DomainGenerator::new(Box::new(LocalFilesystem::new()), provider, Box::new(ddl));

    if !output.is_json() {
        output.header(&format!("Generating domain '{}'", args.entity))?;
    }
    let report = generator
        .generate(&request)
        .with_cli_context(|| format!("generating '{}'", args.entity))?;

    if output.is_json() {
        output.json(&report_json(&report))?;
    } else {
        print_report(&report, &request, &output)?;
    }
    Ok(())
}

/// Merge flags over config.
fn build_request(args: &GenArgs, config: &AppConfig) -> GenerateRequest {
    GenerateRequest {
        entity: args.entity.clone(),
        table_prefix: args
            .prefix
            .clone()
            .unwrap_or_else(|| config.generate.table_prefix.clone()),
        types_root: args
            .path
            .clone()
            .unwrap_or_else(|| config.generate.types_path.clone()),
        backend_root: args.root.clone(),
        execute_ddl: !args.no_db,
    }
}

fn print_report(
    report: &GenerationReport,
    request: &GenerateRequest,
    output: &OutputManager,
) -> CliResult<()> {
    match &report.discovery {
        Some(found) => output.info(&format!(
            "Using interface {} from {}",
            found.interface,
            found.source.display()
        ))?,
        None => output.warning(&format!(
            "No interface {} found under {}; using the skeleton schema",
            report.domain.interface_candidates().join(" or "),
            request.types_root.display()
        ))?,
    }

    for file in &report.files {
        output.success(&format!("Created {}", file.display()))?;
    }

    match report.barrel {
        BarrelOutcome::Patched => output.success(&format!(
            "Registered {} in the route barrel",
            report.domain.routes_symbol()
        ))?,
        BarrelOutcome::AlreadyRegistered => output.info("Route barrel already up to date")?,
        BarrelOutcome::MarkerMissing => output.warning(
            "Route barrel has no `internalRoutes` map; register the routes manually",
        )?,
        BarrelOutcome::Missing => {
            output.warning("No route barrel found; register the routes manually")?
        }
    }

    output.print("")?;
    output.header(&format!("SQL for table {}:", report.table))?;
    output.block(&report.sql)?;
    output.print("")?;

    match &report.ddl {
        DdlOutcome::Skipped => output.info("--no-db: SQL was not executed")?,
        DdlOutcome::Executed => output.success(&format!("Table {} created", report.table))?,
        DdlOutcome::Failed(reason) => {
            output.warning(&format!("SQL execution failed: {reason}"))?;
            output.print("Run the SQL above manually in the database console.")?;
        }
        DdlOutcome::Unavailable(reason) => {
            output.warning(&format!("SQL not executed: {reason}"))?;
            output.print(&format!(
                "Set {SUPABASE_URL_VAR} and {SUPABASE_KEY_VAR}, or pass --no-db."
            ))?;
        }
    }

    output.success(&format!("Module {} ready", report.domain.pascal()))?;
    Ok(())
}

fn report_json(report: &GenerationReport) -> serde_json::Value {
    let (ddl_status, ddl_reason) = match &report.ddl {
        DdlOutcome::Skipped => ("skipped", None),
        DdlOutcome::Executed => ("executed", None),
        DdlOutcome::Failed(reason) => ("failed", Some(reason.as_str())),
        DdlOutcome::Unavailable(reason) => ("unavailable", Some(reason.as_str())),
    };
    let barrel = match report.barrel {
        BarrelOutcome::Patched => "patched",
        BarrelOutcome::AlreadyRegistered => "already_registered",
        BarrelOutcome::MarkerMissing => "marker_missing",
        BarrelOutcome::Missing => "missing",
    };
    let files: Vec<String> = report.files.iter().map(|p| display(p)).collect();

    json!({
        "domain": report.domain.pascal(),
        "interface": report.discovery.as_ref().map(|d| d.interface.clone()),
        "source": report.discovery.as_ref().map(|d| display(&d.source)),
        "module_dir": display(&report.module_dir),
        "files": files,
        "table": report.table,
        "sql": report.sql,
        "barrel": barrel,
        "ddl": { "status": ddl_status, "reason": ddl_reason },
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
