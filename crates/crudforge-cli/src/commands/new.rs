//! Implementation of the `crudforge new` command.
//!
//! Translates CLI arguments into a `CreateProjectRequest`, picks the
//! template source, calls the core project service and prints next steps.

use std::path::PathBuf;

use tracing::{info, instrument};

use crudforge_adapters::{BuiltinTemplate, DirectoryTemplate, LocalFilesystem, NpmInstaller};
use crudforge_core::application::{
    CreateProjectRequest, InstallOutcome, ProjectService, ports::TemplateSource,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `crudforge new` command.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let parent_dir = std::env::current_dir()
        .with_cli_context(|| "reading the current directory")?;
    let template = resolve_template(
        args.template.clone(),
        DirectoryTemplate::from_env(),
        config.project.template_path.clone(),
    );

    let service = ProjectService::new(
        Box::new(LocalFilesystem::new()),
        template,
        Box::new(NpmInstaller::new()),
    );

    if !output.is_json() {
        output.header(&format!("Creating '{}'...", args.name))?;
    }
    let report = service
        .create(&CreateProjectRequest {
            name: args.name.clone(),
            parent_dir,
            install: !args.skip_install,
        })
        .with_cli_context(|| format!("creating '{}'", args.name))?;
    info!(root = %report.root.display(), files = report.files.len(), "Project created");

    if output.is_json() {
        let (install, reason) = match &report.install {
            InstallOutcome::Skipped => ("skipped", None),
            InstallOutcome::Installed => ("installed", None),
            InstallOutcome::Failed(reason) => ("failed", Some(reason.as_str())),
        };
        output.json(&serde_json::json!({
            "project": args.name,
            "root": report.root.display().to_string(),
            "template": report.template,
            "files": report.files.len(),
            "install": { "status": install, "reason": reason },
        }))?;
        return Ok(());
    }

    output.info(&format!("Template: {}", report.template))?;
    output.success(&format!(
        "Wrote {} files to {}",
        report.files.len(),
        report.root.display()
    ))?;

    match &report.install {
        InstallOutcome::Installed => output.success("Dependencies installed")?,
        InstallOutcome::Skipped => output.info("Skipped dependency installation")?,
        InstallOutcome::Failed(reason) => {
            output.warning(&format!("Dependency installation failed: {reason}"))?
        }
    }

    output.success(&format!("Project '{}' created!", args.name))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.name))?;
    if report.install != InstallOutcome::Installed {
        output.print("  npm install")?;
    }
    output.print("  cp .env.example .env   # fill in SUPABASE_URL and SUPABASE_KEY")?;
    output.print("  npm run dev")?;
    output.print("  crudforge gen <Entity>")?;

    Ok(())
}

/// `--template` → `$CRUDFORGE_TEMPLATE_DIR` → config → embedded skeleton.
fn resolve_template(
    flag: Option<PathBuf>,
    from_env: Option<DirectoryTemplate>,
    configured: Option<PathBuf>,
) -> Box<dyn TemplateSource> {
    if let Some(dir) = flag {
        return Box::new(DirectoryTemplate::new(dir));
    }
    if let Some(template) = from_env {
        return Box::new(template);
    }
    match configured {
        Some(dir) => Box::new(DirectoryTemplate::new(dir)),
        None => Box::new(BuiltinTemplate::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        let source = resolve_template(
            Some(PathBuf::from("/flag")),
            Some(DirectoryTemplate::new("/env")),
            Some(PathBuf::from("/cfg")),
        );
        assert!(source.describe().contains("/flag"));
    }

    #[test]
    fn env_before_config() {
        let source = resolve_template(
            None,
            Some(DirectoryTemplate::new("/env")),
            Some(PathBuf::from("/cfg")),
        );
        assert!(source.describe().contains("/env"));
    }

    #[test]
    fn config_before_builtin() {
        let source = resolve_template(None, None, Some(PathBuf::from("/cfg")));
        assert!(source.describe().contains("/cfg"));
    }

    #[test]
    fn builtin_is_the_fallback() {
        let source = resolve_template(None, None, None);
        assert_eq!(source.describe(), "built-in backend template");
    }
}
