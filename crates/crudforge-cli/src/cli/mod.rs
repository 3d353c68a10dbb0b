//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudforge",
    bin_name = "crudforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Supabase backend scaffolding and CRUD module generation",
    long_about = "crudforge bootstraps a Node.js + Supabase REST backend and generates \
                  CRUD domain modules (types, mapper, repository, service, controller, \
                  router, SQL) from TypeScript interfaces.",
    after_help = "EXAMPLES:\n\
        \x20 crudforge new my-api\n\
        \x20 crudforge gen Produto\n\
        \x20 crudforge gen Cliente --prefix=crm_ --path=../web/src/types --no-db\n\
        \x20 crudforge completions bash > /usr/share/bash-completion/completions/crudforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a CRUD module for one entity.
    #[command(
        visible_alias = "g",
        about = "Generate a CRUD domain module",
        after_help = "EXAMPLES:\n\
            \x20 crudforge gen Produto\n\
            \x20 crudforge gen \"centro custo\" --prefix=fin_\n\
            \x20 crudforge g Cliente --path=../frontend/src/types --no-db"
    )]
    Gen(GenArgs),

    /// Create a new backend project from the template.
    #[command(
        about = "Create a new backend project",
        after_help = "EXAMPLES:\n\
            \x20 crudforge new my-api\n\
            \x20 crudforge new my-api --skip-install\n\
            \x20 crudforge new my-api --template ./my-template"
    )]
    New(NewArgs),

    /// Initialise a crudforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudforge init           # platform config directory\n\
            \x20 crudforge init --local   # ./crudforge.toml\n\
            \x20 crudforge init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudforge completions bash > ~/.local/share/bash-completion/completions/crudforge\n\
            \x20 crudforge completions zsh  > ~/.zfunc/_crudforge\n\
            \x20 crudforge completions fish > ~/.config/fish/completions/crudforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudforge config get generate.table_prefix\n\
            \x20 crudforge config list\n\
            \x20 crudforge config path"
    )]
    Config(ConfigCommands),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Entity name in any casing (`Produto`, `centro custo`, `item_pedido`).
    #[arg(value_name = "ENTITY", help = "Entity name")]
    pub entity: String,

    /// Print the SQL without executing it.
    #[arg(long = "no-db", help = "Do not execute the generated SQL")]
    pub no_db: bool,

    /// Table name prefix.
    #[arg(
        long = "prefix",
        value_name = "TEXT",
        help = "Table name prefix [default: app_]"
    )]
    pub prefix: Option<String>,

    /// Directory searched for the entity's interface.
    #[arg(
        long = "path",
        value_name = "DIR",
        help = "Interface search root [default: ../src/types]"
    )]
    pub path: Option<PathBuf>,

    /// Backend project root.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Backend project root"
    )]
    pub root: PathBuf,

    /// Skip interface discovery and use the generic schema.
    #[arg(long = "skeleton", help = "Ignore interfaces and generate the skeleton schema")]
    pub skeleton: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; becomes `./NAME` and the package name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template directory to copy instead of the built-in skeleton.
    #[arg(
        long = "template",
        value_name = "DIR",
        help = "Template directory (default: built-in backend)"
    )]
    pub template: Option<PathBuf>,

    /// Do not run `npm install`.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `crudforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.table_prefix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
