//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Multi-service monorepo scaffolding",
    long_about = "Stackgen materializes a GraphQL microservices monorepo: \
                  backend services, a frontend app, shared libraries, and a \
                  docker compose descriptor, in one idempotent pass.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen generate\n\
        \x20 stackgen generate --root ./acme --project-name acme --yes\n\
        \x20 stackgen generate --dry-run --format json\n\
        \x20 stackgen completions bash > /usr/share/bash-completion/completions/stackgen",
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
    /// Generate the project tree.
    #[command(
        visible_alias = "gen",
        about = "Generate the project tree",
        after_help = "EXAMPLES:\n\
            \x20 stackgen generate\n\
            \x20 stackgen generate --root ./acme --yes\n\
            \x20 stackgen generate --dry-run --format json"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stackgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory to generate into. Created if missing.
    #[arg(
        long = "root",
        value_name = "DIR",
        env = "STACKGEN_ROOT",
        default_value = ".",
        help = "Directory to generate the project into"
    )]
    pub root: PathBuf,

    /// Project name. Defaults to the root directory's name.
    #[arg(
        long = "project-name",
        value_name = "NAME",
        env = "STACKGEN_PROJECT_NAME",
        help = "Project name used in generated files"
    )]
    pub project_name: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Output format for reports and dry-run plans.
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

/// Output format for `generate` reports and plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackgen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
