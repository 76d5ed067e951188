//! Implementation of the `stackgen generate` command.
//!
//! Responsibility: translate CLI arguments into blueprint settings, call the
//! core generate service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use stackgen_adapters::{default_blueprint, BlueprintSettings, LocalFilesystem};
use stackgen_core::application::{GeneratePlan, GenerateService};

use crate::{
    cli::{GenerateArgs, ReportFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the project name
/// 2. Build blueprint settings from flags + config
/// 3. Early-exit if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Execute generation via `GenerateService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project name
    let project_name = match &args.project_name {
        Some(name) => name.clone(),
        None => derive_project_name(&args.root)?,
    };
    validate_project_name(&project_name)?;

    // 2. Build settings and blueprint
    let mut settings = BlueprintSettings::new(&project_name);
    settings.base_port = config.base_port;
    settings.frontend_port = config.frontend_port;
    settings.postgres_port = config.postgres_port;

    let blueprint =
        default_blueprint(&settings).map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %project_name,
        units = blueprint.units.len(),
        base_port = settings.base_port,
        "Blueprint resolved"
    );

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&blueprint, &args.root)?;
        return show_plan(&plan, args.format, &output);
    }

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&settings, blueprint.units.len(), &args.root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    output.header(&format!("Generating '{project_name}'..."))?;
    info!(project = %project_name, root = %args.root.display(), "Generation started");

    let report = service.generate(&blueprint, &args.root)?;

    info!(
        directories = report.directories_created,
        files = report.files_written,
        "Generation completed"
    );

    // 6. Report + next steps
    match args.format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Text => {
            output.success(&format!(
                "Project '{}' generated: {} directories, {} files",
                project_name, report.directories_created, report.files_written
            ))?;

            if !global.quiet {
                output.print("")?;
                output.print("Next steps:")?;
                if args.root.as_os_str() != "." {
                    output.print(&format!("  cd {}", args.root.display()))?;
                }
                output.print("  docker compose up --build")?;
            }
        }
    }

    Ok(())
}

// ── Name resolution ───────────────────────────────────────────────────────────

/// Derive a project name from the target directory.
///
/// `--root .` resolves against the current directory so the name is the
/// directory the user is standing in, not `"."`.
fn derive_project_name(root: &Path) -> CliResult<String> {
    let resolved = if root.as_os_str() == "." {
        std::env::current_dir()?
    } else {
        root.to_path_buf()
    };

    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot derive a project name from '{}'; pass --project-name",
                root.display()
            ),
        })
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidInput {
            message: format!("project name '{name}' cannot start with '.'"),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidInput {
            message: format!("project name '{name}' cannot contain path separators"),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &GeneratePlan, format: ReportFormat, out: &OutputManager) -> CliResult<()> {
    match format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(plan)?);
        }
        ReportFormat::Text => {
            out.info(&format!(
                "Dry run: would create {} directories and {} files under {}",
                plan.directories.len(),
                plan.files.len(),
                plan.root.display()
            ))?;
            for dir in &plan.directories {
                out.print(&format!("  dir  {}", dir.display()))?;
            }
            for file in &plan.files {
                out.print(&format!("  file {}", file.display()))?;
            }
        }
    }
    Ok(())
}

fn show_configuration(
    settings: &BlueprintSettings,
    unit_count: usize,
    root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:       {}", settings.project_name))?;
    out.print(&format!("  Location:      {}", root.display()))?;
    out.print(&format!("  Units:         {unit_count}"))?;
    out.print(&format!("  Backend ports: {}..", settings.base_port))?;
    out.print(&format!("  Frontend port: {}", settings.frontend_port))?;
    out.print(&format!("  Postgres port: {}", settings.postgres_port))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
