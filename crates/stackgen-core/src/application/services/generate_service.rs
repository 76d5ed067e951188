//! Generate Service - main application orchestrator.
//!
//! This service is the driver for one generation run:
//! 1. Validate the blueprint
//! 2. For each unit: ensure its directory tree, then render + write its
//!    templated files with the unit's binding
//! 3. One more pass for the shared root subtrees and root-level files
//!
//! It implements the driving port (incoming) and uses the driven
//! [`Filesystem`] port (outgoing). Execution is single-threaded and
//! synchronous — the total work is a small, fixed number of filesystem
//! operations, and unit subtrees are disjoint by construction.
//!
//! Failure handling is fail-fast: the first error aborts the run, wrapped in
//! [`ApplicationError::UnitFailed`] so it is attributable to the offending
//! unit. There is no rollback — a partially created tree is repaired by
//! re-running, since every operation is idempotent or an overwrite.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Binding, Blueprint, DirectorySpec, FileTemplate, PathExpr, RelativePath, Unit},
    error::StackgenResult,
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenerateReport {
    /// Directories newly created (pre-existing ones are not counted).
    pub directories_created: usize,
    /// Files written (created or overwritten).
    pub files_written: usize,
}

/// Dry-run description of what a generation run would produce.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePlan {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Main generation service.
///
/// Orchestrates directory creation and template rendering for a blueprint.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize a blueprint under `root`.
    ///
    /// This is the main use case. Re-running against an existing tree is
    /// legal and refreshes the scaffolding: directories are no-ops, files
    /// are overwritten.
    #[instrument(skip_all, fields(project = %blueprint.project_name, root = %root.display()))]
    pub fn generate(&self, blueprint: &Blueprint, root: &Path) -> StackgenResult<GenerateReport> {
        blueprint.validate()?;

        info!(
            units = blueprint.units.len(),
            templates = blueprint.template_count(),
            "Generation started"
        );

        let mut report = GenerateReport::default();

        for unit in &blueprint.units {
            self.materialize_unit(root, unit, &mut report)
                .map_err(|e| ApplicationError::for_unit(&unit.name, e))?;
            debug!(unit = %unit.name, "Unit materialized");
        }

        // Root pass: shared subtrees and root-level files, fixed binding.
        report.directories_created +=
            self.ensure_tree(root, &blueprint.root_dirs, &blueprint.root_binding)?;
        report.files_written +=
            self.write_templates(root, &blueprint.root_files, &blueprint.root_binding)?;

        info!(
            directories = report.directories_created,
            files = report.files_written,
            "Generation completed"
        );
        Ok(report)
    }

    /// Compute what [`Self::generate`] would create, without touching the
    /// filesystem.
    pub fn plan(&self, blueprint: &Blueprint, root: &Path) -> StackgenResult<GeneratePlan> {
        blueprint.validate()?;

        let mut directories = Vec::new();
        let mut files = Vec::new();

        for unit in &blueprint.units {
            for path in expand_dirs(&unit.dirs, &unit.binding)? {
                directories.push(root.join(path.as_path()));
            }
            for template in &unit.templates {
                files.push(root.join(resolve_dest(template, &unit.binding)?.as_path()));
            }
        }

        for path in expand_dirs(&blueprint.root_dirs, &blueprint.root_binding)? {
            directories.push(root.join(path.as_path()));
        }
        for template in &blueprint.root_files {
            files.push(root.join(resolve_dest(template, &blueprint.root_binding)?.as_path()));
        }

        Ok(GeneratePlan {
            root: root.to_path_buf(),
            directories,
            files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn materialize_unit(
        &self,
        root: &Path,
        unit: &Unit,
        report: &mut GenerateReport,
    ) -> StackgenResult<()> {
        report.directories_created += self.ensure_tree(root, &unit.dirs, &unit.binding)?;
        report.files_written += self.write_templates(root, &unit.templates, &unit.binding)?;
        Ok(())
    }

    /// Create every directory a spec describes, ancestors included.
    ///
    /// Returns the number of directories that did not exist before the call;
    /// already-existing directories are silently skipped (idempotence).
    fn ensure_tree(
        &self,
        root: &Path,
        spec: &DirectorySpec,
        binding: &Binding,
    ) -> StackgenResult<usize> {
        let mut created = 0;
        for path in expand_dirs(spec, binding)? {
            let full = root.join(path.as_path());
            if !self.filesystem.exists(&full) {
                created += 1;
            }
            self.filesystem.create_dir_all(&full)?;
        }
        Ok(created)
    }

    /// Render and write each template, creating parent directories as needed.
    fn write_templates(
        &self,
        root: &Path,
        templates: &[FileTemplate],
        binding: &Binding,
    ) -> StackgenResult<usize> {
        for template in templates {
            let dest = resolve_dest(template, binding)?;
            let content = binding.render(&template.name, template.body.as_str())?;

            let full = root.join(dest.as_path());
            if let Some(parent) = full.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&full, &content)?;
            debug!(path = %full.display(), "File written");
        }
        Ok(templates.len())
    }
}

/// Render a spec's path expressions against a binding, then brace-expand.
fn expand_dirs(spec: &DirectorySpec, binding: &Binding) -> StackgenResult<Vec<RelativePath>> {
    let mut out = Vec::new();
    for expr in spec.exprs() {
        let rendered = binding.render(expr.as_str(), expr.as_str())?;
        out.extend(PathExpr::new(rendered).expand()?);
    }
    Ok(out)
}

/// Resolve a template's parameterized destination to a concrete path.
fn resolve_dest(template: &FileTemplate, binding: &Binding) -> StackgenResult<RelativePath> {
    let dest = binding.render(&template.name, &template.dest)?;
    Ok(RelativePath::try_new(dest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn expand_dirs_renders_then_expands() {
        let spec = DirectorySpec::new(["{{service_name}}/{src,tests}"]);
        let binding = Binding::new().with("service_name", "model-service");
        let paths = expand_dirs(&spec, &binding).unwrap();
        let strs: Vec<_> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["model-service/src", "model-service/tests"]);
    }

    #[test]
    fn expand_dirs_surfaces_unbound_placeholder() {
        let spec = DirectorySpec::new(["{{missing}}/src"]);
        let err = expand_dirs(&spec, &Binding::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::StackgenError::Domain(DomainError::UnboundPlaceholder { .. })
        ));
    }

    #[test]
    fn resolve_dest_substitutes_unit_name() {
        let t = FileTemplate::new("package.json", "{{unit}}/package.json", "{}");
        let binding = Binding::new().with("unit", "user-management");
        assert_eq!(
            resolve_dest(&t, &binding).unwrap().as_str(),
            "user-management/package.json"
        );
    }
}
