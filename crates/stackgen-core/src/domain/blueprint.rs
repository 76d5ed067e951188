//! Blueprint domain aggregate: units, directory specs, and validation.
//!
//! A [`Blueprint`] is the explicit configuration structure the driver
//! consumes: an ordered list of [`Unit`]s (one per backend service, plus the
//! frontend) and the shared root-level subtrees and files. Turning the unit
//! list into data — rather than one hand-written block per service — is what
//! lets the driver be a single generic loop.
//!
//! Blueprints are built once per generation run and never mutated after
//! construction; the durable record of a run is the file tree it produced.

use std::collections::HashSet;

use super::{
    binding::Binding,
    error::DomainError,
    path_expr::PathExpr,
    template::FileTemplate,
};

/// An ordered sequence of path expressions describing a directory subtree.
///
/// Invariant: idempotently creatable — materializing a spec twice produces
/// an identical tree with no error and no duplication.
#[derive(Debug, Clone, Default)]
pub struct DirectorySpec {
    exprs: Vec<PathExpr>,
}

impl DirectorySpec {
    pub fn new<I, S>(exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exprs: exprs.into_iter().map(|s| PathExpr::new(s)).collect(),
        }
    }

    pub fn exprs(&self) -> &[PathExpr] {
        &self.exprs
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// One named unit of generation: a backend service or the frontend app.
///
/// A unit owns its directory subtree, its file templates, and the binding
/// its templates are rendered with. Unit subtrees are disjoint by
/// construction — no two units write to the same path.
#[derive(Debug, Clone)]
pub struct Unit {
    /// Unit name (e.g. "model-service", "frontend").
    pub name: String,

    /// Directory skeleton, possibly parameterized and brace-listed.
    pub dirs: DirectorySpec,

    /// Templated starter files.
    pub templates: Vec<FileTemplate>,

    /// Placeholder values for this unit's paths and bodies.
    pub binding: Binding,
}

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dirs: DirectorySpec::default(),
            templates: Vec::new(),
            binding: Binding::new(),
        }
    }

    pub fn dirs(mut self, dirs: DirectorySpec) -> Self {
        self.dirs = dirs;
        self
    }

    pub fn template(mut self, template: FileTemplate) -> Self {
        self.templates.push(template);
        self
    }

    pub fn binding(mut self, binding: Binding) -> Self {
        self.binding = binding;
        self
    }
}

/// The full declarative description of one generation run.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Human-facing project name (feeds the root binding).
    pub project_name: String,

    /// Per-unit subtrees, processed in order.
    pub units: Vec<Unit>,

    /// Shared subtrees outside any unit (libraries, infrastructure).
    pub root_dirs: DirectorySpec,

    /// Root-level files (ignore file, readme, compose descriptor, ...).
    pub root_files: Vec<FileTemplate>,

    /// Binding for the root pass (no iteration variable).
    pub root_binding: Binding,
}

impl Blueprint {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            units: Vec::new(),
            root_dirs: DirectorySpec::default(),
            root_files: Vec::new(),
            root_binding: Binding::new(),
        }
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn root_dirs(mut self, dirs: DirectorySpec) -> Self {
        self.root_dirs = dirs;
        self
    }

    pub fn root_file(mut self, template: FileTemplate) -> Self {
        self.root_files.push(template);
        self
    }

    pub fn root_binding(mut self, binding: Binding) -> Self {
        self.root_binding = binding;
        self
    }

    /// Validate all invariants.
    ///
    /// 1. Project name is non-empty
    /// 2. At least one unit
    /// 3. Unit names are unique
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_name.is_empty() {
            return Err(DomainError::InvalidBlueprint(
                "project name cannot be empty".into(),
            ));
        }

        if self.units.is_empty() {
            return Err(DomainError::InvalidBlueprint(
                "blueprint declares no units".into(),
            ));
        }

        let mut seen = HashSet::new();
        for unit in &self.units {
            if unit.name.is_empty() {
                return Err(DomainError::InvalidBlueprint(
                    "unit name cannot be empty".into(),
                ));
            }
            if !seen.insert(unit.name.as_str()) {
                return Err(DomainError::DuplicateUnit {
                    name: unit.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Total number of file templates across all units and the root pass.
    pub fn template_count(&self) -> usize {
        self.units.iter().map(|u| u.templates.len()).sum::<usize>() + self.root_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Blueprint {
        Blueprint::new("demo").unit(Unit::new("model-service"))
    }

    #[test]
    fn minimal_blueprint_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn empty_project_name_is_invalid() {
        let bp = Blueprint::new("").unit(Unit::new("a"));
        assert!(matches!(
            bp.validate(),
            Err(DomainError::InvalidBlueprint(_))
        ));
    }

    #[test]
    fn no_units_is_invalid() {
        assert!(Blueprint::new("demo").validate().is_err());
    }

    #[test]
    fn duplicate_unit_names_are_rejected() {
        let bp = Blueprint::new("demo")
            .unit(Unit::new("model-service"))
            .unit(Unit::new("model-service"));
        assert_eq!(
            bp.validate(),
            Err(DomainError::DuplicateUnit {
                name: "model-service".into()
            })
        );
    }

    #[test]
    fn template_count_spans_units_and_root() {
        let bp = Blueprint::new("demo")
            .unit(Unit::new("a").template(FileTemplate::new("f", "a/f", "x")))
            .unit(Unit::new("b"))
            .root_file(FileTemplate::new("r", "r", "y"));
        assert_eq!(bp.template_count(), 2);
    }
}
