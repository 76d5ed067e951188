//! Domain errors: blueprint, path-expression, and rendering violations.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping in per-unit failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Duplicate unit name in blueprint: {name}")]
    DuplicateUnit { name: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePath { path: String },

    #[error("Malformed path expression '{expr}': {reason}")]
    MalformedPathExpr { expr: String, reason: String },

    // ========================================================================
    // Render Errors
    // ========================================================================
    #[error("Template '{template}' references unbound placeholder '{name}'")]
    UnboundPlaceholder { name: String, template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlueprint(msg) => vec![
                "Check the blueprint definition".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicateUnit { name } => vec![
                format!("Unit '{}' is declared more than once", name),
                "Unit names must be unique — each unit owns its own subtree".into(),
            ],
            Self::AbsolutePath { path } => vec![
                format!("'{}' is absolute", path),
                "Blueprint paths must be relative to the project root".into(),
            ],
            Self::MalformedPathExpr { expr, .. } => vec![
                format!("Could not parse '{}'", expr),
                "Brace lists look like parent/{a,b,c} — no nesting, no empty elements".into(),
            ],
            Self::UnboundPlaceholder { name, template } => vec![
                format!("Template '{}' uses {{{{{}}}}}", template, name),
                "Add the missing value to the unit's binding set".into(),
                "Placeholders are never defaulted to an empty string".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBlueprint(_)
            | Self::DuplicateUnit { .. }
            | Self::AbsolutePath { .. }
            | Self::MalformedPathExpr { .. } => ErrorCategory::Validation,
            Self::UnboundPlaceholder { .. } => ErrorCategory::Render,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Render,
    Internal,
}
