//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, StackgenError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// A unit's directory or template pass failed. First error wins; artifacts
    /// already written by earlier units stay on disk.
    #[error("Generation failed for unit '{unit}': {source}")]
    UnitFailed {
        unit: String,
        #[source]
        source: Box<StackgenError>,
    },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Wrap an error with the name of the unit it occurred in.
    pub fn for_unit(unit: impl Into<String>, source: StackgenError) -> Self {
        Self::UnitFailed {
            unit: unit.into(),
            source: Box::new(source),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-run the generator once the cause is fixed — generation is idempotent".into(),
            ],
            Self::UnitFailed { unit, source } => {
                let mut out = vec![format!("Unit '{}' failed; earlier units were kept", unit)];
                out.extend(source.suggestions());
                out
            }
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::UnitFailed { source, .. } => source.category(),
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn unit_failed_carries_unit_name() {
        let inner = StackgenError::Domain(DomainError::UnboundPlaceholder {
            name: "port".into(),
            template: "package.json".into(),
        });
        let err = ApplicationError::for_unit("user-management", inner);
        assert!(err.to_string().contains("user-management"));
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn unit_failed_category_follows_cause() {
        let inner = StackgenError::Domain(DomainError::UnboundPlaceholder {
            name: "x".into(),
            template: "t".into(),
        });
        let err = ApplicationError::for_unit("a", inner);
        assert_eq!(err.category(), ErrorCategory::Render);
    }
}
