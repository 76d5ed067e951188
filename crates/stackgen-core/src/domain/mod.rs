//! Core domain layer for Stackgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: Blueprints are built once, never mutated

// Public API - what the world sees
pub mod binding;
pub mod blueprint;
pub mod common;
pub mod error;
pub mod path_expr;
pub mod template;

// Re-exports for convenience
pub use binding::Binding;
pub use blueprint::{Blueprint, DirectorySpec, Unit};
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use path_expr::PathExpr;
pub use template::{FileTemplate, TemplateSource};
