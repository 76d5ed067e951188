//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackgen-adapters` crate provides implementations.

use crate::error::StackgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir_all` is idempotent: an already-existing directory is a
///   no-op, never an error.
/// - `write_file` overwrites unconditionally and must be atomic from the
///   caller's point of view — a crash mid-write never leaves a truncated
///   file. The parent directory must already exist.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()>;

    /// Write content to a file, replacing any existing file at the path.
    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
