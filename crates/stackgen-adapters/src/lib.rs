//! Infrastructure adapters for Stackgen.
//!
//! This crate implements the ports defined in `stackgen_core::application::ports`
//! and ships the built-in blueprint. It contains all external dependencies and
//! I/O operations.

pub mod blueprint;
pub mod filesystem;

// Re-export commonly used adapters
pub use blueprint::{default_blueprint, BlueprintSettings, BACKEND_SERVICES};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
