//! Application layer - orchestration and use cases.
//!
//! This layer coordinates domain objects and drives the ports. It knows
//! nothing about concrete filesystems or the CLI; those live behind the
//! trait boundary in `ports` and in the `stackgen-adapters` crate.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::Filesystem;
pub use services::{GeneratePlan, GenerateReport, GenerateService};
