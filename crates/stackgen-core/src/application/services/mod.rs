//! Application services - use case implementations.

pub mod generate_service;

pub use generate_service::{GeneratePlan, GenerateReport, GenerateService};
