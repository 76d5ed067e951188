//! Stackgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stackgen
//! project scaffolding generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Blueprint, Unit, PathExpr, Binding)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackgen_core::{
//!     application::GenerateService,
//!     domain::Blueprint,
//! };
//!
//! # fn demo(blueprint: Blueprint, filesystem: Box<dyn stackgen_core::application::ports::Filesystem>) {
//! let service = GenerateService::new(filesystem);
//! service.generate(&blueprint, "./output".as_ref()).unwrap();
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub use error::{StackgenError, StackgenResult};
