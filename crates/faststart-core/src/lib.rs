//! FastStart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the FastStart
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          faststart-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, StackService, Vcs...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StackRegistry, Prompt...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   faststart-adapters (Infrastructure)   │
//! │ (BuiltinRegistry, LocalFilesystem, Git) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (StackDefinition, profiles, generators) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use faststart_core::prelude::*;
//!
//! let options = ResolvedOptions::new("demo-app", StackId::JavaScript)
//!     .with_profile(ProfileId::Standard);
//!
//! // Injected adapters
//! let service = ScaffoldService::new(registry, filesystem, prompt);
//! match service.scaffold(&options).unwrap() {
//!     ScaffoldOutcome::Created(report) => println!("{}", report.project_path.display()),
//!     _ => {}
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldReport, ScaffoldService, StackInfo, StackService, VcsService,
        ports::{Filesystem, OverwritePrompt, RemoteRepository, StackRegistry, VersionControl},
    };
    pub use crate::domain::{
        PackageManager, ProfileId, ProjectName, ProjectStructure, ResolvedOptions,
        StackDefinition, StackId,
    };
    pub use crate::error::{FastStartError, FastStartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
