//! Application layer for Argo Helper.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldService, TemplateInfo, TemplateService};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Clock, ExecutionMode, Filesystem, GenerationReport, ProgressEvent, ProgressReporter,
    ScaffoldOutcome, ScaffoldUseCase, SilentReporter, TemplateRenderer, TemplateStore,
};

pub use error::ApplicationError;
pub use paths::PathResolver;
