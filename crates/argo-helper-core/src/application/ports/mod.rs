//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `argo-helper-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateStore`: Template catalog
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `Clock`: Creation date
//!   - `ProgressReporter`: Per-entry progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ScaffoldUseCase`: run a workflow for resolved parameters

pub mod input;
pub mod output;

pub use input::{ExecutionMode, GenerationReport, ScaffoldOutcome, ScaffoldUseCase};
pub use output::{
    Clock, Filesystem, ProgressEvent, ProgressReporter, SilentReporter, TemplateRenderer,
    TemplateStore,
};
