//! Argo Helper Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `argo-helper` repository bootstrapper, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        argo-helper-cli (CLI + TUI)      │
//! │     (Drives the ScaffoldUseCase port)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Renderer, Filesystem, Clock)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    argo-helper-adapters (Infrastructure)│
//! │ (InMemoryStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResolvedParameters, Template,          │
//! │  ManifestPlan)                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use argo_helper_core::{
//!     application::{ExecutionMode, ScaffoldService, ScaffoldUseCase},
//!     domain::{InitParameters, ResolvedParameters},
//! };
//!
//! let params = ResolvedParameters::Init(
//!     InitParameters::new("payments", "/srv/gitops/payments", true).unwrap(),
//! );
//!
//! // Adapters come from `argo-helper-adapters`.
//! let service = ScaffoldService::new(store, renderer, filesystem, clock)
//!     .with_mode(ExecutionMode::DryRun);
//! let outcome = service.run(&params).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExecutionMode, GenerationReport, PathResolver, ScaffoldOutcome, ScaffoldService,
        ScaffoldUseCase, TemplateService,
        ports::{Clock, Filesystem, ProgressEvent, ProgressReporter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        InitParameters, ManifestPlan, PlanEntry, RenderContext, ResolvedParameters,
        ResourceParameters, ResourceType, Template, TemplateName, Workflow,
    };
    pub use crate::error::{ArgoError, ArgoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
