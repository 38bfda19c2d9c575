//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `argo-helper-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{RenderContext, Template, TemplateName};
use crate::error::ArgoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `argo_helper_adapters::filesystem::LocalFilesystem` (production)
/// - `argo_helper_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are absolute. Failures are reported as
/// `ApplicationError::FilesystemError` naming the path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ArgoResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ArgoResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `argo_helper_adapters::template_store::InMemoryStore` (built-in catalog)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a template by name.
    fn get(&self, name: TemplateName) -> ArgoResult<Template>;

    /// List all available templates, in catalog order.
    fn list(&self) -> ArgoResult<Vec<Template>>;

    /// Insert or replace a template.
    fn insert(&self, template: Template) -> ArgoResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `argo_helper_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one template to text.
    fn render(&self, template: &Template, context: &RenderContext) -> ArgoResult<String>;
}

/// Port for the creation date stamped into generated files.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// One step of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    DirectoryCreated(PathBuf),
    FileWritten(PathBuf),
}

impl ProgressEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryCreated(p) | Self::FileWritten(p) => p,
        }
    }
}

/// Port notified after each entry is created on disk.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _event: &ProgressEvent) {}
}
